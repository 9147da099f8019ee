use serde::{Deserialize, Serialize};

const CLASSIC_PALETTE: [&str; 8] = [
    "#E41A1C", "#377EB8", "#4DAF4A", "#984EA3", "#FF7F00", "#FFD92F", "#A65628", "#F781BF",
];

const MODERN_PALETTE: [&str; 8] = [
    "#6366F1", "#14B8A6", "#F59E0B", "#EC4899", "#0EA5E9", "#84CC16", "#EF4444", "#8B5CF6",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub font_bold: bool,
    /// Leading as a multiple of the font size; sets the label box height.
    pub line_height: f32,
    pub label_color: String,
    pub circle_palette: Vec<String>,
    pub circle_fill_opacity: f32,
    pub circle_stroke_width: f32,
    pub title_font_size: f32,
    pub title_color: String,
    pub background: String,
}

impl Theme {
    /// Bold monospace labels on translucent circles.
    pub fn classic() -> Self {
        Self {
            font_family: "\"Courier New\", Courier, monospace".to_string(),
            font_size: 25.0,
            font_bold: true,
            line_height: 1.2,
            label_color: "black".to_string(),
            circle_palette: CLASSIC_PALETTE.iter().map(|c| c.to_string()).collect(),
            circle_fill_opacity: 0.25,
            circle_stroke_width: 2.0,
            title_font_size: 18.0,
            title_color: "#333333".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }

    pub fn modern() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 16.0,
            font_bold: false,
            line_height: 1.2,
            label_color: "#1C2430".to_string(),
            circle_palette: MODERN_PALETTE.iter().map(|c| c.to_string()).collect(),
            circle_fill_opacity: 0.18,
            circle_stroke_width: 1.5,
            title_font_size: 14.0,
            title_color: "#475569".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }

    pub fn circle_color(&self, index: usize) -> &str {
        if self.circle_palette.is_empty() {
            return "#999999";
        }
        &self.circle_palette[index % self.circle_palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}
