use crate::ir::GroupId;
use crate::layout::SPREAD_RADIUS;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// How member group lists are compared when merging members into labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SignatureMode {
    /// Same ids in the same positions.
    #[default]
    Ordered,
    /// Same set of ids, in any order.
    Unordered,
}

impl SignatureMode {
    pub fn matches(self, a: &[GroupId], b: &[GroupId]) -> bool {
        match self {
            SignatureMode::Ordered => a == b,
            SignatureMode::Unordered => {
                a.iter().collect::<BTreeSet<_>>() == b.iter().collect::<BTreeSet<_>>()
            }
        }
    }
}

/// What recompute does with a group no label belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmptyGroupPolicy {
    /// Fail with `LayoutError::EmptyGroup`.
    #[default]
    Error,
    /// Leave the group without a circle.
    Skip,
    /// Zero-radius circle at the origin.
    Collapse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub spread_radius: f64,
    pub alpha: f64,
    pub circle_padding: f64,
    pub signature_mode: SignatureMode,
    pub empty_groups: EmptyGroupPolicy,
    pub fast_text_metrics: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spread_radius: SPREAD_RADIUS,
            alpha: 0.0,
            circle_padding: 5.0,
            signature_mode: SignatureMode::Ordered,
            empty_groups: EmptyGroupPolicy::Error,
            fast_text_metrics: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub background: String,
    pub show_titles: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
            margin: 20.0,
            background: "#FFFFFF".to_string(),
            show_titles: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        let theme = Theme::classic();
        let render = RenderConfig {
            background: theme.background.clone(),
            ..Default::default()
        };
        Self {
            theme,
            layout: LayoutConfig::default(),
            render,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_size: Option<NumberOrString>,
    font_weight: Option<String>,
    line_height: Option<f32>,
    label_color: Option<String>,
    circle_colors: Option<Vec<String>>,
    circle_opacity: Option<NumberOrString>,
    circle_stroke_width: Option<NumberOrString>,
    title_font_size: Option<NumberOrString>,
    title_color: Option<String>,
    background: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f32),
    String(String),
}

impl NumberOrString {
    fn as_f32(&self) -> Option<f32> {
        match self {
            NumberOrString::Number(val) => Some(*val),
            NumberOrString::String(val) => val.trim().trim_end_matches("px").parse::<f32>().ok(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct LayoutConfigFile {
    spread_radius: Option<f64>,
    alpha: Option<f64>,
    circle_padding: Option<f64>,
    signature_mode: Option<SignatureMode>,
    empty_groups: Option<EmptyGroupPolicy>,
    fast_text_metrics: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    width: Option<f32>,
    height: Option<f32>,
    margin: Option<f32>,
    show_titles: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    layout: Option<LayoutConfigFile>,
    render: Option<RenderConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = serde_json::from_str(contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        match theme_name {
            "modern" => config.theme = Theme::modern(),
            "classic" | "default" => config.theme = Theme::classic(),
            other => return Err(anyhow::anyhow!("unknown theme `{}`", other)),
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.font_size.as_ref().and_then(NumberOrString::as_f32) {
            config.theme.font_size = v;
        }
        if let Some(v) = vars.font_weight {
            config.theme.font_bold = matches!(v.trim(), "bold" | "bolder" | "700" | "800" | "900");
        }
        if let Some(v) = vars.line_height {
            config.theme.line_height = v;
        }
        if let Some(v) = vars.label_color {
            config.theme.label_color = v;
        }
        if let Some(v) = vars.circle_colors {
            config.theme.circle_palette = v;
        }
        if let Some(v) = vars.circle_opacity.as_ref().and_then(NumberOrString::as_f32) {
            config.theme.circle_fill_opacity = v.clamp(0.0, 1.0);
        }
        if let Some(v) = vars.circle_stroke_width.as_ref().and_then(NumberOrString::as_f32) {
            config.theme.circle_stroke_width = v;
        }
        if let Some(v) = vars.title_font_size.as_ref().and_then(NumberOrString::as_f32) {
            config.theme.title_font_size = v;
        }
        if let Some(v) = vars.title_color {
            config.theme.title_color = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
    }
    config.render.background = config.theme.background.clone();

    if let Some(layout) = parsed.layout {
        if let Some(v) = layout.spread_radius {
            config.layout.spread_radius = v;
        }
        if let Some(v) = layout.alpha {
            config.layout.alpha = v;
        }
        if let Some(v) = layout.circle_padding {
            config.layout.circle_padding = v;
        }
        if let Some(v) = layout.signature_mode {
            config.layout.signature_mode = v;
        }
        if let Some(v) = layout.empty_groups {
            config.layout.empty_groups = v;
        }
        if let Some(v) = layout.fast_text_metrics {
            config.layout.fast_text_metrics = v;
        }
    }

    if let Some(render) = parsed.render {
        if let Some(v) = render.width {
            config.render.width = v;
        }
        if let Some(v) = render.height {
            config.render.height = v;
        }
        if let Some(v) = render.margin {
            config.render.margin = v;
        }
        if let Some(v) = render.show_titles {
            config.render.show_titles = v;
        }
    }

    Ok(config)
}
