use crate::layout::{Bounds, Point, RenderSurface, VisualId};
use crate::text_metrics;
use crate::theme::Theme;

/// Fraction of the leading that sits above the baseline of point text.
const BASELINE_RATIO: f64 = 0.75;
/// Per-character advance used when no font is measured, in ems.
const FALLBACK_ADVANCE: f64 = 0.6;

#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub content: String,
    pub position: Point,
    pub width: f64,
}

/// Headless text surface: measures label text with the theme font and keeps
/// the placed items so they can be drawn later.
#[derive(Debug, Clone)]
pub struct TextSurface {
    font_family: String,
    font_size: f64,
    bold: bool,
    leading: f64,
    fast_metrics: bool,
    items: Vec<TextItem>,
}

impl TextSurface {
    pub fn new(theme: &Theme, fast_metrics: bool) -> Self {
        let font_size = f64::from(theme.font_size.max(0.0));
        Self {
            font_family: theme.font_family.clone(),
            font_size,
            bold: theme.font_bold,
            leading: font_size * f64::from(theme.line_height),
            fast_metrics,
            items: Vec::new(),
        }
    }

    pub fn items(&self) -> &[TextItem] {
        &self.items
    }

    pub fn item(&self, id: VisualId) -> Option<&TextItem> {
        self.items.get(id.0)
    }

    fn text_width(&self, content: &str) -> f64 {
        let estimate = || content.chars().count() as f64 * self.font_size * FALLBACK_ADVANCE;
        if self.fast_metrics {
            return estimate();
        }
        text_metrics::measure_text_width(
            content,
            self.font_size as f32,
            &self.font_family,
            self.bold,
        )
        .map(f64::from)
        .unwrap_or_else(estimate)
    }
}

impl RenderSurface for TextSurface {
    fn place_text(
        &mut self,
        existing: Option<VisualId>,
        content: &str,
        position: Point,
    ) -> VisualId {
        if let Some(id) = existing
            && let Some(item) = self.items.get_mut(id.0)
        {
            item.position = position;
            return id;
        }
        let width = self.text_width(content);
        self.items.push(TextItem {
            content: content.to_string(),
            position,
            width,
        });
        VisualId(self.items.len() - 1)
    }

    fn bounds(&self, id: VisualId) -> Option<Bounds> {
        let item = self.items.get(id.0)?;
        let top = item.position.y - self.leading * BASELINE_RATIO;
        Some(Bounds::from_rect(
            item.position.x,
            top,
            item.width,
            self.leading,
        ))
    }
}
