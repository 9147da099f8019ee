#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod parser;
pub mod render;
pub mod surface;
pub mod text_metrics;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, EmptyGroupPolicy, LayoutConfig, RenderConfig, SignatureMode};
pub use ir::{Group, GroupId, Member, VennData};
pub use layout::{
    Bounds, Circle, Label, LayoutError, Model, Point, RenderSurface, VisualId, build_model,
    distributed_points, recompute, smallest_enclosing_circle, snapshot,
};
pub use parser::parse_venn;
pub use render::render_svg;
pub use surface::TextSurface;
pub use theme::Theme;

/// Everything needed for a one-shot input -> SVG render.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

impl RenderOptions {
    pub fn classic() -> Self {
        Self::default()
    }

    pub fn modern() -> Self {
        Self {
            theme: Theme::modern(),
            ..Self::default()
        }
    }

    pub fn with_fast_text(mut self, fast: bool) -> Self {
        self.layout.fast_text_metrics = fast;
        self
    }
}

impl From<Config> for RenderOptions {
    fn from(config: Config) -> Self {
        Self {
            theme: config.theme,
            layout: config.layout,
            render: config.render,
        }
    }
}

/// Lays out and draws the membership diagram described by `input` (JSON/JSON5).
pub fn render_with_options(input: &str, options: RenderOptions) -> anyhow::Result<String> {
    let data = parse_venn(input)?;
    let mut surface = TextSurface::new(&options.theme, options.layout.fast_text_metrics);
    let model = build_model(&data, &mut surface, &options.layout)?;
    Ok(render_svg(&model, &surface, &options.theme, &options.render))
}
