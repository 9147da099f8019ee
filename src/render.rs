use crate::config::RenderConfig;
use crate::layout::{Model, RenderSurface};
use crate::surface::TextSurface;
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

pub fn render_svg(model: &Model, surface: &TextSurface, theme: &Theme, config: &RenderConfig) -> String {
    let (min_x, min_y, max_x, max_y) = extents(model, surface, theme, config);
    let margin = f64::from(config.margin.max(0.0));
    let view_x = min_x - margin;
    let view_y = min_y - margin;
    let width = (max_x - min_x + margin * 2.0).max(1.0);
    let height = (max_y - min_y + margin * 2.0).max(1.0);

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.2}\" height=\"{height:.2}\" viewBox=\"{view_x:.2} {view_y:.2} {width:.2} {height:.2}\">",
    ));
    svg.push_str(&format!(
        "<rect x=\"{view_x:.2}\" y=\"{view_y:.2}\" width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        escape_xml(&config.background)
    ));

    for (idx, circle) in model.circles.iter().enumerate() {
        if circle.r <= 0.0 {
            continue;
        }
        let color = circle
            .group
            .attr_str("color")
            .unwrap_or_else(|| theme.circle_color(idx));
        svg.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\" fill-opacity=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            circle.x,
            circle.y,
            circle.r,
            escape_xml(color),
            theme.circle_fill_opacity,
            escape_xml(color),
            theme.circle_stroke_width
        ));
    }

    if config.show_titles {
        for circle in &model.circles {
            if circle.r <= 0.0 {
                continue;
            }
            let title_y = circle.y - circle.r - f64::from(theme.title_font_size) * 0.4;
            svg.push_str(&format!(
                "<text x=\"{:.2}\" y=\"{title_y:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
                circle.x,
                escape_xml(&theme.font_family),
                theme.title_font_size,
                escape_xml(&theme.title_color),
                escape_xml(circle.group.title())
            ));
        }
    }

    let weight = if theme.font_bold { "bold" } else { "normal" };
    for label in &model.labels {
        let Some(item) = label.visual.and_then(|id| surface.item(id)) else {
            continue;
        };
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"{weight}\" fill=\"{}\">{}</text>",
            item.position.x,
            item.position.y,
            escape_xml(&theme.font_family),
            theme.font_size,
            escape_xml(&theme.label_color),
            escape_xml(&item.content)
        ));
    }

    svg.push_str("</svg>");
    svg
}

// Union of circle extents, label boxes and title space.
fn extents(
    model: &Model,
    surface: &TextSurface,
    theme: &Theme,
    config: &RenderConfig,
) -> (f64, f64, f64, f64) {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    let title_space = if config.show_titles {
        f64::from(theme.title_font_size) * 1.4
    } else {
        0.0
    };

    for circle in model.circles.iter().filter(|circle| circle.r > 0.0) {
        min_x = min_x.min(circle.x - circle.r);
        max_x = max_x.max(circle.x + circle.r);
        min_y = min_y.min(circle.y - circle.r - title_space);
        max_y = max_y.max(circle.y + circle.r);
    }
    for label in &model.labels {
        let Some(bounds) = label.visual.and_then(|id| surface.bounds(id)) else {
            continue;
        };
        for corner in bounds.corners() {
            min_x = min_x.min(corner.x);
            max_x = max_x.max(corner.x);
            min_y = min_y.min(corner.y);
            max_y = max_y.max(corner.y);
        }
    }

    if !min_x.is_finite() {
        let w = f64::from(config.width);
        let h = f64::from(config.height);
        return (0.0, 0.0, w, h);
    }
    (min_x, min_y, max_x, max_y)
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    opt.default_size = usvg::Size::from_wh(render_cfg.width, render_cfg.height)
        .ok_or_else(|| anyhow::anyhow!("invalid render size"))?;

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

#[cfg(not(feature = "png"))]
pub fn write_output_png(_svg: &str, _output: &Path, _render_cfg: &RenderConfig) -> Result<()> {
    Err(anyhow::anyhow!("PNG output requires the `png` feature"))
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
