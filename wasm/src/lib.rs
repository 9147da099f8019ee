use serde::Deserialize;
use venn_layout::{RenderOptions, SignatureMode, render_with_options};
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VennRenderOptions {
    theme: Option<String>,
    font_family: Option<String>,
    font_size: Option<f32>,
    circle_padding: Option<f64>,
    unordered_signatures: Option<bool>,
    fast_text: Option<bool>,
}

fn build_render_options(options: VennRenderOptions) -> RenderOptions {
    let mut render_options = if options.theme.as_deref() == Some("modern") {
        RenderOptions::modern()
    } else {
        RenderOptions::classic()
    };

    if let Some(font_family) = options.font_family {
        render_options.theme.font_family = font_family;
    }
    if let Some(font_size) = options.font_size {
        render_options.theme.font_size = font_size;
    }
    if let Some(padding) = options.circle_padding {
        render_options.layout.circle_padding = padding;
    }
    if options.unordered_signatures == Some(true) {
        render_options.layout.signature_mode = SignatureMode::Unordered;
    }
    // No system fonts inside the browser sandbox.
    render_options.with_fast_text(options.fast_text.unwrap_or(true))
}

#[wasm_bindgen]
pub fn render_venn_svg(input: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<VennRenderOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        VennRenderOptions::default()
    };

    let render_options = build_render_options(options);
    render_with_options(input, render_options).map_err(|error| JsValue::from_str(&error.to_string()))
}
