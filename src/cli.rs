use crate::config::load_config;
use crate::layout::build_model;
use crate::layout_dump::write_model_dump;
use crate::parser::parse_venn;
use crate::render::{render_svg, write_output_png, write_output_svg};
use crate::surface::TextSurface;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "vennr", version, about = "Lay out and render set-membership diagrams")]
pub struct Args {
    /// Input file (.json / .json5) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout for SVG and JSON if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme, themeVariables, layout, render)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Width used for empty diagrams and PNG rasterization
    #[arg(short = 'w', long = "width")]
    pub width: Option<f32>,

    /// Height used for empty diagrams and PNG rasterization
    #[arg(short = 'H', long = "height")]
    pub height: Option<f32>,

    /// Estimate label widths instead of loading system fonts
    #[arg(long = "fastText")]
    pub fast_text: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
    Json,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.render.width = width;
    }
    if let Some(height) = args.height {
        config.render.height = height;
    }
    if args.fast_text {
        config.layout.fast_text_metrics = true;
    }

    let input = read_input(args.input.as_deref())?;
    let data = parse_venn(&input)?;
    let mut surface = TextSurface::new(&config.theme, config.layout.fast_text_metrics);
    let model = build_model(&data, &mut surface, &config.layout)?;

    match args.output_format {
        OutputFormat::Svg => {
            let svg = render_svg(&model, &surface, &config.theme, &config.render);
            write_output_svg(&svg, args.output.as_deref())?;
        }
        OutputFormat::Png => {
            let output = ensure_output(&args.output, "png")?;
            let svg = render_svg(&model, &surface, &config.theme, &config.render);
            write_output_png(&svg, &output, &config.render)?;
        }
        OutputFormat::Json => {
            write_model_dump(args.output.as_deref(), &model, &surface)?;
        }
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path
        && path != Path::new("-")
    {
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from([
            "vennr",
            "-i",
            "data.json",
            "-e",
            "json",
            "--fastText",
            "-w",
            "640",
        ])
        .unwrap();
        assert_eq!(args.input, Some(PathBuf::from("data.json")));
        assert!(matches!(args.output_format, OutputFormat::Json));
        assert!(args.fast_text);
        assert_eq!(args.width, Some(640.0));
        assert_eq!(args.height, None);
    }

    #[test]
    fn png_needs_an_output_path() {
        assert!(ensure_output(&None, "png").is_err());
        assert_eq!(
            ensure_output(&Some(PathBuf::from("out.png")), "png").unwrap(),
            PathBuf::from("out.png")
        );
    }
}
