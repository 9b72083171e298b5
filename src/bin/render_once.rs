use ascii_art::brightness::BrightnessCache;
use ascii_art::config::render::load_config;
use ascii_art::glyph::{FontRasterizer, GlyphBrightnessTable};
use ascii_art::image::io::{load_rgb_image, write_json_file};
use ascii_art::matcher::CharMatcher;
use ascii_art::output::{AsciiOutput, ConsoleOutput, HtmlOutput};
use ascii_art::pad::pad;
use ascii_art::render::{render_with_report, ResolutionBounds};
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let image = load_rgb_image(&config.input).map_err(|e| e.to_string())?;
    ResolutionBounds::for_image(&pad(&image))
        .check(config.resolution)
        .map_err(|e| e.to_string())?;

    let rasterizer = FontRasterizer::from_file(&config.font).map_err(|e| e.to_string())?;
    let mut glyphs = GlyphBrightnessTable::new(rasterizer);
    let matcher = CharMatcher::new(config.charset.chars(), &mut glyphs);
    let mut cache = BrightnessCache::new();

    let rendered = render_with_report(&image, &matcher, config.resolution, &mut cache)
        .map_err(|e| e.to_string())?;

    match &config.output.html {
        Some(path) => {
            HtmlOutput::new(path, &config.output.font_name)
                .out(&rendered.grid)
                .map_err(|e| e.to_string())?;
            println!(
                "Saved {}x{} characters to {}",
                rendered.grid.cols(),
                rendered.grid.rows(),
                path.display()
            );
        }
        None => ConsoleOutput.out(&rendered.grid).map_err(|e| e.to_string())?,
    }
    if let Some(path) = &config.output.report_json {
        write_json_file(path, &rendered.report).map_err(|e| e.to_string())?;
        println!("Saved render report to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: render_once <config.json>".to_string()
}
