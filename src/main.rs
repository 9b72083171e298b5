use ascii_art::config::shell::{load_config, ShellConfig};
use ascii_art::glyph::{FontRasterizer, GlyphBrightnessTable};
use ascii_art::image::io::load_rgb_image;
use ascii_art::shell::{Flow, Session};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config = match env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => ShellConfig::default(),
    };

    let image = load_rgb_image(&config.image).map_err(|e| e.to_string())?;
    let rasterizer = FontRasterizer::from_file(&config.font).map_err(|e| e.to_string())?;
    let mut session = Session::new(&image, GlyphBrightnessTable::new(rasterizer), &config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, ">>> ").map_err(|e| e.to_string())?;
        stdout.flush().map_err(|e| e.to_string())?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|e| format!("Failed to read input: {e}"))?;
        let flow = session
            .execute(&line, &mut stdout)
            .map_err(|e| format!("Failed to write output: {e}"))?;
        if flow == Flow::Exit {
            break;
        }
    }
    Ok(())
}
