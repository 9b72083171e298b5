use super::shell::ShellConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct RenderToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default = "default_font")]
    pub font: PathBuf,
    #[serde(default = "default_resolution")]
    pub resolution: usize,
    #[serde(default = "default_charset")]
    pub charset: String,
    pub output: RenderOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct RenderOutputConfig {
    pub html: Option<PathBuf>,
    #[serde(rename = "report_json")]
    pub report_json: Option<PathBuf>,
    #[serde(default = "default_font_name")]
    pub font_name: String,
}

fn default_font() -> PathBuf {
    ShellConfig::default().font
}

fn default_resolution() -> usize {
    ShellConfig::default().resolution
}

fn default_charset() -> String {
    ShellConfig::default().charset
}

fn default_font_name() -> String {
    ShellConfig::default().html_font
}

pub fn load_config(path: &Path) -> Result<RenderToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config() {
        let cfg: RenderToolConfig = serde_json::from_str(
            r#"{ "input": "cat.png", "output": { "html": "out/cat.html" } }"#,
        )
        .expect("parse");
        assert_eq!(cfg.input, PathBuf::from("cat.png"));
        assert_eq!(cfg.resolution, 128);
        assert_eq!(cfg.charset, "0123456789");
        assert_eq!(cfg.output.html, Some(PathBuf::from("out/cat.html")));
        assert!(cfg.output.report_json.is_none());
        assert_eq!(cfg.output.font_name, "Courier New");
    }
}
