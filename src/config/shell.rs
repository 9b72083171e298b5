use crate::matcher::DEFAULT_CHARSET;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Startup settings for the interactive shell.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub image: PathBuf,
    /// TrueType/OpenType font used to measure glyph ink coverage.
    pub font: PathBuf,
    pub resolution: usize,
    pub charset: String,
    pub html_path: PathBuf,
    pub html_font: String,
    /// Maximum number of distinct images kept in the brightness cache.
    pub cache_images: Option<usize>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            image: PathBuf::from("cat.jpeg"),
            font: PathBuf::from("assets/DejaVuSansMono.ttf"),
            resolution: 128,
            charset: DEFAULT_CHARSET.iter().collect(),
            html_path: PathBuf::from("out.html"),
            html_font: "Courier New".to_string(),
            cache_images: None,
        }
    }
}

pub fn load_config(path: &Path) -> Result<ShellConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: ShellConfig =
            serde_json::from_str(r#"{ "resolution": 64, "charset": "@#. " }"#).expect("parse");
        assert_eq!(cfg.resolution, 64);
        assert_eq!(cfg.charset, "@#. ");
        assert_eq!(cfg.html_font, "Courier New");
        assert_eq!(cfg.image, PathBuf::from("cat.jpeg"));
    }
}
