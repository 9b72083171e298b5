//! I/O helpers for RGB images and JSON.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned [`PixelGrid`].
//! - `save_rgb_image`: write a [`PixelGrid`]; the format follows the extension.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{PixelGrid, Rgb};
use crate::error::{AsciiArtError, Result};
use image::RgbImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert it to 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<PixelGrid> {
    let img = image::open(path)
        .map_err(|e| decode_error(path, e.to_string()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img
        .pixels()
        .map(|px| Rgb::new(px.0[0], px.0[1], px.0[2]))
        .collect();
    PixelGrid::from_pixels(width, height, data)
        .ok_or_else(|| decode_error(path, format!("empty image {width}x{height}")))
}

/// Save a pixel grid as an RGB image.
pub fn save_rgb_image(grid: &PixelGrid, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let raw: Vec<u8> = grid
        .pixels()
        .iter()
        .flat_map(|px| [px.r, px.g, px.b])
        .collect();
    let out = RgbImage::from_raw(grid.width() as u32, grid.height() as u32, raw)
        .ok_or_else(|| encode_error(path, "failed to create image buffer".to_string()))?;
    out.save(path).map_err(|e| encode_error(path, e.to_string()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| encode_error(path, e.to_string()))?;
    fs::write(path, json).map_err(|e| encode_error(path, e.to_string()))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| encode_error(parent, e.to_string()))?;
        }
    }
    Ok(())
}

fn decode_error(path: &Path, reason: String) -> AsciiArtError {
    AsciiArtError::Decode {
        path: path.to_path_buf(),
        reason,
    }
}

pub(crate) fn encode_error(path: &Path, reason: String) -> AsciiArtError {
    AsciiArtError::Encode {
        path: path.to_path_buf(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_round_trip_preserves_pixels() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("grid.png");
        let grid = PixelGrid::from_fn(5, 3, |x, y| Rgb::new(x as u8 * 40, y as u8 * 80, 7));

        save_rgb_image(&grid, &path).expect("save png");
        let loaded = load_rgb_image(&path).expect("load png");
        assert_eq!(loaded, grid);
    }

    #[test]
    fn missing_file_is_decode_error() {
        let err = load_rgb_image(Path::new("does/not/exist.png")).unwrap_err();
        assert!(matches!(err, AsciiArtError::Decode { .. }));
    }
}
