//! Fixed-size monochrome glyph bitmaps and the rasterizer seam.
//!
//! A glyph is drawn into a `GLYPH_RESOLUTION × GLYPH_RESOLUTION` cell; its
//! raw brightness is the fraction of "on" pixels. [`FontRasterizer`] draws
//! glyphs from a TrueType/OpenType font with `fontdue`. Any
//! `Fn(char) -> GlyphBitmap` is a rasterizer too, which keeps tests free of
//! font files.
use crate::error::{AsciiArtError, Result};
use fontdue::{Font, FontSettings};
use std::fs;
use std::path::Path;

/// Edge length of the glyph cell in pixels.
pub const GLYPH_RESOLUTION: usize = 16;
const GLYPH_PIXELS: usize = GLYPH_RESOLUTION * GLYPH_RESOLUTION;
/// Font glyphs are drawn at this multiple of the cell and box-reduced.
pub const SUPERSAMPLE: usize = 4;
/// Minimum anti-aliasing coverage for a sample to count as ink.
const COVERAGE_THRESHOLD: u8 = 128;

#[derive(Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    bits: [bool; GLYPH_PIXELS],
}

impl GlyphBitmap {
    pub fn blank() -> Self {
        Self {
            bits: [false; GLYPH_PIXELS],
        }
    }

    pub fn from_fn(mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut out = Self::blank();
        for y in 0..GLYPH_RESOLUTION {
            for x in 0..GLYPH_RESOLUTION {
                out.bits[y * GLYPH_RESOLUTION + x] = f(x, y);
            }
        }
        out
    }

    /// Bitmap whose first `count` pixels (row-major) are on.
    pub fn with_ink(count: usize) -> Self {
        let mut out = Self::blank();
        for bit in out.bits.iter_mut().take(count) {
            *bit = true;
        }
        out
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.bits[y * GLYPH_RESOLUTION + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        self.bits[y * GLYPH_RESOLUTION + x] = on;
    }

    pub fn ink_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Fraction of on pixels, in `[0, 1]`.
    pub fn coverage(&self) -> f64 {
        self.ink_count() as f64 / GLYPH_PIXELS as f64
    }
}

impl std::fmt::Debug for GlyphBitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "GlyphBitmap({} on)", self.ink_count())?;
        for row in self.bits.chunks(GLYPH_RESOLUTION) {
            let line: String = row.iter().map(|&b| if b { '#' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Deterministic glyph renderer: the same character always yields the same bitmap.
pub trait GlyphRasterizer {
    fn rasterize(&self, c: char) -> GlyphBitmap;
}

impl<F> GlyphRasterizer for F
where
    F: Fn(char) -> GlyphBitmap,
{
    fn rasterize(&self, c: char) -> GlyphBitmap {
        self(c)
    }
}

/// Rasterizes glyphs from a font file into the fixed cell.
///
/// The font is scaled so that its ascent-to-descent span fills the cell
/// height. Each glyph is drawn at `SUPERSAMPLE` times that size, and a cell
/// pixel is ink when any sample of its `SUPERSAMPLE × SUPERSAMPLE` block has
/// at least half coverage. Strokes thinner than one cell pixel still leave
/// ink.
pub struct FontRasterizer {
    font: Font,
    /// Em size of the supersampled drawing.
    px: f32,
    /// Baseline row in supersampled coordinates.
    baseline: i32,
}

impl FontRasterizer {
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let font = Font::from_bytes(data, FontSettings::default())
            .map_err(|e| AsciiArtError::Font(e.to_string()))?;
        let (px, ascent) = cell_scale(&font, GLYPH_RESOLUTION as f32);
        let factor = SUPERSAMPLE as f32;
        Ok(Self {
            font,
            px: px * factor,
            baseline: (ascent * factor).round() as i32,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read(path)
            .map_err(|e| AsciiArtError::Font(format!("failed to read {}: {e}", path.display())))?;
        Self::from_bytes(data)
    }

    /// Em size in cell pixels, before supersampling.
    pub fn pixel_size(&self) -> f32 {
        self.px / SUPERSAMPLE as f32
    }
}

/// Em size that makes ascent minus descent equal `cell`, with the scaled
/// ascent. Fonts without line metrics are drawn at `cell` with the baseline
/// at 80% of the cell.
fn cell_scale(font: &Font, cell: f32) -> (f32, f32) {
    match font.horizontal_line_metrics(cell) {
        Some(m) if m.ascent - m.descent > 0.0 => {
            let px = cell * cell / (m.ascent - m.descent);
            (px, m.ascent * px / cell)
        }
        _ => (cell, cell * 0.8),
    }
}

impl GlyphRasterizer for FontRasterizer {
    fn rasterize(&self, c: char) -> GlyphBitmap {
        let (metrics, coverage) = self.font.rasterize(c, self.px);
        let mut out = GlyphBitmap::blank();
        if metrics.width == 0 {
            return out;
        }
        let span = (GLYPH_RESOLUTION * SUPERSAMPLE) as i32;
        // Rounding can push the outermost sample row or column past the
        // cell; nudge the bitmap back inside instead of clipping it.
        let top = fit_into(
            self.baseline - metrics.ymin - metrics.height as i32,
            metrics.height as i32,
            span,
        );
        let left = fit_into(metrics.xmin, metrics.width as i32, span);
        for (gy, row) in coverage.chunks(metrics.width).enumerate() {
            let y = top + gy as i32;
            if !(0..span).contains(&y) {
                continue;
            }
            for (gx, &value) in row.iter().enumerate() {
                let x = left + gx as i32;
                if value >= COVERAGE_THRESHOLD && (0..span).contains(&x) {
                    out.set(x as usize / SUPERSAMPLE, y as usize / SUPERSAMPLE, true);
                }
            }
        }
        out
    }
}

/// Shift `start` so that `[start, start + len)` lies in `[0, span)` when it fits.
fn fit_into(start: i32, len: i32, span: i32) -> i32 {
    if len > span {
        return start;
    }
    start.clamp(0, span - len)
}
