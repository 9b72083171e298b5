//! Memo of raw glyph brightness shared by every matcher of a session.
//!
//! Glyph shapes never change, so an entry is computed at most once per
//! character and never invalidated, even when the character later leaves a
//! matcher's charset.
use super::raster::GlyphRasterizer;
use log::trace;
use std::collections::HashMap;

pub struct GlyphBrightnessTable {
    rasterizer: Box<dyn GlyphRasterizer>,
    raw: HashMap<char, f64>,
    rasterizations: usize,
}

impl GlyphBrightnessTable {
    pub fn new(rasterizer: impl GlyphRasterizer + 'static) -> Self {
        Self {
            rasterizer: Box::new(rasterizer),
            raw: HashMap::new(),
            rasterizations: 0,
        }
    }

    /// Fraction of ink pixels in the rasterized glyph of `c`.
    pub fn raw_brightness(&mut self, c: char) -> f64 {
        if let Some(&value) = self.raw.get(&c) {
            return value;
        }
        let value = self.rasterizer.rasterize(c).coverage();
        self.rasterizations += 1;
        trace!("glyph {c:?} raw brightness {value:.4}");
        self.raw.insert(c, value);
        value
    }

    /// Raw brightness of `c` if it has been computed already.
    pub fn known(&self, c: char) -> Option<f64> {
        self.raw.get(&c).copied()
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Number of times the rasterizer actually ran.
    pub fn rasterizations(&self) -> usize {
        self.rasterizations
    }
}

impl std::fmt::Debug for GlyphBrightnessTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphBrightnessTable")
            .field("entries", &self.raw.len())
            .field("rasterizations", &self.rasterizations)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::GlyphBitmap;

    #[test]
    fn each_character_is_rasterized_once() {
        let mut table =
            GlyphBrightnessTable::new(|c: char| GlyphBitmap::with_ink(c as usize - 'a' as usize));
        assert_eq!(table.raw_brightness('e'), 4.0 / 256.0);
        assert_eq!(table.raw_brightness('e'), 4.0 / 256.0);
        assert_eq!(table.raw_brightness('a'), 0.0);
        assert_eq!(table.rasterizations(), 2);
        assert_eq!(table.known('e'), Some(4.0 / 256.0));
        assert_eq!(table.known('z'), None);
        assert_eq!(table.len(), 2);
    }
}
