//! Brightness-to-character matching over an editable charset.
//!
//! Every character carries a raw brightness (glyph ink coverage, taken from
//! a shared [`GlyphBrightnessTable`]) and a normalized brightness rescaled to
//! `[0, 1]` against the *current* charset's minimum and maximum. Any
//! membership change re-normalizes the whole set and rebuilds the
//! [`BrightnessIndex`], so one character may map to different values in
//! different matchers or after edits.
//!
//! When all live characters share one raw brightness (in particular, a
//! single-character set) every normalized value is `0.0`.
//!
//! Lookup rules
//! - An exact normalized match returns the smallest code point at that value.
//! - Otherwise the closest value wins; equally distant values resolve to the
//!   one whose smallest character is lower. The smallest character at the
//!   winning value is returned.
//! - An empty charset is an error, never a default character.
mod index;

pub use index::{BrightnessIndex, BrightnessKey};

use crate::error::{AsciiArtError, Result};
use crate::glyph::GlyphBrightnessTable;
use log::debug;
use std::collections::BTreeMap;

/// Characters `'0'..='9'`, the default charset.
pub const DEFAULT_CHARSET: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

#[derive(Clone, Debug, Default)]
pub struct CharMatcher {
    raw: BTreeMap<char, f64>,
    normalized: BTreeMap<char, f64>,
    index: BrightnessIndex,
}

impl CharMatcher {
    /// Build a matcher for `chars` (duplicates are ignored, may be empty).
    pub fn new(chars: impl IntoIterator<Item = char>, glyphs: &mut GlyphBrightnessTable) -> Self {
        let raw = chars
            .into_iter()
            .map(|c| (c, glyphs.raw_brightness(c)))
            .collect();
        let mut matcher = Self {
            raw,
            ..Self::default()
        };
        matcher.rebuild();
        matcher
    }

    /// Insert `c`; returns `false` when it was already present.
    pub fn add(&mut self, c: char, glyphs: &mut GlyphBrightnessTable) -> bool {
        if self.raw.contains_key(&c) {
            return false;
        }
        self.raw.insert(c, glyphs.raw_brightness(c));
        self.rebuild();
        true
    }

    /// Remove `c`; returns `false` when it was absent.
    pub fn remove(&mut self, c: char) -> bool {
        if self.raw.remove(&c).is_none() {
            return false;
        }
        self.rebuild();
        true
    }

    /// Live characters in ascending code-point order.
    pub fn charset(&self) -> Vec<char> {
        self.raw.keys().copied().collect()
    }

    pub fn contains(&self, c: char) -> bool {
        self.raw.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Normalized brightness of `c` relative to the live set.
    pub fn normalized_brightness(&self, c: char) -> Option<f64> {
        self.normalized.get(&c).copied()
    }

    /// Best-matching character for a tile brightness.
    pub fn lookup(&self, brightness: f64) -> Result<char> {
        if !brightness.is_finite() {
            return Err(AsciiArtError::NonFiniteBrightness(brightness));
        }
        self.index
            .nearest(brightness)
            .ok_or(AsciiArtError::EmptyCharset)
    }

    fn rebuild(&mut self) {
        let (min, max) = self
            .raw
            .values()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let span = max - min;
        self.normalized = self
            .raw
            .iter()
            .map(|(&c, &v)| {
                let n = if span > 0.0 { (v - min) / span } else { 0.0 };
                (c, n)
            })
            .collect();
        self.index = BrightnessIndex::build(self.normalized.iter());
        debug!(
            "charset rebuilt: {} chars, {} brightness levels",
            self.raw.len(),
            self.index.len()
        );
    }
}
