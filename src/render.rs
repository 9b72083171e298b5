//! End-to-end conversion of an image into a grid of characters.
//!
//! Pipeline
//! - Pad the image to power-of-two dimensions (white border).
//! - Fetch (or compute) the tile brightness grid for `(padded, resolution)`.
//! - Map every tile brightness to a character with [`CharMatcher::lookup`].
//!
//! Resolution bounds are the caller's responsibility; [`ResolutionBounds`]
//! computes the valid range `max(1, w/h) ..= w` for a padded image. The
//! pipeline itself only rejects resolutions that do not tile the image.
use crate::brightness::BrightnessCache;
use crate::diagnostics::{InputDescriptor, RenderReport, StageClock};
use crate::error::{AsciiArtError, Result};
use crate::image::PixelGrid;
use crate::matcher::CharMatcher;
use crate::pad::pad;
use log::debug;
use std::fmt;

/// Row-major grid of rendered characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharGrid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl CharGrid {
    /// Build from rows of equal, non-zero length.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Option<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 || rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        Some(Self {
            rows: rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> char {
        self.cells[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[char] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.cols.max(1))
    }

    /// One `String` per row.
    pub fn to_lines(&self) -> Vec<String> {
        self.iter_rows().map(|row| row.iter().collect()).collect()
    }
}

impl fmt::Display for CharGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

/// Valid column counts for an image: `max(1, w/h) ..= w`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolutionBounds {
    pub min: usize,
    pub max: usize,
}

impl ResolutionBounds {
    pub fn for_image(image: &PixelGrid) -> Self {
        Self {
            min: (image.width() / image.height()).max(1),
            max: image.width(),
        }
    }

    pub fn contains(&self, resolution: usize) -> bool {
        (self.min..=self.max).contains(&resolution)
    }

    pub fn check(&self, resolution: usize) -> Result<()> {
        if self.contains(resolution) {
            Ok(())
        } else {
            Err(AsciiArtError::ResolutionOutOfBounds {
                resolution,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Character grid together with its render report.
#[derive(Clone, Debug)]
pub struct RenderOutput {
    pub grid: CharGrid,
    pub report: RenderReport,
}

/// Render `image` at `resolution` columns using `matcher`.
pub fn render(
    image: &PixelGrid,
    matcher: &CharMatcher,
    resolution: usize,
    cache: &mut BrightnessCache,
) -> Result<CharGrid> {
    render_with_report(image, matcher, resolution, cache).map(|out| out.grid)
}

/// Same as [`render`], additionally reporting sizes and stage timings.
pub fn render_with_report(
    image: &PixelGrid,
    matcher: &CharMatcher,
    resolution: usize,
    cache: &mut BrightnessCache,
) -> Result<RenderOutput> {
    if matcher.is_empty() {
        return Err(AsciiArtError::EmptyCharset);
    }
    let mut clock = StageClock::start();

    let padded = pad(image);
    clock.lap("pad");

    let (brightness, brightness_cached) = cache.fetch(&padded, resolution)?;
    clock.lap("brightness");

    let cells = brightness
        .values()
        .iter()
        .map(|&b| matcher.lookup(b))
        .collect::<Result<Vec<char>>>()?;
    let grid = CharGrid {
        rows: brightness.rows(),
        cols: brightness.cols(),
        cells,
    };
    clock.lap("match");
    let timings = clock.finish();

    debug!(
        "rendered {}x{} image as {}x{} chars (cached={})",
        image.width(),
        image.height(),
        grid.cols,
        grid.rows,
        brightness_cached
    );

    let report = RenderReport {
        input: InputDescriptor {
            width: image.width(),
            height: image.height(),
            padded_width: padded.width(),
            padded_height: padded.height(),
        },
        resolution,
        rows: grid.rows,
        cols: grid.cols,
        charset: matcher.charset().into_iter().collect(),
        brightness_cached,
        timings,
    };
    Ok(RenderOutput { grid, report })
}
