#![doc = include_str!("../README.md")]

// Image pipeline
pub mod brightness;
pub mod image;
pub mod pad;
pub mod partition;

// Character matching
pub mod glyph;
pub mod matcher;

// Rendering and the outer surfaces built on it.
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod output;
pub mod render;
pub mod shell;

// --- High-level re-exports -------------------------------------------------

pub use crate::brightness::{BrightnessCache, BrightnessGrid};
pub use crate::error::AsciiArtError;
pub use crate::glyph::{FontRasterizer, GlyphBrightnessTable, GlyphRasterizer};
pub use crate::image::{PixelGrid, Rgb};
pub use crate::matcher::CharMatcher;
pub use crate::render::{render, render_with_report, CharGrid, ResolutionBounds};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use ascii_art::prelude::*;
///
/// # fn main() -> Result<(), AsciiArtError> {
/// let image = PixelGrid::from_fn(64, 32, |x, _| Rgb::gray((x * 4) as u8));
/// let mut glyphs = GlyphBrightnessTable::new(FontRasterizer::from_file(
///     std::path::Path::new("assets/DejaVuSansMono.ttf"),
/// )?);
/// let matcher = CharMatcher::new("@#*+=-:. ".chars(), &mut glyphs);
/// let mut cache = BrightnessCache::new();
///
/// let grid = render(&image, &matcher, 32, &mut cache)?;
/// println!("{grid}");
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::brightness::BrightnessCache;
    pub use crate::error::AsciiArtError;
    pub use crate::glyph::{FontRasterizer, GlyphBrightnessTable};
    pub use crate::image::{PixelGrid, Rgb};
    pub use crate::matcher::CharMatcher;
    pub use crate::render::{render, CharGrid};
}
