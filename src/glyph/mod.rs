//! Glyph rasterization and the shared per-character brightness table.
pub mod raster;
pub mod table;

pub use raster::{FontRasterizer, GlyphBitmap, GlyphRasterizer, GLYPH_RESOLUTION, SUPERSAMPLE};
pub use table::GlyphBrightnessTable;
