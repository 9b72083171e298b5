use ascii_art::glyph::{GlyphBitmap, GlyphBrightnessTable};
use std::cell::Cell;
use std::rc::Rc;

/// Glyph table whose ink grows with the code point offset from `' '`.
pub fn ramp_table() -> GlyphBrightnessTable {
    GlyphBrightnessTable::new(|c: char| GlyphBitmap::with_ink(ramp_ink(c)))
}

pub fn ramp_ink(c: char) -> usize {
    (c as usize).saturating_sub(' ' as usize) * 2
}

/// Ramp table that also reports how often the rasterizer ran.
pub fn counting_table() -> (GlyphBrightnessTable, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    let table = GlyphBrightnessTable::new(move |c: char| {
        seen.set(seen.get() + 1);
        GlyphBitmap::with_ink(ramp_ink(c))
    });
    (table, calls)
}
