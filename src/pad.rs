//! Power-of-two padding with a white border.
//!
//! Each dimension is rounded up to the smallest power of two that holds it
//! and the original content is placed at offset `(new - old) / 2` along that
//! axis. When the padding amount is odd the extra white row/column lands on
//! the far (bottom/right) side.
use crate::image::{PixelGrid, Rgb};
use std::borrow::Cow;

/// Fill colour for cells not covered by the source image.
pub const PAD_COLOR: Rgb = Rgb::WHITE;

/// Smallest power of two `>= n` (`n >= 1`).
#[inline]
pub fn padded_dimension(n: usize) -> usize {
    n.next_power_of_two()
}

/// Pad `grid` to power-of-two dimensions, centring the original content.
///
/// Borrows `grid` unchanged when both dimensions already are powers of two.
pub fn pad(grid: &PixelGrid) -> Cow<'_, PixelGrid> {
    let (w, h) = (grid.width(), grid.height());
    let (pw, ph) = (padded_dimension(w), padded_dimension(h));
    if pw == w && ph == h {
        return Cow::Borrowed(grid);
    }
    let dx = (pw - w) / 2;
    let dy = (ph - h) / 2;

    Cow::Owned(PixelGrid::from_fn(pw, ph, |x, y| {
        let inside = (dx..dx + w).contains(&x) && (dy..dy + h).contains(&y);
        if inside {
            grid.get(x - dx, y - dy)
        } else {
            PAD_COLOR
        }
    }))
}
