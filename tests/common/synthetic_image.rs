use ascii_art::image::{PixelGrid, Rgb};

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard(width: usize, height: usize, cell: usize) -> PixelGrid {
    assert!(cell > 0, "cell size must be positive");
    PixelGrid::from_fn(width, height, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 {
            Rgb::BLACK
        } else {
            Rgb::WHITE
        }
    })
}

/// Horizontal gray ramp from black (left) to white (right).
pub fn horizontal_ramp(width: usize, height: usize) -> PixelGrid {
    PixelGrid::from_fn(width, height, |x, _| {
        let v = if width > 1 { x * 255 / (width - 1) } else { 0 };
        Rgb::gray(v as u8)
    })
}

/// Pseudo-random colours from a fixed linear congruential sequence.
pub fn noise(width: usize, height: usize, seed: u32) -> PixelGrid {
    let mut state = seed;
    PixelGrid::from_fn(width, height, |_, _| {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let [r, g, b, _] = state.to_le_bytes();
        Rgb::new(r, g, b)
    })
}
