//! Owned RGB pixel grid in row-major layout (stride == width).
//!
//! `PixelGrid` is immutable once built and compares/hashes by full pixel
//! content, so two structurally identical images act as the same cache key.
use super::traits::ImageView;

/// `weighted_luma` of pure white.
pub const LUMA_SCALE: u64 = 10_000 * 255;

/// One 8-bit RGB sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Rec. 709 luminance scaled by `LUMA_SCALE`, exact in integers.
    #[inline]
    pub fn weighted_luma(self) -> u64 {
        2126 * self.r as u64 + 7152 * self.g as u64 + 722 * self.b as u64
    }

    /// Relative luminance in `[0, 1]`; black maps to exactly 0 and white to 1.
    #[inline]
    pub fn luminance(self) -> f64 {
        self.weighted_luma() as f64 / LUMA_SCALE as f64
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    data: Vec<Rgb>,
}

impl PixelGrid {
    /// Wrap row-major pixels. Returns `None` when a dimension is zero or the
    /// buffer length is not `width * height`.
    pub fn from_pixels(width: usize, height: usize, data: Vec<Rgb>) -> Option<Self> {
        if width == 0 || height == 0 || data.len() != width * height {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Grid of `width × height` copies of `color`.
    ///
    /// Panics if a dimension is zero.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        assert!(width > 0 && height > 0, "pixel grid must not be empty");
        Self {
            width,
            height,
            data: vec![color; width * height],
        }
    }

    /// Build a grid by evaluating `f(x, y)` for every pixel.
    ///
    /// Panics if a dimension is zero.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Rgb) -> Self {
        assert!(width > 0 && height > 0, "pixel grid must not be empty");
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.data[y * self.width + x]
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.data
    }

    /// Copy the rectangle at `(x0, y0)` of size `w × h` into a new grid.
    ///
    /// Panics if the rectangle is empty or leaves the grid.
    pub fn crop(&self, x0: usize, y0: usize, w: usize, h: usize) -> PixelGrid {
        assert!(w > 0 && h > 0, "crop must not be empty");
        assert!(
            x0 + w <= self.width && y0 + h <= self.height,
            "crop {w}x{h}@({x0},{y0}) outside {}x{}",
            self.width,
            self.height
        );
        let mut data = Vec::with_capacity(w * h);
        for y in y0..y0 + h {
            let start = y * self.width + x0;
            data.extend_from_slice(&self.data[start..start + w]);
        }
        PixelGrid {
            width: w,
            height: h,
            data,
        }
    }
}

impl ImageView for PixelGrid {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgb] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}
