//! Split an image into a grid of equally sized square tiles.
//!
//! `resolution` is the number of tile columns; the tile edge is
//! `width / resolution` and the number of rows follows from the height.
//! Tiles are stored row-major without overlap or gaps.
use crate::error::{AsciiArtError, Result};
use crate::image::PixelGrid;

/// Validated tile geometry for a `(width, height, resolution)` triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileLayout {
    pub rows: usize,
    pub cols: usize,
    pub sub_size: usize,
}

impl TileLayout {
    /// Check that `resolution` tiles the `width × height` image exactly.
    pub fn new(width: usize, height: usize, resolution: usize) -> Result<Self> {
        if resolution == 0 || resolution > width || width % resolution != 0 {
            return Err(AsciiArtError::InvalidResolution { resolution, width });
        }
        let sub_size = width / resolution;
        if height % sub_size != 0 {
            return Err(AsciiArtError::UnevenHeight { height, sub_size });
        }
        Ok(Self {
            rows: height / sub_size,
            cols: resolution,
            sub_size,
        })
    }

    pub fn tile_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Top-left pixel of tile `(row, col)`.
    #[inline]
    pub fn origin(&self, row: usize, col: usize) -> (usize, usize) {
        (col * self.sub_size, row * self.sub_size)
    }
}

/// Tiles of one image at one resolution.
#[derive(Clone, Debug)]
pub struct Partition {
    layout: TileLayout,
    tiles: Vec<PixelGrid>,
}

impl Partition {
    pub fn layout(&self) -> TileLayout {
        self.layout
    }

    pub fn rows(&self) -> usize {
        self.layout.rows
    }

    pub fn cols(&self) -> usize {
        self.layout.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&PixelGrid> {
        if row >= self.layout.rows || col >= self.layout.cols {
            return None;
        }
        self.tiles.get(row * self.layout.cols + col)
    }

    /// Tiles in row-major scan order.
    pub fn tiles(&self) -> &[PixelGrid] {
        &self.tiles
    }

    /// Consume into one `Vec` per tile row.
    pub fn into_rows(self) -> Vec<Vec<PixelGrid>> {
        let cols = self.layout.cols;
        let mut rows = Vec::with_capacity(self.layout.rows);
        let mut iter = self.tiles.into_iter();
        for _ in 0..self.layout.rows {
            rows.push(iter.by_ref().take(cols).collect());
        }
        rows
    }
}

/// Split `grid` into `rows × resolution` square tiles.
pub fn partition(grid: &PixelGrid, resolution: usize) -> Result<Partition> {
    let layout = TileLayout::new(grid.width(), grid.height(), resolution)?;
    let mut tiles = Vec::with_capacity(layout.tile_count());
    for row in 0..layout.rows {
        for col in 0..layout.cols {
            let (x0, y0) = layout.origin(row, col);
            tiles.push(grid.crop(x0, y0, layout.sub_size, layout.sub_size));
        }
    }
    Ok(Partition { layout, tiles })
}
