//! Per-tile luminance and a content-keyed memo of brightness grids.
//!
//! A [`BrightnessGrid`] holds one normalized luminance per tile, row-major,
//! for an `(image, resolution)` pair. [`BrightnessCache`] keys entries on the
//! image *value*: two content-equal images share one entry.
//!
//! The cache is unbounded by default. `with_image_limit` caps the number of
//! distinct images and evicts the one inserted first.
use crate::error::Result;
use crate::image::{ImageView, PixelGrid, LUMA_SCALE};
use crate::partition::partition;
use log::debug;
use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Row-major grid of tile brightness values in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct BrightnessGrid {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl BrightnessGrid {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.values[start..start + self.cols]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Mean relative luminance of all pixels in `tile`.
pub fn tile_brightness<I: ImageView>(tile: &I) -> f64 {
    let count = tile.pixel_count() as u64;
    tile.luma_sum() as f64 / (count * LUMA_SCALE) as f64
}

/// Partition `image` at `resolution` and compute every tile's brightness.
pub fn compute_brightness(image: &PixelGrid, resolution: usize) -> Result<BrightnessGrid> {
    let parts = partition(image, resolution)?;

    #[cfg(feature = "parallel")]
    let values: Vec<f64> = parts.tiles().par_iter().map(tile_brightness).collect();
    #[cfg(not(feature = "parallel"))]
    let values: Vec<f64> = parts.tiles().iter().map(tile_brightness).collect();

    Ok(BrightnessGrid {
        rows: parts.rows(),
        cols: parts.cols(),
        values,
    })
}

/// Memoizes [`BrightnessGrid`]s per `(image, resolution)`.
///
/// Each distinct image gets a sequence id on first insertion; grids are keyed
/// by `(id, resolution)`, so a repeat request hashes the pixel data once.
#[derive(Default)]
pub struct BrightnessCache {
    ids: HashMap<PixelGrid, u64>,
    grids: HashMap<(u64, usize), BrightnessGrid>,
    image_limit: Option<usize>,
    next_id: u64,
    computations: usize,
    hits: usize,
}

impl BrightnessCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` distinct images (each with all its resolutions).
    pub fn with_image_limit(limit: usize) -> Self {
        Self {
            image_limit: Some(limit.max(1)),
            ..Self::default()
        }
    }

    pub fn contains(&self, image: &PixelGrid, resolution: usize) -> bool {
        self.ids
            .get(image)
            .is_some_and(|&id| self.grids.contains_key(&(id, resolution)))
    }

    /// Return the cached grid for `(image, resolution)`, computing it on first use.
    pub fn get_or_compute(
        &mut self,
        image: &PixelGrid,
        resolution: usize,
    ) -> Result<&BrightnessGrid> {
        self.fetch(image, resolution).map(|(grid, _)| grid)
    }

    /// Like [`get_or_compute`](Self::get_or_compute), also telling whether the
    /// grid was already cached.
    pub fn fetch(
        &mut self,
        image: &PixelGrid,
        resolution: usize,
    ) -> Result<(&BrightnessGrid, bool)> {
        let id = self.ids.get(image).copied();
        if let Some(key) = id.map(|id| (id, resolution)) {
            if self.grids.contains_key(&key) {
                self.hits += 1;
                debug!(
                    "BrightnessCache hit {}x{} @ resolution {}",
                    image.width(),
                    image.height(),
                    resolution
                );
                return Ok((&self.grids[&key], true));
            }
        }

        let grid = compute_brightness(image, resolution)?;
        self.computations += 1;
        debug!(
            "BrightnessCache computed {}x{} tiles for {}x{} @ resolution {}",
            grid.cols,
            grid.rows,
            image.width(),
            image.height(),
            resolution
        );

        let id = match id {
            Some(id) => id,
            None => {
                self.evict_for_new_image();
                let id = self.next_id;
                self.next_id += 1;
                self.ids.insert(image.clone(), id);
                id
            }
        };
        Ok((self.grids.entry((id, resolution)).or_insert(grid), false))
    }

    fn evict_for_new_image(&mut self) {
        let Some(limit) = self.image_limit else {
            return;
        };
        while self.ids.len() >= limit {
            let Some(oldest) = self.ids.values().copied().min() else {
                return;
            };
            self.ids.retain(|_, id| *id != oldest);
            self.grids.retain(|&(id, _), _| id != oldest);
            debug!("BrightnessCache evicted image #{oldest}");
        }
    }

    /// Number of distinct images currently cached.
    pub fn image_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of grids actually computed (cache misses).
    pub fn computations(&self) -> usize {
        self.computations
    }

    pub fn hits(&self) -> usize {
        self.hits
    }
}
