use super::rgb::Rgb;

/// Row-major RGB raster, implemented by whole images and by their tiles.
pub trait ImageView {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn row(&self, y: usize) -> &[Rgb];

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }

    fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Sum of integer-weighted luma over every pixel, in `LUMA_SCALE` units.
    fn luma_sum(&self) -> u64
    where
        Self: Sized,
    {
        self.rows()
            .flat_map(|row| row.iter())
            .map(|px| px.weighted_luma())
            .sum()
    }
}

/// Top-to-bottom row iterator over an [`ImageView`].
pub struct Rows<'a, I: ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [Rgb];

    fn next(&mut self) -> Option<Self::Item> {
        let image = self.image;
        if self.y >= image.height() {
            return None;
        }
        self.y += 1;
        Some(image.row(self.y - 1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.image.height().saturating_sub(self.y);
        (left, Some(left))
    }
}
