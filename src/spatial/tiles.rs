//! Tile data model and extraction from a raster
//!
//! Extraction is where row orientation is normalized: whatever order a raster
//! stores its rows in, tile samples always have row 0 at the visual top.

use crate::io::error::Result;
use crate::io::raster::{PixelRect, RasterSource, RowOrder, Sample};
use crate::spatial::planner::TilePlacement;
use ndarray::{Array2, ArrayView1, ArrayViewMut1, Axis};

/// A square patch of height samples at a known grid position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    grid_x: usize,
    grid_y: usize,
    samples: Array2<Sample>,
}

impl Tile {
    /// Create a tile from samples already in top-down row-major order
    pub const fn new(grid_x: usize, grid_y: usize, samples: Array2<Sample>) -> Self {
        Self {
            grid_x,
            grid_y,
            samples,
        }
    }

    /// Copy the tile at `placement` out of a raster
    ///
    /// # Errors
    ///
    /// Returns an error if the tile rectangle is not fully inside the raster
    pub fn extract<R: RasterSource + ?Sized>(
        raster: &R,
        placement: &TilePlacement,
        tile_size: usize,
    ) -> Result<Self> {
        let rect = PixelRect::square(placement.origin_x, placement.origin_y, tile_size);
        let samples = read_region(raster, rect)?;
        Ok(Self::new(placement.grid_x, placement.grid_y, samples))
    }

    /// Column index among sibling tiles
    pub const fn grid_x(&self) -> usize {
        self.grid_x
    }

    /// Row index among sibling tiles
    pub const fn grid_y(&self) -> usize {
        self.grid_y
    }

    /// Side length in samples
    pub fn size(&self) -> usize {
        self.samples.nrows()
    }

    /// Samples in top-down row-major order
    pub const fn samples(&self) -> &Array2<Sample> {
        &self.samples
    }

    /// Sample at `row`, `col`
    pub fn sample(&self, row: usize, col: usize) -> Option<Sample> {
        self.samples.get((row, col)).copied()
    }

    /// Top row
    pub fn first_row(&self) -> ArrayView1<'_, Sample> {
        self.samples.row(0)
    }

    /// Bottom row
    pub fn last_row(&self) -> ArrayView1<'_, Sample> {
        self.samples.row(self.samples.nrows().saturating_sub(1))
    }

    /// Left column
    pub fn first_column(&self) -> ArrayView1<'_, Sample> {
        self.samples.column(0)
    }

    /// Right column
    pub fn last_column(&self) -> ArrayView1<'_, Sample> {
        self.samples.column(self.samples.ncols().saturating_sub(1))
    }

    pub(crate) fn first_row_mut(&mut self) -> ArrayViewMut1<'_, Sample> {
        self.samples.index_axis_mut(Axis(0), 0)
    }

    pub(crate) fn first_column_mut(&mut self) -> ArrayViewMut1<'_, Sample> {
        self.samples.index_axis_mut(Axis(1), 0)
    }

    /// Consume the tile, returning its samples
    pub fn into_samples(self) -> Array2<Sample> {
        self.samples
    }
}

/// Copy a visual rectangle out of a raster as top-down rows
///
/// # Errors
///
/// Returns an error if the rectangle is not fully inside the raster
pub fn read_region<R: RasterSource + ?Sized>(raster: &R, rect: PixelRect) -> Result<Array2<Sample>> {
    let (width, height) = (raster.width(), raster.height());
    if !rect.fits_within(width, height) {
        return Err(rect.out_of_bounds(width, height));
    }

    let row_order = raster.row_order();
    Ok(Array2::from_shape_fn(
        (rect.height, rect.width),
        |(row, col)| {
            let visual_y = rect.y + row;
            let storage_y = match row_order {
                RowOrder::TopDown => visual_y,
                RowOrder::BottomUp => height - 1 - visual_y,
            };
            raster.get_pixel(rect.x + col, storage_y).unwrap_or_default()
        },
    ))
}
