//! Tile placement over a raster
//!
//! Tiles are laid out on a fixed stride equal to the tile size, scanning
//! left-to-right then top-to-bottom. Only tiles that fit completely inside the
//! raster are planned; leftover strips along the right and bottom edges are
//! dropped.

use crate::io::error::{Result, invalid_parameter};

/// Position of one tile in the grid and in the source raster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilePlacement {
    /// Column index among sibling tiles
    pub grid_x: usize,
    /// Row index among sibling tiles
    pub grid_y: usize,
    /// Left pixel column in the raster
    pub origin_x: usize,
    /// Top pixel row in the raster
    pub origin_y: usize,
}

/// Number of tile columns and rows that fit in a raster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridDimensions {
    /// Tiles per row
    pub columns: usize,
    /// Tile rows
    pub rows: usize,
}

impl GridDimensions {
    /// Grid dimensions for a raster and tile size, using truncating division
    ///
    /// # Errors
    ///
    /// Returns an error if `tile_size` is zero
    pub fn for_raster(width: usize, height: usize, tile_size: usize) -> Result<Self> {
        if tile_size == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &tile_size,
                &"must be at least 1",
            ));
        }
        Ok(Self {
            columns: width / tile_size,
            rows: height / tile_size,
        })
    }

    /// Total number of tiles
    pub const fn tile_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Whether no tile fits
    pub const fn is_empty(&self) -> bool {
        self.tile_count() == 0
    }
}

/// Ordered placements for every tile that fits a raster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePlan {
    tile_size: usize,
    dimensions: GridDimensions,
    placements: Vec<TilePlacement>,
}

impl TilePlan {
    /// Plan all tiles of side `tile_size` that fit a `width` x `height` raster
    ///
    /// # Errors
    ///
    /// Returns an error if `tile_size` is zero
    pub fn new(width: usize, height: usize, tile_size: usize) -> Result<Self> {
        let dimensions = GridDimensions::for_raster(width, height, tile_size)?;

        let mut placements = Vec::with_capacity(dimensions.tile_count());
        let mut grid_y = 0;
        let mut origin_y = 0;
        while origin_y + tile_size <= height {
            let mut grid_x = 0;
            let mut origin_x = 0;
            while origin_x + tile_size <= width {
                placements.push(TilePlacement {
                    grid_x,
                    grid_y,
                    origin_x,
                    origin_y,
                });
                grid_x += 1;
                origin_x += tile_size;
            }
            grid_y += 1;
            origin_y += tile_size;
        }

        log::debug!(
            "Planned {} tiles ({}x{}) of size {tile_size} over {width}x{height} raster",
            placements.len(),
            dimensions.columns,
            dimensions.rows
        );

        Ok(Self {
            tile_size,
            dimensions,
            placements,
        })
    }

    /// Tile side length in samples
    pub const fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Grid dimensions of the plan
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Placements in row-major scan order
    pub fn placements(&self) -> &[TilePlacement] {
        &self.placements
    }

    /// Number of planned tiles
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether no tile fits
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}
