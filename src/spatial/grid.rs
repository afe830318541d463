//! Index-addressed container owning every tile of a grid
//!
//! Tiles are stored row-major, so the tile at `(grid_x, grid_y)` lives at
//! `grid_y * columns + grid_x`. Neighbors are found by index arithmetic and
//! never by reference, which keeps ownership a flat `Vec`.

use crate::io::error::{Result, invalid_grid};
use crate::io::raster::RasterSource;
use crate::spatial::planner::{GridDimensions, TilePlan};
use crate::spatial::tiles::Tile;

/// All tiles of one raster, addressable by grid coordinate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    tiles: Vec<Tile>,
    dimensions: GridDimensions,
    tile_size: usize,
}

impl TileGrid {
    /// Extract every planned tile from a raster
    ///
    /// # Errors
    ///
    /// Returns an error if a planned tile does not fit the raster
    pub fn extract<R: RasterSource + ?Sized>(raster: &R, plan: &TilePlan) -> Result<Self> {
        Self::extract_with(raster, plan, |_| {})
    }

    /// Extract every planned tile, calling `on_tile` after each one
    ///
    /// # Errors
    ///
    /// Returns an error if a planned tile does not fit the raster
    pub fn extract_with<R, F>(raster: &R, plan: &TilePlan, mut on_tile: F) -> Result<Self>
    where
        R: RasterSource + ?Sized,
        F: FnMut(&Tile),
    {
        let mut tiles = Vec::with_capacity(plan.len());
        for placement in plan.placements() {
            let tile = Tile::extract(raster, placement, plan.tile_size())?;
            on_tile(&tile);
            tiles.push(tile);
        }
        Self::from_tiles(tiles, plan.dimensions(), plan.tile_size())
    }

    /// Assemble a grid from tiles already in row-major order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tile count does not match the dimensions
    /// - A tile's grid coordinate does not match its position
    /// - A tile is not `tile_size` x `tile_size`
    pub fn from_tiles(
        tiles: Vec<Tile>,
        dimensions: GridDimensions,
        tile_size: usize,
    ) -> Result<Self> {
        if tiles.len() != dimensions.tile_count() {
            return Err(invalid_grid(&format!(
                "expected {} tiles for a {}x{} grid, got {}",
                dimensions.tile_count(),
                dimensions.columns,
                dimensions.rows,
                tiles.len()
            )));
        }

        for (index, tile) in tiles.iter().enumerate() {
            let expected = (index % dimensions.columns, index / dimensions.columns);
            if (tile.grid_x(), tile.grid_y()) != expected {
                return Err(invalid_grid(&format!(
                    "tile at index {index} has coordinate ({}, {}), expected ({}, {})",
                    tile.grid_x(),
                    tile.grid_y(),
                    expected.0,
                    expected.1
                )));
            }
            if tile.samples().dim() != (tile_size, tile_size) {
                let (rows, cols) = tile.samples().dim();
                return Err(invalid_grid(&format!(
                    "tile ({}, {}) is {cols}x{rows}, expected {tile_size}x{tile_size}",
                    tile.grid_x(),
                    tile.grid_y()
                )));
            }
        }

        Ok(Self {
            tiles,
            dimensions,
            tile_size,
        })
    }

    /// Grid dimensions
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Tile side length in samples
    pub const fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the grid holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Row-major index of a grid coordinate, if inside the grid
    pub const fn index_of(&self, grid_x: usize, grid_y: usize) -> Option<usize> {
        if grid_x < self.dimensions.columns && grid_y < self.dimensions.rows {
            Some(grid_y * self.dimensions.columns + grid_x)
        } else {
            None
        }
    }

    /// Tile at a grid coordinate
    pub fn get(&self, grid_x: usize, grid_y: usize) -> Option<&Tile> {
        self.index_of(grid_x, grid_y)
            .and_then(|index| self.tiles.get(index))
    }

    /// Tiles in row-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    /// Consume the grid, returning its tiles in row-major order
    pub fn into_tiles(self) -> Vec<Tile> {
        self.tiles
    }
}
