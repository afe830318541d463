//! Spatial data structures for tiling
//!
//! This module contains:
//! - Tile placement planning
//! - The tile data model and extraction
//! - The index-addressed tile grid
//! - Edge stitching between neighbors

/// Index-addressed tile container
pub mod grid;
/// Tile placement over a raster
pub mod planner;
/// Seam reconciliation between adjacent tiles
pub mod stitch;
/// Tile data model and extraction
pub mod tiles;

pub use grid::TileGrid;
pub use tiles::Tile;
