//! Tiling pipeline: plan, extract, stitch, export
//!
//! The whole tile grid is held in memory between extraction and export since
//! stitching a tile needs its neighbors. Failures abort the remaining
//! pipeline; tiles already written stay on disk.

use crate::io::configuration::TilingConfig;
use crate::io::error::{Result, file_system};
use crate::io::progress::ProgressManager;
use crate::io::raster::{HeightRaster, RasterSource};
use crate::io::raw::{ByteOrder, output_directory, write_raw_tile};
use crate::spatial::grid::TileGrid;
use crate::spatial::planner::{GridDimensions, TilePlan};
use crate::spatial::stitch::{StitchReport, stitch_edges};
use std::fmt;
use std::path::{Path, PathBuf};

/// Raster and tile-grid facts reported by info mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterInfo {
    /// Raster width in pixels
    pub width: usize,
    /// Raster height in pixels
    pub height: usize,
    /// Resolution multipliers
    pub config: TilingConfig,
    /// Tile side length in samples
    pub tile_size: usize,
    /// Tiles that fit the raster
    pub dimensions: GridDimensions,
}

impl fmt::Display for RasterInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Height: {} Width: {}", self.height, self.width)?;
        writeln!(
            f,
            "Components: {} x Sections: {} x Quads: {} = Resolution: {}",
            self.config.components, self.config.sections, self.config.quads, self.tile_size
        )?;
        write!(
            f,
            "Tiles: {} x {} = {} total",
            self.dimensions.columns,
            self.dimensions.rows,
            self.dimensions.tile_count()
        )
    }
}

/// Result of a completed tiling run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilingSummary {
    /// Tile side length in samples
    pub tile_size: usize,
    /// Grid dimensions
    pub dimensions: GridDimensions,
    /// Stitching outcome
    pub stitch: StitchReport,
    /// Directory holding the tiles, `None` when no tile fit
    pub output_directory: Option<PathBuf>,
    /// Paths of written tiles in row-major order
    pub written: Vec<PathBuf>,
}

/// Runs the tiling pipeline for one configuration
#[derive(Debug, Clone, Copy)]
pub struct TilingExecutor {
    config: TilingConfig,
    tile_size: usize,
    byte_order: ByteOrder,
}

impl TilingExecutor {
    /// Create an executor, validating the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a multiplier is zero or the tile size overflows
    pub fn new(config: TilingConfig, byte_order: ByteOrder) -> Result<Self> {
        let tile_size = config.tile_size()?;
        Ok(Self {
            config,
            tile_size,
            byte_order,
        })
    }

    /// Tile side length in samples
    pub const fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Resolution multipliers
    pub const fn config(&self) -> TilingConfig {
        self.config
    }

    /// Describe a raster without writing anything
    ///
    /// # Errors
    ///
    /// Returns an error if the tile size is zero
    pub fn inspect<R: RasterSource + ?Sized>(&self, raster: &R) -> Result<RasterInfo> {
        let (width, height) = (raster.width(), raster.height());
        Ok(RasterInfo {
            width,
            height,
            config: self.config,
            tile_size: self.tile_size,
            dimensions: GridDimensions::for_raster(width, height, self.tile_size)?,
        })
    }

    /// Plan, extract and stitch every tile of a raster
    ///
    /// # Errors
    ///
    /// Returns an error if planning, extraction or stitching fails
    pub fn build_grid<R: RasterSource + ?Sized>(
        &self,
        raster: &R,
        mut progress: Option<&mut ProgressManager>,
    ) -> Result<(TileGrid, StitchReport)> {
        let plan = TilePlan::new(raster.width(), raster.height(), self.tile_size)?;

        if let Some(pm) = progress.as_deref_mut() {
            pm.start_stage("extract", plan.len());
        }
        let mut grid = TileGrid::extract_with(raster, &plan, |tile| {
            if let Some(pm) = progress.as_deref() {
                pm.advance(format!("tile ({}, {})", tile.grid_x(), tile.grid_y()));
            }
        })?;
        if let Some(pm) = progress.as_deref_mut() {
            pm.finish();
        }

        let report = stitch_edges(&mut grid)?;
        Ok((grid, report))
    }

    /// Write every tile of a grid into `directory`, creating it if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or a tile cannot be
    /// written; tiles written before the failure are kept
    pub fn export_grid(
        &self,
        grid: &TileGrid,
        directory: &Path,
        mut progress: Option<&mut ProgressManager>,
    ) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(directory).map_err(file_system(directory, "create directory"))?;

        if let Some(pm) = progress.as_deref_mut() {
            pm.start_stage("export", grid.len());
        }

        let mut written = Vec::with_capacity(grid.len());
        for tile in grid.tiles() {
            let path = write_raw_tile(tile, directory, self.byte_order)?;
            if let Some(pm) = progress.as_deref() {
                pm.advance(format!("tile ({}, {})", tile.grid_x(), tile.grid_y()));
            }
            written.push(path);
        }

        if let Some(pm) = progress.as_deref_mut() {
            pm.finish();
        }
        Ok(written)
    }

    /// Tile the heightmap at `source` into a `tiles` directory beside it
    ///
    /// Nothing is created on disk when the image cannot be decoded or when no
    /// tile fits.
    ///
    /// # Errors
    ///
    /// Returns an error if decoding, tiling or export fails
    pub fn run(
        &self,
        source: &Path,
        progress: Option<&mut ProgressManager>,
    ) -> Result<TilingSummary> {
        let raster = HeightRaster::load(source)?;
        self.tile_raster(&raster, source, progress)
    }

    /// Tile an already decoded raster into the `tiles` directory beside `source`
    ///
    /// `source` only names the output location; it is never read.
    ///
    /// # Errors
    ///
    /// Returns an error if tiling or export fails
    pub fn tile_raster<R: RasterSource + ?Sized>(
        &self,
        raster: &R,
        source: &Path,
        mut progress: Option<&mut ProgressManager>,
    ) -> Result<TilingSummary> {
        let (grid, stitch) = self.build_grid(raster, progress.as_deref_mut())?;

        let mut summary = TilingSummary {
            tile_size: self.tile_size,
            dimensions: grid.dimensions(),
            stitch,
            output_directory: None,
            written: Vec::new(),
        };

        if grid.is_empty() {
            log::warn!(
                "'{}' is smaller than one {}x{} tile, nothing to export",
                source.display(),
                self.tile_size,
                self.tile_size
            );
            return Ok(summary);
        }

        let directory = output_directory(source);
        summary.written = self.export_grid(&grid, &directory, progress)?;
        log::info!(
            "Wrote {} tiles of {}x{} to '{}' ({} seams, {} samples corrected)",
            summary.written.len(),
            self.tile_size,
            self.tile_size,
            directory.display(),
            summary.stitch.seams,
            summary.stitch.corrected_samples
        );
        summary.output_directory = Some(directory);

        Ok(summary)
    }
}
