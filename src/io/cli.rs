//! Command-line interface for inspecting and tiling heightmaps

use crate::algorithm::executor::{RasterInfo, TilingExecutor, TilingSummary};
use crate::io::configuration::{DEFAULT_COMPONENTS, DEFAULT_QUADS, DEFAULT_SECTIONS, TilingConfig};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::io::raster::HeightRaster;
use crate::io::raw::ByteOrder;
use clap::Parser;
use clap::builder::TypedValueParser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "heightmap-tiler")]
#[command(
    author,
    version,
    about = "Split a heightmap into stitched raw 16-bit terrain tiles"
)]
/// Command-line arguments for the tiling tool
pub struct Cli {
    /// Filename of the heightmap to tile
    #[arg(short, long, value_name = "FILE")]
    pub filename: PathBuf,

    /// Tile the image into the tiles/ directory beside it
    #[arg(short, long)]
    pub tile: bool,

    /// Number of components per tile side, e.g. 2 for 2x2
    #[arg(short, long, default_value_t = DEFAULT_COMPONENTS,
          value_parser = clap::value_parser!(u32).range(1..).map(|v| v as usize))]
    pub components: usize,

    /// Number of sections per component, e.g. 1 for 1x1
    #[arg(short, long, default_value_t = DEFAULT_SECTIONS,
          value_parser = clap::value_parser!(u32).range(1..).map(|v| v as usize))]
    pub sections: usize,

    /// Number of quads per section, e.g. 7, 15, 31, 63, 127, 255
    #[arg(short, long, default_value_t = DEFAULT_QUADS,
          value_parser = clap::value_parser!(u32).range(1..).map(|v| v as usize))]
    pub quads: usize,

    /// Display image and tile-grid info
    #[arg(short, long)]
    pub info: bool,

    /// Byte order of exported samples
    #[arg(long, value_enum, default_value_t = ByteOrder::Little)]
    pub byte_order: ByteOrder,

    /// Suppress progress output
    #[arg(long)]
    pub quiet: bool,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Resolution multipliers from the arguments
    pub const fn tiling_config(&self) -> TilingConfig {
        TilingConfig::new(self.components, self.sections, self.quads)
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// What one invocation produced
#[derive(Debug, Default)]
pub struct ProcessOutcome {
    /// Info report, when info mode ran
    pub info: Option<RasterInfo>,
    /// Tiling summary, when tile mode ran
    pub tiling: Option<TilingSummary>,
}

/// Runs info and tile modes for parsed arguments
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run info mode then tile mode, as requested
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the image cannot be
    /// decoded, or any tile cannot be written
    pub fn process(&mut self) -> Result<ProcessOutcome> {
        let executor = TilingExecutor::new(self.cli.tiling_config(), self.cli.byte_order)?;
        let mut outcome = ProcessOutcome::default();

        if !self.cli.info && !self.cli.tile {
            log::warn!("Neither --info nor --tile given, nothing to do");
            return Ok(outcome);
        }

        // Decoded once and shared by both modes
        let raster = HeightRaster::load(&self.cli.filename)?;

        if self.cli.info {
            let info = executor.inspect(&raster)?;
            print_info(&info);
            outcome.info = Some(info);
        }

        if self.cli.tile {
            let summary = executor.tile_raster(
                &raster,
                &self.cli.filename,
                self.progress_manager.as_mut(),
            )?;
            outcome.tiling = Some(summary);
        }

        Ok(outcome)
    }
}

// Info mode is the user-facing report, so it goes to stdout
#[allow(clippy::print_stdout)]
fn print_info(info: &RasterInfo) {
    println!("{info}");
}
