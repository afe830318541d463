//! Tiling constants and the component/section/quad resolution formula

use crate::io::error::{Result, invalid_parameter};

// Defaults mirror the terrain pipeline's usual patch layout: 2x2 components of
// one section, 63 quads per section, giving 127-sample tiles.
/// Default number of components per tile axis
pub const DEFAULT_COMPONENTS: usize = 2;
/// Default number of sections per component
pub const DEFAULT_SECTIONS: usize = 1;
/// Default number of quads per section
pub const DEFAULT_QUADS: usize = 63;

/// Extra sample added to every tile side
///
/// A tile of `n` quads needs `n + 1` vertices, so the last row and column of a
/// tile describe the same terrain edge as the first row and column of its
/// right and bottom neighbors. The edge stitcher relies on this to make seams
/// agree exactly.
pub const SHARED_EDGE_SAMPLES: usize = 1;

/// Smallest tile side for which left and top seams never overlap
pub const MIN_STITCH_TILE_SIZE: usize = 2;

// Output settings
/// Directory created beside the source image to hold tiles
pub const OUTPUT_DIRECTORY: &str = "tiles";
/// File name prefix for exported tiles
pub const TILE_FILE_PREFIX: &str = "tile";
/// File extension for exported tiles
pub const TILE_FILE_EXTENSION: &str = "raw";
/// Bytes per exported sample
pub const BYTES_PER_SAMPLE: usize = 2;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Resolution multipliers that determine the tile side length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilingConfig {
    /// Components per tile axis
    pub components: usize,
    /// Sections per component
    pub sections: usize,
    /// Quads per section
    pub quads: usize,
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self {
            components: DEFAULT_COMPONENTS,
            sections: DEFAULT_SECTIONS,
            quads: DEFAULT_QUADS,
        }
    }
}

impl TilingConfig {
    /// Create a configuration from its three multipliers
    pub const fn new(components: usize, sections: usize, quads: usize) -> Self {
        Self {
            components,
            sections,
            quads,
        }
    }

    /// Check that every multiplier is positive
    ///
    /// # Errors
    ///
    /// Returns an error if any multiplier is zero
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            ("components", self.components),
            ("sections", self.sections),
            ("quads", self.quads),
        ] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
        }
        Ok(())
    }

    /// Number of quads along one tile side
    ///
    /// # Errors
    ///
    /// Returns an error if a multiplier is zero or the product overflows
    pub fn quads_per_side(&self) -> Result<usize> {
        self.validate()?;
        self.components
            .checked_mul(self.sections)
            .and_then(|n| n.checked_mul(self.quads))
            .ok_or_else(|| {
                invalid_parameter(
                    "quads",
                    &self.quads,
                    &"components * sections * quads overflows",
                )
            })
    }

    /// Tile side length in samples: `components * sections * quads + 1`
    ///
    /// # Errors
    ///
    /// Returns an error if a multiplier is zero or the size overflows
    pub fn tile_size(&self) -> Result<usize> {
        self.quads_per_side()?
            .checked_add(SHARED_EDGE_SAMPLES)
            .ok_or_else(|| invalid_parameter("quads", &self.quads, &"tile size overflows"))
    }
}
