//! Heightmap tiling for streamed terrain patches
//!
//! Splits a large single-channel height image into square tiles sized from a
//! component/section/quad layout, stitches shared tile edges so terrain seams
//! stay continuous, and exports each tile as a headerless 16-bit raw file.

#![forbid(unsafe_code)]

/// Tiling pipeline orchestration
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Tile placement, extraction and edge stitching
pub mod spatial;

pub use io::error::{Result, TilingError};
