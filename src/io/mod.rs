//! Input/output operations, configuration and error handling

/// Command-line parsing and mode dispatch
pub mod cli;
/// Tiling constants and resolution configuration
pub mod configuration;
/// Error types and constructors
pub mod error;
/// Terminal logger setup
pub mod logging;
/// Progress bars for long-running stages
pub mod progress;
/// Raster sources and image decoding
pub mod raster;
/// Raw 16-bit tile export
pub mod raw;
