//! Tiling pipeline orchestration

/// Plan, extract, stitch and export in one run
pub mod executor;
