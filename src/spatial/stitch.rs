//! Edge stitching between adjacent tiles
//!
//! Each tile takes its left column from the last column of its left neighbor
//! and its top row from the last row of its top neighbor. The neighbor is
//! always authoritative: mismatching samples are overwritten, never blended,
//! so exported heights stay exact source values.
//!
//! Tiles are visited once in row-major order. Both neighbors of a tile precede
//! it in that order and are already final when it is visited, so the shared
//! corner sample agrees with both seams and a second pass changes nothing.

use crate::io::configuration::MIN_STITCH_TILE_SIZE;
use crate::io::error::{Result, invalid_parameter};
use crate::io::raster::Sample;
use crate::spatial::grid::TileGrid;
use ndarray::{ArrayView1, ArrayViewMut1};

/// Outcome of a stitching pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StitchReport {
    /// Number of tile edges reconciled with a neighbor
    pub seams: usize,
    /// Number of samples whose value was replaced by the neighbor's
    pub corrected_samples: usize,
}

/// Reconcile every tile's left and top edge with its neighbors
///
/// # Errors
///
/// Returns an error if the grid has more than one tile and tiles are smaller
/// than two samples, where a tile's left column and top row would overlap
/// entirely and the two seams could not both hold
pub fn stitch_edges(grid: &mut TileGrid) -> Result<StitchReport> {
    let columns = grid.dimensions().columns;
    let tile_size = grid.tile_size();
    if grid.len() > 1 && tile_size < MIN_STITCH_TILE_SIZE {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &format!("stitching needs tiles of at least {MIN_STITCH_TILE_SIZE} samples"),
        ));
    }

    let mut report = StitchReport::default();
    let tiles = grid.tiles_mut();

    for index in 0..tiles.len() {
        let (before, rest) = tiles.split_at_mut(index);
        let Some(tile) = rest.first_mut() else {
            break;
        };

        if tile.grid_x() > 0 {
            if let Some(left) = index.checked_sub(1).and_then(|i| before.get(i)) {
                report.corrected_samples += copy_edge(left.last_column(), tile.first_column_mut());
                report.seams += 1;
            }
        }

        if tile.grid_y() > 0 {
            if let Some(top) = index.checked_sub(columns).and_then(|i| before.get(i)) {
                report.corrected_samples += copy_edge(top.last_row(), tile.first_row_mut());
                report.seams += 1;
            }
        }
    }

    log::debug!(
        "Stitched {} seams, corrected {} samples",
        report.seams,
        report.corrected_samples
    );

    Ok(report)
}

/// Count samples where a tile's left or top edge disagrees with its neighbor
pub fn count_seam_mismatches(grid: &TileGrid) -> usize {
    let mut mismatches = 0;
    for tile in grid.tiles() {
        let (gx, gy) = (tile.grid_x(), tile.grid_y());

        if let Some(left) = gx.checked_sub(1).and_then(|x| grid.get(x, gy)) {
            mismatches += count_differences(left.last_column(), tile.first_column());
        }
        if let Some(top) = gy.checked_sub(1).and_then(|y| grid.get(gx, y)) {
            mismatches += count_differences(top.last_row(), tile.first_row());
        }
    }
    mismatches
}

fn copy_edge(source: ArrayView1<'_, Sample>, mut target: ArrayViewMut1<'_, Sample>) -> usize {
    let mut corrected = 0;
    for (dst, &src) in target.iter_mut().zip(source.iter()) {
        if *dst != src {
            *dst = src;
            corrected += 1;
        }
    }
    corrected
}

fn count_differences(a: ArrayView1<'_, Sample>, b: ArrayView1<'_, Sample>) -> usize {
    a.iter().zip(b.iter()).filter(|(x, y)| x != y).count()
}
