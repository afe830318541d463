//! Headerless 16-bit raw heightmap export

use crate::io::configuration::{
    BYTES_PER_SAMPLE, OUTPUT_DIRECTORY, TILE_FILE_EXTENSION, TILE_FILE_PREFIX,
};
use crate::io::error::{Result, file_system, invalid_parameter};
use crate::io::raster::Sample;
use crate::spatial::tiles::Tile;
use clap::ValueEnum;
use ndarray::Array2;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Byte order of exported samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ByteOrder {
    /// Least significant byte first
    #[default]
    Little,
    /// Most significant byte first
    Big,
}

impl ByteOrder {
    /// Encode one sample
    pub const fn encode(self, value: u16) -> [u8; 2] {
        match self {
            Self::Little => value.to_le_bytes(),
            Self::Big => value.to_be_bytes(),
        }
    }

    /// Decode one sample
    pub const fn decode(self, bytes: [u8; 2]) -> u16 {
        match self {
            Self::Little => u16::from_le_bytes(bytes),
            Self::Big => u16::from_be_bytes(bytes),
        }
    }
}

/// Clamp a height sample into the unsigned 16-bit range
pub fn to_u16(sample: Sample) -> u16 {
    num_traits::clamp(sample, 0, Sample::from(u16::MAX)) as u16
}

/// Directory that receives the tiles of `source`
pub fn output_directory(source: &Path) -> PathBuf {
    source
        .parent()
        .map_or_else(|| PathBuf::from(OUTPUT_DIRECTORY), |parent| parent.join(OUTPUT_DIRECTORY))
}

/// File name of the tile at `(grid_x, grid_y)`
pub fn tile_file_name(grid_x: usize, grid_y: usize) -> String {
    format!("{TILE_FILE_PREFIX}_x{grid_x}_y{grid_y}.{TILE_FILE_EXTENSION}")
}

/// Encode a tile's samples row-major
pub fn encode_tile(tile: &Tile, byte_order: ByteOrder) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(tile.samples().len() * BYTES_PER_SAMPLE);
    for &sample in tile.samples() {
        bytes.extend_from_slice(&byte_order.encode(to_u16(sample)));
    }
    bytes
}

/// Write a tile into `directory`, replacing any existing file
///
/// Returns the path written.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written
pub fn write_raw_tile(tile: &Tile, directory: &Path, byte_order: ByteOrder) -> Result<PathBuf> {
    let path = directory.join(tile_file_name(tile.grid_x(), tile.grid_y()));

    let file = File::create(&path).map_err(file_system(&path, "create tile"))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&encode_tile(tile, byte_order))
        .map_err(file_system(&path, "write tile"))?;
    writer.flush().map_err(file_system(&path, "flush tile"))?;

    log::trace!("Wrote {}", path.display());
    Ok(path)
}

/// Read a raw tile of side `tile_size` back into a sample grid
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file length is not `tile_size * tile_size * 2` bytes
pub fn read_raw_tile(path: &Path, tile_size: usize, byte_order: ByteOrder) -> Result<Array2<u16>> {
    let bytes = std::fs::read(path).map_err(file_system(path, "read tile"))?;
    let expected = tile_size * tile_size * BYTES_PER_SAMPLE;
    if bytes.len() != expected {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &format!("'{}' holds {} bytes, expected {expected}", path.display(), bytes.len()),
        ));
    }

    let values: Vec<u16> = bytes
        .chunks_exact(BYTES_PER_SAMPLE)
        .map(|pair| {
            pair.try_into()
                .map(|bytes| byte_order.decode(bytes))
                .unwrap_or_default()
        })
        .collect();

    Array2::from_shape_vec((tile_size, tile_size), values)
        .map_err(|e| invalid_parameter("tile_size", &tile_size, &e))
}
