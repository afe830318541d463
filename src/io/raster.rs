//! Single-channel raster sources backed by decoded heightmap images

use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::spatial::tiles::read_region;
use image::{ColorType, ImageError, ImageReader};
use ndarray::Array2;
use std::path::Path;

/// Integer height sample as read from a raster
pub type Sample = i32;

/// Order in which a raster stores its rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    /// Storage row 0 is the visual top row
    #[default]
    TopDown,
    /// Storage row 0 is the visual bottom row
    BottomUp,
}

/// Axis-aligned pixel rectangle in visual (top-down) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// Left column
    pub x: usize,
    /// Top row
    pub y: usize,
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
}

impl PixelRect {
    /// Square rectangle with its top-left corner at `(x, y)`
    pub const fn square(x: usize, y: usize, size: usize) -> Self {
        Self {
            x,
            y,
            width: size,
            height: size,
        }
    }

    /// Whether the rectangle lies fully inside a `width` x `height` raster
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        let right = self.x.checked_add(self.width);
        let bottom = self.y.checked_add(self.height);
        matches!((right, bottom), (Some(r), Some(b)) if r <= width && b <= height)
    }

    /// Build the out-of-bounds error for this rectangle
    pub const fn out_of_bounds(&self, width: usize, height: usize) -> TilingError {
        TilingError::OutOfBounds {
            origin: (self.x, self.y),
            size: (self.width, self.height),
            raster: (width, height),
        }
    }
}

/// Read-only access to a rectangular grid of samples
///
/// Coordinates passed to [`RasterSource::get_pixel`] address storage rows.
/// Callers that need visual rows go through [`read_region`], which is the one
/// place that accounts for [`RasterSource::row_order`].
pub trait RasterSource {
    /// Width in pixels
    fn width(&self) -> usize;

    /// Height in pixels
    fn height(&self) -> usize;

    /// Storage row order
    fn row_order(&self) -> RowOrder {
        RowOrder::TopDown
    }

    /// Sample at column `x` of storage row `y`, or `None` outside the raster
    fn get_pixel(&self, x: usize, y: usize) -> Option<Sample>;
}

/// In-memory heightmap raster
///
/// Dropping the raster releases its samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightRaster {
    samples: Array2<Sample>,
    row_order: RowOrder,
}

impl HeightRaster {
    /// Wrap samples whose first row is the visual top row
    pub const fn from_rows(samples: Array2<Sample>) -> Self {
        Self {
            samples,
            row_order: RowOrder::TopDown,
        }
    }

    /// Wrap samples whose first row is the visual bottom row
    pub const fn from_bottom_up_rows(samples: Array2<Sample>) -> Self {
        Self {
            samples,
            row_order: RowOrder::BottomUp,
        }
    }

    /// Decode an image file into a 16-bit luminance raster
    ///
    /// Anything other than 16-bit grayscale is converted to 16-bit luminance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened or decoded
    /// - The decoded buffer does not match the reported dimensions
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let load_error = |source: ImageError| TilingError::ImageLoad {
            path: path_buf.clone(),
            source,
        };

        // Format comes from the file content, the extension is only a fallback
        let img = ImageReader::open(&path_buf)
            .and_then(ImageReader::with_guessed_format)
            .map_err(|e| load_error(ImageError::IoError(e)))?
            .decode()
            .map_err(load_error)?;

        let color = img.color();
        if color != ColorType::L16 {
            log::warn!(
                "'{}' is {color:?}, converting to 16-bit luminance",
                path_buf.display()
            );
        }

        let luma = img.to_luma16();
        let (width, height) = (luma.width() as usize, luma.height() as usize);
        let raw: Vec<Sample> = luma.into_raw().into_iter().map(Sample::from).collect();
        let samples = Array2::from_shape_vec((height, width), raw).map_err(|e| {
            invalid_parameter("image", &path_buf.display(), &e)
        })?;

        log::debug!("Loaded {width}x{height} raster from '{}'", path_buf.display());
        Ok(Self::from_rows(samples))
    }

    /// Copy a visual rectangle into a new top-down raster
    ///
    /// # Errors
    ///
    /// Returns an error if the rectangle is not fully inside the raster
    pub fn crop(&self, rect: PixelRect) -> Result<Self> {
        read_region(self, rect).map(Self::from_rows)
    }

    /// Underlying samples in storage order
    pub const fn samples(&self) -> &Array2<Sample> {
        &self.samples
    }
}

impl RasterSource for HeightRaster {
    fn width(&self) -> usize {
        self.samples.ncols()
    }

    fn height(&self) -> usize {
        self.samples.nrows()
    }

    fn row_order(&self) -> RowOrder {
        self.row_order
    }

    fn get_pixel(&self, x: usize, y: usize) -> Option<Sample> {
        self.samples.get((y, x)).copied()
    }
}
