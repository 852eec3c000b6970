//! Resolution descriptors and lookup over a device's supported-resolution list.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single capture resolution supported by a camera device.
///
/// The pixel and byte counts are computed once at construction and cached, so
/// a descriptor is always internally consistent. Descriptors are plain values:
/// cheap to copy, never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CameraResolution {
    width: u32,
    height: u32,
    byte_per_pixel: u32,
    num_of_pixels: u64,
    total_byte_size: u64,
}

impl CameraResolution {
    /// Create a descriptor from width, height and bytes per pixel.
    ///
    /// Inputs are stored verbatim; zero dimensions are accepted and only
    /// meaningful through [`CameraResolution::is_empty`]. Construction is
    /// total: the derived products saturate at `u64::MAX` rather than panic,
    /// so every type-valid input yields a descriptor.
    pub fn new(width: u32, height: u32, byte_per_pixel: u32) -> Self {
        let num_of_pixels = u64::from(width) * u64::from(height);
        let total_byte_size = num_of_pixels.saturating_mul(u64::from(byte_per_pixel));
        Self {
            width,
            height,
            byte_per_pixel,
            num_of_pixels,
            total_byte_size,
        }
    }

    /// The all-zero sentinel meaning "no resolution selected".
    pub fn empty() -> Self {
        Self::new(0, 0, 0)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn byte_per_pixel(&self) -> u32 {
        self.byte_per_pixel
    }

    /// Width times height, widened to `u64`.
    pub fn num_of_pixels(&self) -> u64 {
        self.num_of_pixels
    }

    /// Total frame size in bytes for this resolution.
    pub fn total_byte_size(&self) -> u64 {
        self.total_byte_size
    }

    /// True iff this is the all-zero sentinel.
    pub fn is_empty(&self) -> bool {
        self.width == 0 && self.height == 0 && self.byte_per_pixel == 0
    }

    /// Position of the first descriptor matching `width` and `height`.
    ///
    /// Scans `resolutions` in order; bytes per pixel is ignored for matching,
    /// so duplicate (width, height) pairs resolve to the earliest entry.
    /// Returns `None` when the slice is empty or nothing matches.
    pub fn find_index(
        resolutions: &[CameraResolution],
        width: u32,
        height: u32,
    ) -> Option<usize> {
        resolutions
            .iter()
            .position(|r| r.width == width && r.height == height)
    }
}

impl Default for CameraResolution {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for CameraResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Resolution: {} x {} x {}",
            self.width, self.height, self.byte_per_pixel
        )
    }
}
