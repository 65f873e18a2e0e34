//! Full-image brightness precompute.

use image::Rgba;
use imageproc::definitions::Image;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::lineart::channel_vec::ChannelVec;
use crate::lineart::luma;

/// Per-pixel brightness of a whole image, computed once per extraction run.
///
/// Every entry depends only on its own pixel, so the map can be filled in
/// any order or fully in parallel. Once built it is read-only; neighborhood
/// sampling reads it but never writes it.
#[derive(Debug, Clone)]
pub struct BrightnessMap {
    width: u32,
    data: Vec<i32>,
}

impl BrightnessMap {
    /// Builds the map for `image`.
    ///
    /// Under the `rayon` feature the pixels are partitioned across worker
    /// threads; the result is byte-identical to the sequential build because
    /// each entry is a pure function of its own pixel.
    pub fn build(image: &Image<Rgba<u8>>) -> Self {
        let raw = image.as_raw();

        #[cfg(feature = "rayon")]
        let data = raw
            .par_chunks_exact(4)
            .map(|slot| luma::brightness(ChannelVec::from_slice(slot)))
            .collect();

        #[cfg(not(feature = "rayon"))]
        let data = raw
            .chunks_exact(4)
            .map(|slot| luma::brightness(ChannelVec::from_slice(slot)))
            .collect();

        Self {
            width: image.width(),
            data,
        }
    }

    /// Brightness of the pixel at `(x, y)`. The coordinate must be in bounds.
    pub fn at(&self, x: u32, y: u32) -> i32 {
        self.data[(y * self.width + x) as usize]
    }

    /// Number of entries (one per pixel).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
