//! Per-pixel brightness and saturation.

use crate::lineart::channel_vec::ChannelVec;

/// Perceptual luma weights (0.298912, 0.586611, 0.114478) in 10-bit fixed
/// point. The alpha lane carries weight zero, so brightness never depends on
/// the alpha channel.
const LUMA_WEIGHTS: ChannelVec = ChannelVec::new(
    (0.298912 * 1024.0) as i32,
    (0.586611 * 1024.0) as i32,
    (0.114478 * 1024.0) as i32,
    0,
);

const LUMA_SHIFT: u32 = 10;

/// Fixed-point luma of a pixel.
///
/// The weighted sum is divided back down with an arithmetic right shift, not
/// a rounding division, which keeps the result stable and reproducible.
pub fn brightness(pixel: ChannelVec) -> i32 {
    pixel.dot(LUMA_WEIGHTS) >> LUMA_SHIFT
}

/// Integer saturation of a pixel: `255 * (max - min) / max` over the color
/// channels, `0` for pure black.
pub fn saturation(pixel: ChannelVec) -> i32 {
    let max = pixel.red().max(pixel.green()).max(pixel.blue());
    let min = pixel.red().min(pixel.green()).min(pixel.blue());
    if max == 0 {
        return 0;
    }
    255 * (max - min) / max
}
