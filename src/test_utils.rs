//! Test utilities for lineart-extract
//!
//! This module provides common functionality for testing the extraction
//! passes. It is only compiled when running tests.

use image::Rgba;
use imageproc::definitions::Image;

use crate::lineart::brightness_map::BrightnessMap;
use crate::lineart::neighborhood::Neighborhood;

/// Creates an RGBA image with given dimensions and a per-coordinate pattern.
pub fn rgba_image_with_pattern(
    width: u32,
    height: u32,
    pattern: impl Fn(u32, u32) -> Rgba<u8>,
) -> Image<Rgba<u8>> {
    let mut image: Image<Rgba<u8>> = Image::new(width, height);
    for y in 0..height {
        for x in 0..width {
            image.put_pixel(x, y, pattern(x, y));
        }
    }
    image
}

/// Builds a brightness map for `image` and samples the neighborhood of
/// `(x, y)` against it, the way the extraction pass does.
pub fn sample_neighborhood(image: &Image<Rgba<u8>>, x: u32, y: u32) -> Neighborhood {
    let map = BrightnessMap::build(image);
    Neighborhood::sample(image, &map, x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_image_with_pattern_fills_every_pixel() {
        let image = rgba_image_with_pattern(3, 2, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
        assert_eq!(image.get_pixel(2, 1), &Rgba([2, 1, 0, 255]));
    }
}
