//! 3x3 neighborhood sampling with clamp-to-edge semantics.

use image::Rgba;
use imageproc::definitions::Image;
use itertools::{Itertools, MinMaxResult};

use crate::lineart::brightness_map::BrightnessMap;
use crate::lineart::channel_vec::ChannelVec;
use crate::lineart::luma;

/// Named slots of the 3x3 sampling window, in row-major order.
///
/// `Center` is slot 4 and refers to the sampled pixel itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborPosition {
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl NeighborPosition {
    /// The 8 surrounding slots, excluding the center, in row-major order.
    pub const RING: [Self; 8] = [
        Self::TopLeft,
        Self::Top,
        Self::TopRight,
        Self::Left,
        Self::Right,
        Self::BottomLeft,
        Self::Bottom,
        Self::BottomRight,
    ];

    /// Row-major slot index, `0..9`.
    pub const fn slot(self) -> usize {
        self as usize
    }
}

/// The 3x3 neighborhood of one pixel: 9 pixel vectors plus the cached
/// brightness of each, ordered row-major with the center at slot 4.
///
/// Offsets that fall outside the image are clamped to the nearest valid
/// coordinate (edge replication), never wrapped and never zero-filled, so a
/// corner pixel sees itself in every out-of-range slot.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
    pixels: [ChannelVec; 9],
    brightness: [i32; 9],
}

impl Neighborhood {
    /// Samples the neighborhood of `(x, y)`.
    ///
    /// Brightness values come from `map`, which must have been built from
    /// the same image. `(x, y)` must be in bounds.
    pub fn sample(image: &Image<Rgba<u8>>, map: &BrightnessMap, x: u32, y: u32) -> Self {
        let (width, height) = image.dimensions();
        let mut pixels = [ChannelVec::default(); 9];
        let mut brightness = [0i32; 9];

        for row in 0..3usize {
            for col in 0..3usize {
                let nx = (i64::from(x) + col as i64 - 1).clamp(0, i64::from(width) - 1) as u32;
                let ny = (i64::from(y) + row as i64 - 1).clamp(0, i64::from(height) - 1) as u32;
                pixels[row * 3 + col] = ChannelVec::from(*image.get_pixel(nx, ny));
                brightness[row * 3 + col] = map.at(nx, ny);
            }
        }

        Self { pixels, brightness }
    }

    pub fn pixel(&self, position: NeighborPosition) -> ChannelVec {
        self.pixels[position.slot()]
    }

    pub fn brightness(&self, position: NeighborPosition) -> i32 {
        self.brightness[position.slot()]
    }

    /// Brightness of the sampled pixel itself.
    pub fn center_brightness(&self) -> i32 {
        self.brightness[NeighborPosition::Center.slot()]
    }

    /// Minimum and maximum brightness over all 9 samples, center included.
    pub fn brightness_extrema(&self) -> (i32, i32) {
        match self.brightness.iter().copied().minmax() {
            MinMaxResult::MinMax(min, max) => (min, max),
            MinMaxResult::OneElement(value) => (value, value),
            MinMaxResult::NoElements => (0, 0),
        }
    }

    /// The brightest of the 9 samples, ties broken by greater saturation and
    /// then by the later row-major slot.
    ///
    /// This matches sorting all samples ascending by `(brightness,
    /// saturation)` and taking the last one.
    pub fn brightest_sample(&self) -> ChannelVec {
        let mut best = 0usize;
        let mut best_key = (self.brightness[0], luma::saturation(self.pixels[0]));
        for slot in 1..9 {
            let key = (self.brightness[slot], luma::saturation(self.pixels[slot]));
            if key >= best_key {
                best = slot;
                best_key = key;
            }
        }
        self.pixels[best]
    }

    /// The 8 surrounding samples as `(pixel, brightness)` pairs, excluding
    /// the center, in row-major order.
    pub fn ring(&self) -> impl Iterator<Item = (ChannelVec, i32)> + '_ {
        NeighborPosition::RING
            .iter()
            .map(|position| (self.pixels[position.slot()], self.brightness[position.slot()]))
    }

    /// The darkest of the 8 surrounding samples, ties broken by the earlier
    /// row-major slot. Returns the pixel and its brightness.
    pub fn darkest_ring_sample(&self) -> (ChannelVec, i32) {
        let mut best = NeighborPosition::RING[0].slot();
        for position in &NeighborPosition::RING[1..] {
            if self.brightness[position.slot()] < self.brightness[best] {
                best = position.slot();
            }
        }
        (self.pixels[best], self.brightness[best])
    }
}
