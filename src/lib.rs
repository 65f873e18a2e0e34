//! Line-art alpha extraction.
//!
//! Given an already-flattened color image, this crate infers a per-pixel
//! transparency value that separates the dark line work from the locally
//! visible background, without a user-supplied background layer. The result
//! is an alpha-only mask image: every color channel is zero and the alpha
//! channel holds the inferred opacity of the line layer.
//!
//! The entry points are [`LineArtExtractor`] for repeated runs against one
//! input (with a tunable threshold), and the [`ExtractLineArt`] trait for
//! one-shot extraction:
//!
//! ```
//! use image::Rgba;
//! use lineart_extract::{ExtractLineArt, Image};
//!
//! # fn example() -> Result<(), lineart_extract::LineArtError> {
//! let scan: Image<Rgba<u8>> = Image::from_pixel(64, 64, Rgba([255, 255, 255, 255]));
//! let line_layer = scan.extract_line_art(32)?;
//! assert_eq!(line_layer.dimensions(), scan.dimensions());
//! # Ok(())
//! # }
//! ```

mod error;
mod lineart;
mod utils;

#[cfg(test)]
mod test_utils;

pub use error::LineArtError;
pub use lineart::brightness_map::BrightnessMap;
pub use lineart::channel_vec::ChannelVec;
pub use lineart::extract::{ExtractLineArt, LineArtExtractor, DEFAULT_THRESHOLD};
pub use lineart::infer::InferenceMode;
pub use lineart::luma::{brightness, saturation};
pub use lineart::neighborhood::{NeighborPosition, Neighborhood};

/// Image buffer alias used throughout the crate.
pub use imageproc::definitions::Image;
