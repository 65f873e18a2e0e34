//! Two-phase parallel line-art extraction.
//!
//! Phase 1 builds the [`BrightnessMap`]; phase 2 samples each pixel's
//! neighborhood against the finished map and writes one output pixel. The
//! map build returning is the only barrier the pipeline needs: within a
//! phase every work item owns disjoint state, so the passes run under any
//! partitioning (including a single worker) with byte-identical results.

use image::Rgba;
use imageproc::definitions::Image;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::error::LineArtError;
use crate::lineart::brightness_map::BrightnessMap;
use crate::lineart::channel_vec::ChannelVec;
use crate::lineart::infer::{self, InferenceMode};
use crate::lineart::neighborhood::Neighborhood;
use crate::utils::{validate_matching_dimensions, validate_non_empty_image};

/// Default brightness threshold below which a pixel counts as line material.
pub const DEFAULT_THRESHOLD: i32 = 32;

/// Line-art extraction processor bound to one input image.
///
/// The threshold is the algorithm's sole tunable parameter and may be
/// changed between runs. The input is borrowed immutably for the
/// processor's lifetime, so the borrow system guarantees the input cannot
/// change, and cannot alias the output, while an extraction runs.
///
/// # Examples
///
/// ```
/// use image::Rgba;
/// use lineart_extract::{Image, LineArtExtractor};
///
/// # fn example() -> Result<(), lineart_extract::LineArtError> {
/// let scan: Image<Rgba<u8>> = Image::from_pixel(16, 16, Rgba([255, 255, 255, 255]));
/// let mut line_layer: Image<Rgba<u8>> = Image::new(16, 16);
///
/// let mut extractor = LineArtExtractor::new(&scan);
/// extractor.set_threshold(48);
/// extractor.extract_into(&mut line_layer)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LineArtExtractor<'a> {
    input: &'a Image<Rgba<u8>>,
    threshold: i32,
    mode: InferenceMode,
}

impl<'a> LineArtExtractor<'a> {
    /// Binds a processor to `input` with the default threshold and the
    /// default inference mode.
    pub fn new(input: &'a Image<Rgba<u8>>) -> Self {
        Self {
            input,
            threshold: DEFAULT_THRESHOLD,
            mode: InferenceMode::default(),
        }
    }

    /// Sets the threshold, consuming and returning the extractor.
    #[must_use]
    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Selects the inference strategy, consuming and returning the
    /// extractor.
    #[must_use]
    pub fn with_mode(mut self, mode: InferenceMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    /// Sets the threshold for subsequent runs. Values are expected in
    /// `0..=255`; enforcing tighter bounds is left to callers.
    pub fn set_threshold(&mut self, threshold: i32) {
        self.threshold = threshold;
    }

    pub fn mode(&self) -> InferenceMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: InferenceMode) {
        self.mode = mode;
    }

    /// Runs the extraction, writing the inferred line layer into `output`.
    ///
    /// On success every output pixel has zeroed color channels and the
    /// inferred alpha. The call either completes both passes or fails
    /// before any pixel is written; there is no partial output to mistake
    /// for a valid result.
    ///
    /// # Errors
    ///
    /// * [`LineArtError::EmptyImage`] - the input has a zero dimension
    /// * [`LineArtError::DimensionMismatch`] - `output` does not match the
    ///   input's width and height
    pub fn extract_into(&self, output: &mut Image<Rgba<u8>>) -> Result<(), LineArtError> {
        let (width, height) = self.input.dimensions();

        validate_non_empty_image(width, height, "ExtractLineArt").map_err(|_| {
            LineArtError::EmptyImage {
                context: "ExtractLineArt",
            }
        })?;

        let (out_width, out_height) = output.dimensions();
        validate_matching_dimensions(width, height, out_width, out_height, "ExtractLineArt")
            .map_err(|_| LineArtError::DimensionMismatch {
                expected: (width, height),
                actual: (out_width, out_height),
            })?;

        // Phase 1. `build` returns only once every entry is written; that
        // return is the barrier phase 2 relies on, because neighborhood
        // sampling reads brightness entries computed by other work items.
        let map = BrightnessMap::build(self.input);

        // Phase 2. Each work item owns exactly one 4-byte output slot and
        // reads only the immutable input and the finished map.
        let input = self.input;
        let threshold = self.threshold;
        let mode = self.mode;
        let shade = |(index, slot): (usize, &mut [u8])| {
            let x = index as u32 % width;
            let y = index as u32 / width;
            let neighborhood = Neighborhood::sample(input, &map, x, y);
            let src = ChannelVec::from(*input.get_pixel(x, y));
            let alpha = infer::pixel_alpha(src, &neighborhood, threshold, mode);
            slot.copy_from_slice(&[0, 0, 0, alpha]);
        };

        #[cfg(feature = "rayon")]
        output
            .as_mut()
            .par_chunks_exact_mut(4)
            .enumerate()
            .for_each(shade);

        #[cfg(not(feature = "rayon"))]
        output
            .as_mut()
            .chunks_exact_mut(4)
            .enumerate()
            .for_each(shade);

        Ok(())
    }
}

/// Trait providing one-shot line-art extraction on RGBA images.
pub trait ExtractLineArt {
    /// Infers the line-art alpha layer of `self` and returns it as a new
    /// same-sized image with zeroed color channels.
    ///
    /// # Arguments
    ///
    /// * `threshold` - Brightness below which a pixel counts as line
    ///   material; `0..=255`, typically [`DEFAULT_THRESHOLD`]
    ///
    /// # Errors
    ///
    /// * [`LineArtError::EmptyImage`] - the image has a zero dimension
    ///
    /// # Examples
    ///
    /// ```
    /// use image::Rgba;
    /// use lineart_extract::{ExtractLineArt, Image, DEFAULT_THRESHOLD};
    ///
    /// # fn example() -> Result<(), lineart_extract::LineArtError> {
    /// let scan: Image<Rgba<u8>> = Image::from_pixel(8, 8, Rgba([20, 20, 20, 255]));
    /// let line_layer = scan.extract_line_art(DEFAULT_THRESHOLD)?;
    /// assert_eq!(line_layer.get_pixel(0, 0).0[..3], [0, 0, 0]);
    /// # Ok(())
    /// # }
    /// ```
    fn extract_line_art(&self, threshold: i32) -> Result<Image<Rgba<u8>>, LineArtError>;
}

impl ExtractLineArt for Image<Rgba<u8>> {
    fn extract_line_art(&self, threshold: i32) -> Result<Image<Rgba<u8>>, LineArtError> {
        let mut output = Image::new(self.width(), self.height());
        LineArtExtractor::new(self)
            .with_threshold(threshold)
            .extract_into(&mut output)?;
        Ok(output)
    }
}
