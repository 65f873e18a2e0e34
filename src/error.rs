use thiserror::Error;

/// Error type for line-art extraction operations
///
/// Buffer contract violations are fatal to the whole call: the operation
/// aborts before touching pixel data, so a caller can never mistake a
/// partially written buffer for a valid result. Geometric edge cases
/// (neighbor coordinates outside the image) are not errors; they resolve
/// deterministically by edge clamping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineArtError {
    /// Input and output dimensions do not match
    ///
    /// The output buffer must have exactly the input's width and height;
    /// the extractor writes one output pixel per input pixel.
    #[error("Input and output dimensions do not match: expected {expected:?}, actual {actual:?}")]
    DimensionMismatch {
        /// Expected dimensions (width, height)
        expected: (u32, u32),
        /// Actual dimensions (width, height)
        actual: (u32, u32),
    },

    /// The input image has a zero width or height
    ///
    /// Neighborhood sampling clamps coordinates to `[0, w-1]` and `[0, h-1]`,
    /// which is undefined for an empty image.
    #[error("{context}: image dimensions must be non-zero")]
    EmptyImage {
        /// Operation that rejected the image
        context: &'static str,
    },
}
