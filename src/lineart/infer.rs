//! Alpha inference from a pixel and its 3x3 neighborhood.
//!
//! A pixel darker than the threshold is taken to be line material outright.
//! Anything else is treated as a candidate blend of line work over a locally
//! visible background, and its alpha is inferred from the brightness spread
//! of the neighborhood. Inference can decline ("no estimate"), in which case
//! the pixel is written fully transparent.

use crate::lineart::channel_vec::ChannelVec;
use crate::lineart::luma;
use crate::lineart::neighborhood::Neighborhood;

/// Strategy used to infer alpha for pixels at or above the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InferenceMode {
    /// Interpolate the pixel's brightness between the darkest and brightest
    /// neighborhood samples. The default.
    #[default]
    NeighborRange,
    /// Evaluate every surrounding neighbor as a candidate background against
    /// the darkest neighbor as candidate line color, scoring each with a
    /// heuristic penalty and keeping the lowest-penalty estimate.
    ///
    /// More elaborate than [`InferenceMode::NeighborRange`] but not
    /// established as more accurate; select it explicitly when comparing
    /// results.
    PenaltyScored,
}

/// Decides the output alpha for one pixel.
///
/// The returned value is final: it is capped by the pixel's own alpha and
/// clamped to `0..=255`, and the caller writes it with zeroed color
/// channels.
pub(crate) fn pixel_alpha(
    src: ChannelVec,
    neighborhood: &Neighborhood,
    threshold: i32,
    mode: InferenceMode,
) -> u8 {
    let br = neighborhood.center_brightness();

    if br < threshold {
        // Line branch: darker pixels are closer to pure line color and thus
        // more opaque. The existing alpha is only ever capped, never raised.
        return src.alpha().min(255 - br) as u8;
    }

    let guessed = match mode {
        InferenceMode::NeighborRange => infer_alpha(src, neighborhood, threshold),
        InferenceMode::PenaltyScored => infer_alpha_penalty(src, neighborhood, threshold),
    };

    match guessed {
        Some(alpha) => alpha.min(src.alpha()).clamp(0, 255) as u8,
        None => 0,
    }
}

/// Infers alpha by linear interpolation over the neighborhood brightness
/// range.
///
/// Returns `None` (no estimate) unless all of the following hold:
/// a genuinely line-like sample exists nearby (`minbr < threshold`), the
/// pixel is darker than the brightest sample (`br < maxbr`), the extrema
/// differ (`minbr < maxbr`, which makes the denominator nonzero), and the
/// pixel is channel-wise no brighter than the reference background neighbor,
/// ignoring alpha.
///
/// The reference background neighbor is the brightest of the 9 samples, ties
/// broken by saturation. The estimate is the pixel's brightness position
/// between the darkest and brightest samples, inverted so pixels darker than
/// the background get higher alpha.
pub fn infer_alpha(src: ChannelVec, neighborhood: &Neighborhood, threshold: i32) -> Option<i32> {
    let br = neighborhood.center_brightness();
    let (minbr, maxbr) = neighborhood.brightness_extrema();

    if !(minbr < threshold && br < maxbr && minbr < maxbr) {
        return None;
    }

    let reference = neighborhood.brightest_sample();
    if !src.mask_alpha().le_all(reference.mask_alpha()) {
        // Not plausibly a line-over-background blend of that neighbor.
        return None;
    }

    Some(255 * (br - maxbr) / (minbr - maxbr))
}

const GROSS_ERROR_PENALTY: i64 = 1_000_000;
const INVERSION_PENALTY: i64 = 10_000;
const SPREAD_WEIGHT: i64 = 32;
const DARK_BACKGROUND_WEIGHT: i64 = 32;
const GRAY_BACKGROUND_WEIGHT: i64 = 48;

/// Infers alpha by scoring every surrounding neighbor as a candidate
/// background.
///
/// The darkest surrounding neighbor is the candidate line color. Each
/// surrounding neighbor whose brightness exceeds the pixel's own is solved
/// against the compositing equation and scored with [`candidate_alpha`];
/// the lowest-penalty estimate wins. Returns `None` when no surrounding
/// sample is line-like or no candidate qualifies.
pub fn infer_alpha_penalty(
    src: ChannelVec,
    neighborhood: &Neighborhood,
    threshold: i32,
) -> Option<i32> {
    let (line, line_br) = neighborhood.darkest_ring_sample();
    if line_br > threshold {
        return None;
    }

    let result_br = neighborhood.center_brightness();
    let mut best: Option<(i64, i32)> = None;

    for (background, background_br) in neighborhood.ring() {
        if line_br < threshold && line_br < result_br && result_br < background_br {
            let (alpha, penalty) = candidate_alpha(background, line, src);
            if best.map_or(true, |(best_penalty, _)| penalty < best_penalty) {
                best = Some((penalty, alpha));
            }
        }
    }

    best.map(|(_, alpha)| alpha)
}

/// Solves the compositing equation for one background candidate and scores
/// how trustworthy the estimate is.
///
/// Alpha is estimated per color channel in 10-bit fixed point with a +1
/// denominator bias against division by zero, then averaged. The penalty
/// grows with: channel estimates outside `0..=255`, channels where the line
/// or the result is brighter than the background, spread across the three
/// channel estimates, dark or low-saturation backgrounds, and the summed
/// per-channel absolute background-to-line difference.
fn candidate_alpha(background: ChannelVec, line: ChannelVec, result: ChannelVec) -> (i32, i64) {
    let estimate = (((background - result) * (255 * 1024))
        / ((background - line) * 1024 + ChannelVec::ONE))
        .mask_alpha();

    let mut penalty: i64 = 0;

    if estimate.any_gt(255) {
        penalty += GROSS_ERROR_PENALTY;
    }
    if estimate.any_lt(0) {
        penalty += GROSS_ERROR_PENALTY;
    }
    penalty += INVERSION_PENALTY * count_brighter_color_channels(line, background);
    penalty += INVERSION_PENALTY * count_brighter_color_channels(result, background);

    // Spread across the three channel-wise estimates.
    let [red, green, blue, _] = estimate.lanes();
    let sum = i64::from(red) + i64::from(green) + i64::from(blue);
    let avg = sum / 3;
    let sum_sq = i64::from(red) * i64::from(red)
        + i64::from(green) * i64::from(green)
        + i64::from(blue) * i64::from(blue);
    let variance = (sum_sq / 3 - avg * avg).max(0);
    penalty += SPREAD_WEIGHT * variance.isqrt();

    penalty += DARK_BACKGROUND_WEIGHT * i64::from(255 - luma::brightness(background));
    penalty += GRAY_BACKGROUND_WEIGHT * i64::from(255 - luma::saturation(background));

    // Summed per-channel absolute background-to-line distance.
    let diff = background - line;
    penalty += i64::from(diff.red().abs() + diff.green().abs() + diff.blue().abs());

    (avg as i32, penalty)
}

/// Number of color channels where `a` exceeds `b`. Alpha is ignored.
fn count_brighter_color_channels(a: ChannelVec, b: ChannelVec) -> i64 {
    let a = a.mask_alpha().lanes();
    let b = b.mask_alpha().lanes();
    (0..3).filter(|&lane| a[lane] > b[lane]).count() as i64
}
