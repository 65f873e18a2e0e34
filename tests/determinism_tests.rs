//! Determinism under different work partitionings.
//!
//! Per-pixel work is pure given the finished brightness map, so the worker
//! count must not influence a single output byte.

use image::Rgba;
use lineart_extract::{ExtractLineArt, Image, DEFAULT_THRESHOLD};

/// A synthetic scan: bright paper gradient with dark strokes.
fn scan_image(width: u32, height: u32) -> Image<Rgba<u8>> {
    let mut image: Image<Rgba<u8>> = Image::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let paper = 180 + ((x + y) % 70) as u8;
            let pixel = if x % 13 == 0 || (x + 2 * y) % 31 == 0 {
                Rgba([12, 10, 14, 255])
            } else {
                Rgba([paper, paper.saturating_sub(10), paper.saturating_sub(25), 255])
            };
            image.put_pixel(x, y, pixel);
        }
    }
    image
}

#[test]
fn worker_count_does_not_change_output() {
    let image = scan_image(64, 48);
    let baseline = image.extract_line_art(DEFAULT_THRESHOLD).unwrap();

    for threads in [1, 2, 8] {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap();
        let result = pool.install(|| image.extract_line_art(DEFAULT_THRESHOLD)).unwrap();
        assert_eq!(
            baseline.as_raw(),
            result.as_raw(),
            "output diverged with {threads} worker(s)"
        );
    }
}

#[test]
fn repeated_runs_are_identical() {
    let image = scan_image(32, 32);
    let first = image.extract_line_art(DEFAULT_THRESHOLD).unwrap();
    let second = image.extract_line_art(DEFAULT_THRESHOLD).unwrap();
    assert_eq!(first.as_raw(), second.as_raw());
}
