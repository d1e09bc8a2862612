use image::{DynamicImage, RgbImage, RgbaImage, imageops};

use crate::frames::extract::RESAMPLE_FILTER;

/// Drop alpha and halve both dimensions of one frame.
///
/// Frames are resampled one by one, never as an assembled sheet, so the filter
/// support cannot pull pixels in from a neighbouring frame.
pub fn downscale_frame(frame: &RgbaImage) -> RgbImage {
    let rgb = DynamicImage::ImageRgba8(frame.clone()).to_rgb8();
    let (width, height) = rgb.dimensions();
    imageops::resize(
        &rgb,
        (width / 2).max(1),
        (height / 2).max(1),
        RESAMPLE_FILTER,
    )
}

/// Downscale every frame, keeping count and order.
pub fn downscale_frames(frames: &[RgbaImage]) -> Vec<RgbImage> {
    frames.iter().map(downscale_frame).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/frames/downscale.rs"]
mod tests;
