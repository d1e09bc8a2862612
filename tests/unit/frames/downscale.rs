use super::*;

#[test]
fn nominal_frame_halves_to_160x217() {
    let frame = RgbaImage::from_pixel(320, 434, image::Rgba([200, 100, 50, 255]));
    let out = downscale_frame(&frame);
    assert_eq!(out.dimensions(), (160, 217));
    assert_eq!(out.get_pixel(80, 100).0, [200, 100, 50]);
}

#[test]
fn alpha_is_dropped_not_composited() {
    let frame = RgbaImage::from_pixel(8, 8, image::Rgba([90, 40, 10, 0]));
    let out = downscale_frame(&frame);
    assert_eq!(out.dimensions(), (4, 4));
    assert_eq!(out.get_pixel(1, 1).0, [90, 40, 10]);
}

#[test]
fn per_frame_resampling_keeps_frames_isolated() {
    let white = RgbaImage::from_pixel(16, 16, image::Rgba([255, 255, 255, 255]));
    let black = RgbaImage::from_pixel(16, 16, image::Rgba([0, 0, 0, 255]));

    let out = downscale_frames(&[white, black]);
    assert_eq!(out.len(), 2);
    // Edge pixels would pick up the neighbour if the sheet were resized as a whole.
    assert_eq!(out[0].get_pixel(7, 4).0, [255, 255, 255]);
    assert_eq!(out[1].get_pixel(0, 4).0, [0, 0, 0]);
}

#[test]
fn order_and_count_preserved() {
    let frames: Vec<RgbaImage> = (0..5u8)
        .map(|i| RgbaImage::from_pixel(4, 4, image::Rgba([i * 40, 0, 0, 255])))
        .collect();
    let out = downscale_frames(&frames);
    let reds: Vec<u8> = out.iter().map(|f| f.get_pixel(0, 0).0[0]).collect();
    assert_eq!(reds, vec![0, 40, 80, 120, 160]);
}
