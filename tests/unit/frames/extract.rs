use super::*;

fn grid_2x4() -> GridShape {
    GridShape::new(4, 2).unwrap()
}

/// Sheet whose pixels encode the cell they belong to: red = column, green = row.
fn labelled_sheet(width: u32, height: u32, grid: GridShape) -> SourceSheet {
    let rects = cell_rects(width, height, grid).unwrap();
    let mut img = RgbaImage::new(width, height);
    for (i, r) in rects.iter().enumerate() {
        let row = i as u32 / grid.cols;
        let col = i as u32 % grid.cols;
        for y in r.y..r.y + r.height {
            for x in r.x..r.x + r.width {
                img.put_pixel(x, y, image::Rgba([col as u8 * 100, row as u8 * 60, 7, 255]));
            }
        }
    }
    SourceSheet::from_image("buddy-intro-1.png", FrameSize::new(640, 1738), img)
}

#[test]
fn nominal_grid_cells_cover_image() {
    let rects = cell_rects(640, 1738, grid_2x4()).unwrap();
    assert_eq!(rects.len(), 8);
    assert_eq!(
        rects[0],
        CellRect {
            x: 0,
            y: 0,
            width: 320,
            height: 434
        }
    );
    assert_eq!(
        rects[3],
        CellRect {
            x: 320,
            y: 434,
            width: 320,
            height: 435
        }
    );
    let area: u64 = rects
        .iter()
        .map(|r| u64::from(r.width) * u64::from(r.height))
        .sum();
    assert_eq!(area, 640 * 1738);
}

#[test]
fn too_small_image_is_rejected() {
    let err = cell_rects(1, 3, grid_2x4()).unwrap_err();
    assert!(matches!(err, SpritePackError::Validation(_)));
}

#[test]
fn nominal_sheet_yields_grid_count_frames_in_row_major_order() {
    let grid = grid_2x4();
    let sheet = labelled_sheet(64, 174, grid);
    let frames = extract_frames(&sheet, grid, FrameSize::new(32, 43)).unwrap();

    assert_eq!(frames.len(), 8);
    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(frame.dimensions(), (32, 43));
        let row = i as u8 / 2;
        let col = i as u8 % 2;
        let px = frame.get_pixel(16, 21).0;
        assert_eq!(px[0], col * 100, "frame {i}");
        assert_eq!(px[1], row * 60, "frame {i}");
    }
}

#[test]
fn off_by_one_sheet_still_yields_uniform_frames() {
    let grid = grid_2x4();
    let sheet = SourceSheet::from_image(
        "buddy-intro-2.png",
        FrameSize::new(640, 1738),
        RgbaImage::from_pixel(640, 1739, image::Rgba([1, 2, 3, 255])),
    );
    assert!(sheet.size_mismatch().is_some());

    let frames = extract_frames(&sheet, grid, FrameSize::new(320, 434)).unwrap();
    assert_eq!(frames.len(), 8);
    assert!(frames.iter().all(|f| f.dimensions() == (320, 434)));
}

#[test]
fn zero_frame_size_is_rejected() {
    let grid = grid_2x4();
    let sheet = labelled_sheet(64, 174, grid);
    let err = extract_frames(&sheet, grid, FrameSize::new(0, 43)).unwrap_err();
    assert!(matches!(err, SpritePackError::Validation(_)));
}
