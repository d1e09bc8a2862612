use image::{RgbaImage, imageops};

use crate::{
    assets::decode::SourceSheet,
    foundation::{
        core::{CellRect, FrameSize, GridShape},
        error::{PackResult, SpritePackError},
        math::slice_bounds,
    },
};

/// Resampling filter used whenever a frame changes size.
pub const RESAMPLE_FILTER: imageops::FilterType = imageops::FilterType::Lanczos3;

/// Cells of a `width` x `height` image split into `grid`, row-major.
///
/// Row and column boundaries come from [`slice_bounds`], so the cells tile the
/// whole image even when the extent is not a multiple of the grid.
pub fn cell_rects(width: u32, height: u32, grid: GridShape) -> PackResult<Vec<CellRect>> {
    if width < grid.cols || height < grid.rows {
        return Err(SpritePackError::validation(format!(
            "image {width}x{height} is too small for a {}x{} grid",
            grid.cols, grid.rows
        )));
    }

    let mut rects = Vec::with_capacity(grid.cell_count() as usize);
    for row in 0..grid.rows {
        let (y0, y1) = slice_bounds(height, grid.rows, row);
        for col in 0..grid.cols {
            let (x0, x1) = slice_bounds(width, grid.cols, col);
            rects.push(CellRect {
                x: x0,
                y: y0,
                width: x1 - x0,
                height: y1 - y0,
            });
        }
    }
    Ok(rects)
}

/// Slice `sheet` into `grid` cells and resize each to `frame_size`.
///
/// Uses the sheet's actual dimensions for the boundary math; a size that
/// differs from the nominal one is logged and otherwise absorbed by the resize.
#[tracing::instrument(skip(sheet), fields(file = %sheet.file_name()))]
pub fn extract_frames(
    sheet: &SourceSheet,
    grid: GridShape,
    frame_size: FrameSize,
) -> PackResult<Vec<RgbaImage>> {
    if frame_size.is_empty() {
        return Err(SpritePackError::validation("frame size must be non-zero"));
    }

    if let Some(mismatch) = sheet.size_mismatch() {
        tracing::warn!(
            expected = %mismatch.expected,
            actual = %mismatch.actual,
            "source sheet has unexpected size"
        );
    }

    let (width, height) = sheet.image.dimensions();
    let rects = cell_rects(width, height, grid)?;

    let frames = rects
        .iter()
        .map(|r| {
            tracing::debug!(x = r.x, y = r.y, w = r.width, h = r.height, "slice cell");
            let cell = imageops::crop_imm(&sheet.image, r.x, r.y, r.width, r.height).to_image();
            if cell.dimensions() == (frame_size.width, frame_size.height) {
                cell
            } else {
                imageops::resize(&cell, frame_size.width, frame_size.height, RESAMPLE_FILTER)
            }
        })
        .collect();

    Ok(frames)
}

#[cfg(test)]
#[path = "../../tests/unit/frames/extract.rs"]
mod tests;
