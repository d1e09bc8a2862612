use image::{ImageBuffer, Pixel, imageops};

use crate::foundation::{
    core::FrameSize,
    error::{PackResult, SpritePackError},
    math::rows_needed,
};

/// Grid geometry of a packed sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PackLayout {
    pub total: usize,
    pub cols: u32,
    pub rows: u32,
    pub frame: FrameSize,
}

impl PackLayout {
    /// Layout for `total` frames of `frame` size in `cols` columns.
    pub fn new(total: usize, cols: u32, frame: FrameSize) -> PackResult<Self> {
        if cols == 0 {
            return Err(SpritePackError::validation("pack columns must be > 0"));
        }
        if total == 0 {
            return Err(SpritePackError::validation("nothing to pack: zero frames"));
        }
        if frame.is_empty() {
            return Err(SpritePackError::validation("frame size must be non-zero"));
        }
        let rows = u32::try_from(rows_needed(total, cols as usize))
            .map_err(|_| SpritePackError::validation("too many frames to pack"))?;
        Ok(Self {
            total,
            cols,
            rows,
            frame,
        })
    }

    /// Pixel size of the whole sheet.
    pub fn sheet_size(&self) -> FrameSize {
        FrameSize::new(self.cols * self.frame.width, self.rows * self.frame.height)
    }

    /// Top-left pixel of frame `index`; cell is `(index / cols, index % cols)`.
    pub fn cell_origin(&self, index: usize) -> (u32, u32) {
        let cols = self.cols as usize;
        let col = (index % cols) as u32;
        let row = (index / cols) as u32;
        (col * self.frame.width, row * self.frame.height)
    }
}

/// Place `frames` row-major into a sheet `cols` frames wide.
///
/// All frames must share one size. Cells past the last frame stay zero-filled.
pub fn pack_frames<P>(
    frames: &[ImageBuffer<P, Vec<P::Subpixel>>],
    cols: u32,
) -> PackResult<(PackLayout, ImageBuffer<P, Vec<P::Subpixel>>)>
where
    P: Pixel,
{
    let first = frames
        .first()
        .ok_or_else(|| SpritePackError::validation("nothing to pack: zero frames"))?;
    let frame = FrameSize::new(first.width(), first.height());

    if let Some((i, odd)) = frames
        .iter()
        .enumerate()
        .find(|(_, f)| f.dimensions() != (frame.width, frame.height))
    {
        return Err(SpritePackError::validation(format!(
            "frame {i} is {}x{}, expected {frame}",
            odd.width(),
            odd.height()
        )));
    }

    let layout = PackLayout::new(frames.len(), cols, frame)?;
    let size = layout.sheet_size();
    let mut sheet = ImageBuffer::<P, Vec<P::Subpixel>>::new(size.width, size.height);

    for (i, f) in frames.iter().enumerate() {
        let (x, y) = layout.cell_origin(i);
        imageops::replace(&mut sheet, f, i64::from(x), i64::from(y));
    }

    tracing::info!(
        frames = layout.total,
        cols = layout.cols,
        rows = layout.rows,
        size = %size,
        "packed sheet"
    );
    Ok((layout, sheet))
}

#[cfg(test)]
#[path = "../../tests/unit/pack/sheet.rs"]
mod tests;
