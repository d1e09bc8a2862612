use crate::foundation::error::{PackResult, SpritePackError};

/// Pixel dimensions of an image or frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FrameSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameSize {
    /// Build a size from width and height.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size with both linear dimensions halved (integer division).
    pub const fn halved(self) -> Self {
        Self {
            width: self.width / 2,
            height: self.height / 2,
        }
    }

    /// True when either dimension is zero.
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for FrameSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Fixed grid of frames laid out in a source sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct GridShape {
    /// Number of frame rows.
    pub rows: u32,
    /// Number of frame columns.
    pub cols: u32,
}

impl GridShape {
    /// Build a grid, rejecting zero rows or columns.
    pub fn new(rows: u32, cols: u32) -> PackResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(SpritePackError::validation(
                "grid rows and cols must be > 0",
            ));
        }
        Ok(Self { rows, cols })
    }

    /// Frames per sheet.
    pub const fn cell_count(self) -> u32 {
        self.rows * self.cols
    }
}

/// Sub-rectangle of a source sheet, `[x, x + width) x [y, y + height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}
