use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::foundation::{
    core::FrameSize,
    error::{PackResult, SpritePackError},
};

/// Decoded source sheet in straight (non-premultiplied) RGBA8.
#[derive(Clone, Debug)]
pub struct SourceSheet {
    /// Path the sheet was read from.
    pub path: PathBuf,
    /// Size the sheet is expected to have.
    pub expected: FrameSize,
    /// Decoded pixels.
    pub image: RgbaImage,
}

/// Source sheet whose actual size differs from the nominal one.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SizeMismatch {
    /// File name of the source sheet.
    pub file: String,
    pub expected: FrameSize,
    pub actual: FrameSize,
}

impl std::fmt::Display for SizeMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} is {}, expected {}",
            self.file, self.actual, self.expected
        )
    }
}

impl SourceSheet {
    /// Wrap an already decoded image.
    pub fn from_image(path: impl Into<PathBuf>, expected: FrameSize, image: RgbaImage) -> Self {
        Self {
            path: path.into(),
            expected,
            image,
        }
    }

    /// Actual pixel size of the decoded image.
    pub fn size(&self) -> FrameSize {
        let (width, height) = self.image.dimensions();
        FrameSize::new(width, height)
    }

    /// File name used in logs and reports.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// `Some` when the decoded size is not the nominal size.
    pub fn size_mismatch(&self) -> Option<SizeMismatch> {
        let actual = self.size();
        (actual != self.expected).then(|| SizeMismatch {
            file: self.file_name(),
            expected: self.expected,
            actual,
        })
    }
}

/// Decode the sheet at `path` into RGBA8.
///
/// The format is sniffed from the file contents; the extension is only a fallback.
pub fn load_source(path: &Path, expected: FrameSize) -> PackResult<SourceSheet> {
    let image = image::ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| SpritePackError::io(path, e))?
        .decode()?
        .to_rgba8();
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "decoded source sheet"
    );
    Ok(SourceSheet::from_image(path, expected, image))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
