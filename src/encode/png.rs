use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use image::{
    ExtendedColorType, ImageEncoder as _, RgbImage,
    codecs::png::{CompressionType, FilterType, PngEncoder},
};

use crate::foundation::error::{PackResult, SpritePackError};

/// Sibling path the sheet is staged at before being renamed into place.
pub fn staging_path(out_path: &Path) -> PathBuf {
    let name = out_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sheet.png".to_string());
    out_path.with_file_name(format!(".{name}.tmp"))
}

/// Write `sheet` as a best-compression PNG and return the file size in bytes.
///
/// The target either ends up fully written or is left as it was: bytes go to
/// [`staging_path`] first and are renamed over `out_path` once flushed.
pub fn write_png(sheet: &RgbImage, out_path: &Path) -> PackResult<u64> {
    let tmp = staging_path(out_path);
    if let Err(e) = encode_to(sheet, &tmp) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e);
    }

    if let Err(e) = std::fs::rename(&tmp, out_path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(SpritePackError::io(out_path, e));
    }

    let size = std::fs::metadata(out_path)
        .map_err(|e| SpritePackError::io(out_path, e))?
        .len();
    tracing::info!(path = %out_path.display(), bytes = size, "wrote packed sheet");
    Ok(size)
}

fn encode_to(sheet: &RgbImage, path: &Path) -> PackResult<()> {
    let file = File::create(path).map_err(|e| SpritePackError::io(path, e))?;
    let mut w = BufWriter::new(file);

    PngEncoder::new_with_quality(&mut w, CompressionType::Best, FilterType::Adaptive).write_image(
        sheet.as_raw(),
        sheet.width(),
        sheet.height(),
        ExtendedColorType::Rgb8,
    )?;

    w.flush().map_err(|e| SpritePackError::io(path, e))?;
    w.get_ref()
        .sync_all()
        .map_err(|e| SpritePackError::io(path, e))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
