use std::path::PathBuf;

use crate::foundation::{
    core::{FrameSize, GridShape},
    error::{PackResult, SpritePackError},
};

pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const SOURCE_PREFIX: &str = "buddy-intro-";
pub const SOURCE_EXTENSION: &str = "png";
pub const OUTPUT_NAME: &str = "buddy-intro-packed.png";
/// Sheet key the game's sprite table refers to.
pub const SHEET_KEY: &str = "buddy-intro";

/// Source sheets are 2 columns x 4 rows of frames.
pub const SRC_GRID: GridShape = GridShape { rows: 4, cols: 2 };
pub const SRC_SIZE: FrameSize = FrameSize::new(640, 1738);
/// Every extracted frame is resized to this before downscaling.
pub const FRAME_SIZE: FrameSize = FrameSize::new(320, 434);
/// Frames per row of the packed sheet.
pub const OUT_COLS: u32 = 8;

/// Every knob of a packing run. [`PackConfig::default`] is the tool's fixed setup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackConfig {
    /// Directory holding the source sheets and receiving the packed output.
    pub assets_dir: PathBuf,
    pub source_prefix: String,
    pub extension: String,
    pub output_name: String,
    pub sheet_key: String,
    pub grid: GridShape,
    /// Nominal source size; deviations are reported, not rejected.
    pub source_size: FrameSize,
    /// Full-resolution size of each normalized frame.
    pub frame_size: FrameSize,
    pub out_cols: u32,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            source_prefix: SOURCE_PREFIX.to_string(),
            extension: SOURCE_EXTENSION.to_string(),
            output_name: OUTPUT_NAME.to_string(),
            sheet_key: SHEET_KEY.to_string(),
            grid: SRC_GRID,
            source_size: SRC_SIZE,
            frame_size: FRAME_SIZE,
            out_cols: OUT_COLS,
        }
    }
}

impl PackConfig {
    /// Default setup rooted at another assets directory.
    pub fn with_assets_dir(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> PackResult<()> {
        if self.grid.rows == 0 || self.grid.cols == 0 {
            return Err(SpritePackError::validation(
                "source grid rows and cols must be > 0",
            ));
        }
        if self.out_cols == 0 {
            return Err(SpritePackError::validation("output columns must be > 0"));
        }
        if self.half_frame_size().is_empty() {
            return Err(SpritePackError::validation(format!(
                "frame size {} is too small to downscale",
                self.frame_size
            )));
        }
        if self.source_prefix.is_empty() || self.extension.is_empty() {
            return Err(SpritePackError::validation(
                "source prefix and extension must be non-empty",
            ));
        }
        Ok(())
    }

    /// Glob matching the source sheets, e.g. `assets/buddy-intro-*.png`.
    ///
    /// Everything but the `*` is escaped, so a directory named `sprites[v2]`
    /// matches literally.
    pub fn pattern(&self) -> String {
        let dir = glob::Pattern::escape(&self.assets_dir.to_string_lossy());
        PathBuf::from(dir)
            .join(format!(
                "{}*.{}",
                glob::Pattern::escape(&self.source_prefix),
                glob::Pattern::escape(&self.extension)
            ))
            .to_string_lossy()
            .into_owned()
    }

    pub fn output_path(&self) -> PathBuf {
        self.assets_dir.join(&self.output_name)
    }

    /// Frame size after the half-res downscale.
    pub fn half_frame_size(&self) -> FrameSize {
        self.frame_size.halved()
    }

    /// Output path as the game loads it: `<assets dir name>/<output name>`.
    pub fn web_path(&self) -> String {
        let dir = self
            .assets_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_ASSETS_DIR.to_string());
        format!("{dir}/{}", self.output_name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/config.rs"]
mod tests;
