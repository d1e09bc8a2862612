use std::path::PathBuf;

use crate::{assets::decode::SizeMismatch, foundation::core::FrameSize};

/// Frames taken from one source sheet.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SourceSummary {
    pub file: String,
    pub frames: usize,
}

/// Outcome of a packing run, printed by the CLI.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PackReport {
    pub sources: Vec<SourceSummary>,
    /// Sources whose size differed from the nominal one.
    pub warnings: Vec<SizeMismatch>,
    pub total_frames: usize,
    /// Frame size before the half-res downscale.
    pub frame_size: FrameSize,
    /// Frame size in the written sheet.
    pub half_frame_size: FrameSize,
    /// Sheet size had it been packed at full resolution.
    pub full_sheet_size: FrameSize,
    /// Size of the written sheet.
    pub sheet_size: FrameSize,
    pub cols: u32,
    pub rows: u32,
    pub output_path: PathBuf,
    pub file_size_bytes: u64,
    pub sheet_key: String,
    /// Output path as referenced from the game, e.g. `assets/buddy-intro-packed.png`.
    pub web_path: String,
}

impl PackReport {
    /// Sprite table entry for the game's sheet list:
    /// `['key', 'path', frame_w, frame_h, cols, rows]`.
    pub fn usage_hint(&self) -> String {
        format!(
            "['{}', '{}', {}, {}, {}, {}]",
            self.sheet_key,
            self.web_path,
            self.half_frame_size.width,
            self.half_frame_size.height,
            self.cols,
            self.rows
        )
    }

    pub fn file_size_mib(&self) -> f64 {
        self.file_size_bytes as f64 / 1024.0 / 1024.0
    }

    /// Human-readable summary, one line per entry.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        lines.push(format!(
            "Found {} source spritesheets",
            self.sources.len()
        ));
        for s in &self.sources {
            for w in self.warnings.iter().filter(|w| w.file == s.file) {
                lines.push(format!("  WARNING: {w}"));
            }
            lines.push(format!("  {}: extracted {} frames", s.file, s.frames));
        }
        lines.push(String::new());
        lines.push(format!("Total frames: {}", self.total_frames));
        lines.push(format!("Frame size: {}", self.frame_size));
        lines.push(format!(
            "Output: {} ({} cols x {} rows)",
            self.full_sheet_size, self.cols, self.rows
        ));
        lines.push(String::new());
        lines.push(format!("Saved: {}", self.output_path.display()));
        lines.push(format!(
            "  Dimensions: {} (half-res from {})",
            self.sheet_size, self.full_sheet_size
        ));
        lines.push(format!(
            "  Frames: {} ({} each)",
            self.total_frames, self.half_frame_size
        ));
        lines.push(format!("  Grid: {} cols x {} rows", self.cols, self.rows));
        lines.push(format!("  File size: {:.1} MB", self.file_size_mib()));
        lines.push(String::new());
        lines.push("Sprite table entry:".to_string());
        lines.push(format!("  {}", self.usage_hint()));
        lines
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/report.rs"]
mod tests;
