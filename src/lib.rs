//! spritepack turns a set of fixed-grid sprite sheets into one packed, half-res sheet
//! for a browser game.
//!
//! # Pipeline overview
//!
//! 1. **Discover**: glob `assets/buddy-intro-*.png`, skip earlier packed output, sort by name.
//! 2. **Extract**: slice each sheet into its 2x4 grid and resize every cell to 320x434.
//! 3. **Downscale**: drop alpha and halve each frame on its own (Lanczos3).
//! 4. **Pack**: lay the frames row-major into an 8-column sheet.
//! 5. **Write**: store the sheet as a best-compression PNG, atomically.
//!
//! [`run_pipeline`] runs all of it and returns a [`PackReport`] whose
//! [`PackReport::usage_hint`] is the line to paste into the game's sprite table.
#![forbid(unsafe_code)]

mod assets;
mod encode;
mod foundation;
mod frames;
mod pack;
mod pipeline;

pub use assets::decode::{SizeMismatch, SourceSheet, load_source};
pub use assets::discover::{PACKED_MARKER, discover_sources};
pub use encode::png::{staging_path, write_png};
pub use foundation::core::{CellRect, FrameSize, GridShape};
pub use foundation::error::{PackResult, SpritePackError};
pub use foundation::math::{div_round_half_even, rows_needed, slice_bounds};
pub use frames::downscale::{downscale_frame, downscale_frames};
pub use frames::extract::{RESAMPLE_FILTER, cell_rects, extract_frames};
pub use pack::sheet::{PackLayout, pack_frames};
pub use pipeline::config::{
    DEFAULT_ASSETS_DIR, FRAME_SIZE, OUT_COLS, OUTPUT_NAME, PackConfig, SHEET_KEY, SOURCE_EXTENSION,
    SOURCE_PREFIX, SRC_GRID, SRC_SIZE,
};
pub use pipeline::driver::run_pipeline;
pub use pipeline::report::{PackReport, SourceSummary};
