use crate::{
    assets::{decode::load_source, discover::discover_sources},
    encode::png::write_png,
    foundation::error::{PackResult, SpritePackError},
    frames::{downscale::downscale_frames, extract::extract_frames},
    pack::sheet::{PackLayout, pack_frames},
    pipeline::{
        config::PackConfig,
        report::{PackReport, SourceSummary},
    },
};

/// Discover, slice, downscale, pack and write the sheet described by `cfg`.
///
/// Fails with [`SpritePackError::NoSources`] before touching the output when the
/// pattern matches nothing. Any decode or IO error aborts the whole run.
#[tracing::instrument(skip(cfg), fields(assets_dir = %cfg.assets_dir.display()))]
pub fn run_pipeline(cfg: &PackConfig) -> PackResult<PackReport> {
    cfg.validate()?;

    let pattern = cfg.pattern();
    let sources = discover_sources(&pattern)?;
    if sources.is_empty() {
        return Err(SpritePackError::no_sources(pattern));
    }
    tracing::info!(count = sources.len(), "found source spritesheets");

    let mut frames = Vec::new();
    let mut summaries = Vec::with_capacity(sources.len());
    let mut warnings = Vec::new();
    for path in &sources {
        let sheet = load_source(path, cfg.source_size)?;
        if let Some(mismatch) = sheet.size_mismatch() {
            warnings.push(mismatch);
        }
        let extracted = extract_frames(&sheet, cfg.grid, cfg.frame_size)?;
        tracing::info!(file = %sheet.file_name(), frames = extracted.len(), "extracted frames");
        summaries.push(SourceSummary {
            file: sheet.file_name(),
            frames: extracted.len(),
        });
        frames.extend(extracted);
    }

    let total_frames = frames.len();
    let full_layout = PackLayout::new(total_frames, cfg.out_cols, cfg.frame_size)?;

    let half = downscale_frames(&frames);
    drop(frames);
    let (layout, sheet) = pack_frames(&half, cfg.out_cols)?;

    let output_path = cfg.output_path();
    let file_size_bytes = write_png(&sheet, &output_path)?;

    Ok(PackReport {
        sources: summaries,
        warnings,
        total_frames,
        frame_size: cfg.frame_size,
        half_frame_size: layout.frame,
        full_sheet_size: full_layout.sheet_size(),
        sheet_size: layout.sheet_size(),
        cols: layout.cols,
        rows: layout.rows,
        output_path,
        file_size_bytes,
        sheet_key: cfg.sheet_key.clone(),
        web_path: cfg.web_path(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/driver.rs"]
mod tests;
