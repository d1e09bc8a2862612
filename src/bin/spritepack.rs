use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use spritepack::{PackConfig, SpritePackError};

/// Pack `buddy-intro-*.png` sprite sheets into one half-res sheet.
#[derive(Parser, Debug)]
#[command(name = "spritepack", version)]
struct Cli {
    /// Directory holding the source sheets; the packed sheet is written here too.
    #[arg(long, default_value = spritepack::DEFAULT_ASSETS_DIR)]
    assets_dir: PathBuf,

    /// Print the report as JSON instead of the text summary.
    #[arg(long)]
    json: bool,

    /// Log per-cell details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = PackConfig::with_assets_dir(cli.assets_dir.clone());
    let report = match spritepack::run_pipeline(&cfg) {
        Ok(report) => report,
        Err(SpritePackError::NoSources { pattern }) => {
            println!("No files matching {pattern}");
            std::process::exit(1);
        }
        Err(e) => return Err(anyhow::Error::new(e).context("pack sprite sheets")),
    };

    if cli.json {
        let mut value = serde_json::to_value(&report).context("serialize pack report")?;
        value["usage_hint"] = serde_json::Value::String(report.usage_hint());
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        for line in report.summary_lines() {
            println!("{line}");
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(level)
        .init();
}
