//! Orchestration for the flipbook asset build.
//!
//! Each binary under `src/bin` is one independent, argument-less tool.
//! They share logging setup and config loading from here.

use anyhow::{Context, Result};
use flipbook_audio::ClipSpec;
use flipbook_core::{AssetConfig, Manifest, CONFIG_FILE};
use flipbook_render::{Conversion, Unavailable};
use flipbook_verify::VerifyOptions;
use rand::Rng;
use std::path::Path;

/// Where the pages listed in the manifest came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSource {
    Rasterized,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepareReport {
    pub pages: Vec<String>,
    pub source: PageSource,
}

/// Installs the process-wide logger at a fixed `Info` level.
pub fn init_logging() {
    log_builder().init();
}

fn log_builder() -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None);
    builder
}

/// Config from `flipbook.json` in the working directory, or the defaults.
pub fn load_config() -> Result<AssetConfig> {
    AssetConfig::load_or_default(Path::new(CONFIG_FILE))
        .with_context(|| format!("failed to read {}", CONFIG_FILE))
}

/// Full asset build: audio clip, page images, manifest.
///
/// Page images come from the source PDF when it and pdfium are both
/// available, otherwise from the placeholder generator.
pub fn prepare_assets<R: Rng + ?Sized>(config: &AssetConfig, rng: &mut R) -> Result<PrepareReport> {
    config
        .ensure_dirs()
        .context("failed to create output directories")?;

    flipbook_audio::write_clip(&config.audio_path(), &ClipSpec::default(), rng)
        .context("failed to write audio clip")?;

    let conversion = flipbook_render::convert_pdf(config).context("PDF conversion failed")?;

    let report = match rasterized_pages(conversion) {
        Some(pages) => PrepareReport {
            pages,
            source: PageSource::Rasterized,
        },
        None => {
            log::info!("[Prepare] falling back to placeholders");
            let pages = flipbook_render::generate_placeholders(config)
                .context("failed to write placeholder pages")?;
            PrepareReport {
                pages,
                source: PageSource::Placeholder,
            }
        }
    };

    Manifest::new(report.pages.clone())
        .save(&config.manifest_path())
        .context("failed to write manifest")?;
    log::info!(
        "[Prepare] created {} with {} pages",
        config.manifest_file,
        report.pages.len()
    );

    let check = flipbook_verify::verify_entries(
        config,
        &Manifest::new(report.pages.clone()),
        &VerifyOptions::default(),
    );
    if !check.ok {
        log::warn!("[Prepare] manifest has {} problems", check.warnings.len());
    }

    Ok(report)
}

/// Pages to publish from a conversion attempt, or `None` to fall back.
fn rasterized_pages(conversion: Conversion) -> Option<Vec<String>> {
    match conversion {
        Conversion::Converted(pages) if !pages.is_empty() => Some(pages),
        Conversion::Converted(_) => {
            log::warn!("[Prepare] document has no pages");
            None
        }
        Conversion::Unavailable(Unavailable::SourceMissing(path)) => {
            log::info!("[Prepare] no source document at {}", path.display());
            None
        }
        Conversion::Unavailable(Unavailable::RendererMissing(reason)) => {
            log::info!("[Prepare] renderer unavailable: {}", reason);
            None
        }
    }
}
