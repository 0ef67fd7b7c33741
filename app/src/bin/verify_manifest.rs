//! Reports manifest entries that do not match the pages directory.

use anyhow::{Context, Result};
use flipbook_verify::{verify_manifest, VerifyOptions};

fn main() -> Result<()> {
    flipbook_assets::init_logging();

    let config = flipbook_assets::load_config()?;
    let result = verify_manifest(&config, &VerifyOptions::default())
        .with_context(|| format!("failed to read {}", config.manifest_path().display()))?;

    if result.ok {
        log::info!("manifest is consistent");
    } else {
        log::warn!("{} problems found", result.warnings.len());
    }
    Ok(())
}
