//! Rewrites the manifest from the raster pages present on disk.

use anyhow::Result;
use flipbook_core::{rebuild_manifest, RebuildOutcome};

fn main() -> Result<()> {
    flipbook_assets::init_logging();

    let config = flipbook_assets::load_config()?;
    match rebuild_manifest(&config)? {
        RebuildOutcome::Rewritten { pages } => {
            log::info!("updated {} with {} pages", config.manifest_file, pages.len())
        }
        RebuildOutcome::NoImages => log::info!("manifest left unchanged"),
    }
    Ok(())
}
