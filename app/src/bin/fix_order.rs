//! Removes the fourth page from the manifest.

use anyhow::Result;
use flipbook_core::{patch_manifest, PatchOutcome};

fn main() -> Result<()> {
    flipbook_assets::init_logging();

    let config = flipbook_assets::load_config()?;
    match patch_manifest(&config)? {
        PatchOutcome::Removed { remaining, .. } => {
            log::info!("{} now lists {} pages", config.manifest_file, remaining)
        }
        PatchOutcome::TooShort { .. } | PatchOutcome::ManifestMissing => {
            log::info!("manifest left unchanged")
        }
    }
    Ok(())
}
