//! Post-build consistency checks for the page manifest.
//!
//! Nothing here modifies the manifest or the pages directory.

use flipbook_core::{AssetConfig, Manifest};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOptions {
    /// Require every entry's file to exist in the pages directory
    pub check_files: bool,
    pub check_duplicates: bool,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            check_files: true,
            check_duplicates: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResult {
    pub ok: bool,
    pub warnings: Vec<String>,
}

pub fn verify_manifest(
    config: &AssetConfig,
    options: &VerifyOptions,
) -> flipbook_core::Result<VerifyResult> {
    let manifest = Manifest::load(&config.manifest_path())?;
    Ok(verify_entries(config, &manifest, options))
}

/// Checks `manifest` against the pages directory described by `config`.
pub fn verify_entries(
    config: &AssetConfig,
    manifest: &Manifest,
    options: &VerifyOptions,
) -> VerifyResult {
    let mut warnings = Vec::new();
    let mut seen = HashSet::new();
    let pages_dir = config.pages_path();

    for (index, entry) in manifest.pages.iter().enumerate() {
        if options.check_duplicates && !seen.insert(entry.as_str()) {
            warnings.push(format!("entry {} is a duplicate: {}", index, entry));
        }

        match config.entry_file_name(entry) {
            Some(name) => {
                if options.check_files && !pages_dir.join(name).is_file() {
                    warnings.push(format!("entry {} has no file on disk: {}", index, entry));
                }
            }
            None => warnings.push(format!(
                "entry {} is outside {}: {}",
                index, config.entry_prefix, entry
            )),
        }
    }

    for warning in &warnings {
        log::warn!("[Verify] {}", warning);
    }

    VerifyResult {
        ok: warnings.is_empty(),
        warnings,
    }
}
