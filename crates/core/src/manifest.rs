//! The page manifest and the tools that repair it.
//!
//! The manifest is a JSON object whose `pages` key lists page image paths
//! in reading order. Other top-level keys survive a patch. Every write is a
//! whole-file overwrite.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::{AssetConfig, Result};

/// Position removed by [`patch_manifest`], i.e. the fourth page.
pub const REMOVED_PAGE_INDEX: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Relative page image paths, in display order
    pub pages: Vec<String>,
    /// Any other top-level keys, carried through a load/save unchanged
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Manifest {
    pub fn new(pages: Vec<String>) -> Self {
        Self {
            pages,
            extra: serde_json::Map::new(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Pretty-printed with two-space indentation.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RebuildOutcome {
    /// Manifest rewritten with these entries
    Rewritten { pages: Vec<String> },
    /// Nothing matched; the manifest was left alone
    NoImages,
}

/// Rewrites the manifest from the raster images currently on disk.
///
/// File names are sorted lexicographically, which is numeric order for the
/// zero-padded names the converter writes.
pub fn rebuild_manifest(config: &AssetConfig) -> Result<RebuildOutcome> {
    let pages_dir = config.pages_path();
    let mut names = Vec::new();

    if pages_dir.is_dir() {
        for entry in fs::read_dir(&pages_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            let matches = path
                .extension()
                .and_then(std::ffi::OsStr::to_str)
                .is_some_and(|ext| ext == config.raster_extension);
            if !matches {
                continue;
            }
            if let Some(name) = path.file_name().and_then(std::ffi::OsStr::to_str) {
                names.push(name.to_string());
            }
        }
    }

    if names.is_empty() {
        log::warn!(
            "[Rebuild] no .{} files found in {}",
            config.raster_extension,
            pages_dir.display()
        );
        return Ok(RebuildOutcome::NoImages);
    }

    names.sort();
    let pages: Vec<String> = names.iter().map(|name| config.page_entry(name)).collect();

    Manifest::new(pages.clone()).save(&config.manifest_path())?;
    log::info!("[Rebuild] manifest updated with {} pages", pages.len());

    Ok(RebuildOutcome::Rewritten { pages })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Entry at `index` dropped, `remaining` entries written back
    Removed {
        index: usize,
        entry: String,
        remaining: usize,
    },
    /// Manifest has no entry at the fixed index; left untouched
    TooShort { len: usize },
    /// No manifest file to patch
    ManifestMissing,
}

/// Drops the entry at [`REMOVED_PAGE_INDEX`] and rewrites the manifest.
///
/// The index is fixed; the manifest content is not inspected to decide
/// which page goes.
pub fn patch_manifest(config: &AssetConfig) -> Result<PatchOutcome> {
    let path = config.manifest_path();
    if !path.exists() {
        log::warn!("[Patch] manifest not found: {}", path.display());
        return Ok(PatchOutcome::ManifestMissing);
    }

    let mut manifest = Manifest::load(&path)?;
    if manifest.len() <= REMOVED_PAGE_INDEX {
        log::warn!(
            "[Patch] only {} pages, nothing at index {}",
            manifest.len(),
            REMOVED_PAGE_INDEX
        );
        return Ok(PatchOutcome::TooShort {
            len: manifest.len(),
        });
    }

    let entry = manifest.pages.remove(REMOVED_PAGE_INDEX);
    log::info!("[Patch] removed page at index {}: {}", REMOVED_PAGE_INDEX, entry);

    manifest.save(&path)?;
    log::info!("[Patch] manifest updated");

    Ok(PatchOutcome::Removed {
        index: REMOVED_PAGE_INDEX,
        entry,
        remaining: manifest.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_config(dir: &Path) -> AssetConfig {
        AssetConfig::default().with_asset_root(dir.join("assets"))
    }

    fn pages(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_manifest_json_layout() {
        let manifest = Manifest::new(pages(&["assets/pages/001.jpg", "assets/pages/002.jpg"]));
        let json = manifest.to_json().unwrap();
        assert_eq!(
            json,
            "{\n  \"pages\": [\n    \"assets/pages/001.jpg\",\n    \"assets/pages/002.jpg\"\n  ]\n}"
        );
    }

    #[test]
    fn test_manifest_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("pages.json");
        let manifest = Manifest::new(pages(&["a", "b"]));
        manifest.save(&path).unwrap();
        assert_eq!(Manifest::load(&path).unwrap(), manifest);
    }

    #[test]
    fn test_rebuild_sorts_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        let config = scratch_config(dir.path());
        config.ensure_dirs().unwrap();
        let pages_dir = config.pages_path();
        for name in ["010.jpg", "002.jpg", "001.jpg", "003.svg", "notes.txt"] {
            fs::write(pages_dir.join(name), b"x").unwrap();
        }
        fs::create_dir(pages_dir.join("004.jpg")).unwrap();

        let outcome = rebuild_manifest(&config).unwrap();
        let expected = pages(&[
            "assets/pages/001.jpg",
            "assets/pages/002.jpg",
            "assets/pages/010.jpg",
        ]);
        assert_eq!(
            outcome,
            RebuildOutcome::Rewritten {
                pages: expected.clone()
            }
        );
        assert_eq!(Manifest::load(&config.manifest_path()).unwrap().pages, expected);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let config = scratch_config(dir.path());
        config.ensure_dirs().unwrap();
        for name in ["002.jpg", "001.jpg", "003.jpg"] {
            fs::write(config.pages_path().join(name), b"x").unwrap();
        }

        rebuild_manifest(&config).unwrap();
        let first = fs::read(config.manifest_path()).unwrap();
        rebuild_manifest(&config).unwrap();
        let second = fs::read(config.manifest_path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rebuild_without_images_leaves_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let config = scratch_config(dir.path());
        config.ensure_dirs().unwrap();
        fs::write(config.pages_path().join("001.svg"), b"x").unwrap();
        let existing = Manifest::new(pages(&["assets/pages/001.svg"]));
        existing.save(&config.manifest_path()).unwrap();

        assert_eq!(rebuild_manifest(&config).unwrap(), RebuildOutcome::NoImages);
        assert_eq!(Manifest::load(&config.manifest_path()).unwrap(), existing);
    }

    #[test]
    fn test_rebuild_missing_pages_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = scratch_config(dir.path());
        assert_eq!(rebuild_manifest(&config).unwrap(), RebuildOutcome::NoImages);
        assert!(!config.manifest_path().exists());
    }

    #[test]
    fn test_patch_removes_fourth_entry() {
        let dir = tempfile::tempdir().unwrap();
        let config = scratch_config(dir.path());
        Manifest::new(pages(&["a", "b", "c", "d", "e"]))
            .save(&config.manifest_path())
            .unwrap();

        let outcome = patch_manifest(&config).unwrap();
        assert_eq!(
            outcome,
            PatchOutcome::Removed {
                index: 3,
                entry: "d".to_string(),
                remaining: 4,
            }
        );
        assert_eq!(
            Manifest::load(&config.manifest_path()).unwrap().pages,
            pages(&["a", "b", "c", "e"])
        );
    }

    #[test]
    fn test_patch_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let config = scratch_config(dir.path());
        let path = config.manifest_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            r#"{"title": "Mushaf", "pages": ["a", "b", "c", "d"], "version": 2}"#,
        )
        .unwrap();

        patch_manifest(&config).unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.pages, pages(&["a", "b", "c"]));
        assert_eq!(manifest.extra.get("title"), Some(&serde_json::json!("Mushaf")));
        assert_eq!(manifest.extra.get("version"), Some(&serde_json::json!(2)));
    }

    #[test]
    fn test_patch_short_manifest_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let config = scratch_config(dir.path());
        let path = config.manifest_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        // hand-written layout must survive byte for byte
        let raw = "{\"pages\": [\"a\", \"b\", \"c\"]}";
        fs::write(&path, raw).unwrap();

        assert_eq!(patch_manifest(&config).unwrap(), PatchOutcome::TooShort { len: 3 });
        assert_eq!(fs::read_to_string(&path).unwrap(), raw);
    }

    #[test]
    fn test_patch_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let config = scratch_config(dir.path());
        assert_eq!(patch_manifest(&config).unwrap(), PatchOutcome::ManifestMissing);
        assert!(!config.manifest_path().exists());
    }

    #[test]
    fn test_patch_malformed_manifest_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = scratch_config(dir.path());
        let path = config.manifest_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{\"entries\": []}").unwrap();
        assert!(patch_manifest(&config).is_err());
    }
}
