use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::Result;

/// Config file picked up from the working directory by the entry points.
pub const CONFIG_FILE: &str = "flipbook.json";

/// Locations and knobs for one asset build.
///
/// Every key is optional in the JSON form; missing keys take the defaults
/// below.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AssetConfig {
    // ============ Input ============
    /// Source document, never modified
    pub source_pdf: PathBuf,

    // ============ Output layout ============
    /// Root directory all generated assets land in
    pub asset_root: PathBuf,
    /// Page-image subdirectory under `asset_root`
    pub pages_dir: String,
    /// Manifest filename under `asset_root`
    pub manifest_file: String,
    /// Audio clip filename under `asset_root`
    pub audio_file: String,
    /// Prefix of every manifest entry, always forward-slash separated
    pub entry_prefix: String,

    // ============ Page generation ============
    /// Extension of rasterized pages
    pub raster_extension: String,
    /// Number of placeholder pages generated on fallback
    pub placeholder_count: u32,
    /// Rasterization zoom relative to the native page size
    pub zoom: f32,
    /// Extra directory searched for the pdfium shared library
    pub pdfium_dir: Option<PathBuf>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            source_pdf: PathBuf::from("../quran3.pdf"),
            asset_root: PathBuf::from("assets"),
            pages_dir: "pages".to_string(),
            manifest_file: "pages.json".to_string(),
            audio_file: "page.wav".to_string(),
            entry_prefix: "assets/pages".to_string(),
            raster_extension: "jpg".to_string(),
            placeholder_count: 10,
            zoom: 2.0,
            pdfium_dir: None,
        }
    }
}

impl AssetConfig {
    /// Loads the config at `path`, or the defaults when no file is there.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        log::info!("[Config] loaded {}", path.display());
        Ok(config)
    }

    /// Same layout rooted somewhere else; used to redirect a build.
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = root.into();
        self
    }

    pub fn pages_path(&self) -> PathBuf {
        self.asset_root.join(&self.pages_dir)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.asset_root.join(&self.manifest_file)
    }

    pub fn audio_path(&self) -> PathBuf {
        self.asset_root.join(&self.audio_file)
    }

    /// Manifest entry for a file in the pages directory.
    pub fn page_entry(&self, file_name: &str) -> String {
        let prefix = self.entry_prefix.trim_end_matches('/');
        if prefix.is_empty() {
            file_name.to_string()
        } else {
            format!("{}/{}", prefix, file_name)
        }
    }

    /// Inverse of [`page_entry`](Self::page_entry). `None` when the entry
    /// does not live under `entry_prefix`.
    pub fn entry_file_name<'a>(&self, entry: &'a str) -> Option<&'a str> {
        let prefix = self.entry_prefix.trim_end_matches('/');
        let rest = if prefix.is_empty() {
            entry
        } else {
            entry.strip_prefix(prefix)?.strip_prefix('/')?
        };
        if rest.is_empty() || rest.contains('/') {
            return None;
        }
        Some(rest)
    }

    /// Creates the pages directory and any missing parents.
    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(self.pages_path())?;
        Ok(())
    }
}

/// `001.jpg`, `002.jpg`, ... Sequence numbers start at 1.
pub fn page_file_name(seq: u32, extension: &str) -> String {
    format!("{:03}.{}", seq, extension)
}
