//! Core types for the flipbook asset pipeline.
//!
//! Holds the pipeline configuration and the page manifest, plus the two
//! corrective tools that operate on a manifest already on disk.

pub mod config;
pub mod manifest;

pub use config::{page_file_name, AssetConfig, CONFIG_FILE};
pub use manifest::{
    patch_manifest, rebuild_manifest, Manifest, PatchOutcome, RebuildOutcome, REMOVED_PAGE_INDEX,
};

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
