//! Runtime binding of the pdfium shared library.
//!
//! pdfium is not linked at build time. When no copy can be found the
//! converter reports the renderer as missing and the caller falls back.

use flipbook_core::AssetConfig;
use pdfium_render::prelude::*;
use std::path::PathBuf;

/// Directories probed for the pdfium library, in order.
fn search_paths(config: &AssetConfig) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(dir) = &config.pdfium_dir {
        paths.push(dir.clone());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            paths.push(exe_dir.join("libs"));
            paths.push(exe_dir.to_path_buf());

            // .app/Contents/MacOS/bin -> .app/Contents/Resources/libs
            #[cfg(target_os = "macos")]
            {
                if let Some(contents_dir) = exe_dir.parent() {
                    paths.push(contents_dir.join("Resources").join("libs"));
                }
            }
        }
    }

    paths.push(PathBuf::from("libs"));
    paths.push(PathBuf::from("./"));

    paths
}

/// Binds pdfium from the first directory that has it, else the system
/// library. The error string describes why no binding was possible.
pub fn bind_pdfium(config: &AssetConfig) -> Result<Pdfium, String> {
    for path in search_paths(config) {
        let lib_path = Pdfium::pdfium_platform_library_name_at_path(&path);
        log::debug!("[Pdfium] trying {:?}", lib_path);

        if let Ok(bindings) = Pdfium::bind_to_library(&lib_path) {
            log::info!("[Pdfium] loaded from {:?}", path);
            return Ok(Pdfium::new(bindings));
        }
    }

    log::debug!("[Pdfium] trying system library");
    Pdfium::bind_to_system_library()
        .map(Pdfium::new)
        .map_err(|e| format!("pdfium library not available: {}", e))
}
