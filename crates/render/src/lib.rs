//! Page images for the flipbook: PDF rasterization and placeholders.

mod error;
mod pdfium;
mod placeholder;

pub use error::RenderError;
pub use pdfium::bind_pdfium;
pub use placeholder::{generate_placeholders, placeholder_svg};

use flipbook_core::{page_file_name, AssetConfig};
use image::ImageFormat;
use pdfium_render::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Result of a conversion attempt that did not hit a fatal error.
#[derive(Debug, Clone, PartialEq)]
pub enum Conversion {
    /// Manifest entries of the rasterized pages, in document order
    Converted(Vec<String>),
    /// Conversion could not start; callers fall back to placeholders
    Unavailable(Unavailable),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Unavailable {
    SourceMissing(PathBuf),
    RendererMissing(String),
}

impl std::fmt::Display for Unavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unavailable::SourceMissing(path) => write!(f, "PDF not found at {}", path.display()),
            Unavailable::RendererMissing(reason) => write!(f, "{}", reason),
        }
    }
}

/// Rasterizes every page of the configured source PDF.
///
/// A missing source or a missing pdfium library is reported as
/// [`Conversion::Unavailable`]. Anything that goes wrong once pdfium has
/// the document is an error; pages already written are left in place.
pub fn convert_pdf(config: &AssetConfig) -> Result<Conversion, RenderError> {
    if !config.source_pdf.exists() {
        log::warn!("[Convert] PDF not found at {}", config.source_pdf.display());
        return Ok(Conversion::Unavailable(Unavailable::SourceMissing(
            config.source_pdf.clone(),
        )));
    }

    let pdfium = match bind_pdfium(config) {
        Ok(pdfium) => pdfium,
        Err(reason) => {
            log::warn!("[Convert] {}", reason);
            return Ok(Conversion::Unavailable(Unavailable::RendererMissing(reason)));
        }
    };

    log::info!("[Convert] converting PDF: {}", config.source_pdf.display());
    let pages = rasterize_document(&pdfium, config)?;
    Ok(Conversion::Converted(pages))
}

fn rasterize_document(pdfium: &Pdfium, config: &AssetConfig) -> Result<Vec<String>, RenderError> {
    let document = pdfium
        .load_pdf_from_file(&config.source_pdf, None)
        .map_err(|e| RenderError::Load(e.to_string()))?;

    let pages_dir = config.pages_path();
    fs::create_dir_all(&pages_dir)?;

    let page_count = document.pages().len();
    let mut generated = Vec::with_capacity(page_count as usize);

    for page_idx in 0..page_count {
        let page = document
            .pages()
            .get(page_idx)
            .map_err(|e| RenderError::Render {
                page: page_idx as usize,
                message: e.to_string(),
            })?;

        // PDF points at 72 DPI, scaled by the zoom factor
        let target_width = (page.width().value * config.zoom) as i32;
        let target_height = (page.height().value * config.zoom) as i32;

        let render_config = PdfRenderConfig::new()
            .set_target_width(target_width)
            .set_target_height(target_height);

        let bitmap = page
            .render_with_config(&render_config)
            .map_err(|e| RenderError::Render {
                page: page_idx as usize,
                message: e.to_string(),
            })?;

        let file_name = page_file_name(page_idx as u32 + 1, &config.raster_extension);
        bitmap
            .as_image()
            .to_rgb8()
            .save_with_format(pages_dir.join(&file_name), ImageFormat::Jpeg)?;

        log::info!(
            "[Convert] saved {} ({}x{} px)",
            file_name,
            target_width,
            target_height
        );
        generated.push(config.page_entry(&file_name));
    }

    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let config = AssetConfig {
            source_pdf: dir.path().join("absent.pdf"),
            ..AssetConfig::default()
        }
        .with_asset_root(dir.path().join("assets"));

        let conversion = convert_pdf(&config).unwrap();
        assert_eq!(
            conversion,
            Conversion::Unavailable(Unavailable::SourceMissing(dir.path().join("absent.pdf")))
        );
        assert!(!config.pages_path().exists());
    }

    #[test]
    fn test_unavailable_display() {
        let reason = Unavailable::SourceMissing(PathBuf::from("../book.pdf"));
        assert_eq!(reason.to_string(), "PDF not found at ../book.pdf");

        let reason = Unavailable::RendererMissing("pdfium library not available".to_string());
        assert_eq!(reason.to_string(), "pdfium library not available");
    }
}
