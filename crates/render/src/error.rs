//! Rendering error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to load PDF: {0}")]
    Load(String),

    #[error("failed to render page {page}: {message}")]
    Render { page: usize, message: String },

    #[error("failed to save page image: {0}")]
    Save(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
