//! Placeholder pages used when no real conversion happens.

use flipbook_core::{page_file_name, AssetConfig};
use std::fs;

const PLACEHOLDER_EXTENSION: &str = "svg";

/// A 600x900 page showing its number and a conversion notice.
pub fn placeholder_svg(page: u32) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 600 900">
  <rect width="100%" height="100%" fill="#fdfae7"/>
  <rect x="20" y="20" width="560" height="860" fill="none" stroke="#665544" stroke-width="4"/>
  <text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle" font-family="Arial" font-size="80" fill="#333">Page {page}</text>
  <text x="50%" y="90%" dominant-baseline="middle" text-anchor="middle" font-family="Arial" font-size="30" fill="#888">PDF Conversion Failed/Skipped</text>
</svg>"##
    )
}

/// Writes `001.svg` through `{count:03}.svg` into the pages directory and
/// returns their manifest entries in page order.
pub fn generate_placeholders(config: &AssetConfig) -> std::io::Result<Vec<String>> {
    log::info!(
        "[Placeholder] generating {} placeholder pages",
        config.placeholder_count
    );

    let pages_dir = config.pages_path();
    fs::create_dir_all(&pages_dir)?;

    let mut generated = Vec::with_capacity(config.placeholder_count as usize);
    for page in 1..=config.placeholder_count {
        let file_name = page_file_name(page, PLACEHOLDER_EXTENSION);
        fs::write(pages_dir.join(&file_name), placeholder_svg(page))?;
        generated.push(config.page_entry(&file_name));
    }

    Ok(generated)
}
