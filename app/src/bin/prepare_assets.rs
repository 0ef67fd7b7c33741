//! Builds the audio clip, page images and manifest in one run.

use anyhow::Result;

fn main() -> Result<()> {
    flipbook_assets::init_logging();

    let config = flipbook_assets::load_config()?;
    let report = flipbook_assets::prepare_assets(&config, &mut rand::thread_rng())?;
    log::info!("{} pages ({:?})", report.pages.len(), report.source);
    Ok(())
}
