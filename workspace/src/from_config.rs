//! Compute and save every figure described by a TOML config file.
//!
//! Usage: `from_config [path]`, with `path` defaulting to `hom.toml`.

use std::{ env, path::PathBuf };
use spectral_hom::config::HomConfig;
use tracing::info;
use lib::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let path
        = env::args().nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("hom.toml"));

    let config = HomConfig::load(&path)?;
    info!(
        path = %path.display(),
        sources = config.sources.len(),
        materials = config.materials.len()
    );
    for fig in config.figures()? {
        let saved = fig.save(&config.output.dir)?;
        info!(figure = fig.name(), path = %saved.display(), "saved");
    }

    info!("done");
    Ok(())
}
