use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use tracing::debug;

const STORE_DIR: &str = ".secrets";
const STORE_FILE: &str = "spknock-targets.conf";

/// Resolves the target store path, creating `~/.secrets/` for the default one.
pub fn store_path(custom: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(path) = custom {
        return Ok(path);
    }

    let dir: PathBuf = dirs::home_dir()
        .context("could not determine the home directory")?
        .join(STORE_DIR);

    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating store directory {}", dir.display()))?;
        debug!("Created {}", dir.display());
    }

    Ok(dir.join(STORE_FILE))
}
