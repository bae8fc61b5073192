//! First-run project scaffolding.

use super::{CONTRACTS_DIR, GITKEEP, NETWORKS_FILE};
use crate::error::{ConfigError, ConfigResult};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Template written to `networks.toml` when a project has none.
pub const BLUEPRINT: &str = include_str!("../../blueprint/networks.toml");

/// Create the contracts directory and the networks file if missing.
///
/// Existing files are left untouched, so repeated calls are no-ops.
pub fn initialize(root: &Path) -> ConfigResult<()> {
    info!(root = %root.display(), "Initializing project");
    create_contracts_dir(root)?;
    create_networks_file(root)?;
    Ok(())
}

fn create_contracts_dir(root: &Path) -> ConfigResult<()> {
    create_dir(&root.join(CONTRACTS_DIR))
}

fn create_networks_file(root: &Path) -> ConfigResult<()> {
    let path = root.join(NETWORKS_FILE);
    if path.is_file() {
        debug!(file = %path.display(), "Networks file already exists");
        return Ok(());
    }

    fs::create_dir_all(root).map_err(|source| ConfigError::Scaffold {
        path: root.to_path_buf(),
        source,
    })?;
    fs::write(&path, BLUEPRINT).map_err(|source| ConfigError::Scaffold {
        path: path.clone(),
        source,
    })?;

    info!(file = %path.display(), "Created networks file");
    Ok(())
}

/// Create `dir` with an empty marker file so it survives version control.
fn create_dir(dir: &Path) -> ConfigResult<()> {
    if dir.is_dir() {
        debug!(dir = %dir.display(), "Directory already exists");
        return Ok(());
    }

    fs::create_dir_all(dir).map_err(|source| ConfigError::Scaffold {
        path: dir.to_path_buf(),
        source,
    })?;
    let marker = dir.join(GITKEEP);
    fs::write(&marker, "").map_err(|source| ConfigError::Scaffold {
        path: marker,
        source,
    })?;

    info!(dir = %dir.display(), "Created directory");
    Ok(())
}
