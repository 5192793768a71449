//! Clean target implementation.
//!
//! Removes generated artifacts, ignoring anything already absent, so the
//! target is idempotent: running it twice leaves the same state as once.
use log::*;
use std::{fs, io, path::Path};

use crate::{cli, command::common, config::Config, result::Result};
use color_eyre::eyre::WrapErr;

/// Remove build, dist, doc, and cache artifacts from the current directory.
pub fn execute(args: &cli::Args) -> Result<()> {
    let config = common::resolve_config(args)?;
    remove_artifacts(Path::new("."), &config)
}

/// Remove all generated artifacts under `root`: the build directory, the
/// dist directory, the doc output directory, `*.egg-info` directories at
/// the root, and `__pycache__` directories anywhere below it.
pub fn remove_artifacts(root: &Path, config: &Config) -> Result<()> {
    // doc output usually lives under build/, but both are removed in case
    // it was configured elsewhere
    remove_dir(&root.join("build"))?;
    remove_dir(&root.join(&config.dist_dir))?;
    remove_dir(&root.join(&config.doc.output))?;

    remove_egg_info(root)?;
    remove_pycache(root)?;

    Ok(())
}

/// Remove a directory tree, treating absence as success.
fn remove_dir(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => {
            info!("removed {}", path.display());
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err)
            .wrap_err_with(|| format!("failed to remove {}", path.display())),
    }
}

/// Remove `*.egg-info` directories at the project root.
fn remove_egg_info(root: &Path) -> Result<()> {
    for entry in fs::read_dir(root)? {
        let entry = entry?;

        if !entry.file_type()?.is_dir() {
            continue;
        }

        if entry.file_name().display().to_string().ends_with(".egg-info") {
            remove_dir(&entry.path())?;
        }
    }

    Ok(())
}

/// Recursively remove `__pycache__` directories, skipping `.git`.
fn remove_pycache(dir: &Path) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;

        if !entry.file_type()?.is_dir() {
            continue;
        }

        let name = entry.file_name();

        if name == ".git" {
            continue;
        }

        if name == "__pycache__" {
            remove_dir(&entry.path())?;
        } else {
            remove_pycache(&entry.path())?;
        }
    }

    Ok(())
}
