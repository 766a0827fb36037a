//! Entry-script relocation.
//!
//! After materialization, files named `run_*` sitting directly in the new
//! project directory are moved into the shared scripts directory, keeping
//! their (already substituted) names. The scan is non-recursive: nested
//! `run_*` files are package code and stay where they are.

use crate::core::error::SubforgeError;
use crate::core::layout::Layout;
use std::fs;
use std::path::{Path, PathBuf};

/// What to do when a relocated script's name already exists in the shared
/// scripts directory. `Overwrite` is the historical behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CollisionPolicy {
    /// Replace the existing script.
    Overwrite,
    /// Keep the existing script; leave the new one in the project.
    Skip,
    /// Abort the operation.
    Fail,
}

/// Move `run_*` files out of `project_dir` into the scripts directory,
/// creating it on demand (only when there is something to move). Returns
/// the destination paths of every script actually moved.
pub fn relocate_entry_scripts(
    layout: &Layout,
    project_dir: &Path,
    policy: CollisionPolicy,
) -> Result<Vec<PathBuf>, SubforgeError> {
    let mut matches = Vec::new();
    for entry in fs::read_dir(project_dir).map_err(SubforgeError::Io)? {
        let entry = entry.map_err(SubforgeError::Io)?;
        let path = entry.path();
        if path.is_file()
            && entry
                .file_name()
                .to_string_lossy()
                .starts_with(layout.run_prefix)
        {
            matches.push((path, entry.file_name()));
        }
    }
    if matches.is_empty() {
        return Ok(Vec::new());
    }

    let scripts_dir = layout.scripts_dir();
    fs::create_dir_all(&scripts_dir).map_err(SubforgeError::Io)?;

    let mut relocated = Vec::new();
    for (path, file_name) in matches {
        let name = file_name.to_string_lossy();
        let dest = scripts_dir.join(&file_name);
        if dest.exists() {
            match policy {
                CollisionPolicy::Fail => {
                    return Err(SubforgeError::ScriptCollision(name.into_owned()));
                }
                CollisionPolicy::Skip => continue,
                CollisionPolicy::Overwrite => {
                    // rename() onto an existing file is not portable.
                    fs::remove_file(&dest).map_err(SubforgeError::Io)?;
                }
            }
        }
        fs::rename(&path, &dest).map_err(SubforgeError::Io)?;
        relocated.push(dest);
    }
    Ok(relocated)
}
