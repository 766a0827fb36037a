//! Paths-descriptor loading and the generated-path length guard.
//!
//! Every sub-project may carry a `paths.toml` descriptor declaring its
//! named filesystem locations:
//!
//! ```toml
//! [paths]
//! data_dir = "data"
//! models_dir = "data/models"
//! ```
//!
//! Values are resolved against the descriptor's own directory. At load
//! time each resolved absolute path is checked against the length ceiling;
//! a violation is fatal and names the offending key and its length. This
//! check runs both when a project is freshly materialized and on demand
//! via `subforge check-paths`.

use crate::core::error::SubforgeError;
use crate::core::layout::Layout;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the descriptor inside a project directory.
pub const DESCRIPTOR_FILE: &str = "paths.toml";

#[derive(Debug, Deserialize)]
struct Descriptor {
    #[serde(default)]
    paths: BTreeMap<String, PathBuf>,
}

/// Load and check the descriptor of the project at `project_dir`.
///
/// Returns the resolved `(name, absolute path)` pairs in key order.
/// Missing descriptor is `DescriptorNotFound`; use [`check_if_present`]
/// where an absent descriptor is acceptable.
pub fn load_and_check(
    layout: &Layout,
    project_dir: &Path,
) -> Result<Vec<(String, PathBuf)>, SubforgeError> {
    let descriptor_path = project_dir.join(DESCRIPTOR_FILE);
    if !descriptor_path.is_file() {
        return Err(SubforgeError::DescriptorNotFound(descriptor_path));
    }

    let text = fs::read_to_string(&descriptor_path).map_err(SubforgeError::Io)?;
    let descriptor: Descriptor =
        toml::from_str(&text).map_err(|source| SubforgeError::DescriptorParse {
            path: descriptor_path.clone(),
            source,
        })?;

    let mut resolved = Vec::with_capacity(descriptor.paths.len());
    for (name, value) in descriptor.paths {
        let absolute = if value.is_absolute() {
            value
        } else {
            project_dir.join(value)
        };
        let as_str = absolute.to_string_lossy();
        if as_str.len() >= layout.max_path_len {
            return Err(SubforgeError::PathTooLong {
                name,
                len: as_str.len(),
                max: layout.max_path_len,
                path: as_str.into_owned(),
            });
        }
        resolved.push((name, absolute));
    }
    Ok(resolved)
}

/// Run the guard only if the project carries a descriptor.
pub fn check_if_present(
    layout: &Layout,
    project_dir: &Path,
) -> Result<Vec<(String, PathBuf)>, SubforgeError> {
    if project_dir.join(DESCRIPTOR_FILE).is_file() {
        load_and_check(layout, project_dir)
    } else {
        Ok(Vec::new())
    }
}
