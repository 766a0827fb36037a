//! Project-name validation.
//!
//! The validator gates every scaffolding operation: it is a pure check
//! with no filesystem mutation, run before anything is copied. Rules are
//! applied in a fixed order and the first violation aborts.
//!
//! - No empty names, path separators, or dot segments
//! - No `-` anywhere in the name
//! - Destination must not already exist
//! - `run_` prefix is reserved for entry scripts
//! - `core` and `common` are mutually exclusive per source tree
//! - The destination path must stay under the generated-path ceiling

use crate::core::error::SubforgeError;
use crate::core::layout::{Layout, RESERVED_SHARED};

/// Discriminant selecting the materialization variant for a validated name.
///
/// `ReservedShared` covers the `core`/`common` pair, which receives only
/// the two descriptor files instead of a full template copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Regular,
    ReservedShared,
}

/// Check a candidate project name against the layout's source tree.
///
/// Returns the name's kind on success. Performs no mutation; the only
/// filesystem access is existence probing of the destination and of the
/// reserved sibling.
pub fn validate_project_name(layout: &Layout, name: &str) -> Result<NameKind, SubforgeError> {
    if name.is_empty() {
        return Err(SubforgeError::InvalidName {
            name: name.to_string(),
            reason: "name is empty".to_string(),
        });
    }
    if name == "." || name == ".." || name.contains('\\') || name.chars().any(std::path::is_separator)
    {
        return Err(SubforgeError::InvalidName {
            name: name.to_string(),
            reason: "name must be a single path segment".to_string(),
        });
    }
    if name.contains('-') {
        return Err(SubforgeError::InvalidName {
            name: name.to_string(),
            reason: "invalid character \"-\"".to_string(),
        });
    }

    let dest = layout.project_dir(name);
    if dest.exists() {
        return Err(SubforgeError::AlreadyExists(name.to_string()));
    }
    if name.starts_with(layout.run_prefix) {
        return Err(SubforgeError::ReservedPrefix(name.to_string()));
    }

    let kind = if RESERVED_SHARED.contains(&name) {
        let sibling = if name == "core" { "common" } else { "core" };
        if layout.src_dir().join(sibling).exists() {
            return Err(SubforgeError::Conflict);
        }
        NameKind::ReservedShared
    } else {
        NameKind::Regular
    };

    let dest_str = dest.to_string_lossy();
    if dest_str.len() >= layout.max_path_len {
        return Err(SubforgeError::PathTooLong {
            name: name.to_string(),
            len: dest_str.len(),
            max: layout.max_path_len,
            path: dest_str.into_owned(),
        });
    }

    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn separator_names_are_rejected() {
        let tmp = tempdir().expect("tempdir");
        let layout = Layout::new(tmp.path());
        for bad in ["", ".", "..", "a/b", "a\\b"] {
            let err = validate_project_name(&layout, bad).unwrap_err();
            assert!(matches!(err, SubforgeError::InvalidName { .. }), "{bad:?}");
        }
    }

    #[test]
    fn dash_is_checked_before_existence() {
        let tmp = tempdir().expect("tempdir");
        let layout = Layout::new(tmp.path());
        std::fs::create_dir_all(layout.project_dir("my-proj")).expect("mkdir");
        // Rule order: the dash rule fires even though the destination exists.
        let err = validate_project_name(&layout, "my-proj").unwrap_err();
        assert!(matches!(err, SubforgeError::InvalidName { .. }));
    }

    #[test]
    fn reserved_names_classify_as_shared() {
        let tmp = tempdir().expect("tempdir");
        let layout = Layout::new(tmp.path());
        assert_eq!(
            validate_project_name(&layout, "core").expect("core"),
            NameKind::ReservedShared
        );
        assert_eq!(
            validate_project_name(&layout, "widgets").expect("widgets"),
            NameKind::Regular
        );
    }
}
