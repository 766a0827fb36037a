//! Placeholder substitution over a materialized tree.
//!
//! Two passes, always in this order:
//!
//! 1. **Content pass**: files whose extension is in the recognized text
//!    set are read as UTF-8, every occurrence of the placeholder replaced,
//!    and the file rewritten whole. Anything else is left untouched.
//! 2. **Path pass**: every directory and file name containing the
//!    placeholder is renamed with the placeholder substring-replaced.
//!    The walk is post-order: all descendants are visited and renamed
//!    before their ancestor directory, so a parent rename never
//!    invalidates a pending child rename.
//!
//! After both passes, no name and no recognized-text content in the tree
//! contains the placeholder.

use crate::core::error::SubforgeError;
use crate::core::layout::Layout;
use std::fs;
use std::path::Path;

/// Substitute the placeholder in a single path segment or file name.
pub fn substituted_name(layout: &Layout, project_name: &str, segment: &str) -> String {
    segment.replace(layout.placeholder, project_name)
}

/// Substitute the placeholder in every segment of a relative path.
/// Used for dry-run previews; the placeholder never spans separators.
pub fn substituted_rel_path(layout: &Layout, project_name: &str, rel: &Path) -> String {
    let rel_str = rel.to_string_lossy();
    rel_str.replace(layout.placeholder, project_name)
}

/// Run the content pass over every file under `tree`.
pub fn substitute_contents(
    layout: &Layout,
    project_name: &str,
    tree: &Path,
) -> Result<(), SubforgeError> {
    fn recurse(layout: &Layout, project_name: &str, dir: &Path) -> Result<(), SubforgeError> {
        for entry in fs::read_dir(dir).map_err(SubforgeError::Io)? {
            let entry = entry.map_err(SubforgeError::Io)?;
            let path = entry.path();
            if path.is_dir() {
                recurse(layout, project_name, &path)?;
            } else if layout.is_text_extension(&path) {
                let text = fs::read_to_string(&path).map_err(SubforgeError::Io)?;
                if text.contains(layout.placeholder) {
                    fs::write(&path, text.replace(layout.placeholder, project_name))
                        .map_err(SubforgeError::Io)?;
                }
            }
        }
        Ok(())
    }
    recurse(layout, project_name, tree)
}

/// Run the bottom-up path pass over every entry under `tree`.
///
/// The root itself is never renamed; it is already named after the project.
pub fn substitute_paths(
    layout: &Layout,
    project_name: &str,
    tree: &Path,
) -> Result<(), SubforgeError> {
    // Snapshot the directory before renaming anything inside it.
    let entries: Vec<_> = fs::read_dir(tree)
        .map_err(SubforgeError::Io)?
        .collect::<Result<_, _>>()
        .map_err(SubforgeError::Io)?;

    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            substitute_paths(layout, project_name, &path)?;
        }
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();
        if name.contains(layout.placeholder) {
            let renamed = path.with_file_name(substituted_name(layout, project_name, &name));
            fs::rename(&path, &renamed).map_err(SubforgeError::Io)?;
        }
    }
    Ok(())
}

/// Content pass followed by path pass.
pub fn apply(layout: &Layout, project_name: &str, tree: &Path) -> Result<(), SubforgeError> {
    substitute_contents(layout, project_name, tree)?;
    substitute_paths(layout, project_name, tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_substitution_is_substring_replacement() {
        let layout = Layout::new("/repo");
        assert_eq!(
            substituted_name(&layout, "myproj", "{{PROJECT_NAME}}_config.py"),
            "myproj_config.py"
        );
        assert_eq!(substituted_name(&layout, "myproj", "plain.txt"), "plain.txt");
    }

    #[test]
    fn rel_path_substitution_touches_every_segment() {
        let layout = Layout::new("/repo");
        let rel = Path::new("{{PROJECT_NAME}}/docs/{{PROJECT_NAME}}.md");
        assert_eq!(
            substituted_rel_path(&layout, "widgets", rel),
            "widgets/docs/widgets.md"
        );
    }

    #[test]
    fn recognized_text_extensions_are_exact_and_case_sensitive() {
        let layout = Layout::new("/repo");
        for ok in ["a.py", "a.md", "a.txt", "a.toml", "a.bat"] {
            assert!(layout.is_text_extension(Path::new(ok)), "{ok}");
        }
        for skip in ["a.png", "a.bin", "a", "a.PY"] {
            assert!(!layout.is_text_extension(Path::new(skip)), "{skip}");
        }
    }
}
