//! Workspace layout for a subforge-managed monorepo.
//!
//! All fixed locations and reserved markers live here as explicit
//! configuration. Components receive a `&Layout` instead of reading
//! global constants, so each one stays independently testable.

use std::path::{Path, PathBuf};

/// Reserved marker replaced by the concrete project name during
/// materialization, in both file contents and path segments.
pub const PLACEHOLDER: &str = "{{PROJECT_NAME}}";

/// Prefix marking a file as an entry script. Entry scripts are relocated
/// into the shared scripts directory; project names may not use it.
pub const RUN_PREFIX: &str = "run_";

/// Extensions whose contents are rewritten during the content pass.
/// Everything else is copied byte-for-byte.
pub const TEXT_EXTENSIONS: &[&str] = &["py", "md", "txt", "toml", "bat"];

/// Ceiling on the length of any generated absolute path string.
pub const MAX_PATH_LEN: usize = 260;

/// The two reserved shared project names. Mutually exclusive per tree.
pub const RESERVED_SHARED: &[&str] = &["core", "common"];

/// Descriptor files copied verbatim for a reserved shared project.
pub const SHARED_FILES: &[&str] = &["paths.toml", "config.toml"];

/// Fixed locations of a monorepo tree, derived from its root.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Absolute path to the monorepo root.
    pub root: PathBuf,
    /// Marker substituted with the project name.
    pub placeholder: &'static str,
    /// Entry-script filename prefix.
    pub run_prefix: &'static str,
    /// Extensions eligible for content substitution.
    pub text_extensions: &'static [&'static str],
    /// Generated-path length ceiling.
    pub max_path_len: usize,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Layout {
            root: root.into(),
            placeholder: PLACEHOLDER,
            run_prefix: RUN_PREFIX,
            text_extensions: TEXT_EXTENSIONS,
            max_path_len: MAX_PATH_LEN,
        }
    }

    /// Read-only template tree: `<root>/.setup-docs/src-template/{{PROJECT_NAME}}`.
    pub fn template_root(&self) -> PathBuf {
        self.root
            .join(".setup-docs")
            .join("src-template")
            .join(self.placeholder)
    }

    /// Parent directory of all sub-projects: `<root>/src`.
    pub fn src_dir(&self) -> PathBuf {
        self.root.join("src")
    }

    /// Shared scripts directory: `<root>/scripts`.
    pub fn scripts_dir(&self) -> PathBuf {
        self.root.join("scripts")
    }

    /// Destination directory for a named sub-project.
    pub fn project_dir(&self, name: &str) -> PathBuf {
        self.src_dir().join(name)
    }

    /// Whether a file extension participates in the content pass.
    pub fn is_text_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.text_extensions.contains(&ext))
    }
}
