//! The scaffolding pipeline.
//!
//! Glues the validator, materializer, relocator, and descriptor guard into
//! the one public operation: validate the name, stamp out the template,
//! move entry scripts aside, and check the fresh project's paths
//! descriptor. Everything runs in one synchronous pass; the first failure
//! aborts and surfaces as-is.

use crate::core::error::SubforgeError;
use crate::core::layout::Layout;
use crate::core::materialize::{self, MaterializeOptions};
use crate::core::paths_desc;
use crate::core::relocate::{self, CollisionPolicy};
use crate::core::validate::{self, NameKind};
use std::path::PathBuf;

/// Scaffolding operation configuration.
#[derive(Debug)]
pub struct ScaffoldOptions {
    /// Preview mode: log actions without writing anything.
    pub dry_run: bool,
    /// Collision handling for relocated entry scripts.
    pub on_collision: CollisionPolicy,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        ScaffoldOptions {
            dry_run: false,
            on_collision: CollisionPolicy::Overwrite,
        }
    }
}

/// What a successful scaffolding run produced.
#[derive(Debug)]
pub struct ScaffoldOutcome {
    /// Kind the validator assigned to the name.
    pub kind: NameKind,
    /// The materialized project directory.
    pub dest: PathBuf,
    /// Entry scripts moved into the shared scripts directory.
    pub scripts: Vec<PathBuf>,
    /// Resolved paths-descriptor entries that passed the length guard.
    pub checked_paths: Vec<(String, PathBuf)>,
}

/// Create the sub-project `name` inside `layout`'s source tree.
pub fn create_project(
    layout: &Layout,
    name: &str,
    opts: &ScaffoldOptions,
) -> Result<ScaffoldOutcome, SubforgeError> {
    let kind = validate::validate_project_name(layout, name)?;

    let materialize_opts = MaterializeOptions {
        dry_run: opts.dry_run,
    };
    let dest = materialize::materialize(layout, name, kind, &materialize_opts)?;

    if opts.dry_run {
        return Ok(ScaffoldOutcome {
            kind,
            dest,
            scripts: Vec::new(),
            checked_paths: Vec::new(),
        });
    }

    let scripts = relocate::relocate_entry_scripts(layout, &dest, opts.on_collision)?;
    let checked_paths = paths_desc::check_if_present(layout, &dest)?;

    Ok(ScaffoldOutcome {
        kind,
        dest,
        scripts,
        checked_paths,
    })
}
