//! Template materialization.
//!
//! One polymorphic operation with two variants, selected by the validated
//! name's kind:
//!
//! - `Regular`: recursive copy of the template tree to `<src>/<name>`,
//!   then the substitution passes (contents, then paths).
//! - `ReservedShared` (`core`/`common`): only the destination directory
//!   plus a verbatim copy of the two descriptor files. No substitution applies;
//!   those file names carry no placeholder by construction.
//!
//! A missing template root fails before any copy. Partial failure leaves
//! the destination standing; there is no rollback. A later invocation for
//! the same name fails the validator's existence check, so an incomplete
//! destination is never silently merged over.

use crate::core::error::SubforgeError;
use crate::core::layout::{Layout, SHARED_FILES};
use crate::core::substitute;
use crate::core::validate::NameKind;
use std::fs;
use std::path::{Path, PathBuf};

/// Materialization switches.
#[derive(Debug, Default)]
pub struct MaterializeOptions {
    /// Preview mode: log every action without touching the filesystem.
    pub dry_run: bool,
}

fn copy_tree(src: &Path, dest: &Path) -> Result<(), SubforgeError> {
    fs::create_dir_all(dest).map_err(SubforgeError::Io)?;
    for entry in fs::read_dir(src).map_err(SubforgeError::Io)? {
        let entry = entry.map_err(SubforgeError::Io)?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        if from.is_dir() {
            copy_tree(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(SubforgeError::Io)?;
        }
    }
    Ok(())
}

/// Print the actions a regular materialization would take, without taking
/// them. Top-level entry scripts are shown at their final, relocated home.
fn preview_tree(
    layout: &Layout,
    project_name: &str,
    template_root: &Path,
    dir: &Path,
    depth: usize,
) -> Result<(), SubforgeError> {
    for entry in fs::read_dir(dir).map_err(SubforgeError::Io)? {
        let entry = entry.map_err(SubforgeError::Io)?;
        let path = entry.path();
        let rel = path.strip_prefix(template_root).unwrap_or(&path);
        let shown = substitute::substituted_rel_path(layout, project_name, rel);
        let file_name = substitute::substituted_name(
            layout,
            project_name,
            &entry.file_name().to_string_lossy(),
        );
        if path.is_dir() {
            println!("  would-create: src/{}/{}/", project_name, shown);
            preview_tree(layout, project_name, template_root, &path, depth + 1)?;
        } else if depth == 0 && file_name.starts_with(layout.run_prefix) {
            println!("  would-relocate: scripts/{}", file_name);
        } else {
            println!("  would-create: src/{}/{}", project_name, shown);
        }
    }
    Ok(())
}

/// Materialize a validated project name into the layout's source tree.
///
/// Returns the destination directory. The destination must not exist
/// (enforced by the validator before this is called).
pub fn materialize(
    layout: &Layout,
    project_name: &str,
    kind: NameKind,
    opts: &MaterializeOptions,
) -> Result<PathBuf, SubforgeError> {
    let template_root = layout.template_root();
    if !template_root.exists() {
        return Err(SubforgeError::TemplateNotFound(template_root));
    }

    let dest = layout.project_dir(project_name);

    match kind {
        NameKind::ReservedShared => {
            if opts.dry_run {
                for file in SHARED_FILES {
                    println!("  would-create: src/{}/{}", project_name, file);
                }
                return Ok(dest);
            }
            fs::create_dir_all(&dest).map_err(SubforgeError::Io)?;
            for file in SHARED_FILES {
                fs::copy(template_root.join(file), dest.join(file)).map_err(SubforgeError::Io)?;
            }
        }
        NameKind::Regular => {
            if opts.dry_run {
                preview_tree(layout, project_name, &template_root, &template_root, 0)?;
                return Ok(dest);
            }
            copy_tree(&template_root, &dest)?;
            substitute::apply(layout, project_name, &dest)?;
        }
    }

    Ok(dest)
}
