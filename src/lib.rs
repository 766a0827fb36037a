//! Subforge: monorepo sub-project scaffolding.
//!
//! Subforge stamps out new sub-projects inside a monorepo source tree from
//! the checked-in template at `.setup-docs/src-template/{{PROJECT_NAME}}/`.
//! Every occurrence of the placeholder token is replaced with the concrete
//! project name, in file contents (recognized text extensions only) and in
//! file and directory names. Entry scripts (`run_*` files at the project's
//! top level) are then moved into the shared `scripts/` directory so that
//! "things you run from the repository root" stay separate from package
//! code.
//!
//! # Pipeline
//!
//! One synchronous pass per invocation:
//!
//! 1. **Validate** the project name (pure check, no mutation)
//! 2. **Materialize** the template copy (or the two-file reserved variant
//!    for `core`/`common`)
//! 3. **Substitute** the placeholder: contents first, then a bottom-up
//!    rename pass
//! 4. **Relocate** top-level entry scripts into `scripts/`
//! 5. **Guard** the project's `paths.toml` descriptor against the
//!    generated-path length ceiling
//!
//! Failures abort the whole operation and surface directly; there is no
//! retry and no rollback. A half-materialized destination is refused on
//! the next invocation by the validator's existence check.

mod cli;
pub mod core;

use crate::cli::{CheckPathsCli, Cli, Command, NewCli};
use crate::core::error::SubforgeError;
use crate::core::layout::Layout;
use crate::core::paths_desc;
use crate::core::scaffold::{self, ScaffoldOptions};
use crate::core::validate::NameKind;
use clap::Parser;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

/// Machine-readable summary of a successful `new` invocation.
#[derive(Debug, Serialize)]
struct NewSummary {
    name: String,
    kind: &'static str,
    dest: PathBuf,
    scripts: Vec<PathBuf>,
    checked_paths: usize,
}

fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf, SubforgeError> {
    let raw = match root {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    std::fs::canonicalize(&raw).map_err(SubforgeError::Io)
}

fn run_new(args: NewCli) -> Result<(), SubforgeError> {
    let layout = Layout::new(resolve_root(args.root)?);
    let opts = ScaffoldOptions {
        dry_run: args.dry_run,
        on_collision: args.on_collision,
    };
    let outcome = scaffold::create_project(&layout, &args.name, &opts)?;

    if args.dry_run {
        println!("dry-run: nothing written");
        return Ok(());
    }

    if args.format == "json" {
        let summary = NewSummary {
            name: args.name,
            kind: match outcome.kind {
                NameKind::Regular => "regular",
                NameKind::ReservedShared => "reserved_shared",
            },
            dest: outcome.dest,
            scripts: outcome.scripts,
            checked_paths: outcome.checked_paths.len(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    for script in &outcome.scripts {
        println!("  relocated: {}", script.display());
    }
    println!(
        "{} Project {:?} created at {}",
        ">>".green().bold(),
        args.name,
        outcome.dest.display()
    );
    Ok(())
}

fn run_check_paths(args: CheckPathsCli) -> Result<(), SubforgeError> {
    let layout = Layout::new(resolve_root(args.root)?);
    let project_dir = layout.project_dir(&args.name);
    let resolved = paths_desc::load_and_check(&layout, &project_dir)?;

    for (name, path) in &resolved {
        println!("  {} = {}", name, path.display());
    }
    println!(
        "{} {} path(s) within the {}-char ceiling",
        "ok:".green().bold(),
        resolved.len(),
        layout.max_path_len
    );
    Ok(())
}

pub fn run() -> Result<(), SubforgeError> {
    let cli = Cli::parse();
    match cli.command {
        Command::New(args) => run_new(args),
        Command::CheckPaths(args) => run_check_paths(args),
    }
}
