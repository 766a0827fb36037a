//! CLI struct definitions for the subforge command-line interface.
//!
//! All clap-derived types live here. Dispatch logic lives in `lib.rs`.

use crate::core::relocate::CollisionPolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "subforge",
    version = env!("CARGO_PKG_VERSION"),
    about = "Scaffold new sub-projects inside a monorepo source tree from the checked-in template."
)]
pub(crate) struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Create a new sub-project from the source template
    New(NewCli),
    /// Check a sub-project's paths descriptor against the length ceiling
    CheckPaths(CheckPathsCli),
}

#[derive(clap::Args, Debug)]
pub(crate) struct NewCli {
    /// Name of the sub-project to create.
    pub name: String,
    /// Monorepo root (defaults to the current working directory).
    #[clap(long)]
    pub root: Option<PathBuf>,
    /// What to do when a relocated entry script already exists in scripts/.
    #[clap(long = "on-collision", value_enum, default_value_t = CollisionPolicy::Overwrite)]
    pub on_collision: CollisionPolicy,
    /// Show what would be created without writing anything.
    #[clap(long)]
    pub dry_run: bool,
    /// Output format: 'text' or 'json'.
    #[clap(long, default_value = "text")]
    pub format: String,
}

#[derive(clap::Args, Debug)]
pub(crate) struct CheckPathsCli {
    /// Name of the sub-project whose descriptor to check.
    pub name: String,
    /// Monorepo root (defaults to the current working directory).
    #[clap(long)]
    pub root: Option<PathBuf>,
}
