//! Core modules for subforge's scaffolding pipeline.
//!
//! Validation, substitution, materialization, and relocation live here,
//! along with the shared layout configuration and error type.

pub mod error;
pub mod layout;
pub mod materialize;
pub mod paths_desc;
pub mod relocate;
pub mod scaffold;
pub mod substitute;
pub mod validate;
