use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubforgeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Template package not found at {}", .0.display())]
    TemplateNotFound(PathBuf),
    #[error("Invalid project name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },
    #[error("Subproject named {0:?} already exists")]
    AlreadyExists(String),
    #[error("Invalid project name {0:?}: project names cannot start with \"run_\"")]
    ReservedPrefix(String),
    #[error("Only one of \"core\" or \"common\" may exist")]
    Conflict,
    #[error("{name} length={len} exceeds {max}: {path}")]
    PathTooLong {
        name: String,
        len: usize,
        max: usize,
        path: String,
    },
    #[error("Entry script {0:?} already exists in the scripts directory")]
    ScriptCollision(String),
    #[error("Paths descriptor not found at {}", .0.display())]
    DescriptorNotFound(PathBuf),
    #[error("Failed to parse {}: {source}", .path.display())]
    DescriptorParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
