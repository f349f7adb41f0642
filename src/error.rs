//! Error type shared by the library and the CLI.
//!
//! Parser rejection is not an error: [`crate::author::parse_author`] returns
//! `None` for malformed descriptors. Everything else that can fail ends up
//! in [`Error`].

use std::path::PathBuf;
use thiserror::Error;

/// All failures surfaced by `git-identity`.
#[derive(Error, Debug)]
pub enum Error {
    /// The identity applier was handed an empty field list.
    #[error("no fields provided")]
    NoFields,

    /// Wrong number of positional arguments.
    #[error("git-identity <name> <email>")]
    Usage,

    /// The manifest could not be read from the working directory.
    #[error("no {} found", file_name(.path))]
    ManifestNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest exists but is not valid JSON.
    #[error("manifest is not valid JSON ({}): {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The descriptor was rejected by the author parser.
    #[error("author needs name and email")]
    InvalidAuthor,

    /// The working directory could not be determined.
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// `git` is not installed or not on `PATH`.
    #[error("git not found in PATH")]
    GitNotFound,

    /// The shell could not be started.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The composed command ran but exited non-zero.
    #[error("`{command}` failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// An interactive prompt failed.
    #[error("prompt error: {0}")]
    Prompt(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
