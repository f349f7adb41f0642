//! # git-identity
//!
//! Set a repository's local git identity (`user.name` and `user.email`)
//! from command-line arguments or from the `author` field of the project
//! manifest (`package.json`).
//!
//! ## Usage
//!
//! ```bash
//! # Use the manifest's author, e.g. "Jane Doe <jane@example.com>"
//! git-identity
//!
//! # Use explicit values
//! git-identity "Jane Doe" jane@example.com
//! ```
//!
//! ## Modules
//!
//! - [`author`] - Author descriptor parsing and validation
//! - [`identity`] - Applying an identity to the local git config
//! - [`git`] - Git and shell command wrappers
//! - [`manifest`] - Reading the author from the project manifest
//! - [`prompt`] - User input abstractions
//! - [`cli`] - Command-line interface and main entry point
//! - [`error`] - Crate error type

pub mod author;
pub mod cli;
pub mod error;
pub mod git;
pub mod identity;
pub mod manifest;
pub mod prompt;
