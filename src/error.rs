//! Domain-specific error types for the setup engine.
//!
//! Internal modules return typed errors via [`thiserror`]; command handlers
//! at the CLI boundary convert them to [`anyhow::Error`] with the standard
//! `?` operator.

use thiserror::Error;

/// Top-level errors raised by the mode dispatcher.
#[derive(Error, Debug)]
pub enum SetupError {
    /// The package-bundled `.devcontainer` source tree is absent.
    #[error("package source directory not found: {path}")]
    MissingSource {
        /// Path that was expected to hold the bundled tree.
        path: String,
    },

    /// The destination exists and no mode flag was given.
    #[error(".devcontainer already exists; pass --force to update or --reset to start fresh")]
    DestinationExists,

    /// The preserve-set loader failed.
    #[error(transparent)]
    Preserve(#[from] PreserveError),
}

/// Errors raised while building the effective preserve set.
#[derive(Error, Debug)]
pub enum PreserveError {
    /// The exclusion file exists but could not be read.
    ///
    /// Falling back to the built-in list here would silently un-preserve
    /// user files, so this is fatal for the whole run.
    #[error("reading preserve file {path}: {source}")]
    Unreadable {
        /// Path of the exclusion file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
