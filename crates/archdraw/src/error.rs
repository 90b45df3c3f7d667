//! Error types for archdraw operations.
//!
//! This module provides the main error type [`ArchdrawError`] covering the
//! few things that can go wrong: the destination cannot be written, a variant
//! name is not recognised, or configuration could not be loaded.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for archdraw operations.
#[derive(Debug, Error)]
pub enum ArchdrawError {
    /// The destination could not be opened or written.
    ///
    /// Covers a missing parent directory, permission denial and an exhausted
    /// disk alike.
    #[error("Failed to write diagram to {}: {source}", .path.display())]
    Emit {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unknown diagram variant '{0}'")]
    UnknownVariant(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ArchdrawError {
    /// Create a new `Emit` error for the given destination.
    pub fn new_emit_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Emit {
            path: path.into(),
            source,
        }
    }
}
