//! archdraw - writes a baked-in draw.io architecture diagram to disk
//!
//! The library carries complete diagram documents as compiled-in constants
//! (see [`Variant`]) and an [`Emitter`] that writes one of them verbatim to a
//! destination file, replacing whatever was there before.

pub mod config;

mod error;
mod variant;

pub use error::ArchdrawError;
pub use variant::Variant;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};

use config::AppConfig;

/// Writes one diagram variant to one destination.
///
/// # Examples
///
/// ```rust,no_run
/// use archdraw::{Emitter, Variant};
///
/// // Built-in destination and the default variant
/// Emitter::default().emit().expect("Failed to write diagram");
///
/// // Explicit choice
/// Emitter::new(Variant::Detailed, "docs/architecture.drawio")
///     .emit()
///     .expect("Failed to write diagram");
/// ```
#[derive(Debug, Clone)]
pub struct Emitter {
    variant: Variant,
    path: PathBuf,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl Emitter {
    /// Create an emitter for the given variant and destination.
    pub fn new(variant: Variant, path: impl Into<PathBuf>) -> Self {
        Self {
            variant,
            path: path.into(),
        }
    }

    /// Create an emitter from the `[output]` section of a configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.output.variant(), config.output.path())
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the payload to the destination.
    ///
    /// The file is created if absent and truncated if present, then receives
    /// the whole payload in a single write. The parent directory is never
    /// created. Running this twice leaves the same content as running it once.
    ///
    /// # Errors
    ///
    /// Returns [`ArchdrawError::Emit`] if the destination cannot be opened or
    /// the write does not complete.
    pub fn emit(&self) -> Result<(), ArchdrawError> {
        let payload = self.variant.payload();
        info!(
            variant = self.variant.name(),
            output_path = self.path.display().to_string();
            "Writing diagram"
        );

        fs::write(&self.path, payload)
            .map_err(|err| ArchdrawError::new_emit_error(&self.path, err))?;

        debug!(bytes = payload.len(); "Payload written");
        info!(output_file = self.path.display().to_string(); "Diagram written successfully");

        Ok(())
    }
}
