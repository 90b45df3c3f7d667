use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::Variant;

/// Where the diagram is written when nothing overrides it.
pub const DEFAULT_OUTPUT_PATH: &str =
    "/workspaces/azure-apim-openwebui-quickstart/docs/architecture.drawio";

/// Application configuration loaded from TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Output configuration section
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct OutputConfig {
    /// Destination file for the diagram
    #[serde(default)]
    path: Option<PathBuf>,

    /// Which baked-in diagram to write
    #[serde(default)]
    variant: Option<Variant>,
}

impl OutputConfig {
    /// Destination path, falling back to [`DEFAULT_OUTPUT_PATH`].
    pub fn path(&self) -> &Path {
        self.path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_PATH))
    }

    /// Diagram variant, falling back to [`Variant::default`].
    pub fn variant(&self) -> Variant {
        self.variant.unwrap_or_default()
    }

    /// Override the destination path.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    /// Override the diagram variant.
    pub fn set_variant(&mut self, variant: Variant) {
        self.variant = Some(variant);
    }
}
