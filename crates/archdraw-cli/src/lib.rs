//! archdraw CLI library
//!
//! This module contains the core CLI logic for the archdraw diagram writer.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;
pub use error_adapter::ErrorAdapter;

use log::{debug, info};

use archdraw::{ArchdrawError, Emitter, Variant, config::AppConfig};

/// Run the archdraw CLI application
///
/// This function resolves which diagram to write and where, then writes it.
/// Command-line flags take precedence over the configuration file, which
/// takes precedence over the built-in defaults.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ArchdrawError` for:
/// - Configuration loading errors
/// - Unknown variant names
/// - An unwritable destination
pub fn run(args: &Args) -> Result<(), ArchdrawError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let app_config = apply_overrides(app_config, args)?;
    debug!(config:? = app_config; "Resolved configuration");

    let emitter = Emitter::from_config(&app_config);
    info!(
        variant = emitter.variant().name(),
        output_path = emitter.path().display().to_string();
        "Emitting diagram"
    );

    emitter.emit()
}

/// Layer command-line flags over the loaded configuration
fn apply_overrides(mut config: AppConfig, args: &Args) -> Result<AppConfig, ArchdrawError> {
    if let Some(name) = &args.variant {
        config.output.set_variant(name.parse::<Variant>()?);
    }

    if let Some(output) = &args.output {
        config.output.set_path(output);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use archdraw::config::DEFAULT_OUTPUT_PATH;

    use super::*;

    #[test]
    fn test_no_overrides_keeps_defaults() {
        let config = apply_overrides(AppConfig::default(), &Args::default()).unwrap();
        assert_eq!(config.output.variant(), Variant::Overview);
        assert_eq!(config.output.path(), Path::new(DEFAULT_OUTPUT_PATH));
    }

    #[test]
    fn test_flags_win_over_config() {
        let mut file_config = AppConfig::default();
        file_config.output.set_variant(Variant::Overview);
        file_config.output.set_path("from_file.drawio");

        let args = Args {
            variant: Some("detailed".to_string()),
            output: Some("from_flag.drawio".to_string()),
            ..Args::default()
        };

        let config = apply_overrides(file_config, &args).unwrap();
        assert_eq!(config.output.variant(), Variant::Detailed);
        assert_eq!(config.output.path(), Path::new("from_flag.drawio"));
    }

    #[test]
    fn test_config_kept_where_no_flag_given() {
        let mut file_config = AppConfig::default();
        file_config.output.set_path("from_file.drawio");

        let args = Args {
            variant: Some("detailed".to_string()),
            ..Args::default()
        };

        let config = apply_overrides(file_config, &args).unwrap();
        assert_eq!(config.output.path(), Path::new("from_file.drawio"));
    }

    #[test]
    fn test_unknown_variant_flag() {
        let args = Args {
            variant: Some("sketch".to_string()),
            ..Args::default()
        };

        let err = apply_overrides(AppConfig::default(), &args).unwrap_err();
        assert!(matches!(err, ArchdrawError::UnknownVariant(ref name) if name == "sketch"));
    }
}
