//! Command-line argument definitions for the archdraw CLI.
//!
//! Every argument is optional: running `archdraw` bare writes the default
//! diagram to the default destination.

use clap::Parser;

/// Command-line arguments for the archdraw diagram writer
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Diagram variant to write (overview, detailed)
    #[arg(short, long)]
    pub variant: Option<String>,

    /// Path to the output draw.io file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let args = Args::try_parse_from(["archdraw"]).unwrap();
        assert!(args.variant.is_none());
        assert!(args.output.is_none());
        assert!(args.config.is_none());
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_short_flags() {
        let args =
            Args::try_parse_from(["archdraw", "-v", "detailed", "-o", "out.drawio", "-c", "a.toml"])
                .unwrap();
        assert_eq!(args.variant.as_deref(), Some("detailed"));
        assert_eq!(args.output.as_deref(), Some("out.drawio"));
        assert_eq!(args.config.as_deref(), Some("a.toml"));
    }

    #[test]
    fn test_positional_arguments_are_rejected() {
        assert!(Args::try_parse_from(["archdraw", "diagram.drawio"]).is_err());
    }
}
