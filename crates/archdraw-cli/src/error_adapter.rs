//! Error adapter for converting ArchdrawError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's report formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use archdraw::{ArchdrawError, Variant};

/// Adapter that gives an [`ArchdrawError`] a code and, where one applies, a
/// hint for the operator.
pub struct ErrorAdapter(pub ArchdrawError);

impl fmt::Debug for ErrorAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ArchdrawError::Emit { .. } => "archdraw::emit",
            ArchdrawError::UnknownVariant(_) => "archdraw::variant",
            ArchdrawError::Config(_) => "archdraw::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            ArchdrawError::Emit { path, .. } => {
                let dir = path
                    .parent()
                    .filter(|dir| !dir.as_os_str().is_empty())
                    .map(|dir| dir.display().to_string())
                    .unwrap_or_else(|| ".".to_string());
                Some(Box::new(format!(
                    "make sure the directory `{dir}` exists and is writable"
                )))
            }
            ArchdrawError::UnknownVariant(_) => {
                let names: Vec<_> = Variant::ALL.iter().map(|v| v.name()).collect();
                Some(Box::new(format!("expected one of: {}", names.join(", "))))
            }
            ArchdrawError::Config(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
