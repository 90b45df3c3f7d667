//! The baked-in diagram documents.
//!
//! Each [`Variant`] names one complete draw.io document compiled into the
//! library. The documents are opaque: nothing here parses or edits them.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::ArchdrawError;

const OVERVIEW: &str = include_str!("../assets/overview.drawio");
const DETAILED: &str = include_str!("../assets/detailed.drawio");

/// A diagram document that can be emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Flat "Open WebUI Architecture" page with Azure icons and numbered
    /// request flow badges.
    #[default]
    Overview,

    /// "Architecture" page laid out as nested swimlanes for the
    /// subscription, the hub and spoke networks and their subnets.
    Detailed,
}

impl Variant {
    /// Every variant, in the order they are listed to users.
    pub const ALL: [Variant; 2] = [Variant::Overview, Variant::Detailed];

    /// The literal document text for this variant.
    pub fn payload(self) -> &'static str {
        match self {
            Self::Overview => OVERVIEW,
            Self::Detailed => DETAILED,
        }
    }

    /// The name used on the command line and in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Detailed => "detailed",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ArchdrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.name() == s)
            .ok_or_else(|| ArchdrawError::UnknownVariant(s.to_string()))
    }
}
