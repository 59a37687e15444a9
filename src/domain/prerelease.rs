//! Pre-release segment handling for PEP 440 versions
//!
//! PEP 440 knows three pre-release phases (alpha, beta, release candidate),
//! each with a numeric iteration. Alternate spellings are normalized on parse.

use crate::error::{ReleaseError, Result};
use std::fmt;
use std::str::FromStr;

/// Pre-release phase, ordered alpha < beta < rc
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreReleaseType {
    /// Alpha pre-release (`a`)
    Alpha,
    /// Beta pre-release (`b`)
    Beta,
    /// Release candidate (`rc`)
    ReleaseCandidate,
}

impl PreReleaseType {
    /// Parse a pre-release phase from a string
    ///
    /// Accepts: "alpha", "a", "beta", "b", "c", "rc", "pre", "preview"
    /// (case-insensitive).
    ///
    /// # Arguments
    /// * `s` - String to parse
    ///
    /// # Returns
    /// * `Ok(PreReleaseType)` - Parsed phase
    /// * `Err` - If the string is not a PEP 440 pre-release spelling
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl FromStr for PreReleaseType {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "alpha" | "a" => Ok(PreReleaseType::Alpha),
            "beta" | "b" => Ok(PreReleaseType::Beta),
            "rc" | "c" | "pre" | "preview" => Ok(PreReleaseType::ReleaseCandidate),
            _ => Err(ReleaseError::version(format!(
                "Invalid pre-release identifier: '{}'",
                s
            ))),
        }
    }
}

impl fmt::Display for PreReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreReleaseType::Alpha => write!(f, "a"),
            PreReleaseType::Beta => write!(f, "b"),
            PreReleaseType::ReleaseCandidate => write!(f, "rc"),
        }
    }
}

/// Pre-release segment such as `a1`, `b0` or `rc2`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PreRelease {
    /// The pre-release phase
    pub identifier: PreReleaseType,
    /// Iteration number; an omitted number normalizes to 0
    pub iteration: u64,
}

impl PreRelease {
    /// Create a new pre-release segment
    pub fn new(identifier: PreReleaseType, iteration: u64) -> Self {
        PreRelease {
            identifier,
            iteration,
        }
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.identifier, self.iteration)
    }
}
