//! Pre-release suffix handling
//!
//! Lightning and gdata-provider mark unstable builds with a single letter
//! followed by an iteration number, e.g. "a1" or "b2". The suffix is carried
//! from the source version to the mapped version untouched.

use crate::error::{Result, VersionMapError};
use std::fmt;
use std::str::FromStr;

/// Pre-release identifier letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PreReleaseType {
    /// Alpha pre-release ('a')
    Alpha,
    /// Beta pre-release ('b')
    Beta,
    /// Any other lowercase letter
    Other(char),
}

impl PreReleaseType {
    /// Classify a suffix letter. Only ASCII lowercase letters are valid.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'a' => Some(PreReleaseType::Alpha),
            'b' => Some(PreReleaseType::Beta),
            c if c.is_ascii_lowercase() => Some(PreReleaseType::Other(c)),
            _ => None,
        }
    }

    /// The letter as it appears in a version string
    pub fn letter(&self) -> char {
        match self {
            PreReleaseType::Alpha => 'a',
            PreReleaseType::Beta => 'b',
            PreReleaseType::Other(c) => *c,
        }
    }
}

impl fmt::Display for PreReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Pre-release suffix such as "b2"
///
/// The iteration digits are stored verbatim so that "b02" is reproduced as
/// "b02" rather than being normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreRelease {
    pub kind: PreReleaseType,
    pub iteration: String,
}

impl PreRelease {
    /// Create a new pre-release suffix
    pub fn new(kind: PreReleaseType, iteration: impl Into<String>) -> Self {
        PreRelease {
            kind,
            iteration: iteration.into(),
        }
    }

    /// Parse a suffix of the form `<letter><digits>`
    ///
    /// # Examples
    /// ```ignore
    /// let pr = PreRelease::parse("b2")?;
    /// assert_eq!(pr.kind, PreReleaseType::Beta);
    /// assert_eq!(pr.iteration, "2");
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let letter = chars
            .next()
            .ok_or_else(|| VersionMapError::pattern_mismatch(s))?;
        let digits = chars.as_str();

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(VersionMapError::pattern_mismatch(s));
        }

        Ok(PreRelease {
            kind: PreReleaseType::from_letter(letter)
                .ok_or_else(|| VersionMapError::pattern_mismatch(s))?,
            iteration: digits.to_string(),
        })
    }

    /// Numeric value of the iteration, if it fits in a u32
    pub fn iteration_number(&self) -> Option<u32> {
        self.iteration.parse().ok()
    }

    pub fn is_alpha(&self) -> bool {
        self.kind == PreReleaseType::Alpha
    }

    pub fn is_beta(&self) -> bool {
        self.kind == PreReleaseType::Beta
    }
}

impl FromStr for PreRelease {
    type Err = VersionMapError;

    fn from_str(s: &str) -> Result<Self> {
        PreRelease::parse(s)
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind, self.iteration)
    }
}
