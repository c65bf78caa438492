use crate::boundary::BoundaryWarning;
use crate::domain::prerelease::PreRelease;
use crate::error::{Result, VersionMapError};
use regex::{Captures, Regex};
use std::fmt;

/// `<major>.<minor>` optionally followed by `<letter><digits>`.
///
/// Digits are ASCII only; `\d` in `regex` would also accept other Unicode
/// decimal digits that `u64::from_str` rejects.
pub const VERSION_PATTERN: &str = r"([0-9]+)\.([0-9]+)([a-z][0-9]+)?";

/// Major/minor version with an optional pre-release suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionParts {
    pub major: u64,
    pub minor: u64,
    pub prerelease: Option<PreRelease>,
}

impl VersionParts {
    /// Create a new version without a pre-release suffix
    pub fn new(major: u64, minor: u64) -> Self {
        VersionParts {
            major,
            minor,
            prerelease: None,
        }
    }

    /// Extract the first version found anywhere in `text`
    ///
    /// "3.2b2" and "Lightning 3.2b2" both yield 3.2 with suffix "b2".
    pub fn extract(text: &str) -> Result<Self> {
        let re = Regex::new(VERSION_PATTERN)?;
        let captures = re
            .captures(text)
            .ok_or_else(|| VersionMapError::pattern_mismatch(text))?;
        Self::from_captures(text, &captures)
    }

    /// Like [`VersionParts::extract`], but also reports anything suspicious
    /// about where the version was found
    pub fn extract_with_warnings(text: &str) -> Result<(Self, Vec<BoundaryWarning>)> {
        let re = Regex::new(VERSION_PATTERN)?;
        let mut matches = re.captures_iter(text);

        let first = matches
            .next()
            .ok_or_else(|| VersionMapError::pattern_mismatch(text))?;
        let parts = Self::from_captures(text, &first)?;
        let matched = first.get(0).map_or("", |m| m.as_str());

        let mut warnings = Vec::new();

        if text.trim() != matched {
            warnings.push(BoundaryWarning::SurroundingText {
                input: text.to_string(),
                matched: matched.to_string(),
            });
        }

        let ignored: Vec<String> = matches
            .filter_map(|c| c.get(0).map(|m| m.as_str().to_string()))
            .collect();
        if !ignored.is_empty() {
            warnings.push(BoundaryWarning::MultipleCandidates {
                input: text.to_string(),
                used: matched.to_string(),
                ignored,
            });
        }

        Ok((parts, warnings))
    }

    fn from_captures(text: &str, captures: &Captures<'_>) -> Result<Self> {
        let major = parse_component("Major", captures.get(1).map_or("", |m| m.as_str()))?;
        let minor = parse_component("Minor", captures.get(2).map_or("", |m| m.as_str()))?;
        let prerelease = captures
            .get(3)
            .map(|m| {
                PreRelease::parse(m.as_str())
                    .map_err(|_| VersionMapError::pattern_mismatch(text))
            })
            .transpose()?;

        Ok(VersionParts {
            major,
            minor,
            prerelease,
        })
    }
}

fn parse_component(component: &'static str, digits: &str) -> Result<u64> {
    digits
        .parse::<u64>()
        .map_err(|_| VersionMapError::out_of_range(component, digits))
}

impl fmt::Display for VersionParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(prerelease) = &self.prerelease {
            write!(f, "{}", prerelease)?;
        }
        Ok(())
    }
}
