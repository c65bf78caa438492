use crate::boundary::BoundaryWarning;
use crate::domain::VersionParts;
use crate::error::{Result, VersionMapError};
use tracing::debug;

/// Lightning majors run two ahead of gdata-provider majors.
pub const MAJOR_OFFSET: u64 = 2;

/// Lightning minors run one ahead of gdata-provider minors.
pub const MINOR_OFFSET: u64 = 1;

/// Borrow added to a negative minor. Assumes Lightning minors cycle 0-9;
/// this is a property of the two release trains, not a general modulus.
pub const MINOR_ROLLOVER: u64 = 10;

/// Offsets that turn a Lightning version into a gdata-provider version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionMapping {
    pub major_offset: u64,
    pub minor_offset: u64,
    pub minor_rollover: u64,
}

/// Outcome of a conversion, including anything worth telling the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    /// The text the version was extracted from
    pub source: String,
    /// The version found in `source`
    pub matched: VersionParts,
    /// The mapped version
    pub converted: VersionParts,
    pub warnings: Vec<BoundaryWarning>,
}

impl Default for VersionMapping {
    fn default() -> Self {
        VersionMapping {
            major_offset: MAJOR_OFFSET,
            minor_offset: MINOR_OFFSET,
            minor_rollover: MINOR_ROLLOVER,
        }
    }
}

impl VersionMapping {
    pub fn new(major_offset: u64, minor_offset: u64, minor_rollover: u64) -> Self {
        VersionMapping {
            major_offset,
            minor_offset,
            minor_rollover,
        }
    }

    /// Applies the offsets to `parts`.
    ///
    /// The minor offset is subtracted first. If the minor goes negative, the
    /// rollover is added back and the major loses one more:
    /// - 3.1 -> 1.0
    /// - 3.0 -> 0.9 (borrow)
    ///
    /// The pre-release suffix is carried over unchanged. Results with a
    /// negative component are rejected rather than printed.
    pub fn apply(&self, parts: &VersionParts) -> Result<VersionParts> {
        let mut major = i128::from(parts.major) - i128::from(self.major_offset);
        let mut minor = i128::from(parts.minor) - i128::from(self.minor_offset);

        if minor < 0 {
            minor += i128::from(self.minor_rollover);
            major -= 1;
        }

        if major < 0 || minor < 0 {
            return Err(VersionMapError::NegativeComponent {
                input: parts.to_string(),
                major,
                minor,
            });
        }

        Ok(VersionParts {
            major: u64::try_from(major)
                .map_err(|_| VersionMapError::out_of_range("Major", major.to_string()))?,
            minor: u64::try_from(minor)
                .map_err(|_| VersionMapError::out_of_range("Minor", minor.to_string()))?,
            prerelease: parts.prerelease.clone(),
        })
    }

    /// Extracts the first version in `text` and maps it.
    pub fn convert(&self, text: &str) -> Result<String> {
        let parts = VersionParts::extract(text)?;
        Ok(self.apply(&parts)?.to_string())
    }

    /// Like [`VersionMapping::convert`], but keeps the intermediate values and
    /// any boundary warnings.
    pub fn convert_detailed(&self, text: &str) -> Result<ConversionResult> {
        let (matched, mut warnings) = VersionParts::extract_with_warnings(text)?;

        if matched.minor >= self.minor_rollover {
            warnings.push(BoundaryWarning::MinorBeyondRollover {
                minor: matched.minor,
                rollover: self.minor_rollover,
            });
        }

        let converted = self.apply(&matched)?;
        debug!(
            source = text,
            matched = %matched,
            converted = %converted,
            warnings = warnings.len(),
            "mapped version"
        );

        Ok(ConversionResult {
            source: text.to_string(),
            matched,
            converted,
            warnings,
        })
    }
}

/// Converts a Lightning version to the matching gdata-provider version.
///
/// # Example
/// ```
/// use gdata_version::convert_version;
///
/// assert_eq!(convert_version("3.1").unwrap(), "1.0");
/// assert_eq!(convert_version("3.2b2").unwrap(), "1.1b2");
/// assert_eq!(convert_version("3.3a1").unwrap(), "1.2a1");
/// ```
pub fn convert_version(text: &str) -> Result<String> {
    VersionMapping::default().convert(text)
}
