use std::fmt;

/// Warnings raised while locating a version inside free-form input.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Input carries text around the version that was converted
    SurroundingText { input: String, matched: String },
    /// Input contains more than one version-like substring; the first wins
    MultipleCandidates {
        input: String,
        used: String,
        ignored: Vec<String>,
    },
    /// Minor version is outside the range the rollover constant assumes
    MinorBeyondRollover { minor: u64, rollover: u64 },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::SurroundingText { input, matched } => {
                write!(f, "Ignoring text around version '{}' in '{}'", matched, input)
            }
            BoundaryWarning::MultipleCandidates {
                input,
                used,
                ignored,
            } => {
                write!(
                    f,
                    "Found several versions in '{}'; using '{}', ignoring {}",
                    input,
                    used,
                    ignored.join(", ")
                )
            }
            BoundaryWarning::MinorBeyondRollover { minor, rollover } => {
                write!(
                    f,
                    "Minor version {} is not below the rollover of {}; borrow logic assumes minors 0-{}",
                    minor,
                    rollover,
                    rollover.saturating_sub(1)
                )
            }
        }
    }
}
