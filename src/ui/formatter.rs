//! Formatting functions for terminal output.
//!
//! Everything except the converted version goes to stderr so that stdout can
//! be captured by build scripts.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::PreRelease;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").for_stderr().red(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").for_stderr().yellow(), message);
}

/// Display a boundary warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").for_stderr().yellow(), warning);
}

/// Print the converted version on its own line.
pub fn display_version(version: &str) {
    println!("{}", version);
}

/// One-line summary of a mapping, e.g. "Lightning 3.2b2 -> gdata-provider 1.1b2".
pub fn format_mapping(source: &str, converted: &str) -> String {
    format!("Lightning {} -> gdata-provider {}", source, converted)
}

/// Human-readable name for a pre-release suffix, e.g. "beta 2".
pub fn describe_prerelease(prerelease: &PreRelease) -> String {
    let label = if prerelease.is_alpha() {
        "alpha".to_string()
    } else if prerelease.is_beta() {
        "beta".to_string()
    } else {
        format!("pre-release '{}'", prerelease.kind)
    };

    match prerelease.iteration_number() {
        Some(n) => format!("{} {}", label, n),
        None => format!("{} {}", label, prerelease.iteration),
    }
}
