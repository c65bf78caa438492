//! User interface module.
//!
//! - `formatter` - Individual message formatters
//! - This module - Reporting a whole conversion

pub mod formatter;

pub use formatter::{
    describe_prerelease, display_boundary_warning, display_error, display_status,
    display_version, format_mapping,
};

use crate::converter::ConversionResult;

/// Reports a finished conversion.
///
/// Warnings go to stderr unless `quiet` is set; `verbose` adds a summary
/// line. The converted version is always the only thing on stdout.
pub fn report_conversion(result: &ConversionResult, quiet: bool, verbose: bool) {
    if !quiet {
        for warning in &result.warnings {
            display_boundary_warning(warning);
        }
    }

    if verbose {
        display_status(&summarize_conversion(result));
    }

    display_version(&result.converted.to_string());
}

/// Verbose one-line summary, naming the pre-release when there is one.
pub fn summarize_conversion(result: &ConversionResult) -> String {
    let summary = format_mapping(&result.matched.to_string(), &result.converted.to_string());
    match &result.converted.prerelease {
        Some(prerelease) => format!("{} ({})", summary, describe_prerelease(prerelease)),
        None => summary,
    }
}
