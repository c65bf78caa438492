//! Main workflow orchestration logic
//!
//! Separates CLI argument parsing (in main.rs) from the conversion itself so
//! the workflow can be driven programmatically without depending on clap.

use tracing::{debug, info};

use crate::config::load_config;
use crate::converter::ConversionResult;
use crate::error::{Result, VersionMapError};

/// Arguments for the convert workflow
///
/// Mirrors the CLI Args in a form suitable for orchestration logic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConvertWorkflowArgs {
    /// Lightning version to convert
    pub version: Option<String>,

    /// Path to custom config file
    pub config_path: Option<String>,
}

/// Main convert workflow
///
/// 1. Require the source version
/// 2. Load configuration
/// 3. Extract and map the version
pub fn run_convert_workflow(args: &ConvertWorkflowArgs) -> Result<ConversionResult> {
    let source = args
        .version
        .as_deref()
        .ok_or(VersionMapError::MissingArgument)?;

    let config = load_config(args.config_path.as_deref())?;
    let mapping = config.mapping();
    debug!(?mapping, "using version mapping");

    let result = mapping.convert_detailed(source)?;
    info!("converted {} to {}", result.matched, result.converted);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_version() {
        let err = run_convert_workflow(&ConvertWorkflowArgs::default()).unwrap_err();
        assert!(matches!(err, VersionMapError::MissingArgument));
    }

    #[test]
    fn test_workflow_with_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[mapping]\nmajor_offset = 1\n").unwrap();
        file.flush().unwrap();

        let args = ConvertWorkflowArgs {
            version: Some("3.2b2".to_string()),
            config_path: Some(file.path().to_str().unwrap().to_string()),
        };
        let result = run_convert_workflow(&args).unwrap();
        assert_eq!(result.converted.to_string(), "2.1b2");
    }

    #[test]
    fn test_workflow_missing_config_file() {
        let args = ConvertWorkflowArgs {
            version: Some("3.1".to_string()),
            config_path: Some("/nonexistent/gdataversion.toml".to_string()),
        };
        let err = run_convert_workflow(&args).unwrap_err();
        assert!(matches!(err, VersionMapError::Io(_)));
    }
}
