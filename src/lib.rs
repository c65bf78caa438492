pub mod boundary;
pub mod cli;
pub mod config;
pub mod converter;
pub mod domain;
pub mod error;
pub mod ui;

pub use converter::{convert_version, ConversionResult, VersionMapping, MINOR_ROLLOVER};
pub use error::{Result, VersionMapError};
