//! Domain logic - version values independent of how they are mapped

pub mod prerelease;
pub mod version;

pub use prerelease::{PreRelease, PreReleaseType};
pub use version::{VersionParts, VERSION_PATTERN};
