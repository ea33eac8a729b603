//! DigitalOcean API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the DigitalOcean API to use.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// DigitalOcean API version.
///
/// The public API is versioned by a path prefix (`/v2/...`). Only version 2
/// is served today, so the enum has a single variant; parsing any other
/// value fails with [`ConfigError::UnsupportedApiVersion`].
///
/// # Example
///
/// ```rust
/// use digitalocean_api::ApiVersion;
///
/// let version: ApiVersion = "V2".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2);
/// assert_eq!(version.to_string(), "v2");
///
/// assert!("v1".parse::<ApiVersion>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2.
    #[default]
    V2,
}

impl ApiVersion {
    /// Returns the latest API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2
    }

    /// Returns the path segment for this version, without slashes.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V2 => "v2",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("v2") {
            Ok(Self::V2)
        } else {
            Err(ConfigError::UnsupportedApiVersion {
                version: s.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parses_case_insensitively() {
        assert_eq!("v2".parse::<ApiVersion>().unwrap(), ApiVersion::V2);
        assert_eq!("V2".parse::<ApiVersion>().unwrap(), ApiVersion::V2);
    }

    #[test]
    fn test_unsupported_versions_are_rejected() {
        for input in ["v1", "v3", "", "2"] {
            assert!(
                matches!(
                    input.parse::<ApiVersion>(),
                    Err(ConfigError::UnsupportedApiVersion { .. })
                ),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_display_is_path_segment() {
        assert_eq!(ApiVersion::latest().to_string(), "v2");
        assert_eq!(ApiVersion::default(), ApiVersion::V2);
    }
}
