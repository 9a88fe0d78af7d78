//! Twitter REST API version definitions.
//!
//! The version is the first path segment under the API host, so
//! [`ApiVersion::V1`] resolves resources under `https://api.twitter.com/1/`.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Twitter REST API version.
///
/// # Example
///
/// ```rust
/// use twitter_api::ApiVersion;
///
/// let version: ApiVersion = "1.1".parse().unwrap();
/// assert_eq!(version, ApiVersion::V1_1);
/// assert_eq!(ApiVersion::default().to_string(), "1");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// REST API version 1, served under `/1/`.
    #[default]
    V1,
    /// REST API version 1.1, served under `/1.1/`.
    V1_1,
    /// Any other dotted numeric version.
    Custom(String),
}

impl ApiVersion {
    /// Returns the path segment for this version (e.g., `"1.1"`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V1 => "1",
            Self::V1_1 => "1.1",
            Self::Custom(version) => version,
        }
    }

    /// Returns `true` for the versions this crate knows about.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Returns the base path resources are resolved against (e.g., `/1.1`).
    #[must_use]
    pub fn base_path(&self) -> String {
        format!("/{}", self.as_str())
    }

    /// Checks that a [`ApiVersion::Custom`] value is a dotted numeric version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the custom version is
    /// empty or not dotted numeric.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::Custom(version) if !Self::is_valid_version(version) => {
                Err(ConfigError::InvalidApiVersion {
                    version: version.clone(),
                })
            }
            _ => Ok(()),
        }
    }

    fn is_valid_version(version: &str) -> bool {
        !version.is_empty()
            && version
                .split('.')
                .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
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
        let version = s.trim().trim_start_matches(['v', 'V']);
        match version {
            "1" => Ok(Self::V1),
            "1.1" => Ok(Self::V1_1),
            other if Self::is_valid_version(other) => Ok(Self::Custom(other.to_string())),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}
