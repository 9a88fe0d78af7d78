//! Error types for resource client operations.
//!
//! - [`ResourceError::InvalidPath`]: the path is empty, absolute, or malformed
//! - [`ResourceError::UnresolvedPlaceholder`]: a `{name}` had no parameter
//! - [`ResourceError::MalformedResponse`]: a successful body was not JSON
//! - [`ResourceError::Config`]: wraps configuration errors
//! - [`ResourceError::Http`]: wraps transport errors
//! - [`ResourceError::Extract`]: wraps extraction errors
//!
//! # Example
//!
//! ```rust,ignore
//! use twitter_api::clients::{ApiErrorKind, ResourceError};
//!
//! match client.fetch_as::<Tweet>("statuses/show/{id}.json", Some(options)).await {
//!     Ok(tweet) => println!("{}", tweet.text),
//!     Err(e) if e.kind() == Some(ApiErrorKind::NotFound) => println!("No such tweet"),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use crate::clients::{ApiErrorKind, HttpError};
use crate::error::ConfigError;
use crate::extract::ExtractError;
use thiserror::Error;

/// Error type for resource client operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource path is invalid.
    #[error("Invalid resource path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// A `{name}` placeholder in the path had no matching query parameter.
    #[error("No value for placeholder '{{{placeholder}}}' in resource path: {path}")]
    UnresolvedPlaceholder {
        /// The placeholder name without braces.
        placeholder: String,
        /// The path template.
        path: String,
    },

    /// A successful response body could not be parsed as JSON.
    #[error("Malformed JSON response from {path}: {source}")]
    MalformedResponse {
        /// The requested path.
        path: String,
        /// The parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The client configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response could not be extracted into the requested type.
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

impl ResourceError {
    /// Returns the status classification for API response errors.
    #[must_use]
    pub const fn kind(&self) -> Option<ApiErrorKind> {
        match self {
            Self::Http(e) => e.kind(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_invalid_path_error_includes_path_in_message() {
        let error = ResourceError::InvalidPath {
            path: "https://example.com".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid resource path: https://example.com"
        );
    }

    #[test]
    fn test_unresolved_placeholder_message_shows_braces() {
        let error = ResourceError::UnresolvedPlaceholder {
            placeholder: "id".to_string(),
            path: "statuses/show/{id}.json".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("'{id}'"));
        assert!(message.contains("statuses/show/{id}.json"));
    }

    #[test]
    fn test_from_http_error_conversion() {
        let http_error = HttpError::Response(HttpResponseError {
            code: 420,
            message: r#"{"error":"Enhance your calm"}"#.to_string(),
            error_reference: None,
        });

        let error: ResourceError = http_error.into();
        assert!(error.to_string().contains("Enhance your calm"));
        assert_eq!(error.kind(), Some(ApiErrorKind::RateLimited));
    }

    #[test]
    fn test_from_extract_error_conversion() {
        let error: ResourceError = ExtractError::ExpectedArray.into();
        assert!(matches!(error, ResourceError::Extract(ExtractError::ExpectedArray)));
        assert_eq!(error.kind(), None);
    }

    #[test]
    fn test_malformed_response_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = ResourceError::MalformedResponse {
            path: "statuses/show/1.json".to_string(),
            source,
        };
        assert!(std::error::Error::source(&error).is_some());
        assert!(error.to_string().contains("statuses/show/1.json"));
    }
}
