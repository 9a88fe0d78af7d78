//! HTTP-specific error types for the Twitter REST client.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`HttpError`]: Unified error type for everything above plus network failures
//!
//! # Example
//!
//! ```rust,ignore
//! use twitter_api::clients::{ApiErrorKind, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("{} bytes", response.body.len()),
//!     Err(HttpError::Response(e)) if e.kind() == ApiErrorKind::RateLimited => {
//!         println!("Slow down: {}", e.message);
//!     }
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// Broad classification of an unsuccessful response status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// 401: missing or invalid credentials.
    NotAuthorized,
    /// 403: the request is understood but refused (e.g., duplicate status).
    Forbidden,
    /// 404: the resource does not exist.
    NotFound,
    /// 420 ("Enhance Your Calm") or 429: the client is being rate limited.
    RateLimited,
    /// 5xx: the API is down or overloaded.
    ServerError,
    /// Any other non-2xx status.
    Other,
}

impl ApiErrorKind {
    /// Classifies an HTTP status code.
    #[must_use]
    pub const fn from_status(code: u16) -> Self {
        match code {
            401 => Self::NotAuthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            420 | 429 => Self::RateLimited,
            500..=599 => Self::ServerError,
            _ => Self::Other,
        }
    }
}

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message is a JSON serialization of the error fields found in the
/// response body (`errors`, `error`, `request`) plus an `error_reference`
/// built from the `X-Transaction-Id` header.
///
/// # Example
///
/// ```rust
/// use twitter_api::clients::{ApiErrorKind, HttpResponseError};
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"errors":[{"code":34,"message":"Sorry, that page does not exist"}]}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert_eq!(error.kind(), ApiErrorKind::NotFound);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from the `X-Transaction-Id` header).
    pub error_reference: Option<String>,
}

impl HttpResponseError {
    /// Returns the classification of this error's status code.
    #[must_use]
    pub const fn kind(&self) -> ApiErrorKind {
        ApiErrorKind::from_status(self.code)
    }
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A binary value was placed in a URL-encoded form body.
    #[error("Field '{field}' holds binary data and cannot be sent as a URL-encoded form.")]
    BinaryInFormBody {
        /// The offending field name.
        field: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network, connection or client construction error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the status classification for response errors.
    #[must_use]
    pub const fn kind(&self) -> Option<ApiErrorKind> {
        match self {
            Self::Response(e) => Some(e.kind()),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_displays_message() {
        let error = HttpResponseError {
            code: 404,
            message: r#"{"error":"Not Found"}"#.to_string(),
            error_reference: None,
        };
        assert_eq!(error.to_string(), r#"{"error":"Not Found"}"#);
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(ApiErrorKind::from_status(401), ApiErrorKind::NotAuthorized);
        assert_eq!(ApiErrorKind::from_status(403), ApiErrorKind::Forbidden);
        assert_eq!(ApiErrorKind::from_status(404), ApiErrorKind::NotFound);
        assert_eq!(ApiErrorKind::from_status(420), ApiErrorKind::RateLimited);
        assert_eq!(ApiErrorKind::from_status(429), ApiErrorKind::RateLimited);
        assert_eq!(ApiErrorKind::from_status(500), ApiErrorKind::ServerError);
        assert_eq!(ApiErrorKind::from_status(503), ApiErrorKind::ServerError);
        assert_eq!(ApiErrorKind::from_status(400), ApiErrorKind::Other);
    }

    #[test]
    fn test_http_error_kind_only_for_responses() {
        let response = HttpError::Response(HttpResponseError {
            code: 401,
            message: String::new(),
            error_reference: None,
        });
        assert_eq!(response.kind(), Some(ApiErrorKind::NotAuthorized));

        let invalid = HttpError::InvalidRequest(InvalidHttpRequestError::MissingBodyType);
        assert_eq!(invalid.kind(), None);
    }

    #[test]
    fn test_invalid_request_error_messages() {
        assert_eq!(
            InvalidHttpRequestError::MissingBody {
                method: "post".to_string()
            }
            .to_string(),
            "Cannot use post without specifying data."
        );
        assert_eq!(
            InvalidHttpRequestError::MissingBodyType.to_string(),
            "Cannot set a body without also setting body_type."
        );
        assert!(InvalidHttpRequestError::BinaryInFormBody {
            field: "image".to_string()
        }
        .to_string()
        .contains("'image'"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let response_error: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            message: "test".to_string(),
            error_reference: None,
        };
        let _ = response_error;

        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::MissingBodyType;
        let _ = invalid_error;
    }
}
