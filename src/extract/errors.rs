//! Error types for response extraction.

use thiserror::Error;

/// Errors produced while turning a JSON response into typed values.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A required field is absent or `null`.
    #[error("Missing required field '{field}' in response")]
    MissingField {
        /// The field name.
        field: String,
    },

    /// A field is present but has the wrong JSON type.
    #[error("Field '{field}' in response is not a {expected}")]
    UnexpectedType {
        /// The field name.
        field: String,
        /// A description of the expected type.
        expected: &'static str,
    },

    /// The property selected for a list extraction is absent.
    #[error("Response has no property '{property}' to extract a list from")]
    MissingProperty {
        /// The requested property.
        property: String,
    },

    /// The property selected for a list extraction is not an array.
    #[error("Response property '{property}' is not a JSON array")]
    PropertyNotArray {
        /// The requested property.
        property: String,
    },

    /// A list extraction was requested but the response is not an array.
    #[error("Expected a JSON array in response")]
    ExpectedArray,

    /// Structural (serde) mapping failed.
    #[error("Failed to map response: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// Any other failure reported by a custom extractor.
    #[error("{message}")]
    Custom {
        /// A description of the failure.
        message: String,
    },
}

impl ExtractError {
    /// Creates an [`ExtractError::UnexpectedType`].
    #[must_use]
    pub fn unexpected_type(field: impl Into<String>, expected: &'static str) -> Self {
        Self::UnexpectedType {
            field: field.into(),
            expected,
        }
    }

    /// Creates an [`ExtractError::Custom`].
    #[must_use]
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_field() {
        let error = ExtractError::MissingField {
            field: "screen_name".to_string(),
        };
        assert!(error.to_string().contains("'screen_name'"));

        let error = ExtractError::unexpected_type("id", "unsigned integer");
        assert_eq!(
            error.to_string(),
            "Field 'id' in response is not a unsigned integer"
        );
    }

    #[test]
    fn test_list_error_messages() {
        assert!(ExtractError::MissingProperty {
            property: "users".to_string()
        }
        .to_string()
        .contains("'users'"));
        assert!(ExtractError::PropertyNotArray {
            property: "users".to_string()
        }
        .to_string()
        .contains("not a JSON array"));
        assert_eq!(
            ExtractError::ExpectedArray.to_string(),
            "Expected a JSON array in response"
        );
    }

    #[test]
    fn test_custom_error_message() {
        assert_eq!(ExtractError::custom("bad tweet").to_string(), "bad tweet");
    }

    #[test]
    fn test_from_serde_error() {
        let serde_error = serde_json::from_str::<u64>("\"x\"").unwrap_err();
        let error: ExtractError = serde_error.into();
        assert!(matches!(error, ExtractError::Deserialize(_)));
    }
}
