//! Pluggable conversion of API responses into typed values.
//!
//! The resource client never decides how a JSON document becomes a domain
//! object; callers pass a [`ResponseExtractor`] with each call.
//!
//! # Overview
//!
//! - [`ResponseExtractor`]: the extraction capability
//! - [`JsonExtractor`]: structural mapping through serde
//! - [`FnExtractor`]: wraps a closure, built with [`extractor_fn`]
//! - [`ExtractError`]: everything that can go wrong while extracting
//!
//! Helpers such as [`require_str`] and [`require_u64`] make hand-written
//! extractors short.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use twitter_api::extract::{extractor_fn, require_str, require_u64, ResponseExtractor};
//!
//! #[derive(Debug, PartialEq)]
//! struct Tweet {
//!     id: u64,
//!     text: String,
//! }
//!
//! let extractor = extractor_fn(|value| {
//!     Ok(Tweet {
//!         id: require_u64(value, "id")?,
//!         text: require_str(value, "text")?.to_string(),
//!     })
//! });
//!
//! let tweet = extractor
//!     .extract_object(&json!({"id": 20, "text": "just setting up my twttr"}))
//!     .unwrap();
//! assert_eq!(tweet.id, 20);
//! ```

mod errors;

pub use errors::ExtractError;

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// Converts a JSON response into a value of a caller-chosen type.
///
/// Only [`extract_object`](Self::extract_object) is required; list
/// extraction defaults to applying it to every element in order.
pub trait ResponseExtractor {
    /// The type produced by this extractor.
    type Output;

    /// Extracts a single object.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] if the value does not have the expected shape.
    fn extract_object(&self, value: &Value) -> Result<Self::Output, ExtractError>;

    /// Extracts a list of objects, preserving order.
    ///
    /// # Errors
    ///
    /// Returns the first [`ExtractError`] produced by an element.
    fn extract_objects(&self, values: &[Value]) -> Result<Vec<Self::Output>, ExtractError> {
        values.iter().map(|value| self.extract_object(value)).collect()
    }
}

impl<E: ResponseExtractor + ?Sized> ResponseExtractor for &E {
    type Output = E::Output;

    fn extract_object(&self, value: &Value) -> Result<Self::Output, ExtractError> {
        (**self).extract_object(value)
    }

    fn extract_objects(&self, values: &[Value]) -> Result<Vec<Self::Output>, ExtractError> {
        (**self).extract_objects(values)
    }
}

/// Extracts values by deserializing them with serde.
pub struct JsonExtractor<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonExtractor<T> {
    /// Creates a new serde-backed extractor.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for JsonExtractor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonExtractor<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for JsonExtractor<T> {}

impl<T> fmt::Debug for JsonExtractor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JsonExtractor<{}>", std::any::type_name::<T>())
    }
}

impl<T: DeserializeOwned> ResponseExtractor for JsonExtractor<T> {
    type Output = T;

    fn extract_object(&self, value: &Value) -> Result<T, ExtractError> {
        T::deserialize(value).map_err(ExtractError::from)
    }
}

/// An extractor backed by a closure.
pub struct FnExtractor<F, T> {
    f: F,
    _marker: PhantomData<fn() -> T>,
}

impl<F, T> fmt::Debug for FnExtractor<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FnExtractor<{}>", std::any::type_name::<T>())
    }
}

impl<F, T> ResponseExtractor for FnExtractor<F, T>
where
    F: Fn(&Value) -> Result<T, ExtractError>,
{
    type Output = T;

    fn extract_object(&self, value: &Value) -> Result<T, ExtractError> {
        (self.f)(value)
    }
}

/// Wraps a closure as a [`ResponseExtractor`].
pub const fn extractor_fn<F, T>(f: F) -> FnExtractor<F, T>
where
    F: Fn(&Value) -> Result<T, ExtractError>,
{
    FnExtractor {
        f,
        _marker: PhantomData,
    }
}

/// Returns the named field, failing if it is absent or `null`.
///
/// # Errors
///
/// Returns [`ExtractError::MissingField`] if the field is absent or `null`.
pub fn require<'a>(value: &'a Value, field: &str) -> Result<&'a Value, ExtractError> {
    match value.get(field) {
        Some(Value::Null) | None => Err(ExtractError::MissingField {
            field: field.to_string(),
        }),
        Some(found) => Ok(found),
    }
}

/// Returns the named string field.
///
/// # Errors
///
/// Returns [`ExtractError::MissingField`] or [`ExtractError::UnexpectedType`].
pub fn require_str<'a>(value: &'a Value, field: &str) -> Result<&'a str, ExtractError> {
    require(value, field)?
        .as_str()
        .ok_or_else(|| ExtractError::unexpected_type(field, "string"))
}

/// Returns the named unsigned integer field.
///
/// Twitter serializes some ids as strings; numeric strings are accepted.
///
/// # Errors
///
/// Returns [`ExtractError::MissingField`] or [`ExtractError::UnexpectedType`].
pub fn require_u64(value: &Value, field: &str) -> Result<u64, ExtractError> {
    let found = require(value, field)?;
    found
        .as_u64()
        .or_else(|| found.as_str().and_then(|s| s.parse().ok()))
        .ok_or_else(|| ExtractError::unexpected_type(field, "unsigned integer"))
}

/// Returns the named boolean field.
///
/// # Errors
///
/// Returns [`ExtractError::MissingField`] or [`ExtractError::UnexpectedType`].
pub fn require_bool(value: &Value, field: &str) -> Result<bool, ExtractError> {
    require(value, field)?
        .as_bool()
        .ok_or_else(|| ExtractError::unexpected_type(field, "boolean"))
}

/// Returns the named string field, or `None` if it is absent or `null`.
#[must_use]
pub fn optional_str<'a>(value: &'a Value, field: &str) -> Option<&'a str> {
    value.get(field).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct User {
        id: u64,
        screen_name: String,
    }

    fn screen_name_extractor() -> impl ResponseExtractor<Output = String> {
        extractor_fn(|value| Ok(require_str(value, "screen_name")?.to_string()))
    }

    #[test]
    fn test_json_extractor_maps_structurally() {
        let user = JsonExtractor::<User>::new()
            .extract_object(&json!({"id": 1, "screen_name": "jack", "extra": true}))
            .unwrap();

        assert_eq!(
            user,
            User {
                id: 1,
                screen_name: "jack".to_string()
            }
        );
    }

    #[test]
    fn test_json_extractor_reports_deserialize_errors() {
        let result = JsonExtractor::<User>::new().extract_object(&json!({"id": "x"}));
        assert!(matches!(result, Err(ExtractError::Deserialize(_))));
    }

    #[test]
    fn test_fn_extractor_applies_closure() {
        let name = screen_name_extractor()
            .extract_object(&json!({"screen_name": "biz"}))
            .unwrap();
        assert_eq!(name, "biz");
    }

    #[test]
    fn test_default_extract_objects_preserves_order() {
        let values = vec![
            json!({"screen_name": "a"}),
            json!({"screen_name": "b"}),
            json!({"screen_name": "c"}),
        ];
        let names = screen_name_extractor().extract_objects(&values).unwrap();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_extract_objects_stops_at_first_error() {
        let values = vec![json!({"screen_name": "a"}), json!({"id": 2})];
        let result = screen_name_extractor().extract_objects(&values);
        assert!(matches!(
            result,
            Err(ExtractError::MissingField { field }) if field == "screen_name"
        ));
    }

    #[test]
    fn test_reference_and_dyn_extractors() {
        let extractor = JsonExtractor::<u64>::new();
        let by_ref = &extractor;
        assert_eq!(by_ref.extract_object(&json!(7)).unwrap(), 7);

        let dynamic: &dyn ResponseExtractor<Output = u64> = &extractor;
        assert_eq!(dynamic.extract_objects(&[json!(1), json!(2)]).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_require_helpers() {
        let value = json!({
            "id": 10,
            "id_str": "11",
            "name": "Rust",
            "verified": true,
            "url": null
        });

        assert_eq!(require_u64(&value, "id").unwrap(), 10);
        assert_eq!(require_u64(&value, "id_str").unwrap(), 11);
        assert_eq!(require_str(&value, "name").unwrap(), "Rust");
        assert!(require_bool(&value, "verified").unwrap());
        assert_eq!(optional_str(&value, "url"), None);
        assert_eq!(optional_str(&value, "name"), Some("Rust"));

        assert!(matches!(
            require(&value, "url"),
            Err(ExtractError::MissingField { .. })
        ));
        assert!(matches!(
            require_str(&value, "id"),
            Err(ExtractError::UnexpectedType { expected: "string", .. })
        ));
    }
}
