//! HTTP request types for the Twitter REST client.
//!
//! This module provides the [`HttpRequest`] type and its builder.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;
use crate::clients::payload::Payload;

/// HTTP methods used by the Twitter REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for fetching resources and images.
    Get,
    /// HTTP POST method for publishing data.
    Post,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Encoding of a request body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// URL-encoded form (`application/x-www-form-urlencoded`).
    Form,
    /// Multipart form (`multipart/form-data`), required for file uploads.
    Multipart,
}

/// An HTTP request to be sent to the Twitter API.
///
/// # Example
///
/// ```rust
/// use twitter_api::clients::{HttpMethod, HttpRequest, Payload};
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "statuses/show/20.json")
///     .query_param("include_entities", "true")
///     .build()
///     .unwrap();
///
/// let payload = Payload::new().with("status", "Hello");
/// let post_request = HttpRequest::builder(HttpMethod::Post, "statuses/update.json")
///     .payload(payload)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to base path) for this request.
    pub path: String,
    /// The request body, if any.
    pub body: Option<Payload>,
    /// The encoding of the body.
    pub body_type: Option<DataType>,
    /// Query parameters to append to the URL.
    pub query: Option<BTreeMap<String, String>>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `body` is `Some` but `body_type` is `None`
    /// - `http_method` is `Post` but `body` is `None`
    /// - `body_type` is `Form` but the body holds a binary value
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.body.is_some() && self.body_type.is_none() {
            return Err(InvalidHttpRequestError::MissingBodyType);
        }

        if self.http_method == HttpMethod::Post && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        if let (Some(body), Some(DataType::Form)) = (&self.body, self.body_type) {
            if let Some(field) = body.first_binary_field() {
                return Err(InvalidHttpRequestError::BinaryInFormBody {
                    field: field.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<Payload>,
    body_type: Option<DataType>,
    query: Option<BTreeMap<String, String>>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            body_type: None,
            query: None,
            extra_headers: None,
        }
    }

    /// Sets the request body without choosing an encoding.
    ///
    /// Pair with [`body_type`](Self::body_type), or use
    /// [`payload`](Self::payload) to pick the encoding automatically.
    #[must_use]
    pub fn body(mut self, body: Payload) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets the encoding of the request body.
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.body_type = Some(body_type);
        self
    }

    /// Sets the body and the encoding it requires.
    #[must_use]
    pub fn payload(self, payload: Payload) -> Self {
        let body_type = payload.data_type();
        self.body(payload).body_type(body_type)
    }

    /// Sets all query parameters at once. An empty map sends no query string.
    #[must_use]
    pub fn query(mut self, query: BTreeMap<String, String>) -> Self {
        self.query = if query.is_empty() { None } else { Some(query) };
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            body_type: self.body_type,
            query: self.query,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::payload::PayloadValue;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "statuses/public_timeline.json")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "statuses/public_timeline.json");
        assert!(request.body.is_none());
        assert!(request.body_type.is_none());
        assert!(request.query.is_none());
    }

    #[test]
    fn test_payload_picks_form_encoding() {
        let request = HttpRequest::builder(HttpMethod::Post, "statuses/update.json")
            .payload(Payload::new().with("status", "hi"))
            .build()
            .unwrap();

        assert_eq!(request.body_type, Some(DataType::Form));
    }

    #[test]
    fn test_payload_picks_multipart_encoding() {
        let payload = Payload::new().with("image", PayloadValue::binary("a.png", vec![1]));
        let request = HttpRequest::builder(HttpMethod::Post, "account/update_profile_image.json")
            .payload(payload)
            .build()
            .unwrap();

        assert_eq!(request.body_type, Some(DataType::Multipart));
    }

    #[test]
    fn test_verify_requires_body_for_post() {
        let result = HttpRequest::builder(HttpMethod::Post, "statuses/update.json").build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "post"
        ));
    }

    #[test]
    fn test_verify_allows_empty_payload_for_post() {
        let result = HttpRequest::builder(HttpMethod::Post, "favorites/create/1.json")
            .payload(Payload::new())
            .build();

        assert!(result.is_ok());
    }

    #[test]
    fn test_verify_requires_body_type_when_body_present() {
        let request = HttpRequest {
            http_method: HttpMethod::Post,
            path: "statuses/update.json".to_string(),
            body: Some(Payload::new().with("status", "hi")),
            body_type: None,
            query: None,
            extra_headers: None,
        };

        assert!(matches!(
            request.verify(),
            Err(InvalidHttpRequestError::MissingBodyType)
        ));
    }

    #[test]
    fn test_verify_rejects_binary_in_form_body() {
        let result = HttpRequest::builder(HttpMethod::Post, "account/update_profile_image.json")
            .body(Payload::new().with("image", PayloadValue::binary("a.png", vec![1])))
            .body_type(DataType::Form)
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::BinaryInFormBody { field }) if field == "image"
        ));
    }

    #[test]
    fn test_builder_with_query_params() {
        let request = HttpRequest::builder(HttpMethod::Get, "users/show.json")
            .query_param("screen_name", "rustlang")
            .query_param("include_entities", "true")
            .build()
            .unwrap();

        let query = request.query.unwrap();
        assert_eq!(query.get("screen_name"), Some(&"rustlang".to_string()));
        assert_eq!(query.get("include_entities"), Some(&"true".to_string()));
    }

    #[test]
    fn test_empty_query_map_sends_no_query() {
        let request = HttpRequest::builder(HttpMethod::Get, "users/show.json")
            .query(BTreeMap::new())
            .build()
            .unwrap();

        assert!(request.query.is_none());
    }

    #[test]
    fn test_builder_collects_headers() {
        let request = HttpRequest::builder(HttpMethod::Get, "users/profile_image/rustlang")
            .header("Accept", "image/*")
            .build()
            .unwrap();

        let headers = request.extra_headers.unwrap();
        assert_eq!(headers.get("Accept"), Some(&"image/*".to_string()));
    }
}
