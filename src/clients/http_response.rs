//! HTTP response types for the Twitter REST client.

use std::collections::HashMap;

/// An HTTP response from the Twitter API.
///
/// The body is kept as raw bytes so the same type serves JSON resources and
/// binary images. JSON is only parsed when [`json`](Self::json) is called.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Vec<u8>) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Content-Type` header value, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Returns the `X-Transaction-Id` header value, if present.
    ///
    /// Twitter echoes this id for every request; include it in error reports.
    #[must_use]
    pub fn transaction_id(&self) -> Option<&str> {
        self.header("x-transaction-id")
    }

    /// Returns the `X-Api-Warn` header value, if present.
    ///
    /// Twitter sets this header on calls to deprecated endpoints.
    #[must_use]
    pub fn api_warning(&self) -> Option<&str> {
        self.header("x-api-warn")
    }

    /// Parses the body as JSON.
    ///
    /// An empty or whitespace-only body is treated as JSON `null`.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_slice(&self.body)
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
