//! HTTP client for Twitter API communication.
//!
//! This module provides the [`HttpClient`] type, the transport behind
//! [`ResourceClient`](crate::clients::ResourceClient). Each call is a single
//! exchange; there is no retry or rate-limit handling at this layer.

use std::collections::HashMap;

use crate::auth::Credentials;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{DataType, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::TwitterConfig;

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Twitter API.
///
/// The client handles:
/// - Base URI construction from the configured API host
/// - Default headers including User-Agent and `Authorization`
/// - Form and multipart body encoding
/// - Error message serialization for non-2xx responses
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use twitter_api::{AccessToken, Credentials};
/// use twitter_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let credentials = Credentials::user(AccessToken::new("token").unwrap());
/// let client = HttpClient::new("/1", &credentials, None)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "account/verify_credentials.json")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.twitter.com`).
    base_uri: String,
    /// Base path (e.g., "/1").
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `base_path` - The base path for API requests (e.g., "/1")
    /// * `credentials` - Decides the `Authorization` header
    /// * `config` - Optional configuration for the API host and `user_agent_prefix`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(
        base_path: impl Into<String>,
        credentials: &Credentials,
        config: Option<&TwitterConfig>,
    ) -> Result<Self, HttpError> {
        let base_path = base_path.into();
        let base_path = format!("/{}", base_path.trim_matches('/'));

        let base_uri = config.map_or_else(
            || TwitterConfig::default().api_host().origin().to_string(),
            |c| c.api_host().origin().to_string(),
        );

        let user_agent_prefix = config
            .and_then(TwitterConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Twitter REST Client v{CLIENT_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        if let Some(authorization) = credentials.authorization_header() {
            default_headers.insert("Authorization".to_string(), authorization);
        }

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri,
            base_path,
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL for a relative path, without the query string
    /// added from [`HttpRequest::query`].
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}/{}", self.base_uri, self.base_path, path)
    }

    /// Sends an HTTP request to the Twitter API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);

        let mut headers = self.default_headers.clone();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        // Content-Type (and the multipart boundary) is set by reqwest
        if let (Some(body), Some(body_type)) = (&request.body, request.body_type) {
            req_builder = match body_type {
                DataType::Form => req_builder.form(&body.form_pairs()),
                DataType::Multipart => req_builder.multipart(body.to_multipart()?),
            };
        }

        tracing::debug!("Sending {} request to {}", request.http_method, request.path);

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await?.to_vec();

        let response = HttpResponse::new(code, res_headers, body);

        if let Some(warning) = response.api_warning() {
            tracing::warn!(
                "Deprecated request to Twitter API at {}, received warning: {}",
                request.path,
                warning
            );
        }

        if response.is_ok() {
            return Ok(response);
        }

        tracing::debug!("Request to {} failed with status {}", request.path, code);

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
            error_reference: response.transaction_id().map(String::from),
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes an error response to a compact JSON message.
    ///
    /// Twitter reports failures either as `{"errors": [...]}` or as
    /// `{"error": "...", "request": "..."}`. Bodies that are not JSON are
    /// carried over as `raw_body`.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        match response.json() {
            Ok(body) => {
                for key in ["errors", "error", "request"] {
                    if let Some(value) = body.get(key) {
                        error_body.insert(key.to_string(), value.clone());
                    }
                }
            }
            Err(_) => {
                error_body.insert(
                    "raw_body".to_string(),
                    serde_json::Value::String(response.text()),
                );
            }
        }

        if let Some(transaction_id) = response.transaction_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {transaction_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}
