//! Resource client implementation for the Twitter REST API.
//!
//! This module provides the [`ResourceClient`] type, which resolves resource
//! paths against the versioned API base and hands responses to
//! caller-supplied extractors.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::Credentials;
use crate::clients::resource::path::{expand_path, normalize_path};
use crate::clients::resource::{RequestOptions, ResourceError};
use crate::clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse, Payload,
};
use crate::config::{ApiVersion, TwitterConfig};
use crate::extract::{ExtractError, JsonExtractor, ResponseExtractor};

/// A resolved request target.
struct Target {
    path: String,
    query: BTreeMap<String, String>,
    json_property: Option<String>,
}

/// Low-level client for Twitter REST resources.
///
/// Every operation is a single HTTP exchange: GET for fetches, POST for
/// publishes and DELETE for deletes. The credentials are fixed at
/// construction and no state changes afterwards.
///
/// # Thread Safety
///
/// `ResourceClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use twitter_api::{AccessToken, Credentials, ResourceClient};
/// use twitter_api::clients::{Payload, RequestOptions};
/// use twitter_api::extract::JsonExtractor;
///
/// let credentials = Credentials::user(AccessToken::new("access-token")?);
/// let client = ResourceClient::new(&credentials, None)?;
///
/// // GET https://api.twitter.com/1/statuses/show/20.json
/// let options = RequestOptions::new().query_param("id", "20");
/// let tweet: serde_json::Value = client
///     .fetch_as("statuses/show/{id}.json", Some(options))
///     .await?;
///
/// // POST https://api.twitter.com/1/statuses/update.json
/// let payload = Payload::new().with("status", "hello");
/// client.publish("statuses/update.json", payload).await?;
/// ```
#[derive(Debug)]
pub struct ResourceClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// The API version being used.
    api_version: ApiVersion,
    /// Construction-time credentials.
    credentials: Credentials,
}

// Verify ResourceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceClient>();
};

impl ResourceClient {
    /// Creates a new resource client.
    ///
    /// Uses the API version from the configuration, or [`ApiVersion::V1`]
    /// when no configuration is given.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] if a custom API version is
    /// malformed, or [`ResourceError::Http`] if the underlying HTTP client
    /// cannot be created.
    pub fn new(
        credentials: &Credentials,
        config: Option<&TwitterConfig>,
    ) -> Result<Self, ResourceError> {
        let api_version = config.map_or_else(ApiVersion::default, |c| c.api_version().clone());

        Self::create_client(credentials, config, api_version)
    }

    /// Creates a new resource client with a specific API version override.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] if a custom API version is
    /// malformed, or [`ResourceError::Http`] if the underlying HTTP client
    /// cannot be created.
    pub fn with_version(
        credentials: &Credentials,
        config: Option<&TwitterConfig>,
        version: ApiVersion,
    ) -> Result<Self, ResourceError> {
        if let Some(cfg_version) = config.map(TwitterConfig::api_version) {
            if &version == cfg_version {
                tracing::debug!(
                    "Resource client has a redundant API version override to the default {}",
                    cfg_version
                );
            } else {
                tracing::debug!(
                    "Resource client overriding default API version {} with {}",
                    cfg_version,
                    version
                );
            }
        }

        Self::create_client(credentials, config, version)
    }

    fn create_client(
        credentials: &Credentials,
        config: Option<&TwitterConfig>,
        api_version: ApiVersion,
    ) -> Result<Self, ResourceError> {
        api_version.validate()?;
        let http_client = HttpClient::new(api_version.base_path(), credentials, config)?;

        tracing::debug!(
            "Created resource client for {}{} ({} credentials)",
            http_client.base_uri(),
            http_client.base_path(),
            credentials
        );

        Ok(Self {
            http_client,
            api_version,
            credentials: credentials.clone(),
        })
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns `true` if the client acts on behalf of a user.
    ///
    /// This reads the construction-time credentials and performs no request.
    #[must_use]
    pub const fn is_authorized_for_user(&self) -> bool {
        self.credentials.is_authorized_for_user()
    }

    /// Fetches a single object and converts it with `extractor`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the path is invalid, the request fails,
    /// the body is not JSON, or the extractor rejects it.
    pub async fn fetch_object<E>(
        &self,
        path: &str,
        extractor: &E,
        options: Option<RequestOptions>,
    ) -> Result<E::Output, ResourceError>
    where
        E: ResponseExtractor + ?Sized,
    {
        let target = Self::resolve(path, options)?;
        let response = self
            .send(HttpRequest::builder(HttpMethod::Get, &target.path).query(target.query))
            .await?;
        let body = Self::parse_body(&target.path, &response)?;

        Ok(extractor.extract_object(&body)?)
    }

    /// Fetches a list of objects and converts each with `extractor`.
    ///
    /// When `options` names a `json_property`, the list is read from that
    /// property of the response object. Otherwise the response itself must
    /// be a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the path is invalid, the request fails,
    /// the body is not JSON, the list cannot be located, or the extractor
    /// rejects an element.
    pub async fn fetch_objects<E>(
        &self,
        path: &str,
        extractor: &E,
        options: Option<RequestOptions>,
    ) -> Result<Vec<E::Output>, ResourceError>
    where
        E: ResponseExtractor + ?Sized,
    {
        let target = Self::resolve(path, options)?;
        let response = self
            .send(HttpRequest::builder(HttpMethod::Get, &target.path).query(target.query))
            .await?;
        let body = Self::parse_body(&target.path, &response)?;

        let items = match target.json_property {
            Some(property) => match body.get(property.as_str()) {
                Some(Value::Array(items)) => items,
                Some(_) => return Err(ExtractError::PropertyNotArray { property }.into()),
                None => return Err(ExtractError::MissingProperty { property }.into()),
            },
            None => match &body {
                Value::Array(items) => items,
                _ => return Err(ExtractError::ExpectedArray.into()),
            },
        };

        Ok(extractor.extract_objects(items)?)
    }

    /// Fetches a single object and deserializes it into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the path is invalid, the request fails,
    /// or the body does not map onto `T`.
    pub async fn fetch_as<T>(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<T, ResourceError>
    where
        T: DeserializeOwned,
    {
        self.fetch_object(path, &JsonExtractor::<T>::new(), options)
            .await
    }

    /// Fetches an image and returns the raw response bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the path is invalid or the request fails.
    pub async fn fetch_image(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<Vec<u8>, ResourceError> {
        let target = Self::resolve(path, options)?;
        let response = self
            .send(
                HttpRequest::builder(HttpMethod::Get, &target.path)
                    .query(target.query)
                    .header("Accept", "image/*"),
            )
            .await?;

        Ok(response.body)
    }

    /// Posts `payload` to a resource without reading the response body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the path is invalid or the request fails.
    pub async fn publish(&self, path: &str, payload: Payload) -> Result<(), ResourceError> {
        let target = Self::resolve(path, None)?;
        self.send(HttpRequest::builder(HttpMethod::Post, &target.path).payload(payload))
            .await?;

        Ok(())
    }

    /// Posts `payload` to a resource and converts the response with
    /// `extractor`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the path is invalid, the request fails,
    /// the body is not JSON, or the extractor rejects it.
    pub async fn publish_and_extract<E>(
        &self,
        path: &str,
        payload: Payload,
        extractor: &E,
        options: Option<RequestOptions>,
    ) -> Result<E::Output, ResourceError>
    where
        E: ResponseExtractor + ?Sized,
    {
        let target = Self::resolve(path, options)?;
        let response = self
            .send(
                HttpRequest::builder(HttpMethod::Post, &target.path)
                    .query(target.query)
                    .payload(payload),
            )
            .await?;
        let body = Self::parse_body(&target.path, &response)?;

        Ok(extractor.extract_object(&body)?)
    }

    /// Posts `payload` to a resource and deserializes the response into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the path is invalid, the request fails,
    /// or the body does not map onto `T`.
    pub async fn publish_as<T>(
        &self,
        path: &str,
        payload: Payload,
        options: Option<RequestOptions>,
    ) -> Result<T, ResourceError>
    where
        T: DeserializeOwned,
    {
        self.publish_and_extract(path, payload, &JsonExtractor::<T>::new(), options)
            .await
    }

    /// Deletes a resource without reading the response body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the path is invalid or the request fails.
    pub async fn delete(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<(), ResourceError> {
        let target = Self::resolve(path, options)?;
        self.send(HttpRequest::builder(HttpMethod::Delete, &target.path).query(target.query))
            .await?;

        Ok(())
    }

    /// Normalizes `path` and fills its placeholders from the options.
    fn resolve(path: &str, options: Option<RequestOptions>) -> Result<Target, ResourceError> {
        let normalized = normalize_path(path)?;
        let (query, json_property) = options.unwrap_or_default().into_parts();
        let expanded = expand_path(normalized, query)?;

        Ok(Target {
            path: expanded.path,
            query: expanded.query,
            json_property,
        })
    }

    async fn send(
        &self,
        builder: HttpRequestBuilder,
    ) -> Result<HttpResponse, ResourceError> {
        let request = builder.build().map_err(HttpError::from)?;
        Ok(self.http_client.request(request).await?)
    }

    fn parse_body(path: &str, response: &HttpResponse) -> Result<Value, ResourceError> {
        response
            .json()
            .map_err(|source| ResourceError::MalformedResponse {
                path: path.to_string(),
                source,
            })
    }
}
