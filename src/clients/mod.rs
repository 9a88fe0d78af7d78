//! HTTP client types for Twitter REST API communication.
//!
//! This module provides the HTTP layer for making requests to the Twitter
//! REST API and the resource client built on top of it.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`Payload`]: Form or multipart data for POST requests
//! - [`resource::ResourceClient`]: Higher-level resource client
//! - [`resource::ResourceError`]: Resource-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use twitter_api::{AccessToken, Credentials};
//! use twitter_api::clients::{HttpClient, HttpMethod, HttpRequest, Payload};
//!
//! let credentials = Credentials::user(AccessToken::new("access-token").unwrap());
//! let client = HttpClient::new("/1", &credentials, None)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Post, "statuses/update.json")
//!     .payload(Payload::new().with("status", "hello"))
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Retries
//!
//! Each request is attempted exactly once. Rate limiting (420/429) surfaces
//! as an [`HttpError::Response`] whose [`kind`](HttpResponseError::kind) is
//! [`ApiErrorKind::RateLimited`].

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod payload;
pub mod resource;

pub use errors::{ApiErrorKind, HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, CLIENT_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use payload::{Payload, PayloadValue};

// Re-export resource client types at the clients module level
pub use resource::{RequestOptions, ResourceClient, ResourceError};
