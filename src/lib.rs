//! # Twitter REST Client
//!
//! A low-level Rust client for the Twitter REST API. It fetches single
//! objects, lists of objects and images, publishes form or multipart data,
//! and deletes resources, all relative to a versioned API base
//! (`https://api.twitter.com/1/` by default).
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`TwitterConfig`] and [`TwitterConfigBuilder`]
//! - Validated newtypes for tokens and hosts
//! - [`Credentials`] deciding the `Authorization` header
//! - The [`ResourceClient`] façade with path placeholders and query options
//! - Pluggable response extraction via [`extract::ResponseExtractor`]
//! - An async HTTP layer ([`HttpClient`]) built on reqwest
//!
//! ## Quick Start
//!
//! ```rust
//! use twitter_api::{AccessToken, ApiVersion, Credentials, ResourceClient, TwitterConfig};
//!
//! let config = TwitterConfig::builder()
//!     .api_version(ApiVersion::V1)
//!     .user_agent_prefix("MyApp/1.0")
//!     .build();
//!
//! let credentials = Credentials::user(AccessToken::new("access-token").unwrap());
//! let client = ResourceClient::new(&credentials, Some(&config)).unwrap();
//!
//! assert!(client.is_authorized_for_user());
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use serde::Deserialize;
//! use twitter_api::{Credentials, ResourceClient};
//! use twitter_api::clients::{Payload, PayloadValue, RequestOptions};
//! use twitter_api::extract::{extractor_fn, require_str};
//!
//! #[derive(Deserialize)]
//! struct Tweet {
//!     id: u64,
//!     text: String,
//! }
//!
//! let client = ResourceClient::new(&credentials, None)?;
//!
//! // Typed fetch with a path placeholder
//! let tweet: Tweet = client
//!     .fetch_as(
//!         "statuses/show/{id}.json",
//!         Some(RequestOptions::new().query_param("id", "20")),
//!     )
//!     .await?;
//!
//! // List fetch from a property of the response object
//! let names = client
//!     .fetch_objects(
//!         "statuses/friends.json",
//!         &extractor_fn(|user| Ok(require_str(user, "screen_name")?.to_string())),
//!         Some(RequestOptions::new().json_property("users")),
//!     )
//!     .await?;
//!
//! // Multipart publish
//! let payload = Payload::new()
//!     .with("status", "look at this")
//!     .with("media[]", PayloadValue::binary("cat.png", png_bytes));
//! client.publish("statuses/update_with_media.json", payload).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Single attempt**: No retries or rate-limit waiting

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod extract;

// Re-export public types at crate root for convenience
pub use auth::Credentials;
pub use config::{AccessToken, ApiVersion, HostUrl, TwitterConfig, TwitterConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiErrorKind, DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, Payload, PayloadValue,
};

// Re-export resource client types
pub use clients::{RequestOptions, ResourceClient, ResourceError};
