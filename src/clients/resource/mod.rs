//! Resource-oriented client for the Twitter REST API.
//!
//! This module provides a higher-level client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that fetches, publishes and
//! deletes resources addressed by paths relative to the versioned API base.
//!
//! # Overview
//!
//! - [`ResourceClient`]: fetch, publish and delete operations
//! - [`RequestOptions`]: query parameters and list property selection
//! - [`ResourceError`]: error type for resource operations
//!
//! # Paths
//!
//! - Leading slashes are stripped: `/statuses/show/1.json` -> `statuses/show/1.json`
//! - `{name}` placeholders are filled from query parameters with the same key
//! - Query parameters that fill no placeholder are sent as the query string
//!
//! # Example
//!
//! ```rust,ignore
//! use twitter_api::{Credentials, ResourceClient};
//! use twitter_api::clients::RequestOptions;
//! use twitter_api::extract::extractor_fn;
//!
//! let client = ResourceClient::new(&Credentials::Anonymous, None)?;
//!
//! let names = client
//!     .fetch_objects(
//!         "statuses/friends/{screen_name}.json",
//!         &extractor_fn(|user| Ok(user["screen_name"].to_string())),
//!         Some(RequestOptions::new().query_param("screen_name", "jack")),
//!     )
//!     .await?;
//! ```

mod client;
mod errors;
mod options;
pub mod path;

pub use client::ResourceClient;
pub use errors::ResourceError;
pub use options::RequestOptions;
