//! Authorization state for Twitter API calls.
//!
//! This crate does not implement any OAuth flow. Callers obtain tokens
//! elsewhere and hand them to the client as [`Credentials`], which decide
//! the `Authorization` header and whether the client acts on behalf of a
//! user.
//!
//! # Example
//!
//! ```rust
//! use twitter_api::{AccessToken, Credentials};
//!
//! let user = Credentials::user(AccessToken::new("user-token").unwrap());
//! assert!(user.is_authorized_for_user());
//!
//! let app = Credentials::application(AccessToken::new("app-token").unwrap());
//! assert!(!app.is_authorized_for_user());
//! ```

pub mod credentials;

pub use credentials::Credentials;
