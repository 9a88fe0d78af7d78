//! Credentials attached to every request made by a client.

use crate::config::AccessToken;
use std::fmt;

/// The authorization a client was constructed with.
///
/// Credentials are fixed for the lifetime of a client; there is no way to
/// upgrade or downgrade an existing client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Credentials {
    /// Acting on behalf of an authenticated user.
    User {
        /// The user's access token.
        access_token: AccessToken,
    },
    /// Application-only access (no user context).
    Application {
        /// The application's bearer token.
        bearer_token: AccessToken,
    },
    /// No credentials; only public resources are reachable.
    #[default]
    Anonymous,
}

impl Credentials {
    /// Creates user-level credentials.
    #[must_use]
    pub const fn user(access_token: AccessToken) -> Self {
        Self::User { access_token }
    }

    /// Creates application-only credentials.
    #[must_use]
    pub const fn application(bearer_token: AccessToken) -> Self {
        Self::Application { bearer_token }
    }

    /// Returns `true` if these credentials act on behalf of a user.
    #[must_use]
    pub const fn is_authorized_for_user(&self) -> bool {
        matches!(self, Self::User { .. })
    }

    /// Returns the token to send, if any.
    #[must_use]
    pub const fn token(&self) -> Option<&AccessToken> {
        match self {
            Self::User { access_token } => Some(access_token),
            Self::Application { bearer_token } => Some(bearer_token),
            Self::Anonymous => None,
        }
    }

    /// Returns the `Authorization` header value, if any.
    #[must_use]
    pub fn authorization_header(&self) -> Option<String> {
        self.token().map(|token| format!("Bearer {}", token.as_ref()))
    }
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User { .. } => f.write_str("user"),
            Self::Application { .. } => f.write_str("application"),
            Self::Anonymous => f.write_str("anonymous"),
        }
    }
}

// Verify Credentials is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Credentials>();
};
