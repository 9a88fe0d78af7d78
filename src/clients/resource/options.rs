//! Optional per-call settings for [`ResourceClient`](super::ResourceClient).

use std::collections::BTreeMap;

/// Optional settings recognized by resource client calls.
///
/// Passing `None` where an `Option<RequestOptions>` is expected behaves
/// exactly like passing `RequestOptions::default()`.
///
/// # Example
///
/// ```rust
/// use twitter_api::clients::RequestOptions;
///
/// let options = RequestOptions::new()
///     .query_param("screen_name", "rustlang")
///     .json_property("users");
///
/// assert_eq!(options.query_params().get("screen_name").map(String::as_str), Some("rustlang"));
/// assert_eq!(options.json_property_name(), Some("users"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    query_params: BTreeMap<String, String>,
    json_property: Option<String>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options holding the given query parameters.
    #[must_use]
    pub fn with_query<K, V, I>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            query_params: params
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            json_property: None,
        }
    }

    /// Adds a query parameter (replacing any previous value for the key).
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(key.into(), value.into());
        self
    }

    /// Selects the response property holding the list for list fetches.
    #[must_use]
    pub fn json_property(mut self, property: impl Into<String>) -> Self {
        self.json_property = Some(property.into());
        self
    }

    /// Returns the query parameters.
    #[must_use]
    pub const fn query_params(&self) -> &BTreeMap<String, String> {
        &self.query_params
    }

    /// Returns the selected list property, if any.
    #[must_use]
    pub fn json_property_name(&self) -> Option<&str> {
        self.json_property.as_deref()
    }

    pub(crate) fn into_parts(self) -> (BTreeMap<String, String>, Option<String>) {
        (self.query_params, self.json_property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_empty() {
        let options = RequestOptions::default();
        assert!(options.query_params().is_empty());
        assert!(options.json_property_name().is_none());
    }

    #[test]
    fn test_query_param_replaces_existing_value() {
        let options = RequestOptions::new()
            .query_param("count", "10")
            .query_param("count", "20");

        assert_eq!(options.query_params().len(), 1);
        assert_eq!(options.query_params()["count"], "20");
    }

    #[test]
    fn test_with_query_collects_pairs() {
        let options = RequestOptions::with_query([("id", "20"), ("trim_user", "true")]);
        assert_eq!(options.query_params()["id"], "20");
        assert_eq!(options.query_params()["trim_user"], "true");
    }

    #[test]
    fn test_into_parts() {
        let (query, property) = RequestOptions::new()
            .query_param("cursor", "-1")
            .json_property("ids")
            .into_parts();

        assert_eq!(query["cursor"], "-1");
        assert_eq!(property.as_deref(), Some("ids"));
    }
}
