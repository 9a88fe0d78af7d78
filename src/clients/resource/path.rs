//! Resource path normalization and placeholder expansion.
//!
//! Paths are relative to the API base and may carry `{name}` placeholders,
//! in the path itself or in an embedded query string:
//!
//! - `statuses/show/{id}.json`
//! - `statuses/user_timeline.json?screen_name={screen_name}`
//!
//! Query parameters whose key names a placeholder fill it (percent-encoded);
//! the remaining parameters are returned to be sent as the query string.

use std::collections::BTreeMap;

use crate::clients::resource::ResourceError;

/// A path with its placeholders filled, plus the parameters left over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedPath {
    /// The path with every placeholder substituted.
    pub path: String,
    /// Query parameters that did not name a placeholder.
    pub query: BTreeMap<String, String>,
}

/// Normalizes a relative resource path.
///
/// Strips leading `/` characters and rejects empty paths and absolute URLs.
/// Anything after the first `?` is left alone, so query values may carry URLs.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidPath`] if the path is empty after
/// normalization or is an absolute URL.
pub fn normalize_path(path: &str) -> Result<&str, ResourceError> {
    let trimmed = path.trim().trim_start_matches('/');
    let resource = trimmed.split_once('?').map_or(trimmed, |(resource, _)| resource);

    if resource.is_empty() || resource.contains("://") {
        return Err(ResourceError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(trimmed)
}

/// Fills `{name}` placeholders in `template` from `params`.
///
/// Every parameter consumed by a placeholder is removed from the returned
/// query; a parameter may fill several occurrences of the same placeholder.
///
/// # Errors
///
/// Returns [`ResourceError::UnresolvedPlaceholder`] if a placeholder has no
/// matching parameter, and [`ResourceError::InvalidPath`] if a `{` is never
/// closed.
pub fn expand_path(
    template: &str,
    mut params: BTreeMap<String, String>,
) -> Result<ExpandedPath, ResourceError> {
    let mut result = String::with_capacity(template.len());
    let mut consumed: Vec<String> = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        let close = after_open
            .find('}')
            .ok_or_else(|| ResourceError::InvalidPath {
                path: template.to_string(),
            })?;
        let name = &after_open[..close];

        let value = params
            .get(name)
            .ok_or_else(|| ResourceError::UnresolvedPlaceholder {
                placeholder: name.to_string(),
                path: template.to_string(),
            })?;
        result.push_str(&urlencoding::encode(value));

        if !consumed.iter().any(|c| c == name) {
            consumed.push(name.to_string());
        }
        rest = &after_open[close + 1..];
    }
    result.push_str(rest);

    for name in &consumed {
        params.remove(name);
    }

    Ok(ExpandedPath {
        path: result,
        query: params,
    })
}
