//! Form data sent with publish requests.
//!
//! A [`Payload`] is a multi-valued mapping from field name to one or more
//! [`PayloadValue`]s. Payloads containing only text are sent as
//! `application/x-www-form-urlencoded`; a single binary value switches the
//! whole payload to `multipart/form-data`.

use crate::clients::http_request::DataType;

/// A single value of a payload field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PayloadValue {
    /// A plain text value.
    Text(String),
    /// A file upload (e.g., a profile image).
    Binary {
        /// The file name reported to the server.
        file_name: String,
        /// The MIME type of the data, if known.
        content_type: Option<String>,
        /// The raw bytes.
        data: Vec<u8>,
    },
}

impl PayloadValue {
    /// Creates a binary value with no explicit content type.
    #[must_use]
    pub fn binary(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self::Binary {
            file_name: file_name.into(),
            content_type: None,
            data: data.into(),
        }
    }

    /// Returns the text of a [`PayloadValue::Text`] value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Binary { .. } => None,
        }
    }

    /// Returns `true` for binary values.
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        matches!(self, Self::Binary { .. })
    }
}

impl From<String> for PayloadValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for PayloadValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Multi-valued form data for publish requests.
///
/// Fields keep the order in which they were first added, and values keep
/// the order in which they were added to their field.
///
/// # Example
///
/// ```rust
/// use twitter_api::clients::{DataType, Payload, PayloadValue};
///
/// let mut payload = Payload::new();
/// payload.add("status", "Hello world");
/// payload.add("include_entities", "true");
/// assert_eq!(payload.data_type(), DataType::Form);
///
/// payload.add("image", PayloadValue::binary("me.png", vec![0x89, 0x50]));
/// assert_eq!(payload.data_type(), DataType::Multipart);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Payload {
    fields: Vec<(String, Vec<PayloadValue>)>,
}

impl Payload {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value to a field, creating the field if needed.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<PayloadValue>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, values)) => values.push(value),
            None => self.fields.push((name, vec![value])),
        }
    }

    /// Builder-style variant of [`add`](Self::add).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PayloadValue>) -> Self {
        self.add(name, value);
        self
    }

    /// Replaces all values of a field with a single value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<PayloadValue>) {
        let name = name.into();
        self.remove(&name);
        self.fields.push((name, vec![value.into()]));
    }

    /// Removes a field, returning its values.
    pub fn remove(&mut self, name: &str) -> Option<Vec<PayloadValue>> {
        let index = self.fields.iter().position(|(field, _)| field == name)?;
        Some(self.fields.remove(index).1)
    }

    /// Returns the first value of a field.
    #[must_use]
    pub fn get_first(&self, name: &str) -> Option<&PayloadValue> {
        self.get_all(name).first()
    }

    /// Returns all values of a field (empty if the field is absent).
    #[must_use]
    pub fn get_all(&self, name: &str) -> &[PayloadValue] {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, values)| values.as_slice())
            .unwrap_or_default()
    }

    /// Returns the field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Returns every `(name, value)` pair, flattening multi-valued fields.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PayloadValue)> {
        self.fields
            .iter()
            .flat_map(|(name, values)| values.iter().map(move |value| (name.as_str(), value)))
    }

    /// Returns the number of distinct fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the payload has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the encoding this payload requires.
    #[must_use]
    pub fn data_type(&self) -> DataType {
        if self.iter().any(|(_, value)| value.is_binary()) {
            DataType::Multipart
        } else {
            DataType::Form
        }
    }

    /// Returns the first field holding a binary value, if any.
    pub(crate) fn first_binary_field(&self) -> Option<&str> {
        self.iter()
            .find(|(_, value)| value.is_binary())
            .map(|(name, _)| name)
    }

    /// Returns the text pairs for a URL-encoded body.
    ///
    /// Binary values are skipped; callers must check [`data_type`](Self::data_type) first.
    pub(crate) fn form_pairs(&self) -> Vec<(&str, &str)> {
        self.iter()
            .filter_map(|(name, value)| value.as_text().map(|text| (name, text)))
            .collect()
    }

    /// Builds a multipart form from this payload.
    ///
    /// # Errors
    ///
    /// Returns a [`reqwest::Error`] if a binary value carries an invalid MIME type.
    pub(crate) fn to_multipart(&self) -> Result<reqwest::multipart::Form, reqwest::Error> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in self.iter() {
            form = match value {
                PayloadValue::Text(text) => form.text(name.to_string(), text.clone()),
                PayloadValue::Binary {
                    file_name,
                    content_type,
                    data,
                } => {
                    let mut part =
                        reqwest::multipart::Part::bytes(data.clone()).file_name(file_name.clone());
                    if let Some(content_type) = content_type {
                        part = part.mime_str(content_type)?;
                    }
                    form.part(name.to_string(), part)
                }
            };
        }
        Ok(form)
    }
}

impl<K, V> FromIterator<(K, V)> for Payload
where
    K: Into<String>,
    V: Into<PayloadValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = Self::new();
        for (name, value) in iter {
            payload.add(name, value);
        }
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates_values_per_field() {
        let mut payload = Payload::new();
        payload.add("user_id", "1");
        payload.add("user_id", "2");
        payload.add("status", "hi");

        assert_eq!(payload.len(), 2);
        assert_eq!(
            payload.get_all("user_id"),
            &[PayloadValue::from("1"), PayloadValue::from("2")]
        );
        assert_eq!(payload.get_first("status").and_then(PayloadValue::as_text), Some("hi"));
    }

    #[test]
    fn test_names_keep_insertion_order() {
        let payload = Payload::new()
            .with("b", "1")
            .with("a", "2")
            .with("b", "3");

        assert_eq!(payload.names().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(
            payload.form_pairs(),
            vec![("b", "1"), ("b", "3"), ("a", "2")]
        );
    }

    #[test]
    fn test_set_replaces_all_values() {
        let mut payload = Payload::new().with("status", "one").with("status", "two");
        payload.set("status", "three");

        assert_eq!(payload.get_all("status"), &[PayloadValue::from("three")]);
    }

    #[test]
    fn test_remove_returns_values() {
        let mut payload = Payload::new().with("status", "hi");
        assert_eq!(payload.remove("status"), Some(vec![PayloadValue::from("hi")]));
        assert!(payload.remove("status").is_none());
        assert!(payload.is_empty());
    }

    #[test]
    fn test_missing_field_has_no_values() {
        let payload = Payload::new();
        assert!(payload.get_all("nothing").is_empty());
        assert!(payload.get_first("nothing").is_none());
    }

    #[test]
    fn test_data_type_switches_to_multipart_for_binary() {
        let text_only: Payload = [("status", "hi")].into_iter().collect();
        assert_eq!(text_only.data_type(), DataType::Form);
        assert!(text_only.first_binary_field().is_none());

        let with_image = text_only.with("image", PayloadValue::binary("a.png", vec![1, 2, 3]));
        assert_eq!(with_image.data_type(), DataType::Multipart);
        assert_eq!(with_image.first_binary_field(), Some("image"));
    }

    #[test]
    fn test_empty_payload_is_form_encoded() {
        assert_eq!(Payload::new().data_type(), DataType::Form);
        assert!(Payload::new().form_pairs().is_empty());
    }

    #[test]
    fn test_multipart_rejects_invalid_mime_type() {
        let payload = Payload::new().with(
            "image",
            PayloadValue::Binary {
                file_name: "a.png".to_string(),
                content_type: Some("not a mime type".to_string()),
                data: vec![1],
            },
        );
        assert!(payload.to_multipart().is_err());
    }
}
