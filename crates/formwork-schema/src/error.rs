//! Error types for schemas.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Schema-specific errors.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A pattern constraint failed to compile.
    #[error("invalid pattern for field {field}: {source}")]
    InvalidPattern {
        /// The field the pattern was declared on.
        field: String,
        #[source]
        source: regex::Error,
    },
}

/// Validation messages keyed by field name.
///
/// Serializes as a plain `{field: [message, ...]}` object. Iteration and
/// serialization order is the field name order, so identical input always
/// produces identical output bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    /// Creates a new empty `FieldErrors`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a message for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Returns whether there are any messages.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with messages.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the messages for a specific field.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    /// Returns all messages as a flat list.
    pub fn all(&self) -> Vec<(&str, &str)> {
        self.errors
            .iter()
            .flat_map(|(field, messages)| {
                messages
                    .iter()
                    .map(move |msg| (field.as_str(), msg.as_str()))
            })
            .collect()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, messages) in &self.errors {
            for message in messages {
                writeln!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut errors = FieldErrors::new();
        errors.add("option", "This field is required.");
        errors.add("option", "Second message.");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("option").map(<[String]>::len), Some(2));
        assert!(errors.get("missing").is_none());
    }

    #[test]
    fn test_serialize_shape() {
        let mut errors = FieldErrors::new();
        errors.add("option", "This field is required.");

        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"option":["This field is required."]}"#);
    }

    #[test]
    fn test_serialize_order_is_stable() {
        let mut a = FieldErrors::new();
        a.add("b", "x");
        a.add("a", "y");

        let mut b = FieldErrors::new();
        b.add("a", "y");
        b.add("b", "x");

        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
