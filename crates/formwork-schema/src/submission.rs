//! Submission outcomes.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::FieldErrors;

/// Outcome of parsing submitted form data against a schema.
///
/// Serializes as a tagged object: `{"status":"success","value":{...}}` or
/// `{"status":"error","fieldErrors":{...},"initialValue":{...}}`. All maps
/// are ordered, so serializing the outcome of the same input twice yields
/// byte-identical JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Submission {
    /// The data conformed to the schema.
    Success {
        /// Validated field values.
        value: BTreeMap<String, String>,
    },
    /// The data did not conform to the schema.
    Error {
        /// Messages keyed by field name.
        #[serde(rename = "fieldErrors")]
        field_errors: FieldErrors,
        /// The raw input, echoed back so the form can be re-populated.
        #[serde(rename = "initialValue")]
        initial_value: BTreeMap<String, String>,
    },
}

impl Submission {
    /// Returns whether the submission succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the validated value, if the submission succeeded.
    pub fn value(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Success { value } => Some(value),
            Self::Error { .. } => None,
        }
    }

    /// Returns the field errors, if the submission failed.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Success { .. } => None,
            Self::Error { field_errors, .. } => Some(field_errors),
        }
    }

    /// Builds the wire reply for a failed submission.
    ///
    /// Successful submissions carry no reply payload.
    pub fn reply(&self) -> Option<SubmissionReply> {
        match self {
            Self::Success { .. } => None,
            Self::Error {
                field_errors,
                initial_value,
            } => Some(SubmissionReply {
                status: "error",
                field_errors: field_errors.clone(),
                initial_value: initial_value.clone(),
            }),
        }
    }
}

/// Wire form of a failed submission: the structured error payload plus the
/// echoed raw input as metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReply {
    /// Always `"error"`.
    pub status: &'static str,
    /// Messages keyed by field name.
    #[serde(rename = "fieldErrors")]
    pub field_errors: FieldErrors,
    /// The raw input that failed validation.
    #[serde(rename = "initialValue")]
    pub initial_value: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_shape() {
        let submission = Submission::Success {
            value: [("option".to_string(), "Option 2".to_string())]
                .into_iter()
                .collect(),
        };

        let json = serde_json::to_string(&submission).unwrap();
        assert_eq!(json, r#"{"status":"success","value":{"option":"Option 2"}}"#);
        assert!(submission.is_success());
        assert!(submission.reply().is_none());
    }

    #[test]
    fn test_error_shape() {
        let mut field_errors = FieldErrors::new();
        field_errors.add("option", "This field is required.");
        let submission = Submission::Error {
            field_errors,
            initial_value: BTreeMap::new(),
        };

        let json = serde_json::to_string(&submission).unwrap();
        assert_eq!(
            json,
            r#"{"status":"error","fieldErrors":{"option":["This field is required."]},"initialValue":{}}"#
        );

        let reply = submission.reply().unwrap();
        assert_eq!(reply.status, "error");
        assert!(reply.field_errors.get("option").is_some());
    }
}
