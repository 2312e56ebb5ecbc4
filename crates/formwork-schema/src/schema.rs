//! Schema definition and parsing.

use std::collections::{BTreeMap, HashMap};

use crate::error::FieldErrors;
use crate::field::FieldSpec;
use crate::submission::Submission;

/// Message attached to a required field that arrived missing or empty.
const MISSING_MESSAGE: &str = "This field is required.";

/// A declarative description of acceptable form input.
///
/// A schema is an ordered list of [`FieldSpec`]s. Parsing is a pure
/// function of the input: it either yields a validated value or a
/// structured error report, and never mutates anything.
#[derive(Debug, Default)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    /// Creates a new empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the schema.
    #[must_use]
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the field specifications.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Returns the names of all declared fields.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Parses decoded form data against the schema.
    ///
    /// Browsers submit absent controls either by omitting the key or by
    /// sending an empty string, so a required field treats both the same
    /// way. Values that are present are run through the field's
    /// constraints; unknown keys are ignored.
    pub fn parse(&self, data: &HashMap<String, String>) -> Submission {
        let mut errors = FieldErrors::new();
        let mut value = BTreeMap::new();

        for field in &self.fields {
            match data.get(&field.name).filter(|v| !v.is_empty()) {
                None => {
                    if field.required {
                        errors.add(&field.name, MISSING_MESSAGE);
                    }
                }
                Some(raw) => {
                    let mut ok = true;
                    for constraint in &field.constraints {
                        if let Err(message) = constraint.check(raw) {
                            errors.add(&field.name, message);
                            ok = false;
                        }
                    }
                    if ok {
                        value.insert(field.name.clone(), raw.clone());
                    }
                }
            }
        }

        if errors.is_empty() {
            Submission::Success { value }
        } else {
            Submission::Error {
                field_errors: errors,
                initial_value: data
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            }
        }
    }
}
