//! Field specifications.

use crate::constraint::{Constraint, MaxLength, MinLength, OneOf, Pattern};
use crate::error::{Result, SchemaError};

/// Specification of a single form field.
///
/// Form-encoded input carries every value as a string, so a field spec
/// describes a string slot: whether it must be present, and which
/// constraints its value must satisfy when it is.
pub struct FieldSpec {
    /// Field name.
    pub name: String,
    /// Whether the field must be present and non-empty.
    pub required: bool,
    /// Constraints applied to a present value.
    pub constraints: Vec<Box<dyn Constraint>>,
}

impl std::fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

impl FieldSpec {
    /// Creates a required string field.
    pub fn string(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
            constraints: Vec::new(),
        }
    }

    /// Makes the field optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Adds a constraint.
    #[must_use]
    pub fn constraint(mut self, constraint: impl Constraint + 'static) -> Self {
        self.constraints.push(Box::new(constraint));
        self
    }

    /// Requires at least `min` characters.
    #[must_use]
    pub fn min_length(self, min: usize) -> Self {
        self.constraint(MinLength::new(min))
    }

    /// Allows at most `max` characters.
    #[must_use]
    pub fn max_length(self, max: usize) -> Self {
        self.constraint(MaxLength::new(max))
    }

    /// Requires the value to match a regex pattern.
    ///
    /// Fails if the pattern does not compile.
    pub fn pattern(self, pattern: &str, message: impl Into<String>) -> Result<Self> {
        match Pattern::new(pattern, message) {
            Ok(constraint) => Ok(self.constraint(constraint)),
            Err(source) => Err(SchemaError::InvalidPattern {
                field: self.name,
                source,
            }),
        }
    }

    /// Restricts the value to a fixed set.
    #[must_use]
    pub fn one_of<I, S>(self, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraint(OneOf::new(allowed))
    }
}
