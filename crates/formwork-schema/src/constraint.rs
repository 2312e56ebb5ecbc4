//! Field constraints.

use regex::Regex;

/// Trait for field constraints.
pub trait Constraint: Send + Sync {
    /// Checks a value and returns an error message if it does not conform.
    fn check(&self, value: &str) -> Result<(), String>;

    /// Returns the error message for this constraint.
    fn message(&self) -> &str;
}

/// Constraint that requires a non-empty value.
#[derive(Debug, Clone)]
pub struct Required {
    message: String,
}

impl Required {
    /// Creates a new `Required` constraint with the default message.
    pub fn new() -> Self {
        Self {
            message: "This field is required.".to_string(),
        }
    }

    /// Creates a new `Required` constraint with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for Required {
    fn default() -> Self {
        Self::new()
    }
}

impl Constraint for Required {
    fn check(&self, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Constraint that enforces a minimum length.
#[derive(Debug, Clone)]
pub struct MinLength {
    min: usize,
    message: String,
}

impl MinLength {
    /// Creates a new `MinLength` constraint.
    pub fn new(min: usize) -> Self {
        Self {
            min,
            message: format!("Ensure this value has at least {min} characters."),
        }
    }
}

impl Constraint for MinLength {
    fn check(&self, value: &str) -> Result<(), String> {
        if value.len() < self.min {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Constraint that enforces a maximum length.
#[derive(Debug, Clone)]
pub struct MaxLength {
    max: usize,
    message: String,
}

impl MaxLength {
    /// Creates a new `MaxLength` constraint.
    pub fn new(max: usize) -> Self {
        Self {
            max,
            message: format!("Ensure this value has at most {max} characters."),
        }
    }
}

impl Constraint for MaxLength {
    fn check(&self, value: &str) -> Result<(), String> {
        if value.len() > self.max {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Constraint using a custom regex pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    pattern: Regex,
    message: String,
}

impl Pattern {
    /// Creates a new `Pattern` constraint.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }
}

impl Constraint for Pattern {
    fn check(&self, value: &str) -> Result<(), String> {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Constraint that restricts a value to a fixed set.
#[derive(Debug, Clone)]
pub struct OneOf {
    allowed: Vec<String>,
    message: String,
}

impl OneOf {
    /// Creates a new `OneOf` constraint over the given values.
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
        let message = format!("Select a valid choice. Allowed: {}.", allowed.join(", "));
        Self { allowed, message }
    }

    /// Creates a new `OneOf` constraint with a custom message.
    pub fn with_message<I, S>(allowed: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }
}

impl Constraint for OneOf {
    fn check(&self, value: &str) -> Result<(), String> {
        if self.allowed.iter().any(|a| a == value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}
