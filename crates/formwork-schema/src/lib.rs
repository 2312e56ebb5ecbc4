//! # formwork-schema
//!
//! Declarative schemas for validating form-encoded input.
//!
//! This crate provides:
//! - Field specifications with constraints
//! - Pure parsing of decoded form data into a tagged [`Submission`]
//! - Structured, serializable validation errors
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use formwork_schema::{FieldSpec, Schema};
//!
//! let schema = Schema::new().field(FieldSpec::string("option"));
//!
//! let mut data = HashMap::new();
//! data.insert("option".to_string(), "Option 2".to_string());
//!
//! let submission = schema.parse(&data);
//! assert!(submission.is_success());
//!
//! // Missing fields produce errors keyed by field name, never a panic.
//! let submission = schema.parse(&HashMap::new());
//! assert!(submission.field_errors().unwrap().get("option").is_some());
//! ```
//!
//! ## Constraints
//!
//! ```rust
//! use formwork_schema::constraint::{Constraint, OneOf};
//!
//! let allowed = OneOf::new(["Option 1", "Option 2", "Option 3"]);
//! assert!(allowed.check("Option 1").is_ok());
//! assert!(allowed.check("Option 9").is_err());
//! ```

pub mod constraint;
mod error;
mod field;
mod schema;
mod submission;

pub use error::{FieldErrors, Result, SchemaError};
pub use field::FieldSpec;
pub use schema::Schema;
pub use submission::{Submission, SubmissionReply};
