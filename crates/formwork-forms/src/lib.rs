//! # formwork-forms
//!
//! Form state management with a listbox-to-field adapter and HTML widgets.
//!
//! This crate provides:
//! - A form controller tracking per-field values and error messages
//! - Synchronization with server-side submission results
//! - An adapter bridging a listbox control into the form state protocol
//! - An immutable option catalog with uniform random selection
//! - HTML widget rendering
//!
//! ## Quick Start
//!
//! ```rust
//! use formwork_forms::{FormController, ListboxControl, OptionCatalog};
//! use formwork_schema::{FieldSpec, Schema};
//!
//! let schema = Schema::new().field(FieldSpec::string("option"));
//! let mut controller = FormController::new(schema);
//!
//! let catalog = OptionCatalog::new(["Option 1", "Option 2", "Option 3"]);
//! let listbox = ListboxControl::new("option", catalog);
//!
//! // Selections reach the form through the controller's imperative path
//! // and are visible immediately.
//! listbox.change(&mut controller, "Option 2");
//! assert_eq!(listbox.value(&controller), Some("Option 2"));
//!
//! // The randomize action always lands on a catalog member.
//! let pick = listbox.randomize(&mut controller).unwrap();
//! assert!(listbox.catalog().contains(&pick));
//! ```

mod catalog;
mod controller;
mod listbox;
mod render;
pub mod widgets;

pub use catalog::OptionCatalog;
pub use controller::{FieldState, FormController};
pub use listbox::ListboxControl;
pub use render::{render_field, render_value_readout};
