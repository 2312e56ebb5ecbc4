//! Listbox-to-field adapter.

use rand::RngExt;

use crate::catalog::OptionCatalog;
use crate::controller::FormController;

/// Bridges a listbox control into the form controller's value/change
/// contract.
///
/// A listbox has no native form input semantics, so its selection reaches
/// the form through the controller's imperative update path. Every change
/// flushes synchronously; a menu opened right after a change already shows
/// the new selection.
#[derive(Debug, Clone)]
pub struct ListboxControl {
    field: String,
    catalog: OptionCatalog,
}

impl ListboxControl {
    /// Creates an adapter for `field` over the given catalog.
    pub fn new(field: impl Into<String>, catalog: OptionCatalog) -> Self {
        Self {
            field: field.into(),
            catalog,
        }
    }

    /// Returns the bound field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the option catalog.
    pub fn catalog(&self) -> &OptionCatalog {
        &self.catalog
    }

    /// Returns the current selection, or `None` when unset.
    pub fn value<'a>(&self, controller: &'a FormController) -> Option<&'a str> {
        controller.value(&self.field)
    }

    /// Updates the selection, flushing before the next render.
    pub fn change(&self, controller: &mut FormController, value: impl Into<String>) {
        controller.set_field_value(&self.field, value);
    }

    /// Selects a uniformly random catalog option and pushes it through
    /// [`change`](Self::change), as if the user had clicked it.
    ///
    /// Returns the selected option, or `None` if the catalog is empty.
    pub fn randomize(&self, controller: &mut FormController) -> Option<String> {
        let mut rng = rand::rng();
        self.randomize_with(controller, &mut rng)
    }

    /// Like [`randomize`](Self::randomize), with a caller-supplied RNG.
    pub fn randomize_with<R: RngExt>(
        &self,
        controller: &mut FormController,
        rng: &mut R,
    ) -> Option<String> {
        let pick = self.catalog.sample(rng)?.to_string();
        self.change(controller, pick.clone());
        Some(pick)
    }
}
