//! Client-visible form state.

use std::collections::{BTreeMap, HashMap};

use formwork_schema::{Schema, Submission};

/// Current state of a single field: its value and its error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    /// Current value, or `None` when unset.
    pub value: Option<String>,
    /// Messages from the most recent validation or server round-trip.
    pub errors: Vec<String>,
}

/// Maintains form and field state across renders and submissions.
///
/// The controller owns an explicit mapping from field name to
/// [`FieldState`]. All mutation happens in response to discrete events on
/// one logical thread; the controller is owned by a single page view and is
/// never shared.
///
/// Updates can be queued and applied in a batch, but the imperative path
/// used by non-native controls ([`set_field_value`]) flushes synchronously:
/// the state visible to whatever renders next is never stale.
///
/// [`set_field_value`]: FormController::set_field_value
#[derive(Debug)]
pub struct FormController {
    schema: Schema,
    fields: BTreeMap<String, FieldState>,
    pending: Vec<(String, Option<String>)>,
}

impl FormController {
    /// Creates a controller with one state slot per schema field.
    pub fn new(schema: Schema) -> Self {
        let fields = schema
            .field_names()
            .map(|name| (name.to_string(), FieldState::default()))
            .collect();
        Self {
            schema,
            fields,
            pending: Vec::new(),
        }
    }

    /// Returns the state of a field.
    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.get(name)
    }

    /// Returns the current value of a field.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|f| f.value.as_deref())
    }

    /// Returns the current error messages of a field.
    pub fn errors(&self, name: &str) -> &[String] {
        self.fields.get(name).map_or(&[], |f| f.errors.as_slice())
    }

    /// Returns the current values as decoded form data.
    pub fn form_data(&self) -> HashMap<String, String> {
        self.fields
            .iter()
            .filter_map(|(name, state)| {
                state.value.as_ref().map(|v| (name.clone(), v.clone()))
            })
            .collect()
    }

    /// Validates form data against the schema for immediate feedback.
    ///
    /// Field values and errors are updated to match the outcome, and the
    /// submission is returned. This is advisory only; it never blocks a
    /// submit.
    pub fn validate(&mut self, data: &HashMap<String, String>) -> Submission {
        let submission = self.schema.parse(data);
        for (name, state) in &mut self.fields {
            state.value = data.get(name).filter(|v| !v.is_empty()).cloned();
            state.errors = submission
                .field_errors()
                .and_then(|e| e.get(name))
                .map(<[String]>::to_vec)
                .unwrap_or_default();
        }
        submission
    }

    /// Replaces field values and errors with a server-supplied result.
    ///
    /// After a submission round-trip the server's outcome is authoritative;
    /// adopting it wholesale keeps client and server state from diverging.
    /// Queued updates predate the round-trip and are discarded.
    pub fn sync_last_result(&mut self, result: &Submission) {
        self.pending.clear();
        match result {
            Submission::Success { value } => {
                for (name, state) in &mut self.fields {
                    state.value = value.get(name).cloned();
                    state.errors.clear();
                }
            }
            Submission::Error {
                field_errors,
                initial_value,
            } => {
                for (name, state) in &mut self.fields {
                    state.value = initial_value.get(name).filter(|v| !v.is_empty()).cloned();
                    state.errors = field_errors
                        .get(name)
                        .map(<[String]>::to_vec)
                        .unwrap_or_default();
                }
            }
        }
    }

    /// Queues a field update without applying it.
    pub fn queue_update(&mut self, name: impl Into<String>, value: Option<String>) {
        self.pending.push((name.into(), value));
    }

    /// Applies all queued updates in order.
    pub fn flush(&mut self) {
        for (name, value) in self.pending.drain(..) {
            self.fields.entry(name).or_default().value = value;
        }
    }

    /// Sets a field value and flushes synchronously.
    ///
    /// This is the imperative path for controls without native form input
    /// semantics: the update must be visible to the render that immediately
    /// follows, not deferred to a later batch.
    pub fn set_field_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.queue_update(name, Some(value.into()));
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwork_schema::FieldSpec;

    fn controller() -> FormController {
        FormController::new(Schema::new().field(FieldSpec::string("option")))
    }

    fn data(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_validate_records_errors() {
        let mut ctl = controller();
        let submission = ctl.validate(&HashMap::new());

        assert!(!submission.is_success());
        assert!(!ctl.errors("option").is_empty());
        assert_eq!(ctl.value("option"), None);
    }

    #[test]
    fn test_validate_clears_stale_errors() {
        let mut ctl = controller();
        ctl.validate(&HashMap::new());
        ctl.validate(&data(&[("option", "Option 1")]));

        assert!(ctl.errors("option").is_empty());
        assert_eq!(ctl.value("option"), Some("Option 1"));
    }

    #[test]
    fn test_sync_error_result() {
        let mut ctl = controller();
        let schema = Schema::new().field(FieldSpec::string("option"));
        let result = schema.parse(&HashMap::new());

        ctl.sync_last_result(&result);
        assert!(!ctl.errors("option").is_empty());
    }

    #[test]
    fn test_sync_success_result() {
        let mut ctl = controller();
        ctl.validate(&HashMap::new());

        let schema = Schema::new().field(FieldSpec::string("option"));
        let result = schema.parse(&data(&[("option", "Option 3")]));
        ctl.sync_last_result(&result);

        assert_eq!(ctl.value("option"), Some("Option 3"));
        assert!(ctl.errors("option").is_empty());
    }

    #[test]
    fn test_queued_updates_wait_for_flush() {
        let mut ctl = controller();
        ctl.queue_update("option", Some("Option 2".to_string()));
        assert_eq!(ctl.value("option"), None);

        ctl.flush();
        assert_eq!(ctl.value("option"), Some("Option 2"));
    }

    #[test]
    fn test_set_field_value_is_immediately_visible() {
        let mut ctl = controller();
        ctl.set_field_value("option", "Option 1");
        // No explicit flush: the imperative path must not leave a stale
        // frame for the next render.
        assert_eq!(ctl.value("option"), Some("Option 1"));
    }

    #[test]
    fn test_sync_discards_queued_updates() {
        let mut ctl = controller();
        ctl.queue_update("option", Some("stale".to_string()));

        let schema = Schema::new().field(FieldSpec::string("option"));
        ctl.sync_last_result(&schema.parse(&data(&[("option", "Option 2")])));
        ctl.flush();

        assert_eq!(ctl.value("option"), Some("Option 2"));
    }

    #[test]
    fn test_form_data_round_trip() {
        let mut ctl = controller();
        ctl.set_field_value("option", "Option 2");
        assert_eq!(
            ctl.form_data().get("option").map(String::as_str),
            Some("Option 2")
        );
    }
}
