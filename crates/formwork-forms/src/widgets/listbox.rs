//! Listbox widget.

use super::{html_escape, HiddenInput, Widget, WidgetAttrs};
use crate::catalog::OptionCatalog;

/// A listbox widget: trigger button, options list, and a hidden input.
///
/// The control itself has no form semantics; the hidden input is what the
/// browser actually submits. The `data-listbox-*` hooks are what client
/// code wires the open/close and select behavior to.
#[derive(Debug, Clone)]
pub struct ListboxWidget {
    /// The options to offer.
    pub catalog: OptionCatalog,
    /// Label shown while nothing is selected.
    pub placeholder: String,
}

impl ListboxWidget {
    /// Creates a listbox over the given catalog.
    pub fn new(catalog: OptionCatalog) -> Self {
        Self {
            catalog,
            placeholder: "Select an option".to_string(),
        }
    }

    /// Sets the placeholder label.
    #[must_use]
    pub fn placeholder(mut self, label: impl Into<String>) -> Self {
        self.placeholder = label.into();
        self
    }
}

impl Widget for ListboxWidget {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let id = attrs
            .get("id")
            .cloned()
            .unwrap_or_else(|| format!("id_{name}"));

        let mut class = "fw-listbox".to_string();
        if let Some(extra_class) = attrs.get("class") {
            class = format!("{class} {extra_class}");
        }

        let hidden = HiddenInput.render(
            name,
            value,
            &WidgetAttrs::new().with("data-listbox-value", ""),
        );

        let label = value.map_or_else(|| self.placeholder.clone(), html_escape);

        let mut options = String::new();
        for option in self.catalog.iter() {
            let selected_attr = if value == Some(option) {
                r#" data-selected aria-selected="true""#
            } else {
                r#" aria-selected="false""#
            };
            options.push_str(&format!(
                r#"<li class="cursor-pointer rounded p-1 hover:bg-blue-100" role="option" data-listbox-option data-value="{0}"{selected_attr}>{0}</li>"#,
                html_escape(option)
            ));
        }

        format!(
            r#"<div class="{class}" id="{id}" data-listbox>
{hidden}
<button type="button" class="border rounded p-2 w-48 text-left bg-white shadow-sm" data-listbox-button aria-haspopup="listbox">{label}</button>
<ul class="border rounded p-2 w-48 bg-white shadow-md" role="listbox" data-listbox-options hidden>{options}</ul>
</div>"#
        )
    }

    fn input_type(&self) -> &str {
        "listbox"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> ListboxWidget {
        ListboxWidget::new(OptionCatalog::new(["Option 1", "Option 2", "Option 3"]))
    }

    #[test]
    fn test_render_unset() {
        let html = widget().render("option", None, &WidgetAttrs::new());
        assert!(html.contains(r#"<input type="hidden" name="option""#));
        assert!(!html.contains("data-selected"));
        assert!(html.contains("Select an option"));
        assert!(html.contains(r#"data-value="Option 1""#));
        assert!(html.contains(r#"data-value="Option 3""#));
    }

    #[test]
    fn test_render_with_selection() {
        let html = widget().render("option", Some("Option 2"), &WidgetAttrs::new());
        assert!(html.contains(r#"value="Option 2""#));
        assert!(html.contains(r#"data-value="Option 2" data-selected"#));
        assert!(!html.contains("Select an option"));
    }

    #[test]
    fn test_render_escapes_values() {
        let catalog = OptionCatalog::new([r#"<b>"bold"</b>"#]);
        let html = ListboxWidget::new(catalog).render("option", None, &WidgetAttrs::new());
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_hidden_input_carries_value_and_hook() {
        // The hidden input is the HiddenInput widget with the listbox's
        // value hook attached.
        let html = widget().render("option", Some("Option 1"), &WidgetAttrs::new());
        let expected = HiddenInput.render(
            "option",
            Some("Option 1"),
            &WidgetAttrs::new().with("data-listbox-value", ""),
        );
        assert!(html.contains(&expected));
    }

    #[test]
    fn test_custom_placeholder() {
        let html = widget()
            .placeholder("Pick one")
            .render("option", None, &WidgetAttrs::new());
        assert!(html.contains("Pick one"));
    }
}
