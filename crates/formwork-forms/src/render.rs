//! Field rendering helpers.

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::Div;

use crate::controller::FieldState;
use crate::widgets::{html_escape, Widget, WidgetAttrs};

/// Renders a widget for a field together with its error messages.
///
/// The widget receives the field's current value; every error message is
/// rendered below it.
pub fn render_field(name: &str, widget: &dyn Widget, state: Option<&FieldState>) -> String {
    let value = state.and_then(|s| s.value.as_deref());
    let errors: &[String] = state.map_or(&[], |s| s.errors.as_slice());
    let widget_html = widget.render(name, value, &WidgetAttrs::new());

    html! { div.class("fw-field") }
        .raw(&widget_html)
        .children(errors, |error, div: Element<Div>| {
            div.class("text-red-500").text(error)
        })
        .render()
}

/// Renders a debug readout of a field value as a JSON-encoded string.
pub fn render_value_readout(label: &str, value: Option<&str>) -> String {
    let encoded = serde_json::to_string(&value).unwrap_or_else(|_| "null".to_string());
    format!(
        r#"<p>{}: <code class="bg-gray-300">{}</code></p>"#,
        html_escape(label),
        html_escape(&encoded)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::OptionCatalog;
    use crate::widgets::ListboxWidget;

    fn widget() -> ListboxWidget {
        ListboxWidget::new(OptionCatalog::new(["Option 1", "Option 2", "Option 3"]))
    }

    #[test]
    fn test_render_field_no_errors() {
        let state = FieldState {
            value: Some("Option 2".to_string()),
            errors: Vec::new(),
        };
        let html = render_field("option", &widget(), Some(&state));
        assert!(html.contains(r#"value="Option 2""#));
        assert!(!html.contains("text-red-500"));
    }

    #[test]
    fn test_render_field_with_errors() {
        let state = FieldState {
            value: None,
            errors: vec!["This field is required.".to_string()],
        };
        let html = render_field("option", &widget(), Some(&state));
        assert!(html.contains("text-red-500"));
        assert!(html.contains("This field is required."));
    }

    #[test]
    fn test_value_readout() {
        let html = render_value_readout("Option value", Some("Option 2"));
        assert!(html.contains("Option value"));
        // JSON-encoded, so the quotes are part of the rendered text.
        assert!(html.contains("&quot;Option 2&quot;"));

        let unset = render_value_readout("Option value", None);
        assert!(unset.contains("null"));
    }
}
