//! Form widgets for rendering HTML controls.

mod listbox;

pub use listbox::ListboxWidget;

use std::collections::HashMap;

/// Attributes that can be applied to a widget.
#[derive(Debug, Clone, Default)]
pub struct WidgetAttrs {
    /// HTML attributes.
    pub attrs: HashMap<String, String>,
}

impl WidgetAttrs {
    /// Creates new empty widget attributes.
    pub fn new() -> Self {
        Self {
            attrs: HashMap::new(),
        }
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Renders attributes as an HTML attribute string.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .map(|(k, v)| format!(r#"{k}="{v}""#))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Trait for form widgets that render HTML controls.
pub trait Widget: Send + Sync {
    /// Renders the widget as HTML.
    ///
    /// # Arguments
    /// * `name` - The field name (used for the name attribute)
    /// * `value` - The current value (if any)
    /// * `attrs` - Additional HTML attributes
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String;

    /// Returns the HTML input type.
    fn input_type(&self) -> &str {
        "text"
    }
}

/// A hidden input widget.
///
/// Controls without native form semantics carry their value through one of
/// these; the browser submits it like any other field.
#[derive(Debug, Clone, Default)]
pub struct HiddenInput;

impl Widget for HiddenInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let value_attr = value
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();
        let extra_attrs = if attrs.attrs.is_empty() {
            String::new()
        } else {
            format!(" {}", attrs.to_html())
        };
        format!(r#"<input type="hidden" name="{name}"{value_attr}{extra_attrs}>"#)
    }

    fn input_type(&self) -> &str {
        "hidden"
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_input() {
        let widget = HiddenInput;
        let html = widget.render("option", Some("Option 2"), &WidgetAttrs::new());
        assert!(html.contains(r#"type="hidden""#));
        assert!(html.contains(r#"name="option""#));
        assert!(html.contains(r#"value="Option 2""#));
    }

    #[test]
    fn test_hidden_input_unset() {
        let widget = HiddenInput;
        let html = widget.render("option", None, &WidgetAttrs::new());
        assert!(!html.contains("value="));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("\"test\""), "&quot;test&quot;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
    }

    #[test]
    fn test_widget_attrs() {
        let attrs = WidgetAttrs::new()
            .with("class", "fw-hidden")
            .with("id", "my-input");
        let html = attrs.to_html();
        assert!(html.contains(r#"class="fw-hidden""#));
        assert!(html.contains(r#"id="my-input""#));
    }
}
