//! Page rendering for the listbox demo.

use formwork_forms::widgets::ListboxWidget;
use formwork_forms::{render_field, render_value_readout, FormController, ListboxControl};
use ironhtml::typed::Document;
use ironhtml_elements::{Body, Button, Div, Form, Head, Html, Meta, Script, Title, H1};

/// Client-side wiring for the listbox hooks: the button toggles the menu,
/// clicking an option writes it into the hidden input and closes the menu.
const LISTBOX_SCRIPT: &str = r"
document.querySelectorAll('[data-listbox]').forEach((root) => {
    const input = root.querySelector('[data-listbox-value]');
    const button = root.querySelector('[data-listbox-button]');
    const menu = root.querySelector('[data-listbox-options]');
    button.addEventListener('click', () => {
        menu.hidden = !menu.hidden;
    });
    root.querySelectorAll('[data-listbox-option]').forEach((item) => {
        item.addEventListener('click', () => {
            input.value = item.dataset.value;
            button.textContent = item.dataset.value;
            menu.hidden = true;
        });
    });
});
";

/// Renders the full demo page from the controller's current state.
///
/// The page carries the listbox with its error messages, a submit button, a
/// randomize button posting to its own endpoint, and a debug readout of the
/// current selection as a JSON-encoded string.
pub fn render_page(controller: &FormController, listbox: &ListboxControl) -> String {
    let widget = ListboxWidget::new(listbox.catalog().clone());
    let field_html = render_field(listbox.field(), &widget, controller.field(listbox.field()));
    let readout = render_value_readout("Option value", listbox.value(controller));

    Document::new()
        .doctype()
        .root::<Html, _>(|html| {
            html.attr("lang", "en")
                .child::<Head, _>(|head| {
                    head.child::<Meta, _>(|m| m.attr("charset", "UTF-8"))
                        .child::<Meta, _>(|m| {
                            m.attr("name", "viewport")
                                .attr("content", "width=device-width, initial-scale=1.0")
                        })
                        .child::<Meta, _>(|m| {
                            m.attr("name", "description")
                                .attr("content", "Formwork with a headless listbox")
                        })
                        .child::<Title, _>(|t| t.text("Formwork Listbox Example"))
                        .child::<Script, _>(|s| s.attr("src", "https://cdn.tailwindcss.com"))
                })
                .child::<Body, _>(|body| {
                    body.child::<Div, _>(|d| {
                        d.class("flex h-screen items-center justify-center")
                            .child::<Div, _>(|d| {
                                d.class("flex flex-col items-center gap-16")
                                    .child::<H1, _>(|h| {
                                        h.class("leading text-2xl font-bold text-gray-800")
                                            .text("Formwork Listbox Example")
                                    })
                                    .child::<Form, _>(|f| {
                                        f.attr("method", "POST")
                                            .attr("action", "/")
                                            .class("flex flex-col gap-4")
                                            .child::<Div, _>(|d| d.raw(&field_html))
                                            .child::<Button, _>(|b| {
                                                b.attr("type", "submit")
                                                    .class("bg-blue-500 text-white rounded p-2")
                                                    .text("Submit")
                                            })
                                            .child::<Button, _>(|b| {
                                                b.attr("type", "submit")
                                                    .attr("formaction", "/randomize")
                                                    .class("bg-gray-500 text-white rounded p-2")
                                                    .text("Update Random Option")
                                            })
                                            .child::<Div, _>(|d| d.raw(&readout))
                                    })
                            })
                    })
                    .child::<Script, _>(|s| s.raw(LISTBOX_SCRIPT))
                })
        })
        .build()
}
