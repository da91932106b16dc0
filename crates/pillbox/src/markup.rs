//! HTML templates for the rendered views.
//!
//! Class names and `data-*` attributes are the contract with the page's
//! stylesheet and event wiring; labels are always escaped.

use std::fmt::Write;

use crate::dropdown::{Dropdown, InputArea};
use crate::hidden::HiddenField;
use crate::render::{ListView, Pill, Row};

const DELETE_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 30 30" width="12px" height="12px"><path d="M7 7l16 16M23 7L7 23" stroke="currentColor" stroke-width="3"/></svg>"#;

/// Display strings used by the templates.
#[derive(Debug, Clone, Copy)]
pub struct Labels<'a> {
    /// Search input placeholder.
    pub placeholder: &'a str,
    /// No-results message.
    pub no_results: &'a str,
    /// Addable prompt.
    pub addable: &'a str,
}

/// Escapes text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders one checkbox row.
pub fn row(row: &Row) -> String {
    let value = escape(&row.item.value.as_key());
    let text = escape(&row.item.text);
    let li_class = if row.focused {
        r#" class="multiselect__focused""#
    } else {
        ""
    };
    let checked = if row.checked { " checked" } else { "" };
    let aria = if row.focused {
        r#" aria-selected="true""#
    } else {
        ""
    };
    format!(
        r#"<li{li_class}><label><input type="checkbox"{checked}{aria} data-value="{value}" data-text="{text}" tabindex="-1"><span>{text}</span></label></li>"#
    )
}

/// Renders the list area content.
pub fn list(view: &ListView, labels: Labels<'_>) -> String {
    match view {
        ListView::Rows(rows) => rows.iter().map(row).collect(),
        ListView::NoResults => format!(
            r#"<div class="multiselect__no-result">{}</div>"#,
            escape(labels.no_results)
        ),
        ListView::Addable => format!(
            r#"<div class="multiselect__no-result"><span class="multiselect__addable-button">{}</span></div>"#,
            escape(labels.addable)
        ),
    }
}

/// Renders the pill preview.
pub fn pills(pills: &[Pill]) -> String {
    let mut out = String::new();
    for pill in pills {
        let value = escape(&pill.item.value.as_key());
        let text = escape(&pill.item.text);
        let _ = write!(
            out,
            r#"<div class="multiselect__pill" data-value="{value}" title="{text}"><span class="multiselect__pill-text">{text}</span>"#
        );
        if pill.deletable {
            let _ = write!(
                out,
                r#"<span class="multiselect__pill-delete">{DELETE_ICON}</span>"#
            );
        }
        out.push_str("</div>");
    }
    out
}

/// Renders the search input container.
pub fn input(area: InputArea, term: &str, disabled: bool, labels: Labels<'_>) -> String {
    let display = if area.visible { "" } else { " style=\"display: none\"" };
    let padding = if area.padded { "0.5rem" } else { "0" };
    let disabled = if disabled { " disabled" } else { "" };
    format!(
        r#"<div class="multiselect__input-container"{display}><input type="text" class="multiselect__search" style="padding-top: {padding}" placeholder="{}" value="{}"{disabled}></div>"#,
        escape(labels.placeholder),
        escape(term),
    )
}

/// Renders the hidden native select.
pub fn native(field: &HiddenField) -> String {
    let mut out = String::from(r#"<select multiple hidden>"#);
    for option in field.options() {
        let selected = if option.selected { " selected" } else { "" };
        let _ = write!(
            out,
            r#"<option value="{}"{selected}>{}</option>"#,
            escape(&option.value.as_key()),
            escape(&option.text)
        );
    }
    out.push_str("</select>");
    out
}

/// Renders the dropdown wrapper around the list.
pub fn dropdown(state: Dropdown, list_html: &str) -> String {
    let open = if state.is_open() {
        " multiselect__dropdown--open"
    } else {
        ""
    };
    format!(
        r#"<div style="position: relative;"><div class="multiselect__dropdown{open}"><ul class="multiselect__list">{list_html}</ul></div></div>"#
    )
}
