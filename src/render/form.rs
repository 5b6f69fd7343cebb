//! Form input handed over with a submit event, and modal form markup.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::html::escape;
use super::{Intent, Modal, View};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A required field was absent or blank.
    Missing(&'static str),
    /// A field's value could not be parsed.
    Invalid { field: &'static str, value: String },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Missing(field) => write!(f, "missing required field: {}", field),
            FormError::Invalid { field, value } => {
                write!(f, "invalid value for {}: {}", field, value)
            }
        }
    }
}

impl std::error::Error for FormError {}

/// Field values keyed by input element id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: BTreeMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, value: &str) -> Self {
        self.fields.insert(field.to_string(), value.to_string());
        self
    }

    /// A required, non-blank value, trimmed.
    pub fn required(&self, field: &'static str) -> Result<&str, FormError> {
        self.optional(field).ok_or(FormError::Missing(field))
    }

    /// A non-blank value, trimmed, if present.
    pub fn optional(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// A required value parsed with `FromStr`.
    pub fn parse<T: FromStr>(&self, field: &'static str) -> Result<T, FormError> {
        let raw = self.required(field)?;
        raw.parse().map_err(|_| FormError::Invalid {
            field,
            value: raw.to_string(),
        })
    }
}

/// One input inside a modal form.
pub(crate) enum Field<'a> {
    Text {
        id: &'a str,
        label: &'a str,
        placeholder: Option<&'a str>,
        required: bool,
    },
    Date {
        id: &'a str,
        label: &'a str,
    },
    Select {
        id: &'a str,
        label: &'a str,
        options: &'a [&'a str],
    },
    TextArea {
        id: &'a str,
        label: &'a str,
        rows: u8,
        placeholder: Option<&'a str>,
    },
}

impl Field<'_> {
    fn markup(&self) -> String {
        match self {
            Field::Text {
                id,
                label,
                placeholder,
                required,
            } => format!(
                "<div class=\"form-group\"><label class=\"form-label\">{}</label><input type=\"text\" id=\"{}\" class=\"form-control\"{}{}></div>",
                escape(label),
                id,
                placeholder_attr(*placeholder),
                if *required { " required" } else { "" }
            ),
            Field::Date { id, label } => format!(
                "<div class=\"form-group\"><label class=\"form-label\">{}</label><input type=\"date\" id=\"{}\" class=\"form-control\" required></div>",
                escape(label),
                id
            ),
            Field::Select { id, label, options } => {
                let options: String = options
                    .iter()
                    .map(|o| format!("<option>{}</option>", escape(o)))
                    .collect();
                format!(
                    "<div class=\"form-group\"><label class=\"form-label\">{}</label><select id=\"{}\" class=\"form-control\">{}</select></div>",
                    escape(label),
                    id,
                    options
                )
            }
            Field::TextArea {
                id,
                label,
                rows,
                placeholder,
            } => format!(
                "<div class=\"form-group\"><label class=\"form-label\">{}</label><textarea id=\"{}\" class=\"form-control\" rows=\"{}\"{} required></textarea></div>",
                escape(label),
                id,
                rows,
                placeholder_attr(*placeholder)
            ),
        }
    }
}

fn placeholder_attr(placeholder: Option<&str>) -> String {
    placeholder
        .map(|p| format!(" placeholder=\"{}\"", escape(p)))
        .unwrap_or_default()
}

/// A modal dialog wrapping a form, with Cancel and submit buttons.
///
/// Binds the cancel button to `CloseModal` and the form's submit to
/// `submit`.
pub(crate) fn modal_form(
    modal: Modal,
    open: bool,
    title: &str,
    form_id: &str,
    fields: &[Field<'_>],
    submit_label: &str,
    submit: Intent,
) -> View {
    let cancel_id = format!("{}Cancel", modal.element_id());
    let fields: String = fields.iter().map(Field::markup).collect();

    let mut view = View::from_markup(format!(
        "<div id=\"{}\" class=\"modal\" style=\"display:{}\"><div class=\"card\"><h3>{}</h3><form id=\"{}\">{}<div class=\"form-actions\"><button type=\"button\" id=\"{}\" class=\"btn btn-secondary\">Cancel</button><button type=\"submit\" class=\"btn btn-primary\">{}</button></div></form></div></div>",
        modal.element_id(),
        if open { "flex" } else { "none" },
        escape(title),
        form_id,
        fields,
        cancel_id,
        escape(submit_label)
    ));
    view.on_click(cancel_id, Intent::CloseModal);
    view.on_submit(form_id, submit);
    view
}
