//! Values of the order form at the moment it is submitted.

use serde::{Deserialize, Serialize};

/// Name the email input is flagged under when it is mandatory and empty.
pub const EMAIL_FIELD: &str = "email";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Checkbox,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    pub checked: bool,
}

impl FormField {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Text,
            required: false,
            value: value.into(),
            checked: false,
        }
    }

    /// A checkbox carries the browser's default value `on` whether or not it is checked.
    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Checkbox,
            required: false,
            value: "on".to_string(),
            checked,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Whether a mandatory field counts as filled in.
    pub fn is_filled(&self) -> bool {
        !self.value.is_empty() && (self.kind != FieldKind::Checkbox || self.checked)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub email: String,
    pub email_required: bool,
    pub fields: Vec<FormField>,
}

impl FormSnapshot {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            email_required: true,
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    /// Names of mandatory fields left empty or unchecked, in form order.
    pub fn missing_required(&self) -> Vec<String> {
        let email = (self.email_required && self.email.is_empty()).then(|| EMAIL_FIELD.to_string());
        email
            .into_iter()
            .chain(
                self.fields
                    .iter()
                    .filter(|f| f.required && !f.is_filled())
                    .map(|f| f.name.clone()),
            )
            .collect()
    }
}
