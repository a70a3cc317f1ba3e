//! The lead-capture form on the contact section.

use std::rc::Rc;

use serde::Serialize;
use thiserror::Error;
use yew::Reducible;

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

const MAX_DOMAIN_LABEL_LEN: usize = 63;

/// Raw field values as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
}

/// Edits are per field so that two inputs firing before a re-render
/// cannot overwrite each other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormAction {
    Edit(ContactField, String),
    Clear,
}

/// A validated form, ready to hand to a submission sink.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("`{0}` is not a valid email address.")]
    InvalidEmail(String),
}

impl ContactForm {
    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Edit(ContactField::Name, value) => self.name = value,
            FormAction::Edit(ContactField::Email, value) => self.email = value,
            FormAction::Edit(ContactField::Phone, value) => self.phone = value,
            FormAction::Clear => *self = Self::default(),
        }
    }

    pub fn validate(&self) -> Result<ContactSubmission, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::MissingEmail);
        }
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail(email.to_string()));
        }

        let phone = self.phone.trim();
        Ok(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
        })
    }

    /// Validates and, on success, clears every field.
    /// A rejected form is left exactly as it was.
    pub fn accept(&mut self) -> Result<ContactSubmission, FormError> {
        let submission = self.validate()?;
        *self = Self::default();
        Ok(submission)
    }
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// The same shape an `<input type="email">` accepts: a local part of
/// atext characters and dots, then one or more dot-separated domain labels
/// of letters, digits and inner hyphens.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && local.chars().all(is_local_char)
        && !domain.is_empty()
        && domain.split('.').all(is_domain_label)
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_DOMAIN_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
