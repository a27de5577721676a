//! Contact form state: field values, validation and submission lifecycle.
//!
//! DESIGN
//! ======
//! The page component owns one `RwSignal<ContactFormState>` and drives it
//! through `begin_submit` / `finish_submit` around the single network call.
//! Keeping the transitions here makes the success and failure paths testable
//! without a browser.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::collections::BTreeMap;

use crate::net::types::{ContactSubmission, SubmitError};

pub const SUBMIT_FAILED_MESSAGE: &str =
    "Sorry, your message could not be sent right now. Please try again later.";

/// How long the success notice stays up.
pub const SUCCESS_NOTICE_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 5] = [Self::Name, Self::Email, Self::Phone, Self::Subject, Self::Message];

    /// DOM id / name attribute.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            subject: self.subject.trim().to_owned(),
            message: self.message.trim().to_owned(),
        }
    }
}

/// Per-field inline validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ContactField, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, field: ContactField, message: &'static str) {
        self.0.insert(field, message);
    }

    fn clear(&mut self, field: ContactField) {
        self.0.remove(&field);
    }
}

/// Validate required fields and the email shape. Phone is optional.
pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if fields.name.trim().is_empty() {
        errors.insert(ContactField::Name, "Name is required");
    }
    if fields.email.trim().is_empty() {
        errors.insert(ContactField::Email, "Email is required");
    } else if !is_valid_email(&fields.email) {
        errors.insert(ContactField::Email, "Email is invalid");
    }
    if fields.subject.trim().is_empty() {
        errors.insert(ContactField::Subject, "Subject is required");
    }
    if fields.message.trim().is_empty() {
        errors.insert(ContactField::Message, "Message is required");
    }
    errors
}

/// Loose `local@domain.tld` check: some whitespace-free run must contain an
/// `@` with text before it, and a `.` after it with text on both sides.
pub fn is_valid_email(value: &str) -> bool {
    value.split_whitespace().any(|token| {
        token.char_indices().any(|(at, c)| {
            if c != '@' || at == 0 {
                return false;
            }
            let domain = &token[at + 1..];
            domain
                .char_indices()
                .any(|(dot, c)| c == '.' && dot > 0 && dot + 1 < domain.len())
        })
    })
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub fields: ContactFields,
    pub errors: FieldErrors,
    pub submitting: bool,
    pub submitted: bool,
    pub banner: Option<&'static str>,
}

impl ContactFormState {
    /// Update a field and clear its pending error.
    pub fn set_field(&mut self, field: ContactField, value: String) {
        self.fields.set(field, value);
        self.errors.clear(field);
    }

    /// Validate and enter the in-flight state.
    ///
    /// Returns the payload to send, or `None` when a submission is already
    /// in flight or validation failed (errors are populated in that case).
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.submitting {
            return None;
        }
        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            return None;
        }
        self.submitting = true;
        self.submitted = false;
        self.banner = None;
        Some(self.fields.to_submission())
    }

    /// Apply the network outcome. Failures keep every entered value.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                self.submitted = true;
                self.fields = ContactFields::default();
            }
            Err(_) => {
                self.banner = Some(SUBMIT_FAILED_MESSAGE);
            }
        }
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    pub fn clear_success(&mut self) {
        self.submitted = false;
    }
}
