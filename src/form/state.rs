use crate::form::validation::{self, Field, FieldErrors, PhoneRule};
use crate::handlers::contact_dtos::ContactRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Contact form state: field values, pending validation errors and the
/// `idle -> submitting -> success | error` status. The driver sets fields as
/// the visitor types, calls `submit` on the form event, reports the request
/// outcome with `complete`, and moves out of the terminal states with
/// `retry` (error, explicit button) or `reset` (success, after the
/// confirmation has been shown for a fixed delay).
#[derive(Debug)]
pub struct ContactForm {
    pub fields: FormFields,
    pub errors: FieldErrors,
    pub status: FormStatus,
    phone_rule: PhoneRule,
}

impl ContactForm {
    pub fn new(phone_rule: PhoneRule) -> Self {
        Self {
            fields: FormFields::default(),
            errors: FieldErrors::new(),
            status: FormStatus::Idle,
            phone_rule,
        }
    }

    /// Updates one field and clears its pending error, mirroring the form
    /// clearing an error as soon as the visitor edits that input.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::FullName => self.fields.full_name = value,
            Field::Email => self.fields.email = value,
            Field::Phone => self.fields.phone = value,
            Field::Message => self.fields.message = value,
        }
        self.errors.remove(&field);
    }

    /// Runs validation and, on a clean pass, moves to `Submitting` and
    /// returns the payload to post. Validation errors keep the form idle
    /// with `errors` populated. Ignored unless the form is idle (the submit
    /// button is disabled while a request is in flight).
    pub fn submit(&mut self) -> Option<ContactRequest> {
        if self.status != FormStatus::Idle {
            return None;
        }

        self.errors = validation::validate_fields(
            &self.fields.full_name,
            &self.fields.email,
            &self.fields.phone,
            self.phone_rule,
        );
        if !self.errors.is_empty() {
            return None;
        }

        self.status = FormStatus::Submitting;
        Some(ContactRequest {
            full_name: self.fields.full_name.clone(),
            email: self.fields.email.clone(),
            phone: self.fields.phone.clone(),
            message: self.fields.message.clone(),
            // The contact form has no bedroom selector; the application form
            // fills this in before posting.
            beds_needed: String::new(),
        })
    }

    /// Records the request outcome. Success clears the fields; failure keeps
    /// them so the visitor can retry without retyping.
    pub fn complete(&mut self, success: bool) {
        if self.status != FormStatus::Submitting {
            return;
        }
        if success {
            self.fields = FormFields::default();
            self.status = FormStatus::Success;
        } else {
            self.status = FormStatus::Error;
        }
    }

    /// "Try Again" from the error screen: back to an editable form. This is
    /// a fresh attempt by the visitor, never an automatic retry.
    pub fn retry(&mut self) {
        if self.status == FormStatus::Error {
            self.status = FormStatus::Idle;
        }
    }

    /// Dismisses the success confirmation; the caller drives the display
    /// delay before calling this.
    pub fn reset(&mut self) {
        if self.status == FormStatus::Success {
            self.status = FormStatus::Idle;
        }
    }
}
