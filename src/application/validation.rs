//! Contact and newsletter form validation

use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub const CONTACT_THANKS: &str =
    "Thank you for your feedback! We have received your message and will get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.as_str(), self.message)
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email.trim())
}

/// Contact form submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Parse `name | email | message`; missing parts are left empty
    pub fn parse(input: &str) -> Self {
        let mut parts = input.splitn(3, '|').map(str::trim);
        Self::new(
            parts.next().unwrap_or_default(),
            parts.next().unwrap_or_default(),
            parts.next().unwrap_or_default(),
        )
    }

    /// Check every field, collecting all failures in field order
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new(Field::Name, "Name is required."));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::new(Field::Email, "Email is required."));
        } else if !is_valid_email(email) {
            errors.push(FieldError::new(Field::Email, "Please enter a valid email address."));
        }

        if self.message.trim().is_empty() {
            errors.push(FieldError::new(Field::Message, "Message is required."));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Newsletter signup only requires a non-empty address
pub fn subscribe(email: &str) -> Result<String, FieldError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FieldError::new(Field::Email, "Email is required."));
    }
    Ok(format!("Thanks for subscribing! Updates will be sent to {}", email))
}
