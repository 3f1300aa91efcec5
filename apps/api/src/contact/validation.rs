use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Permissive address shape: something, "@", something, ".", something.
/// Deliberately not RFC 5322; tightening it would reject addresses accepted today.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

/// Per-field error messages. An absent field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear_field(&mut self, field: Field) {
        self.0.remove(&field);
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub errors: FieldErrors,
    pub is_valid: bool,
}

/// Checks every field independently and collects all errors.
pub fn validate(fields: &ContactFields) -> Validation {
    let mut errors = FieldErrors::default();

    if fields.name.trim().is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }

    if fields.email.trim().is_empty() {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !EMAIL_PATTERN.is_match(&fields.email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }

    if fields.message.trim().is_empty() {
        errors.insert(Field::Message, MESSAGE_REQUIRED);
    }

    let is_valid = errors.is_empty();
    Validation { errors, is_valid }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form() {
        let v = validate(&ContactFields::new("Ada", "ada@example.com", "Hello"));
        assert!(v.is_valid);
        assert!(v.errors.is_empty());
    }

    #[test]
    fn test_collects_all_errors() {
        let v = validate(&ContactFields::new("", "bad", "hi"));
        assert!(!v.is_valid);
        assert_eq!(v.errors.len(), 2);
        assert_eq!(v.errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(v.errors.get(Field::Email), Some(EMAIL_INVALID));
        assert_eq!(v.errors.get(Field::Message), None);
    }

    #[test]
    fn test_only_message_missing() {
        let v = validate(&ContactFields::new("A", "a@b.co", ""));
        assert!(!v.is_valid);
        assert_eq!(v.errors.len(), 1);
        assert_eq!(v.errors.get(Field::Message), Some(MESSAGE_REQUIRED));
    }

    #[test]
    fn test_whitespace_only_fields_are_empty() {
        let v = validate(&ContactFields::new("  ", "\t", "\n "));
        assert_eq!(v.errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(v.errors.get(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(v.errors.get(Field::Message), Some(MESSAGE_REQUIRED));
    }

    #[test]
    fn test_email_pattern_is_permissive() {
        for accepted in ["a@b.c", "x y@b.c", "first.last@sub.domain.io", "a@b.c.d"] {
            assert!(
                validate(&ContactFields::new("A", accepted, "m")).is_valid,
                "{accepted} should pass"
            );
        }
        for rejected in ["a@b", "@b.c", "a@.c", "a@b.", "plainaddress", "a @b.c"] {
            assert_eq!(
                validate(&ContactFields::new("A", rejected, "m"))
                    .errors
                    .get(Field::Email),
                Some(EMAIL_INVALID),
                "{rejected} should fail"
            );
        }
    }

    #[test]
    fn test_field_errors_serialize_by_field_name() {
        let v = validate(&ContactFields::new("", "", ""));
        let json = serde_json::to_value(&v.errors).unwrap();
        assert_eq!(json["name"], NAME_REQUIRED);
        assert_eq!(json["email"], EMAIL_REQUIRED);
        assert_eq!(json["message"], MESSAGE_REQUIRED);
    }

    #[test]
    fn test_clear_field_leaves_others() {
        let mut errors = validate(&ContactFields::new("", "bad", "")).errors;
        errors.clear_field(Field::Email);
        assert_eq!(errors.get(Field::Email), None);
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Message), Some(MESSAGE_REQUIRED));
    }
}
