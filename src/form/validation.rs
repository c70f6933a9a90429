use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// US-style 10-digit number, optionally parenthesized area code, optional
// separators, e.g. "(419) 964-6639" or "419.964.6639".
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(?([0-9]{3})\)?[-. ]?([0-9]{3})[-. ]?([0-9]{4})$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Email,
    Phone,
    Message,
}

/// Which phone check a form variant applies. The basic contact form only
/// requires a phone number; the application form also enforces the
/// North-American pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneRule {
    Required,
    NorthAmerican,
}

pub type FieldErrors = HashMap<Field, String>;

/// Field-level validation for the contact form. `message` is never checked
/// and `bedsNeeded` is not this layer's concern; the endpoint applies its own
/// independent presence check with a single generic error.
pub fn validate_fields(
    full_name: &str,
    email: &str,
    phone: &str,
    phone_rule: PhoneRule,
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if full_name.trim().is_empty() {
        errors.insert(Field::FullName, "Name is required".to_string());
    }

    if email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required".to_string());
    } else if !EMAIL_REGEX.is_match(email) {
        errors.insert(Field::Email, "Invalid email format".to_string());
    }

    if phone.trim().is_empty() {
        errors.insert(Field::Phone, "Phone number is required".to_string());
    } else if phone_rule == PhoneRule::NorthAmerican && !PHONE_REGEX.is_match(phone) {
        errors.insert(Field::Phone, "Invalid phone number format".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict(full_name: &str, email: &str, phone: &str) -> FieldErrors {
        validate_fields(full_name, email, phone, PhoneRule::NorthAmerican)
    }

    #[test]
    fn complete_submission_passes() {
        let errors = strict("Jane Doe", "a@b.co", "(419) 964-6639");
        assert!(errors.is_empty());
    }

    #[test]
    fn blank_name_is_required() {
        let errors = strict("   ", "a@b.co", "(419) 964-6639");
        assert_eq!(errors.get(&Field::FullName).unwrap(), "Name is required");
    }

    #[test]
    fn empty_email_is_required() {
        let errors = strict("Jane Doe", "", "(419) 964-6639");
        assert_eq!(errors.get(&Field::Email).unwrap(), "Email is required");
    }

    #[test]
    fn malformed_email_is_flagged() {
        let errors = strict("Jane Doe", "not-an-email", "(419) 964-6639");
        assert_eq!(errors.get(&Field::Email).unwrap(), "Invalid email format");
    }

    #[test]
    fn email_needs_a_tld_dot() {
        let errors = strict("Jane Doe", "jane@example", "(419) 964-6639");
        assert_eq!(errors.get(&Field::Email).unwrap(), "Invalid email format");
    }

    #[test]
    fn empty_phone_is_required() {
        let errors = strict("Jane Doe", "a@b.co", "");
        assert_eq!(
            errors.get(&Field::Phone).unwrap(),
            "Phone number is required"
        );
    }

    #[test]
    fn short_phone_fails_strict_rule() {
        let errors = strict("Jane Doe", "a@b.co", "123");
        assert_eq!(
            errors.get(&Field::Phone).unwrap(),
            "Invalid phone number format"
        );
    }

    #[test]
    fn separator_variants_pass_strict_rule() {
        for phone in ["(419) 964-6639", "419-964-6639", "419.964.6639", "4199646639"] {
            let errors = strict("Jane Doe", "a@b.co", phone);
            assert!(errors.is_empty(), "{} should validate", phone);
        }
    }

    #[test]
    fn required_rule_accepts_any_non_empty_phone() {
        let errors = validate_fields("Jane Doe", "a@b.co", "123", PhoneRule::Required);
        assert!(errors.is_empty());
    }

    #[test]
    fn all_errors_reported_at_once() {
        let errors = strict("", "", "");
        assert_eq!(errors.len(), 3);
    }
}
