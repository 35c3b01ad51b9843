use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name fields accept Latin or Cyrillic letters only, no mixing with
/// digits, punctuation or whitespace.
pub static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[а-яА-Яa-zA-Z]+$").expect("valid name pattern"));

/// Phones start with the national prefix `8` or the international `+7`,
/// followed by 5 to 15 digits.
pub static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(8|\+7)[0-9]{5,15}$").expect("valid phone pattern"));

pub const MIN_NAME_LEN: usize = 2;

/// A phonebook record. Serialized as a single JSON object per line in the
/// backing file; `id` equals the record's 1-based line position and is
/// assigned exactly once, on append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub organization: Option<String>,
    pub office_phone: Option<String>,
    pub personal_phone: Option<String>,
}

/// One failed field constraint, locating the offending field by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field constraint violated by one input, collected so the user
/// sees all offending fields at once rather than the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names of the offending fields, in input order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|e| e.field).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed:")?;
        for err in &self.0 {
            write!(f, "\n  {}", err)?;
        }
        Ok(())
    }
}

pub(crate) fn check_name(
    field: &'static str,
    value: &str,
    min_len: usize,
    errors: &mut Vec<FieldError>,
) {
    if !NAME_PATTERN.is_match(value) {
        errors.push(FieldError::new(
            field,
            format!("invalid value {value:?}: only Latin or Cyrillic letters are allowed"),
        ));
    } else if value.chars().count() < min_len {
        errors.push(FieldError::new(
            field,
            format!("must be at least {min_len} characters long"),
        ));
    }
}

pub(crate) fn check_phone(field: &'static str, value: &str, errors: &mut Vec<FieldError>) {
    if !PHONE_PATTERN.is_match(value) {
        errors.push(FieldError::new(
            field,
            format!("invalid phone number {value:?}: expected 8 or +7 followed by 5-15 digits"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_pattern_accepts_latin_and_cyrillic() {
        assert!(NAME_PATTERN.is_match("Ivan"));
        assert!(NAME_PATTERN.is_match("Иван"));
        assert!(!NAME_PATTERN.is_match("99"));
        assert!(!NAME_PATTERN.is_match("Ivan Ivanov"));
        assert!(!NAME_PATTERN.is_match(""));
    }

    #[test]
    fn phone_pattern_requires_prefix_and_digits() {
        assert!(PHONE_PATTERN.is_match("+71234567890"));
        assert!(PHONE_PATTERN.is_match("81234567890"));
        assert!(PHONE_PATTERN.is_match("812345"));
        assert!(!PHONE_PATTERN.is_match("1234567890"));
        assert!(!PHONE_PATTERN.is_match("+7123456789a"));
        assert!(!PHONE_PATTERN.is_match("+71234"));
    }

    #[test]
    fn entry_serializes_optionals_as_null() {
        let entry = Entry {
            id: 1,
            first_name: "Ivan".into(),
            last_name: "Ivanov".into(),
            middle_name: None,
            organization: None,
            office_phone: None,
            personal_phone: Some("81234567890".into()),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"middle_name\":null"));
        assert!(json.contains("\"personal_phone\":\"81234567890\""));

        let parsed: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn validation_errors_display_lists_every_field() {
        let errors = ValidationErrors(vec![
            FieldError::new("first_name", "bad"),
            FieldError::new("office_phone", "worse"),
        ]);
        let text = errors.to_string();
        assert!(text.contains("first_name: bad"));
        assert!(text.contains("office_phone: worse"));
        assert_eq!(errors.fields(), vec!["first_name", "office_phone"]);
    }
}
