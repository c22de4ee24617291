//! Contact-form validation rules.
//!
//! Each field is checked independently; values are trimmed before every rule.
//! Error strings are the exact user-facing messages.

use std::sync::OnceLock;

use regex_lite::Regex;

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_MESSAGE_CHARS: usize = 10;

/// The three contact-form fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Id of the input element for this field.
    pub fn input_id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Id of the inline error container for this field.
    pub fn error_id(self) -> &'static str {
        match self {
            Field::Name => "nameError",
            Field::Email => "emailError",
            Field::Message => "messageError",
        }
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// Loose `local@domain.tld` shape check; not an RFC 5322 parser.
pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// Apply this field's rules to a raw input value.
///
/// Returns the user-facing message for the first rule that fails.
pub fn validate(field: Field, raw: &str) -> Result<(), &'static str> {
    let value = raw.trim();
    match field {
        Field::Name => {
            if value.is_empty() {
                Err("Name is required")
            } else if value.chars().count() < MIN_NAME_CHARS {
                Err("Name must be at least 2 characters")
            } else {
                Ok(())
            }
        }
        Field::Email => {
            if value.is_empty() {
                Err("Email is required")
            } else if !is_valid_email(value) {
                Err("Please enter a valid email address")
            } else {
                Ok(())
            }
        }
        Field::Message => {
            if value.is_empty() {
                Err("Message is required")
            } else if value.chars().count() < MIN_MESSAGE_CHARS {
                Err("Message must be at least 10 characters")
            } else {
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rules() {
        assert_eq!(validate(Field::Name, ""), Err("Name is required"));
        assert_eq!(validate(Field::Name, "   "), Err("Name is required"));
        assert_eq!(
            validate(Field::Name, "A"),
            Err("Name must be at least 2 characters")
        );
        assert_eq!(validate(Field::Name, "Al"), Ok(()));
        // Trim happens before the length check.
        assert_eq!(
            validate(Field::Name, " A "),
            Err("Name must be at least 2 characters")
        );
        assert_eq!(validate(Field::Name, " Al "), Ok(()));
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(validate(Field::Email, ""), Err("Email is required"));
        assert_eq!(validate(Field::Email, " \t"), Err("Email is required"));
        assert_eq!(
            validate(Field::Email, "a@b"),
            Err("Please enter a valid email address")
        );
        assert_eq!(
            validate(Field::Email, "plainaddress"),
            Err("Please enter a valid email address")
        );
        assert_eq!(validate(Field::Email, "a@b.co"), Ok(()));
        assert_eq!(validate(Field::Email, "  a@b.co  "), Ok(()));
    }

    #[test]
    fn test_email_pattern_edges() {
        assert!(is_valid_email("first.last@example.co.uk"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@b@c.d"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn test_message_rules() {
        assert_eq!(validate(Field::Message, ""), Err("Message is required"));
        assert_eq!(
            validate(Field::Message, "123456789"),
            Err("Message must be at least 10 characters")
        );
        assert_eq!(validate(Field::Message, "1234567890"), Ok(()));
    }

    #[test]
    fn test_field_element_ids() {
        assert_eq!(Field::Name.input_id(), "name");
        assert_eq!(Field::Name.error_id(), "nameError");
        assert_eq!(Field::Email.error_id(), "emailError");
        assert_eq!(Field::Message.error_id(), "messageError");
    }
}
