//! # Declarative validation schema
//!
//! Each form field owns an ordered list of [`Rule`]s (see [`rules_for`]).
//! A rule is a predicate plus the wording of its violation, so the
//! constraint and its user-facing message cannot drift apart. Fields are
//! checked independently of each other; within a field the first violated
//! rule supplies the message shown under the input.
//!
//! | Field | Rules |
//! |-------|-------|
//! | Name | at least 2, less than 50 characters |
//! | Email | standard email grammar |
//! | Subject | at least 5, less than 100 characters |
//! | Message | at least 10, less than 1000 characters |
//!
//! Lengths count characters (Unicode scalar values), not bytes.

use crate::form::ContactField;

/// A single validation constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Value must be at least this many characters.
    MinLen(usize),
    /// Value must be at most this many characters.
    MaxLen(usize),
    /// Value must parse as a plausible email address.
    EmailFormat,
}

impl Rule {
    /// Whether `value` satisfies the rule.
    pub fn check(&self, value: &str) -> bool {
        match self {
            Rule::MinLen(min) => value.chars().count() >= *min,
            Rule::MaxLen(max) => value.chars().count() <= *max,
            Rule::EmailFormat => is_valid_email(value),
        }
    }

    /// The message shown when the rule is violated on `field`.
    pub fn message(&self, field: ContactField) -> String {
        match self {
            Rule::MinLen(min) => {
                format!("{} must be at least {} characters", field.display_name(), min)
            }
            Rule::MaxLen(max) => {
                format!("{} must be less than {} characters", field.display_name(), max)
            }
            Rule::EmailFormat => "Please enter a valid email address".to_string(),
        }
    }
}

/// The ordered rule list for one field.
pub fn rules_for(field: ContactField) -> &'static [Rule] {
    match field {
        ContactField::Name => &[Rule::MinLen(2), Rule::MaxLen(50)],
        ContactField::Email => &[Rule::EmailFormat],
        ContactField::Subject => &[Rule::MinLen(5), Rule::MaxLen(100)],
        ContactField::Message => &[Rule::MinLen(10), Rule::MaxLen(1000)],
    }
}

/// The message of the first rule `value` violates on `field`, or `None`
/// when every rule passes.
pub fn first_violation(field: ContactField, value: &str) -> Option<String> {
    rules_for(field)
        .iter()
        .find(|rule| !rule.check(value))
        .map(|rule| rule.message(field))
}

/// Standard email grammar: exactly one `@`, a local part without spaces,
/// leading/trailing dots, or doubled dots, and a dotted domain whose final
/// label is at least two letters.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    if !local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "._%+'-".contains(c))
    {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, rest)) = labels.split_last() else {
        return false;
    };
    if rest.is_empty() {
        return false;
    }
    for label in &labels {
        if label.is_empty()
            || label.starts_with('-')
            || label.ends_with('-')
            || !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return false;
        }
    }
    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rules_in_order() {
        assert_eq!(
            rules_for(ContactField::Name),
            &[Rule::MinLen(2), Rule::MaxLen(50)]
        );
    }

    #[test]
    fn test_min_len_message_wording() {
        assert_eq!(
            Rule::MinLen(2).message(ContactField::Name),
            "Name must be at least 2 characters"
        );
        assert_eq!(
            Rule::MinLen(10).message(ContactField::Message),
            "Message must be at least 10 characters"
        );
    }

    #[test]
    fn test_max_len_message_wording() {
        assert_eq!(
            Rule::MaxLen(50).message(ContactField::Name),
            "Name must be less than 50 characters"
        );
        assert_eq!(
            Rule::MaxLen(100).message(ContactField::Subject),
            "Subject must be less than 100 characters"
        );
    }

    #[test]
    fn test_email_message_wording() {
        assert_eq!(
            Rule::EmailFormat.message(ContactField::Email),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Two characters, four bytes.
        assert!(Rule::MinLen(2).check("Ñá"));
        assert!(!Rule::MinLen(3).check("Ñá"));
        assert!(Rule::MaxLen(2).check("Ñá"));
    }

    #[test]
    fn test_first_violation_picks_earliest_rule() {
        assert_eq!(
            first_violation(ContactField::Name, "A"),
            Some("Name must be at least 2 characters".to_string())
        );
        let long = "x".repeat(51);
        assert_eq!(
            first_violation(ContactField::Name, &long),
            Some("Name must be less than 50 characters".to_string())
        );
        assert_eq!(first_violation(ContactField::Name, "Al"), None);
    }

    #[test]
    fn test_valid_emails() {
        for email in [
            "a@b.co",
            "user@example.com",
            "first.last@example.com",
            "user+tag@sub.domain.org",
            "o'brien@example.ie",
            "user_name%x@host-name.com",
        ] {
            assert!(is_valid_email(email), "expected valid: {email}");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "not-an-email",
            "",
            "@example.com",
            "user@",
            "user@@example.com",
            "user@domain",
            ".user@example.com",
            "user.@example.com",
            "us..er@example.com",
            "user name@example.com",
            "user@-example.com",
            "user@example.c",
            "user@example.c0",
            "user@.com",
        ] {
            assert!(!is_valid_email(email), "expected invalid: {email}");
        }
    }
}
