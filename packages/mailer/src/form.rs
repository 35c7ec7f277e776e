//! # Contact form model and validation report

use serde::{Deserialize, Serialize};

use crate::schema::first_violation;

/// The four user-supplied fields of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Identifies one field of [`ContactForm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// Every field in form order.
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Capitalised name used in labels and validation messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }
}

impl ContactForm {
    fn field_value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Check every field against its schema rules. All failing fields are
    /// reported together rather than stopping at the first; `Ok` means the
    /// form may be submitted.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for field in ContactField::ALL {
            if let Some(message) = first_violation(field, self.field_value(field)) {
                errors.set(field, message);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Per-field validation messages. A `None` entry means the field passed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ValidationErrors {
    /// The message attached to `field`, if it failed.
    pub fn get(&self, field: ContactField) -> Option<&str> {
        let slot = match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        };
        slot.as_deref()
    }

    fn set(&mut self, field: ContactField, message: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = Some(message);
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_none())
    }

    /// Number of fields that failed.
    pub fn count(&self) -> usize {
        ContactField::ALL
            .iter()
            .filter(|f| self.get(**f).is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Al".to_string(),
            email: "a@b.co".to_string(),
            subject: "Hello there".to_string(),
            message: "This is a message.".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn test_short_name_fails_only_name() {
        let form = ContactForm {
            name: "A".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.count(), 1);
        assert_eq!(
            errors.get(ContactField::Name),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn test_malformed_email_fails_independently() {
        // Other fields invalid too: every failing field must be reported.
        let form = ContactForm {
            name: "A".to_string(),
            email: "not-an-email".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.count(), 2);
        assert_eq!(
            errors.get(ContactField::Email),
            Some("Please enter a valid email address")
        );
        assert!(errors.get(ContactField::Name).is_some());
        assert!(errors.get(ContactField::Subject).is_none());
    }

    #[test]
    fn test_empty_form_fails_every_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.count(), 4);
        for field in ContactField::ALL {
            assert!(errors.get(field).is_some(), "missing error for {field:?}");
        }
    }

    #[test]
    fn test_overlong_fields_report_max_messages() {
        let form = ContactForm {
            name: "x".repeat(51),
            subject: "s".repeat(101),
            message: "m".repeat(1001),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get(ContactField::Name),
            Some("Name must be less than 50 characters")
        );
        assert_eq!(
            errors.get(ContactField::Subject),
            Some("Subject must be less than 100 characters")
        );
        assert_eq!(
            errors.get(ContactField::Message),
            Some("Message must be less than 1000 characters")
        );
    }

    #[test]
    fn test_length_boundaries() {
        let at_min = ContactForm {
            subject: "Hello".to_string(),       // 5
            message: "0123456789".to_string(),  // 10
            ..valid_form()
        };
        assert_eq!(at_min.validate(), Ok(()));

        let at_max = ContactForm {
            name: "x".repeat(50),
            subject: "s".repeat(100),
            message: "m".repeat(1000),
            ..valid_form()
        };
        assert_eq!(at_max.validate(), Ok(()));

        let below_min = ContactForm {
            message: "123456789".to_string(), // 9
            ..valid_form()
        };
        assert_eq!(
            below_min.validate().unwrap_err().get(ContactField::Message),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn test_multibyte_name_counts_characters() {
        let form = ContactForm {
            name: "Ñá".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate(), Ok(()));
    }
}
