//! # Site owner profile and contact directory
//!
//! The single source of truth for who the site is about. Components never
//! hard-code the owner's name, role, or contact details; they pull them from
//! [`Profile::default`] and [`ContactMethod::directory`] so the data lives in
//! one place.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Profile`] | Identity and biography: names, role, education, the footer tagline, the profile-card quote, and the highlight tags shown under the avatar. |
//! | [`ContactMethod`] | One entry in the contact directory (email, phone, Facebook, location) with its display value and optional link target. |
//! | [`ContactChannel`] | Which kind of contact a method is — the UI picks an icon from this. |

use serde::{Deserialize, Serialize};

/// Identity and biography of the site owner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Full legal name: "Alfred Emil Cepillo"
    pub full_name: String,
    /// Given names, used in the hero heading: "Alfred Emil"
    pub first_name: String,
    /// Family name, used as the footer wordmark: "Cepillo"
    pub surname: String,
    /// Professional role line: "Full-Stack Developer"
    pub role: String,
    /// One-word answer shown in the about terminal card
    pub passion: String,
    /// Degree programme name
    pub degree: String,
    /// Institution name
    pub school: String,
    /// City/province/country of the institution
    pub school_location: String,
    /// Current year of study, lowercase: "third-year"
    pub year_level: String,
    /// Footer blurb summarising the stack
    pub tagline: String,
    /// Quote shown on the profile card
    pub quote: String,
    /// Short skill tags shown under the avatar
    pub highlights: Vec<String>,
}

impl Profile {
    /// Initials for the avatar fallback: first letter of the first and last
    /// word of `full_name` ("Alfred Emil Cepillo" -> "AC").
    pub fn initials(&self) -> String {
        let mut words = self.full_name.split_whitespace();
        let first = words.next().and_then(|w| w.chars().next());
        let last = words.last().and_then(|w| w.chars().next());
        match (first, last) {
            (Some(a), Some(b)) => format!("{a}{b}"),
            (Some(a), None) => a.to_string(),
            _ => String::new(),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            full_name: "Alfred Emil Cepillo".to_string(),
            first_name: "Alfred Emil".to_string(),
            surname: "Cepillo".to_string(),
            role: "Full-Stack Developer".to_string(),
            passion: "Building stuff".to_string(),
            degree: "Bachelor of Science in Information Systems".to_string(),
            school: "Clarendon College".to_string(),
            school_location: "Roxas, Oriental Mindoro, Philippines".to_string(),
            year_level: "third-year".to_string(),
            tagline: "Full-Stack Developer with expertise in HTML, CSS, JavaScript, PHP, MySQL, \
                      and Python."
                .to_string(),
            quote: "Passionate about tech, still learning the ropes.".to_string(),
            highlights: vec![
                "Web Development".to_string(),
                "UI/UX Design".to_string(),
                "Database Design".to_string(),
            ],
        }
    }
}

/// Which kind of contact a [`ContactMethod`] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactChannel {
    Email,
    Phone,
    Facebook,
    Location,
}

/// One entry in the contact directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactMethod {
    pub channel: ContactChannel,
    /// Card title: "Email", "Phone", ...
    pub label: String,
    /// Display value: the address, number, profile name, or place
    pub value: String,
    /// Link target, or None for entries that are not clickable
    pub href: Option<String>,
}

impl ContactMethod {
    /// The contact directory shown as cards in the contact section.
    pub fn directory() -> Vec<ContactMethod> {
        vec![
            ContactMethod {
                channel: ContactChannel::Email,
                label: "Email".to_string(),
                value: "mellogamer217@gmail.com".to_string(),
                href: Some("mailto:mellogamer217@gmail.com".to_string()),
            },
            ContactMethod {
                channel: ContactChannel::Phone,
                label: "Phone".to_string(),
                value: "09565593141".to_string(),
                href: Some("tel:+6309565593141".to_string()),
            },
            ContactMethod {
                channel: ContactChannel::Facebook,
                label: "Facebook".to_string(),
                value: "Alfred Emil Cepillo".to_string(),
                href: Some("https://facebook.com/alfredemilcepillo".to_string()),
            },
            ContactMethod {
                channel: ContactChannel::Location,
                label: "Location".to_string(),
                value: "Roxas, Oriental Mindoro, Philippines".to_string(),
                href: None,
            },
        ]
    }

    /// Whether the link leaves the page (opens in a new tab).
    pub fn is_external(&self) -> bool {
        self.href
            .as_deref()
            .is_some_and(|href| href.starts_with("http"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_from_full_name() {
        assert_eq!(Profile::default().initials(), "AC");
    }

    #[test]
    fn test_initials_single_word() {
        let profile = Profile {
            full_name: "Cepillo".to_string(),
            ..Profile::default()
        };
        assert_eq!(profile.initials(), "C");
    }

    #[test]
    fn test_default_profile_is_populated() {
        let profile = Profile::default();
        assert!(!profile.full_name.is_empty());
        assert!(profile.full_name.starts_with(&profile.first_name));
        assert!(profile.full_name.ends_with(&profile.surname));
        assert_eq!(profile.highlights.len(), 3);
    }

    #[test]
    fn test_directory_has_four_methods() {
        let directory = ContactMethod::directory();
        assert_eq!(directory.len(), 4);
        assert!(directory.iter().any(|m| m.channel == ContactChannel::Email));
    }

    #[test]
    fn test_email_method_links_mailto() {
        let directory = ContactMethod::directory();
        let email = directory
            .iter()
            .find(|m| m.channel == ContactChannel::Email)
            .unwrap();
        let href = email.href.as_deref().unwrap();
        assert!(href.starts_with("mailto:"));
        assert!(href.ends_with(&email.value));
        assert!(!email.is_external());
    }

    #[test]
    fn test_only_facebook_is_external() {
        for method in ContactMethod::directory() {
            let external = method.channel == ContactChannel::Facebook;
            assert_eq!(method.is_external(), external);
        }
    }

    #[test]
    fn test_location_has_no_link() {
        let directory = ContactMethod::directory();
        let location = directory
            .iter()
            .find(|m| m.channel == ContactChannel::Location)
            .unwrap();
        assert!(location.href.is_none());
    }
}
