//! # Page sections and in-page anchors
//!
//! The site is a single page; navigation happens by smooth-scrolling to
//! element anchors rather than through a router. [`Section`] is the typed
//! list of those anchors, so the nav links, scroll targets, and section
//! components all agree on the same `id` strings.
//!
//! | Variant | Anchor id | Nav label |
//! |---------|-----------|-----------|
//! | [`Section::Home`] | `home` | Home |
//! | [`Section::About`] | `about` | About |
//! | [`Section::Skills`] | `skills` | Skills |
//! | [`Section::Projects`] | `projects` | Projects |
//! | [`Section::Contact`] | `contact` | Contact |

use serde::{Deserialize, Serialize};

/// One of the five sections of the single-page layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// Every section in page order. Also the nav link order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// The DOM element id the section renders with.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// The label shown in navigation links.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Fragment href for anchor links: `"#home"`, `"#about"`, ...
    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_anchor_ids_are_unique() {
        let ids: HashSet<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), Section::ALL.len());
    }

    #[test]
    fn test_href_is_fragment_of_id() {
        for section in Section::ALL {
            assert_eq!(section.href(), format!("#{}", section.id()));
        }
    }

    #[test]
    fn test_page_order() {
        assert_eq!(Section::ALL[0], Section::Home);
        assert_eq!(Section::ALL[4], Section::Contact);
    }

    #[test]
    fn test_labels_are_titlecased_ids() {
        for section in Section::ALL {
            assert_eq!(section.label().to_lowercase(), section.id());
        }
    }
}
