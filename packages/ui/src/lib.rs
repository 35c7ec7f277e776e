//! This crate contains all shared UI for the portfolio page.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::ld_icons::*;
}

/// Shared palette, code-window tokens, and section furniture. Linked once by
/// the app shell; component styles assume it is present.
pub const THEME_CSS: Asset = asset!("/assets/theme.css");

pub mod scroll;
pub use scroll::{scroll_to_section, window_scroll_y, ScrollSubscription};

pub mod parallax;
pub use parallax::{Parallax, ParallaxAxis, ParallaxTracker};

pub mod toast;
pub use toast::{use_toast, Toast, ToastApi, ToastLevel, ToastOptions, ToastProvider, Toasts};

mod avatar;
pub use avatar::{Avatar, AvatarSize};

mod section_heading;
pub use section_heading::{HeadingAlign, SectionHeading};

mod header;
pub use header::Header;

mod hero;
pub use hero::Hero;

mod about;
pub use about::About;

mod skills;
pub use skills::Skills;

mod projects;
pub use projects::Projects;

mod contact;
pub use contact::Contact;

mod footer;
pub use footer::Footer;
