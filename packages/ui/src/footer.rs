use dioxus::prelude::*;

use content::{Profile, Section};

use crate::icons::LdArrowUp;
use crate::Icon;

const FOOTER_CSS: Asset = asset!("/assets/styling/footer.css");

/// Sections linked in the footer strip.
const FOOTER_LINKS: [Section; 4] = [
    Section::Home,
    Section::About,
    Section::Skills,
    Section::Contact,
];

/// Closing strip: back-to-top control, brand line, section links, copyright.
#[component]
pub fn Footer() -> Element {
    let profile = Profile::default();
    let year = current_year();

    rsx! {
        document::Stylesheet { href: FOOTER_CSS }
        footer {
            class: "footer",
            a {
                class: "footer-top",
                href: "#home",
                aria_label: "Back to top",
                Icon { icon: LdArrowUp, width: 20, height: 20 }
            }

            div {
                class: "footer-identity",
                a { class: "footer-brand", href: "#home", "{profile.surname}" }
                p { class: "footer-tagline", "{profile.tagline}" }
            }

            nav {
                class: "footer-links",
                for section in FOOTER_LINKS {
                    a { href: section.href(), {section.label()} }
                }
            }

            div {
                class: "footer-legal",
                p { "\u{00A9} {year} {profile.full_name}. All rights reserved." }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[cfg(not(target_arch = "wasm32"))]
fn current_year() -> u32 {
    2026
}
