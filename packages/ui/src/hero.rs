use dioxus::prelude::*;

use content::{Profile, Section};

use crate::icons::{LdArrowDown, LdSend};
use crate::parallax::Parallax;
use crate::scroll::scroll_to_section;
use crate::Icon;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

/// Full-viewport intro: greeting, role line, and a decorative code window
/// that drifts against the scroll.
#[component]
pub fn Hero() -> Element {
    let profile = Profile::default();

    rsx! {
        document::Stylesheet { href: HERO_CSS }
        section {
            id: "home",
            class: "hero",

            div {
                class: "hero-backdrop",
                Parallax { speed: -0.1, class: "hero-blob-anchor blob-upper",
                    div { class: "hero-blob hero-blob-bright" }
                }
                Parallax { speed: -0.05, class: "hero-blob-anchor blob-lower",
                    div { class: "hero-blob hero-blob-dim" }
                }
            }

            div {
                class: "hero-inner",
                div {
                    class: "hero-copy",
                    div {
                        class: "hero-kicker",
                        span { class: "kicker-line" }
                        h3 { "WELCOME TO MY PORTFOLIO" }
                    }
                    h1 { class: "hero-greeting", "Hello, I Am" }
                    h1 { class: "hero-name", "{profile.first_name}" }
                    p { class: "hero-role", "{profile.role}" }

                    div {
                        class: "hero-actions",
                        button {
                            class: "hero-cta",
                            onclick: move |_| scroll_to_section(Section::Contact),
                            Icon { icon: LdSend, width: 16, height: 16 }
                            "Contact Me"
                        }
                    }

                    div {
                        class: "hero-scroll-hint",
                        span {
                            class: "hero-scroll-arrow",
                            Icon { icon: LdArrowDown, width: 16, height: 16 }
                        }
                        span { "Scroll to explore" }
                    }
                }

                div {
                    class: "hero-visual",
                    div {
                        class: "hero-visual-anchor",
                        Parallax { speed: 0.03, class: "hero-code-anchor",
                            CodeWindow {}
                        }
                        Parallax { speed: -0.08, class: "hero-orb orb-upper",
                            div { class: "orb-fill orb-bright" }
                        }
                        Parallax { speed: -0.06, class: "hero-orb orb-lower",
                            div { class: "orb-fill orb-dim" }
                        }
                    }
                }
            }
        }
    }
}

/// Decorative `developer.js` editor card shown beside the greeting.
#[component]
fn CodeWindow() -> Element {
    let profile = Profile::default();

    rsx! {
        div {
            class: "code-window",
            div {
                class: "code-window-bar",
                span { class: "window-dot dot-red" }
                span { class: "window-dot dot-yellow" }
                span { class: "window-dot dot-green" }
                span { class: "code-window-name", "developer.js" }
            }
            pre {
                class: "code-window-body",
                code {
                    div {
                        class: "code-line",
                        span { class: "tok-kw", "class " }
                        span { class: "tok-type", "Developer " }
                        span { class: "tok-plain", "{{" }
                    }
                    div {
                        class: "code-line indent-1",
                        span { class: "tok-fn", "constructor" }
                        span { class: "tok-plain", "() {{" }
                    }
                    div {
                        class: "code-line indent-2",
                        span { class: "tok-plain", "this." }
                        span { class: "tok-prop", "name" }
                        span { class: "tok-plain", " = " }
                        span { class: "tok-str", "'{profile.full_name}'" }
                        span { class: "tok-plain", ";" }
                    }
                    div {
                        class: "code-line indent-2",
                        span { class: "tok-plain", "this." }
                        span { class: "tok-prop", "skills" }
                        span { class: "tok-plain", " = [" }
                        span { class: "tok-str", "'Web'" }
                        span { class: "tok-plain", ", " }
                        span { class: "tok-str", "'Frontend'" }
                        span { class: "tok-plain", ", " }
                        span { class: "tok-str", "'Backend'" }
                        span { class: "tok-plain", "];" }
                    }
                    div {
                        class: "code-line indent-1",
                        span { class: "tok-plain", "}}" }
                    }
                    div {
                        class: "code-line indent-1",
                        span { class: "tok-fn", "createPortfolio" }
                        span { class: "tok-plain", "() {{" }
                    }
                    div {
                        class: "code-line indent-2",
                        span { class: "tok-ret", "return " }
                        span { class: "tok-str", "'Creative solutions'" }
                        span { class: "tok-plain", ";" }
                    }
                    div {
                        class: "code-line indent-1",
                        span { class: "tok-plain", "}}" }
                    }
                    div {
                        class: "code-line",
                        span { class: "tok-plain", "}}" }
                    }
                }
            }
        }
    }
}
