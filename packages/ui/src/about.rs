use dioxus::prelude::*;

use content::Profile;

use crate::icons::{LdCpu, LdGraduationCap, LdMonitor};
use crate::parallax::Parallax;
use crate::{Avatar, AvatarSize, Icon};

const ABOUT_CSS: Asset = asset!("/assets/styling/about.css");

/// Bio section: terminal-style intro card, quick stats, education card, and
/// the profile card with highlight badges.
#[component]
pub fn About() -> Element {
    let profile = Profile::default();
    let initials = profile.initials();

    rsx! {
        document::Stylesheet { href: ABOUT_CSS }
        section {
            id: "about",
            class: "about",

            div {
                class: "about-backdrop",
                Parallax { speed: -0.05, class: "about-blob-anchor blob-upper",
                    div { class: "about-blob about-blob-bright" }
                }
                Parallax { speed: -0.03, class: "about-blob-anchor blob-lower",
                    div { class: "about-blob about-blob-dim" }
                }
            }
            div { class: "section-divider" }

            div {
                class: "about-inner",
                div {
                    class: "about-heading",
                    h2 {
                        "About "
                        span { class: "heading-accent", "Me" }
                    }
                }

                div {
                    class: "about-columns",
                    div {
                        class: "about-main",
                        Parallax { speed: 0.03,
                            AboutTerminal { profile: profile.clone() }
                        }

                        div {
                            class: "about-stats",
                            Parallax { speed: 0.05,
                                div {
                                    class: "stat-card",
                                    span {
                                        class: "stat-icon",
                                        Icon { icon: LdMonitor, width: 24, height: 24 }
                                    }
                                    h3 { "Frontend" }
                                    p { "HTML, CSS, JS" }
                                }
                            }
                            Parallax { speed: 0.07,
                                div {
                                    class: "stat-card",
                                    span {
                                        class: "stat-icon",
                                        Icon { icon: LdCpu, width: 24, height: 24 }
                                    }
                                    h3 { "Backend" }
                                    p { "PHP, Python" }
                                }
                            }
                        }

                        Parallax { speed: 0.02,
                            div {
                                class: "education-card",
                                div {
                                    class: "education-lead",
                                    span {
                                        class: "education-icon",
                                        Icon { icon: LdGraduationCap, width: 20, height: 20 }
                                    }
                                    div {
                                        h3 { "Education" }
                                        p { "{profile.degree}" }
                                    }
                                }
                                p {
                                    class: "education-note",
                                    "Currently, I'm a {profile.year_level} student at "
                                    a { href: "#", "{profile.school}" }
                                    " in {profile.school_location}."
                                }
                            }
                        }
                    }

                    div {
                        class: "about-aside",
                        Parallax { speed: 0.04,
                            div {
                                class: "profile-card",
                                Avatar { size: AvatarSize::Lg, initials: initials }
                                h3 { class: "profile-name", "{profile.full_name}" }
                                p { class: "profile-role", "{profile.role}" }

                                div {
                                    class: "profile-badges",
                                    for highlight in profile.highlights.clone() {
                                        span { class: "profile-badge", "{highlight}" }
                                    }
                                }

                                div {
                                    class: "profile-quote",
                                    p { "\"{profile.quote}\"" }
                                }
                            }
                        }

                        Parallax { speed: -0.05, class: "about-frame",
                            div { class: "frame-fill" }
                        }
                        Parallax { speed: -0.08, class: "about-orb orb-lower",
                            div { class: "orb-fill orb-bright" }
                        }
                        Parallax { speed: -0.1, class: "about-orb orb-upper",
                            div { class: "orb-fill orb-dim" }
                        }
                    }
                }
            }
        }
    }
}

/// Terminal card rendering the profile as an `aboutMe` object literal.
#[component]
fn AboutTerminal(profile: Profile) -> Element {
    rsx! {
        div {
            class: "about-terminal",
            div {
                class: "terminal-bar",
                span { class: "window-dot dot-red" }
                span { class: "window-dot dot-yellow" }
                span { class: "window-dot dot-green" }
            }
            pre {
                class: "terminal-body",
                code {
                    div {
                        class: "code-line",
                        span { class: "tok-kw", "const " }
                        span { class: "tok-prop", "aboutMe" }
                        span { class: "tok-plain", " = " }
                        span { class: "tok-brace", "{{" }
                    }
                    div {
                        class: "code-line indent-1",
                        span { class: "tok-key", "name" }
                        span { class: "tok-plain", ": " }
                        span { class: "tok-str", "'{profile.full_name}'" }
                        span { class: "tok-plain", "," }
                    }
                    div {
                        class: "code-line indent-1",
                        span { class: "tok-key", "role" }
                        span { class: "tok-plain", ": " }
                        span { class: "tok-str", "'{profile.role}'" }
                        span { class: "tok-plain", "," }
                    }
                    div {
                        class: "code-line indent-1",
                        span { class: "tok-key", "passion" }
                        span { class: "tok-plain", ": " }
                        span { class: "tok-str", "'{profile.passion}'" }
                        span { class: "tok-plain", "," }
                    }
                    div {
                        class: "code-line indent-1",
                        span { class: "tok-key", "education" }
                        span { class: "tok-plain", ": " }
                        span { class: "tok-str", "'{profile.degree}'" }
                    }
                    div {
                        class: "code-line",
                        span { class: "tok-brace", "}}" }
                        span { class: "tok-plain", ";" }
                    }
                }
            }
        }
    }
}
