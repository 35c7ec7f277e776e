use dioxus::prelude::*;

use content::{FocusArea, SkillCategory, SkillDomain};

use crate::icons::{LdDatabase, LdGlobe};
use crate::parallax::Parallax;
use crate::{Avatar, AvatarSize, Icon};

const SKILLS_CSS: Asset = asset!("/assets/styling/skills.css");

/// Skill section: category cards, development focus cards, and a summary
/// code window, each on its own parallax layer.
#[component]
pub fn Skills() -> Element {
    let categories: Vec<(f64, Element, &'static str, Vec<String>)> = SkillCategory::categories()
        .into_iter()
        .enumerate()
        .map(|(index, category)| {
            let icon = match category.domain {
                SkillDomain::Frontend => rsx! { Icon { icon: LdGlobe, width: 24, height: 24 } },
                SkillDomain::Backend => rsx! { Icon { icon: LdDatabase, width: 24, height: 24 } },
            };
            (
                0.02 + index as f64 * 0.01,
                icon,
                category.domain.label(),
                category.skills,
            )
        })
        .collect();

    let focus_areas: Vec<(f64, String, String, String)> = FocusArea::all()
        .into_iter()
        .enumerate()
        .map(|(index, area)| {
            let monogram = area.monogram();
            (
                0.03 + index as f64 * 0.01,
                monogram,
                area.name,
                area.description,
            )
        })
        .collect();

    let frontend_list = quoted_skill_list(SkillDomain::Frontend);
    let backend_list = quoted_skill_list(SkillDomain::Backend);

    rsx! {
        document::Stylesheet { href: SKILLS_CSS }
        section {
            id: "skills",
            class: "skills",

            div {
                class: "skills-backdrop",
                Parallax { speed: -0.05, class: "skills-blob-anchor blob-upper",
                    div { class: "skills-blob skills-blob-bright" }
                }
                Parallax { speed: -0.07, class: "skills-blob-anchor blob-lower",
                    div { class: "skills-blob skills-blob-dim" }
                }
            }
            div { class: "section-divider" }

            div {
                class: "skills-inner",
                div {
                    class: "skills-heading",
                    h2 {
                        "My "
                        span { class: "heading-accent", "Skills" }
                    }
                    p { "Here are some of my Skills" }
                }

                div {
                    class: "skill-categories",
                    for (speed, icon, label, skills) in categories {
                        Parallax { speed: speed, class: "skill-category-anchor",
                            div {
                                class: "skill-category",
                                div {
                                    class: "skill-category-head",
                                    span { class: "skill-category-icon", {icon} }
                                    h3 { "{label}" }
                                }
                                div {
                                    class: "skill-pills",
                                    for skill in skills {
                                        div { class: "skill-pill", "{skill}" }
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "focus-areas",
                    h3 { class: "focus-title", "Development Focus" }
                    div {
                        class: "focus-grid",
                        for (speed, monogram, name, description) in focus_areas {
                            Parallax { speed: speed, class: "focus-card-anchor",
                                div {
                                    class: "focus-card",
                                    Avatar { size: AvatarSize::Sm, initials: monogram }
                                    h4 { "{name}" }
                                    p { "{description}" }
                                }
                            }
                        }
                    }
                }

                Parallax { speed: 0.01,
                    div {
                        class: "skills-code",
                        div {
                            class: "skills-code-bar",
                            span { class: "window-dot dot-red" }
                            span { class: "window-dot dot-yellow" }
                            span { class: "window-dot dot-green" }
                            span { class: "skills-code-name", "skills.js" }
                        }
                        div {
                            class: "skills-code-body",
                            div {
                                class: "code-line",
                                span { class: "tok-comment", "// Core skills" }
                            }
                            div {
                                class: "code-line",
                                span { class: "tok-kw", "const " }
                                span { class: "tok-prop", "skills" }
                                span { class: "tok-plain", " = {{" }
                            }
                            div {
                                class: "code-line indent-1",
                                span { class: "tok-key", "frontend" }
                                span { class: "tok-plain", ": " }
                                span { class: "tok-str", "[{frontend_list}]" }
                                span { class: "tok-plain", "," }
                            }
                            div {
                                class: "code-line indent-1",
                                span { class: "tok-key", "backend" }
                                span { class: "tok-plain", ": " }
                                span { class: "tok-str", "[{backend_list}]" }
                            }
                            div {
                                class: "code-line",
                                span { class: "tok-plain", "}};" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Formats a domain's skills the way they would appear in a source listing,
/// e.g. `'HTML', 'CSS', 'JavaScript'`.
fn quoted_skill_list(domain: SkillDomain) -> String {
    SkillCategory::categories()
        .iter()
        .find(|category| category.domain == domain)
        .map(|category| {
            category
                .skills
                .iter()
                .map(|skill| format!("'{skill}'"))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_skill_list_formats_like_source() {
        assert_eq!(
            quoted_skill_list(SkillDomain::Frontend),
            "'HTML', 'CSS', 'JavaScript'"
        );
        assert_eq!(
            quoted_skill_list(SkillDomain::Backend),
            "'PHP', 'Python', 'MySQL'"
        );
    }
}
