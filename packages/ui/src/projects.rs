use dioxus::prelude::*;

use content::Project;

use crate::parallax::Parallax;
use crate::section_heading::SectionHeading;

const PROJECTS_CSS: Asset = asset!("/assets/styling/projects.css");

/// Gradient fills cycled across project thumbnails.
const THUMB_VARIANTS: [&str; 4] = ["thumb-moss", "thumb-pine", "thumb-fern", "thumb-sage"];

/// Project gallery fed by the showcase list.
#[component]
pub fn Projects() -> Element {
    let cards: Vec<(&'static str, Project)> = Project::showcase()
        .into_iter()
        .enumerate()
        .map(|(index, project)| (THUMB_VARIANTS[index % THUMB_VARIANTS.len()], project))
        .collect();

    rsx! {
        document::Stylesheet { href: PROJECTS_CSS }
        section {
            id: "projects",
            class: "projects",

            div {
                class: "projects-backdrop",
                Parallax { speed: -0.05, class: "projects-blob-anchor blob-upper",
                    div { class: "projects-blob projects-blob-bright" }
                }
                Parallax { speed: -0.08, class: "projects-blob-anchor blob-lower",
                    div { class: "projects-blob projects-blob-dim" }
                }
            }
            div { class: "section-divider" }

            div {
                class: "projects-inner",
                SectionHeading {
                    title: "Projects",
                    subtitle: Some("My Recent Work".to_string()),
                    description: Some(
                        "Here are some of the projects I've worked on. Will be updated soon!"
                            .to_string(),
                    ),
                }

                div {
                    class: "project-grid",
                    for (variant, project) in cards {
                        div {
                            class: "project-card",
                            div {
                                class: "project-thumb {variant}",
                                div { class: "project-thumb-shade" }
                            }
                            div {
                                class: "project-body",
                                h3 { "{project.title}" }
                                p { "{project.description}" }
                                div {
                                    class: "project-tech",
                                    for technology in project.technologies {
                                        span { class: "tech-badge", "{technology}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
