use dioxus::prelude::*;

const SECTION_HEADING_CSS: Asset = asset!("/assets/styling/section_heading.css");

/// Horizontal alignment of a [`SectionHeading`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Titled intro block for a page section: optional kicker line, underlined
/// title, optional description paragraph.
#[component]
pub fn SectionHeading(
    title: String,
    #[props(default)] subtitle: Option<String>,
    #[props(default)] description: Option<String>,
    #[props(default)] align: HeadingAlign,
) -> Element {
    let align_class = match align {
        HeadingAlign::Left => "heading-left",
        HeadingAlign::Center => "heading-center",
        HeadingAlign::Right => "heading-right",
    };

    rsx! {
        document::Stylesheet { href: SECTION_HEADING_CSS }
        div {
            class: "section-heading {align_class}",
            if let Some(ref subtitle) = subtitle {
                span { class: "section-heading-subtitle", "{subtitle}" }
            }
            h2 {
                class: "section-heading-title",
                "{title}"
                span { class: "section-heading-underline" }
            }
            if let Some(ref description) = description {
                p { class: "section-heading-description", "{description}" }
            }
        }
    }
}
