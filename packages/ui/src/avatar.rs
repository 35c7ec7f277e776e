use dioxus::prelude::*;

const AVATAR_CSS: Asset = asset!("/assets/styling/avatar.css");

/// Render size of the avatar medallion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl AvatarSize {
    fn class(self) -> &'static str {
        match self {
            AvatarSize::Sm => "avatar-sm",
            AvatarSize::Md => "avatar-md",
            AvatarSize::Lg => "avatar-lg",
            AvatarSize::Xl => "avatar-xl",
        }
    }
}

/// Monogram medallion with a pulsing glow and gradient ring, used for the
/// brand mark in the header and the portrait in the about section. Shows
/// `image_url` when given, otherwise the initials.
#[component]
pub fn Avatar(
    #[props(default)] size: AvatarSize,
    #[props(default = "AC".to_string())] initials: String,
    #[props(default)] image_url: Option<String>,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let size_class = size.class();

    rsx! {
        document::Stylesheet { href: AVATAR_CSS }
        div {
            class: "avatar {size_class} {class}",
            div { class: "avatar-glow" }
            div {
                class: "avatar-ring",
                div {
                    class: "avatar-face",
                    if let Some(ref url) = image_url {
                        img { class: "avatar-photo", src: "{url}", alt: "{initials}" }
                    } else {
                        span { class: "avatar-initials", "{initials}" }
                    }
                }
            }
        }
    }
}
