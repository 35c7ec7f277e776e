use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use content::Section;

use crate::icons::{LdMenu, LdX};
use crate::scroll::ScrollSubscription;
use crate::{Avatar, AvatarSize, Icon};

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");

/// Scroll depth past which the bar swaps to its solid backdrop.
const SCROLL_THRESHOLD: f64 = 50.0;

/// Fixed top bar: brand medallion, section links, and a slide-in drawer for
/// narrow screens.
#[component]
pub fn Header() -> Element {
    let mut open = use_signal(|| false);
    let mut scrolled = use_signal(|| false);
    let subscription = use_hook(|| Rc::new(RefCell::new(Option::<ScrollSubscription>::None)));

    use_effect({
        let subscription = subscription.clone();
        move || {
            let handler = move |position: f64| {
                let past = position > SCROLL_THRESHOLD;
                if *scrolled.peek() != past {
                    scrolled.set(past);
                }
            };
            *subscription.borrow_mut() = ScrollSubscription::attach(handler);
        }
    });

    use_drop({
        let subscription = subscription.clone();
        move || {
            subscription.borrow_mut().take();
        }
    });

    let bar_class = if scrolled() {
        "header header-scrolled"
    } else {
        "header"
    };
    let drawer_class = if open() {
        "header-drawer drawer-open"
    } else {
        "header-drawer"
    };

    rsx! {
        document::Stylesheet { href: HEADER_CSS }
        header {
            class: "{bar_class}",
            div {
                class: "header-inner",
                a {
                    class: "header-brand",
                    href: "#home",
                    Avatar { size: AvatarSize::Sm }
                }

                nav {
                    class: "header-nav",
                    for section in Section::ALL {
                        a {
                            class: "header-link",
                            href: section.href(),
                            {section.label()}
                        }
                    }
                }

                button {
                    class: "header-menu-toggle",
                    onclick: move |_| open.set(!open()),
                    if open() {
                        Icon { icon: LdX, width: 24, height: 24 }
                    } else {
                        Icon { icon: LdMenu, width: 24, height: 24 }
                    }
                }
            }

            div {
                class: "{drawer_class}",
                nav {
                    class: "drawer-nav",
                    for section in Section::ALL {
                        a {
                            class: "drawer-link",
                            href: section.href(),
                            onclick: move |_| open.set(false),
                            {section.label()}
                        }
                    }
                }
            }
        }
    }
}
