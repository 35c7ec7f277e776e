use dioxus::prelude::*;

use ui::{About, Contact, Footer, Header, Hero, Projects, Skills, ToastProvider};

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Link {
            rel: "stylesheet",
            href: "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&family=JetBrains+Mono&family=Playfair+Display:wght@600;700&display=swap",
        }

        ToastProvider {
            Header {}
            main {
                Hero {}
                About {}
                Skills {}
                Projects {}
                Contact {}
            }
            Footer {}
        }
    }
}
