use dioxus::prelude::*;

mod components;
mod config;
mod effects;
mod error;
mod playback;
mod utils;

use components::{AudioUi, SiteRoute};
use config::SiteConfig;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(SiteConfig::load);
    use_context_provider(AudioUi::new);

    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Title { "Birriería Don Chuy" }
        document::Meta {
            name: "description",
            content: "Birria de res al estilo Jalisco. Menú, galería y pedidos para llevar.",
        }
        document::Meta { name: "theme-color", content: "#7a1f12" }

        document::Stylesheet { href: MAIN_CSS }

        Router::<SiteRoute> {}
    }
}
