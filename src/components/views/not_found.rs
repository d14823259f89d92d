use crate::components::app_view::SiteRoute;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        section { class: "section not-found",
            div { class: "container",
                h1 { "404" }
                p { "No encontramos /{path}." }
                Link { to: SiteRoute::Home {}, class: "btn btn-primary", "Volver al inicio" }
            }
        }
    }
}
