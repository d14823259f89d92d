//! Defines the site's routes.

use dioxus::prelude::*;

use crate::components::views::{Contact, Gallery, Home, Menu, NotFound, Orders};
use crate::components::SiteShell;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum SiteRoute {
    #[layout(SiteShell)]
        #[route("/")]
        Home {},
        #[route("/menu")]
        Menu {},
        #[route("/galeria")]
        Gallery {},
        #[route("/contacto")]
        Contact {},
        #[route("/pedidos")]
        Orders {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Routes listed in the navbar, in display order.
pub fn nav_routes() -> [SiteRoute; 5] {
    [
        SiteRoute::Home {},
        SiteRoute::Menu {},
        SiteRoute::Gallery {},
        SiteRoute::Orders {},
        SiteRoute::Contact {},
    ]
}

pub fn route_label(route: &SiteRoute) -> &'static str {
    match route {
        SiteRoute::Home {} => "Inicio",
        SiteRoute::Menu {} => "Menú",
        SiteRoute::Gallery {} => "Galería",
        SiteRoute::Contact {} => "Contacto",
        SiteRoute::Orders {} => "Pedidos",
        SiteRoute::NotFound { .. } => "No encontrado",
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use dioxus_history::{History, MemoryHistory};

    use super::*;
    use crate::components::AudioUi;
    use crate::config::SiteConfig;

    #[test]
    fn paths_round_trip_through_the_router() {
        assert_eq!(SiteRoute::Gallery {}.to_string(), "/galeria");
        assert_eq!("/pedidos".parse::<SiteRoute>().ok(), Some(SiteRoute::Orders {}));
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route = "/carta/vieja".parse::<SiteRoute>().ok();
        assert!(matches!(route, Some(SiteRoute::NotFound { .. })));
    }

    #[component]
    fn RoutedAt(path: String) -> Element {
        use_context_provider(|| {
            Rc::new(MemoryHistory::with_initial_path(path.clone())) as Rc<dyn History>
        });
        use_context_provider(SiteConfig::default);
        use_context_provider(AudioUi::new);
        rsx! { Router::<SiteRoute> {} }
    }

    fn render_at(path: &str) -> String {
        let mut dom = VirtualDom::new_with_props(
            RoutedAt,
            RoutedAtProps {
                path: path.to_string(),
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn not_found_page_keeps_the_shell_and_audio_controls() {
        let html = render_at("/carta/vieja");
        assert!(html.contains("404"), "{html}");
        assert!(html.contains("site-footer"), "{html}");
        assert!(html.contains("audioControlsFloat"), "{html}");
    }

    #[test]
    fn pages_render_inside_the_shell() {
        let html = render_at("/galeria");
        assert!(html.contains("galeria-grid"), "{html}");
        assert!(html.contains("audioControlsFloat"), "{html}");
    }

    #[test]
    fn navbar_labels() {
        let labels: Vec<_> = nav_routes().iter().map(route_label).collect();
        assert_eq!(labels, ["Inicio", "Menú", "Galería", "Pedidos", "Contacto"]);
    }
}
