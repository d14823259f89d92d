use dioxus::prelude::*;

use crate::components::app_view::{nav_routes, route_label, SiteRoute};
use crate::components::{AudioController, Icon, PageEffects};

/// Layout shared by every page. The audio controller lives here so it is
/// mounted once and survives route changes.
#[component]
pub fn SiteShell() -> Element {
    let route = use_route::<SiteRoute>();
    let scrolled = use_signal(|| false);
    let mut menu_open = use_signal(|| false);

    let nav_class = if scrolled() { "navbar scrolled" } else { "navbar" };
    let links_class = if menu_open() {
        "nav-links nav-links--open"
    } else {
        "nav-links"
    };

    rsx! {
        nav { class: nav_class,
            div { class: "container navbar-inner",
                Link { to: SiteRoute::Home {}, class: "navbar-brand", "Birriería Don Chuy" }
                button {
                    r#type: "button",
                    class: "mobile-menu-toggle",
                    aria_label: "Menú",
                    aria_expanded: "{menu_open}",
                    onclick: move |_| menu_open.toggle(),
                    Icon { name: "menu".to_string(), class: "w-6 h-6".to_string() }
                }
                ul { class: links_class,
                    for target in nav_routes() {
                        li { key: "{target}",
                            Link {
                                class: nav_link_class(target == route),
                                to: target.clone(),
                                onclick: move |_| menu_open.set(false),
                                "{route_label(&target)}"
                            }
                        }
                    }
                }
            }
        }

        main { class: "site-main", Outlet::<SiteRoute> {} }

        footer { class: "site-footer",
            div { class: "container footer-grid",
                div {
                    h4 { "Birriería Don Chuy" }
                    p { "Birria de res al estilo Jalisco desde 1987." }
                }
                div {
                    p {
                        Icon { name: "map-pin".to_string(), class: "w-4 h-4".to_string() }
                        " Av. Hidalgo 214, Guadalajara, Jal."
                    }
                    p {
                        Icon { name: "phone".to_string(), class: "w-4 h-4".to_string() }
                        " 33 1234 5678"
                    }
                    p {
                        Icon { name: "clock".to_string(), class: "w-4 h-4".to_string() }
                        " Martes a domingo, 8:00 a 16:00"
                    }
                }
            }
        }

        AudioController {}
        PageEffects { key: "{route}", scrolled }
    }
}

fn nav_link_class(active: bool) -> String {
    if active {
        "nav-link active".to_string()
    } else {
        "nav-link".to_string()
    }
}
