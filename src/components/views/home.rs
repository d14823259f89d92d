use crate::components::app_view::SiteRoute;
use crate::components::{AnimatedCounter, LAZY_PLACEHOLDER};
use crate::effects::parse_counter_target;
use dioxus::prelude::*;

/// Figures shown in the stats strip, written the way they read on the page.
const HOME_STATS: [(&str, &str); 4] = [
    ("37+", "Años de tradición"),
    ("1500", "Tacos por fin de semana"),
    ("12", "Horas de cocción"),
    ("4800+", "Clientes felices al mes"),
];

const HOME_HIGHLIGHTS: [(&str, &str, &str); 3] = [
    (
        "/img/birria-plato.jpg",
        "Birria tradicional",
        "Res cocida lentamente en adobo de chiles secos, servida con su consomé.",
    ),
    (
        "/img/quesabirria.jpg",
        "Quesabirrias",
        "Tortilla dorada en la grasa del consomé, rellena de queso y birria.",
    ),
    (
        "/img/consome.jpg",
        "Consomé",
        "Caldo concentrado con cebolla, cilantro y limón para acompañar.",
    ),
];

/// Split a stat like `"37+"` into the number to count to and the text after it.
fn split_stat(raw: &str) -> (u64, String) {
    let target = parse_counter_target(raw).unwrap_or(0);
    let suffix = raw
        .trim_start()
        .trim_start_matches(|c: char| c.is_ascii_digit())
        .to_string();
    (target, suffix)
}

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "hero-background", "data-parallax": "0.4" }
            div { class: "container hero-content",
                h1 { class: "hero-title", "Birria de res al estilo Jalisco" }
                p { class: "hero-subtitle", "Receta familiar, leña y paciencia desde 1987." }
                div { class: "hero-actions",
                    Link { to: SiteRoute::Menu {}, class: "btn btn-primary", "Ver menú" }
                    a { href: "#especialidades", class: "btn btn-outline", "Especialidades" }
                }
            }
        }

        section { id: "especialidades", class: "section",
            div { class: "container",
                h2 { class: "section-title fade-on-scroll", "Nuestras especialidades" }
                div { class: "card-grid",
                    for (src , title , body) in HOME_HIGHLIGHTS {
                        article { key: "{title}", class: "card fade-on-scroll",
                            img {
                                src: LAZY_PLACEHOLDER,
                                "data-src": src,
                                alt: title,
                                loading: "lazy",
                            }
                            h3 { "{title}" }
                            p { "{body}" }
                        }
                    }
                }
            }
        }

        section { class: "section section-stats",
            div { class: "container stats-grid",
                for (raw , label) in HOME_STATS {
                    {
                        let (target, suffix) = split_stat(raw);
                        rsx! {
                            AnimatedCounter {
                                key: "{label}",
                                target,
                                label: label.to_string(),
                                suffix,
                            }
                        }
                    }
                }
            }
        }

        section { class: "section section-cta fade-on-scroll",
            div { class: "container",
                h2 { "¿Se te antojó?" }
                p { "Haz tu pedido para llevar y pásalo a recoger caliente." }
                Link { to: SiteRoute::Orders {}, class: "btn btn-primary", "Hacer pedido" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_split_into_target_and_suffix() {
        assert_eq!(split_stat("37+"), (37, "+".to_string()));
        assert_eq!(split_stat("1500"), (1500, String::new()));
        assert_eq!(split_stat("mucho"), (0, "mucho".to_string()));
    }
}
