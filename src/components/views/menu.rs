use crate::utils::slugify;
use dioxus::prelude::*;
use once_cell::sync::Lazy;

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub name: &'static str,
    pub description: &'static str,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuSection {
    pub title: &'static str,
    pub anchor: String,
    pub items: Vec<MenuItem>,
}

fn section(title: &'static str, items: &[(&'static str, &'static str, u32)]) -> MenuSection {
    MenuSection {
        title,
        anchor: slugify(title),
        items: items
            .iter()
            .map(|&(name, description, price)| MenuItem {
                name,
                description,
                price,
            })
            .collect(),
    }
}

static MENU: Lazy<Vec<MenuSection>> = Lazy::new(|| {
    vec![
        section(
            "Birria y Consomé",
            &[
                ("Orden de birria", "Medio kilo con tortillas hechas a mano.", 185),
                ("Plato de birria", "Con consomé, cebolla y cilantro.", 140),
                ("Consomé chico", "Para acompañar o para el recalentado.", 45),
            ],
        ),
        section(
            "Tacos",
            &[
                ("Taco de birria", "Tortilla de maíz bañada en consomé.", 28),
                ("Quesabirria", "Con queso Oaxaca dorado a la plancha.", 38),
                ("Taco dorado", "Frito y crujiente, con salsa de la casa.", 30),
            ],
        ),
        section(
            "Bebidas",
            &[
                ("Agua de jamaica", "Preparada en casa, vaso de medio litro.", 30),
                ("Horchata", "De arroz con canela.", 30),
                ("Refresco de vidrio", "Sabores surtidos.", 28),
            ],
        ),
    ]
});

pub fn menu_sections() -> &'static [MenuSection] {
    &MENU
}

#[component]
pub fn Menu() -> Element {
    let sections = menu_sections();

    rsx! {
        section { class: "section",
            div { class: "container",
                h1 { class: "section-title", "Menú" }
                nav { class: "menu-index",
                    for s in sections.iter() {
                        a { key: "{s.anchor}", href: "#{s.anchor}", class: "menu-index__link", "{s.title}" }
                    }
                }
                for s in sections.iter() {
                    div { key: "{s.anchor}", id: "{s.anchor}", class: "menu-section fade-on-scroll",
                        h2 { "{s.title}" }
                        ul { class: "menu-items",
                            for item in s.items.iter() {
                                li { key: "{item.name}", class: "menu-item",
                                    div {
                                        h3 { "{item.name}" }
                                        p { "{item.description}" }
                                    }
                                    span { class: "menu-price", "${item.price}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_unique_ascii_slugs() {
        let anchors: Vec<_> = menu_sections().iter().map(|s| s.anchor.as_str()).collect();
        assert_eq!(anchors, ["birria-y-consome", "tacos", "bebidas"]);
    }

    #[test]
    fn every_section_has_items() {
        assert!(menu_sections().iter().all(|s| !s.items.is_empty()));
    }
}
