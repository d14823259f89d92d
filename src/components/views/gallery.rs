use crate::components::{GalleryImage, LightboxGallery};
use dioxus::prelude::*;

const GALLERY: [GalleryImage; 6] = [
    GalleryImage {
        src: "/img/galeria/olla.jpg",
        alt: "Olla de birria sobre leña",
        caption: "La olla de cada madrugada",
    },
    GalleryImage {
        src: "/img/galeria/tacos.jpg",
        alt: "Tacos de birria con consomé",
        caption: "Tacos bañados en consomé",
    },
    GalleryImage {
        src: "/img/galeria/quesabirria.jpg",
        alt: "Quesabirrias en la plancha",
        caption: "Quesabirrias doradas",
    },
    GalleryImage {
        src: "/img/galeria/salsas.jpg",
        alt: "Salsas de la casa",
        caption: "Salsas de la casa",
    },
    GalleryImage {
        src: "/img/galeria/local.jpg",
        alt: "Fachada del local",
        caption: "Nuestro local en Guadalajara",
    },
    GalleryImage {
        src: "/img/galeria/familia.jpg",
        alt: "Familia cocinando",
        caption: "Tres generaciones en la cocina",
    },
];

#[component]
pub fn Gallery() -> Element {
    rsx! {
        section { class: "section",
            div { class: "container",
                h1 { class: "section-title", "Galería" }
                LightboxGallery { images: GALLERY.to_vec() }
            }
        }
    }
}
