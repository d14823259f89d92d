use dioxus::prelude::*;

use crate::components::dom::set_body_scroll_locked;
use crate::components::Icon;
#[cfg(target_arch = "wasm32")]
use crate::components::dom::Listener;
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Transparent 1x1 gif shown until a lazy image scrolls into view.
pub const LAZY_PLACEHOLDER: &str =
    "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

/// Keys that close an open lightbox.
pub fn closes_lightbox(key: &str) -> bool {
    key == "Escape"
}

/// Image grid; clicking an image opens it full screen.
#[component]
pub fn LightboxGallery(images: Vec<GalleryImage>) -> Element {
    let mut open = use_signal(|| None::<GalleryImage>);

    use_effect(move || {
        set_body_scroll_locked(open().is_some());
    });
    use_drop(|| set_body_scroll_locked(false));

    #[cfg(target_arch = "wasm32")]
    use_hook(move || {
        let runtime = Runtime::current();
        let document = web_sys::window().and_then(|w| w.document())?;
        Listener::new(&document, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            let _guard = RuntimeGuard::new(runtime.clone());
            if closes_lightbox(&event.key()) && open.peek().is_some() {
                open.set(None);
            }
        })
        .ok()
        .map(std::rc::Rc::new)
    });

    rsx! {
        div { class: "galeria-grid",
            for image in images.into_iter() {
                figure {
                    key: "{image.src}",
                    class: "galeria-item fade-on-scroll",
                    "data-lightbox": "galeria",
                    onclick: move |_| open.set(Some(image)),
                    img {
                        src: LAZY_PLACEHOLDER,
                        "data-src": image.src,
                        alt: image.alt,
                        loading: "lazy",
                    }
                    figcaption { "{image.caption}" }
                }
            }
        }

        if let Some(image) = open() {
            div {
                id: "lightbox",
                class: "lightbox-overlay",
                onclick: move |_| open.set(None),
                img {
                    src: image.src,
                    alt: image.alt,
                    onclick: move |evt| evt.stop_propagation(),
                }
                button {
                    r#type: "button",
                    class: "lightbox-close",
                    aria_label: "Cerrar",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        open.set(None);
                    },
                    Icon { name: "x".to_string(), class: "w-6 h-6".to_string() }
                }
            }
        }
    }
}
