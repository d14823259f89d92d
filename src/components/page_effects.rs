// Page-level scroll glue: navbar state, parallax layers, smooth in-page anchors,
// fade-ins and lazy images. Mounted per route so each page gets fresh observers.
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::components::dom::{query_all, Listener, VisibilityObserver};
#[cfg(target_arch = "wasm32")]
use crate::config::EffectsConfig;
use crate::config::SiteConfig;
#[cfg(target_arch = "wasm32")]
use crate::effects::{anchor_target, navbar_is_scrolled, parallax_speed, parallax_transform};
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::warn;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Everything the effects keep alive; dropping it detaches them.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
struct Attached {
    _listeners: Vec<Listener>,
    _observers: Vec<VisibilityObserver>,
}

#[component]
pub fn PageEffects(scrolled: Signal<bool>) -> Element {
    let config = use_context::<SiteConfig>();

    #[cfg(target_arch = "wasm32")]
    {
        let mut attached = use_signal(|| None::<Attached>);
        let effects = config.effects.clone();
        use_effect(move || {
            if attached.peek().is_some() {
                return;
            }
            let runtime = Runtime::current();
            attached.set(Some(attach(&effects, scrolled, runtime)));
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (config, scrolled);

    rsx! {}
}

#[cfg(target_arch = "wasm32")]
fn attach(
    effects: &EffectsConfig,
    scrolled: Signal<bool>,
    runtime: std::rc::Rc<Runtime>,
) -> Attached {
    let mut attached = Attached::default();
    let Some(win) = window() else {
        return attached;
    };

    let threshold = effects.navbar_scroll_threshold;
    let default_speed = effects.default_parallax_speed;
    let on_scroll = {
        let win = win.clone();
        let mut scrolled = scrolled;
        move |_: web_sys::Event| {
            let scroll_y = win.page_y_offset().unwrap_or(0.0);
            let is_scrolled = navbar_is_scrolled(scroll_y, threshold);
            {
                let _guard = RuntimeGuard::new(runtime.clone());
                if *scrolled.peek() != is_scrolled {
                    scrolled.set(is_scrolled);
                }
            }
            apply_parallax(scroll_y, default_speed);
        }
    };
    push_listener(&mut attached, Listener::new(&win, "scroll", on_scroll));

    if let Some(document) = win.document() {
        push_listener(
            &mut attached,
            Listener::new(&document, "click", smooth_scroll_to_anchor),
        );
    }

    let fade_targets = query_all(".fade-on-scroll");
    if !fade_targets.is_empty() {
        push_observer(
            &mut attached,
            VisibilityObserver::observe_once(
                &fade_targets,
                effects.fade_threshold,
                Some(effects.fade_root_margin.as_str()),
                |el| {
                    let _ = el.class_list().add_1("animate-fade-in-up");
                },
            ),
        );
    }

    let lazy_images = query_all("img[loading=\"lazy\"][data-src]");
    if !lazy_images.is_empty() {
        push_observer(
            &mut attached,
            VisibilityObserver::observe_once(&lazy_images, 0.0, None, |el| {
                if let Some(src) = el.get_attribute("data-src") {
                    let _ = el.set_attribute("src", &src);
                }
                let _ = el.class_list().add_1("loaded");
            }),
        );
    }

    apply_parallax(win.page_y_offset().unwrap_or(0.0), default_speed);
    attached
}

#[cfg(target_arch = "wasm32")]
fn apply_parallax(scroll_y: f64, default_speed: f64) {
    for el in query_all("[data-parallax]") {
        let Ok(el) = el.dyn_into::<HtmlElement>() else {
            continue;
        };
        let speed = parallax_speed(el.get_attribute("data-parallax").as_deref(), default_speed);
        let _ = el
            .style()
            .set_property("transform", &parallax_transform(scroll_y, speed));
    }
}

#[cfg(target_arch = "wasm32")]
fn smooth_scroll_to_anchor(event: web_sys::Event) {
    let Some(link) = event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten())
    else {
        return;
    };
    let Some(href) = link.get_attribute("href") else {
        return;
    };
    let Some(id) = anchor_target(&href) else {
        return;
    };
    let Some(target) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };

    event.prevent_default();
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(target_arch = "wasm32")]
fn push_listener(attached: &mut Attached, listener: crate::error::Result<Listener>) {
    match listener {
        Ok(listener) => attached._listeners.push(listener),
        Err(err) => warn!("page effect listener not attached: {err}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn push_observer(attached: &mut Attached, observer: crate::error::Result<VisibilityObserver>) {
    match observer {
        Ok(observer) => attached._observers.push(observer),
        Err(err) => warn!("page effect observer not attached: {err}"),
    }
}
