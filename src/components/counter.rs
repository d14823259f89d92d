use dioxus::prelude::*;

use crate::components::dom::sleep;
use crate::config::SiteConfig;
use crate::effects::{format_count, CounterAnimation, CounterFrame};
#[cfg(target_arch = "wasm32")]
use crate::components::dom::VisibilityObserver;
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};

/// A number that counts up from zero the first time it is mostly on screen.
#[component]
pub fn AnimatedCounter(target: u64, label: String, #[props(default)] suffix: String) -> Element {
    let config = use_context::<SiteConfig>();
    let mut shown = use_signal(|| 0u64);
    #[cfg(target_arch = "wasm32")]
    let mut visible = use_signal(|| false);
    // Off the web there is nothing to observe, so count straight away.
    #[cfg(not(target_arch = "wasm32"))]
    let visible = use_signal(|| true);
    let mut started = use_signal(|| false);
    #[cfg(target_arch = "wasm32")]
    let mut observer = use_signal(|| None::<VisibilityObserver>);

    let duration_ms = config.effects.counter_duration_ms;
    let tick_ms = config.effects.counter_tick_ms;
    use_effect(move || {
        if !visible() || *started.peek() {
            return;
        }
        started.set(true);
        spawn(async move {
            let mut animation = CounterAnimation::new(target, duration_ms, tick_ms);
            loop {
                sleep(tick_ms).await;
                let frame = animation.tick();
                shown.set(frame.value());
                if let CounterFrame::Done(_) = frame {
                    break;
                }
            }
        });
    });

    let _threshold = config.effects.counter_threshold;
    let on_mounted = move |_evt: MountedEvent| {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(element) = _evt.data().downcast::<web_sys::Element>().cloned() else {
                return;
            };
            let runtime = Runtime::current();
            let watcher =
                VisibilityObserver::observe_once(&[element], _threshold, None, move |_| {
                    let _guard = RuntimeGuard::new(runtime.clone());
                    visible.set(true);
                });
            match watcher {
                Ok(watcher) => observer.set(Some(watcher)),
                Err(err) => {
                    dioxus::logger::tracing::warn!("counter observer failed: {err}");
                    visible.set(true);
                }
            }
        }
    };

    rsx! {
        div { class: "counter-item fade-on-scroll",
            span {
                class: "counter",
                "data-counter": "{target}",
                onmounted: on_mounted,
                "{format_count(shown())}{suffix}"
            }
            p { class: "counter-label", "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Stats() -> Element {
        use_context_provider(SiteConfig::default);
        rsx! {
            AnimatedCounter { target: 1500, label: "Tacos".to_string(), suffix: "+".to_string() }
        }
    }

    #[test]
    fn renders_from_zero_with_its_target_attribute() {
        let mut dom = VirtualDom::new(Stats);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("data-counter=\"1500\""), "{html}");
        assert!(html.contains("0+"), "{html}");
        assert!(html.contains("Tacos"), "{html}");
    }
}
