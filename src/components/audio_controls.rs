use dioxus::prelude::*;

use crate::components::{AudioCommand, AudioUi, Icon};
use crate::playback::{NoticeView, ToggleIcon};

/// Banner inviting the visitor to enable background music after the browser blocked autoplay.
#[component]
pub fn AudioNoticeBanner() -> Element {
    let ui = use_context::<AudioUi>();
    let commands = use_coroutine_handle::<AudioCommand>();

    let view = *ui.notice.read();
    if view == NoticeView::Hidden {
        return rsx! {};
    }
    let class = if view == NoticeView::Fading {
        "audio-notice audio-notice--fading"
    } else {
        "audio-notice"
    };

    rsx! {
        div { id: "audioNotification", class, role: "status",
            div { class: "audio-notice__body",
                span {
                    Icon { name: "music".to_string(), class: "audio-notice__icon".to_string() }
                    strong { "Música de fondo disponible" }
                    " - Haz clic para activar"
                }
                button {
                    id: "enableAudioBtn",
                    r#type: "button",
                    class: "audio-notice__enable",
                    onclick: move |_| commands.send(AudioCommand::EnableFromNotice),
                    "▶️ Activar Música"
                }
                button {
                    r#type: "button",
                    class: "audio-notice__close",
                    aria_label: "Cerrar aviso",
                    onclick: move |_| commands.send(AudioCommand::DismissNotice),
                    Icon { name: "x".to_string(), class: "w-4 h-4".to_string() }
                }
            }
        }
    }
}

/// Fixed play/mute button in the bottom-right corner.
#[component]
pub fn AudioToggleButton() -> Element {
    let ui = use_context::<AudioUi>();
    let commands = use_coroutine_handle::<AudioCommand>();

    let (icon, label) = match *ui.icon.read() {
        ToggleIcon::Sound => ("volume", "Pausar música"),
        ToggleIcon::Muted => ("volume-x", "Reproducir música"),
    };

    rsx! {
        div { id: "audioControlsFloat",
            button {
                id: "audioToggleBtn",
                r#type: "button",
                title: "Pausar/Reproducir música",
                aria_label: label,
                onclick: move |_| commands.send(AudioCommand::Toggle),
                Icon { name: icon.to_string(), class: "audio-toggle__icon".to_string() }
            }
        }
    }
}
