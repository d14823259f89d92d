use std::collections::HashMap;

use dioxus::prelude::*;

use crate::components::dom::sleep;
use crate::components::Icon;
use crate::config::SiteConfig;
use crate::effects::{validate_field, validate_form, FieldError, FieldKind, FieldSpec};

/// A form validated field-by-field on blur and as a whole on submit.
/// There is no backend: a valid submit shows a confirmation and resets.
#[component]
pub fn ValidatedForm(id: String, fields: Vec<FieldSpec>, submit_label: String) -> Element {
    let config = use_context::<SiteConfig>();
    let mut values = use_signal(HashMap::<&'static str, String>::new);
    let mut errors = use_signal(HashMap::<&'static str, FieldError>::new);
    let mut sent = use_signal(|| false);

    let success_ms = config.effects.form_success_ms;
    let specs = fields.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let failures = {
            let current = values.read();
            validate_form(&specs, |name| current.get(name).map(String::as_str))
        };
        let valid = failures.is_empty();
        errors.set(failures);
        if !valid {
            return;
        }

        sent.set(true);
        spawn(async move {
            sleep(success_ms).await;
            sent.set(false);
            values.set(HashMap::new());
        });
    };

    rsx! {
        form { id: "{id}", class: "site-form", novalidate: true, onsubmit: on_submit,
            for spec in fields.into_iter() {
                FormField {
                    key: "{spec.name}",
                    form_id: id.clone(),
                    spec,
                    value: values.read().get(spec.name).cloned().unwrap_or_default(),
                    error: errors.read().get(spec.name).copied(),
                    oninput: move |value: String| {
                        values.write().insert(spec.name, value);
                    },
                    onblur: move |_| {
                        let value = values.read().get(spec.name).cloned().unwrap_or_default();
                        match validate_field(spec.kind, spec.required, &value) {
                            Ok(()) => {
                                errors.write().remove(spec.name);
                            }
                            Err(err) => {
                                errors.write().insert(spec.name, err);
                            }
                        }
                    },
                }
            }
            button { r#type: "submit", class: "btn btn-primary", "{submit_label}" }
        }

        if sent() {
            div { class: "success-message", role: "status",
                Icon { name: "check".to_string(), class: "w-6 h-6".to_string() }
                strong { "¡Enviado correctamente!" }
                br {}
                "Nos pondremos en contacto contigo pronto."
            }
        }
    }
}

#[component]
fn FormField(
    form_id: String,
    spec: FieldSpec,
    value: String,
    error: Option<FieldError>,
    oninput: EventHandler<String>,
    onblur: EventHandler<()>,
) -> Element {
    let input_id = format!("{form_id}-{}", spec.name);
    let class = if error.is_some() {
        "form-control error"
    } else {
        "form-control"
    };

    rsx! {
        div { class: "form-group",
            label { r#for: "{input_id}",
                "{spec.label}"
                if spec.required {
                    span { class: "required", " *" }
                }
            }
            {match spec.kind {
                FieldKind::TextArea => rsx! {
                    textarea {
                        id: "{input_id}",
                        name: spec.name,
                        class,
                        rows: "4",
                        placeholder: spec.placeholder,
                        value: "{value}",
                        oninput: move |evt| oninput.call(evt.value()),
                        onblur: move |_| onblur.call(()),
                    }
                },
                FieldKind::Select => rsx! {
                    select {
                        id: "{input_id}",
                        name: spec.name,
                        class,
                        value: "{value}",
                        oninput: move |evt| oninput.call(evt.value()),
                        onblur: move |_| onblur.call(()),
                        option { value: "", "{spec.placeholder}" }
                        for choice in spec.options.iter() {
                            option { key: "{choice}", value: "{choice}", "{choice}" }
                        }
                    }
                },
                kind => rsx! {
                    input {
                        id: "{input_id}",
                        name: spec.name,
                        r#type: kind.input_type(),
                        class,
                        placeholder: spec.placeholder,
                        value: "{value}",
                        oninput: move |evt| oninput.call(evt.value()),
                        onblur: move |_| onblur.call(()),
                    }
                },
            }}
            if let Some(err) = error {
                div { class: "error-message", "{err}" }
            }
        }
    }
}
