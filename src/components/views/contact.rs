use crate::components::ValidatedForm;
use crate::effects::{FieldKind, FieldSpec};
use dioxus::prelude::*;

const CONTACT_FIELDS: [FieldSpec; 4] = [
    FieldSpec {
        name: "nombre",
        label: "Nombre",
        kind: FieldKind::Text,
        required: true,
        placeholder: "Tu nombre",
        options: &[],
    },
    FieldSpec {
        name: "email",
        label: "Email",
        kind: FieldKind::Email,
        required: true,
        placeholder: "tu@correo.com",
        options: &[],
    },
    FieldSpec {
        name: "telefono",
        label: "Teléfono",
        kind: FieldKind::Tel,
        required: false,
        placeholder: "33 1234 5678",
        options: &[],
    },
    FieldSpec {
        name: "mensaje",
        label: "Mensaje",
        kind: FieldKind::TextArea,
        required: true,
        placeholder: "¿En qué te podemos ayudar?",
        options: &[],
    },
];

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { class: "section",
            div { class: "container contact-grid",
                div {
                    h1 { class: "section-title", "Contacto" }
                    p { "Escríbenos para eventos, pedidos grandes o cualquier duda." }
                }
                ValidatedForm {
                    id: "contacto-form".to_string(),
                    fields: CONTACT_FIELDS.to_vec(),
                    submit_label: "Enviar mensaje".to_string(),
                }
            }
        }
    }
}
