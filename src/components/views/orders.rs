use crate::components::ValidatedForm;
use crate::effects::{FieldKind, FieldSpec};
use dioxus::prelude::*;

const ORDER_FIELDS: [FieldSpec; 6] = [
    FieldSpec {
        name: "nombre",
        label: "Nombre",
        kind: FieldKind::Text,
        required: true,
        placeholder: "¿A nombre de quién?",
        options: &[],
    },
    FieldSpec {
        name: "telefono",
        label: "Teléfono",
        kind: FieldKind::Tel,
        required: true,
        placeholder: "33 1234 5678",
        options: &[],
    },
    FieldSpec {
        name: "producto",
        label: "Producto",
        kind: FieldKind::Select,
        required: true,
        placeholder: "Elige un platillo",
        options: &["Orden de birria", "Tacos de birria", "Quesabirrias", "Consomé"],
    },
    FieldSpec {
        name: "cantidad",
        label: "Cantidad",
        kind: FieldKind::Number,
        required: true,
        placeholder: "1",
        options: &[],
    },
    FieldSpec {
        name: "fecha",
        label: "Fecha de recolección",
        kind: FieldKind::Date,
        required: true,
        placeholder: "",
        options: &[],
    },
    FieldSpec {
        name: "notas",
        label: "Notas",
        kind: FieldKind::TextArea,
        required: false,
        placeholder: "Sin cebolla, salsa aparte...",
        options: &[],
    },
];

#[component]
pub fn Orders() -> Element {
    rsx! {
        section { class: "section",
            div { class: "container",
                h1 { class: "section-title", "Pedidos para llevar" }
                p { "Llena el formulario y te llamamos para confirmar." }
                ValidatedForm {
                    id: "formulario-pedidos".to_string(),
                    fields: ORDER_FIELDS.to_vec(),
                    submit_label: "Enviar pedido".to_string(),
                }
            }
        }
    }
}
