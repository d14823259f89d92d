use std::collections::HashMap;

/// Input type of a form field, as far as validation cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Number,
    Date,
    Select,
    TextArea,
}

impl FieldKind {
    /// Value for the `type` attribute of an `<input>`.
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Text | FieldKind::Select | FieldKind::TextArea => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Este campo es requerido")]
    Required,
    #[error("Por favor ingresa un email válido")]
    InvalidEmail,
    #[error("Por favor ingresa un teléfono válido (10 dígitos)")]
    InvalidPhone,
}

/// Static description of one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
    /// Choices for [`FieldKind::Select`].
    pub options: &'static [&'static str],
}

/// Validate every field, returning the failures by field name.
pub fn validate_form<'a>(
    fields: &[FieldSpec],
    value_of: impl Fn(&str) -> Option<&'a str>,
) -> HashMap<&'static str, FieldError> {
    fields
        .iter()
        .filter_map(|spec| {
            let value = value_of(spec.name).unwrap_or("");
            validate_field(spec.kind, spec.required, value)
                .err()
                .map(|err| (spec.name, err))
        })
        .collect()
}

/// Check one field. Surrounding whitespace is ignored; optional empty fields pass.
pub fn validate_field(kind: FieldKind, required: bool, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return if required {
            Err(FieldError::Required)
        } else {
            Ok(())
        };
    }

    match kind {
        FieldKind::Email if !is_email(value) => Err(FieldError::InvalidEmail),
        FieldKind::Tel if !is_phone(value) => Err(FieldError::InvalidPhone),
        _ => Ok(()),
    }
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot inside the domain.
pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, ch)| ch == '.' && i > 0 && i + 1 < domain.len())
}

/// Exactly ten digits once separators and other non-digits are dropped.
pub fn is_phone(value: &str) -> bool {
    value.chars().filter(char::is_ascii_digit).count() == 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_must_not_be_blank() {
        assert_eq!(
            validate_field(FieldKind::Text, true, "   "),
            Err(FieldError::Required)
        );
        assert_eq!(validate_field(FieldKind::Email, false, ""), Ok(()));
        assert_eq!(validate_field(FieldKind::Text, true, " Chuy "), Ok(()));
    }

    #[test]
    fn email_shape() {
        assert!(is_email("chuy@birria.mx"));
        assert!(is_email("a.b@c.d.e"));
        assert!(!is_email("chuy@birria"));
        assert!(!is_email("chuy@.mx"));
        assert!(!is_email("chuy@birria."));
        assert!(!is_email("@birria.mx"));
        assert!(!is_email("chuy@@birria.mx"));
        assert!(!is_email("chu y@birria.mx"));
        assert_eq!(
            validate_field(FieldKind::Email, true, "no-es-email"),
            Err(FieldError::InvalidEmail)
        );
    }

    #[test]
    fn phone_needs_ten_digits() {
        assert!(is_phone("33 1234 5678"));
        assert!(is_phone("(331) 234-5678"));
        assert!(!is_phone("12345"));
        assert!(!is_phone("+52 33 1234 5678"));
        assert_eq!(
            validate_field(FieldKind::Tel, false, "555"),
            Err(FieldError::InvalidPhone)
        );
    }

    const ORDER: [FieldSpec; 3] = [
        FieldSpec {
            name: "nombre",
            label: "Nombre",
            kind: FieldKind::Text,
            required: true,
            placeholder: "",
            options: &[],
        },
        FieldSpec {
            name: "telefono",
            label: "Teléfono",
            kind: FieldKind::Tel,
            required: true,
            placeholder: "",
            options: &[],
        },
        FieldSpec {
            name: "notas",
            label: "Notas",
            kind: FieldKind::TextArea,
            required: false,
            placeholder: "",
            options: &[],
        },
    ];

    #[test]
    fn form_collects_every_failing_field() {
        let values: HashMap<&str, &str> = [("telefono", "123")].into_iter().collect();
        let errors = validate_form(&ORDER, |name| values.get(name).copied());

        assert_eq!(errors.len(), 2);
        assert_eq!(errors["nombre"], FieldError::Required);
        assert_eq!(errors["telefono"], FieldError::InvalidPhone);
    }

    #[test]
    fn complete_form_passes() {
        let values: HashMap<&str, &str> = [("nombre", "Chuy"), ("telefono", "3312345678")]
            .into_iter()
            .collect();
        assert!(validate_form(&ORDER, |name| values.get(name).copied()).is_empty());
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(FieldError::Required.to_string(), "Este campo es requerido");
    }
}
