//! Composición de claves externas.
//!
//! Prioridad: clave explícita (tal cual) > `prefijo.campo` > `Clase.campo`
//! con el nombre totalmente calificado de la clase que declara el campo.

mod table;

pub use table::{describe, describe_class, AttributeBinding};

use log::warn;

use crate::constants::KEY_SEPARATOR;
use crate::model::FieldDescriptor;

/// Clave bajo la que `field` se lee/escribe en el mapa de parámetros.
///
/// `owner_prefix` es el prefijo de la clase en tiempo de ejecución del objeto
/// que contiene el campo (vacío si no tiene).
pub fn key_of(field: &FieldDescriptor, owner_prefix: &str) -> String {
    if let Some(explicit) = field.explicit_key() {
        if !owner_prefix.is_empty() {
            // La clave explícita gana; el prefijo se ignora.
            warn!("attribute {}.{} declares explicit key '{}' inside prefixed class '{}'; prefix ignored",
                  field.declaring_class(),
                  field.name(),
                  explicit,
                  owner_prefix);
        }
        return explicit.to_string();
    }
    if !owner_prefix.is_empty() {
        return format!("{owner_prefix}{KEY_SEPARATOR}{}", field.name());
    }
    format!("{}{KEY_SEPARATOR}{}", field.declaring_class(), field.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AttributeSpec, BindingDirection};

    fn field(key: Option<&'static str>) -> FieldDescriptor {
        let spec = match key {
            Some(k) => AttributeSpec::with_key(BindingDirection::In, k),
            None => AttributeSpec::new(BindingDirection::In),
        };
        FieldDescriptor::new("org::demo::TestImpl", "in_field", spec)
    }

    #[test]
    fn explicit_key_is_verbatim() {
        assert_eq!(key_of(&field(Some("inField")), ""), "inField");
    }

    #[test]
    fn explicit_key_wins_over_prefix() {
        assert_eq!(key_of(&field(Some("inField")), "prefix"), "inField");
    }

    #[test]
    fn prefix_is_joined_with_field_name() {
        assert_eq!(key_of(&field(None), "prefix"), "prefix.in_field");
    }

    #[test]
    fn fallback_uses_declaring_class_name() {
        assert_eq!(key_of(&field(None), ""), "org::demo::TestImpl.in_field");
    }

    #[test]
    fn empty_explicit_key_counts_as_absent() {
        assert_eq!(key_of(&field(Some("")), "p"), "p.in_field");
    }
}
