//! Errores del binder.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum BindError {
    /// La clase en tiempo de ejecución de la raíz no lleva el marcador bindable.
    #[error("class {class} is not bindable")]
    NotBindable { class: &'static str },
    /// El valor del mapa no es asignable directamente al tipo del campo.
    #[error("value for key '{key}' is not assignable to {field}: {reason}")]
    ValueMismatch { key: String, field: String, reason: String },
    /// No se pudo exportar el valor del campo como valor opaco.
    #[error("cannot export {field}: {reason}")]
    Encode { field: String, reason: String },
    /// Un descriptor llegó a un tipo que no lo declara (metadatos inconsistentes).
    #[error("class {class} has no attribute {field}")]
    UnknownField { class: &'static str, field: &'static str },
}

impl BindError {
    /// Error de configuración (fatal, detectado antes de mutar nada).
    pub fn is_configuration(&self) -> bool {
        matches!(self, BindError::NotBindable { .. })
    }
}
