//! Modelos neutrales del binder (dirección, metadatos, parámetros).

pub mod descriptor;
pub mod direction;

pub use descriptor::{AttributeSpec, BindableSpec, ClassInfo, FieldDescriptor};
pub use direction::{BindingDirection, ParseDirectionError};

/// Mapa plano de parámetros: clave compuesta -> valor opaco.
///
/// Los valores son JSON neutro; el binder no interpreta su semántica, sólo
/// los asigna tal cual al campo (o los exporta tal cual desde él).
pub type Parameters = serde_json::Map<String, serde_json::Value>;
