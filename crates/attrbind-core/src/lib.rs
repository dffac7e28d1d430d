//! attrbind-core: binding declarativo entre un mapa plano de parámetros y los
//! atributos de un grafo de objetos (posiblemente cíclico).
//!
//! - `model`: dirección, metadatos de clase/atributo y `Parameters`.
//! - `metadata`: resolución de atributos (incluye heredados) y prefijos.
//! - `keys`: composición de claves externas.
//! - `binder`: recorrido del grafo y transferencia direccional.
//! - `class`: contrato `Configurable` + macro `bindable!`.

pub mod binder;
pub mod class;
pub mod constants;
pub mod errors;
pub mod keys;
pub mod metadata;
pub mod model;

pub use binder::{bind, GraphWalker, Reference};
pub use class::Configurable;
pub use errors::BindError;
pub use keys::{describe, describe_class, key_of, AttributeBinding};
pub use metadata::{fields_of, prefix_of};
pub use model::{AttributeSpec, BindableSpec, BindingDirection, ClassInfo, FieldDescriptor, Parameters};

// Soporte para el código generado por `bindable!`; no es API estable.
#[doc(hidden)]
pub mod __private {
    pub use crate::class::{assign, export};
    pub use once_cell::sync::Lazy;
    pub use serde_json::Value;
}
