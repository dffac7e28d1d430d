//! Tabla de claves compuestas de una clase (introspección).

use serde::Serialize;

use super::key_of;
use crate::class::Configurable;
use crate::metadata::{fields_of, prefix_of};
use crate::model::{BindingDirection, ClassInfo};

/// Atributo tal como lo ve el mapa de parámetros.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeBinding {
    pub key: String,
    pub declaring_class: &'static str,
    pub field: &'static str,
    pub direction: BindingDirection,
}

pub fn describe_class(class: &ClassInfo) -> Vec<AttributeBinding> {
    let prefix = prefix_of(class);
    fields_of(class).iter()
                    .map(|f| AttributeBinding { key: key_of(f, prefix),
                                                declaring_class: f.declaring_class(),
                                                field: f.name(),
                                                direction: f.direction() })
                    .collect()
}

pub fn describe<T: Configurable>() -> Vec<AttributeBinding> {
    describe_class(T::class_info())
}
