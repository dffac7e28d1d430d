//! Metadatos declarativos de clases y atributos.
//!
//! `ClassInfo` es el equivalente estático de las anotaciones de clase: se
//! construye una sola vez por tipo (ver macro `bindable!`) y no cambia después.
//! Los campos heredados se resuelven al construirla, de forma que el binder
//! recorre una lista plana y estable.

use super::BindingDirection;
use crate::metadata;

/// Marcador de clase "bindable" con prefijo opcional (vacío por defecto).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BindableSpec {
    pub prefix: &'static str,
}

impl BindableSpec {
    pub const fn new() -> Self {
        Self { prefix: "" }
    }

    pub const fn with_prefix(prefix: &'static str) -> Self {
        Self { prefix }
    }
}

/// Marcador de atributo: dirección declarada + clave explícita opcional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    pub direction: BindingDirection,
    pub key: Option<&'static str>,
}

impl AttributeSpec {
    pub const fn new(direction: BindingDirection) -> Self {
        Self { direction, key: None }
    }

    pub const fn with_key(direction: BindingDirection, key: &'static str) -> Self {
        Self { direction, key: Some(key) }
    }
}

/// Descriptor derivado de un atributo (no declarado directamente).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    declaring_class: &'static str,
    name: &'static str,
    attribute: AttributeSpec,
}

impl FieldDescriptor {
    pub fn new(declaring_class: &'static str, name: &'static str, attribute: AttributeSpec) -> Self {
        Self { declaring_class, name, attribute }
    }

    /// Nombre completo de la clase que declara el campo.
    pub fn declaring_class(&self) -> &'static str {
        self.declaring_class
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn direction(&self) -> BindingDirection {
        self.attribute.direction
    }

    pub fn explicit_key(&self) -> Option<&'static str> {
        self.attribute.key.filter(|k| !k.is_empty())
    }

    /// true si el campo fue declarado por la clase `class`.
    pub fn is_declared_by(&self, class: &ClassInfo) -> bool {
        self.declaring_class == class.name()
    }
}

/// Descriptor de tipo en tiempo de ejecución.
#[derive(Debug)]
pub struct ClassInfo {
    name: &'static str,
    bindable: Option<BindableSpec>,
    fields: Vec<FieldDescriptor>,
}

impl ClassInfo {
    /// Registra una clase. `declared` contiene sólo los atributos propios (en
    /// orden de declaración); los heredados se toman de `parent`.
    pub fn new(name: &'static str,
               bindable: Option<BindableSpec>,
               parent: Option<&'static ClassInfo>,
               declared: Vec<(&'static str, AttributeSpec)>)
               -> Self {
        let declared: Vec<FieldDescriptor> =
            declared.into_iter().map(|(field, spec)| FieldDescriptor::new(name, field, spec)).collect();
        let fields = metadata::aggregate_fields(parent, &declared);
        Self { name, bindable, fields }
    }

    /// Nombre totalmente calificado (`ruta::del::modulo::Tipo`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn bindable(&self) -> Option<BindableSpec> {
        self.bindable
    }

    pub fn is_bindable(&self) -> bool {
        self.bindable.is_some()
    }

    /// Atributos de la clase y todos sus ancestros: ancestros primero.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }
}
