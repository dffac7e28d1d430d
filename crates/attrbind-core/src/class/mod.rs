//! Contrato que implementan los tipos que participan en el binding.
//!
//! Normalmente no se implementa a mano: la macro `bindable!` genera el struct,
//! su `ClassInfo` y el despacho de lectura/escritura por atributo. La herencia
//! se modela por composición: el struct derivado contiene al base y lo expone
//! vía `superclass()`.

mod finite;
pub mod macros;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use self::finite::Finite;
use crate::binder::GraphWalker;
use crate::errors::BindError;
use crate::model::{ClassInfo, FieldDescriptor};

/// Tipo con metadatos de binding (marcador de clase + atributos).
///
/// Un tipo sin marcador bindable también puede implementarlo: aporta atributos
/// como ancestro, pero no puede ser raíz ni destino anidado de un `bind`.
pub trait Configurable {
    /// Metadatos del tipo estático.
    fn class_info() -> &'static ClassInfo
        where Self: Sized;

    /// Metadatos de la clase en tiempo de ejecución (la más derivada).
    fn runtime_class(&self) -> &'static ClassInfo;

    /// Lee un atributo declarado por esta misma clase. `None` si `field` no
    /// pertenece a ella.
    fn read_declared(&self, field: &FieldDescriptor) -> Option<Result<Value, BindError>>;

    /// Escribe un atributo declarado por esta misma clase. `None` si `field`
    /// no pertenece a ella.
    fn write_declared(&mut self, field: &FieldDescriptor, key: &str, value: &Value) -> Option<Result<(), BindError>>;

    /// Desciende por las referencias (no-atributo) declaradas por esta clase.
    fn visit_declared_references(&mut self, walker: &mut GraphWalker<'_>) -> Result<(), BindError>;

    /// Parte "base" del objeto cuando la clase extiende otra.
    fn superclass(&self) -> Option<&dyn Configurable> {
        None
    }

    fn superclass_mut(&mut self) -> Option<&mut dyn Configurable> {
        None
    }

    /// Lee cualquier atributo de la jerarquía.
    fn read_attribute(&self, field: &FieldDescriptor) -> Result<Value, BindError> {
        if let Some(result) = self.read_declared(field) {
            return result;
        }
        match self.superclass() {
            Some(base) => base.read_attribute(field),
            None => Err(BindError::UnknownField { class: self.runtime_class().name(),
                                                  field: field.name() }),
        }
    }

    /// Escribe cualquier atributo de la jerarquía.
    fn write_attribute(&mut self, field: &FieldDescriptor, key: &str, value: &Value) -> Result<(), BindError> {
        if let Some(result) = self.write_declared(field, key, value) {
            return result;
        }
        let class = self.runtime_class().name();
        match self.superclass_mut() {
            Some(base) => base.write_attribute(field, key, value),
            None => Err(BindError::UnknownField { class, field: field.name() }),
        }
    }

    /// Referencias de toda la jerarquía: ancestros primero.
    fn visit_references(&mut self, walker: &mut GraphWalker<'_>) -> Result<(), BindError> {
        if let Some(base) = self.superclass_mut() {
            base.visit_references(walker)?;
        }
        self.visit_declared_references(walker)
    }
}

fn qualified(field: &FieldDescriptor) -> String {
    format!("{}::{}", field.declaring_class(), field.name())
}

/// Exporta el valor actual de un campo como valor opaco. Falla si el valor
/// contiene floats no finitos (no se podrían reimportar).
pub fn export<T: Serialize + ?Sized>(field: &FieldDescriptor, value: &T) -> Result<Value, BindError> {
    Finite(value).serialize(serde_json::value::Serializer)
                 .map_err(|e| BindError::Encode { field: qualified(field),
                                                  reason: e.to_string() })
}

/// Asigna `value` a `slot` sin conversión: el valor debe representar
/// exactamente el tipo del campo. Si no, el campo queda intacto.
pub fn assign<T: DeserializeOwned>(slot: &mut T, field: &FieldDescriptor, key: &str, value: &Value) -> Result<(), BindError> {
    let decoded = <T as Deserialize>::deserialize(value).map_err(|e| BindError::ValueMismatch { key: key.to_string(),
                                                                             field: qualified(field),
                                                                             reason: e.to_string() })?;
    *slot = decoded;
    Ok(())
}
