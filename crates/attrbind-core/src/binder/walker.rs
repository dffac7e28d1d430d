//! Recorrido del grafo de objetos para una única llamada a `bind`.

use std::collections::HashSet;

use log::trace;

use crate::class::Configurable;
use crate::errors::BindError;
use crate::keys::key_of;
use crate::metadata::{fields_of, prefix_of};
use crate::model::{BindingDirection, FieldDescriptor, Parameters};

/// Identidad de un objeto durante el recorrido: dirección + clase.
///
/// La clase desambigua un struct anidado por valor que comparte dirección con
/// su contenedor (campo en offset 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct NodeId {
    addr: usize,
    class: &'static str,
}

impl NodeId {
    fn of<T: Configurable + ?Sized>(node: &T) -> Self {
        Self { addr: node as *const T as *const () as usize,
               class: node.runtime_class().name() }
    }
}

/// Estado transitorio de una llamada: mapa de parámetros, dirección pedida y
/// conjunto de objetos visitados. Se descarta al terminar la llamada.
pub struct GraphWalker<'a> {
    params: &'a mut Parameters,
    direction: BindingDirection,
    visited: HashSet<NodeId>,
}

impl<'a> GraphWalker<'a> {
    pub(crate) fn new(params: &'a mut Parameters, direction: BindingDirection) -> Self {
        Self { params, direction, visited: HashSet::new() }
    }

    /// Cantidad de objetos procesados hasta ahora.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Punto de entrada para destinos anidados: los objetos cuya clase no es
    /// bindable se ignoran sin error.
    pub fn visit<T: Configurable + ?Sized>(&mut self, node: &mut T) -> Result<(), BindError> {
        let class = node.runtime_class();
        if !class.is_bindable() {
            trace!("skip reference to non-bindable {}", class.name());
            return Ok(());
        }
        self.walk(node)
    }

    /// Procesa `node` (ya validado como bindable) y desciende por sus
    /// referencias. Un objeto ya visitado cierra el ciclo.
    pub(crate) fn walk<T: Configurable + ?Sized>(&mut self, node: &mut T) -> Result<(), BindError> {
        if !self.visited.insert(NodeId::of(node)) {
            trace!("cycle closed at {}", node.runtime_class().name());
            return Ok(());
        }
        let class = node.runtime_class();
        let prefix = prefix_of(class);
        for field in fields_of(class) {
            let key = key_of(field, prefix);
            self.transfer(node, field, &key)?;
        }
        node.visit_references(self)
    }

    fn transfer<T: Configurable + ?Sized>(&mut self, node: &mut T, field: &FieldDescriptor, key: &str) -> Result<(), BindError> {
        if self.direction.includes_in() && field.direction().includes_in() {
            match self.params.get(key) {
                Some(value) => {
                    trace!("in  {key} -> {}::{}", field.declaring_class(), field.name());
                    node.write_attribute(field, key, value)?;
                }
                None => trace!("in  {key} absent, field untouched"),
            }
        }
        if self.direction.includes_out() && field.direction().includes_out() {
            let value = node.read_attribute(field)?;
            trace!("out {}::{} -> {key}", field.declaring_class(), field.name());
            self.params.insert(key.to_string(), value);
        }
        Ok(())
    }
}
