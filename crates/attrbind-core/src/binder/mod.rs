//! Binder de atributos: sincroniza un mapa plano de parámetros con los
//! atributos de un grafo de objetos.
//!
//! Una llamada a `bind`:
//! 1. valida que la clase en tiempo de ejecución de la raíz sea bindable
//!    (si no, falla antes de mutar nada);
//! 2. recorre el grafo en profundidad aplicando, por atributo, primero el paso
//!    IN (mapa -> campo, sólo si la clave existe) y luego el paso OUT
//!    (campo -> mapa, siempre);
//! 3. desciende por las referencias no-atributo hacia objetos bindable,
//!    compartiendo el mismo conjunto de visitados para cortar ciclos.

mod reference;
mod walker;

pub use reference::Reference;
pub use walker::GraphWalker;

use log::debug;

use crate::class::Configurable;
use crate::errors::BindError;
use crate::model::{BindingDirection, Parameters};

/// Vincula `instance` (y los objetos que alcanza) con `params` en la
/// dirección `direction`.
///
/// Un objeto detrás de `Rc<RefCell<_>>` o `Arc<Mutex<_>>` se omite si su celda
/// ya está tomada al llegar a él. Eso incluye los préstamos o locks que el
/// caller mantenga durante la llamada: ese objeto no se vincula y no hay error,
/// sólo un registro `debug`. Soltarlos antes de llamar a `bind`.
pub fn bind<T: Configurable + ?Sized>(instance: &mut T, params: &mut Parameters, direction: BindingDirection) -> Result<(), BindError> {
    let class = instance.runtime_class();
    if !class.is_bindable() {
        return Err(BindError::NotBindable { class: class.name() });
    }
    debug!("bind {} direction={direction} params={}", class.name(), params.len());
    let mut walker = GraphWalker::new(params, direction);
    walker.walk(instance)?;
    debug!("bind {} done, visited={}", class.name(), walker.visited_count());
    Ok(())
}
