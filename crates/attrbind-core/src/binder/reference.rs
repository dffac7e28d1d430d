//! Referencias por las que el binder puede descender.
//!
//! Cada campo declarado en la sección `references` de `bindable!` debe
//! implementar `Reference`. Referencias nulas (`None`, `Weak` caído) se
//! ignoran; un `RefCell`/`Mutex` ya tomado corresponde a un objeto que está en
//! la pila del recorrido actual (o retenido por el caller) y también se ignora.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::{Arc, Mutex, TryLockError};

use log::debug;

use super::GraphWalker;
use crate::class::Configurable;
use crate::errors::BindError;

pub trait Reference {
    fn descend(&mut self, walker: &mut GraphWalker<'_>) -> Result<(), BindError>;
}

impl<R: Reference> Reference for Option<R> {
    fn descend(&mut self, walker: &mut GraphWalker<'_>) -> Result<(), BindError> {
        match self {
            Some(inner) => inner.descend(walker),
            None => Ok(()),
        }
    }
}

impl<T: Configurable + ?Sized> Reference for Box<T> {
    fn descend(&mut self, walker: &mut GraphWalker<'_>) -> Result<(), BindError> {
        walker.visit(&mut **self)
    }
}

impl<T: Configurable + ?Sized> Reference for Rc<RefCell<T>> {
    fn descend(&mut self, walker: &mut GraphWalker<'_>) -> Result<(), BindError> {
        match self.try_borrow_mut() {
            Ok(mut node) => walker.visit(&mut *node),
            Err(_) => {
                debug!("skip {} reference: RefCell already borrowed", std::any::type_name::<T>());
                Ok(())
            }
        }
    }
}

impl<T: Configurable + ?Sized> Reference for Weak<RefCell<T>> {
    fn descend(&mut self, walker: &mut GraphWalker<'_>) -> Result<(), BindError> {
        match self.upgrade() {
            Some(mut strong) => strong.descend(walker),
            None => Ok(()),
        }
    }
}

impl<T: Configurable + ?Sized> Reference for Arc<Mutex<T>> {
    fn descend(&mut self, walker: &mut GraphWalker<'_>) -> Result<(), BindError> {
        match self.try_lock() {
            Ok(mut node) => walker.visit(&mut *node),
            Err(TryLockError::Poisoned(poisoned)) => walker.visit(&mut *poisoned.into_inner()),
            Err(TryLockError::WouldBlock) => {
                debug!("skip {} reference: Mutex already locked", std::any::type_name::<T>());
                Ok(())
            }
        }
    }
}
