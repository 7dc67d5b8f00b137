//! Scope chain for variable lookup.
//!
//! A [`Scope`] owns its bindings and borrows its parent, so a child can
//! never outlive the scope it was created from. Names are case-insensitive
//! through [`Name`]'s `Eq`/`Hash`.
//!
//! There are two write modes:
//! - [`Scope::assign`] updates the nearest existing binding, or declares in
//!   this scope if the name is bound nowhere in the chain.
//! - [`Scope::shadow`] always declares in this scope. Function parameters
//!   and loop variables use it so they never overwrite an outer variable.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;

use nsp_ir::Name;

use crate::errors::{no_such_variable, EvalResult};
use crate::Value;

/// One level of the scope chain.
#[derive(Default)]
pub struct Scope<'p> {
    bindings: RefCell<FxHashMap<Name, Value>>,
    parent: Option<&'p Scope<'p>>,
}

impl<'p> Scope<'p> {
    /// A root scope with no parent.
    pub fn new() -> Self {
        Scope {
            bindings: RefCell::new(FxHashMap::default()),
            parent: None,
        }
    }

    /// A fresh scope whose parent is `self`.
    pub fn child(&self) -> Scope<'_> {
        Scope {
            bindings: RefCell::new(FxHashMap::default()),
            parent: Some(self),
        }
    }

    /// Value of `name` in the nearest scope that binds it.
    pub fn lookup(&self, name: &Name) -> EvalResult {
        self.get(name).ok_or_else(|| no_such_variable(name.as_str()))
    }

    /// Like [`Scope::lookup`], without an error for unbound names.
    pub fn get(&self, name: &Name) -> Option<Value> {
        let mut scope = Some(self);
        while let Some(current) = scope {
            if let Some(value) = current.bindings.borrow().get(name) {
                return Some(value.clone());
            }
            scope = current.parent;
        }
        None
    }

    /// Walking write: update the nearest binding of `name`, or declare it
    /// here when no scope in the chain binds it.
    pub fn assign(&self, name: &Name, value: Value) {
        let mut scope = Some(self);
        while let Some(current) = scope {
            if let Some(slot) = current.bindings.borrow_mut().get_mut(name) {
                *slot = value;
                return;
            }
            scope = current.parent;
        }
        self.shadow(name.clone(), value);
    }

    /// Declare `name` in this scope, hiding any outer binding.
    pub fn shadow(&self, name: Name, value: Value) {
        self.bindings.borrow_mut().insert(name, value);
    }

    /// Number of scopes from here to the root, counting this one.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut scope = self.parent;
        while let Some(current) = scope {
            depth += 1;
            scope = current.parent;
        }
        depth
    }
}

impl fmt::Debug for Scope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bindings = self.bindings.borrow();
        let mut names: Vec<&str> = bindings.keys().map(Name::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Scope")
            .field("names", &names)
            .field("depth", &self.depth())
            .finish()
    }
}

#[cfg(test)]
mod tests;
