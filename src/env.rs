// ABOUTME: Environment module for managing variable bindings and lexical scope

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A single name→Value frame plus a parent link used only for lookup.
///
/// The parent link is mutable: a `Lambda`'s own environment starts detached
/// (`parent == None`) and has its parent pointed at the caller's environment for the
/// duration of a call, so closures and dynamically-scoped calls both resolve through
/// the same chain. The frame itself is owned by whoever holds the `Rc`: the driver
/// for the global environment, a `Lambda` value for its closure frame.
#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    parent: RefCell<Option<Rc<Environment>>>,
}

impl Environment {
    /// Creates a fresh, parentless frame.
    pub fn new() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: RefCell::new(None),
        })
    }

    /// Creates a frame with a parent already attached.
    pub fn with_parent(parent: Rc<Environment>) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: RefCell::new(Some(parent)),
        })
    }

    /// Searches this frame, then recurses into the parent chain.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }
        self.parent.borrow().as_ref().and_then(|p| p.get(name))
    }

    /// Binds `name` in THIS frame only (`=` semantics, and formal-argument binding).
    pub fn set(&self, name: &str, value: Value) {
        self.bindings.borrow_mut().insert(name.to_string(), value);
    }

    /// Walks to the root frame and binds there (`def` semantics).
    pub fn def(&self, name: &str, value: Value) {
        match self.parent.borrow().as_ref() {
            Some(parent) => parent.def(name, value),
            None => self.set(name, value),
        }
    }

    /// Points this frame's parent at `parent`. Transiently set on every lambda call.
    pub fn set_parent(&self, parent: Rc<Environment>) {
        *self.parent.borrow_mut() = Some(parent);
    }

    /// Produces an independent frame with deep-copied entries and the same parent
    /// reference. Used whenever a `Lambda` value is cloned, so partial application
    /// never lets two in-flight calls share one mutable frame.
    pub fn deep_clone(&self) -> Rc<Environment> {
        let bindings = self.bindings.borrow().clone();
        let parent = self.parent.borrow().clone();
        Rc::new(Environment {
            bindings: RefCell::new(bindings),
            parent: RefCell::new(parent),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_and_get() {
        let env = Environment::new();
        env.set("x", Value::Number(42));
        assert_eq!(env.get("x"), Some(Value::Number(42)));
    }

    #[test]
    fn undefined_symbol_is_none() {
        let env = Environment::new();
        assert_eq!(env.get("undefined"), None);
    }

    #[test]
    fn child_shadows_parent() {
        let parent = Environment::new();
        parent.set("x", Value::Number(42));

        let child = Environment::with_parent(parent);
        child.set("x", Value::Number(100));

        assert_eq!(child.get("x"), Some(Value::Number(100)));
    }

    #[test]
    fn child_sees_parent_binding() {
        let parent = Environment::new();
        parent.set("x", Value::Number(42));

        let child = Environment::with_parent(parent.clone());
        assert_eq!(child.get("x"), Some(Value::Number(42)));

        // def from the child reaches the root, not just the child frame.
        child.def("y", Value::Number(7));
        assert_eq!(parent.get("y"), Some(Value::Number(7)));
    }

    #[test]
    fn set_is_local_def_is_global() {
        let root = Environment::new();
        let child = Environment::with_parent(root.clone());

        child.set("local", Value::Number(1));
        assert_eq!(root.get("local"), None);

        child.def("global", Value::Number(2));
        assert_eq!(root.get("global"), Some(Value::Number(2)));
    }

    #[test]
    fn deep_clone_is_independent() {
        let env = Environment::new();
        env.set("x", Value::Number(1));

        let clone = env.deep_clone();
        clone.set("x", Value::Number(2));

        assert_eq!(env.get("x"), Some(Value::Number(1)));
        assert_eq!(clone.get("x"), Some(Value::Number(2)));
    }

    #[test]
    fn set_parent_changes_lookup_chain() {
        let orphan = Environment::new();
        orphan.set("local", Value::Number(1));

        let other_root = Environment::new();
        other_root.set("shared", Value::Number(99));

        assert_eq!(orphan.get("shared"), None);
        orphan.set_parent(other_root);
        assert_eq!(orphan.get("shared"), Some(Value::Number(99)));
    }
}
