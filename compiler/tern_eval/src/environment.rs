//! Lexical environments for variable scoping in the interpreter.
//!
//! An [`Environment`] is a handle to one scope. Each scope owns its binding
//! table and the set of names declared constant, and holds a strong handle to
//! its parent, so a parent can never be freed while a child still exists.
//! A scope is dropped together with the last handle to it, which the
//! evaluator holds for exactly the block or call that created it.
//!
//! Resolution walks parent links iteratively, innermost to outermost, so deep
//! scope chains never grow the call stack.

use rustc_hash::{FxHashMap, FxHashSet};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::errors::{duplicate_binding, immutable_binding, unresolved_binding, EnvError};
use crate::Value;

/// Whether a variable binding can be reassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mutability {
    /// Binding can be reassigned (`let x = ...`).
    Mutable,
    /// Binding cannot be reassigned (`const x = ...`).
    Constant,
}

impl Mutability {
    /// Returns `true` if this is `Constant`.
    #[inline]
    pub fn is_constant(self) -> bool {
        matches!(self, Mutability::Constant)
    }
}

impl From<bool> for Mutability {
    /// `true` means constant.
    fn from(constant: bool) -> Self {
        if constant {
            Mutability::Constant
        } else {
            Mutability::Mutable
        }
    }
}

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// All scope allocations go through [`LocalScope::new`]. `Rc` rather than
/// `Arc`: scopes never cross threads.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Returns `true` if both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

/// A single scope containing variable bindings.
#[derive(Debug)]
struct Scope {
    /// Variable bindings declared in this scope.
    bindings: FxHashMap<String, Value>,
    /// Names in `bindings` that are constant.
    constants: FxHashSet<String>,
    /// Enclosing scope; `None` for the root.
    parent: Option<Environment>,
    /// 1 for the root, parent depth + 1 otherwise.
    depth: usize,
}

impl Scope {
    fn root() -> Self {
        Scope {
            bindings: FxHashMap::default(),
            constants: FxHashSet::default(),
            parent: None,
            depth: 1,
        }
    }

    fn with_parent(parent: Environment) -> Self {
        let depth = parent.depth() + 1;
        Scope {
            bindings: FxHashMap::default(),
            constants: FxHashSet::default(),
            parent: Some(parent),
            depth,
        }
    }
}

impl Drop for Scope {
    // Unlink uniquely owned ancestors one at a time so a long chain does not
    // drop recursively.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(Environment(LocalScope(rc))) = next {
            next = match Rc::try_unwrap(rc) {
                Ok(cell) => {
                    let mut scope = cell.into_inner();
                    scope.parent.take()
                }
                Err(_) => None,
            };
        }
    }
}

/// Handle to one scope in the scope tree.
///
/// Cloning the handle does not copy the scope; both clones see the same
/// bindings.
#[derive(Clone)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// Create a root scope with no parent and no bindings.
    pub fn new() -> Self {
        Environment(LocalScope::new(Scope::root()))
    }

    /// Create a child scope for a block or function call.
    #[must_use]
    pub fn child(&self) -> Self {
        let child = Environment(LocalScope::new(Scope::with_parent(self.clone())));
        tracing::trace!(depth = child.depth(), "enter scope");
        child
    }

    /// The enclosing scope, if any.
    pub fn parent(&self) -> Option<Environment> {
        self.0.borrow().parent.clone()
    }

    /// The outermost ancestor (the global scope for a bootstrapped tree).
    pub fn root(&self) -> Environment {
        let mut env = self.clone();
        while let Some(parent) = env.parent() {
            env = parent;
        }
        env
    }

    /// Number of scopes from this one up to the root, inclusive.
    pub fn depth(&self) -> usize {
        self.0.borrow().depth
    }

    /// Returns `true` if both handles refer to the same scope.
    pub fn same_scope(&self, other: &Environment) -> bool {
        self.0.ptr_eq(&other.0)
    }

    /// Returns `true` if `name` is declared in this scope's own table.
    pub fn has_local(&self, name: &str) -> bool {
        self.0.borrow().bindings.contains_key(name)
    }

    /// Number of bindings declared directly in this scope.
    pub fn local_len(&self) -> usize {
        self.0.borrow().bindings.len()
    }

    /// Declare `name` in this scope.
    ///
    /// Ancestor bindings never block a declaration (that is how shadowing
    /// works); a binding of the same name in this scope does.
    pub fn declare_var(
        &self,
        name: &str,
        value: Value,
        mutability: impl Into<Mutability>,
    ) -> Result<Value, EnvError> {
        let mutability = mutability.into();
        let mut scope = self.0.borrow_mut();
        if scope.bindings.contains_key(name) {
            return Err(duplicate_binding(name));
        }
        scope.bindings.insert(name.to_string(), value.clone());
        if mutability.is_constant() {
            scope.constants.insert(name.to_string());
        }
        tracing::trace!(name, ?mutability, depth = scope.depth, "declare");
        Ok(value)
    }

    /// Overwrite an existing binding in the scope that owns it.
    ///
    /// Never creates a binding.
    pub fn assign_var(&self, name: &str, value: Value) -> Result<Value, EnvError> {
        let owner = self.resolve(name)?;
        let mut scope = owner.0.borrow_mut();
        if scope.constants.contains(name) {
            return Err(immutable_binding(name));
        }
        match scope.bindings.get_mut(name) {
            Some(slot) => *slot = value.clone(),
            None => return Err(unresolved_binding(name)),
        }
        Ok(value)
    }

    /// Current value of `name` as seen from this scope.
    pub fn lookup_var(&self, name: &str) -> Result<Value, EnvError> {
        let owner = self.resolve(name)?;
        let scope = owner.0.borrow();
        scope
            .bindings
            .get(name)
            .cloned()
            .ok_or_else(|| unresolved_binding(name))
    }

    /// Find the innermost scope that declares `name`.
    pub fn resolve(&self, name: &str) -> Result<Environment, EnvError> {
        let mut env = self.clone();
        loop {
            if env.has_local(name) {
                return Ok(env);
            }
            let Some(parent) = env.parent() else {
                return Err(unresolved_binding(name));
            };
            env = parent;
        }
    }

    /// Whether the binding `name` resolves to is constant.
    pub fn is_constant(&self, name: &str) -> Result<bool, EnvError> {
        let owner = self.resolve(name)?;
        let scope = owner.0.borrow();
        Ok(scope.constants.contains(name))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    /// Shows this scope's own names only; printing the whole chain would
    /// repeat the global catalog for every child.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        let mut names: Vec<&str> = scope.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("depth", &scope.depth)
            .field("names", &names)
            .finish()
    }
}
