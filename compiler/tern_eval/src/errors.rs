//! Runtime error types and their constructors.
//!
//! Two families live here:
//! - [`EnvError`]: binding failures raised by [`Environment`](crate::Environment)
//!   operations. The core never recovers from these; the evaluator decides.
//! - [`NativeError`]: failures raised by native function bodies.
//!
//! Lexical errors are a separate type in `tern_lexer` and never mix with these.

use std::fmt;

/// A failed declaration, assignment or lookup.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum EnvError {
    /// Name already declared in the same scope.
    #[error("cannot declare variable `{name}`: it is already defined in this scope")]
    DuplicateBinding { name: String },
    /// Assignment to a constant binding.
    #[error("cannot assign to constant `{name}`")]
    ImmutableBinding { name: String },
    /// Name not found in this scope or any ancestor.
    #[error("cannot resolve `{name}`: it does not exist")]
    UnresolvedBinding { name: String },
}

impl EnvError {
    /// The binding name the error is about.
    pub fn name(&self) -> &str {
        match self {
            EnvError::DuplicateBinding { name }
            | EnvError::ImmutableBinding { name }
            | EnvError::UnresolvedBinding { name } => name,
        }
    }
}

/// Expected argument count for a native function.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    /// Returns `true` if `count` arguments satisfy this arity.
    #[inline]
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(1) => f.write_str("1 argument"),
            Arity::Exact(n) => write!(f, "{n} arguments"),
            Arity::AtLeast(1) => f.write_str("at least 1 argument"),
            Arity::AtLeast(n) => write!(f, "at least {n} arguments"),
        }
    }
}

/// A failure inside a native function body.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NativeError {
    #[error("{function} expects {expected}, found {found}")]
    ArgCount {
        function: &'static str,
        expected: Arity,
        found: usize,
    },
    /// `index` is zero-based.
    #[error("{function}: argument {} must be a {expected}, found {found}", .index + 1)]
    ArgType {
        function: &'static str,
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
    /// Well-typed arguments outside the function's domain.
    #[error("{function}: {message}")]
    Domain {
        function: &'static str,
        message: String,
    },
    #[error(transparent)]
    Binding(#[from] EnvError),
}

/// Result type returned by native function bodies.
pub type NativeResult = Result<crate::Value, NativeError>;

// Binding Errors

/// Name already declared in this scope.
#[cold]
pub fn duplicate_binding(name: &str) -> EnvError {
    EnvError::DuplicateBinding {
        name: name.to_string(),
    }
}

/// Assignment to a constant.
#[cold]
pub fn immutable_binding(name: &str) -> EnvError {
    EnvError::ImmutableBinding {
        name: name.to_string(),
    }
}

/// Name not visible from the current scope.
#[cold]
pub fn unresolved_binding(name: &str) -> EnvError {
    EnvError::UnresolvedBinding {
        name: name.to_string(),
    }
}

// Native Call Errors

/// Wrong number of arguments.
#[cold]
pub fn wrong_arg_count(function: &'static str, expected: Arity, found: usize) -> NativeError {
    NativeError::ArgCount {
        function,
        expected,
        found,
    }
}

/// Argument of the wrong variant.
#[cold]
pub fn wrong_arg_type(
    function: &'static str,
    index: usize,
    expected: &'static str,
    found: &'static str,
) -> NativeError {
    NativeError::ArgType {
        function,
        index,
        expected,
        found,
    }
}

/// Argument outside the function's domain.
#[cold]
pub fn domain_error(function: &'static str, message: impl Into<String>) -> NativeError {
    NativeError::Domain {
        function,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests;
