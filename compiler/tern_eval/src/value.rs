//! Runtime values for the tern interpreter.
//!
//! Every `Value` is self-describing: the variant tag always matches its
//! payload, and construction goes through the factory methods below so no
//! value is ever partially built.
//!
//! ## Correct Usage
//!
//! ```text
//! let s = Value::string("hello");
//! let n = Value::number(4.0);
//! let f = Value::native("sqrt", |args, env| { ... });
//! ```

use std::fmt;
use std::rc::Rc;

use crate::errors::NativeResult;
use crate::Environment;

/// Signature every host-implemented function matches.
///
/// The second argument is the *calling* environment, so built-ins can read
/// and write caller-visible bindings without special support from the
/// evaluator.
pub type NativeFnImpl = dyn Fn(&[Value], &Environment) -> NativeResult;

/// A host-implemented callable exposed to scripts as an ordinary value.
///
/// Cloning is cheap (one reference count bump). Two handles are equal only
/// when they wrap the same callable.
#[derive(Clone)]
pub struct NativeFn {
    name: &'static str,
    func: Rc<NativeFnImpl>,
}

impl NativeFn {
    pub fn new(
        name: &'static str,
        func: impl Fn(&[Value], &Environment) -> NativeResult + 'static,
    ) -> Self {
        NativeFn {
            name,
            func: Rc::new(func),
        }
    }

    /// Registration name (the global binding key).
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invoke with call-site arguments and the calling environment.
    #[inline]
    pub fn call(&self, args: &[Value], env: &Environment) -> NativeResult {
        (self.func)(args, env)
    }
}

impl PartialEq for NativeFn {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native fn {}>", self.name)
    }
}

/// Runtime value in the tern interpreter.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The `null` literal.
    #[default]
    Null,
    /// `true` / `false`.
    Boolean(bool),
    /// All numbers are `f64`.
    Number(f64),
    /// Immutable string contents.
    Str(Rc<str>),
    /// Host-implemented function.
    NativeFunction(NativeFn),
}

// Factory Methods

impl Value {
    #[inline]
    pub fn null() -> Self {
        Value::Null
    }

    #[inline]
    pub fn boolean(b: bool) -> Self {
        Value::Boolean(b)
    }

    #[inline]
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    /// Create a string value.
    ///
    /// ```text
    /// let s = Value::string("hello");
    /// let s2 = Value::string(format!("value: {x}"));
    /// ```
    #[inline]
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::Str(s.into())
    }

    /// Wrap a host callable.
    pub fn native(
        name: &'static str,
        func: impl Fn(&[Value], &Environment) -> NativeResult + 'static,
    ) -> Self {
        Value::NativeFunction(NativeFn::new(name, func))
    }
}

// Accessors

impl Value {
    /// Name of the variant as shown in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::NativeFunction(_) => "native function",
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_native(&self) -> Option<&NativeFn> {
        match self {
            Value::NativeFunction(f) => Some(f),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

/// Script-facing rendering, used by `print`/`println`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // f64's Display already drops the fractional part of integral values.
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::NativeFunction(func) => write!(f, "<native fn {}>", func.name()),
        }
    }
}
