//! Tern Eval - runtime core for the tern scripting language.
//!
//! Provides the pieces an evaluator runs on top of:
//!
//! - [`Value`]: tagged runtime values, including host-implemented
//!   [`NativeFn`]s
//! - [`Environment`]: lexically scoped binding tables with constants and
//!   shadowing
//! - [`create_global_env`]: a fresh global scope with the literals and the
//!   native catalog
//! - print handlers: where `print`/`println` output goes
//!
//! Binding failures are [`EnvError`]s returned to the caller; the evaluator
//! decides whether a script can recover from them.
//!
//! ```text
//! let globals = tern_eval::create_global_env()?;
//! let scope = globals.child();
//! scope.declare_var("x", Value::number(5.0), Mutability::Mutable)?;
//! let sqrt = scope.lookup_var("sqrt")?;
//! ```

mod environment;
mod errors;
mod global;
mod natives;
mod print_handler;
mod tracing_setup;
mod value;

pub use environment::{Environment, LocalScope, Mutability};
pub use errors::{
    domain_error, duplicate_binding, immutable_binding, unresolved_binding, wrong_arg_count,
    wrong_arg_type, Arity, EnvError, NativeError, NativeResult,
};
pub use global::{create_global_env, create_global_env_with, LITERALS};
pub use natives::names as native_names;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use tracing_setup::init_tracing;
pub use value::{NativeFn, NativeFnImpl, Value};
