//! Global scope bootstrap.
//!
//! Each call builds a brand new root [`Environment`]; nothing is cached
//! between calls, so two programs never share globals.

use crate::errors::EnvError;
use crate::natives;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::{Environment, Mutability, Value};

/// Language literals bound in every global scope.
pub const LITERALS: [&str; 3] = ["true", "false", "null"];

/// Fresh global scope whose `print`/`println` write to stdout.
pub fn create_global_env() -> Result<Environment, EnvError> {
    create_global_env_with(&stdout_handler())
}

/// Fresh global scope whose `print`/`println` write to `handler`.
///
/// Binds the literals `true`, `false` and `null` and the whole native
/// catalog, all constant.
pub fn create_global_env_with(handler: &SharedPrintHandler) -> Result<Environment, EnvError> {
    let env = Environment::new();
    env.declare_var("true", Value::boolean(true), Mutability::Constant)?;
    env.declare_var("false", Value::boolean(false), Mutability::Constant)?;
    env.declare_var("null", Value::null(), Mutability::Constant)?;
    let natives = natives::register_all(&env, handler)?;
    tracing::debug!(
        literals = LITERALS.len(),
        natives,
        "global environment ready"
    );
    Ok(env)
}
