//! Native function catalog.
//!
//! Every built-in is an ordinary constant binding in the global scope whose
//! value is a [`Value::NativeFunction`]. The bodies live in three groups:
//!
//! - `io`: `print`, `println`, `time`
//! - `math`: numeric functions, statistics and number theory
//! - `string`: length, case, trimming, search, replace
//!
//! The argument helpers below produce the [`NativeError`] for a bad call so
//! the bodies stay one-liners where possible.

mod io;
mod math;
mod string;

use crate::errors::{
    domain_error, wrong_arg_count, wrong_arg_type, Arity, EnvError, NativeError, NativeResult,
};
use crate::print_handler::SharedPrintHandler;
use crate::{Environment, Mutability, Value};

/// Body of a built-in that never looks at the calling environment.
pub(crate) type PureNative = fn(&[Value]) -> NativeResult;

/// Largest integer an `f64` holds exactly (2^53).
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Declare every built-in in `env` as a constant.
///
/// Returns the number of bindings added. Fails only if one of the names is
/// already declared in `env`.
pub fn register_all(env: &Environment, handler: &SharedPrintHandler) -> Result<usize, EnvError> {
    let count = io::register(env, handler)?
        + register_table(env, math::NATIVES)?
        + register_table(env, string::NATIVES)?;
    Ok(count)
}

/// Registration names of every built-in, in declaration order.
pub fn names() -> Vec<&'static str> {
    io::NAMES
        .iter()
        .copied()
        .chain(math::NATIVES.iter().map(|(name, _)| *name))
        .chain(string::NATIVES.iter().map(|(name, _)| *name))
        .collect()
}

fn register_table(
    env: &Environment,
    table: &[(&'static str, PureNative)],
) -> Result<usize, EnvError> {
    for &(name, body) in table {
        let value = Value::native(name, move |args, _env| body(args));
        env.declare_var(name, value, Mutability::Constant)?;
    }
    Ok(table.len())
}

// ─── Argument helpers ───

pub(crate) fn expect_arity(
    function: &'static str,
    args: &[Value],
    arity: Arity,
) -> Result<(), NativeError> {
    if arity.accepts(args.len()) {
        Ok(())
    } else {
        Err(wrong_arg_count(function, arity, args.len()))
    }
}

pub(crate) fn number_arg(
    function: &'static str,
    args: &[Value],
    index: usize,
) -> Result<f64, NativeError> {
    let value = args
        .get(index)
        .ok_or_else(|| wrong_arg_count(function, Arity::AtLeast(index + 1), args.len()))?;
    value
        .as_number()
        .ok_or_else(|| wrong_arg_type(function, index, "number", value.type_name()))
}

pub(crate) fn string_arg<'a>(
    function: &'static str,
    args: &'a [Value],
    index: usize,
) -> Result<&'a str, NativeError> {
    let value = args
        .get(index)
        .ok_or_else(|| wrong_arg_count(function, Arity::AtLeast(index + 1), args.len()))?;
    value
        .as_str()
        .ok_or_else(|| wrong_arg_type(function, index, "string", value.type_name()))
}

/// Every argument as a number, for variadic functions.
pub(crate) fn number_args(function: &'static str, args: &[Value]) -> Result<Vec<f64>, NativeError> {
    (0..args.len())
        .map(|index| number_arg(function, args, index))
        .collect()
}

/// A number argument that must hold an exact integer.
#[expect(
    clippy::cast_possible_truncation,
    reason = "value is integral and within 2^53"
)]
pub(crate) fn integer_arg(
    function: &'static str,
    args: &[Value],
    index: usize,
) -> Result<i64, NativeError> {
    let n = number_arg(function, args, index)?;
    if !n.is_finite() || n.fract() != 0.0 || n.abs() > MAX_EXACT_INT {
        return Err(domain_error(
            function,
            format!("argument {} must be an integer, found {n}", index + 1),
        ));
    }
    Ok(n as i64)
}

/// An integer argument that must also be `>= 0`.
pub(crate) fn non_negative_arg(
    function: &'static str,
    args: &[Value],
    index: usize,
) -> Result<u64, NativeError> {
    let n = integer_arg(function, args, index)?;
    u64::try_from(n).map_err(|_| {
        domain_error(
            function,
            format!("argument {} must not be negative, found {n}", index + 1),
        )
    })
}
