//! Output and clock built-ins.

use std::fmt::Write;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use super::expect_arity;
use crate::errors::{domain_error, Arity, EnvError, NativeResult};
use crate::print_handler::SharedPrintHandler;
use crate::{Environment, Mutability, Value};

pub(super) const NAMES: [&str; 3] = ["print", "println", "time"];

pub(super) fn register(env: &Environment, handler: &SharedPrintHandler) -> Result<usize, EnvError> {
    let out = Arc::clone(handler);
    env.declare_var(
        "print",
        Value::native("print", move |args, _env| {
            out.print(&join_display(args));
            Ok(Value::Null)
        }),
        Mutability::Constant,
    )?;

    let out = Arc::clone(handler);
    env.declare_var(
        "println",
        Value::native("println", move |args, _env| {
            out.println(&join_display(args));
            Ok(Value::Null)
        }),
        Mutability::Constant,
    )?;

    env.declare_var(
        "time",
        Value::native("time", |args, _env| time(args)),
        Mutability::Constant,
    )?;

    Ok(NAMES.len())
}

/// Script rendering of each argument, separated by one space.
pub(crate) fn join_display(args: &[Value]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{arg}");
    }
    out
}

/// Milliseconds since the Unix epoch.
fn time(args: &[Value]) -> NativeResult {
    expect_arity("time", args, Arity::Exact(0))?;
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| domain_error("time", format!("system clock is before the epoch: {e}")))?;
    Ok(Value::number((elapsed.as_secs_f64() * 1000.0).floor()))
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, reason = "tests use unwrap for brevity")]

    use super::*;
    use crate::print_handler::buffer_handler;
    use pretty_assertions::assert_eq;

    fn setup() -> (Environment, SharedPrintHandler) {
        let env = Environment::new();
        let handler = buffer_handler();
        register(&env, &handler).unwrap();
        (env, handler)
    }

    fn call(env: &Environment, name: &str, args: &[Value]) -> NativeResult {
        let f = env.lookup_var(name).unwrap();
        f.as_native().unwrap().call(args, env)
    }

    #[test]
    fn print_joins_with_spaces_without_newline() {
        let (env, out) = setup();
        let args = [Value::string("x ="), Value::number(5.0), Value::Null];
        assert_eq!(call(&env, "print", &args).unwrap(), Value::Null);
        assert_eq!(out.get_output(), "x = 5 null");
    }

    #[test]
    fn println_appends_newline() {
        let (env, out) = setup();
        call(&env, "println", &[Value::boolean(true), Value::number(1.5)]).unwrap();
        call(&env, "println", &[]).unwrap();
        assert_eq!(out.get_output(), "true 1.5\n\n");
    }

    #[test]
    fn time_is_after_2020() {
        let (env, _) = setup();
        let now = call(&env, "time", &[]).unwrap().as_number().unwrap();
        assert!(now > 1_577_836_800_000.0);
        assert_eq!(now.fract(), 0.0);
    }

    #[test]
    fn time_rejects_arguments() {
        let (env, _) = setup();
        assert!(call(&env, "time", &[Value::Null]).is_err());
    }

    #[test]
    fn io_natives_are_constant() {
        let (env, _) = setup();
        for name in NAMES {
            assert!(env.is_constant(name).unwrap(), "{name}");
        }
    }
}
