//! End-to-end checks of the runtime core as an evaluator would drive it.

#![expect(clippy::unwrap_used, reason = "tests use unwrap for brevity")]

use pretty_assertions::assert_eq;
use tern_eval::{
    buffer_handler, create_global_env, create_global_env_with, native_names, EnvError,
    Environment, Mutability, NativeError, Value,
};
use tern_lexer::{tokenize, TokenKind};

/// Run a `let`/`const` declaration the way an evaluator would: literal or
/// identifier initializer only.
fn run_declaration(source: &str, env: &Environment) -> Result<Value, EnvError> {
    let tokens = tokenize(source).unwrap();
    let constant = match tokens[0].kind {
        TokenKind::Let => Mutability::Mutable,
        TokenKind::Const => Mutability::Constant,
        other => panic!("not a declaration: {other}"),
    };
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Equals);
    let init = &tokens[3];
    let value = match init.kind {
        TokenKind::Number => Value::number(init.value.parse().unwrap()),
        TokenKind::String => Value::string(init.value.as_str()),
        TokenKind::Identifier => env.lookup_var(&init.value)?,
        other => panic!("unsupported initializer: {other}"),
    };
    env.declare_var(&tokens[1].value, value, constant)
}

#[test]
fn tokens_drive_declarations() {
    let globals = create_global_env().unwrap();
    let scope = globals.child();
    run_declaration("let x = 5;", &scope).unwrap();
    run_declaration("const name = 'tern';", &scope).unwrap();
    run_declaration("let flag = true;", &scope).unwrap();

    assert_eq!(scope.lookup_var("x").unwrap(), Value::number(5.0));
    assert_eq!(scope.lookup_var("name").unwrap(), Value::string("tern"));
    assert_eq!(scope.lookup_var("flag").unwrap(), Value::boolean(true));
    assert!(scope.is_constant("name").unwrap());
}

#[test]
fn binding_errors_are_recoverable() {
    let scope = create_global_env().unwrap().child();
    run_declaration("let x = 1;", &scope).unwrap();

    let err = run_declaration("let x = 2;", &scope).unwrap_err();
    assert_eq!(err.name(), "x");
    let err = run_declaration("let y = missing;", &scope).unwrap_err();
    assert!(matches!(err, EnvError::UnresolvedBinding { .. }));

    // The scope is still usable after both failures.
    scope.assign_var("x", Value::number(3.0)).unwrap();
    assert_eq!(scope.lookup_var("x").unwrap(), Value::number(3.0));
}

#[test]
fn natives_receive_the_calling_scope() {
    let globals = create_global_env().unwrap();
    let scope = globals.child();
    let counter = Value::native("bump", |_args, env| {
        let current = env.lookup_var("n")?.as_number().unwrap_or(0.0);
        env.assign_var("n", Value::number(current + 1.0))?;
        Ok(Value::Null)
    });
    globals.declare_var("bump", counter, true).unwrap();
    scope.declare_var("n", Value::number(0.0), false).unwrap();

    let bump = scope.lookup_var("bump").unwrap();
    bump.as_native().unwrap().call(&[], &scope).unwrap();
    bump.as_native().unwrap().call(&[], &scope).unwrap();
    assert_eq!(scope.lookup_var("n").unwrap(), Value::number(2.0));

    // From the global scope `n` does not exist.
    let err = bump.as_native().unwrap().call(&[], &globals).unwrap_err();
    assert!(matches!(err, NativeError::Binding(EnvError::UnresolvedBinding { .. })));
}

#[test]
fn script_output_is_captured() {
    let out = buffer_handler();
    let globals = create_global_env_with(&out).unwrap();
    let call = |name: &str, args: &[Value]| {
        let f = globals.lookup_var(name).unwrap();
        f.as_native().unwrap().call(args, &globals)
    };

    let root = call("sqrt", &[Value::number(81.0)]).unwrap();
    let shout = call("strToUppercase", &[Value::string("done")]).unwrap();
    call("print", &[Value::string("sqrt:"), root]).unwrap();
    call("println", &[]).unwrap();
    call("println", &[shout]).unwrap();

    assert_eq!(out.take_output(), "sqrt: 9\nDONE\n");
}

#[test]
fn globals_cannot_be_overwritten() {
    let globals = create_global_env().unwrap();
    for name in native_names() {
        assert!(matches!(
            globals.assign_var(name, Value::Null),
            Err(EnvError::ImmutableBinding { .. })
        ));
    }
}
