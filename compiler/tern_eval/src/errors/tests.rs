use super::*;
use pretty_assertions::assert_eq;

#[test]
fn env_error_messages() {
    assert_eq!(
        duplicate_binding("x").to_string(),
        "cannot declare variable `x`: it is already defined in this scope"
    );
    assert_eq!(
        immutable_binding("pi").to_string(),
        "cannot assign to constant `pi`"
    );
    assert_eq!(
        unresolved_binding("ghost").to_string(),
        "cannot resolve `ghost`: it does not exist"
    );
}

#[test]
fn env_error_name() {
    assert_eq!(duplicate_binding("a").name(), "a");
    assert_eq!(immutable_binding("b").name(), "b");
    assert_eq!(unresolved_binding("c").name(), "c");
}

#[test]
fn arity_accepts() {
    assert!(Arity::Exact(2).accepts(2));
    assert!(!Arity::Exact(2).accepts(1));
    assert!(Arity::AtLeast(1).accepts(5));
    assert!(!Arity::AtLeast(1).accepts(0));
}

#[test]
fn native_error_messages() {
    assert_eq!(
        wrong_arg_count("sqrt", Arity::Exact(1), 3).to_string(),
        "sqrt expects 1 argument, found 3"
    );
    assert_eq!(
        wrong_arg_count("pow", Arity::Exact(2), 0).to_string(),
        "pow expects 2 arguments, found 0"
    );
    assert_eq!(
        wrong_arg_count("mean", Arity::AtLeast(1), 0).to_string(),
        "mean expects at least 1 argument, found 0"
    );
    assert_eq!(
        wrong_arg_type("strLen", 0, "string", "number").to_string(),
        "strLen: argument 1 must be a string, found number"
    );
    assert_eq!(
        domain_error("factorial", "n must be a non-negative integer").to_string(),
        "factorial: n must be a non-negative integer"
    );
}

#[test]
fn binding_errors_convert_transparently() {
    let err: NativeError = unresolved_binding("y").into();
    assert_eq!(err.to_string(), "cannot resolve `y`: it does not exist");
    assert_eq!(err, NativeError::Binding(unresolved_binding("y")));
}
