//! String built-ins.
//!
//! Lengths, indices and reversal count Unicode scalar values, not bytes.

use unicode_normalization::UnicodeNormalization;

use super::{expect_arity, non_negative_arg, number_arg, string_arg, PureNative};
use crate::errors::{domain_error, Arity, NativeResult};
use crate::Value;

/// Upper bound on the byte length `strRepeat` will build.
const MAX_REPEAT_BYTES: usize = 1 << 30;

pub(super) const NATIVES: &[(&str, PureNative)] = &[
    ("strLen", str_len),
    ("strIncludes", |args| predicate("strIncludes", args, |s, t| s.contains(t))),
    ("strEndsWith", |args| predicate("strEndsWith", args, |s, t| s.ends_with(t))),
    ("strStartsWith", |args| predicate("strStartsWith", args, |s, t| s.starts_with(t))),
    ("strToUppercase", |args| map("strToUppercase", args, str::to_uppercase)),
    ("strToLowerCase", |args| map("strToLowerCase", args, str::to_lowercase)),
    ("strReverse", |args| map("strReverse", args, |s| s.chars().rev().collect())),
    ("strTrim", |args| map("strTrim", args, |s| s.trim().to_string())),
    ("strCharAt", str_char_at),
    ("strNormalize", |args| map("strNormalize", args, |s| s.nfc().collect())),
    ("strTrimStart", |args| map("strTrimStart", args, |s| s.trim_start().to_string())),
    ("strTrimEnd", |args| map("strTrimEnd", args, |s| s.trim_end().to_string())),
    ("strReplace", |args| replace("strReplace", args, Some(1))),
    ("strReplaceAll", |args| replace("strReplaceAll", args, None)),
    ("strRepeat", str_repeat),
];

fn map(function: &'static str, args: &[Value], f: fn(&str) -> String) -> NativeResult {
    expect_arity(function, args, Arity::Exact(1))?;
    Ok(Value::string(f(string_arg(function, args, 0)?)))
}

fn predicate(function: &'static str, args: &[Value], f: fn(&str, &str) -> bool) -> NativeResult {
    expect_arity(function, args, Arity::Exact(2))?;
    let haystack = string_arg(function, args, 0)?;
    let needle = string_arg(function, args, 1)?;
    Ok(Value::boolean(f(haystack, needle)))
}

#[expect(clippy::cast_precision_loss, reason = "string lengths fit in 2^53")]
fn str_len(args: &[Value]) -> NativeResult {
    expect_arity("strLen", args, Arity::Exact(1))?;
    let s = string_arg("strLen", args, 0)?;
    Ok(Value::number(s.chars().count() as f64))
}

/// Character at a scalar index, or `""` when the index is out of range.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "index is checked non-negative and finite first"
)]
fn str_char_at(args: &[Value]) -> NativeResult {
    expect_arity("strCharAt", args, Arity::Exact(2))?;
    let s = string_arg("strCharAt", args, 0)?;
    let index = number_arg("strCharAt", args, 1)?.trunc();
    if !index.is_finite() || index < 0.0 {
        return Ok(Value::string(""));
    }
    let found = s.chars().nth(index as usize);
    Ok(Value::string(found.map(String::from).unwrap_or_default()))
}

/// `count` of `None` replaces every occurrence.
fn replace(function: &'static str, args: &[Value], count: Option<usize>) -> NativeResult {
    expect_arity(function, args, Arity::Exact(3))?;
    let s = string_arg(function, args, 0)?;
    let from = string_arg(function, args, 1)?;
    let to = string_arg(function, args, 2)?;
    let replaced = match count {
        Some(n) => s.replacen(from, to, n),
        None => s.replace(from, to),
    };
    Ok(Value::string(replaced))
}

fn str_repeat(args: &[Value]) -> NativeResult {
    expect_arity("strRepeat", args, Arity::Exact(2))?;
    let s = string_arg("strRepeat", args, 0)?;
    let times = non_negative_arg("strRepeat", args, 1)?;
    if s.is_empty() {
        return Ok(Value::string(""));
    }
    let count = usize::try_from(times)
        .ok()
        .filter(|&n| {
            s.len()
                .checked_mul(n)
                .is_some_and(|len| len <= MAX_REPEAT_BYTES)
        })
        .ok_or_else(|| domain_error("strRepeat", "result string is too large"))?;
    Ok(Value::string(s.repeat(count)))
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, reason = "tests use unwrap for brevity")]

    use super::*;
    use crate::errors::NativeError;
    use pretty_assertions::assert_eq;

    fn call(name: &str, args: &[Value]) -> NativeResult {
        let (_, f) = NATIVES.iter().find(|(n, _)| *n == name).unwrap();
        f(args)
    }

    fn text(name: &str, args: &[&str]) -> String {
        let args: Vec<Value> = args.iter().map(|s| Value::string(*s)).collect();
        call(name, &args).unwrap().as_str().unwrap().to_string()
    }

    #[test]
    fn length_counts_scalars() {
        let len = call("strLen", &[Value::string("héllo")]).unwrap();
        assert_eq!(len, Value::number(5.0));
    }

    #[test]
    fn predicates() {
        let yes = Value::boolean(true);
        let args = [Value::string("tern lang"), Value::string("lang")];
        assert_eq!(call("strIncludes", &args).unwrap(), yes);
        assert_eq!(call("strEndsWith", &args).unwrap(), yes);
        assert_eq!(call("strStartsWith", &args).unwrap(), Value::boolean(false));
    }

    #[test]
    fn case_and_reverse() {
        assert_eq!(text("strToUppercase", &["abc"]), "ABC");
        assert_eq!(text("strToLowerCase", &["ÀBC"]), "àbc");
        assert_eq!(text("strReverse", &["añb"]), "bña");
    }

    #[test]
    fn trimming() {
        assert_eq!(text("strTrim", &["  x  "]), "x");
        assert_eq!(text("strTrimStart", &["  x  "]), "x  ");
        assert_eq!(text("strTrimEnd", &["  x  "]), "  x");
    }

    #[test]
    fn char_at_out_of_range_is_empty() {
        let s = Value::string("añb");
        let at = |i: f64| call("strCharAt", &[s.clone(), Value::number(i)]).unwrap();
        assert_eq!(at(1.0), Value::string("ñ"));
        assert_eq!(at(1.9), Value::string("ñ"));
        assert_eq!(at(3.0), Value::string(""));
        assert_eq!(at(-1.0), Value::string(""));
        assert_eq!(at(f64::NAN), Value::string(""));
    }

    #[test]
    fn normalize_composes() {
        assert_eq!(text("strNormalize", &["e\u{301}"]), "\u{e9}");
    }

    #[test]
    fn replace_first_versus_all() {
        assert_eq!(text("strReplace", &["a-b-c", "-", "+"]), "a+b-c");
        assert_eq!(text("strReplaceAll", &["a-b-c", "-", "+"]), "a+b+c");
        assert_eq!(text("strReplace", &["abc", "z", "+"]), "abc");
    }

    #[test]
    fn repeat() {
        let out = call("strRepeat", &[Value::string("ab"), Value::number(3.0)]).unwrap();
        assert_eq!(out, Value::string("ababab"));
        let empty = call("strRepeat", &[Value::string("ab"), Value::number(0.0)]).unwrap();
        assert_eq!(empty, Value::string(""));
        assert!(matches!(
            call("strRepeat", &[Value::string("ab"), Value::number(-1.0)]),
            Err(NativeError::Domain { .. })
        ));
        assert!(matches!(
            call("strRepeat", &[Value::string("ab"), Value::number(1e15)]),
            Err(NativeError::Domain { .. })
        ));
    }

    #[test]
    fn repeat_empty_string_returns_immediately() {
        let start = std::time::Instant::now();
        let out = call("strRepeat", &[Value::string(""), Value::number(4e9)]).unwrap();
        assert_eq!(out, Value::string(""));
        let huge = call("strRepeat", &[Value::string(""), Value::number(9e15)]).unwrap();
        assert_eq!(huge, Value::string(""));
        assert!(start.elapsed() < std::time::Duration::from_millis(100));
    }

    #[test]
    fn type_errors_name_the_argument() {
        let err = call("strLen", &[Value::number(1.0)]).unwrap_err();
        assert_eq!(err.to_string(), "strLen: argument 1 must be a string, found number");
    }
}
