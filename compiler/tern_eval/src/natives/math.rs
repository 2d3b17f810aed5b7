//! Numeric built-ins.
//!
//! Numbers are `f64` throughout. Functions defined on integers (`gcd`,
//! `factorial`, `fibonacci`, `randint`) reject non-integral arguments with a
//! domain error instead of truncating.

use rand::Rng;

use super::{expect_arity, integer_arg, non_negative_arg, number_arg, number_args, PureNative};
use crate::errors::{domain_error, Arity, NativeResult};
use crate::Value;

/// `factorial(n)` overflows `f64` for every `n` above this.
const FACTORIAL_LIMIT: u64 = 170;
/// `fibonacci(n)` overflows `f64` for every `n` above this.
const FIBONACCI_LIMIT: u64 = 1476;

pub(super) const NATIVES: &[(&str, PureNative)] = &[
    ("random", random),
    ("sqrt", |args| unary("sqrt", args, f64::sqrt)),
    ("pow", |args| binary("pow", args, f64::powf)),
    ("round", |args| unary("round", args, round_half_up)),
    ("abs", |args| unary("abs", args, f64::abs)),
    ("ceil", |args| unary("ceil", args, f64::ceil)),
    ("floor", |args| unary("floor", args, f64::floor)),
    ("min", min),
    ("max", max),
    ("exp", |args| unary("exp", args, f64::exp)),
    ("sin", |args| unary("sin", args, f64::sin)),
    ("cos", |args| unary("cos", args, f64::cos)),
    ("tan", |args| unary("tan", args, f64::tan)),
    ("asin", |args| unary("asin", args, f64::asin)),
    ("acos", |args| unary("acos", args, f64::acos)),
    ("atan", |args| unary("atan", args, f64::atan)),
    ("sinh", |args| unary("sinh", args, f64::sinh)),
    ("cosh", |args| unary("cosh", args, f64::cosh)),
    ("tanh", |args| unary("tanh", args, f64::tanh)),
    ("expm1", |args| unary("expm1", args, f64::exp_m1)),
    ("log10", |args| unary("log10", args, f64::log10)),
    ("sqr", |args| unary("sqr", args, |x| x * x)),
    ("cubic", |args| unary("cubic", args, |x| x * x * x)),
    ("pow10", |args| unary("pow10", args, |x| 10f64.powf(x))),
    ("atan2", |args| binary("atan2", args, f64::atan2)),
    ("hypot", hypot),
    ("trunc", |args| unary("trunc", args, f64::trunc)),
    ("sgn", |args| unary("sgn", args, sign)),
    ("randint", randint),
    ("degToRad", |args| unary("degToRad", args, f64::to_radians)),
    ("gcd", gcd),
    ("factorial", factorial),
    ("isPrime", is_prime),
    ("fibonacci", fibonacci),
    ("mean", mean),
    ("median", median),
    ("isInt", is_int),
];

fn unary(function: &'static str, args: &[Value], f: fn(f64) -> f64) -> NativeResult {
    expect_arity(function, args, Arity::Exact(1))?;
    Ok(Value::number(f(number_arg(function, args, 0)?)))
}

fn binary(function: &'static str, args: &[Value], f: fn(f64, f64) -> f64) -> NativeResult {
    expect_arity(function, args, Arity::Exact(2))?;
    let a = number_arg(function, args, 0)?;
    let b = number_arg(function, args, 1)?;
    Ok(Value::number(f(a, b)))
}

/// Nearest integer, ties toward `+Infinity`.
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    // `x + 0.5` would round up values just below a half.
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        // 0, -0 and NaN pass through.
        x
    }
}

fn random(args: &[Value]) -> NativeResult {
    expect_arity("random", args, Arity::Exact(0))?;
    Ok(Value::number(rand::thread_rng().gen::<f64>()))
}

/// Smallest argument; `Infinity` with none, `NaN` if any argument is `NaN`.
fn min(args: &[Value]) -> NativeResult {
    let nums = number_args("min", args)?;
    Ok(Value::number(extreme(&nums, f64::INFINITY, f64::min)))
}

fn max(args: &[Value]) -> NativeResult {
    let nums = number_args("max", args)?;
    Ok(Value::number(extreme(&nums, f64::NEG_INFINITY, f64::max)))
}

fn extreme(nums: &[f64], empty: f64, pick: fn(f64, f64) -> f64) -> f64 {
    if nums.iter().any(|n| n.is_nan()) {
        return f64::NAN;
    }
    nums.iter().copied().fold(empty, pick)
}

fn hypot(args: &[Value]) -> NativeResult {
    let nums = number_args("hypot", args)?;
    Ok(Value::number(nums.into_iter().fold(0.0, f64::hypot)))
}

#[expect(clippy::cast_precision_loss, reason = "bounds are within 2^53")]
fn randint(args: &[Value]) -> NativeResult {
    expect_arity("randint", args, Arity::Exact(2))?;
    let lo = integer_arg("randint", args, 0)?;
    let hi = integer_arg("randint", args, 1)?;
    if lo > hi {
        return Err(domain_error(
            "randint",
            format!("lower bound {lo} is greater than upper bound {hi}"),
        ));
    }
    Ok(Value::number(rand::thread_rng().gen_range(lo..=hi) as f64))
}

#[expect(clippy::cast_precision_loss, reason = "result is at most 2^53")]
fn gcd(args: &[Value]) -> NativeResult {
    expect_arity("gcd", args, Arity::Exact(2))?;
    let mut a = integer_arg("gcd", args, 0)?.unsigned_abs();
    let mut b = integer_arg("gcd", args, 1)?.unsigned_abs();
    while b != 0 {
        (a, b) = (b, a % b);
    }
    Ok(Value::number(a as f64))
}

fn factorial(args: &[Value]) -> NativeResult {
    expect_arity("factorial", args, Arity::Exact(1))?;
    let n = non_negative_arg("factorial", args, 0)?;
    if n > FACTORIAL_LIMIT {
        return Ok(Value::number(f64::INFINITY));
    }
    let mut acc = 1.0;
    let mut k = 1.0;
    for _ in 1..=n {
        acc *= k;
        k += 1.0;
    }
    Ok(Value::number(acc))
}

fn fibonacci(args: &[Value]) -> NativeResult {
    expect_arity("fibonacci", args, Arity::Exact(1))?;
    let n = non_negative_arg("fibonacci", args, 0)?;
    if n > FIBONACCI_LIMIT {
        return Ok(Value::number(f64::INFINITY));
    }
    let (mut a, mut b) = (0.0_f64, 1.0_f64);
    for _ in 0..n {
        (a, b) = (b, a + b);
    }
    Ok(Value::number(a))
}

/// `false` for anything that is not an integer `>= 2`.
fn is_prime(args: &[Value]) -> NativeResult {
    expect_arity("isPrime", args, Arity::Exact(1))?;
    let Ok(n) = integer_arg("isPrime", args, 0) else {
        // Still a type error for non-numbers.
        number_arg("isPrime", args, 0)?;
        return Ok(Value::boolean(false));
    };
    let Ok(n) = u64::try_from(n) else {
        return Ok(Value::boolean(false));
    };
    Ok(Value::boolean(is_prime_u64(n)))
}

fn is_prime_u64(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

#[expect(clippy::cast_precision_loss, reason = "argument counts are small")]
fn mean(args: &[Value]) -> NativeResult {
    expect_arity("mean", args, Arity::AtLeast(1))?;
    let nums = number_args("mean", args)?;
    Ok(Value::number(nums.iter().sum::<f64>() / nums.len() as f64))
}

fn median(args: &[Value]) -> NativeResult {
    expect_arity("median", args, Arity::AtLeast(1))?;
    let mut nums = number_args("median", args)?;
    nums.sort_by(f64::total_cmp);
    let mid = nums.len() / 2;
    let value = if nums.len() % 2 == 0 {
        (nums[mid - 1] + nums[mid]) / 2.0
    } else {
        nums[mid]
    };
    Ok(Value::number(value))
}

fn is_int(args: &[Value]) -> NativeResult {
    expect_arity("isInt", args, Arity::Exact(1))?;
    let x = number_arg("isInt", args, 0)?;
    Ok(Value::boolean(x.is_finite() && x.fract() == 0.0))
}
