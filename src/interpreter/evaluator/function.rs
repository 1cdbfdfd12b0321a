use crate::symbol::Function;

/// Type alias for builtin function handlers.
///
/// A builtin receives its single evaluated argument and returns the result.
/// Domain problems are not errors: they come back as NaN or an infinity.
type BuiltinFn = fn(f64) -> f64;

/// Defines the builtin lookup from `function => implementation` pairs.
///
/// The macro expands to a `match`, so leaving a [`Function`] variant out of
/// the list is a compile error rather than a runtime lookup failure.
macro_rules! builtin_functions {
    (
        $(
            $func:path => $imp:expr
        ),* $(,)?
    ) => {
        fn builtin(func: Function) -> BuiltinFn {
            match func {
                $(
                    $func => $imp,
                )*
            }
        }
    };
}

builtin_functions! {
    Function::Sin  => sin_degrees,
    Function::Cos  => cos_degrees,
    Function::Tan  => tan_degrees,
    Function::Sqrt => f64::sqrt,
    Function::Log  => f64::log10,
}

/// Applies a keypad function to its argument.
///
/// - `sin`, `cos` and `tan` read their argument in degrees.
/// - `sqrt` is the principal square root; negative input gives NaN.
/// - `log` is the base-10 logarithm; zero gives negative infinity and
///   negative input gives NaN.
///
/// # Example
/// ```
/// use keycalc::{interpreter::evaluator::function::apply, symbol::Function};
///
/// assert_eq!(apply(Function::Sqrt, 16.0), 4.0);
/// assert!((apply(Function::Sin, 30.0) - 0.5).abs() < 1e-12);
/// assert!(apply(Function::Sqrt, -1.0).is_nan());
/// assert_eq!(apply(Function::Log, 0.0), f64::NEG_INFINITY);
/// ```
#[must_use]
pub fn apply(func: Function, arg: f64) -> f64 {
    builtin(func)(arg)
}

fn sin_degrees(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

fn cos_degrees(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

fn tan_degrees(degrees: f64) -> f64 {
    degrees.to_radians().tan()
}
