//! # keycalc
//!
//! keycalc is the evaluation core of a keypad calculator written in Rust.
//! It turns the text typed on the keypad into a number using a tokenizer, a
//! shunting-yard conversion to postfix order and a stack machine, supporting
//! `+ - * /`, parentheses, negation and the functions `sin`, `cos`, `tan`
//! (in degrees), `sqrt` and `log` (base 10).

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    error::{EvalError, EvalResult},
    interpreter::{evaluator::core::eval_postfix, lexer::tokenize, postfix::to_postfix},
};

/// Provides the error type shared by all evaluation stages.
///
/// Every failure, whether in tokenizing or in running the postfix program,
/// is one variant of [`error::EvalError`]. Callers that only care about
/// success can collapse them into a single error state.
pub mod error;
/// Runs the three stages of expression evaluation.
///
/// # Responsibilities
/// - Tokenizes the raw input text.
/// - Reorders the tokens into postfix form.
/// - Executes the postfix form on an operand stack.
pub mod interpreter;
/// Models the keypad in front of the evaluator.
///
/// Buttons append to a text buffer, `±` wraps the buffer in a negation, and
/// `=` evaluates the buffer and shows the result or an error indicator.
pub mod keypad;
/// Operators and functions known to the calculator.
///
/// Each symbol knows its spelling, and operators know their precedence and
/// how to apply themselves.
pub mod symbol;
/// General helpers, currently result formatting for the display.
pub mod util;

/// Options controlling how results are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    /// Treat NaN and infinite results as errors instead of returning them.
    pub reject_non_finite: bool,
}

/// Evaluates an expression with default settings.
///
/// Non-finite results such as the quotient of a division by zero are
/// returned as values, not errors.
///
/// # Errors
/// Returns an error if the input contains unknown symbols or malformed
/// numbers, or if operators and operands do not pair up.
///
/// # Examples
/// ```
/// use keycalc::{error::EvalError, evaluate};
///
/// assert_eq!(evaluate("2+3*4"), Ok(14.0));
/// assert_eq!(evaluate("(2+3)*4"), Ok(20.0));
/// assert_eq!(evaluate("(-5+3)"), Ok(-8.0));
/// assert!(evaluate("1/0").unwrap().is_infinite());
///
/// assert!(matches!(evaluate("5/"), Err(EvalError::StackUnderflow { .. })));
/// ```
pub fn evaluate(source: &str) -> EvalResult<f64> {
    evaluate_with(source, &Settings::default())
}

/// Evaluates an expression with explicit settings.
///
/// # Errors
/// Everything [`evaluate`] reports, plus [`EvalError::NonFiniteResult`] when
/// `settings.reject_non_finite` is set and the result is NaN or infinite.
///
/// # Examples
/// ```
/// use keycalc::{Settings, error::EvalError, evaluate_with};
///
/// let strict = Settings { reject_non_finite: true };
/// assert_eq!(evaluate_with("sqrt(16)", &strict), Ok(4.0));
/// assert!(matches!(evaluate_with("sqrt(0-1)", &strict),
///                  Err(EvalError::NonFiniteResult { .. })));
/// ```
pub fn evaluate_with(source: &str, settings: &Settings) -> EvalResult<f64> {
    debug!("evaluating {source:?}");

    let tokens = tokenize(source)?;
    let postfix = to_postfix(&tokens);
    let value = eval_postfix(&postfix)?;

    if settings.reject_non_finite && !value.is_finite() {
        return Err(EvalError::NonFiniteResult { value });
    }
    Ok(value)
}
