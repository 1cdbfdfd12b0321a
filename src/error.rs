use thiserror::Error;

/// Result type shared by every stage of the pipeline.
pub type EvalResult<T> = Result<T, EvalError>;

/// Represents all errors that can occur while evaluating an expression.
///
/// The keypad collapses every variant into the same `Error` indicator, but the
/// library keeps them apart so callers and tests can tell what went wrong.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A number token could not be read as a floating-point value, e.g. `1.2.3`.
    #[error("Malformed number '{text}'.")]
    MalformedNumber {
        /// The raw text of the number token.
        text: String,
    },
    /// A character or word that is neither a number, an operator, a
    /// parenthesis nor one of the known functions.
    #[error("Unknown symbol '{symbol}'.")]
    UnknownSymbol {
        /// The offending input text.
        symbol: String,
    },
    /// An operator or function needed an operand that was not there.
    #[error("Missing operand for '{token}'.")]
    StackUnderflow {
        /// The operator or function that ran out of operands.
        token: String,
    },
    /// Evaluation finished with anything other than exactly one value left.
    #[error("Expected exactly one result but {remaining} values remained.")]
    UnbalancedStack {
        /// How many operands were left on the stack.
        remaining: usize,
    },
    /// The result is NaN or infinite and non-finite results were disallowed.
    #[error("Result is not a finite number: {value}.")]
    NonFiniteResult {
        /// The offending value.
        value: f64,
    },
}
