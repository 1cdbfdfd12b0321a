use log::{debug, trace};

use crate::{
    error::{EvalError, EvalResult},
    interpreter::{evaluator::function, lexer::Token},
};

/// Operand storage for a single postfix run.
///
/// Every pop is checked, so a missing operand is reported against the token
/// that asked for it instead of panicking.
#[derive(Debug, Default)]
struct OperandStack {
    values: Vec<f64>,
}

impl OperandStack {
    fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    fn pop(&mut self, token: &Token) -> EvalResult<f64> {
        self.values
            .pop()
            .ok_or_else(|| EvalError::StackUnderflow { token: token.to_string() })
    }

    /// Consumes the stack, yielding its only value.
    fn into_result(self) -> EvalResult<f64> {
        match self.values.as_slice() {
            [value] => Ok(*value),
            values => Err(EvalError::UnbalancedStack { remaining: values.len() }),
        }
    }
}

/// Parses the raw text of a number token.
fn parse_number(text: &str) -> EvalResult<f64> {
    text.parse().map_err(|_| EvalError::MalformedNumber { text: text.to_string() })
}

/// Executes a postfix token sequence and returns its single result.
///
/// - Numbers are parsed and pushed.
/// - Operators pop their right operand, then their left one, and push the
///   result.
/// - Functions pop one argument and push the transformed value.
/// - Parenthesis tokens left over from unclosed groups are skipped.
///
/// NaN and infinite intermediate values are carried along like any other
/// number.
///
/// # Errors
/// - [`EvalError::MalformedNumber`] for number text such as `1.2.3` or `.`.
/// - [`EvalError::StackUnderflow`] when an operator or function finds too few
///   operands.
/// - [`EvalError::UnbalancedStack`] when anything other than exactly one value
///   remains, including for an empty sequence.
///
/// # Example
/// ```
/// use keycalc::{
///     error::EvalError,
///     interpreter::{evaluator::core::eval_postfix, lexer::Token},
///     symbol::Operator,
/// };
///
/// let rpn = [Token::Number("7".to_string()),
///            Token::Number("2".to_string()),
///            Token::Operator(Operator::Subtract)];
/// assert_eq!(eval_postfix(&rpn), Ok(5.0));
///
/// assert_eq!(eval_postfix(&[]), Err(EvalError::UnbalancedStack { remaining: 0 }));
/// ```
pub fn eval_postfix(tokens: &[Token]) -> EvalResult<f64> {
    let mut stack = OperandStack::default();

    for token in tokens {
        match token {
            Token::Number(text) => stack.push(parse_number(text)?),
            Token::Operator(op) => {
                let right = stack.pop(token)?;
                let left = stack.pop(token)?;
                stack.push(op.apply(left, right));
            },
            Token::Function(func) => {
                let arg = stack.pop(token)?;
                stack.push(function::apply(*func, arg));
            },
            Token::LeftParen | Token::RightParen => {},
        }
        trace!("after {token}: {:?}", stack.values);
    }

    let result = stack.into_result();
    debug!("postfix evaluation finished with {result:?}");
    result
}
