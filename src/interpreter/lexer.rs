use std::fmt;

use log::{debug, trace};
use logos::Logos;

use crate::{
    error::{EvalError, EvalResult},
    symbol::{Function, Operator},
};

/// Represents a lexical token of a calculator expression.
///
/// Tokens carry no position information. A [`Token::Number`] keeps its raw
/// text; turning it into a float is left to the evaluator so that malformed
/// literals such as `1.2.3` surface as [`EvalError::MalformedNumber`].
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// A run of digits and decimal points, such as `42`, `3.5` or `.5`.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_string())]
    Number(String),
    /// `+`, `-`, `*` or `/`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Subtract)]
    #[token("*", |_| Operator::Multiply)]
    #[token("/", |_| Operator::Divide)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// A run of letters naming one of the known functions.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().parse::<Function>().ok())]
    Function(Function),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) => f.write_str(text),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => f.write_str("("),
            Self::RightParen => f.write_str(")"),
            Self::Function(func) => write!(f, "{func}"),
        }
    }
}

/// Splits an expression into tokens in a single left-to-right pass.
///
/// Whitespace between tokens is ignored. Anything else that is not a number,
/// an operator, a parenthesis or a known function name is rejected.
///
/// # Errors
/// Returns [`EvalError::UnknownSymbol`] with the offending text for an
/// unrecognised character or an unknown letter run.
///
/// # Example
/// ```
/// use keycalc::{
///     interpreter::lexer::{Token, tokenize},
///     symbol::{Function, Operator},
/// };
///
/// let tokens = tokenize("sqrt(16)+2").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Function(Function::Sqrt),
///                 Token::LeftParen,
///                 Token::Number("16".to_string()),
///                 Token::RightParen,
///                 Token::Operator(Operator::Add),
///                 Token::Number("2".to_string())]);
///
/// assert!(tokenize("2 % 3").is_err());
/// ```
pub fn tokenize(source: &str) -> EvalResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            trace!("token {tok:?} at {:?}", lexer.span());
            tokens.push(tok);
        } else {
            return Err(EvalError::UnknownSymbol { symbol: lexer.slice().to_string() });
        }
    }

    debug!("tokenized {source:?} into {} tokens", tokens.len());
    Ok(tokens)
}
