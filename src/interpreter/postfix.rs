use log::{debug, trace, warn};

use crate::{
    interpreter::lexer::Token,
    symbol::{Function, Operator},
};

/// An entry waiting on the converter's operator stack.
///
/// Numbers and closing parentheses never end up here.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    Operator(Operator),
    Function(Function),
    LeftParen,
    /// A `-` opening its group. Its `0` left operand has already been
    /// written to the output, and it stays pending until the group closes.
    GroupNegation,
    /// A `-` right after a binary operator. Its `0` left operand has already
    /// been written to the output, and it only covers the next operand.
    Negation,
}

/// What the previous token leaves the converter expecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    /// Start of input or right after `(`: a `-` negates the whole group.
    GroupStart,
    /// Right after an operator or negation: a `-` negates the next operand.
    AfterOperator,
    /// Right after a number or `)`: a `-` is a binary subtraction.
    AfterOperand,
}

impl Pending {
    /// Precedence of the entry as seen by an incoming operator.
    const fn precedence(self) -> u8 {
        match self {
            Self::Operator(op) => op.precedence(),
            Self::Function(_) | Self::LeftParen | Self::GroupNegation => 0,
            Self::Negation => 3,
        }
    }

    /// The token the entry turns into once it leaves the stack.
    fn into_token(self) -> Token {
        match self {
            Self::Operator(op) => Token::Operator(op),
            Self::Function(func) => Token::Function(func),
            Self::LeftParen => Token::LeftParen,
            Self::GroupNegation | Self::Negation => Token::Operator(Operator::Subtract),
        }
    }
}

/// Reorders infix tokens into postfix (reverse Polish) order.
///
/// This is the shunting-yard algorithm with `+ -` binding weaker than `* /`
/// and all four operators associating to the left. A function is held back
/// until the `)` closing its argument, so it binds to exactly the
/// parenthesised group that follows it.
///
/// A `-` where an operand is expected is a prefix negation, rewritten as
/// `0 - …`. At the start of the input or right after `(` it has the lowest
/// precedence and covers everything up to the end of its group, so `(-5+3)`
/// means `-(5+3)`. Right after another operator it binds tighter than any
/// binary operator and covers only the next operand, so `2*-3+1` means
/// `2*(-3)+1`.
///
/// The conversion never fails. An unmatched `)` empties the stack, and
/// unclosed `(` entries are flushed to the output at the end, where the
/// evaluator ignores them. Malformed input shows up later as missing or
/// surplus operands.
///
/// # Example
/// ```
/// use keycalc::interpreter::{lexer::tokenize, postfix::to_postfix};
///
/// let tokens = tokenize("2+3*4").unwrap();
/// let rpn = to_postfix(&tokens).iter().map(ToString::to_string).collect::<String>();
/// assert_eq!(rpn, "234*+");
///
/// let tokens = tokenize("sin(30)*2").unwrap();
/// let rpn = to_postfix(&tokens).iter().map(ToString::to_string).collect::<Vec<_>>();
/// assert_eq!(rpn, ["30", "sin", "2", "*"]);
/// ```
#[must_use]
pub fn to_postfix(tokens: &[Token]) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();
    let mut position = Position::GroupStart;

    for token in tokens {
        trace!("postfix: {token} with stack {stack:?}");
        match token {
            Token::Number(_) => {
                output.push(token.clone());
                position = Position::AfterOperand;
            },
            Token::Function(func) => {
                stack.push(Pending::Function(*func));
                position = Position::AfterOperator;
            },
            Token::LeftParen => {
                stack.push(Pending::LeftParen);
                position = Position::GroupStart;
            },
            Token::RightParen => {
                close_group(&mut stack, &mut output);
                position = Position::AfterOperand;
            },
            Token::Operator(Operator::Subtract) if position != Position::AfterOperand => {
                output.push(Token::Number("0".to_string()));
                stack.push(if position == Position::GroupStart {
                               Pending::GroupNegation
                           } else {
                               Pending::Negation
                           });
                position = Position::AfterOperator;
            },
            Token::Operator(op) => {
                while let Some(&top) = stack.last()
                      && op.precedence() <= top.precedence()
                {
                    output.push(top.into_token());
                    stack.pop();
                }
                stack.push(Pending::Operator(*op));
                position = Position::AfterOperator;
            },
        }
    }

    if stack.contains(&Pending::LeftParen) {
        warn!("unclosed '(' in expression, closing at end of input");
    }
    output.extend(stack.into_iter().rev().map(Pending::into_token));

    debug!("postfix order: {}",
           output.iter().map(ToString::to_string).collect::<Vec<_>>().join(" "));
    output
}

/// Handles a `)`: flushes the group's pending operators, drops its `(` and,
/// if the group was a function argument, flushes the function as well.
fn close_group(stack: &mut Vec<Pending>, output: &mut Vec<Token>) {
    while let Some(top) = stack.pop() {
        if top == Pending::LeftParen {
            if let Some(&Pending::Function(func)) = stack.last() {
                output.push(Token::Function(func));
                stack.pop();
            }
            return;
        }
        output.push(top.into_token());
    }
    warn!("unmatched ')' in expression, ignoring it");
}
