/// The evaluator module executes postfix programs.
///
/// Runs the postfix token sequence against an operand stack and produces the
/// final floating-point value.
///
/// # Responsibilities
/// - Parses number tokens and applies operators and functions.
/// - Detects missing operands and leftover values.
pub mod evaluator;
/// The lexer module tokenizes expressions.
///
/// Reads the raw expression text and produces numbers, operators,
/// parentheses and function names. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Skips whitespace and rejects unknown symbols.
pub mod lexer;
/// The postfix module reorders tokens for stack evaluation.
///
/// Applies the shunting-yard algorithm to the infix token sequence so the
/// evaluator can run it left to right with a single stack.
pub mod postfix;
