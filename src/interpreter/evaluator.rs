/// Postfix execution against the operand stack.
///
/// Walks a postfix token sequence, pushing numbers and applying operators
/// and functions to the values below them, and checks that exactly one
/// value is left at the end.
pub mod core;

/// Builtin function table.
///
/// Maps every keypad function to the numeric routine implementing it.
pub mod function;
