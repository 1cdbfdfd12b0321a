/// Result formatting.
///
/// Renders evaluation results the way the keypad display shows them.
pub mod format;
