use std::str::FromStr;

use log::{debug, info, warn};

use crate::{
    Settings,
    error::{EvalError, EvalResult},
    evaluate_with,
    symbol::{Function, Operator},
    util::format::format_result,
};

/// Text shown on the display after a failed evaluation.
pub const ERROR_INDICATOR: &str = "Error";

/// A single keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// `0` through `9`. Pressing it with any other character does nothing.
    Digit(char),
    /// `.`
    Dot,
    /// `+`, `-`, `*` or `/`.
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `sin`, `cos`, `tan`, `sqrt` or `log`; types the name and an opening
    /// parenthesis.
    Function(Function),
    /// `±`; wraps everything typed so far in `(-` and `)`.
    Negate,
    /// `C`; empties the input and the display.
    Clear,
    /// `=`; evaluates the input.
    Equals,
}

impl Key {
    /// Every button, in the order they are laid out on the keypad.
    pub const LAYOUT: [&'static str; 25] = ["C", "(", ")", "/", "7", "8", "9", "*", "4", "5",
                                            "6", "-", "1", "2", "3", "+", "0", ".", "=", "±",
                                            "sin", "cos", "tan", "sqrt", "log"];

    /// Maps a button label to its key.
    ///
    /// `+/-` is accepted as an ASCII spelling of `±`.
    ///
    /// # Example
    /// ```
    /// use keycalc::{keypad::Key, symbol::Function};
    ///
    /// assert_eq!(Key::from_label("7"), Some(Key::Digit('7')));
    /// assert_eq!(Key::from_label("sqrt"), Some(Key::Function(Function::Sqrt)));
    /// assert_eq!(Key::from_label("±"), Some(Key::Negate));
    /// assert_eq!(Key::from_label("%"), None);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let key = match label {
            "C" => Self::Clear,
            "=" => Self::Equals,
            "±" | "+/-" => Self::Negate,
            "." => Self::Dot,
            "(" => Self::LeftParen,
            ")" => Self::RightParen,
            "+" => Self::Operator(Operator::Add),
            "-" => Self::Operator(Operator::Subtract),
            "*" => Self::Operator(Operator::Multiply),
            "/" => Self::Operator(Operator::Divide),
            _ => {
                let mut chars = label.chars();
                return match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Some(Self::Digit(c)),
                    _ => Function::from_str(label).ok().map(Self::Function),
                };
            },
        };
        Some(key)
    }
}

/// The input side of a calculator: an accumulating text buffer and the
/// display in front of it.
///
/// The keypad owns its buffer; evaluation itself keeps no state between
/// presses of `=`.
///
/// # Example
/// ```
/// use keycalc::keypad::{Key, Keypad};
///
/// let mut keypad = Keypad::new();
/// for label in ["5", "+", "3", "±", "="] {
///     keypad.press(Key::from_label(label).unwrap());
/// }
/// assert_eq!(keypad.display(), "-8.0");
/// assert_eq!(keypad.input(), "");
/// ```
#[derive(Debug, Default)]
pub struct Keypad {
    input:       String,
    display:     String,
    settings:    Settings,
    last_result: Option<EvalResult<f64>>,
}

impl Keypad {
    /// Creates an empty keypad with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty keypad that evaluates with the given settings.
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self { settings,
               ..Self::default() }
    }

    /// The expression typed so far.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The text currently on the display.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Outcome of the most recent `=`, if any since the last clear.
    #[must_use]
    pub const fn last_result(&self) -> Option<&EvalResult<f64>> {
        self.last_result.as_ref()
    }

    /// Handles one button press and returns the new display text.
    pub fn press(&mut self, key: Key) -> &str {
        match key {
            Key::Clear => {
                self.input.clear();
                self.display.clear();
                self.last_result = None;
            },
            Key::Equals => self.evaluate(),
            Key::Negate => {
                self.input.insert_str(0, "(-");
                self.input.push(')');
                self.display.clone_from(&self.input);
            },
            Key::Function(func) => {
                self.input.push_str(func.name());
                self.input.push('(');
                self.display.clone_from(&self.input);
            },
            Key::Digit(c) if c.is_ascii_digit() => self.type_char(c),
            Key::Digit(c) => warn!("ignoring digit key with non-digit {c:?}"),
            Key::Dot => self.type_char('.'),
            Key::Operator(op) => self.type_char(op.symbol()),
            Key::LeftParen => self.type_char('('),
            Key::RightParen => self.type_char(')'),
        }
        &self.display
    }

    /// Presses the keys named by whitespace-separated labels in order.
    ///
    /// # Errors
    /// Returns [`EvalError::UnknownSymbol`] for the first label that is not a
    /// keypad button; keys before it have already been pressed.
    pub fn press_labels(&mut self, labels: &str) -> EvalResult<&str> {
        for label in labels.split_whitespace() {
            let key = Key::from_label(label).ok_or_else(|| EvalError::UnknownSymbol {
                                                           symbol: label.to_string(),
                                                       })?;
            self.press(key);
        }
        Ok(&self.display)
    }

    fn type_char(&mut self, c: char) {
        self.input.push(c);
        self.display.clone_from(&self.input);
    }

    fn evaluate(&mut self) {
        let result = evaluate_with(&self.input, &self.settings);
        match &result {
            Ok(value) => self.display = format_result(*value),
            Err(e) => {
                info!("evaluation of {:?} failed: {e}", self.input);
                self.display = ERROR_INDICATOR.to_string();
            },
        }
        debug!("display now shows {:?}", self.display);
        self.input.clear();
        self.last_result = Some(result);
    }
}
