use std::{fmt, str::FromStr};

/// The four binary arithmetic operators understood by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl Operator {
    /// Returns the binding strength used by the shunting-yard conversion.
    ///
    /// Additive operators bind with `1`, multiplicative ones with `2`.
    /// Everything that is not an operator (functions, parentheses, prefix
    /// negation) compares as `0`, see [`crate::interpreter::postfix`].
    ///
    /// # Example
    /// ```
    /// use keycalc::symbol::Operator;
    ///
    /// assert!(Operator::Multiply.precedence() > Operator::Add.precedence());
    /// assert_eq!(Operator::Add.precedence(), Operator::Subtract.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }

    /// Applies the operator to a left and a right operand.
    ///
    /// Division follows IEEE 754: dividing by zero yields an infinity or NaN
    /// instead of an error.
    ///
    /// # Example
    /// ```
    /// use keycalc::symbol::Operator;
    ///
    /// assert_eq!(Operator::Subtract.apply(2.0, 3.0), -1.0);
    /// assert!(Operator::Divide.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
        }
    }

    /// The single character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Single-argument functions available on the keypad.
///
/// Trigonometric functions take their argument in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    /// Sine of an angle in degrees.
    Sin,
    /// Cosine of an angle in degrees.
    Cos,
    /// Tangent of an angle in degrees.
    Tan,
    /// Principal square root.
    Sqrt,
    /// Base-10 logarithm.
    Log,
}

impl Function {
    /// Every function, in keypad order.
    pub const ALL: [Self; 5] = [Self::Sin, Self::Cos, Self::Tan, Self::Sqrt, Self::Log];

    /// The name the function is spelled with in expressions.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Log => "log",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Function {
    type Err = ();

    /// Looks a function up by its exact, case-sensitive name.
    ///
    /// Callers report the unmatched text themselves, so the error carries no
    /// payload.
    ///
    /// # Example
    /// ```
    /// use keycalc::symbol::Function;
    ///
    /// assert_eq!("sqrt".parse(), Ok(Function::Sqrt));
    /// assert_eq!("Sqrt".parse::<Function>(), Err(()));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter()
                 .find(|func| func.name() == s)
                 .ok_or(())
    }
}
