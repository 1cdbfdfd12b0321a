/// Smallest magnitude printed in plain decimal notation.
const PLAIN_MIN: f64 = 1e-3;
/// Magnitude from which scientific notation is used.
const PLAIN_MAX: f64 = 1e7;

/// Formats a result for the display.
///
/// Follows the usual double-to-string convention of desktop calculators:
/// - integral values keep one decimal place (`14.0`),
/// - magnitudes below `1e-3` or from `1e7` upward use scientific notation
///   with an upper-case `E` (`1.0E7`, `2.5E-4`),
/// - non-finite values are spelled `NaN`, `Infinity` and `-Infinity`.
///
/// # Example
/// ```
/// use keycalc::util::format::format_result;
///
/// assert_eq!(format_result(14.0), "14.0");
/// assert_eq!(format_result(-0.25), "-0.25");
/// assert_eq!(format_result(12_345_678.0), "1.2345678E7");
/// assert_eq!(format_result(f64::INFINITY), "Infinity");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        with_decimal_point(format!("{value}"))
    } else {
        let scientific = format!("{value:e}");
        match scientific.split_once('e') {
            Some((mantissa, exponent)) => {
                format!("{}E{exponent}", with_decimal_point(mantissa.to_string()))
            },
            None => scientific,
        }
    }
}

fn with_decimal_point(mut digits: String) -> String {
    if !digits.contains('.') {
        digits.push_str(".0");
    }
    digits
}
