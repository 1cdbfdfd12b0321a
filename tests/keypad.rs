use keycalc::{
    Settings,
    error::EvalError,
    keypad::{ERROR_INDICATOR, Key, Keypad},
    symbol::Function,
};

fn press_all(keypad: &mut Keypad, labels: &str) {
    if let Err(e) = keypad.press_labels(labels) {
        panic!("Unexpected label in {labels:?}: {e}");
    }
}

#[test]
fn every_layout_label_is_a_key() {
    for label in Key::LAYOUT {
        assert!(Key::from_label(label).is_some(), "{label} is not recognised");
    }
}

#[test]
fn typing_accumulates_in_the_display() {
    let mut keypad = Keypad::new();
    press_all(&mut keypad, "1 2 . 5 + 3");
    assert_eq!(keypad.input(), "12.5+3");
    assert_eq!(keypad.display(), "12.5+3");
}

#[test]
fn equals_shows_result_and_clears_input() {
    let mut keypad = Keypad::new();
    press_all(&mut keypad, "2 + 3 * 4 =");
    assert_eq!(keypad.display(), "14.0");
    assert_eq!(keypad.input(), "");
    assert_eq!(keypad.last_result(), Some(&Ok(14.0)));
}

#[test]
fn negate_wraps_the_whole_input() {
    let mut keypad = Keypad::new();
    press_all(&mut keypad, "5 + 3 ±");
    assert_eq!(keypad.input(), "(-5+3)");

    keypad.press(Key::Equals);
    assert_eq!(keypad.display(), "-8.0");
}

#[test]
fn repeated_negate_nests_instead_of_toggling() {
    let mut keypad = Keypad::new();
    press_all(&mut keypad, "7 ± ±");
    assert_eq!(keypad.input(), "(-(-7))");

    keypad.press(Key::Equals);
    assert_eq!(keypad.display(), "7.0");
}

#[test]
fn function_keys_open_a_parenthesis() {
    let mut keypad = Keypad::new();
    keypad.press(Key::Function(Function::Sqrt));
    assert_eq!(keypad.display(), "sqrt(");

    press_all(&mut keypad, "8 1 ) =");
    assert_eq!(keypad.display(), "9.0");
}

#[test]
fn unclosed_function_argument_still_evaluates() {
    let mut keypad = Keypad::new();
    press_all(&mut keypad, "sqrt 2 5 =");
    assert_eq!(keypad.display(), "5.0");
}

#[test]
fn failure_shows_error_and_clears_input() {
    let mut keypad = Keypad::new();
    press_all(&mut keypad, "5 / =");
    assert_eq!(keypad.display(), ERROR_INDICATOR);
    assert_eq!(keypad.input(), "");
    assert!(matches!(keypad.last_result(), Some(Err(EvalError::StackUnderflow { .. }))));

    press_all(&mut keypad, "sin ) =");
    assert_eq!(keypad.display(), ERROR_INDICATOR);
}

#[test]
fn result_is_not_continued_by_further_typing() {
    let mut keypad = Keypad::new();
    press_all(&mut keypad, "2 + 2 = + 1");
    assert_eq!(keypad.input(), "+1");
}

#[test]
fn clear_resets_everything() {
    let mut keypad = Keypad::new();
    press_all(&mut keypad, "9 * 9 = 1 C");
    assert_eq!(keypad.input(), "");
    assert_eq!(keypad.display(), "");
    assert_eq!(keypad.last_result(), None);
}

#[test]
fn non_finite_results_are_shown() {
    let mut keypad = Keypad::new();
    press_all(&mut keypad, "1 / 0 =");
    assert_eq!(keypad.display(), "Infinity");

    press_all(&mut keypad, "0 / 0 =");
    assert_eq!(keypad.display(), "NaN");
}

#[test]
fn strict_settings_turn_non_finite_results_into_errors() {
    let mut keypad = Keypad::with_settings(Settings { reject_non_finite: true });
    press_all(&mut keypad, "1 / 0 =");
    assert_eq!(keypad.display(), ERROR_INDICATOR);
    assert!(matches!(keypad.last_result(), Some(Err(EvalError::NonFiniteResult { .. }))));
}

#[test]
fn digit_keys_only_type_digits() {
    let mut keypad = Keypad::new();
    keypad.press(Key::Digit('4'));
    assert_eq!(keypad.press(Key::Digit('x')), "4");
    keypad.press(Key::Digit('٣'));
    assert_eq!(keypad.input(), "4");
}

#[test]
fn unknown_labels_are_rejected() {
    let mut keypad = Keypad::new();
    assert_eq!(keypad.press_labels("1 %"),
               Err(EvalError::UnknownSymbol { symbol: "%".to_string() }));
    assert_eq!(keypad.input(), "1");
}
