use std::fs;

use keycalc::{error::EvalError, evaluate};
use walkdir::WalkDir;

const TOLERANCE: f64 = 1e-9;

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!((value - expected).abs() < TOLERANCE,
                             "{src:?} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> EvalError {
    match evaluate(src) {
        Ok(value) => panic!("{src:?} evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn case_files_evaluate_as_listed() {
    let mut count = 0;

    for entry in WalkDir::new("tests/cases").into_iter()
                                            .filter_map(Result::ok)
                                            .filter(|e| {
                                                e.path()
                                                 .extension()
                                                 .is_some_and(|ext| ext == "calc")
                                            })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for line in content.lines().filter(|l| !l.trim_start().starts_with('#')) {
            let Some((expression, expected)) = line.split_once('=') else {
                continue;
            };
            count += 1;
            let expression = expression.trim();
            let result = evaluate(expression);

            match expected.trim() {
                "Error" => assert!(result.is_err(),
                                   "{path:?}: {expression:?} should fail, got {result:?}"),
                "NaN" => assert!(result.as_ref().is_ok_and(|v| v.is_nan()),
                                 "{path:?}: {expression:?} should be NaN, got {result:?}"),
                text => {
                    let expected: f64 = text.parse()
                                            .unwrap_or_else(|_| panic!("bad expectation {text:?}"));
                    let value = result.unwrap_or_else(|e| {
                                          panic!("{path:?}: {expression:?} failed: {e}")
                                      });
                    if expected.is_infinite() {
                        assert_eq!(value, expected, "{path:?}: {expression:?}");
                    } else {
                        assert!((value - expected).abs() < TOLERANCE,
                                "{path:?}: {expression:?} evaluated to {value}, expected {expected}");
                    }
                },
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

#[test]
fn precedence_and_associativity() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("2-3-4", -5.0);
    assert_value("64/4/2", 8.0);
    assert_value("2*3-4/2", 4.0);
}

#[test]
fn function_binding() {
    assert_value("sin(0)", 0.0);
    assert_value("sqrt(16)", 4.0);
    assert_value("log(100)", 2.0);
    assert_value("sqrt(16)*2", 8.0);
    assert_value("2*sqrt(9+7)", 8.0);
}

#[test]
fn trigonometry_uses_degrees() {
    assert_value("sin(30)", 0.5);
    assert_value("cos(180)", -1.0);
    assert_value("tan(0)", 0.0);
}

#[test]
fn negation_covers_the_whole_group() {
    assert_value("(-5+3)", -8.0);
    assert_value("(-2*3+1)", -7.0);
    assert_value("4+(-1)", 3.0);
}

#[test]
fn negation_after_an_operator_covers_one_operand() {
    assert_value("2*-3+1", -5.0);
    assert_value("1-2*-3+4", 11.0);
    assert_value("10/-2-1", -6.0);
    assert_eq!(evaluate("2*-3+1"), evaluate("2*(-3)+1"));
}

#[test]
fn empty_input_is_unbalanced() {
    assert_eq!(assert_failure(""), EvalError::UnbalancedStack { remaining: 0 });
    assert_eq!(assert_failure("   "), EvalError::UnbalancedStack { remaining: 0 });
}

#[test]
fn dangling_operator_underflows() {
    assert_eq!(assert_failure("5/"), EvalError::StackUnderflow { token: "/".to_string() });
    assert_eq!(assert_failure("sin()"),
               EvalError::StackUnderflow { token: "sin".to_string() });
}

#[test]
fn adjacent_operands_leave_values_behind() {
    assert_eq!(assert_failure("2 3"), EvalError::UnbalancedStack { remaining: 2 });
    assert_eq!(assert_failure("sin(30)2"), EvalError::UnbalancedStack { remaining: 2 });
}

#[test]
fn malformed_numbers_are_reported() {
    assert_eq!(assert_failure("1.2.3+1"),
               EvalError::MalformedNumber { text: "1.2.3".to_string() });
}

#[test]
fn unknown_symbols_are_reported() {
    assert_eq!(assert_failure("foo(2)"),
               EvalError::UnknownSymbol { symbol: "foo".to_string() });
    assert_eq!(assert_failure("2^3"), EvalError::UnknownSymbol { symbol: "^".to_string() });
    assert_eq!(assert_failure("1e5"), EvalError::UnknownSymbol { symbol: "e".to_string() });
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_eq!(evaluate("1/0"), Ok(f64::INFINITY));
    assert!(evaluate("0/0").is_ok_and(f64::is_nan));
}
