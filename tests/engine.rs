use proptest::prelude::*;

use rpnline::core::scanner::{self, Operator, Token};
use rpnline::core::{CalcError, PowerError, Stack, evaluate};

fn eval(expression: &str) -> (Vec<f64>, Result<(), CalcError>) {
    let mut stack = Stack::new();
    let result = evaluate(&mut stack, expression);
    (stack.values(), result)
}

#[test]
fn test_large_sum() {
    assert_eq!(eval("42532454 2 +"), (vec![42532456.0], Ok(())));
}

#[test]
fn test_leading_zeros_and_no_separator() {
    assert_eq!(eval("5432 000542345+"), (vec![547777.0], Ok(())));
}

#[test]
fn test_trailing_operand_is_left_on_stack() {
    assert_eq!(eval("23 42 +15"), (vec![65.0, 15.0], Ok(())));
}

#[test]
fn test_overflowing_literal_is_an_error() {
    let literal = "9".repeat(400);
    assert_eq!(
        eval(&literal),
        (vec![], Err(CalcError::InvalidNumber { literal }))
    );
}

#[test]
fn test_division_by_zero_keeps_lhs() {
    assert_eq!(eval("3 0 /"), (vec![3.0], Err(CalcError::DivisionByZero)));
}

#[test]
fn test_invalid_powers() {
    let (values, result) = eval("0 0 ^");
    assert!(values.is_empty());
    assert!(matches!(
        result,
        Err(CalcError::InvalidPower {
            reason: PowerError::ZeroToZero,
            ..
        })
    ));

    let (values, result) = eval("0 1 - 0.3 ^");
    assert!(values.is_empty());
    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot raise a negative number to a fractional exponent"
    );
}

#[test]
fn test_minus_is_always_an_operator() {
    let tokens: Vec<_> = scanner::scan("-432").collect::<Result<_, _>>().unwrap();
    assert_eq!(
        tokens,
        vec![Token::Operator(Operator::Diff), Token::Number(432.0)]
    );
    assert_eq!(
        eval("-432"),
        (
            vec![],
            Err(CalcError::StackUnderflow {
                operation: Some(Operator::Diff)
            })
        )
    );
}

#[test]
fn test_work_before_error_is_kept() {
    let (values, result) = eval("1 2 + 4 5 x 6");
    assert_eq!(values, vec![3.0, 4.0, 5.0]);
    assert!(matches!(
        result,
        Err(CalcError::UnexpectedCharacter { ch: 'x', .. })
    ));
}

fn ignorable() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just(' '), Just('\t'), Just('\n'), Just(',')], 0..4)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_single_literal(
        int in 0u32..1_000_000,
        frac in proptest::option::of(0u32..1000),
        before in ignorable(),
        after in ignorable(),
    ) {
        let literal = match frac {
            Some(frac) => format!("{}.{}", int, frac),
            None => int.to_string(),
        };
        let expected: f64 = literal.parse().unwrap();
        let (values, result) = eval(&format!("{}{}{}", before, literal, after));
        prop_assert_eq!(result, Ok(()));
        prop_assert_eq!(values, vec![expected]);
    }

    #[test]
    fn prop_sum_matches_fold(values in proptest::collection::vec(0u32..10_000, 1..20)) {
        let mut expression = values.iter().map(u32::to_string).collect::<Vec<_>>().join(" ");
        for _ in 1..values.len() {
            expression.push_str(" +");
        }
        let expected: f64 = values.iter().map(|&v| f64::from(v)).sum();
        prop_assert_eq!(eval(&expression), (vec![expected], Ok(())));
    }

    #[test]
    fn prop_stack_matches_pushes(values in proptest::collection::vec(-1e6f64..1e6, 0..20)) {
        let mut stack = Stack::new();
        for &value in &values {
            stack.push(value);
        }
        prop_assert_eq!(stack.values(), values);
    }
}
