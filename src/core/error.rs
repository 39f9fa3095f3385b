//! Errors raised by the expression engine.
//!
//! Every variant is local and recoverable: the evaluator hands the first one
//! back to its caller and the stack keeps whatever state it reached.

use thiserror::Error;

use crate::core::scanner::Operator;

/// Lexical and arithmetic failures of the RPN engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// A character outside the expression grammar, at a byte offset.
    #[error("unexpected character: {ch} (at position {position})")]
    UnexpectedCharacter { ch: char, position: usize },

    /// A literal that does not fit in a finite `f64`.
    #[error("invalid number: {literal}")]
    InvalidNumber { literal: String },

    /// Too few values on the stack. `operation` is `None` for a bare `pop`.
    #[error("{}", underflow_message(.operation))]
    StackUnderflow { operation: Option<Operator> },

    #[error("cannot divide by 0")]
    DivisionByZero,

    #[error("{reason}")]
    InvalidPower {
        base: f64,
        exponent: f64,
        reason: PowerError,
    },
}

/// Why an exponentiation was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PowerError {
    #[error("cannot raise 0 to the power of 0")]
    ZeroToZero,

    #[error("cannot raise a negative number to a fractional exponent")]
    NegativeFractional,
}

fn underflow_message(operation: &Option<Operator>) -> &'static str {
    match operation {
        Some(_) => "not enough elements in the stack",
        None => "stack is empty",
    }
}

impl CalcError {
    /// True for errors produced while scanning, before any stack access.
    pub fn is_lexical(&self) -> bool {
        matches!(
            self,
            CalcError::UnexpectedCharacter { .. } | CalcError::InvalidNumber { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "cannot divide by 0");
        assert_eq!(
            CalcError::UnexpectedCharacter {
                ch: 'p',
                position: 0
            }
            .to_string(),
            "unexpected character: p (at position 0)"
        );
        assert_eq!(
            CalcError::StackUnderflow { operation: None }.to_string(),
            "stack is empty"
        );
        assert_eq!(
            CalcError::StackUnderflow {
                operation: Some(Operator::Add)
            }
            .to_string(),
            "not enough elements in the stack"
        );
    }

    #[test]
    fn test_power_messages() {
        assert_eq!(
            CalcError::InvalidPower {
                base: 0.0,
                exponent: 0.0,
                reason: PowerError::ZeroToZero,
            }
            .to_string(),
            "cannot raise 0 to the power of 0"
        );
        assert_eq!(
            CalcError::InvalidPower {
                base: -1.0,
                exponent: 1.5,
                reason: PowerError::NegativeFractional,
            }
            .to_string(),
            "cannot raise a negative number to a fractional exponent"
        );
    }

    #[test]
    fn test_is_lexical() {
        assert!(CalcError::UnexpectedCharacter { ch: '.', position: 4 }.is_lexical());
        assert!(
            CalcError::InvalidNumber {
                literal: "9".repeat(400)
            }
            .is_lexical()
        );
        assert!(!CalcError::DivisionByZero.is_lexical());
        assert!(!CalcError::StackUnderflow { operation: None }.is_lexical());
    }
}
