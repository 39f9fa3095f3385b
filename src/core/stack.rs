//! Value stack for the RPN machine.
//!
//! Binary operations pop `rhs` first, then `lhs`. They are deliberately not
//! atomic: an operand popped before a failure is gone for good.
//!
//! | operation | consumed on failure                                   |
//! |-----------|-------------------------------------------------------|
//! | add/diff/mul | the top value if only one was present              |
//! | div       | `rhs` on division by zero; the top value on underflow |
//! | pow       | `rhs` and `lhs` on an invalid power                   |

use std::fmt;

use crate::core::error::{CalcError, PowerError};
use crate::core::scanner::Operator;

/// Format a value the way the calculator prints it.
///
/// Shortest round-trip digits; exponent notation (`1e+06`, `1.5e-05`) once
/// the decimal exponent is below -4 or at least 6.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if value == 0.0 {
        return value.to_string();
    }

    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let exponent: i32 = match exponent.parse() {
        Ok(exponent) => exponent,
        Err(_) => return value.to_string(),
    };

    if (-4..6).contains(&exponent) {
        value.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
    }
}

/// Ordered stack of `f64`, last element on top
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stack {
    values: Vec<f64>,
}

impl Stack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Create a stack holding `values`, bottom to top
    pub fn with_values(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
        }
    }

    /// Snapshot of the stack, bottom to top
    pub fn values(&self) -> Vec<f64> {
        self.values.clone()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Top value without removing it
    pub fn peek(&self) -> Option<f64> {
        self.values.last().copied()
    }

    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Remove and return the top value
    pub fn pop(&mut self) -> Result<f64, CalcError> {
        self.values
            .pop()
            .ok_or(CalcError::StackUnderflow { operation: None })
    }

    fn pop_for(&mut self, operation: Operator) -> Result<f64, CalcError> {
        self.values
            .pop()
            .ok_or(CalcError::StackUnderflow {
                operation: Some(operation),
            })
    }

    /// Pop `rhs` then `lhs` for a binary operator
    fn pop_operands(&mut self, op: Operator) -> Result<(f64, f64), CalcError> {
        let rhs = self.pop_for(op)?;
        let lhs = self.pop_for(op)?;
        Ok((lhs, rhs))
    }

    pub fn add(&mut self) -> Result<(), CalcError> {
        let (lhs, rhs) = self.pop_operands(Operator::Add)?;
        self.push(lhs + rhs);
        Ok(())
    }

    pub fn diff(&mut self) -> Result<(), CalcError> {
        let (lhs, rhs) = self.pop_operands(Operator::Diff)?;
        self.push(lhs - rhs);
        Ok(())
    }

    pub fn mul(&mut self) -> Result<(), CalcError> {
        let (lhs, rhs) = self.pop_operands(Operator::Mul)?;
        self.push(lhs * rhs);
        Ok(())
    }

    /// Divide. A zero divisor is rejected before `lhs` is popped.
    pub fn div(&mut self) -> Result<(), CalcError> {
        let rhs = self.pop_for(Operator::Div)?;
        if rhs == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        let lhs = self.pop_for(Operator::Div)?;
        self.push(lhs / rhs);
        Ok(())
    }

    /// Raise `lhs` to `rhs`. Both operands are consumed before validation.
    pub fn pow(&mut self) -> Result<(), CalcError> {
        let (lhs, rhs) = self.pop_operands(Operator::Pow)?;
        let reason = if lhs == 0.0 && rhs == 0.0 {
            Some(PowerError::ZeroToZero)
        } else if lhs < 0.0 && rhs.fract() != 0.0 {
            Some(PowerError::NegativeFractional)
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(CalcError::InvalidPower {
                base: lhs,
                exponent: rhs,
                reason,
            });
        }
        self.push(lhs.powf(rhs));
        Ok(())
    }

    /// Apply a binary operator to the top of the stack
    pub fn apply(&mut self, op: Operator) -> Result<(), CalcError> {
        match op {
            Operator::Add => self.add(),
            Operator::Diff => self.diff(),
            Operator::Mul => self.mul(),
            Operator::Div => self.div(),
            Operator::Pow => self.pow(),
        }
    }
}

impl From<Vec<f64>> for Stack {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            f.write_str(&format_number(*value))?;
        }
        write!(f, "]")
    }
}
