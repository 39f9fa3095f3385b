//! Expression evaluator: scanner tokens applied to a stack, in order.

use tracing::trace;

use crate::core::error::CalcError;
use crate::core::scanner::{Token, scan};
use crate::core::stack::Stack;

/// Evaluate a postfix expression against `stack`.
///
/// Stops at the first lexical or arithmetic error. Tokens applied before the
/// error keep their effect on the stack.
pub fn evaluate(stack: &mut Stack, expression: &str) -> Result<(), CalcError> {
    for token in scan(expression) {
        let result = token.and_then(|token| match token {
            Token::Number(value) => {
                stack.push(value);
                Ok(())
            }
            Token::Operator(op) => stack.apply(op),
        });

        if let Err(e) = result {
            trace!(%e, depth = stack.len(), "evaluation stopped");
            return Err(e);
        }
    }
    Ok(())
}
