//! Postfix expression scanner
//!
//! Turns a raw input line into number literals and single-character
//! operators. The scanner is a plain iterator: it walks the input once,
//! lazily, and cannot be rewound.
//!
//! Grammar: literals match `digit+ ('.' digit*)?`, operators are one of
//! `+ - * / ^`, and tokens are separated by any run of space, tab, newline
//! or comma. There is no unary minus.

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use crate::core::error::CalcError;

/// Characters skipped between tokens
pub const IGNORE_CHARACTERS: [char; 4] = [' ', '\t', '\n', ','];

// =============================================================================
// TOKEN TYPES
// =============================================================================

/// Binary operators understood by the stack machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Diff,
    Mul,
    Div,
    Pow,
}

impl Operator {
    /// Map an input character to its operator
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Diff),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Diff => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A scanned token
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
}

// =============================================================================
// SCANNER
// =============================================================================

/// Lazy tokenizer over a single expression
pub struct Scanner<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    /// Consume the longest literal starting at `start`.
    ///
    /// A second decimal point ends the literal right before it; the point is
    /// left for the next call to `next`, which rejects it. Literals too large
    /// for a finite `f64` are rejected.
    fn scan_number(&mut self, start: usize) -> Result<Token, CalcError> {
        let mut end = start;
        let mut seen_point = false;

        while let Some(&(pos, ch)) = self.chars.peek() {
            match ch {
                '0'..='9' => {}
                '.' if !seen_point => seen_point = true,
                _ => break,
            }
            end = pos + ch.len_utf8();
            self.chars.next();
        }

        let literal = &self.input[start..end];
        match literal.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Token::Number(value)),
            _ => Err(CalcError::InvalidNumber {
                literal: literal.to_string(),
            }),
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, CalcError>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&(pos, ch)) = self.chars.peek() {
            if IGNORE_CHARACTERS.contains(&ch) {
                self.chars.next();
                continue;
            }

            if ch.is_ascii_digit() {
                return Some(self.scan_number(pos));
            }

            self.chars.next();
            return Some(match Operator::from_char(ch) {
                Some(op) => Ok(Token::Operator(op)),
                None => Err(CalcError::UnexpectedCharacter { ch, position: pos }),
            });
        }

        None
    }
}

/// Start scanning an expression
pub fn scan(expression: &str) -> Scanner<'_> {
    Scanner::new(expression)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Result<Token, CalcError>> {
        scan(input).collect()
    }

    #[test]
    fn test_numbers_and_operators() {
        assert_eq!(
            tokens("12 3.5 +"),
            vec![
                Ok(Token::Number(12.0)),
                Ok(Token::Number(3.5)),
                Ok(Token::Operator(Operator::Add)),
            ]
        );
    }

    #[test]
    fn test_no_separator_needed_before_operator() {
        assert_eq!(
            tokens("5432 000542345+"),
            vec![
                Ok(Token::Number(5432.0)),
                Ok(Token::Number(542345.0)),
                Ok(Token::Operator(Operator::Add)),
            ]
        );
    }

    #[test]
    fn test_ignorable_characters() {
        assert_eq!(
            tokens(" \t1,2\n*"),
            vec![
                Ok(Token::Number(1.0)),
                Ok(Token::Number(2.0)),
                Ok(Token::Operator(Operator::Mul)),
            ]
        );
        assert!(tokens(" ,\t\n").is_empty());
    }

    #[test]
    fn test_trailing_point_is_part_of_number() {
        assert_eq!(tokens("3."), vec![Ok(Token::Number(3.0))]);
    }

    #[test]
    fn test_second_point_ends_number() {
        assert_eq!(
            tokens("3.25.15"),
            vec![
                Ok(Token::Number(3.25)),
                Err(CalcError::UnexpectedCharacter {
                    ch: '.',
                    position: 4
                }),
                Ok(Token::Number(15.0)),
            ]
        );
    }

    #[test]
    fn test_minus_is_always_an_operator() {
        assert_eq!(
            tokens("-432"),
            vec![
                Ok(Token::Operator(Operator::Diff)),
                Ok(Token::Number(432.0)),
            ]
        );
    }

    #[test]
    fn test_unexpected_character() {
        assert_eq!(
            tokens("3425345 o"),
            vec![
                Ok(Token::Number(3425345.0)),
                Err(CalcError::UnexpectedCharacter {
                    ch: 'o',
                    position: 8
                }),
            ]
        );
        assert_eq!(
            tokens(".5"),
            vec![
                Err(CalcError::UnexpectedCharacter {
                    ch: '.',
                    position: 0
                }),
                Ok(Token::Number(5.0)),
            ]
        );
    }

    #[test]
    fn test_overflowing_literal() {
        let literal = "9".repeat(400);
        assert_eq!(
            tokens(&format!("{} 1", literal)),
            vec![
                Err(CalcError::InvalidNumber {
                    literal: literal.clone()
                }),
                Ok(Token::Number(1.0)),
            ]
        );
        assert_eq!(
            tokens(&format!("{}.5", "9".repeat(300))),
            vec![Ok(Token::Number(1e300))]
        );
    }

    #[test]
    fn test_scanner_is_exhausted_once() {
        let mut scanner = scan("1");
        assert_eq!(scanner.next(), Some(Ok(Token::Number(1.0))));
        assert_eq!(scanner.next(), None);
        assert_eq!(scanner.next(), None);
    }

    #[test]
    fn test_operator_round_trip() {
        for ch in ['+', '-', '*', '/', '^'] {
            let op = Operator::from_char(ch).unwrap();
            assert_eq!(op.symbol(), ch);
            assert_eq!(op.to_string(), ch.to_string());
        }
        assert_eq!(Operator::from_char('%'), None);
    }
}
