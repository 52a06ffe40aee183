// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive-descent evaluator for substituted expressions.
//!
//! Input is restricted to numbers (with optional unit suffix), parentheses
//! and the operators `* / + - < > = # != & |`. Comparisons and logic
//! produce `1` or `0`. Binding, tightest first: unary minus, `* /`, `+ -`,
//! `< >`, `= # !=`, `&`, `|`.

use thiserror::Error;
use trex_core::parse_number;

/// Equality tolerance for `=`, `#` and `!=`.
const EPSILON: f64 = 1e-6;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    #[error("unexpected '{found}' at position {at}")]
    UnexpectedChar { found: char, at: usize },
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("unbalanced parenthesis at position {at}")]
    UnbalancedParenthesis { at: usize },
    #[error("unexpected trailing input at position {at}")]
    TrailingInput { at: usize },
    #[error("division by zero at position {at}")]
    DivisionByZero { at: usize },
    #[error("invalid number '{text}' at position {at}")]
    InvalidNumber { text: String, at: usize },
}

/// Evaluate `text` to a number.
pub fn evaluate(text: &str) -> Result<f64, EvalError> {
    let mut eval = Evaluator {
        chars: text.chars().collect(),
        pos: 0,
    };
    let value = eval.or()?;
    eval.skip_ws();
    match eval.peek() {
        None => Ok(value),
        Some(')') => Err(EvalError::UnbalancedParenthesis { at: eval.pos }),
        Some(_) => Err(EvalError::TrailingInput { at: eval.pos }),
    }
}

/// Evaluate `text` and treat any non-zero result as true.
pub fn evaluate_bool(text: &str) -> Result<bool, EvalError> {
    evaluate(text).map(truthy)
}

fn truthy(value: f64) -> bool {
    value != 0.0
}

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

struct Evaluator {
    chars: Vec<char>,
    pos: usize,
}

impl Evaluator {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    /// Consume `op` if it is next, skipping leading whitespace.
    fn eat(&mut self, op: &str) -> bool {
        self.skip_ws();
        let matches = op
            .chars()
            .enumerate()
            .all(|(i, c)| self.chars.get(self.pos + i) == Some(&c));
        if matches {
            self.pos += op.chars().count();
        }
        matches
    }

    fn or(&mut self) -> Result<f64, EvalError> {
        let mut value = self.and()?;
        while self.eat("|") {
            let rhs = self.and()?;
            value = flag(truthy(value) || truthy(rhs));
        }
        Ok(value)
    }

    fn and(&mut self) -> Result<f64, EvalError> {
        let mut value = self.equality()?;
        while self.eat("&") {
            let rhs = self.equality()?;
            value = flag(truthy(value) && truthy(rhs));
        }
        Ok(value)
    }

    fn equality(&mut self) -> Result<f64, EvalError> {
        let mut value = self.relational()?;
        loop {
            let equal = if self.eat("=") {
                true
            } else if self.eat("#") || self.eat("!=") {
                false
            } else {
                return Ok(value);
            };
            let rhs = self.relational()?;
            value = flag(((value - rhs).abs() <= EPSILON) == equal);
        }
    }

    fn relational(&mut self) -> Result<f64, EvalError> {
        let mut value = self.additive()?;
        loop {
            if self.eat("<") {
                let rhs = self.additive()?;
                value = flag(value < rhs);
            } else if self.eat(">") {
                let rhs = self.additive()?;
                value = flag(value > rhs);
            } else {
                return Ok(value);
            }
        }
    }

    fn additive(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        loop {
            if self.eat("+") {
                value += self.term()?;
            } else if self.eat("-") {
                value -= self.term()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.unary()?;
        loop {
            if self.eat("*") {
                value *= self.unary()?;
            } else if self.eat("/") {
                let at = self.pos - 1;
                let rhs = self.unary()?;
                if rhs == 0.0 {
                    return Err(EvalError::DivisionByZero { at });
                }
                value /= rhs;
            } else {
                return Ok(value);
            }
        }
    }

    fn unary(&mut self) -> Result<f64, EvalError> {
        if self.eat("-") {
            return Ok(-self.primary()?);
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<f64, EvalError> {
        self.skip_ws();
        match self.peek() {
            None => Err(EvalError::UnexpectedEnd),
            Some('(') => {
                let open = self.pos;
                self.pos += 1;
                let value = self.or()?;
                if self.eat(")") {
                    Ok(value)
                } else {
                    Err(EvalError::UnbalancedParenthesis { at: open })
                }
            }
            Some(c) if c.is_ascii_digit() || c == '.' => self.number(),
            Some(found) => Err(EvalError::UnexpectedChar {
                found,
                at: self.pos,
            }),
        }
    }

    fn number(&mut self) -> Result<f64, EvalError> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit() || c == '.') {
            self.pos += 1;
        }
        if self.peek().is_some_and(|c| "KMGTsmhdw".contains(c)) {
            self.pos += 1;
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        parse_number(&text).ok_or(EvalError::InvalidNumber { text, at: start })
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod tests;
