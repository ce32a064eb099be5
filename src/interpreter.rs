use thiserror::Error;

use crate::token::{Operator, Token};

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum EvalError {
    #[error("Invalid expression")]
    InvalidExpression,

    #[error("Invalid Expression (parity)")]
    Parity,
}

impl Operator {
    pub fn apply_binary(&self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
            Operator::IntDivide => (left / right).floor(),
        }
    }

    pub fn apply_unary(&self, value: f64) -> Result<f64, EvalError> {
        match self {
            Operator::Subtract => Ok(-value),
            Operator::Add => Ok(value),
            _ => Err(EvalError::InvalidExpression),
        }
    }
}

/// Evaluates a post-order token sequence. An empty sequence has no value.
pub fn run(tokens: &[Token]) -> Result<Option<f64>, EvalError> {
    let mut stack: Vec<f64> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match *token {
            Token::Number(n) => stack.push(n),
            Token::Binary { op, .. } => {
                let right = stack.pop().ok_or(EvalError::Parity)?;
                let left = stack.pop().ok_or(EvalError::Parity)?;
                stack.push(op.apply_binary(left, right));
            }
            Token::Unary { op, .. } => {
                let value = stack.pop().ok_or(EvalError::Parity)?;
                stack.push(op.apply_unary(value)?);
            }
            Token::Nullary => return Err(EvalError::InvalidExpression),
        }
    }

    if stack.len() > 1 {
        return Err(EvalError::Parity);
    }

    Ok(stack.pop())
}

#[cfg(test)]
mod test {
    use crate::{
        interpreter::{run, EvalError},
        token::{Operator, Token},
    };

    fn num(n: f64) -> Token {
        Token::Number(n)
    }

    fn bin(op: Operator) -> Token {
        Token::binary(op, 0)
    }

    #[test]
    fn empty() {
        assert_eq!(Ok(None), run(&[]));
    }

    #[test]
    fn operand_order() {
        assert_eq!(Ok(Some(3.0)), run(&[num(5.0), num(2.0), bin(Operator::Subtract)]));
        assert_eq!(Ok(Some(2.5)), run(&[num(5.0), num(2.0), bin(Operator::Divide)]));
    }

    #[test]
    fn floor_division() {
        assert_eq!(Ok(Some(2.0)), run(&[num(5.0), num(2.0), bin(Operator::IntDivide)]));
        assert_eq!(
            Ok(Some(-3.0)),
            run(&[num(5.0), Token::negate(0), num(2.0), bin(Operator::IntDivide)])
        );
    }

    #[test]
    fn division_by_zero_is_infinite() {
        assert_eq!(
            Ok(Some(f64::INFINITY)),
            run(&[num(1.0), num(0.0), bin(Operator::Divide)])
        );
    }

    #[test]
    fn negate() {
        assert_eq!(Ok(Some(-4.0)), run(&[num(4.0), Token::negate(0)]));
    }

    #[test]
    fn dangling_operator() {
        assert_eq!(Err(EvalError::Parity), run(&[num(1.0), bin(Operator::Add)]));
        assert_eq!(Err(EvalError::Parity), run(&[bin(Operator::Add)]));
    }

    #[test]
    fn leftover_operands() {
        let err = run(&[num(1.0), num(2.0)]).unwrap_err();
        assert_eq!(EvalError::Parity, err);
        assert_eq!("Invalid Expression (parity)", err.to_string());
    }

    #[test]
    fn nullary_cannot_be_evaluated() {
        let err = run(&[Token::Nullary]).unwrap_err();
        assert_eq!("Invalid expression", err.to_string());
    }

    #[test]
    fn unary_multiply_is_invalid() {
        assert_eq!(
            Err(EvalError::InvalidExpression),
            run(&[
                num(2.0),
                Token::Unary {
                    op: Operator::Multiply,
                    priority: 0
                }
            ])
        );
    }
}
