use crate::{interpreter::EvalError, token::Token};

/// Rebuilds a fully parenthesized infix expression from a post-order
/// sequence. Parsing the result yields a sequence with the same value.
pub fn infix(tokens: &[Token]) -> Result<String, EvalError> {
    let mut stack: Vec<String> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(n) if *n < 0.0 => stack.push(format!("(-{})", -n)),
            Token::Number(n) => stack.push(n.to_string()),
            Token::Nullary => stack.push("()".to_string()),
            Token::Binary { op, .. } => {
                let right = stack.pop().ok_or(EvalError::Parity)?;
                let left = stack.pop().ok_or(EvalError::Parity)?;
                stack.push(format!("({left} {} {right})", op.symbol()));
            }
            Token::Unary { op, .. } if op.is_sign() => {
                let value = stack.pop().ok_or(EvalError::Parity)?;
                stack.push(format!("{}({value})", op.symbol()));
            }
            Token::Unary { .. } => return Err(EvalError::InvalidExpression),
        }
    }

    if stack.len() > 1 {
        return Err(EvalError::Parity);
    }

    Ok(stack.pop().unwrap_or_default())
}

#[cfg(test)]
mod test {
    use crate::{
        interpreter::run,
        parse,
        render::infix,
        Direction,
    };

    #[test]
    fn parenthesizes_everything() {
        let tokens = parse("2 * 3 + 1", Direction::Forward).unwrap();
        assert_eq!("((2 * 3) + 1)", infix(&tokens).unwrap());

        let tokens = parse("3 * -(1 + 2)", Direction::Forward).unwrap();
        assert_eq!("(3 * -((1 + 2)))", infix(&tokens).unwrap());
    }

    #[test]
    fn reparse_keeps_value() {
        for expr in ["1+2", "-2 * 3 + 1", "5 \\ 2", "(3 * (1+2)) * 2", "2 / -.5", "0.1 * 3"] {
            let tokens = parse(expr, Direction::Forward).unwrap();
            let rendered = infix(&tokens).unwrap();
            let reparsed = parse(&rendered, Direction::Forward).unwrap();
            assert_eq!(run(&tokens).unwrap(), run(&reparsed).unwrap(), "{expr} -> {rendered}");
        }
    }

    #[test]
    fn empty() {
        assert_eq!("", infix(&[]).unwrap());
    }
}
