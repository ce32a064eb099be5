pub mod extract;
pub mod interpreter;
pub mod number;
pub mod parser;
pub mod render;
pub mod scanner;
mod state;
mod token;

pub use extract::{extract, ExtractOptions};
pub use interpreter::{run, EvalError};
pub use parser::{parse_backward, parse_forward, SyntaxError};
pub use scanner::{Scanner, StrScanner};
pub use token::{Operator, Token, NESTING_STEP};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    /// From the end of the text toward its start.
    Backward,
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum MathError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

pub fn parse(source: &str, direction: Direction) -> Result<Vec<Token>, SyntaxError> {
    match direction {
        Direction::Forward => parse_forward(&mut StrScanner::new(source)),
        Direction::Backward => parse_backward(&mut StrScanner::at_end(source)),
    }
}

/// Parses the expression ending at character `pos` of `source`. Returns the
/// tokens and the column the expression starts at.
pub fn parse_backward_at(source: &str, pos: usize) -> Result<(Vec<Token>, usize), SyntaxError> {
    let mut scanner = StrScanner::with_pos(source, pos);
    let tokens = parse_backward(&mut scanner)?;
    Ok((tokens, scanner.pos()))
}

/// Parses and evaluates `expr`. `None` when there is nothing to evaluate.
pub fn evaluate(expr: &str, direction: Direction) -> Result<Option<f64>, MathError> {
    Ok(run(&parse(expr, direction)?)?)
}
