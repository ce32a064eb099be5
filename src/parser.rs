use log::{debug, trace};
use thiserror::Error;

use crate::{
    number,
    scanner::{is_white_space, Scanner},
    state::{step, Action, Expect, Lexeme, Rejected, Transition},
    token::{is_operator, Operator, Token, NESTING_STEP},
    Direction,
};

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SyntaxError {
    #[error("Unexpected number at column {0} of expression")]
    UnexpectedNumber(usize),

    #[error("Unexpected operator at column {0} of expression")]
    UnexpectedOperator(usize),

    #[error("Unexpected \"(\" at column {0} of expression")]
    UnexpectedLeftParen(usize),

    #[error("Unexpected \")\" at column {0} of expression")]
    UnexpectedRightParen(usize),

    #[error("Unknown character at column {0} of expression")]
    UnknownCharacter(usize),

    #[error("Unmatched parentheses at column {0} of expression")]
    UnmatchedParentheses(usize),

    #[error("Parity at column {0} of expression")]
    Parity(usize),
}

impl SyntaxError {
    fn unexpected(lexeme: Lexeme, column: usize) -> Self {
        match lexeme {
            Lexeme::Number => Self::UnexpectedNumber(column),
            Lexeme::Operator(_) => Self::UnexpectedOperator(column),
            Lexeme::LeftParen => Self::UnexpectedLeftParen(column),
            Lexeme::RightParen => Self::UnexpectedRightParen(column),
        }
    }

    /// Column where the offending token's scan began.
    pub fn column(&self) -> usize {
        match self {
            Self::UnexpectedNumber(c)
            | Self::UnexpectedOperator(c)
            | Self::UnexpectedLeftParen(c)
            | Self::UnexpectedRightParen(c)
            | Self::UnknownCharacter(c)
            | Self::UnmatchedParentheses(c)
            | Self::Parity(c) => *c,
        }
    }
}

/// Tokens collected by one parse call, in scan order.
struct Collector {
    direction: Direction,
    expected: Expect,
    nesting: i32,
    tokens: Vec<Token>,
}

impl Collector {
    fn new(direction: Direction) -> Self {
        Self {
            direction,
            expected: Expect::initial(direction),
            nesting: 0,
            tokens: Vec::new(),
        }
    }

    fn step(&self, lexeme: Lexeme, sign_context: bool) -> Result<Transition, Rejected> {
        step(self.direction, self.expected, lexeme, sign_context)
    }

    fn apply(
        &mut self,
        transition: Transition,
        literal: &str,
        column: usize,
    ) -> Result<(), SyntaxError> {
        trace!(
            "{:?} {:?} at column {column}",
            self.direction,
            transition.action
        );
        match transition.action {
            Action::Number => {
                let value = literal
                    .parse()
                    .map_err(|_| SyntaxError::UnexpectedNumber(column))?;
                self.tokens.push(Token::Number(value));
            }
            Action::Sign(Operator::Subtract) => self.tokens.push(Token::negate(self.nesting)),
            Action::Sign(_) => {}
            Action::Binary(op) => self.tokens.push(Token::binary(op, self.nesting)),
            Action::Enter => self.nesting += NESTING_STEP,
            Action::Leave { nullary } => {
                self.nesting -= NESTING_STEP;
                if self.nesting < 0 {
                    return Err(SyntaxError::UnmatchedParentheses(column));
                }
                if nullary {
                    self.tokens.push(Token::Nullary);
                }
            }
        }
        self.expected = transition.next;
        Ok(())
    }

    /// `stopped` is set when a backward scan ended on text that is not part of
    /// the expression; finding nothing at all is then an error.
    fn finish(mut self, column: usize, stopped: bool) -> Result<Vec<Token>, SyntaxError> {
        if self.nesting != 0 {
            return Err(SyntaxError::UnmatchedParentheses(column));
        }

        if self.direction == Direction::Backward {
            self.tokens.reverse();
        }

        if self.tokens.is_empty() && !stopped {
            return Ok(Vec::new());
        }

        order_tokens(self.tokens).ok_or(SyntaxError::Parity(column))
    }
}

/// Parses from the scanner's position to the end of input.
pub fn parse_forward<S: Scanner>(scanner: &mut S) -> Result<Vec<Token>, SyntaxError> {
    let mut collector = Collector::new(Direction::Forward);

    while !scanner.eof() {
        scanner.eat_while(is_white_space);
        scanner.set_start(scanner.pos());
        let column = scanner.start();

        let (lexeme, literal) = if number::consume(scanner, Direction::Forward) {
            (Lexeme::Number, scanner.current())
        } else {
            let lexeme = match scanner.advance() {
                Some('(') => Lexeme::LeftParen,
                Some(')') => Lexeme::RightParen,
                Some(c) => match Operator::from_char(c) {
                    Some(op) => Lexeme::Operator(op),
                    None => return Err(SyntaxError::UnknownCharacter(column)),
                },
                // trailing whitespace
                None => break,
            };
            (lexeme, String::new())
        };

        let transition = collector
            .step(lexeme, false)
            .map_err(|Rejected(lexeme)| SyntaxError::unexpected(lexeme, column))?;
        collector.apply(transition, &literal, column)?;
    }

    let tokens = collector.finish(scanner.start(), false)?;
    debug!("parsed {} tokens forward", tokens.len());
    Ok(tokens)
}

/// Parses backward from the scanner's position toward the start of input.
///
/// Stops without error on the first character that cannot extend the
/// expression leftward. On success the scanner is left at the first character
/// of the expression.
pub fn parse_backward<S: Scanner>(scanner: &mut S) -> Result<Vec<Token>, SyntaxError> {
    let mut collector = Collector::new(Direction::Backward);
    let mut stopped = false;

    while !scanner.sof() {
        if number::consume(scanner, Direction::Backward) {
            let column = scanner.start();
            let literal = scanner.current();
            scanner.set_pos(column);

            let transition = collector
                .step(Lexeme::Number, false)
                .map_err(|Rejected(lexeme)| SyntaxError::unexpected(lexeme, column))?;
            collector.apply(transition, &literal, column)?;
            continue;
        }

        scanner.back_up(1);
        let column = scanner.pos();
        scanner.set_start(column);

        let lexeme = match scanner.peek() {
            Some(c) if is_white_space(c) => continue,
            Some('(') => Lexeme::LeftParen,
            Some(')') => Lexeme::RightParen,
            Some(c) => match Operator::from_char(c) {
                Some(op) => Lexeme::Operator(op),
                None => {
                    scanner.advance();
                    stopped = true;
                    break;
                }
            },
            None => break,
        };

        let sign_context = matches!(lexeme, Lexeme::Operator(op) if op.is_sign())
            && is_reverse_sign_context(scanner);

        match collector.step(lexeme, sign_context) {
            Ok(transition) => collector.apply(transition, "", column)?,
            Err(_) => {
                scanner.advance();
                stopped = true;
                break;
            }
        }
    }

    if stopped {
        debug!("backward parse stopped at column {}", scanner.pos());
    }

    let tokens = collector.finish(scanner.start(), stopped)?;

    // the expression may be preceded by whitespace
    scanner.eat_while(is_white_space);
    debug!(
        "parsed {} tokens backward, expression starts at column {}",
        tokens.len(),
        scanner.pos()
    );
    Ok(tokens)
}

/// Whether a `+`/`-` at the scanner's position is a sign: the nearest
/// non-whitespace character before it is `(`, an operator, or nothing.
/// The position is restored.
fn is_reverse_sign_context<S: Scanner>(scanner: &mut S) -> bool {
    let pos = scanner.pos();
    let mut in_context = true;

    while !scanner.sof() {
        scanner.back_up(1);
        match scanner.peek() {
            Some(c) if is_white_space(c) => {}
            Some(c) => {
                in_context = c == '(' || is_operator(c);
                break;
            }
            None => break,
        }
    }

    scanner.set_pos(pos);
    in_context
}

/// Lays tokens out in execution order: operands first, pending operators
/// popped by priority. `None` when operand and operator counts disagree.
fn order_tokens(tokens: Vec<Token>) -> Option<Vec<Token>> {
    let mut operators: Vec<Token> = Vec::new();
    let mut output = Vec::with_capacity(tokens.len());
    let mut slots = 0;

    for token in tokens {
        if !token.is_operator() {
            output.push(token);
            continue;
        }

        slots += token.arity();

        // a prefix operator has no left operand to bind yet
        if let Token::Binary { priority, .. } = token {
            while operators
                .last()
                .is_some_and(|pending| priority <= pending.priority())
            {
                output.extend(operators.pop());
            }
        }

        operators.push(token);
    }

    output.extend(operators.into_iter().rev());

    (slots + 1 == output.len()).then_some(output)
}
