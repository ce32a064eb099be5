use bitflags::bitflags;

use crate::{token::Operator, Direction};

bitflags! {
    /// Token classes that may come next.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Expect: u8 {
        const PRIMARY = 1 << 0;
        const OPERATOR = 1 << 1;
        const LPAREN = 1 << 2;
        const RPAREN = 1 << 3;
        const SIGN = 1 << 4;
        /// Right after an opening paren, so a close makes an empty `()`.
        const NULLARY = 1 << 5;
    }
}

impl Expect {
    pub fn initial(direction: Direction) -> Self {
        match direction {
            Direction::Forward => Self::PRIMARY | Self::LPAREN | Self::SIGN,
            Direction::Backward => Self::PRIMARY | Self::RPAREN,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lexeme {
    Number,
    Operator(Operator),
    LeftParen,
    RightParen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Number,
    /// Prefix sign; only a minus produces a token.
    Sign(Operator),
    Binary(Operator),
    /// One nesting level deeper: `(` forward, `)` backward.
    Enter,
    /// One level out: `)` forward, `(` backward.
    Leave { nullary: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub action: Action,
    pub next: Expect,
}

/// The lexeme is not allowed in the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rejected(pub Lexeme);

/// Grammar transition for one lexeme.
///
/// `sign_context` only matters backward, where a `+`/`-` is a sign only if
/// the text before it cannot end an operand.
pub fn step(
    direction: Direction,
    expected: Expect,
    lexeme: Lexeme,
    sign_context: bool,
) -> Result<Transition, Rejected> {
    match direction {
        Direction::Forward => step_forward(expected, lexeme),
        Direction::Backward => step_backward(expected, lexeme, sign_context),
    }
}

fn step_forward(expected: Expect, lexeme: Lexeme) -> Result<Transition, Rejected> {
    let (action, next) = match lexeme {
        Lexeme::Number if expected.contains(Expect::PRIMARY) => {
            (Action::Number, Expect::OPERATOR | Expect::RPAREN)
        }
        Lexeme::Operator(op) if op.is_sign() && expected.contains(Expect::SIGN) => (
            Action::Sign(op),
            Expect::PRIMARY | Expect::LPAREN | Expect::SIGN,
        ),
        Lexeme::Operator(op) if expected.contains(Expect::OPERATOR) => (
            Action::Binary(op),
            Expect::PRIMARY | Expect::LPAREN | Expect::SIGN,
        ),
        Lexeme::LeftParen if expected.contains(Expect::LPAREN) => (
            Action::Enter,
            Expect::PRIMARY | Expect::LPAREN | Expect::SIGN | Expect::NULLARY,
        ),
        Lexeme::RightParen if expected.intersects(Expect::NULLARY | Expect::RPAREN) => (
            Action::Leave {
                nullary: expected.contains(Expect::NULLARY),
            },
            Expect::OPERATOR | Expect::RPAREN | Expect::LPAREN,
        ),
        _ => return Err(Rejected(lexeme)),
    };
    Ok(Transition { action, next })
}

fn step_backward(
    expected: Expect,
    lexeme: Lexeme,
    sign_context: bool,
) -> Result<Transition, Rejected> {
    let (action, next) = match lexeme {
        Lexeme::Number if expected.contains(Expect::PRIMARY) => (
            Action::Number,
            Expect::OPERATOR | Expect::SIGN | Expect::LPAREN,
        ),
        Lexeme::Operator(op)
            if op.is_sign() && sign_context && expected.contains(Expect::SIGN) =>
        {
            (
                Action::Sign(op),
                Expect::OPERATOR | Expect::LPAREN | Expect::SIGN,
            )
        }
        Lexeme::Operator(op) if expected.contains(Expect::OPERATOR) => {
            (Action::Binary(op), Expect::PRIMARY | Expect::RPAREN)
        }
        Lexeme::RightParen if expected.contains(Expect::RPAREN) => (
            Action::Enter,
            Expect::PRIMARY | Expect::RPAREN | Expect::NULLARY,
        ),
        Lexeme::LeftParen if expected.intersects(Expect::NULLARY | Expect::LPAREN) => (
            Action::Leave {
                nullary: expected.contains(Expect::NULLARY),
            },
            Expect::OPERATOR | Expect::SIGN | Expect::LPAREN | Expect::RPAREN,
        ),
        _ => return Err(Rejected(lexeme)),
    };
    Ok(Transition { action, next })
}
