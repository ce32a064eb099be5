/// Priority added to every operator for each enclosing pair of parentheses.
pub const NESTING_STEP: i32 = 10;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    Number(f64),
    Unary { op: Operator, priority: i32 },
    Binary { op: Operator, priority: i32 },
    /// Contents of an empty `()`.
    Nullary,
}

impl Token {
    /// Unary minus at the given nesting priority. Unary plus has no token.
    pub fn negate(nesting: i32) -> Self {
        Token::Unary {
            op: Operator::Subtract,
            priority: nesting + 2,
        }
    }

    pub fn binary(op: Operator, nesting: i32) -> Self {
        Token::Binary {
            op,
            priority: nesting + op.precidence(),
        }
    }

    pub fn priority(&self) -> i32 {
        match self {
            Token::Unary { priority, .. } | Token::Binary { priority, .. } => *priority,
            Token::Number(_) | Token::Nullary => 0,
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Unary { .. } | Token::Binary { .. })
    }

    /// Operand slots an operator consumes; zero for operands.
    pub fn arity(&self) -> usize {
        match self {
            Token::Unary { .. } => 1,
            Token::Binary { .. } => 2,
            Token::Number(_) | Token::Nullary => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    IntDivide,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '\\' => Some(Self::IntDivide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::IntDivide => '\\',
        }
    }

    /// Offset over the nesting priority when used as a binary operator.
    pub fn precidence(&self) -> i32 {
        match self {
            Self::Add | Self::Subtract => 0,
            Self::Multiply => 1,
            Self::Divide | Self::IntDivide => 2,
        }
    }

    pub fn is_sign(&self) -> bool {
        matches!(self, Self::Add | Self::Subtract)
    }
}

pub fn is_operator(c: char) -> bool {
    Operator::from_char(c).is_some()
}
