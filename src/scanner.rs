/// A character stream the parser can walk in either direction.
///
/// Positions are character indices. `start` marks the beginning of the last
/// consumed lexeme so that [`Scanner::current`] can slice it out.
pub trait Scanner {
    fn pos(&self) -> usize;
    fn set_pos(&mut self, pos: usize);
    fn start(&self) -> usize;
    fn set_start(&mut self, start: usize);

    /// Character at the current position, `None` at the end of input.
    fn peek(&self) -> Option<char>;

    /// Text between `start` and the current position.
    fn current(&self) -> String;

    /// Whether the position is at the end of input.
    fn eof(&self) -> bool;

    fn sof(&self) -> bool {
        self.pos() == 0
    }

    /// Returns the character at the current position and moves past it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.set_pos(self.pos() + 1);
        Some(c)
    }

    fn back_up(&mut self, n: usize) {
        self.set_pos(self.pos().saturating_sub(n));
    }

    fn eat(&mut self, expected: char) -> bool {
        match self.peek() {
            Some(c) if c == expected => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    /// Consumes characters while `pred` holds; true if anything was consumed.
    fn eat_while<F>(&mut self, mut pred: F) -> bool
    where
        F: FnMut(char) -> bool,
        Self: Sized,
    {
        let start = self.pos();
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
        self.pos() != start
    }
}

#[derive(Debug, Clone)]
pub struct StrScanner {
    chars: Vec<char>,
    pos: usize,
    start: usize,
}

impl StrScanner {
    pub fn new(input: &str) -> Self {
        Self::with_pos(input, 0)
    }

    /// A scanner positioned after the last character, for backward parsing.
    pub fn at_end(input: &str) -> Self {
        let mut scanner = Self::new(input);
        scanner.pos = scanner.chars.len();
        scanner.start = scanner.pos;
        scanner
    }

    /// `pos` is clamped to the input length.
    pub fn with_pos(input: &str, pos: usize) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let pos = pos.min(chars.len());
        Self {
            chars,
            pos,
            start: pos,
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at an arbitrary index.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }
}

impl Scanner for StrScanner {
    fn pos(&self) -> usize {
        self.pos
    }

    fn set_pos(&mut self, pos: usize) {
        self.pos = pos.min(self.chars.len());
    }

    fn start(&self) -> usize {
        self.start
    }

    fn set_start(&mut self, start: usize) {
        self.start = start.min(self.chars.len());
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn current(&self) -> String {
        let (from, to) = if self.start <= self.pos {
            (self.start, self.pos)
        } else {
            (self.pos, self.start)
        };
        self.chars[from..to].iter().collect()
    }

    fn eof(&self) -> bool {
        self.pos >= self.chars.len()
    }
}

pub fn is_number(c: char) -> bool {
    c.is_ascii_digit()
}

/// Space, tab or no-break space.
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{a0}')
}

pub fn is_white_space(c: char) -> bool {
    is_space(c) || c == '\n' || c == '\r'
}

#[cfg(test)]
mod test {
    use super::{is_number, is_white_space, Scanner, StrScanner};

    #[test]
    fn eat_while() {
        let mut scanner = StrScanner::new("123foo");
        assert!(scanner.eat_while(is_number));
        assert_eq!(3, scanner.pos());
        assert!(!scanner.eat_while(is_number));
        assert_eq!(Some('f'), scanner.peek());
    }

    #[test]
    fn current_slice() {
        let mut scanner = StrScanner::new("  12 + 3");
        scanner.eat_while(is_white_space);
        scanner.set_start(scanner.pos());
        scanner.eat_while(is_number);
        assert_eq!("12", scanner.current());
    }

    #[test]
    fn walk_backward() {
        let mut scanner = StrScanner::at_end("ab");
        assert!(scanner.eof());
        scanner.back_up(1);
        assert_eq!(Some('b'), scanner.peek());
        scanner.back_up(5);
        assert!(scanner.sof());
        assert_eq!(Some('a'), scanner.advance());
        assert_eq!(1, scanner.pos());
    }

    #[test]
    fn clamped_position() {
        let scanner = StrScanner::with_pos("1+2", 10);
        assert_eq!(3, scanner.pos());
        assert!(scanner.eof());
    }
}
