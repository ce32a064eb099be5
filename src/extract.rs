use crate::{
    number,
    scanner::{is_space, Scanner, StrScanner},
    token::is_operator,
    Direction,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Also take closing parens (and spaces) right after the cursor. Editors
    /// insert paired `)` so the expression often continues past the caret.
    pub look_ahead: bool,

    /// Allow spaces inside the extracted expression.
    pub whitespace: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            look_ahead: true,
            whitespace: true,
        }
    }
}

/// Finds the expression ending at or near `pos` and returns its `[start, end)`
/// character span.
pub fn extract(text: &str, pos: usize, options: &ExtractOptions) -> Option<(usize, usize)> {
    let mut scanner = StrScanner::with_pos(text, pos);
    let allowed_space = |c: char| options.whitespace && is_space(c);

    if options.look_ahead && scanner.peek() == Some(')') {
        scanner.advance();
        scanner.eat_while(|c| c == ')' || allowed_space(c));
    }

    let end = scanner.pos();
    let mut braces = 0usize;

    while !scanner.sof() {
        if number::consume(&mut scanner, Direction::Backward) {
            scanner.set_pos(scanner.start());
            continue;
        }

        let Some(c) = scanner.char_at(scanner.pos() - 1) else {
            break;
        };

        match c {
            ')' => braces += 1,
            '(' if braces == 0 => break,
            '(' => braces -= 1,
            c if allowed_space(c) || is_operator(c) => {}
            _ => break,
        }

        scanner.back_up(1);
    }

    if scanner.pos() == end || braces != 0 {
        return None;
    }

    scanner.eat_while(is_space);
    Some((scanner.pos(), end))
}

#[cfg(test)]
mod test {
    use crate::extract::{extract, ExtractOptions};

    fn at_end(text: &str) -> Option<(usize, usize)> {
        extract(text, text.chars().count(), &ExtractOptions::default())
    }

    #[test]
    fn basic() {
        assert_eq!(Some((0, 1)), at_end("1"));
        assert_eq!(Some((0, 2)), at_end("10"));
        assert_eq!(Some((0, 3)), at_end("123"));
        assert_eq!(Some((0, 3)), at_end("0.1"));
        assert_eq!(Some((0, 2)), at_end(".1"));
        assert_eq!(Some((0, 4)), at_end(".123"));
    }

    #[test]
    fn mixed_content() {
        assert_eq!(Some((3, 6)), at_end("foo123"));
        assert_eq!(Some((3, 6)), at_end(".1.2.3"));
        assert_eq!(Some((2, 5)), at_end("1.2.3"));
        assert_eq!(Some((3, 14)), at_end("foo2 * (3 + 1)"));
        assert_eq!(Some((4, 17)), at_end("bar.(2 * (3 + 1))"));
        assert_eq!(Some((6, 9)), at_end("test: 1+2"));
    }

    #[test]
    fn look_ahead() {
        let options = ExtractOptions::default();
        assert_eq!(Some((3, 14)), extract("foo2 * (3 + 1)", 13, &options));
        assert_eq!(Some((4, 17)), extract("bar.(2 * (3 + 1))", 15, &options));
        assert_eq!(Some((4, 18)), extract("bar.(2 * (3 + 1) )", 15, &options));
    }

    #[test]
    fn without_look_ahead() {
        let options = ExtractOptions {
            look_ahead: false,
            ..Default::default()
        };
        assert_eq!(Some((8, 13)), extract("foo2 * (3 + 1)", 13, &options));
    }

    #[test]
    fn without_whitespace() {
        let options = ExtractOptions {
            whitespace: false,
            ..Default::default()
        };
        assert_eq!(Some((10, 11)), extract("test: 1 + 2", 11, &options));
        assert_eq!(Some((6, 9)), extract("test: 1+2", 9, &options));
    }

    #[test]
    fn nothing_to_extract() {
        assert_eq!(None, at_end(""));
        assert_eq!(None, at_end("foo"));
        assert_eq!(None, at_end("foo("));
        assert_eq!(None, at_end("1 + 2)"));
    }
}
