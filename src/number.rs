use crate::{
    scanner::{is_number, Scanner},
    Direction,
};

const DOT: char = '.';

/// Consumes a number literal in the given direction.
///
/// On success the scanner's `start..pos` span covers the literal. On failure
/// the position is left where it was.
pub fn consume<S: Scanner>(scanner: &mut S, direction: Direction) -> bool {
    match direction {
        Direction::Forward => consume_forward(scanner),
        Direction::Backward => consume_backward(scanner),
    }
}

fn consume_forward<S: Scanner>(scanner: &mut S) -> bool {
    let start = scanner.pos();

    // short decimal notation: .025
    if scanner.eat(DOT) && scanner.eat_while(is_number) {
        scanner.set_start(start);
        return true;
    }
    scanner.set_pos(start);

    // integer or decimal: 10, 10.25
    if scanner.eat_while(is_number) {
        let integer_end = scanner.pos();
        if !(scanner.eat(DOT) && scanner.eat_while(is_number)) {
            // `10.` is the number `10` followed by a stray dot
            scanner.set_pos(integer_end);
        }
        scanner.set_start(start);
        return true;
    }

    scanner.set_pos(start);
    false
}

fn consume_backward<S: Scanner>(scanner: &mut S) -> bool {
    let end = scanner.pos();
    let mut had_dot = false;
    let mut had_number = false;
    // Counted rather than compared against `end`: success means something was eaten.
    let mut len = 0;

    while !scanner.sof() {
        scanner.back_up(1);
        match scanner.peek() {
            Some(DOT) if had_number && !had_dot => had_dot = true,
            Some(c) if is_number(c) => had_number = true,
            _ => {
                scanner.advance();
                break;
            }
        }
        len += 1;
    }

    if len > 0 {
        scanner.set_start(scanner.pos());
        scanner.set_pos(end);
        true
    } else {
        scanner.set_pos(end);
        false
    }
}
