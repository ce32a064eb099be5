use math_expression::{evaluate, Direction, ExtractOptions};
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub struct State {
    direction: Direction,
    options: ExtractOptions,
}

#[wasm_bindgen]
impl State {
    pub fn set_backward(&mut self, backward: bool) {
        self.direction = if backward {
            Direction::Backward
        } else {
            Direction::Forward
        };
    }

    pub fn set_look_ahead(&mut self, look_ahead: bool) {
        self.options.look_ahead = look_ahead;
    }

    pub fn set_whitespace(&mut self, whitespace: bool) {
        self.options.whitespace = whitespace;
    }
}

#[wasm_bindgen]
pub fn setup() -> State {
    console_error_panic_hook::set_once();

    State {
        direction: Direction::default(),
        options: ExtractOptions::default(),
    }
}

#[wasm_bindgen]
pub fn run(code: &str, state: &mut State) -> String {
    match evaluate(code, state.direction) {
        Ok(Some(value)) => value.to_string(),
        Ok(None) => String::new(),
        Err(error) => error.to_string(),
    }
}

/// `[start, end]` of the expression before `pos`, empty when there is none.
#[wasm_bindgen]
pub fn extract(text: &str, pos: u32, state: &State) -> Vec<u32> {
    match math_expression::extract(text, pos as usize, &state.options) {
        Some((start, end)) => vec![start as u32, end as u32],
        None => Vec::new(),
    }
}
