//! Keypad layout
//!
//! The sixteen buttons and the symbol each one sends, row by row.

use crate::calculator::{Digit, Operator, Symbol};

pub const ROWS: usize = 4;
pub const COLUMNS: usize = 4;

const fn digit(value: u8) -> Symbol {
    match Digit::new(value) {
        Some(d) => Symbol::Digit(d),
        None => panic!("keypad digit out of range"),
    }
}

const LAYOUT: [[Symbol; COLUMNS]; ROWS] = [
    [digit(1), digit(2), digit(3), Symbol::Operator(Operator::Add)],
    [digit(4), digit(5), digit(6), Symbol::Operator(Operator::Subtract)],
    [digit(7), digit(8), digit(9), Symbol::Operator(Operator::Multiply)],
    [Symbol::Point, digit(0), Symbol::Evaluate, Symbol::Operator(Operator::Divide)],
];

/// Fixed button grid.
pub struct Keypad;

impl Keypad {
    pub fn rows() -> &'static [[Symbol; COLUMNS]; ROWS] {
        &LAYOUT
    }

    /// Every symbol on the keypad, row-major.
    pub fn symbols() -> impl Iterator<Item = Symbol> {
        LAYOUT.iter().flatten().copied()
    }
}
