//! Expression builder and single-operator evaluator
//!
//! The calculator keeps one string. Button presses append to it; `=` replaces
//! it with the result of evaluating it, or with `"Error"`.
//!
//! Evaluation does not read the expression left to right. It checks the
//! operators in the fixed order `+ - * /` and uses the first one that occurs
//! exactly once anywhere in the string, splitting the text around it. So
//! `1+2-3` is evaluated as `1` plus `2-3`, which fails to parse.

use std::fmt;
use std::num::ParseFloatError;
use thiserror::Error;

/// Text shown when evaluation fails.
pub const ERROR_MARKER: &str = "Error";

#[derive(Error, Debug)]
pub enum EvalError {
    #[error("invalid expression: no operator occurs exactly once")]
    InvalidExpression,
    #[error("cannot parse operand {operand:?}: {source}")]
    NumberParse {
        operand: String,
        #[source]
        source: ParseFloatError,
    },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SymbolError {
    #[error("unknown symbol {0:?}")]
    Unknown(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The order operators are tried in during evaluation.
    pub const PRIORITY: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn as_char(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            // IEEE-754: x/0 gives inf or nan, which is a result, not an error
            Operator::Divide => lhs / rhs,
        }
    }
}

/// A decimal digit. The value is always in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

/// One keypad symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Digit(Digit),
    Point,
    Operator(Operator),
    Evaluate,
}

impl Symbol {
    pub fn as_char(self) -> char {
        match self {
            Symbol::Digit(d) => d.as_char(),
            Symbol::Point => '.',
            Symbol::Operator(op) => op.as_char(),
            Symbol::Evaluate => '=',
        }
    }

    /// Button caption.
    pub fn label(self) -> String {
        self.as_char().to_string()
    }
}

impl TryFrom<char> for Symbol {
    type Error = SymbolError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let symbol = match c {
            '0'..='9' => match Digit::new(c as u8 - b'0') {
                Some(d) => Symbol::Digit(d),
                None => return Err(SymbolError::Unknown(c)),
            },
            '.' => Symbol::Point,
            '+' => Symbol::Operator(Operator::Add),
            '-' => Symbol::Operator(Operator::Subtract),
            '*' => Symbol::Operator(Operator::Multiply),
            '/' => Symbol::Operator(Operator::Divide),
            '=' => Symbol::Evaluate,
            other => return Err(SymbolError::Unknown(other)),
        };
        Ok(symbol)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Evaluate `expression` with the exactly-one-operator rule.
pub fn evaluate_expression(expression: &str) -> Result<f64, EvalError> {
    let op = Operator::PRIORITY
        .into_iter()
        .find(|op| expression.matches(op.as_char()).count() == 1)
        .ok_or(EvalError::InvalidExpression)?;

    let (lhs, rhs) = expression
        .split_once(op.as_char())
        .ok_or(EvalError::InvalidExpression)?;

    Ok(op.apply(parse_operand(lhs)?, parse_operand(rhs)?))
}

fn parse_operand(text: &str) -> Result<f64, EvalError> {
    text.parse::<f64>().map_err(|source| EvalError::NumberParse {
        operand: text.to_string(),
        source,
    })
}

/// Shortest round-trip text for `value`.
///
/// Integral values keep a `.0`, non-finite values read `inf`, `-inf` and
/// `nan`, and very large or very small magnitudes use an exponent with an
/// explicit sign and at least two digits (`1e+16`, `1.5e-05`).
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Debug already picks the shortest digits and switches to an exponent
    // below 1e-4 and from 1e16 upward.
    let text = format!("{:?}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

/// The calculator: one expression string and the rules that change it.
#[derive(Debug, Default, Clone)]
pub struct Calculator {
    expression: String,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current expression, exactly as the display should show it.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn is_error(&self) -> bool {
        self.expression == ERROR_MARKER
    }

    /// Handle one button press.
    pub fn press(&mut self, symbol: Symbol) {
        match symbol {
            Symbol::Evaluate => self.evaluate(),
            other => self.append(other),
        }
    }

    /// Append a symbol verbatim. `=` is ignored here; use [`Self::press`] to
    /// dispatch it.
    pub fn append(&mut self, symbol: Symbol) {
        if symbol != Symbol::Evaluate {
            self.expression.push(symbol.as_char());
        }
    }

    /// Replace the expression with its value, or with [`ERROR_MARKER`].
    pub fn evaluate(&mut self) {
        match evaluate_expression(&self.expression) {
            Ok(value) => {
                let result = format_result(value);
                tracing::debug!(expression = %self.expression, %result, "evaluated");
                self.expression = result;
            }
            Err(e) => {
                tracing::debug!(expression = %self.expression, error = %e, "evaluation failed");
                self.expression = ERROR_MARKER.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc_with(input: &str) -> Calculator {
        let mut calc = Calculator::new();
        for c in input.chars() {
            calc.press(Symbol::try_from(c).unwrap());
        }
        calc
    }

    fn eval(expression: &str) -> String {
        let mut calc = calc_with(expression);
        calc.evaluate();
        calc.expression().to_string()
    }

    #[test]
    fn test_new_is_empty() {
        let calc = Calculator::new();
        assert_eq!(calc.expression(), "");
        assert!(!calc.is_error());
    }

    #[test]
    fn test_append_concatenates() {
        let input = "12.5+.3*/-0";
        let calc = calc_with(input);
        assert_eq!(calc.expression(), input);
    }

    #[test]
    fn test_append_concatenates_every_short_sequence() {
        let alphabet: Vec<char> = "0123456789.+-*/".chars().collect();
        for &a in &alphabet {
            for &b in &alphabet {
                for &c in &alphabet {
                    let mut calc = Calculator::new();
                    for ch in [a, b, c] {
                        calc.append(Symbol::try_from(ch).unwrap());
                    }
                    let expected: String = [a, b, c].iter().collect();
                    assert_eq!(calc.expression(), expected);
                }
            }
        }
    }

    #[test]
    fn test_append_ignores_evaluate() {
        let mut calc = calc_with("12");
        calc.append(Symbol::Evaluate);
        assert_eq!(calc.expression(), "12");
    }

    #[test]
    fn test_four_operations() {
        assert_eq!(eval("3+4"), "7.0");
        assert_eq!(eval("10-3"), "7.0");
        assert_eq!(eval("6*7"), "42.0");
        assert_eq!(eval("8/2"), "4.0");
    }

    #[test]
    fn test_press_equals_evaluates() {
        let calc = calc_with("1.5+1.5=");
        assert_eq!(calc.expression(), "3.0");
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval("8/0"), "inf");
        assert_eq!(eval("0/0"), "nan");
    }

    #[test]
    fn test_no_operator_is_error() {
        assert_eq!(eval("5"), ERROR_MARKER);
        assert_eq!(eval(""), ERROR_MARKER);
    }

    #[test]
    fn test_repeated_operator_is_error() {
        assert_eq!(eval("1+2+3"), ERROR_MARKER);
        assert_eq!(eval("2--3"), ERROR_MARKER);
    }

    #[test]
    fn test_unparseable_operand_is_error() {
        assert!(matches!(
            evaluate_expression("abc+1"),
            Err(EvalError::NumberParse { ref operand, .. }) if operand == "abc"
        ));
        assert_eq!(eval("5+"), ERROR_MARKER);
        assert_eq!(eval(".+1"), ERROR_MARKER);
    }

    #[test]
    fn test_priority_ignores_written_order() {
        // one '+' wins over one '-', leaving "2-3" as the right operand
        assert_eq!(eval("1+2-3"), ERROR_MARKER);
        // '*' is tried before '/'
        assert_eq!(eval("6*2/3"), ERROR_MARKER);
        // two '+' fall through to the single '-'
        assert!(matches!(
            evaluate_expression("1+1-1+1"),
            Err(EvalError::NumberParse { .. })
        ));
        // leading minus is an ordinary operand prefix when '+' is chosen
        assert_eq!(eval("-5+3"), "-2.0");
    }

    #[test]
    fn test_lenient_decimals() {
        assert_eq!(eval(".5+5."), "5.5");
    }

    #[test]
    fn test_error_then_append() {
        let mut calc = calc_with("5=");
        assert!(calc.is_error());
        calc.press(Symbol::try_from('9').unwrap());
        assert_eq!(calc.expression(), "Error9");
        assert!(!calc.is_error());
        calc.evaluate();
        assert_eq!(calc.expression(), ERROR_MARKER);
    }

    #[test]
    fn test_evaluate_twice() {
        let mut calc = calc_with("3+4");
        calc.evaluate();
        assert_eq!(calc.expression(), "7.0");
        calc.evaluate();
        assert_eq!(calc.expression(), ERROR_MARKER);
    }

    #[test]
    fn test_result_can_be_extended() {
        let calc = calc_with("3+4=*2=");
        assert_eq!(calc.expression(), "14.0");
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(7.0), "7.0");
        assert_eq!(format_result(-3.0), "-3.0");
        assert_eq!(format_result(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_result(1e16), "1e+16");
        assert_eq!(format_result(1.5e-5), "1.5e-05");
        assert_eq!(format_result(2.5e-300), "2.5e-300");
        assert_eq!(format_result(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_symbol_from_char() {
        assert_eq!(Symbol::try_from('7').unwrap(), Symbol::Digit(Digit::new(7).unwrap()));
        assert_eq!(
            Symbol::try_from('/').unwrap(),
            Symbol::Operator(Operator::Divide)
        );
        assert!(matches!(
            Symbol::try_from('x'),
            Err(SymbolError::Unknown('x'))
        ));
        for c in "0123456789.+-*/=".chars() {
            assert_eq!(Symbol::try_from(c).unwrap().as_char(), c);
        }
    }

    #[test]
    fn test_digit_range() {
        assert_eq!(Digit::new(9).map(Digit::as_char), Some('9'));
        assert_eq!(Digit::new(0).map(Digit::as_char), Some('0'));
        assert_eq!(Digit::new(10), None);
        assert_eq!(Digit::new(255), None);
    }
}
