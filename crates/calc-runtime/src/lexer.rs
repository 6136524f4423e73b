//! Lexical helpers
//!
//! The grammar has no separate token stream: the parser works directly on
//! the unconsumed tail of the line. These helpers classify the next byte and
//! split maximal digit or alphanumeric runs off the front of the input,
//! returning the consumed value together with the remaining input.
//!
//! All helpers are pure functions over `&str` slices.

use crate::ast::BinaryOp;
use crate::value::Number;

/// Classification of the next character of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Input exhausted
    End,
    /// `\n` or `\r`
    Terminator,
    Digit,
    Letter,
    Operator(BinaryOp),
    /// `=`
    Equals,
    /// Anything outside the calculator's alphabet (including whitespace)
    Other(char),
}

pub fn is_digit(byte: u8) -> bool {
    matches!(byte, b'0'..=b'9')
}

pub fn is_letter(byte: u8) -> bool {
    matches!(byte, b'a'..=b'z' | b'A'..=b'Z')
}

pub fn is_alphanumeric(byte: u8) -> bool {
    is_letter(byte) || is_digit(byte)
}

/// Classify the first character of `input`
pub fn classify(input: &str) -> CharClass {
    let Some(c) = input.chars().next() else {
        return CharClass::End;
    };
    if !c.is_ascii() {
        return CharClass::Other(c);
    }

    let byte = c as u8;
    match byte {
        b'\n' | b'\r' => CharClass::Terminator,
        b'=' => CharClass::Equals,
        _ if is_digit(byte) => CharClass::Digit,
        _ if is_letter(byte) => CharClass::Letter,
        _ => match BinaryOp::from_byte(byte) {
            Some(op) => CharClass::Operator(op),
            None => CharClass::Other(c),
        },
    }
}

/// True if `input` is nothing but an optional line terminator
pub fn is_line_end(input: &str) -> bool {
    matches!(input, "" | "\n" | "\r\n" | "\r")
}

/// Split the longest prefix whose bytes all satisfy `pred`
pub fn split_run(input: &str, pred: fn(u8) -> bool) -> (&str, &str) {
    let len = input.bytes().take_while(|b| pred(*b)).count();
    input.split_at(len)
}

/// Base-10 value of a digit run, or `None` if it does not fit in a [`Number`]
pub fn digits_value(digits: &str) -> Option<Number> {
    digits.bytes().try_fold(0 as Number, |acc, byte| {
        acc.checked_mul(10)?
            .checked_add(Number::from(byte - b'0'))
    })
}

/// Consume the maximal digit run at the front of `input`.
///
/// Leading zeros are allowed and there is no sign. Returns `None` when the
/// input does not start with a digit or the value overflows.
pub fn scan_number(input: &str) -> Option<(Number, &str)> {
    let (digits, rest) = split_run(input, is_digit);
    if digits.is_empty() {
        return None;
    }
    Some((digits_value(digits)?, rest))
}

/// Consume the maximal letter/digit run at the front of `input`.
///
/// The parser only calls this when the first character is a letter.
pub fn scan_identifier(input: &str) -> (&str, &str) {
    split_run(input, is_alphanumeric)
}
