//! Helpers for hex input fields: which characters may be typed, and how the
//! typed text turns into register/address values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharFilter {
    #[default]
    Any,
    Hex,
}

impl CharFilter {
    pub fn accepts(&self, c: char) -> bool {
        match self {
            CharFilter::Any => !c.is_control(),
            CharFilter::Hex => c.is_ascii_hexdigit(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HexError {
    #[error("no hex digits given")]
    Empty,
    #[error("'{0}' is not a hex digit")]
    InvalidDigit(char),
    #[error("{0} does not fit in {1} bits")]
    Overflow(String, u32),
}

pub fn parse_hex_u8(text: &str) -> Result<u8, HexError> {
    let value = parse_hex(text, u8::BITS)?;
    Ok(value as u8)
}

pub fn parse_hex_u16(text: &str) -> Result<u16, HexError> {
    let value = parse_hex(text, u16::BITS)?;
    Ok(value as u16)
}

pub fn format_hex_u8(value: u8) -> String {
    format!("${:02X}", value)
}

pub fn format_hex_u16(value: u16) -> String {
    format!("${:04X}", value)
}

// accepts "$80", "0x80" and "80", surrounding whitespace ignored
fn parse_hex(text: &str, bits: u32) -> Result<u32, HexError> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix('$')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(HexError::Empty);
    }

    let mut value: u32 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(16).ok_or(HexError::InvalidDigit(c))?;
        value = value
            .checked_mul(16)
            .and_then(|v| v.checked_add(digit))
            .filter(|v| bits >= u32::BITS || *v < (1 << bits))
            .ok_or_else(|| HexError::Overflow(digits.to_string(), bits))?;
    }
    Ok(value)
}

#[test]
fn test_hex_filter() {
    assert!(CharFilter::Hex.accepts('f'));
    assert!(CharFilter::Hex.accepts('A'));
    assert!(!CharFilter::Hex.accepts('g'));
    assert!(!CharFilter::Hex.accepts('$'));
    assert!(CharFilter::Any.accepts('g'));
    assert!(!CharFilter::Any.accepts('\n'));
}

#[test]
fn test_parse_prefixes() {
    assert_eq!(parse_hex_u8("$80"), Ok(0x80));
    assert_eq!(parse_hex_u8("0x7f"), Ok(0x7f));
    assert_eq!(parse_hex_u8(" ff "), Ok(0xff));
    assert_eq!(parse_hex_u16("F000"), Ok(0xf000));
}

#[test]
fn test_parse_errors() {
    assert_eq!(parse_hex_u8(""), Err(HexError::Empty));
    assert_eq!(parse_hex_u8("$"), Err(HexError::Empty));
    assert_eq!(parse_hex_u8("8g"), Err(HexError::InvalidDigit('g')));
    assert_eq!(
        parse_hex_u8("100"),
        Err(HexError::Overflow("100".to_string(), 8))
    );
    assert_eq!(parse_hex_u16("0010000"), Err(HexError::Overflow("0010000".to_string(), 16)));
}

#[test]
fn test_format() {
    assert_eq!(format_hex_u8(0x0a), "$0A");
    assert_eq!(format_hex_u16(0x80), "$0080");
    assert_eq!(parse_hex_u16(&format_hex_u16(0x1fe)), Ok(0x1fe));
}
