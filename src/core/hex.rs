// Hexadecimal text parsing and rendering for fixed-width codes

use nom::{character::complete::hex_digit1, combinator::all_consuming, IResult, Parser};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    #[error("Hexadecimal value is empty")]
    Empty,

    #[error("Not a hexadecimal value: {0:?}")]
    NotHexadecimal(String),
}

fn hex_digits(input: &str) -> IResult<&str, &str> {
    all_consuming(hex_digit1).parse(input)
}

/// Validate a run of hex digits and return its significant digits.
///
/// Leading zeros are stripped, so an all-zero value yields `""`.
/// Example: `"001A"` -> `"1A"`
pub fn parse_hex_digits(text: &str) -> Result<&str, HexError> {
    if text.is_empty() {
        return Err(HexError::Empty);
    }

    let (_, digits) =
        hex_digits(text).map_err(|_| HexError::NotHexadecimal(text.to_string()))?;

    Ok(digits.trim_start_matches('0'))
}

/// Render a value as zero-padded uppercase hex of at least `width` digits
pub fn to_hex_upper(value: u64, width: usize) -> String {
    format!("{:0width$X}", value, width = width)
}

/// Minimal number of bits needed to write `value` in binary (0 for zero)
pub fn bit_length(value: u64) -> u32 {
    u64::BITS - value.leading_zeros()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_digits() {
        assert_eq!(parse_hex_digits("1A98B4B").unwrap(), "1A98B4B");
        assert_eq!(parse_hex_digits("001a").unwrap(), "1a");
        assert_eq!(parse_hex_digits("0000").unwrap(), "");
    }

    #[test]
    fn test_parse_hex_digits_rejects() {
        assert_eq!(parse_hex_digits(""), Err(HexError::Empty));
        assert!(matches!(
            parse_hex_digits("12G4"),
            Err(HexError::NotHexadecimal(_))
        ));
        assert!(parse_hex_digits(" 1A").is_err());
        assert!(parse_hex_digits("0x1A").is_err());
    }

    #[test]
    fn test_to_hex_upper() {
        assert_eq!(to_hex_upper(0x6D2EC, 7), "006D2EC");
        assert_eq!(to_hex_upper(0xABCDEF01, 7), "ABCDEF01");
        assert_eq!(to_hex_upper(0, 16), "0000000000000000");
    }

    #[test]
    fn test_bit_length() {
        assert_eq!(bit_length(0), 0);
        assert_eq!(bit_length(1), 1);
        assert_eq!(bit_length(0x3FF_FFFF), 26);
        assert_eq!(bit_length(0x400_0000), 27);
        assert_eq!(bit_length(u64::MAX), 64);
    }
}
