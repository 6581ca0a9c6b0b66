// Wiegand 64-bit format: 4-bit header followed by ten 6-bit character codes

use super::error::{Result, WiegandError};
use super::MAX_IDENTIFIER_LEN;
use crate::core::{is_blank, normalize, parse_hex_digits, to_hex_upper};

const FORMAT: &str = "Wiegand64";

/// Fixed header `0110` in the top 4 bits
pub const HEADER: u64 = 0b0110 << 60;

/// Hex digits used to render a code
pub const HEX_WIDTH: usize = 16;

const BITS_PER_CHARACTER: usize = 6;
const CHARACTER_MASK: u64 = 0b11_1111;

/// Code of the padding space
pub const EMPTY: u8 = 0b00_0000;

/// Code of any character outside the alphabet
pub const UNKNOWN: u8 = 0b11_1111;

/// Characters with a code, in code order starting at [`VALUE_OFFSET`]
pub const CHARACTER_SET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Code of the first character of [`CHARACTER_SET`]
pub const VALUE_OFFSET: u8 = 0b01_0000;

/// Marker for codes that map to no character
pub const UNKNOWN_MARKER: char = '?';

lazy_static::lazy_static! {
    static ref ENCODE_TABLE: [u8; 128] = {
        let mut table = [UNKNOWN; 128];
        table[b' ' as usize] = EMPTY;
        for (i, c) in CHARACTER_SET.bytes().enumerate() {
            table[c as usize] = VALUE_OFFSET + i as u8;
        }
        table
    };

    static ref DECODE_TABLE: [char; 64] = {
        let mut table = [UNKNOWN_MARKER; 64];
        table[EMPTY as usize] = ' ';
        for (i, c) in CHARACTER_SET.chars().enumerate() {
            table[VALUE_OFFSET as usize + i] = c;
        }
        table
    };
}

/// 6-bit code of a character; [`UNKNOWN`] when it has none
pub fn char_value(c: char) -> u8 {
    if c.is_ascii() {
        ENCODE_TABLE[c as usize]
    } else {
        UNKNOWN
    }
}

/// Character for a 6-bit code; [`UNKNOWN_MARKER`] for unused codes
pub fn value_char(value: u8) -> char {
    DECODE_TABLE
        .get(value as usize)
        .copied()
        .unwrap_or(UNKNOWN_MARKER)
}

/// Encode an identifier into a 16-digit Wiegand 64-bit hex code.
///
/// The normalized identifier is left-padded with spaces to 10 characters and
/// each character fills one 6-bit group, leftmost character in the highest
/// group. Returns `Ok(None)` when the identifier is missing or blank.
pub fn encode(identifier: Option<&str>) -> Result<Option<String>> {
    let Some(normalized) = normalize(identifier) else {
        return Ok(None);
    };

    if normalized.len() > MAX_IDENTIFIER_LEN {
        return Err(WiegandError::InputTooLong {
            format: FORMAT,
            max: MAX_IDENTIFIER_LEN,
            value: normalized,
        });
    }

    let padded = format!("{:>width$}", normalized, width = MAX_IDENTIFIER_LEN);
    let bits = padded
        .chars()
        .enumerate()
        .fold(HEADER, |bits, (position, c)| {
            bits | (char_value(c) as u64) << group_shift(position)
        });
    let code = to_hex_upper(bits, HEX_WIDTH);

    tracing::debug!("{} encoded {} as {}", FORMAT, normalized, code);

    Ok(Some(code))
}

/// Decode a Wiegand 64-bit hex code back to an identifier.
///
/// Every 6-bit group decodes to something: unused codes become `?`. The
/// header is not checked and only the low 64 bits of longer values are read.
/// Surrounding padding spaces are trimmed from the result. Returns `Ok(None)`
/// for missing or blank input; text that is not hexadecimal is malformed.
pub fn decode(hexadecimal: Option<&str>) -> Result<Option<String>> {
    let Some(hexadecimal) = hexadecimal.filter(|h| !is_blank(Some(*h))) else {
        return Ok(None);
    };

    let digits = parse_hex_digits(hexadecimal).map_err(|e| WiegandError::from_hex(FORMAT, e))?;
    let low_digits = &digits[digits.len().saturating_sub(HEX_WIDTH)..];
    let bits = if low_digits.is_empty() {
        0
    } else {
        u64::from_str_radix(low_digits, 16)
            .map_err(|e| WiegandError::malformed(FORMAT, e.to_string()))?
    };

    let decoded: String = (0..MAX_IDENTIFIER_LEN)
        .map(|position| {
            let value = ((bits >> group_shift(position)) & CHARACTER_MASK) as u8;
            let c = value_char(value);
            if c == UNKNOWN_MARKER {
                tracing::trace!("{} group {} holds unknown code {}", FORMAT, position, value);
            }
            c
        })
        .collect();
    let identifier = decoded.trim_matches(' ').to_string();

    tracing::debug!("{} decoded {} as {:?}", FORMAT, hexadecimal, identifier);

    Ok(Some(identifier))
}

fn group_shift(position: usize) -> usize {
    BITS_PER_CHARACTER * (MAX_IDENTIFIER_LEN - position - 1)
}
