// Wiegand 26-bit format: even parity, 8-bit facility code, 16-bit ID, odd parity
//
// Frame layout, most significant bit first:
//   bit 0      even parity over bits 1-12
//   bits 1-8   facility code
//   bits 9-24  ID number
//   bit 25     odd parity over bits 13-24

use super::error::{Result, WiegandError};
use super::MAX_IDENTIFIER_LEN;
use crate::core::{
    bit_length, digest, is_blank, normalize, parse_hex_digits, to_hex_upper, trailing_u24,
};
use serde::Serialize;
use std::fmt;

const FORMAT: &str = "Wiegand26";

/// Number of bits in a frame
pub const FRAME_BITS: u32 = 26;

/// Hex digits used to render a frame
pub const HEX_WIDTH: usize = 7;

const EVEN_PARITY_FIELD: u32 = 0b11_1111_1111_1110_0000_0000_0000;
const EVEN_PARITY_BIT: u32 = 1 << (FRAME_BITS - 1);
const ODD_PARITY_FIELD: u32 = 0b00_0000_0000_0001_1111_1111_1111;
const ODD_PARITY_BIT: u32 = 1;

/// Fields of a decoded Wiegand 26-bit frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Wiegand26Result {
    hexadecimal: String,
    decimal_payload: u32,
    facility_code: u8,
    id_number: u16,
    facility_code_and_id_number: u32,
}

impl Wiegand26Result {
    fn from_frame(frame: u32) -> Self {
        let facility_code = facility_code_of(frame);
        let id_number = id_number_of(frame);
        Self {
            hexadecimal: to_hex_upper(frame as u64, HEX_WIDTH),
            decimal_payload: decimal_payload_of(frame),
            facility_code,
            id_number,
            facility_code_and_id_number: concatenate(facility_code, id_number),
        }
    }

    /// Canonical 7-digit uppercase hex rendering of the frame
    pub fn hexadecimal(&self) -> &str {
        &self.hexadecimal
    }

    /// The 24 bits between the parity bits (facility code followed by ID)
    pub fn decimal_payload(&self) -> u32 {
        self.decimal_payload
    }

    pub fn facility_code(&self) -> u8 {
        self.facility_code
    }

    pub fn id_number(&self) -> u16 {
        self.id_number
    }

    /// Facility code written in decimal followed by the ID padded to 5 digits.
    /// Example: facility 212, ID 597 -> 21200597
    pub fn facility_code_and_id_number(&self) -> u32 {
        self.facility_code_and_id_number
    }
}

impl fmt::Display for Wiegand26Result {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} FC={} ID={}",
            self.hexadecimal, self.facility_code, self.id_number
        )
    }
}

/// Encode an identifier into a Wiegand 26-bit frame.
///
/// The payload is the last 3 bytes of the SHA-1 digest of the normalized
/// identifier, so the result cannot be decoded back to the identifier.
/// Returns `Ok(None)` when the identifier is missing or blank.
pub fn encode(identifier: Option<&str>) -> Result<Option<Wiegand26Result>> {
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

    let payload = trailing_u24(&digest(&normalized));
    let frame = add_parity_bits(payload << 1);
    let hexadecimal = to_hex_upper(frame as u64, HEX_WIDTH);

    tracing::debug!("{} encoded {} as {}", FORMAT, normalized, hexadecimal);

    decode(Some(&hexadecimal))
}

/// Decode a hexadecimal Wiegand 26-bit frame into its fields.
///
/// Returns `Ok(None)` for a missing or empty string. Whitespace-only or
/// non-hex text, and values wider than 26 bits, are malformed.
pub fn decode(hexadecimal: Option<&str>) -> Result<Option<Wiegand26Result>> {
    let hexadecimal = match hexadecimal {
        Some(h) if !h.is_empty() => h,
        _ => return Ok(None),
    };

    let result = Wiegand26Result::from_frame(parse_frame(hexadecimal)?);
    tracing::debug!("{} decoded {} as {}", FORMAT, hexadecimal, result);

    Ok(Some(result))
}

/// Read the facility code (8 bits at position 1) from a hex frame
pub fn read_facility_code_from(hexadecimal: &str) -> Result<u8> {
    parse_frame(hexadecimal).map(facility_code_of)
}

/// Read the ID number (16 bits at position 9) from a hex frame
pub fn read_id_number_from(hexadecimal: &str) -> Result<u16> {
    parse_frame(hexadecimal).map(id_number_of)
}

/// Read the 3-byte payload (facility code and ID, no parity bits) from a hex frame
pub fn read_decimal_payload(hexadecimal: &str) -> Result<u32> {
    parse_frame(hexadecimal).map(decimal_payload_of)
}

/// Check both parity bits of a raw frame
pub fn has_valid_parity(frame: u32) -> bool {
    bit_length(frame as u64) <= FRAME_BITS
        && (frame & EVEN_PARITY_FIELD).count_ones() % 2 == 0
        && (frame & ODD_PARITY_FIELD).count_ones() % 2 == 1
}

fn parse_frame(hexadecimal: &str) -> Result<u32> {
    if is_blank(Some(hexadecimal)) {
        return Err(WiegandError::malformed(FORMAT, "cannot be empty or blank"));
    }

    let digits = parse_hex_digits(hexadecimal).map_err(|e| WiegandError::from_hex(FORMAT, e))?;
    if digits.len() > HEX_WIDTH {
        return Err(too_long(hexadecimal));
    }

    let frame = if digits.is_empty() {
        0
    } else {
        u32::from_str_radix(digits, 16)
            .map_err(|e| WiegandError::malformed(FORMAT, e.to_string()))?
    };

    if bit_length(frame as u64) > FRAME_BITS {
        return Err(too_long(hexadecimal));
    }

    Ok(frame)
}

fn too_long(hexadecimal: &str) -> WiegandError {
    WiegandError::malformed(
        FORMAT,
        format!("{} is wider than {} bits", hexadecimal, FRAME_BITS),
    )
}

fn add_parity_bits(bits: u32) -> u32 {
    let mut frame = bits;

    if (frame & EVEN_PARITY_FIELD).count_ones() % 2 != 0 {
        frame |= EVEN_PARITY_BIT;
    }
    if (frame & ODD_PARITY_FIELD).count_ones() % 2 == 0 {
        frame |= ODD_PARITY_BIT;
    }

    frame
}

fn facility_code_of(frame: u32) -> u8 {
    ((frame >> 17) & 0xFF) as u8
}

fn id_number_of(frame: u32) -> u16 {
    ((frame >> 1) & 0xFFFF) as u16
}

fn decimal_payload_of(frame: u32) -> u32 {
    (frame >> 1) & 0xFF_FFFF
}

// Same number as the decimal text "{facility}{id:05}"; the ID never exceeds 5 digits
fn concatenate(facility_code: u8, id_number: u16) -> u32 {
    facility_code as u32 * 100_000 + id_number as u32
}
