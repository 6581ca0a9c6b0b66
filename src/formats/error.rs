// Errors raised by the Wiegand codecs

use crate::core::HexError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WiegandError {
    #[error("{format} does not support identifiers longer than {max} characters: {value}")]
    InputTooLong {
        format: &'static str,
        max: usize,
        value: String,
    },

    #[error("Malformed {format} value: {reason}")]
    MalformedInput {
        format: &'static str,
        reason: String,
    },
}

impl WiegandError {
    pub(crate) fn malformed(format: &'static str, reason: impl Into<String>) -> Self {
        WiegandError::MalformedInput {
            format,
            reason: reason.into(),
        }
    }

    pub(crate) fn from_hex(format: &'static str, err: HexError) -> Self {
        WiegandError::malformed(format, err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WiegandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = WiegandError::InputTooLong {
            format: "Wiegand26",
            max: 10,
            value: "AZERTYUIOP0987".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Wiegand26 does not support identifiers longer than 10 characters: AZERTYUIOP0987"
        );

        let err = WiegandError::malformed("Wiegand26", "too long");
        assert_eq!(err.to_string(), "Malformed Wiegand26 value: too long");

        let err = WiegandError::from_hex("Wiegand64", HexError::NotHexadecimal("XYZ".into()));
        assert!(matches!(err, WiegandError::MalformedInput { format: "Wiegand64", .. }));
    }
}
