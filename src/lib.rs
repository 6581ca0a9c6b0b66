// WIEGAND-RS: plate identifiers to Wiegand 26-bit and 64-bit access-control codes

pub mod core;
pub mod formats;

// Re-export commonly used types
pub use crate::core::normalize;
pub use formats::{wiegand26, wiegand64, Wiegand26Result, WiegandError, MAX_IDENTIFIER_LEN};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_codecs_share_normalization() {
        let plate = " hk-55 evb ";
        assert_eq!(normalize(Some(plate)).as_deref(), Some("HK55EVB"));

        let w26 = wiegand26::encode(Some(plate)).unwrap().unwrap();
        assert_eq!(w26.hexadecimal(), "3019E2A");

        let w64 = wiegand64::encode(Some(plate)).unwrap().unwrap();
        assert_eq!(w64, "600002191555EBDB");
        assert_eq!(wiegand64::decode(Some(&w64)).unwrap().as_deref(), Some("HK55EVB"));
    }
}
