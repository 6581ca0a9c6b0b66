// Wiegand card formats: 26-bit (facility code + ID) and 64-bit (packed characters)
pub mod error;
pub mod wiegand26;
pub mod wiegand64;

pub use error::{Result, WiegandError};
pub use wiegand26::Wiegand26Result;

/// Longest normalized identifier either format accepts
pub const MAX_IDENTIFIER_LEN: usize = 10;
