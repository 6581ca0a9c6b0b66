// Collaborators shared by the Wiegand codecs: normalization, digest, hex text
pub mod digest;
pub mod hex;
pub mod normalize;

// Re-export commonly used helpers
pub use digest::{digest, trailing_u24};
pub use hex::{bit_length, parse_hex_digits, to_hex_upper, HexError};
pub use normalize::{is_blank, normalize};
