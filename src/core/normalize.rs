// Identifier normalization applied before encoding

use regex::Regex;

lazy_static::lazy_static! {
    /// Everything outside the encodable alphabet
    static ref NON_ALPHANUMERIC: Regex = Regex::new(r"[^A-Z0-9]+").unwrap();
}

/// Normalize a raw identifier: trim, uppercase, then keep only `A-Z` and `0-9`.
///
/// Returns `None` for a missing identifier or one with nothing left after
/// filtering, so callers treat null, empty and blank input the same way.
///
/// Example: `" HK-55-evb "` -> `"HK55EVB"`
pub fn normalize(text: Option<&str>) -> Option<String> {
    let text = text.filter(|t| !t.is_empty())?;
    let upper = text.trim().to_uppercase();
    let normalized = NON_ALPHANUMERIC.replace_all(&upper, "");

    if normalized.is_empty() {
        None
    } else {
        Some(normalized.into_owned())
    }
}

/// Check whether a value is missing or contains only whitespace
pub fn is_blank(text: Option<&str>) -> bool {
    text.map_or(true, |t| t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_blank() {
        assert_eq!(normalize(None), None);
        assert_eq!(normalize(Some("")), None);
        assert_eq!(normalize(Some("   ")), None);
        assert_eq!(normalize(Some("--//..")), None);
    }

    #[test]
    fn test_strips_and_uppercases() {
        assert_eq!(normalize(Some("HK 55 EVB")).as_deref(), Some("HK55EVB"));
        assert_eq!(normalize(Some("HK-55-evb")).as_deref(), Some("HK55EVB"));
        assert_eq!(normalize(Some(" HK-55€evb ")).as_deref(), Some("HK55EVB"));
        assert_eq!(normalize(Some("2ZZD4;;..56")).as_deref(), Some("2ZZD456"));
        assert_eq!(normalize(Some("VR46#T")).as_deref(), Some("VR46T"));
    }

    #[test]
    fn test_unicode_case_folding() {
        // Uppercasing happens before filtering
        assert_eq!(normalize(Some("straße")).as_deref(), Some("STRASSE"));
        assert_eq!(normalize(Some("café")).as_deref(), Some("CAF"));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some(" \t ")));
        assert!(!is_blank(Some(" 1A ")));
    }
}
