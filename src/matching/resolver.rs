use tracing::debug;

use crate::catalog::store::SpoligotypeDb;
use crate::core::code::BinaryCode;
use crate::core::types::Spoligotype;

/// Look up a binary code in the database.
///
/// Exact matches only. A miss on an all-zero code is reported as
/// [`Spoligotype::AllZeros`] so callers can tell a failed sample from a novel pattern.
#[must_use]
pub fn resolve(code: &BinaryCode, db: &SpoligotypeDb) -> Spoligotype {
    if let Some(entry) = db.get(code) {
        debug!("Binary code {code} matches {}", entry.identifier);
        return Spoligotype::Known(entry.identifier.clone());
    }

    if code.is_all_zeros() {
        Spoligotype::AllZeros
    } else {
        Spoligotype::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db() -> SpoligotypeDb {
        SpoligotypeDb::from_text(&format!(
            "SB0145 SB0145 {}\nSB0120 SB0120 1101111101111110111111111111111111111100000\n",
            "1".repeat(43)
        ))
        .unwrap()
    }

    fn code(s: &str) -> BinaryCode {
        BinaryCode::new(s).unwrap()
    }

    #[test]
    fn test_resolve_exact_match() {
        assert_eq!(
            resolve(&code(&"1".repeat(43)), &db()),
            Spoligotype::Known("SB0145".to_string())
        );
        assert_eq!(
            resolve(&code("1101111101111110111111111111111111111100000"), &db()),
            Spoligotype::Known("SB0120".to_string())
        );
    }

    #[test]
    fn test_resolve_not_found() {
        let mut near_miss = "1".repeat(42);
        near_miss.push('0');
        assert_eq!(resolve(&code(&near_miss), &db()), Spoligotype::NotFound);
    }

    #[test]
    fn test_resolve_all_zeros() {
        assert_eq!(
            resolve(&code(&"0".repeat(43)), &db()),
            Spoligotype::AllZeros
        );
    }

    #[test]
    fn test_all_zeros_in_database_is_a_match() {
        let db = SpoligotypeDb::from_text(&format!("Z SB9999 {}\n", "0".repeat(43))).unwrap();
        assert_eq!(
            resolve(&code(&"0".repeat(43)), &db),
            Spoligotype::Known("SB9999".to_string())
        );
    }
}
