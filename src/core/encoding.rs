//! Octal and hexadecimal renderings of a spoligotype binary code.
//!
//! Neither encoding is meant to be inverted; both exist for display and for
//! comparison with published spoligotype tables.

use crate::core::code::{BinaryCode, HexCode, OctalCode};
use crate::utils::validation::ValidationError;

/// Bits per octal digit. 43 bits give 14 full groups and one lone trailing bit.
pub const OCTAL_GROUP_WIDTH: usize = 3;

/// Bit ranges for the six hexadecimal fields (widths 7,7,7,7,8,7).
///
/// This is the historical grouping used for 43-spacer hex codes. It is a fixed
/// table, not a formula, and must not be regularized.
pub const HEX_GROUP_BOUNDS: [(usize, usize); 6] =
    [(0, 7), (7, 14), (14, 21), (21, 28), (28, 36), (36, 43)];

/// Interpret a run of 0/1 values as an unsigned integer, most significant first
fn group_value(bits: &[u8]) -> u32 {
    bits.iter().fold(0, |acc, &bit| (acc << 1) | u32::from(bit))
}

/// Render a binary code as 15 octal digits.
///
/// Each full 3-bit group maps to its ordinary value. The final group holds only
/// spacer 43, whose presence is written as `1`, not as the `4` a naive
/// left-aligned triplet would give.
#[must_use]
pub fn to_octal(code: &BinaryCode) -> OctalCode {
    let bits: Vec<u8> = code.bits().collect();

    let digits = bits
        .chunks(OCTAL_GROUP_WIDTH)
        .map(|group| {
            let value = if group.len() == 1 {
                u32::from(group[0])
            } else {
                group_value(group)
            };
            #[allow(clippy::cast_possible_truncation)] // At most 7
            let digit = value as u8;
            char::from(b'0' + digit)
        })
        .collect();

    OctalCode(digits)
}

/// Render a binary code as six hyphen-joined two-digit uppercase hex fields.
#[must_use]
pub fn to_hex(code: &BinaryCode) -> HexCode {
    let bits: Vec<u8> = code.bits().collect();

    let fields: Vec<String> = HEX_GROUP_BOUNDS
        .iter()
        .map(|&(start, end)| format!("{:02X}", group_value(&bits[start..end])))
        .collect();

    HexCode(fields.join("-"))
}

/// Validate a raw string and render it as octal.
///
/// # Errors
///
/// Returns a `ValidationError` if `code` is not a 43-bit binary string.
pub fn to_octal_str(code: &str) -> Result<OctalCode, ValidationError> {
    Ok(to_octal(&BinaryCode::new(code)?))
}

/// Validate a raw string and render it as hex.
///
/// # Errors
///
/// Returns a `ValidationError` if `code` is not a 43-bit binary string.
pub fn to_hex_str(code: &str) -> Result<HexCode, ValidationError> {
    Ok(to_hex(&BinaryCode::new(code)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> BinaryCode {
        BinaryCode::new(s).unwrap()
    }

    #[test]
    fn test_octal_all_zeros() {
        assert_eq!(to_octal(&code(&"0".repeat(43))).as_str(), "000000000000000");
    }

    #[test]
    fn test_octal_all_ones() {
        assert_eq!(to_octal(&code(&"1".repeat(43))).as_str(), "777777777777771");
    }

    #[test]
    fn test_octal_leading_bit_is_four() {
        let octal = to_octal(&code(&format!("1{}", "0".repeat(42))));
        assert_eq!(octal.as_str(), "400000000000000");
    }

    #[test]
    fn test_octal_lone_trailing_bit_is_one() {
        let octal = to_octal(&code(&format!("{}1", "0".repeat(42))));
        assert_eq!(octal.as_str(), "000000000000001");
    }

    #[test]
    fn test_octal_known_profile() {
        // M. bovis BCG-like pattern
        let octal = to_octal(&code("1101111101111110111111111111111111111100000"));
        assert_eq!(octal.as_str(), "676773777777600");
        assert_eq!(octal.as_str().len(), 15);
    }

    #[test]
    fn test_hex_all_ones_irregular_widths() {
        assert_eq!(to_hex(&code(&"1".repeat(43))).as_str(), "7F-7F-7F-7F-FF-7F");
    }

    #[test]
    fn test_hex_all_zeros() {
        assert_eq!(to_hex(&code(&"0".repeat(43))).as_str(), "00-00-00-00-00-00");
    }

    #[test]
    fn test_hex_eight_bit_group() {
        // Only bits 28..36 set
        let s = format!("{}{}{}", "0".repeat(28), "1".repeat(8), "0".repeat(7));
        assert_eq!(to_hex(&code(&s)).as_str(), "00-00-00-00-FF-00");

        // Last bit of the first group
        let s = format!("0000001{}", "0".repeat(36));
        assert_eq!(to_hex(&code(&s)).as_str(), "01-00-00-00-00-00");
    }

    #[test]
    fn test_bounds_cover_all_bits() {
        assert_eq!(HEX_GROUP_BOUNDS[0].0, 0);
        assert_eq!(HEX_GROUP_BOUNDS[5].1, 43);
        for pair in HEX_GROUP_BOUNDS.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }

    #[test]
    fn test_str_variants_validate() {
        assert!(to_octal_str("1010").is_err());
        assert!(to_hex_str(&"1".repeat(44)).is_err());
        assert_eq!(
            to_hex_str(&"1".repeat(43)).unwrap().as_str(),
            "7F-7F-7F-7F-FF-7F"
        );
    }

    #[test]
    fn test_deterministic() {
        let c = code("1101111101111110111111111111111111111100000");
        assert_eq!(to_octal(&c), to_octal(&c));
        assert_eq!(to_hex(&c), to_hex(&c));
    }
}
