//! String hashing used for placement.

/// Signed 32-bit rolling hash (`h = h * 31 + unit`, wrapping) over UTF-16
/// code units, returned as its absolute value.
///
/// `i32::MIN` maps to `2^31`, which is why the result is unsigned.
pub fn string_hash(text: &str) -> u32 {
    text.encode_utf16()
        .fold(0_i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}

/// Length of `text` in UTF-16 code units.
pub fn text_units(text: &str) -> usize {
    text.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(string_hash(""), 0);
        assert_eq!(string_hash("a"), 97);
        assert_eq!(string_hash("ab"), 97 * 31 + 98);
        assert_eq!(string_hash("width"), 113_126_854);
    }

    #[test]
    fn wraps_and_takes_absolute_value() {
        // "polygenelubricants" hashes to i32::MIN under this scheme.
        assert_eq!(string_hash("polygenelubricants"), 2_147_483_648);
        // Long inputs wrap instead of overflowing.
        let long = "selector".repeat(64);
        assert_eq!(string_hash(&long), string_hash(&long));
    }

    #[test]
    fn counts_utf16_units() {
        assert_eq!(text_units("abc"), 3);
        assert_eq!(text_units("é"), 1);
        assert_eq!(text_units("\u{1F600}"), 2);
        // A surrogate pair hashes as two units.
        let expected = (0xD83D_i32 * 31 + 0xDE00).unsigned_abs();
        assert_eq!(string_hash("\u{1F600}"), expected);
    }
}
