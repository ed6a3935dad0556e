//! Lenient quantity parsing for user-typed input.

/// Parse a quantity the way a browser number field reports it.
///
/// Leading whitespace and a single sign are accepted, then the longest run of
/// ASCII digits is read and anything after it is ignored (`"3.7"` is `3`,
/// `"4 pcs"` is `4`). Input without leading digits is `0`, negative values
/// become `0`, and values past `u32::MAX` saturate.
///
/// ```
/// use glyke_core::parse_quantity;
///
/// assert_eq!(parse_quantity(" 12"), 12);
/// assert_eq!(parse_quantity("abc"), 0);
/// assert_eq!(parse_quantity("-3"), 0);
/// ```
#[must_use]
pub fn parse_quantity(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, digits) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else {
        (false, trimmed.strip_prefix('+').unwrap_or(trimmed))
    };

    let mut value: u32 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(u32::from(byte - b'0'));
    }

    if negative || !seen_digit { 0 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_digits() {
        assert_eq!(parse_quantity("7"), 7);
        assert_eq!(parse_quantity("007"), 7);
    }

    #[test]
    fn test_trailing_garbage_ignored() {
        assert_eq!(parse_quantity("3.7"), 3);
        assert_eq!(parse_quantity("4abc"), 4);
        assert_eq!(parse_quantity("  +5 "), 5);
    }

    #[test]
    fn test_non_numeric_is_zero() {
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("abc"), 0);
        assert_eq!(parse_quantity("-"), 0);
        assert_eq!(parse_quantity(".5"), 0);
    }

    #[test]
    fn test_negative_is_zero() {
        assert_eq!(parse_quantity("-2"), 0);
        assert_eq!(parse_quantity("-0"), 0);
    }

    #[test]
    fn test_saturates() {
        assert_eq!(parse_quantity("99999999999999999999"), u32::MAX);
    }
}
