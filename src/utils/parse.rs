/// Parse the leading integer of a path segment.
///
/// Skips leading whitespace, accepts one optional sign, then reads digits up
/// to the first non-digit (`"2abc"` is 2). A `0x`/`0X` prefix after the sign
/// switches to hexadecimal (`"0x2"` is 2). Returns `None` when no digit
/// follows or the value does not fit in an `i64`; callers treat that as an
/// id that matches nothing.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();

    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match digits.get(..2) {
        Some("0x") | Some("0X") => (16, &digits[2..]),
        _ => (10, digits),
    };

    let end = digits
        .bytes()
        .position(|b| !(b as char).is_digit(radix))
        .unwrap_or(digits.len());

    if end == 0 {
        return None;
    }

    let value = i64::from_str_radix(&digits[..end], radix).ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_leading_int("2"), Some(2));
        assert_eq!(parse_leading_int("0042"), Some(42));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+8"), Some(8));
    }

    #[test]
    fn test_trailing_garbage_is_ignored() {
        assert_eq!(parse_leading_int("2abc"), Some(2));
        assert_eq!(parse_leading_int("3.9"), Some(3));
        assert_eq!(parse_leading_int("  7"), Some(7));
    }

    #[test]
    fn test_hex_prefix() {
        assert_eq!(parse_leading_int("0x2"), Some(2));
        assert_eq!(parse_leading_int("0XfF"), Some(255));
        assert_eq!(parse_leading_int("-0x10"), Some(-16));
        assert_eq!(parse_leading_int("0x1g"), Some(1));
        assert_eq!(parse_leading_int("0x"), None);
        assert_eq!(parse_leading_int("0xzz"), None);
    }

    #[test]
    fn test_no_leading_digits() {
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("x1"), None);
        assert_eq!(parse_leading_int("- 1"), None);
    }

    #[test]
    fn test_overflow() {
        assert_eq!(parse_leading_int("99999999999999999999"), None);
    }
}
