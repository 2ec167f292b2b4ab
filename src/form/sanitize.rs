// ---------------------------------------------------------------------------
// Price field sanitization
// ---------------------------------------------------------------------------

/// Upper bound for both price fields, in rubles.
pub const MAX_PRICE: u32 = 1_000_000;

/// Sanitize a price field after an edit: drop every non-digit character and
/// clamp the numeric value to [`MAX_PRICE`].
///
/// Leading zeros survive here ("0999" parses below the cap); they are only
/// stripped when the field loses focus, see [`normalize_price`].
pub fn sanitize_price(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return digits;
    }
    match digits.parse::<u64>() {
        Ok(v) if v <= u64::from(MAX_PRICE) => digits,
        // Parse overflow means the value is far beyond the cap anyway.
        _ => MAX_PRICE.to_string(),
    }
}

/// Normalize a price field on focus loss: re-parse as an integer and rewrite
/// the text without leading zeros. Empty, zero, or unparseable input clears
/// the field.
pub fn normalize_price(value: &str) -> String {
    match value.parse::<u64>() {
        Ok(0) | Err(_) => String::new(),
        Ok(v) => v.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_non_digit_characters() {
        assert_eq!(sanitize_price("12a3,4.5 ₽"), "12345");
        assert_eq!(sanitize_price("abc"), "");
        assert_eq!(sanitize_price("-500"), "500");
    }

    #[test]
    fn clamps_to_one_million() {
        assert_eq!(sanitize_price("1000001"), "1000000");
        assert_eq!(sanitize_price("99999999999999999999999"), "1000000");
        assert_eq!(sanitize_price("1000000"), "1000000");
        assert_eq!(sanitize_price("999999"), "999999");
    }

    #[test]
    fn keeps_leading_zeros_until_blur() {
        assert_eq!(sanitize_price("000123"), "000123");
    }

    #[test]
    fn blur_strips_leading_zeros() {
        assert_eq!(normalize_price("000123"), "123");
    }

    #[test]
    fn blur_clears_empty_and_zero() {
        assert_eq!(normalize_price(""), "");
        assert_eq!(normalize_price("0"), "");
        assert_eq!(normalize_price("000"), "");
    }
}
