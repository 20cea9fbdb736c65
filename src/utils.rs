//! Address and amount formatting helpers.
//!
//! These are optional conveniences: no endpoint binding calls them before
//! sending, the caller decides when to validate or format.

/// Number of fractional digits in a nano-TON amount.
const NANO_DIGITS: usize = 9;

/// Address prefixes of the base64url-flavored user-friendly form.
const FRIENDLY_PREFIXES: [&str; 4] = ["EQ", "UQ", "kQ", "Ef"];

/// Checks whether a string is plausibly a TON address.
///
/// This is a fast structural check, not cryptographic validation: it
/// accepts the raw `0:`-prefixed form, the `workchain:hash` form with
/// workchain `0` or `-1`, and the user-friendly base64url form with a
/// recognized two-character prefix.
///
/// ```rust
/// use toncenter_client::utils::is_valid_address;
///
/// assert!(is_valid_address("EQCkR1cGmnsE45N4K0otPl5EnxnRakmGqeJUNua5fkWhales"));
/// assert!(!is_valid_address(""));
/// ```
pub fn is_valid_address(address: &str) -> bool {
    if address.is_empty() {
        return false;
    }

    // Raw form: `0:` followed by the hex account hash.
    if address.starts_with("0:") && address.len() >= 66 {
        return true;
    }

    // `workchain:hash` form with a decimal workchain id.
    if address.contains(':') {
        let parts: Vec<&str> = address.split(':').collect();
        if parts.len() != 2 {
            return false;
        }
        if parts[0] != "0" && parts[0] != "-1" {
            return false;
        }
        return parts[1].len() == 64;
    }

    // User-friendly base64url form.
    address.len() >= 48 && FRIENDLY_PREFIXES.iter().any(|p| address.starts_with(p))
}

/// Formats a nano-TON integer string as a whole-TON decimal string.
///
/// The input must contain only decimal digits; values sourced from the API
/// satisfy this. Trailing fractional zeros are trimmed, and an all-zero
/// input yields `"0"`.
///
/// ```rust
/// use toncenter_client::utils::format_nano_ton;
///
/// assert_eq!(format_nano_ton("1500000000"), "1.5");
/// assert_eq!(format_nano_ton("123"), "0.000000123");
/// ```
pub fn format_nano_ton(nano: &str) -> String {
    let trimmed = nano.trim_start_matches('0');
    let digits = if trimmed.is_empty() { "0" } else { trimmed };

    // Pad to at least one integer digit in front of the fractional part.
    let padded = if digits.len() <= NANO_DIGITS {
        format!("{digits:0>width$}", width = NANO_DIGITS + 1)
    } else {
        digits.to_string()
    };

    let point = padded.len() - NANO_DIGITS;
    let mut result = format!("{}.{}", &padded[..point], &padded[point..]);

    while result.ends_with('0') {
        result.pop();
    }
    if result.ends_with('.') {
        result.pop();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_formats_to_bare_zero() {
        assert_eq!(format_nano_ton("0"), "0");
        assert_eq!(format_nano_ton("000"), "0");
    }

    #[test]
    fn whole_ton_drops_fractional_part() {
        assert_eq!(format_nano_ton("1000000000"), "1");
        assert_eq!(format_nano_ton("25000000000"), "25");
    }

    #[test]
    fn fractional_amounts_trim_trailing_zeros() {
        assert_eq!(format_nano_ton("1500000000"), "1.5");
        assert_eq!(format_nano_ton("100"), "0.0000001");
    }

    #[test]
    fn sub_nano_amounts_are_left_padded() {
        assert_eq!(format_nano_ton("123"), "0.000000123");
        assert_eq!(format_nano_ton("1"), "0.000000001");
    }

    #[test]
    fn friendly_addresses_need_prefix_and_length() {
        assert!(is_valid_address(
            "EQCkR1cGmnsE45N4K0otPl5EnxnRakmGqeJUNua5fkWhales"
        ));
        assert!(is_valid_address(
            "UQCkR1cGmnsE45N4K0otPl5EnxnRakmGqeJUNua5fkWhales"
        ));
        // Unknown prefix.
        assert!(!is_valid_address(
            "XXCkR1cGmnsE45N4K0otPl5EnxnRakmGqeJUNua5fkWhales"
        ));
        // Too short.
        assert!(!is_valid_address("EQCkR1cGmnsE45N4K0otPl5Enxn"));
    }

    #[test]
    fn raw_addresses_need_known_workchain() {
        let hash = "a".repeat(64);
        assert!(is_valid_address(&format!("0:{hash}")));
        assert!(is_valid_address(&format!("-1:{hash}")));
        assert!(!is_valid_address(&format!("1:{hash}")));
        assert!(!is_valid_address(&format!("0:{}", "a".repeat(40))));
    }

    #[test]
    fn empty_and_malformed_addresses_are_rejected() {
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("0:ab:cd"));
    }
}
