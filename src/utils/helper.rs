/// Parse a user-entered amount. Surrounding whitespace is ignored.
pub fn parse_amount(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Whether an edit to an amount field should be accepted:
/// empty text, or a number that is not negative.
pub fn is_acceptable_amount_input(s: &str) -> bool {
    s.trim().is_empty() || parse_amount(s).map_or(false, |v| v >= 0.0)
}

/// Fractional places that print any finite f64 exactly
const EXACT_PLACES: usize = 1100;

/// Format an amount with zero fractional digits, rounding halves up
pub fn format_whole(amount: f64) -> String {
    format_fixed(amount, 0)
}

/// Format a value in fixed-point notation with `digits` fractional digits.
///
/// Rounds the exact binary value half away from zero, so `0.0078125` becomes
/// `0.007813` at six digits.
pub fn format_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_PLACES.max(digits + 1), value.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = whole.bytes().chain(fraction.bytes().take(digits)).collect();
    if fraction.as_bytes().get(digits).map_or(false, |d| *d >= b'5') {
        carry_one(&mut kept);
    }

    let point = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 && kept.iter().any(|d| *d != b'0') {
        out.push('-');
    }
    out.extend(kept[..point].iter().map(|d| char::from(*d)));
    if digits > 0 {
        out.push('.');
        out.extend(kept[point..].iter().map(|d| char::from(*d)));
    }
    out
}

fn carry_one(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Format a USD value for display
pub fn format_usd(value: f64) -> String {
    if value.is_finite() {
        format!("${:.2}", value)
    } else {
        "N/A".to_string()
    }
}

/// Truncate a string to a maximum length
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_rounds_half_up() {
        assert_eq!(format_whole(2.5), "3");
        assert_eq!(format_whole(2.4), "2");
        assert_eq!(format_whole(0.5), "1");
        assert_eq!(format_whole(1234.0), "1234");
    }

    #[test]
    fn fixed_never_uses_exponent() {
        assert_eq!(format_fixed(4000.0, 6), "4000.000000");
        assert_eq!(format_fixed(1e-7, 6), "0.000000");
        assert_eq!(format_fixed(1.5e12, 6), "1500000000000.000000");
    }

    #[test]
    fn fixed_rounds_ties_up() {
        assert_eq!(format_fixed(0.0078125, 6), "0.007813");
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(2.5, 0), "3");
        assert_eq!(format_fixed(9.5, 0), "10");
        assert_eq!(format_fixed(0.9999996, 6), "1.000000");
        // 1.005 is stored slightly below the tie
        assert_eq!(format_fixed(1.005, 2), "1.00");
    }

    #[test]
    fn amount_input_filter() {
        assert!(is_acceptable_amount_input(""));
        assert!(is_acceptable_amount_input("0"));
        assert!(is_acceptable_amount_input("12.5"));
        assert!(!is_acceptable_amount_input("-1"));
        assert!(!is_acceptable_amount_input("abc"));
        assert!(!is_acceptable_amount_input("inf"));
        assert!(!is_acceptable_amount_input("Infinity"));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_amount(" 2 "), Some(2.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("1e400"), None);
        assert_eq!(parse_amount("1e3"), Some(1000.0));
    }

    #[test]
    fn truncates_long_symbols() {
        assert_eq!(truncate_string("USDC", 8), "USDC");
        assert_eq!(truncate_string("VERYLONGSYMBOL", 8), "VERYL...");
    }
}
