use crate::models::swap::{Conversion, Validation};
use crate::models::token::Token;
use crate::utils::helper::{format_fixed, parse_amount};

/// Fractional digits of a computed destination amount
pub const DESTINATION_DIGITS: usize = 6;

/// Exchange rate between two priced tokens, in destination units per source unit
pub fn exchange_rate(from: &Token, to: &Token) -> Option<f64> {
    if from.has_price() && to.has_price() {
        Some(from.price / to.price)
    } else {
        None
    }
}

/// Convert `source_amount` of `from` into `to` and check it against `ceiling`.
///
/// The destination amount is absent when the amount does not parse, is not
/// positive, or either side lacks a price. The ceiling check runs regardless.
pub fn convert(
    source_amount: &str,
    from: Option<&Token>,
    to: Option<&Token>,
    ceiling: f64,
) -> Conversion {
    let parsed = parse_amount(source_amount);

    let rate = match (from, to) {
        (Some(from), Some(to)) => exchange_rate(from, to),
        _ => None,
    };

    let destination_amount = match (parsed, rate) {
        (Some(amount), Some(rate)) if amount > 0.0 => {
            Some(format_fixed(amount * rate, DESTINATION_DIGITS))
        }
        _ => None,
    };

    Conversion {
        destination_amount,
        rate,
        validation: validate(parsed, from, ceiling),
    }
}

/// Balance ceiling check for the source side
pub fn validate(amount: Option<f64>, from: Option<&Token>, ceiling: f64) -> Validation {
    match (amount, from) {
        (Some(amount), Some(token)) if amount > ceiling => {
            Validation::InsufficientBalance(format!("Insufficient {} balance", token.currency))
        }
        _ => Validation::Ok,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::token::DEFAULT_ICON_BASE;

    fn eth() -> Token {
        Token::new("ETH", 2000.0, DEFAULT_ICON_BASE)
    }

    fn usdc() -> Token {
        Token::new("USDC", 1.0, DEFAULT_ICON_BASE)
    }

    #[test]
    fn converts_with_six_digits() {
        let result = convert("2", Some(&eth()), Some(&usdc()), 10.0);

        assert_eq!(result.destination_amount.as_deref(), Some("4000.000000"));
        assert_eq!(result.rate, Some(2000.0));
        assert_eq!(result.validation, Validation::Ok);
    }

    #[test]
    fn converts_towards_pricier_asset() {
        let result = convert("1", Some(&usdc()), Some(&eth()), 10.0);
        assert_eq!(result.destination_amount.as_deref(), Some("0.000500"));
    }

    #[test]
    fn destination_ties_round_up() {
        let cheap = Token::new("DUST", 0.0078125, DEFAULT_ICON_BASE);

        let result = convert("1", Some(&cheap), Some(&usdc()), 10.0);
        assert_eq!(result.destination_amount.as_deref(), Some("0.007813"));
    }

    #[test]
    fn amount_above_ceiling_is_insufficient() {
        let result = convert("20", Some(&eth()), Some(&usdc()), 10.0);

        assert_eq!(
            result.validation,
            Validation::InsufficientBalance("Insufficient ETH balance".to_string())
        );
        // the amount is still converted
        assert_eq!(result.destination_amount.as_deref(), Some("40000.000000"));
    }

    #[test]
    fn ceiling_check_runs_without_destination_token() {
        let result = convert("20", Some(&eth()), None, 10.0);

        assert_eq!(result.destination_amount, None);
        assert_eq!(result.validation.message(), Some("Insufficient ETH balance"));
    }

    #[test]
    fn amount_equal_to_ceiling_is_fine() {
        let result = convert("10", Some(&eth()), Some(&usdc()), 10.0);
        assert!(result.validation.is_ok());
    }

    #[test]
    fn unparsable_or_non_positive_amount_has_no_destination() {
        for input in ["", "abc", "0", "-3", "inf", "infinity"] {
            let result = convert(input, Some(&eth()), Some(&usdc()), 10.0);
            assert_eq!(result.destination_amount, None, "input {:?}", input);
            assert!(result.validation.is_ok(), "input {:?}", input);
        }
    }

    #[test]
    fn unknown_price_has_no_destination() {
        let unpriced = Token::new("MYSTERY", 0.0, DEFAULT_ICON_BASE);

        let result = convert("1", Some(&eth()), Some(&unpriced), 10.0);

        assert_eq!(result.destination_amount, None);
        assert_eq!(result.rate, None);
    }

    #[test]
    fn no_source_token_never_fails_validation() {
        let result = convert("1000", None, Some(&usdc()), 10.0);
        assert!(result.validation.is_ok());
    }
}
