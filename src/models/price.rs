//! Price parsing and formatting.
//!
//! Prices are typed by hand with a comma as decimal separator (`1,50`). A dot
//! is tolerated as well. Signs, exponents, thousands separators and more than
//! one separator are rejected.

use crate::error::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

static PRICE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(?:[,.][0-9]+)?$").expect("valid price regex"));

/// Parses a price typed by the user. Blank input means zero.
pub fn parse_price(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    if !PRICE_PATTERN.is_match(trimmed) {
        return Err(ValidationError::InvalidPrice(trimmed.to_string()));
    }

    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or_else(|| ValidationError::InvalidPrice(trimmed.to_string()))
}

/// Two decimal places, as used for totals and list rows.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

pub fn format_with_currency(amount: f64, currency: &str) -> String {
    format!("{} {}", format_amount(amount), currency)
}

/// Renders a stored price back into the comma form so it can be edited.
pub fn format_price_input(price: f64) -> String {
    price.to_string().replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_is_decimal_separator() {
        assert_eq!(parse_price("1,50").unwrap(), 1.5);
        assert_eq!(parse_price("0,99").unwrap(), 0.99);
        assert_eq!(parse_price("12").unwrap(), 12.0);
    }

    #[test]
    fn test_dot_and_whitespace_are_tolerated() {
        assert_eq!(parse_price(" 2.25 ").unwrap(), 2.25);
    }

    #[test]
    fn test_blank_price_defaults_to_zero() {
        assert_eq!(parse_price("").unwrap(), 0.0);
        assert_eq!(parse_price("   ").unwrap(), 0.0);
    }

    #[test]
    fn test_malformed_prices_are_rejected() {
        for input in [",50", "1,", "1,2,3", "1.2,3", "-1", "+1", "abc", "1e3", "1 000"] {
            assert_eq!(
                parse_price(input),
                Err(ValidationError::InvalidPrice(input.trim().to_string())),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_price_too_large_for_f64_is_rejected() {
        let huge = format!("1{}", "0".repeat(400));
        assert_eq!(
            parse_price(&huge),
            Err(ValidationError::InvalidPrice(huge.clone()))
        );
        assert!(parse_price(&format!("{},5", huge)).is_err());
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_amount(3.5), "3.50");
        assert_eq!(format_with_currency(0.0, "EUR"), "0.00 EUR");
        assert_eq!(format_price_input(1.5), "1,5");
        assert_eq!(format_price_input(2.0), "2");
        assert_eq!(parse_price(&format_price_input(4.75)).unwrap(), 4.75);
    }
}
