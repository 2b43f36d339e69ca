//! Monetary amount normalization.
//!
//! Receipt amounts arrive in whichever locale convention the vendor prints:
//! `1,234.56` (grouping comma, decimal point) or `1.234,56` (grouping point,
//! decimal comma), with optional currency glyphs and OCR-introduced spacing.
//! `parse_amount` resolves the ambiguity and yields an exact decimal, or
//! nothing - never a partially-parsed guess.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Currency glyphs stripped before numeric parsing. Alphabetic currency codes
/// are not stripped; a string containing letters is rejected outright.
const CURRENCY_GLYPHS: [char; 5] = ['$', '\u{20ac}', '\u{a3}', '\u{a5}', '\u{a2}'];

/// Parse a raw monetary string into a canonical amount.
///
/// Rules:
/// - currency glyphs and all whitespace (including non-breaking spaces used
///   as group separators) are stripped first;
/// - an optional leading `-` marks a credit/refund and is preserved;
/// - when both `.` and `,` appear, the one occurring last is the decimal
///   separator and the other kind is grouping;
/// - when only one separator kind appears, it is decimal only if it occurs
///   once with 1-2 trailing digits, otherwise grouping;
/// - anything else - letters, leftover symbols, more than one decimal
///   separator, no digits at all - is unparseable.
///
/// The result is rounded to 2 decimal places, midpoint away from zero.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !CURRENCY_GLYPHS.contains(c))
        .collect();

    let negative = cleaned.starts_with('-');
    let body = cleaned.strip_prefix('-').unwrap_or(&cleaned);

    if !body.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    if !body.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.') {
        return None;
    }

    let normalized = match (body.contains(','), body.contains('.')) {
        (true, true) => {
            // The separator appearing last is the decimal separator.
            if body.rfind(',') > body.rfind('.') {
                body.replace('.', "").replace(',', ".")
            } else {
                body.replace(',', "")
            }
        }
        (true, false) => resolve_single_separator(body, ','),
        (false, true) => resolve_single_separator(body, '.'),
        (false, false) => body.to_string(),
    };

    // After disambiguation at most one decimal point may remain.
    if normalized.matches('.').count() > 1 {
        return None;
    }

    let normalized = if normalized.starts_with('.') {
        format!("0{normalized}")
    } else {
        normalized
    };

    let mut value = Decimal::from_str(&normalized).ok()?;
    if negative {
        value = -value;
    }
    Some(value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Disambiguate a string containing only one separator kind: a decimal
/// separator is a single occurrence with 1-2 trailing digits (`12,5`);
/// anything else is grouping (`1,234`, `1,234,567`).
fn resolve_single_separator(body: &str, separator: char) -> String {
    let occurrences = body.matches(separator).count();
    let trailing_digits = body
        .rsplit(separator)
        .next()
        .map(str::len)
        .unwrap_or(0);

    if occurrences == 1 && (1..=2).contains(&trailing_digits) {
        body.replace(separator, ".")
    } else {
        body.replace(separator, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_single_comma_disambiguation() {
        // Three trailing digits: grouping. One or two: decimal.
        assert_eq!(parse_amount("1,234"), Some(dec("1234")));
        assert_eq!(parse_amount("12,5"), Some(dec("12.5")));
        assert_eq!(parse_amount("12,50"), Some(dec("12.50")));
        assert_eq!(parse_amount("1,234,567"), Some(dec("1234567")));
    }

    #[test]
    fn test_single_dot_disambiguation() {
        assert_eq!(parse_amount("1.234"), Some(dec("1234")));
        assert_eq!(parse_amount("12.5"), Some(dec("12.5")));
        assert_eq!(parse_amount("101.45"), Some(dec("101.45")));
    }

    #[test]
    fn test_both_separators_last_wins() {
        assert_eq!(parse_amount("1,234.56"), Some(dec("1234.56")));
        assert_eq!(parse_amount("1.234,56"), Some(dec("1234.56")));
        assert_eq!(parse_amount("1,234,567.89"), Some(dec("1234567.89")));
        assert_eq!(parse_amount("1.234.567,89"), Some(dec("1234567.89")));
    }

    #[test]
    fn test_currency_glyphs_and_whitespace() {
        assert_eq!(parse_amount("$101.45"), Some(dec("101.45")));
        assert_eq!(parse_amount(" $ 1,234.56 "), Some(dec("1234.56")));
        assert_eq!(parse_amount("\u{20ac}1.234,56"), Some(dec("1234.56")));
        // OCR output of European grouping often carries non-breaking spaces.
        assert_eq!(parse_amount("1\u{a0}234,56"), Some(dec("1234.56")));
    }

    #[test]
    fn test_negative_amounts_preserved() {
        assert_eq!(parse_amount("-45.00"), Some(dec("-45.00")));
        assert_eq!(parse_amount("-12,5"), Some(dec("-12.5")));
        assert_eq!(parse_amount("-$3.10"), Some(dec("-3.10")));
    }

    #[test]
    fn test_rounding_to_two_places() {
        assert_eq!(parse_amount("1,234.565"), Some(dec("1234.57")));
        assert_eq!(parse_amount("1.234,565"), Some(dec("1234.57")));
        assert_eq!(parse_amount("-1,234.565"), Some(dec("-1234.57")));
    }

    #[test]
    fn test_unparseable_inputs() {
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("12a4"), None);
        assert_eq!(parse_amount("101.45 USD"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("$"), None);
        assert_eq!(parse_amount("-"), None);
        assert_eq!(parse_amount("--5"), None);
        assert_eq!(parse_amount("1+2"), None);
        // Two decimal separators survive disambiguation: reject.
        assert_eq!(parse_amount("1.2,3,4"), None);
    }

    #[test]
    fn test_locale_round_trip() {
        // The same value printed in either locale style parses back exactly.
        for (us, eu, expected) in [
            ("1,234.56", "1.234,56", "1234.56"),
            ("1,234,567.89", "1.234.567,89", "1234567.89"),
            ("0.50", "0,50", "0.50"),
            ("12.00", "12,00", "12.00"),
        ] {
            assert_eq!(parse_amount(us), Some(dec(expected)), "us-style {us}");
            assert_eq!(parse_amount(eu), Some(dec(expected)), "eu-style {eu}");
        }
    }
}
