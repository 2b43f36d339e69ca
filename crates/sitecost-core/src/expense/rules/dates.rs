//! Calendar date normalization.
//!
//! Receipt dates show up as `12/15/2025`, `15.12.2025`, `2025-12-15`, or
//! `Dec 15, 2025` depending on the vendor's printing system. `parse_date`
//! resolves component order and yields a validated [`NaiveDate`] (whose
//! Display and serde form is ISO `YYYY-MM-DD`), or nothing. Out-of-range
//! components are rejected, never clamped to the nearest valid date.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Component separators: `/`, `-`, `.`, plus whitespace and comma so
    /// month-name forms like `Dec 15, 2025` tokenize into three components.
    static ref COMPONENT_SEPARATOR: Regex = Regex::new(r"[./\-\s,]+").unwrap();
}

/// One date component: a number (with its printed digit count) or a named
/// month.
#[derive(Debug, Clone, Copy)]
enum Component {
    Number { value: u32, digits: usize },
    Month(u32),
}

/// Parse a raw date string into a canonical calendar date.
///
/// Disambiguation policy:
/// - a 4-digit component is the year regardless of position; two 4-digit
///   components are contradictory and unparseable;
/// - with no 4-digit component, the last numeric component is the year,
///   expanded by a fixed pivot (00-69 -> 2000-2069, 70-99 -> 1970-1999);
/// - a named month fixes the month; the remaining number is the day;
/// - all-numeric: if exactly one non-year component exceeds 12 it must be
///   the day; otherwise month-first ordering is assumed;
/// - the final (year, month, day) must exist on the calendar.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let tokens: Vec<&str> = COMPONENT_SEPARATOR
        .split(raw.trim())
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.len() != 3 {
        return None;
    }

    let mut components = Vec::with_capacity(3);
    for token in tokens {
        components.push(classify(token)?);
    }

    let four_digit: Vec<usize> = components
        .iter()
        .enumerate()
        .filter(|(_, c)| matches!(c, Component::Number { digits: 4, .. }))
        .map(|(i, _)| i)
        .collect();

    let year_index = match four_digit.len() {
        1 => four_digit[0],
        0 => components
            .iter()
            .rposition(|c| matches!(c, Component::Number { .. }))?,
        _ => return None,
    };

    let year = match components[year_index] {
        Component::Number { value, digits: 4 } => value as i32,
        Component::Number { value, .. } => expand_two_digit_year(value),
        Component::Month(_) => return None,
    };

    let rest: Vec<Component> = components
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != year_index)
        .map(|(_, c)| *c)
        .collect();

    let (month, day) = match (rest[0], rest[1]) {
        (Component::Month(month), Component::Number { value: day, .. })
        | (Component::Number { value: day, .. }, Component::Month(month)) => (month, day),
        (
            Component::Number { value: first, .. },
            Component::Number { value: second, .. },
        ) => {
            if first > 12 && second <= 12 {
                // Only one reading is possible: the larger component is the day.
                (second, first)
            } else {
                (first, second)
            }
        }
        (Component::Month(_), Component::Month(_)) => return None,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

fn classify(token: &str) -> Option<Component> {
    if token.chars().all(|c| c.is_ascii_digit()) {
        // 3-digit and 5+-digit numbers fit no date component.
        let digits = token.len();
        if digits == 3 || digits > 4 {
            return None;
        }
        Some(Component::Number {
            value: token.parse().ok()?,
            digits,
        })
    } else {
        month_to_number(token).map(Component::Month)
    }
}

fn expand_two_digit_year(value: u32) -> i32 {
    if value < 70 {
        2000 + value as i32
    } else {
        1900 + value as i32
    }
}

fn month_to_number(token: &str) -> Option<u32> {
    match token.to_ascii_lowercase().as_str() {
        "jan" | "january" => Some(1),
        "feb" | "february" => Some(2),
        "mar" | "march" => Some(3),
        "apr" | "april" => Some(4),
        "may" => Some(5),
        "jun" | "june" => Some(6),
        "jul" | "july" => Some(7),
        "aug" | "august" => Some(8),
        "sep" | "sept" | "september" => Some(9),
        "oct" | "october" => Some(10),
        "nov" | "november" => Some(11),
        "dec" | "december" => Some(12),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_first_forced_by_large_component() {
        assert_eq!(parse_date("15.12.2025"), Some(ymd(2025, 12, 15)));
        assert_eq!(parse_date("31-01-2026"), Some(ymd(2026, 1, 31)));
    }

    #[test]
    fn test_month_first_default() {
        assert_eq!(parse_date("12/15/2025"), Some(ymd(2025, 12, 15)));
        assert_eq!(parse_date("01/02/2025"), Some(ymd(2025, 1, 2)));
    }

    #[test]
    fn test_year_first() {
        assert_eq!(parse_date("2025-12-15"), Some(ymd(2025, 12, 15)));
        assert_eq!(parse_date("2025/1/2"), Some(ymd(2025, 1, 2)));
    }

    #[test]
    fn test_named_months() {
        assert_eq!(parse_date("Dec 15, 2025"), Some(ymd(2025, 12, 15)));
        assert_eq!(parse_date("15-Dec-2025"), Some(ymd(2025, 12, 15)));
        assert_eq!(parse_date("March 3, 2026"), Some(ymd(2026, 3, 3)));
        assert_eq!(parse_date("15-Dec-25"), Some(ymd(2025, 12, 15)));
    }

    #[test]
    fn test_two_digit_year_pivot() {
        assert_eq!(parse_date("01/01/70"), Some(ymd(1970, 1, 1)));
        assert_eq!(parse_date("12/31/69"), Some(ymd(2069, 12, 31)));
        assert_eq!(parse_date("15.12.99"), Some(ymd(1999, 12, 15)));
        assert_eq!(parse_date("1/2/00"), Some(ymd(2000, 1, 2)));
    }

    #[test]
    fn test_impossible_dates_rejected_not_clamped() {
        assert_eq!(parse_date("02/30/2025"), None);
        assert_eq!(parse_date("02/29/2025"), None); // not a leap year
        assert_eq!(parse_date("02/29/2024"), Some(ymd(2024, 2, 29)));
        assert_eq!(parse_date("13/13/2025"), None);
        assert_eq!(parse_date("00/10/2025"), None);
        assert_eq!(parse_date("10/00/2025"), None);
        assert_eq!(parse_date("45/45/2025"), None);
    }

    #[test]
    fn test_malformed_inputs() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("receipt"), None);
        assert_eq!(parse_date("12/2025"), None);
        assert_eq!(parse_date("1/2/3/4"), None);
        assert_eq!(parse_date("2025-2026-01"), None); // two year candidates
        assert_eq!(parse_date("Dec Jan 2025"), None);
        assert_eq!(parse_date("123/4/2025"), None);
    }

    #[test]
    fn test_iso_rendering() {
        let date = parse_date("12/15/2025").unwrap();
        assert_eq!(date.to_string(), "2025-12-15");
    }
}
