//! Property-based tests for currency formatting.

use std::str::FromStr;

use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use fransuite_shared::types::{CurrencyCode, SymbolPosition};

use super::format::{format_amount, format_decimal};
use super::preset::{CurrencySettings, preset};

/// Strategy to generate signed amounts (-10,000,000.0000 to 10,000,000.0000).
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000_000i64..100_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn currency() -> impl Strategy<Value = CurrencyCode> {
    prop::sample::select(CurrencyCode::ALL.to_vec())
}

/// Strips the symbol and separators, leaving a plain decimal literal.
fn unformat(settings: &CurrencySettings, formatted: &str) -> String {
    let number = match settings.position() {
        SymbolPosition::Before => formatted.strip_prefix(settings.symbol()),
        SymbolPosition::After => formatted.strip_suffix(settings.symbol()),
    }
    .expect("symbol present");
    number
        .chars()
        .filter(|c| *c != settings.thousands_separator())
        .map(|c| if c == settings.decimal_separator() { '.' } else { c })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Formatting the same amount twice gives the same text.
    #[test]
    fn prop_format_is_deterministic(value in amount(), code in currency()) {
        let settings = preset(code);
        prop_assert_eq!(format_decimal(settings, value), format_decimal(settings, value));
    }

    /// Removing symbol and separators gives back the rounded amount.
    #[test]
    fn prop_format_preserves_rounded_value(value in amount(), code in currency()) {
        let settings = preset(code);
        let formatted = format_decimal(settings, value);
        let parsed = Decimal::from_str(&unformat(settings, &formatted)).unwrap();
        let expected = value.round_dp_with_strategy(
            settings.decimal_places(),
            RoundingStrategy::MidpointAwayFromZero,
        );
        prop_assert_eq!(parsed, expected, "{} formatted as {}", value, formatted);
    }

    /// Integer digits come in groups of three after a leading group of one to three.
    #[test]
    fn prop_thousands_groups_have_three_digits(value in amount(), code in currency()) {
        let settings = preset(code);
        let formatted = format_decimal(settings, value);
        let number = formatted.strip_prefix(settings.symbol()).unwrap();
        let integer = number
            .trim_start_matches('-')
            .split(settings.decimal_separator())
            .next()
            .unwrap();
        let groups: Vec<&str> = integer.split(settings.thousands_separator()).collect();

        prop_assert!((1..=3).contains(&groups[0].len()));
        prop_assert!(groups[1..].iter().all(|g| g.len() == 3));
        prop_assert!(!groups[0].starts_with('0') || integer == "0");
    }

    /// Fractional part always has exactly the preset's number of digits.
    #[test]
    fn prop_fraction_width_matches_preset(value in amount(), code in currency()) {
        let settings = preset(code);
        let formatted = format_decimal(settings, value);
        let fraction = formatted.rsplit_once(settings.decimal_separator()).map(|(_, f)| f);
        match settings.decimal_places() {
            0 => prop_assert!(fraction.is_none()),
            places => prop_assert_eq!(fraction.map(str::len), Some(places as usize)),
        }
    }

    /// Any f64, including NaN and infinities, formats without panicking.
    #[test]
    fn prop_any_float_formats(value in any::<f64>(), code in currency()) {
        let settings = preset(code);
        let formatted = format_amount(settings, value);
        prop_assert!(formatted.starts_with(settings.symbol()));
    }
}
