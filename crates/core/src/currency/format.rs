//! Money formatting for display.
//!
//! Amounts are converted to `Decimal` before rounding so no float arithmetic
//! touches the value. Formatting never fails from the caller's point of view:
//! inputs that cannot be represented fall back to a plain two-decimal render.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use thiserror::Error;
use tracing::debug;

use fransuite_shared::types::SymbolPosition;

use super::preset::CurrencySettings;

/// Why an amount could not be formatted with the preset rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// NaN or infinity.
    #[error("Amount is not a finite number")]
    NonFinite,

    /// Finite, but too large for `Decimal`.
    #[error("Amount {0} is outside the supported range")]
    OutOfRange(String),
}

/// Formats an amount with the given preset.
///
/// Falls back to [`fallback_format`] when the amount cannot be converted.
#[must_use]
pub fn format_amount(settings: &CurrencySettings, amount: f64) -> String {
    match try_format_amount(settings, amount) {
        Ok(formatted) => formatted,
        Err(e) => {
            debug!(error = %e, code = %settings.code(), "Using fallback currency format");
            fallback_format(settings, amount)
        }
    }
}

/// Formats an amount with the given preset, reporting conversion failures.
pub fn try_format_amount(settings: &CurrencySettings, amount: f64) -> Result<String, FormatError> {
    if !amount.is_finite() {
        return Err(FormatError::NonFinite);
    }
    let value = Decimal::from_f64(amount).ok_or_else(|| FormatError::OutOfRange(amount.to_string()))?;
    Ok(format_decimal(settings, value))
}

/// Formats a decimal amount with the given preset.
///
/// Rounds half away from zero to the preset's decimal places, groups the
/// integer digits in threes and attaches the symbol without a space. A
/// minus sign sits directly in front of the first digit; values that round
/// to zero carry no sign.
#[must_use]
pub fn format_decimal(settings: &CurrencySettings, amount: Decimal) -> String {
    let places = settings.decimal_places();
    let rounded = amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = format!("{:.*}", places as usize, rounded.abs());
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let mut number = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if negative {
        number.push('-');
    }
    number.push_str(&group_thousands(integer, settings.thousands_separator()));
    if places > 0 {
        number.push(settings.decimal_separator());
        number.push_str(fraction);
    }

    attach_symbol(settings, &number)
}

/// Plain render used when the preset rules cannot be applied.
///
/// Symbol, then the amount with two decimals and `.` as separator, no
/// grouping.
#[must_use]
pub fn fallback_format(settings: &CurrencySettings, amount: f64) -> String {
    format!("{}{amount:.2}", settings.symbol())
}

fn attach_symbol(settings: &CurrencySettings, number: &str) -> String {
    match settings.position() {
        SymbolPosition::Before => format!("{}{number}", settings.symbol()),
        SymbolPosition::After => format!("{number}{}", settings.symbol()),
    }
}

/// Inserts `separator` every three digits counting from the right.
fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}
