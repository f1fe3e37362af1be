//! Fixed display-currency presets.
//!
//! Every amount in the back office is rendered with one of these five
//! presets. They are static data: switching currency swaps the preset, it
//! never edits one.

use serde::Serialize;
use fransuite_shared::types::{CurrencyCode, SymbolPosition};

/// Rendering rules for one display currency.
///
/// Instances only exist inside the preset table, so consumers always hold a
/// `&'static CurrencySettings` and cannot build or alter one.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct CurrencySettings {
    code: CurrencyCode,
    symbol: &'static str,
    position: SymbolPosition,
    decimal_places: u32,
    thousands_separator: char,
    decimal_separator: char,
}

impl CurrencySettings {
    /// Currency identifier.
    #[must_use]
    pub const fn code(&self) -> CurrencyCode {
        self.code
    }

    /// Glyph rendered next to the amount.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Symbol placement relative to the number.
    #[must_use]
    pub const fn position(&self) -> SymbolPosition {
        self.position
    }

    /// Digits after the decimal separator.
    #[must_use]
    pub const fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Separator inserted between groups of three integer digits.
    #[must_use]
    pub const fn thousands_separator(&self) -> char {
        self.thousands_separator
    }

    /// Separator between the integer and fractional parts.
    #[must_use]
    pub const fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    #[cfg(test)]
    pub(crate) const fn new(
        code: CurrencyCode,
        symbol: &'static str,
        position: SymbolPosition,
        decimal_places: u32,
        thousands_separator: char,
        decimal_separator: char,
    ) -> Self {
        Self {
            code,
            symbol,
            position,
            decimal_places,
            thousands_separator,
            decimal_separator,
        }
    }
}

static PRESETS: [CurrencySettings; 5] = [
    CurrencySettings {
        code: CurrencyCode::Eur,
        symbol: "€",
        position: SymbolPosition::Before,
        decimal_places: 0,
        thousands_separator: '.',
        decimal_separator: ',',
    },
    CurrencySettings {
        code: CurrencyCode::Usd,
        symbol: "$",
        position: SymbolPosition::Before,
        decimal_places: 2,
        thousands_separator: ',',
        decimal_separator: '.',
    },
    CurrencySettings {
        code: CurrencyCode::Gbp,
        symbol: "£",
        position: SymbolPosition::Before,
        decimal_places: 2,
        thousands_separator: ',',
        decimal_separator: '.',
    },
    CurrencySettings {
        code: CurrencyCode::Jpy,
        symbol: "¥",
        position: SymbolPosition::Before,
        decimal_places: 0,
        thousands_separator: ',',
        decimal_separator: '.',
    },
    CurrencySettings {
        code: CurrencyCode::Cny,
        symbol: "¥",
        position: SymbolPosition::Before,
        decimal_places: 2,
        thousands_separator: ',',
        decimal_separator: '.',
    },
];

/// Returns the preset for a currency code.
#[must_use]
pub fn preset(code: CurrencyCode) -> &'static CurrencySettings {
    match code {
        CurrencyCode::Eur => &PRESETS[0],
        CurrencyCode::Usd => &PRESETS[1],
        CurrencyCode::Gbp => &PRESETS[2],
        CurrencyCode::Jpy => &PRESETS[3],
        CurrencyCode::Cny => &PRESETS[4],
    }
}

/// All presets, in the order EUR, USD, GBP, JPY, CNY.
#[must_use]
pub fn presets() -> &'static [CurrencySettings] {
    &PRESETS
}

/// Looks up a preset by its textual code.
///
/// The match is exact: `"usd"` is not `"USD"`. Returns `None` for anything
/// outside the preset table.
#[must_use]
pub fn lookup(code: &str) -> Option<&'static CurrencySettings> {
    CurrencyCode::ALL
        .into_iter()
        .find(|c| c.as_str() == code)
        .map(preset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_table_matches_codes() {
        for code in CurrencyCode::ALL {
            assert_eq!(preset(code).code(), code);
        }
        let codes: Vec<_> = presets().iter().map(CurrencySettings::code).collect();
        assert_eq!(codes, CurrencyCode::ALL);
    }

    #[test]
    fn test_euro_preset() {
        let eur = preset(CurrencyCode::Eur);
        assert_eq!(eur.symbol(), "€");
        assert_eq!(eur.position(), SymbolPosition::Before);
        assert_eq!(eur.decimal_places(), 0);
        assert_eq!(eur.thousands_separator(), '.');
        assert_eq!(eur.decimal_separator(), ',');
    }

    #[test]
    fn test_usd_preset() {
        let usd = preset(CurrencyCode::Usd);
        assert_eq!(usd.symbol(), "$");
        assert_eq!(usd.decimal_places(), 2);
        assert_eq!(usd.thousands_separator(), ',');
        assert_eq!(usd.decimal_separator(), '.');
    }

    #[test]
    fn test_lookup() {
        assert!(std::ptr::eq(lookup("GBP").unwrap(), preset(CurrencyCode::Gbp)));
        assert!(lookup("XYZ").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(lookup("usd").is_none());
        assert!(lookup("Gbp").is_none());
        assert!(lookup(" EUR").is_none());
    }

    #[test]
    fn test_serializes_snake_case_fields() {
        let json = serde_json::to_value(preset(CurrencyCode::Jpy)).unwrap();
        assert_eq!(json["code"], "JPY");
        assert_eq!(json["symbol"], "¥");
        assert_eq!(json["position"], "before");
        assert_eq!(json["decimal_places"], 0);
        assert_eq!(json["thousands_separator"], ",");
    }
}
