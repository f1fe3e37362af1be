//! Display currency identifiers.
//!
//! The back office renders every amount in one of a fixed set of currencies.
//! The set is closed: codes outside it are rejected at parse time.

use serde::{Deserialize, Serialize};

/// Currency codes the dashboard can display amounts in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    /// Euro
    #[default]
    Eur,
    /// US Dollar
    Usd,
    /// Pound Sterling
    Gbp,
    /// Japanese Yen
    Jpy,
    /// Chinese Yuan Renminbi
    Cny,
}

impl CurrencyCode {
    /// All supported codes, in preset table order.
    pub const ALL: [Self; 5] = [Self::Eur, Self::Usd, Self::Gbp, Self::Jpy, Self::Cny];

    /// Returns the three-letter code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Cny => "CNY",
        }
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse for operator-facing input. Stored and requested
/// preference codes are matched exactly by the core preset lookup instead.
impl std::str::FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EUR" => Ok(Self::Eur),
            "USD" => Ok(Self::Usd),
            "GBP" => Ok(Self::Gbp),
            "JPY" => Ok(Self::Jpy),
            "CNY" => Ok(Self::Cny),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    /// `€100`
    Before,
    /// `100€`
    After,
}
