//! Display currency: presets, formatting, and the preference store.

pub mod format;
pub mod preference;
pub mod preset;
pub mod provider;
pub mod store;

#[cfg(test)]
mod props;

pub use format::{FormatError, format_amount, format_decimal};
pub use preference::{
    CURRENCY_PREFERENCE_KEY, CurrencyPreference, InMemoryPreferenceRepository, PreferenceError,
    PreferenceRepository,
};
pub use preset::{CurrencySettings, lookup, preset, presets};
pub use provider::{CurrencyError, CurrencyProvider};
pub use store::{CurrencySnapshot, CurrencyStore};
