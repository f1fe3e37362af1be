//! Process-wide display currency.
//!
//! `CurrencyStore` owns the single active preset. It is loaded once from the
//! preference repository, replaced on explicit updates, and read by every
//! consumer that formats money.
//!
//! Consistency model: updates are applied locally first and persisted
//! afterwards. A failed write is logged but not rolled back, so the stored
//! preference may lag the in-memory one until the next successful write or
//! reload. When updates race, the local cell follows call order while the
//! stored row follows write-completion order.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use rust_decimal::Decimal;
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use fransuite_shared::types::CurrencyCode;

use super::format::{format_amount, format_decimal};
use super::preference::{
    CURRENCY_PREFERENCE_KEY, CurrencyPreference, PreferenceError, PreferenceRepository,
};
use super::preset::{self, CurrencySettings};

/// What consumers observe: the active preset and whether the initial load
/// is still in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencySnapshot {
    /// Active preset.
    pub settings: &'static CurrencySettings,
    /// True until the first preference load finishes.
    pub loading: bool,
}

/// Result of one preference load, consumed by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LoadOutcome {
    Applied(CurrencyCode),
    Missing,
    Unrecognized(String),
    Superseded(CurrencyCode),
    Failed(PreferenceError),
}

/// Owner of the active display currency.
pub struct CurrencyStore {
    repository: Arc<dyn PreferenceRepository>,
    state: watch::Sender<CurrencySnapshot>,
    /// Bumped on every explicit update; lets a slow load detect it was overtaken.
    updates: AtomicU64,
}

impl std::fmt::Debug for CurrencyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrencyStore")
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

impl CurrencyStore {
    /// Creates a store showing EUR until the preference is loaded.
    #[must_use]
    pub fn new(repository: Arc<dyn PreferenceRepository>) -> Self {
        Self::with_default(repository, CurrencyCode::default())
    }

    /// Creates a store showing `code` until the preference is loaded.
    #[must_use]
    pub fn with_default(repository: Arc<dyn PreferenceRepository>, code: CurrencyCode) -> Self {
        let (state, _) = watch::channel(CurrencySnapshot {
            settings: preset::preset(code),
            loading: true,
        });
        Self {
            repository,
            state,
            updates: AtomicU64::new(0),
        }
    }

    /// Returns the active preset.
    #[must_use]
    pub fn active_settings(&self) -> &'static CurrencySettings {
        self.state.borrow().settings
    }

    /// True until the first call to [`Self::load_preference`] finishes.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Returns the active preset together with the loading flag.
    #[must_use]
    pub fn snapshot(&self) -> CurrencySnapshot {
        *self.state.borrow()
    }

    /// Subscribes to changes of the active preset and loading flag.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CurrencySnapshot> {
        self.state.subscribe()
    }

    /// Loads the stored preference and applies it when it names a known
    /// currency.
    ///
    /// Failures (unreachable store, missing record, malformed value, unknown
    /// code) are logged and leave the active preset untouched. A load that
    /// finishes after an explicit update started is discarded. Always clears
    /// the loading flag.
    pub async fn load_preference(&self) {
        match self.fetch_and_apply().await {
            LoadOutcome::Applied(code) => {
                info!(code = %code, "Loaded currency preference");
            }
            LoadOutcome::Missing => {
                debug!("No stored currency preference, keeping default");
            }
            LoadOutcome::Unrecognized(code) => {
                warn!(code = %code, "Stored currency preference is not a known currency");
            }
            LoadOutcome::Superseded(code) => {
                debug!(code = %code, "Discarding currency preference overtaken by an update");
            }
            LoadOutcome::Failed(e) => {
                warn!(error = %e, "Failed to load currency preference");
            }
        }
        self.state.send_if_modified(|state| {
            let was_loading = state.loading;
            state.loading = false;
            was_loading
        });
    }

    async fn fetch_and_apply(&self) -> LoadOutcome {
        let seen_updates = self.updates.load(Ordering::Acquire);

        let value = match self.repository.find(CURRENCY_PREFERENCE_KEY).await {
            Ok(Some(value)) => value,
            Ok(None) => return LoadOutcome::Missing,
            Err(e) => return LoadOutcome::Failed(e),
        };
        let stored = match CurrencyPreference::from_value(value) {
            Ok(stored) => stored,
            Err(e) => return LoadOutcome::Failed(e),
        };
        let Some(settings) = preset::lookup(&stored.code) else {
            return LoadOutcome::Unrecognized(stored.code);
        };

        let mut applied = false;
        self.state.send_if_modified(|state| {
            if self.updates.load(Ordering::Acquire) != seen_updates {
                return false;
            }
            applied = true;
            if std::ptr::eq(state.settings, settings) {
                return false;
            }
            state.settings = settings;
            true
        });

        if applied {
            LoadOutcome::Applied(settings.code())
        } else {
            LoadOutcome::Superseded(settings.code())
        }
    }

    /// Switches the display currency.
    ///
    /// Unknown codes are ignored and return `false`. Known codes take effect
    /// immediately and are then persisted; a failed write is logged and not
    /// rolled back. Returns `true` when the code was applied.
    pub async fn update_currency(&self, code: &str) -> bool {
        let Some(settings) = preset::lookup(code) else {
            debug!(code = %code, "Ignoring update to unknown currency");
            return false;
        };

        self.state.send_modify(|state| {
            self.updates.fetch_add(1, Ordering::AcqRel);
            state.settings = settings;
        });
        info!(code = %settings.code(), "Display currency updated");

        let record = CurrencyPreference::new(settings.code());
        if let Err(e) = self
            .repository
            .upsert(CURRENCY_PREFERENCE_KEY, record.to_value())
            .await
        {
            error!(error = %e, code = %settings.code(), "Failed to persist currency preference");
        }
        true
    }

    /// Formats an amount with the active preset.
    #[must_use]
    pub fn format_currency(&self, amount: f64) -> String {
        format_amount(self.active_settings(), amount)
    }

    /// Formats a decimal amount with the active preset.
    #[must_use]
    pub fn format_decimal(&self, amount: Decimal) -> String {
        format_decimal(self.active_settings(), amount)
    }
}
