//! Handle through which consumers reach the currency store.
//!
//! The provider is created empty and filled once at startup. Reaching for the
//! store before that is a wiring bug and fails loudly with
//! [`CurrencyError::NotInitialized`].

use std::sync::Arc;

use once_cell::sync::OnceCell;
use thiserror::Error;

use super::store::CurrencyStore;

/// Misuse of the currency provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// The store was requested before one was provided.
    #[error("Currency store is not initialized")]
    NotInitialized,

    /// A store was provided twice.
    #[error("Currency store is already initialized")]
    AlreadyInitialized,
}

/// Cloneable slot holding the process's [`CurrencyStore`].
#[derive(Debug, Clone, Default)]
pub struct CurrencyProvider {
    slot: Arc<OnceCell<Arc<CurrencyStore>>>,
}

impl CurrencyProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider already holding `store`.
    #[must_use]
    pub fn with_store(store: Arc<CurrencyStore>) -> Self {
        Self {
            slot: Arc::new(OnceCell::with_value(store)),
        }
    }

    /// Installs the store. Every clone of this provider sees it.
    pub fn provide(&self, store: Arc<CurrencyStore>) -> Result<(), CurrencyError> {
        self.slot
            .set(store)
            .map_err(|_| CurrencyError::AlreadyInitialized)
    }

    /// Returns the installed store.
    pub fn store(&self) -> Result<&Arc<CurrencyStore>, CurrencyError> {
        self.slot.get().ok_or(CurrencyError::NotInitialized)
    }

    /// True once a store has been provided.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::preference::InMemoryPreferenceRepository;

    fn new_store() -> Arc<CurrencyStore> {
        Arc::new(CurrencyStore::new(Arc::new(InMemoryPreferenceRepository::new())))
    }

    #[test]
    fn test_empty_provider_fails_fast() {
        let provider = CurrencyProvider::new();
        assert!(!provider.is_initialized());
        assert_eq!(provider.store().unwrap_err(), CurrencyError::NotInitialized);
    }

    #[test]
    fn test_provide_is_visible_to_clones() {
        let provider = CurrencyProvider::new();
        let consumer = provider.clone();
        let store = new_store();

        provider.provide(store.clone()).unwrap();
        assert!(Arc::ptr_eq(consumer.store().unwrap(), &store));
    }

    #[test]
    fn test_provide_twice_is_rejected() {
        let provider = CurrencyProvider::with_store(new_store());
        assert_eq!(
            provider.provide(new_store()),
            Err(CurrencyError::AlreadyInitialized)
        );
    }

    #[test]
    fn test_independent_providers_do_not_share_state() {
        let a = CurrencyProvider::with_store(new_store());
        let b = CurrencyProvider::new();
        assert!(a.is_initialized());
        assert!(!b.is_initialized());
    }
}
