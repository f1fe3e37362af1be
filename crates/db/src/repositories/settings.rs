//! Settings repository for key/value preference storage.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set, sea_query::OnConflict};
use serde_json::Value;
use tracing::debug;

use fransuite_core::currency::{PreferenceError, PreferenceRepository};

use crate::entities::settings;

/// Settings repository backed by the `settings` table.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    db: Arc<DatabaseConnection>,
}

impl SettingsRepository {
    /// Creates a new settings repository.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Arc::new(db) }
    }

    /// Finds a setting by key.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_key(&self, key: &str) -> Result<Option<settings::Model>, DbErr> {
        settings::Entity::find_by_id(key.to_owned()).one(self.db.as_ref()).await
    }

    /// Inserts a setting or replaces the value of an existing one.
    ///
    /// # Errors
    ///
    /// Returns an error if the database write fails.
    pub async fn upsert(&self, key: &str, value: Value) -> Result<(), DbErr> {
        let setting = settings::ActiveModel {
            id: Set(key.to_owned()),
            value: Set(value),
            updated_at: Set(chrono::Utc::now().into()),
        };

        let rows = settings::Entity::insert(setting)
            .on_conflict(
                OnConflict::column(settings::Column::Id)
                    .update_columns([settings::Column::Value, settings::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(self.db.as_ref())
            .await?;
        debug!(key = %key, rows, "Upserted setting");

        Ok(())
    }

    /// Deletes a setting by key. Returns true if a row was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, key: &str) -> Result<bool, DbErr> {
        let result = settings::Entity::delete_by_id(key.to_owned())
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl PreferenceRepository for SettingsRepository {
    async fn find(&self, key: &str) -> Result<Option<Value>, PreferenceError> {
        self.find_by_key(key)
            .await
            .map(|setting| setting.map(|s| s.value))
            .map_err(|e| PreferenceError::Storage(e.to_string()))
    }

    async fn upsert(&self, key: &str, value: Value) -> Result<(), PreferenceError> {
        Self::upsert(self, key, value)
            .await
            .map_err(|e| PreferenceError::Storage(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;

    use fransuite_core::currency::CURRENCY_PREFERENCE_KEY;

    fn setting(code: &str) -> settings::Model {
        settings::Model {
            id: CURRENCY_PREFERENCE_KEY.to_string(),
            value: json!({ "code": code }),
            updated_at: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_returns_stored_value() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![setting("GBP")]])
            .into_connection();
        let repo = SettingsRepository::new(db);

        let value = PreferenceRepository::find(&repo, CURRENCY_PREFERENCE_KEY)
            .await
            .unwrap();
        assert_eq!(value, Some(json!({ "code": "GBP" })));
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<settings::Model>::new()])
            .into_connection();
        let repo = SettingsRepository::new(db);

        let value = PreferenceRepository::find(&repo, CURRENCY_PREFERENCE_KEY)
            .await
            .unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn test_find_maps_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".into())])
            .into_connection();
        let repo = SettingsRepository::new(db);

        let err = PreferenceRepository::find(&repo, CURRENCY_PREFERENCE_KEY)
            .await
            .unwrap_err();
        assert!(matches!(err, PreferenceError::Storage(msg) if msg.contains("connection refused")));
    }

    #[tokio::test]
    async fn test_upsert_executes_single_statement() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let repo = SettingsRepository::new(db);

        PreferenceRepository::upsert(&repo, CURRENCY_PREFERENCE_KEY, json!({ "code": "USD" }))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_upsert_maps_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("read-only transaction".into())])
            .into_connection();
        let repo = SettingsRepository::new(db);

        let result =
            PreferenceRepository::upsert(&repo, CURRENCY_PREFERENCE_KEY, json!({ "code": "USD" }))
                .await;
        assert!(matches!(result, Err(PreferenceError::Storage(_))));
    }
}
