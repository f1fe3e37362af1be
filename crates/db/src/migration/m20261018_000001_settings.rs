//! Settings migration.
//!
//! Creates the generic key/value `settings` table that holds user
//! preferences such as the display currency.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(SETTINGS_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP TABLE IF EXISTS settings CASCADE;")
            .await?;
        Ok(())
    }
}

const SETTINGS_SQL: &str = r"
-- One row per preference key, value replaced wholesale on write
CREATE TABLE settings (
    id TEXT PRIMARY KEY,
    value JSONB NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_settings_id_not_blank CHECK (length(trim(id)) > 0)
);
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_key_is_unbounded_text() {
        assert!(SETTINGS_SQL.contains("id TEXT PRIMARY KEY"));
        assert!(SETTINGS_SQL.contains("value JSONB NOT NULL"));
    }
}
