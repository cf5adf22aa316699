//! Store settings repository.
//!
//! The `store_settings` table holds at most one row. Reads return
//! `Ok(None)` when the row does not exist yet; that is a normal state, not an
//! error. Writes commit a single column at a time (the admin form submits
//! fields individually) and either update the existing row or insert the
//! first one.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use granja_core::SettingsId;

use super::RepositoryError;
use crate::models::{SettingsUpdate, StoreSettings};

/// Columns selected for every settings read, in `SettingsRow` order.
const SETTINGS_COLUMNS: &str = "id, store_name, phone, whatsapp, address, hours, \
     banner_active, banner_text, created_at, updated_at";

/// Raw `store_settings` row.
#[derive(Debug, sqlx::FromRow)]
struct SettingsRow {
    id: Uuid,
    store_name: String,
    phone: String,
    whatsapp: String,
    address: String,
    hours: String,
    banner_active: bool,
    banner_text: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SettingsRow> for StoreSettings {
    fn from(row: SettingsRow) -> Self {
        Self {
            id: SettingsId::new(row.id),
            store_name: row.store_name,
            phone: row.phone,
            whatsapp: row.whatsapp,
            address: row.address,
            hours: row.hours,
            banner_active: row.banner_active,
            banner_text: row.banner_text,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Repository for store settings database operations.
pub struct SettingsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SettingsRepository<'a> {
    /// Create a new settings repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// The settings row, if one exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails. A missing row
    /// is `Ok(None)`.
    #[instrument(skip(self))]
    pub async fn get(&self) -> Result<Option<StoreSettings>, RepositoryError> {
        let sql =
            format!("SELECT {SETTINGS_COLUMNS} FROM store_settings ORDER BY created_at LIMIT 1");
        let row: Option<SettingsRow> = sqlx::query_as(&sql).fetch_optional(self.pool).await?;

        Ok(row.map(StoreSettings::from))
    }

    /// Commit one field to an existing settings row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the row does not exist, or
    /// `RepositoryError::Database` if the update fails.
    #[instrument(skip(self), fields(column = update.column()))]
    pub async fn update_field(
        &self,
        id: SettingsId,
        update: &SettingsUpdate,
    ) -> Result<(), RepositoryError> {
        // The column name comes from a const match, never from user input.
        let sql = format!(
            "UPDATE store_settings SET {} = $1, updated_at = NOW() WHERE id = $2",
            update.column()
        );
        let query = sqlx::query(&sql);
        let query = match update {
            SettingsUpdate::BannerActive(value) => query.bind(*value),
            SettingsUpdate::StoreName(value)
            | SettingsUpdate::Phone(value)
            | SettingsUpdate::Whatsapp(value)
            | SettingsUpdate::Address(value)
            | SettingsUpdate::Hours(value)
            | SettingsUpdate::BannerText(value) => query.bind(value.as_str()),
        };

        let result = query.bind(id.as_uuid()).execute(self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Insert the first settings row, carrying just the submitted field.
    ///
    /// The remaining columns take their DDL defaults, which match the values
    /// the views render when no row exists at all.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    #[instrument(skip(self), fields(column = update.column()))]
    pub async fn insert_with_field(
        &self,
        update: &SettingsUpdate,
    ) -> Result<SettingsId, RepositoryError> {
        let sql = format!(
            "INSERT INTO store_settings ({}) VALUES ($1) RETURNING id",
            update.column()
        );
        let query = sqlx::query_as::<_, (Uuid,)>(&sql);
        let query = match update {
            SettingsUpdate::BannerActive(value) => query.bind(*value),
            SettingsUpdate::StoreName(value)
            | SettingsUpdate::Phone(value)
            | SettingsUpdate::Whatsapp(value)
            | SettingsUpdate::Address(value)
            | SettingsUpdate::Hours(value)
            | SettingsUpdate::BannerText(value) => query.bind(value.as_str()),
        };

        let (id,) = query.fetch_one(self.pool).await?;

        Ok(SettingsId::new(id))
    }

    /// Commit one field, updating the existing row or inserting the first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if either statement fails.
    #[instrument(skip(self), fields(column = update.column()))]
    pub async fn upsert_field(&self, update: &SettingsUpdate) -> Result<(), RepositoryError> {
        match self.get().await? {
            Some(settings) => self.update_field(settings.id, update).await,
            None => self.insert_with_field(update).await.map(|_| ()),
        }
    }
}
