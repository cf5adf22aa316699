//! Product repository for database operations.
//!
//! Catalog reads only ever see active products; deletion flips `is_active`
//! and never removes the row.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use granja_core::{Brl, Classification, ProductId, ProductType};

use super::RepositoryError;
use crate::models::{Product, ProductDraft};

/// Columns selected for every product read, in `ProductRow` order.
const PRODUCT_COLUMNS: &str = "id, name, description, price, image, product_type, \
     classification, quantity, is_active, created_at, updated_at";

/// Raw `products` row, converted to [`Product`] before leaving this module.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    description: String,
    price: Decimal,
    image: Option<String>,
    product_type: String,
    classification: Option<String>,
    quantity: i32,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let product_type = ProductType::parse(&row.product_type).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid product type in database: {e}"))
        })?;

        let classification = row
            .classification
            .as_deref()
            .map(Classification::parse)
            .transpose()
            .map_err(|e| {
                RepositoryError::DataCorruption(format!("invalid classification in database: {e}"))
            })?;

        Ok(Self {
            id: ProductId::new(row.id),
            name: row.name,
            description: row.description,
            price: Brl::new(row.price),
            image: row.image,
            product_type,
            classification,
            quantity: row.quantity,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All active products, ordered by creation time ascending.
    ///
    /// This is the single read both the public catalog and the admin grid
    /// render from; inactive products never leave the database.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::DataCorruption` if a stored value is invalid.
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE is_active = TRUE ORDER BY created_at ASC"
        );
        let rows: Vec<ProductRow> = sqlx::query_as(&sql).fetch_all(self.pool).await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    /// Get a product by its ID, active or not.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::DataCorruption` if a stored value is invalid.
    #[instrument(skip(self))]
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        let row: Option<ProductRow> = sqlx::query_as(&sql)
            .bind(id.as_uuid())
            .fetch_optional(self.pool)
            .await?;

        row.map(Product::try_from).transpose()
    }

    /// Insert a new product. The database assigns the ID and timestamps.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create(&self, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        let sql = format!(
            "INSERT INTO products \
                 (name, description, price, image, product_type, classification, quantity, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {PRODUCT_COLUMNS}"
        );
        let row: ProductRow = sqlx::query_as(&sql)
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(draft.price.amount())
            .bind(draft.image.as_deref())
            .bind(draft.product_type.as_str())
            .bind(draft.classification.map(|c| c.as_str()))
            .bind(draft.quantity)
            .bind(draft.is_active)
            .fetch_one(self.pool)
            .await?;

        row.try_into()
    }

    /// Overwrite the writable fields of an existing product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has this ID, or
    /// `RepositoryError::Database` if the update fails.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE products \
             SET name = $1, description = $2, price = $3, image = $4, product_type = $5, \
                 classification = $6, quantity = $7, is_active = $8, updated_at = NOW() \
             WHERE id = $9",
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.price.amount())
        .bind(draft.image.as_deref())
        .bind(draft.product_type.as_str())
        .bind(draft.classification.map(|c| c.as_str()))
        .bind(draft.quantity)
        .bind(draft.is_active)
        .bind(id.as_uuid())
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Soft-delete a product by clearing its active flag.
    ///
    /// The row is kept and stays fetchable by ID; it just stops appearing in
    /// `list_active`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has this ID, or
    /// `RepositoryError::Database` if the update fails.
    #[instrument(skip(self))]
    pub async fn soft_delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result =
            sqlx::query("UPDATE products SET is_active = FALSE, updated_at = NOW() WHERE id = $1")
                .bind(id.as_uuid())
                .execute(self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(product_type: &str, classification: Option<&str>) -> ProductRow {
        ProductRow {
            id: Uuid::nil(),
            name: "Palhão 30 ovos".to_owned(),
            description: "Ovos brancos".to_owned(),
            price: Decimal::new(2890, 2),
            image: None,
            product_type: product_type.to_owned(),
            classification: classification.map(str::to_owned),
            quantity: 1,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_conversion() {
        let product = Product::try_from(row("palhao", Some("XL"))).expect("valid row");
        assert_eq!(product.product_type, ProductType::Palhao);
        assert_eq!(product.classification, Some(Classification::XL));
        assert_eq!(product.price.to_string(), "R$ 28,90");
    }

    #[test]
    fn test_row_conversion_without_classification() {
        let product = Product::try_from(row("codorna", None)).expect("valid row");
        assert_eq!(product.classification, None);
    }

    #[test]
    fn test_row_conversion_rejects_unknown_type() {
        let err = Product::try_from(row("granel", None)).expect_err("invalid type");
        assert!(matches!(err, RepositoryError::DataCorruption(_)));
    }

    #[test]
    fn test_row_conversion_rejects_unknown_classification() {
        let err = Product::try_from(row("estojo", Some("GG"))).expect_err("invalid grade");
        assert!(matches!(err, RepositoryError::DataCorruption(_)));
    }
}
