//! Product domain types.

use chrono::{DateTime, Utc};

use granja_core::{Brl, Classification, ProductId, ProductType};

/// A catalog product (domain type).
///
/// Identifiers and timestamps are assigned by the database; the application
/// never generates them.
#[derive(Debug, Clone)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Free-form description shown on the card.
    pub description: String,
    /// Price in reais.
    pub price: Brl,
    /// Image URL; `None` falls back to [`Product::DEFAULT_IMAGE_URL`].
    pub image: Option<String>,
    /// Packaging category.
    pub product_type: ProductType,
    /// Egg size grade, when applicable.
    pub classification: Option<Classification>,
    /// Quantity per package, in the unit of the packaging category.
    pub quantity: i32,
    /// Soft-delete flag; inactive products are never displayed.
    pub is_active: bool,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Stock photo rendered when a product has no image of its own.
    pub const DEFAULT_IMAGE_URL: &'static str =
        "https://images.pexels.com/photos/1556707/pexels-photo-1556707.jpeg?auto=compress&cs=tinysrgb&w=400";

    /// The image URL to render for this product.
    #[must_use]
    pub fn image_url(&self) -> &str {
        self.image
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(Self::DEFAULT_IMAGE_URL)
    }
}

/// The writable fields of a product, as submitted by the admin form.
///
/// Used for both create and update; the whole record is persisted either way
/// and the admin page re-fetches afterwards.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: Brl,
    pub image: Option<String>,
    pub product_type: ProductType,
    pub classification: Option<Classification>,
    pub quantity: i32,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(image: Option<&str>) -> Product {
        Product {
            id: ProductId::new(uuid::Uuid::nil()),
            name: "Estojo com 12 ovos".to_owned(),
            description: String::new(),
            price: Brl::new(rust_decimal::Decimal::new(1250, 2)),
            image: image.map(str::to_owned),
            product_type: ProductType::Estojo,
            classification: Some(Classification::G),
            quantity: 1,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_image_url_prefers_stored_url() {
        let p = product(Some("https://cdn.example.com/ovos.jpg"));
        assert_eq!(p.image_url(), "https://cdn.example.com/ovos.jpg");
    }

    #[test]
    fn test_image_url_falls_back_when_missing() {
        assert_eq!(product(None).image_url(), Product::DEFAULT_IMAGE_URL);
    }

    #[test]
    fn test_image_url_falls_back_when_empty() {
        assert_eq!(product(Some("")).image_url(), Product::DEFAULT_IMAGE_URL);
    }
}
