//! Integration tests for Granja.
//!
//! The tests under `tests/` exercise the storefront's view construction and
//! outbound-link building across crate boundaries. They run against the
//! library crates directly and need no database or running server.
//!
//! # Test Categories
//!
//! - `catalog_views` - Public/admin view derivation, defaults, form state
//! - `whatsapp_links` - Click-to-chat link and message building

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::Utc;
use rust_decimal::Decimal;

use granja_core::{Brl, Classification, ProductId, ProductType, SettingsId};
use granja_storefront::models::{Product, StoreSettings};

/// A product as it would come back from the catalog read.
#[must_use]
pub fn sample_product(name: &str) -> Product {
    Product {
        id: ProductId::new(uuid::Uuid::nil()),
        name: name.to_owned(),
        description: "Ovos frescos, classe A.".to_owned(),
        price: Brl::new(Decimal::new(1250, 2)),
        image: None,
        product_type: ProductType::Estojo,
        classification: Some(Classification::G),
        quantity: 1,
        is_active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// A fully populated settings row.
#[must_use]
pub fn sample_settings() -> StoreSettings {
    StoreSettings {
        id: SettingsId::new(uuid::Uuid::nil()),
        store_name: "Ovos da Granja".to_owned(),
        phone: "(11) 1234-5678".to_owned(),
        whatsapp: "5511987654321".to_owned(),
        address: "Rua das Galinhas, 123 - Centro - São Paulo/SP".to_owned(),
        hours: "Segunda a Sábado: 7h às 18h".to_owned(),
        banner_active: false,
        banner_text: String::new(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
