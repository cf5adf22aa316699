//! Seed the database with a starter catalog and settings row.
//!
//! Intended for fresh installs and local development:
//!
//! ```bash
//! granja-cli seed
//! granja-cli seed --skip-if-present
//! ```

use rust_decimal::Decimal;
use tracing::info;

use granja_core::{Brl, Classification, ProductType};
use granja_storefront::db::{self, ProductRepository};
use granja_storefront::models::ProductDraft;

use super::{CommandError, database_url};

/// The starter catalog inserted by `granja-cli seed`.
fn starter_catalog() -> Vec<ProductDraft> {
    vec![
        ProductDraft {
            name: "Estojo com 12 ovos".to_owned(),
            description: "Uma dúzia de ovos vermelhos, classe A.".to_owned(),
            price: Brl::new(Decimal::new(1250, 2)),
            image: None,
            product_type: ProductType::Estojo,
            classification: Some(Classification::G),
            quantity: 1,
            is_active: true,
        },
        ProductDraft {
            name: "Palhão com 30 ovos".to_owned(),
            description: "Bandeja aberta com 30 ovos brancos.".to_owned(),
            price: Brl::new(Decimal::new(2890, 2)),
            image: None,
            product_type: ProductType::Palhao,
            classification: Some(Classification::M),
            quantity: 2,
            is_active: true,
        },
        ProductDraft {
            name: "Caixa com 30 dúzias".to_owned(),
            description: "Caixa fechada para revenda.".to_owned(),
            price: Brl::new(Decimal::new(28000, 2)),
            image: None,
            product_type: ProductType::Caixa,
            classification: Some(Classification::G),
            quantity: 30,
            is_active: true,
        },
        ProductDraft {
            name: "Ovos de codorna".to_owned(),
            description: "Cartela com 30 unidades.".to_owned(),
            price: Brl::new(Decimal::new(950, 2)),
            image: None,
            product_type: ProductType::Codorna,
            classification: None,
            quantity: 30,
            is_active: true,
        },
    ]
}

/// Seed products and the settings row.
///
/// # Errors
///
/// Returns an error if the database URL is missing or any insert fails.
pub async fn run(skip_if_present: bool) -> Result<(), CommandError> {
    let database_url = database_url()?;

    info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    if skip_if_present {
        let (products,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&pool)
            .await?;
        if products > 0 {
            info!(products, "Database already seeded, skipping");
            return Ok(());
        }
    }

    let repo = ProductRepository::new(&pool);
    let catalog = starter_catalog();
    let count = catalog.len();
    for draft in &catalog {
        let product = repo.create(draft).await?;
        info!(id = %product.id, name = %product.name, "Seeded product");
    }

    // One settings row with the rendered defaults plus a usable WhatsApp
    // number; field edits in the admin panel update this row in place.
    sqlx::query(
        "INSERT INTO store_settings (whatsapp, banner_active, banner_text)
         VALUES ($1, $2, $3)",
    )
    .bind("5511987654321")
    .bind(true)
    .bind("Promoção da semana: palhão com 30 ovos por R$ 28,90!")
    .execute(&pool)
    .await?;

    info!(products = count, "Seeding complete");
    Ok(())
}
