//! Public catalog page.
//!
//! Renders everything a visitor sees: promotional banner, header, hero copy,
//! the product grid with WhatsApp ordering, the egg classification table, the
//! location section, and the footer.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use granja_core::WhatsAppNumber;

use crate::db::{ProductRepository, SettingsRepository};
use crate::error::Result;
use crate::filters;
use crate::models::{Product, StoreSettings, defaults};
use crate::services::whatsapp;
use crate::state::AppState;

// =============================================================================
// View Types
// =============================================================================

/// Store settings as rendered, with defaults filled in when no row exists.
#[derive(Debug, Clone)]
pub struct SettingsView {
    pub store_name: String,
    pub phone: String,
    pub hours: String,
    pub address: String,
    /// Banner text, present only while the banner is active.
    pub banner: Option<String>,
    /// Parsed WhatsApp number; `None` (unset, empty, or malformed) hides the
    /// contact button entirely.
    pub whatsapp: Option<WhatsAppNumber>,
}

impl SettingsView {
    /// Build the view from an optional settings row.
    #[must_use]
    pub fn from_settings(settings: Option<&StoreSettings>) -> Self {
        let whatsapp = settings.and_then(|s| {
            if s.whatsapp.is_empty() {
                return None;
            }
            match WhatsAppNumber::parse(&s.whatsapp) {
                Ok(number) => Some(number),
                Err(e) => {
                    tracing::warn!(error = %e, "Stored WhatsApp number is not usable");
                    None
                }
            }
        });

        settings.map_or_else(
            || Self {
                store_name: defaults::STORE_NAME.to_owned(),
                phone: defaults::PHONE.to_owned(),
                hours: defaults::HOURS.to_owned(),
                address: defaults::ADDRESS.to_owned(),
                banner: None,
                whatsapp: None,
            },
            |s| Self {
                store_name: s.store_name.clone(),
                phone: s.phone.clone(),
                hours: s.hours.clone(),
                address: s.address.clone(),
                banner: s.banner_active.then(|| s.banner_text.clone()),
                whatsapp,
            },
        )
    }
}

/// Product display data for the card partials.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub quantity_unit: &'static str,
    /// Size-grade badge text, when the product has a classification.
    pub classification: Option<&'static str>,
    pub image_url: String,
    pub price: String,
    /// Click-to-chat link; `None` in admin mode or without a usable number.
    pub whatsapp_url: Option<String>,
}

impl ProductCardView {
    /// Build a card view; pass the store number to get a contact button.
    #[must_use]
    pub fn from_product(product: &Product, contact: Option<&WhatsAppNumber>) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            quantity: product.quantity,
            quantity_unit: product.product_type.quantity_unit(),
            classification: product.classification.map(|c| c.as_str()),
            image_url: product.image_url().to_owned(),
            price: product.price.to_string(),
            whatsapp_url: contact
                .map(|number| whatsapp::click_to_chat_url(number, &product.name, product.price)),
        }
    }
}

// =============================================================================
// Classification Table (static content)
// =============================================================================

/// One row of the egg classification reference table.
#[derive(Debug, Clone)]
pub struct ClassificationRow {
    pub classification: &'static str,
    pub weight: &'static str,
    pub commercial: &'static str,
    pub quality: &'static str,
    pub observations: &'static str,
}

/// The reference table shown below the product grid.
#[must_use]
pub fn classification_rows() -> Vec<ClassificationRow> {
    vec![
        ClassificationRow {
            classification: "P - Pequeno",
            weight: "< 53 g",
            commercial: "Pequeno",
            quality: "Classe A, B ou C",
            observations: "Galinhas jovens, menor gema e clara.",
        },
        ClassificationRow {
            classification: "M - Médio",
            weight: "53 a 59 g",
            commercial: "Médio",
            quality: "Classe A, B ou C",
            observations: "Mais comuns em granjas, preço intermediário.",
        },
        ClassificationRow {
            classification: "G - Grande",
            weight: "60 a 66 g",
            commercial: "Grande",
            quality: "Classe A, B ou C",
            observations: "Muito usado em culinária, padrão comercial.",
        },
        ClassificationRow {
            classification: "XL - Extra",
            weight: "67 a 73 g",
            commercial: "Extra, Extra Grande, Extra Top",
            quality: "Classe A, B ou C",
            observations: "Grande apelo comercial; \"Extra Top\" é apenas marketing.",
        },
        ClassificationRow {
            classification: "Jumbo",
            weight: "> 73 g",
            commercial: "Jumbo, Super Jumbo",
            quality: "Classe A, B ou C",
            observations: "Raros, mais caros, casca pode ser mais fina.",
        },
    ]
}

// =============================================================================
// Handler
// =============================================================================

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/index.html")]
pub struct CatalogTemplate {
    pub settings: SettingsView,
    pub products: Vec<ProductCardView>,
    pub classification_rows: Vec<ClassificationRow>,
}

/// Display the public catalog page.
///
/// GET /
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<CatalogTemplate> {
    let products = ProductRepository::new(state.pool()).list_active().await?;
    let store_settings = SettingsRepository::new(state.pool()).get().await?;

    let settings = SettingsView::from_settings(store_settings.as_ref());
    let cards = products
        .iter()
        .map(|p| ProductCardView::from_product(p, settings.whatsapp.as_ref()))
        .collect();

    Ok(CatalogTemplate {
        products: cards,
        classification_rows: classification_rows(),
        settings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use granja_core::{Brl, Classification, ProductId, ProductType, SettingsId};
    use rust_decimal::Decimal;

    fn settings(whatsapp: &str, banner_active: bool) -> StoreSettings {
        StoreSettings {
            id: SettingsId::new(uuid::Uuid::nil()),
            store_name: "Ovos do Vale".to_owned(),
            phone: "(11) 99999-0000".to_owned(),
            whatsapp: whatsapp.to_owned(),
            address: "Estrada do Vale, 45".to_owned(),
            hours: "Todos os dias: 8h às 17h".to_owned(),
            banner_active,
            banner_text: "Promoção de palhão!".to_owned(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn product() -> Product {
        Product {
            id: ProductId::new(uuid::Uuid::nil()),
            name: "Estojo com 12 ovos".to_owned(),
            description: "Ovos vermelhos classe A".to_owned(),
            price: Brl::new(Decimal::new(125, 1)),
            image: None,
            product_type: ProductType::Estojo,
            classification: Some(Classification::G),
            quantity: 1,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_settings_view_defaults_when_unset() {
        let view = SettingsView::from_settings(None);
        assert_eq!(view.store_name, "Ovos da Granja");
        assert_eq!(view.phone, "(11) 1234-5678");
        assert_eq!(view.hours, "Segunda a Sábado: 7h às 18h");
        assert_eq!(view.address, "Rua das Galinhas, 123 - Centro - São Paulo/SP");
        assert!(view.banner.is_none());
        assert!(view.whatsapp.is_none());
    }

    #[test]
    fn test_settings_view_banner_follows_active_flag() {
        let active = SettingsView::from_settings(Some(&settings("", true)));
        assert_eq!(active.banner.as_deref(), Some("Promoção de palhão!"));

        let inactive = SettingsView::from_settings(Some(&settings("", false)));
        assert!(inactive.banner.is_none());
    }

    #[test]
    fn test_settings_view_hides_contact_without_number() {
        let view = SettingsView::from_settings(Some(&settings("", false)));
        assert!(view.whatsapp.is_none());
    }

    #[test]
    fn test_settings_view_hides_contact_for_malformed_number() {
        let view = SettingsView::from_settings(Some(&settings("(11) 98765-4321", false)));
        assert!(view.whatsapp.is_none());
    }

    #[test]
    fn test_card_has_contact_link_when_number_present() {
        let view = SettingsView::from_settings(Some(&settings("5511987654321", false)));
        let card = ProductCardView::from_product(&product(), view.whatsapp.as_ref());

        let url = card.whatsapp_url.expect("contact link present");
        assert!(url.starts_with("https://wa.me/5511987654321?text="));
        assert_eq!(card.price, "R$ 12,50");
    }

    #[test]
    fn test_card_has_no_contact_link_without_number() {
        let card = ProductCardView::from_product(&product(), None);
        assert!(card.whatsapp_url.is_none());
    }

    #[test]
    fn test_card_quantity_unit_follows_product_type() {
        let mut quail = product();
        quail.product_type = ProductType::Codorna;
        quail.quantity = 30;

        let card = ProductCardView::from_product(&quail, None);
        assert_eq!(card.quantity_unit, "unidades");
        assert_eq!(card.quantity, 30);
    }

    #[test]
    fn test_classification_table_covers_all_grades() {
        let rows = classification_rows();
        assert_eq!(rows.len(), 5);
        assert!(rows.first().expect("rows").classification.starts_with("P"));
        assert_eq!(rows.last().expect("rows").classification, "Jumbo");
    }
}
