//! Admin product mutation handlers.
//!
//! Create, update, and soft-delete. Every handler redirects back to `/admin`
//! so the page re-fetches everything; a failed mutation redirects with an
//! `?error=` code instead and the view stays as it was. Malformed form values
//! take the same error path as database failures - the admin page shows one
//! generic alert either way.

use axum::extract::{Form, Path, State};
use axum::response::Redirect;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::instrument;

use granja_core::{Brl, Classification, ProductId, ProductType};

use crate::db::{ProductRepository, RepositoryError};
use crate::models::ProductDraft;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Raw product form submission.
///
/// Values arrive as strings and are parsed in [`ProductForm::into_draft`] so
/// that malformed input funnels into the same redirect as a failed save.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: String,
    pub quantity: String,
    #[serde(default)]
    pub image: String,
    pub product_type: String,
    #[serde(default)]
    pub classification: String,
    pub is_active: String,
}

/// Errors converting a raw form into a [`ProductDraft`].
#[derive(Debug, Error)]
pub enum ProductFormError {
    #[error("invalid price: {0}")]
    InvalidPrice(String),
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),
    #[error(transparent)]
    UnknownType(#[from] granja_core::ParseProductTypeError),
    #[error(transparent)]
    UnknownClassification(#[from] granja_core::ParseClassificationError),
}

impl ProductForm {
    /// Parse the raw submission into a draft.
    ///
    /// An empty classification means "none"; an empty image URL is stored as
    /// NULL so the card falls back to the default photo.
    ///
    /// # Errors
    ///
    /// Returns [`ProductFormError`] if the price, quantity, type, or
    /// classification cannot be parsed.
    pub fn into_draft(self) -> Result<ProductDraft, ProductFormError> {
        let price = self
            .price
            .trim()
            .parse::<Decimal>()
            .map_err(|_| ProductFormError::InvalidPrice(self.price.clone()))?;

        let quantity = self
            .quantity
            .trim()
            .parse::<i32>()
            .map_err(|_| ProductFormError::InvalidQuantity(self.quantity.clone()))?;

        let product_type = ProductType::parse(&self.product_type)?;

        let classification = if self.classification.is_empty() {
            None
        } else {
            Some(Classification::parse(&self.classification)?)
        };

        let image = if self.image.trim().is_empty() {
            None
        } else {
            Some(self.image.trim().to_owned())
        };

        Ok(ProductDraft {
            name: self.name,
            description: self.description,
            price: Brl::new(price),
            image,
            product_type,
            classification,
            quantity,
            is_active: self.is_active == "true",
        })
    }
}

/// Error from the save path, spanning form parsing and persistence.
#[derive(Debug, Error)]
enum SaveError {
    #[error(transparent)]
    Form(#[from] ProductFormError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl SaveError {
    /// Report persistence failures to Sentry; validation mistakes are only
    /// logged.
    fn report(&self, context: &'static str) {
        match self {
            Self::Repository(e) => {
                let event_id = sentry::capture_error(e);
                tracing::error!(error = %e, sentry_event_id = %event_id, "{context}");
            }
            Self::Form(e) => {
                tracing::warn!(error = %e, "{context}");
            }
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Create a product.
///
/// POST /admin/products
#[instrument(skip(state, form), fields(name = %form.name))]
pub async fn create(State(state): State<AppState>, Form(form): Form<ProductForm>) -> Redirect {
    let result: Result<(), SaveError> = async {
        let draft = form.into_draft()?;
        ProductRepository::new(state.pool()).create(&draft).await?;
        Ok(())
    }
    .await;

    match result {
        Ok(()) => Redirect::to("/admin"),
        Err(e) => {
            e.report("Failed to create product");
            Redirect::to("/admin?error=save_product")
        }
    }
}

/// Update a product.
///
/// POST /admin/products/{id}
#[instrument(skip(state, form), fields(name = %form.name))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Form(form): Form<ProductForm>,
) -> Redirect {
    let result: Result<(), SaveError> = async {
        let draft = form.into_draft()?;
        ProductRepository::new(state.pool()).update(id, &draft).await?;
        Ok(())
    }
    .await;

    match result {
        Ok(()) => Redirect::to("/admin"),
        Err(e) => {
            e.report("Failed to update product");
            Redirect::to("/admin?error=save_product")
        }
    }
}

/// Soft-delete a product.
///
/// POST /admin/products/{id}/delete
///
/// The admin page asks for confirmation before submitting this form; the row
/// itself only has its active flag cleared.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<ProductId>) -> Redirect {
    match ProductRepository::new(state.pool()).soft_delete(id).await {
        Ok(()) => Redirect::to("/admin"),
        Err(e) => {
            let event_id = sentry::capture_error(&e);
            tracing::error!(error = %e, sentry_event_id = %event_id, "Failed to delete product");
            Redirect::to("/admin?error=delete_product")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ProductForm {
        ProductForm {
            name: "Estojo com 12 ovos".to_owned(),
            description: "Classe A".to_owned(),
            price: "12.50".to_owned(),
            quantity: "1".to_owned(),
            image: String::new(),
            product_type: "estojo".to_owned(),
            classification: "G".to_owned(),
            is_active: "true".to_owned(),
        }
    }

    #[test]
    fn test_into_draft() {
        let draft = form().into_draft().expect("valid form");
        assert_eq!(draft.price.to_string(), "R$ 12,50");
        assert_eq!(draft.product_type, ProductType::Estojo);
        assert_eq!(draft.classification, Some(Classification::G));
        assert_eq!(draft.quantity, 1);
        assert!(draft.image.is_none());
        assert!(draft.is_active);
    }

    #[test]
    fn test_into_draft_empty_classification_is_none() {
        let mut f = form();
        f.classification = String::new();
        let draft = f.into_draft().expect("valid form");
        assert_eq!(draft.classification, None);
    }

    #[test]
    fn test_into_draft_keeps_image_url() {
        let mut f = form();
        f.image = " https://exemplo.com/imagem.jpg ".to_owned();
        let draft = f.into_draft().expect("valid form");
        assert_eq!(draft.image.as_deref(), Some("https://exemplo.com/imagem.jpg"));
    }

    #[test]
    fn test_into_draft_rejects_bad_price() {
        let mut f = form();
        f.price = "doze reais".to_owned();
        assert!(matches!(
            f.into_draft(),
            Err(ProductFormError::InvalidPrice(_))
        ));
    }

    #[test]
    fn test_into_draft_rejects_bad_quantity() {
        let mut f = form();
        f.quantity = "uma".to_owned();
        assert!(matches!(
            f.into_draft(),
            Err(ProductFormError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn test_into_draft_rejects_unknown_type() {
        let mut f = form();
        f.product_type = "granel".to_owned();
        assert!(matches!(f.into_draft(), Err(ProductFormError::UnknownType(_))));
    }
}
