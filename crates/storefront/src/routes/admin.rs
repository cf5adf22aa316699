//! Admin panel page.
//!
//! One page carrying the store settings forms, the banner controls, and the
//! product grid with edit/delete actions. At most one product form (add or
//! edit) is open at a time; which one is derived from the query string, so
//! opening a new form simply navigates away from - and discards - the
//! previous one.
//!
//! There is no credential check on any admin route; see the crate-level
//! security notes.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use granja_core::{Classification, ProductId, ProductType};

use super::catalog::ProductCardView;
use crate::db::{ProductRepository, SettingsRepository};
use crate::error::Result;
use crate::models::{Product, StoreSettings};
use crate::state::AppState;

// =============================================================================
// Query Parameters
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct AdminQueryParams {
    /// `?add=true` opens the blank product form.
    pub add: Option<bool>,
    /// `?edit=<id>` opens the edit form for an existing product.
    pub edit: Option<ProductId>,
    /// Error code from a failed mutation redirect.
    pub error: Option<String>,
}

/// Which product form the query string selects, before any data is fetched.
///
/// `add` wins over `edit`: opening the add form while an edit form is open
/// discards the edit form (and any unsaved values with it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSelection {
    None,
    Add,
    Edit(ProductId),
}

impl FormSelection {
    /// Resolve the form selection from the query parameters.
    #[must_use]
    pub fn resolve(add: bool, edit: Option<ProductId>) -> Self {
        if add {
            Self::Add
        } else if let Some(id) = edit {
            Self::Edit(id)
        } else {
            Self::None
        }
    }
}

// =============================================================================
// View Types
// =============================================================================

/// An option in the type/classification selects.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// The product form (add or edit), prefilled for the template.
#[derive(Debug, Clone)]
pub struct ProductFormView {
    pub heading: &'static str,
    /// POST target: `/admin/products` or `/admin/products/{id}`.
    pub action: String,
    pub name: String,
    pub description: String,
    /// Raw decimal string for the number input (dot separator).
    pub price: String,
    pub quantity: i32,
    pub image: String,
    pub is_active: bool,
    pub type_options: Vec<SelectOption>,
    pub classification_options: Vec<SelectOption>,
    /// Whether the blank "Selecione..." option is the selected one.
    pub classification_none_selected: bool,
}

impl ProductFormView {
    /// Blank form for a new product.
    #[must_use]
    pub fn for_add() -> Self {
        Self {
            heading: "Adicionar Produto",
            action: "/admin/products".to_owned(),
            name: String::new(),
            description: String::new(),
            price: "0".to_owned(),
            quantity: 1,
            image: String::new(),
            is_active: true,
            type_options: type_options(ProductType::default()),
            classification_options: classification_options(Some(Classification::G)),
            classification_none_selected: false,
        }
    }

    /// Form prefilled from an existing product.
    #[must_use]
    pub fn for_edit(product: &Product) -> Self {
        Self {
            heading: "Editar Produto",
            action: format!("/admin/products/{}", product.id),
            name: product.name.clone(),
            description: product.description.clone(),
            price: format!("{:.2}", product.price.rounded()),
            quantity: product.quantity,
            image: product.image.clone().unwrap_or_default(),
            is_active: product.is_active,
            type_options: type_options(product.product_type),
            classification_options: classification_options(product.classification),
            classification_none_selected: product.classification.is_none(),
        }
    }
}

fn type_options(selected: ProductType) -> Vec<SelectOption> {
    ProductType::ALL
        .into_iter()
        .map(|ty| SelectOption {
            value: ty.as_str(),
            label: ty.label(),
            selected: ty == selected,
        })
        .collect()
}

fn classification_options(selected: Option<Classification>) -> Vec<SelectOption> {
    Classification::ALL
        .into_iter()
        .map(|grade| SelectOption {
            value: grade.as_str(),
            label: grade.label(),
            selected: selected == Some(grade),
        })
        .collect()
}

/// Settings form values (raw stored values, no display defaults).
#[derive(Debug, Clone)]
pub struct SettingsFormView {
    pub store_name: String,
    pub phone: String,
    pub whatsapp: String,
    pub address: String,
    pub hours: String,
    pub banner_active: bool,
    pub banner_text: String,
}

impl From<&StoreSettings> for SettingsFormView {
    fn from(settings: &StoreSettings) -> Self {
        Self {
            store_name: settings.store_name.clone(),
            phone: settings.phone.clone(),
            whatsapp: settings.whatsapp.clone(),
            address: settings.address.clone(),
            hours: settings.hours.clone(),
            banner_active: settings.banner_active,
            banner_text: settings.banner_text.clone(),
        }
    }
}

/// Map a mutation error code to its localized alert text.
#[must_use]
pub fn error_message(code: &str) -> Option<&'static str> {
    match code {
        "save_product" => Some("Erro ao salvar produto. Tente novamente."),
        "delete_product" => Some("Erro ao excluir produto. Tente novamente."),
        "save_settings" => Some("Erro ao salvar configurações. Tente novamente."),
        _ => None,
    }
}

// =============================================================================
// Handler
// =============================================================================

/// Admin page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/index.html")]
pub struct AdminTemplate {
    /// Settings forms render only once a settings row exists.
    pub settings: Option<SettingsFormView>,
    pub products: Vec<ProductCardView>,
    pub form: Option<ProductFormView>,
    pub error_message: Option<&'static str>,
}

/// Display the admin panel.
///
/// GET /admin
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<AdminQueryParams>,
) -> Result<AdminTemplate> {
    let product_repo = ProductRepository::new(state.pool());
    let products = product_repo.list_active().await?;
    let store_settings = SettingsRepository::new(state.pool()).get().await?;

    let form = match FormSelection::resolve(params.add.unwrap_or(false), params.edit) {
        FormSelection::Add => Some(ProductFormView::for_add()),
        FormSelection::Edit(id) => product_repo
            .get(id)
            .await?
            .as_ref()
            .map(ProductFormView::for_edit),
        FormSelection::None => None,
    };

    // Admin cards carry no contact button, matching the public/admin split.
    let cards = products
        .iter()
        .map(|p| ProductCardView::from_product(p, None))
        .collect();

    Ok(AdminTemplate {
        settings: store_settings.as_ref().map(SettingsFormView::from),
        products: cards,
        form,
        error_message: params.error.as_deref().and_then(error_message),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use granja_core::Brl;
    use rust_decimal::Decimal;

    fn product() -> Product {
        Product {
            id: ProductId::new(uuid::Uuid::nil()),
            name: "Caixa 30 dúzias".to_owned(),
            description: String::new(),
            price: Brl::new(Decimal::new(1800, 1)),
            image: None,
            product_type: ProductType::Caixa,
            classification: None,
            quantity: 30,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_wins_over_edit() {
        let id = ProductId::new(uuid::Uuid::nil());
        assert_eq!(FormSelection::resolve(true, Some(id)), FormSelection::Add);
    }

    #[test]
    fn test_edit_selected_without_add() {
        let id = ProductId::new(uuid::Uuid::nil());
        assert_eq!(
            FormSelection::resolve(false, Some(id)),
            FormSelection::Edit(id)
        );
    }

    #[test]
    fn test_no_form_by_default() {
        assert_eq!(FormSelection::resolve(false, None), FormSelection::None);
    }

    #[test]
    fn test_edit_form_prefills_product() {
        let view = ProductFormView::for_edit(&product());
        assert_eq!(view.heading, "Editar Produto");
        assert_eq!(view.price, "180.00");
        assert!(view.action.ends_with(&uuid::Uuid::nil().to_string()));
        assert!(view.classification_none_selected);

        let selected: Vec<_> = view
            .type_options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value)
            .collect();
        assert_eq!(selected, vec!["caixa"]);
    }

    #[test]
    fn test_add_form_is_blank() {
        let view = ProductFormView::for_add();
        assert_eq!(view.heading, "Adicionar Produto");
        assert_eq!(view.action, "/admin/products");
        assert!(view.name.is_empty());
        assert!(view.is_active);
    }

    #[test]
    fn test_error_message_codes() {
        assert_eq!(
            error_message("save_product"),
            Some("Erro ao salvar produto. Tente novamente.")
        );
        assert_eq!(
            error_message("delete_product"),
            Some("Erro ao excluir produto. Tente novamente.")
        );
        assert_eq!(
            error_message("save_settings"),
            Some("Erro ao salvar configurações. Tente novamente.")
        );
        assert_eq!(error_message("unknown"), None);
    }
}
