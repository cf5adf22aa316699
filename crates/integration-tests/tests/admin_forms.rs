//! Integration tests for admin form state and settings commits.

use askama::Template;

use granja_core::ProductId;
use granja_integration_tests::{sample_product, sample_settings};
use granja_storefront::models::SettingsUpdate;
use granja_storefront::routes::admin::{
    AdminTemplate, FormSelection, ProductFormView, SettingsFormView,
};
use granja_storefront::routes::catalog::ProductCardView;

// =============================================================================
// Form Selection
// =============================================================================

#[test]
fn test_at_most_one_form_is_open() {
    let id = ProductId::new(uuid::Uuid::nil());

    // Opening the add form while an edit form is open discards the edit form.
    assert_eq!(FormSelection::resolve(true, Some(id)), FormSelection::Add);
    assert_eq!(
        FormSelection::resolve(false, Some(id)),
        FormSelection::Edit(id)
    );
    assert_eq!(FormSelection::resolve(false, None), FormSelection::None);
}

#[test]
fn test_edit_form_discards_nothing_of_the_product() {
    let product = sample_product("Estojo com 12 ovos");
    let form = ProductFormView::for_edit(&product);

    assert_eq!(form.name, "Estojo com 12 ovos");
    assert_eq!(form.price, "12.50");
    assert!(form.is_active);
}

// =============================================================================
// Settings Commits
// =============================================================================

#[test]
fn test_field_submission_commits_exactly_that_column() {
    let update = SettingsUpdate::parse("store_name", "Ovos do Vale").expect("known field");
    assert_eq!(update, SettingsUpdate::StoreName("Ovos do Vale".to_owned()));
    assert_eq!(update.column(), "store_name");
}

#[test]
fn test_banner_checkbox_commits_boolean() {
    assert_eq!(
        SettingsUpdate::parse("banner_active", "true").expect("known field"),
        SettingsUpdate::BannerActive(true)
    );
    assert_eq!(
        SettingsUpdate::parse("banner_active", "").expect("known field"),
        SettingsUpdate::BannerActive(false)
    );
}

// =============================================================================
// Rendering
// =============================================================================

fn render_admin(
    settings: Option<SettingsFormView>,
    cards: Vec<ProductCardView>,
    form: Option<ProductFormView>,
    error_message: Option<&'static str>,
) -> String {
    AdminTemplate {
        settings,
        products: cards,
        form,
        error_message,
    }
    .render()
    .expect("template renders")
}

#[test]
fn test_admin_page_shows_product_count() {
    let cards = vec![
        ProductCardView::from_product(&sample_product("Estojo"), None),
        ProductCardView::from_product(&sample_product("Palhão"), None),
    ];

    let html = render_admin(None, cards, None, None);
    assert!(html.contains("Produtos (2)"));
}

#[test]
fn test_admin_page_hides_settings_forms_without_row() {
    let html = render_admin(None, Vec::new(), None, None);
    assert!(!html.contains("name=\"field\""));
}

#[test]
fn test_admin_page_renders_settings_forms() {
    let settings = SettingsFormView::from(&sample_settings());
    let html = render_admin(Some(settings), Vec::new(), None, None);

    assert!(html.contains("value=\"store_name\""));
    assert!(html.contains("value=\"banner_active\""));
    assert!(html.contains("5511987654321"));
}

#[test]
fn test_admin_page_renders_error_alert() {
    let html = render_admin(
        None,
        Vec::new(),
        None,
        Some("Erro ao salvar produto. Tente novamente."),
    );
    assert!(html.contains("Erro ao salvar produto. Tente novamente."));
}

#[test]
fn test_admin_cards_never_link_whatsapp() {
    let card = ProductCardView::from_product(&sample_product("Estojo"), None);
    let html = render_admin(None, vec![card], None, None);

    assert!(!html.contains("wa.me"));
    assert!(html.contains("Tem certeza que deseja excluir este produto?"));
}

#[test]
fn test_add_form_renders_in_modal() {
    let html = render_admin(None, Vec::new(), Some(ProductFormView::for_add()), None);

    assert!(html.contains("Adicionar Produto"));
    assert!(html.contains("action=\"/admin/products\""));
    assert!(html.contains("Selecione..."));
}
