//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                            - Public catalog page
//! GET  /health                      - Health check (in main.rs)
//!
//! # Admin (no credential check; see crate docs)
//! GET  /admin                       - Admin panel (?add / ?edit=<id> select the open form,
//!                                     ?error=<code> renders an alert)
//! POST /admin/products              - Create product
//! POST /admin/products/{id}         - Update product
//! POST /admin/products/{id}/delete  - Soft-delete product (confirmed in the page)
//! POST /admin/settings              - Commit a single settings field
//! ```
//!
//! Every mutation redirects back to `/admin`, which re-fetches all data; there
//! is no partial view update.

pub mod admin;
pub mod catalog;
pub mod products;
pub mod settings;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::index))
        .route("/admin", get(admin::index))
        .route("/admin/products", post(products::create))
        .route("/admin/products/{id}", post(products::update))
        .route("/admin/products/{id}/delete", post(products::delete))
        .route("/admin/settings", post(settings::update))
}
