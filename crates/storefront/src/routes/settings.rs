//! Admin settings mutation handler.
//!
//! Each settings field commits individually: the form submits a `field` name
//! and its new value, and exactly that column is written. The first commit
//! inserts the settings row if none exists yet.

use axum::extract::{Form, State};
use axum::response::Redirect;
use serde::Deserialize;
use tracing::instrument;

use crate::db::SettingsRepository;
use crate::models::SettingsUpdate;
use crate::state::AppState;

/// Single-field settings submission.
///
/// `value` is absent for an unchecked checkbox, which reads as `false`.
#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    pub field: String,
    #[serde(default)]
    pub value: String,
}

/// Commit one settings field.
///
/// POST /admin/settings
#[instrument(skip(state, form), fields(field = %form.field))]
pub async fn update(State(state): State<AppState>, Form(form): Form<SettingsForm>) -> Redirect {
    let update = match SettingsUpdate::parse(&form.field, &form.value) {
        Ok(update) => update,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected settings submission");
            return Redirect::to("/admin?error=save_settings");
        }
    };

    match SettingsRepository::new(state.pool()).upsert_field(&update).await {
        Ok(()) => Redirect::to("/admin"),
        Err(e) => {
            let event_id = sentry::capture_error(&e);
            tracing::error!(error = %e, sentry_event_id = %event_id, "Failed to save settings");
            Redirect::to("/admin?error=save_settings")
        }
    }
}
