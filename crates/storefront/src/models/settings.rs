//! Store settings domain types.

use chrono::{DateTime, Utc};

use granja_core::SettingsId;

/// Defaults rendered when no settings row exists yet.
pub mod defaults {
    pub const STORE_NAME: &str = "Ovos da Granja";
    pub const PHONE: &str = "(11) 1234-5678";
    pub const HOURS: &str = "Segunda a Sábado: 7h às 18h";
    pub const ADDRESS: &str = "Rua das Galinhas, 123 - Centro - São Paulo/SP";
}

/// Store-wide settings (domain type).
///
/// At most one row exists; its absence is a valid state and the views fall
/// back to [`defaults`].
#[derive(Debug, Clone)]
pub struct StoreSettings {
    /// Unique settings row ID.
    pub id: SettingsId,
    /// Store name shown in the header and footer.
    pub store_name: String,
    /// Landline/contact phone, free-form.
    pub phone: String,
    /// WhatsApp number, digits only; empty disables the contact button.
    pub whatsapp: String,
    /// Street address shown in the location section.
    pub address: String,
    /// Opening hours, free-form.
    pub hours: String,
    /// Whether the promotional banner is shown on the public page.
    pub banner_active: bool,
    /// Banner text.
    pub banner_text: String,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Error returned when a settings form names an unknown field.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown settings field: {0}")]
pub struct UnknownSettingsFieldError(pub String);

/// A single-field settings commit.
///
/// Settings fields commit individually (one column per submission), never the
/// whole record. Each variant carries the new value for exactly one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsUpdate {
    StoreName(String),
    Phone(String),
    Whatsapp(String),
    Address(String),
    Hours(String),
    BannerActive(bool),
    BannerText(String),
}

impl SettingsUpdate {
    /// Parse a form submission (`field` name + raw value) into an update.
    ///
    /// The banner-active checkbox submits `"true"` when checked and nothing
    /// when unchecked, so any value other than `"true"` reads as `false`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownSettingsFieldError`] if `field` does not name a
    /// settings column.
    pub fn parse(field: &str, value: &str) -> Result<Self, UnknownSettingsFieldError> {
        match field {
            "store_name" => Ok(Self::StoreName(value.to_owned())),
            "phone" => Ok(Self::Phone(value.to_owned())),
            "whatsapp" => Ok(Self::Whatsapp(value.to_owned())),
            "address" => Ok(Self::Address(value.to_owned())),
            "hours" => Ok(Self::Hours(value.to_owned())),
            "banner_active" => Ok(Self::BannerActive(value == "true")),
            "banner_text" => Ok(Self::BannerText(value.to_owned())),
            other => Err(UnknownSettingsFieldError(other.to_owned())),
        }
    }

    /// The single column this update touches.
    #[must_use]
    pub const fn column(&self) -> &'static str {
        match self {
            Self::StoreName(_) => "store_name",
            Self::Phone(_) => "phone",
            Self::Whatsapp(_) => "whatsapp",
            Self::Address(_) => "address",
            Self::Hours(_) => "hours",
            Self::BannerActive(_) => "banner_active",
            Self::BannerText(_) => "banner_text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_field() {
        let update = SettingsUpdate::parse("store_name", "Ovos do Sítio").expect("known field");
        assert_eq!(update, SettingsUpdate::StoreName("Ovos do Sítio".to_owned()));
        assert_eq!(update.column(), "store_name");
    }

    #[test]
    fn test_parse_banner_checkbox() {
        assert_eq!(
            SettingsUpdate::parse("banner_active", "true").expect("known field"),
            SettingsUpdate::BannerActive(true)
        );
        // Unchecked checkboxes submit no value at all
        assert_eq!(
            SettingsUpdate::parse("banner_active", "").expect("known field"),
            SettingsUpdate::BannerActive(false)
        );
    }

    #[test]
    fn test_parse_unknown_field() {
        assert!(SettingsUpdate::parse("store_slogan", "x").is_err());
    }

    #[test]
    fn test_each_update_touches_one_column() {
        let updates = [
            SettingsUpdate::StoreName(String::new()),
            SettingsUpdate::Phone(String::new()),
            SettingsUpdate::Whatsapp(String::new()),
            SettingsUpdate::Address(String::new()),
            SettingsUpdate::Hours(String::new()),
            SettingsUpdate::BannerActive(false),
            SettingsUpdate::BannerText(String::new()),
        ];
        let mut columns: Vec<&str> = updates.iter().map(SettingsUpdate::column).collect();
        columns.sort_unstable();
        columns.dedup();
        assert_eq!(columns.len(), updates.len());
    }
}
