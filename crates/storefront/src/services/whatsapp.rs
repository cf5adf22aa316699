//! WhatsApp click-to-chat links.
//!
//! Ordering happens over WhatsApp: each product card links to `wa.me` with a
//! pre-filled interest message, opened in a new browsing context. There is no
//! API call involved; the "integration" is just a well-formed URL.

use granja_core::{Brl, WhatsAppNumber};

/// The pre-filled interest message for a product.
#[must_use]
pub fn order_message(product_name: &str, price: Brl) -> String {
    format!(
        "Olá! Tenho interesse no produto: {product_name} - {price}. Gostaria de mais informações."
    )
}

/// Build the click-to-chat URL for a product.
///
/// The `wa.me` deep link expects the full number (country code included,
/// digits only) in the path and the message percent-encoded in the `text`
/// query parameter.
#[must_use]
pub fn click_to_chat_url(number: &WhatsAppNumber, product_name: &str, price: Brl) -> String {
    let message = order_message(product_name, price);
    format!(
        "https://wa.me/{}?text={}",
        number.as_str(),
        urlencoding::encode(&message)
    )
}
