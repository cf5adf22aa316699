//! Integration tests for WhatsApp click-to-chat link building.

use rust_decimal::Decimal;

use granja_core::{Brl, WhatsAppNumber};
use granja_storefront::services::whatsapp::{click_to_chat_url, order_message};

fn number() -> WhatsAppNumber {
    WhatsAppNumber::parse("5511987654321").expect("valid number")
}

#[test]
fn test_message_carries_name_and_comma_price() {
    let message = order_message("Palhão com 30 ovos", Brl::new(Decimal::new(2890, 2)));

    assert_eq!(
        message,
        "Olá! Tenho interesse no produto: Palhão com 30 ovos - R$ 28,90. \
         Gostaria de mais informações."
    );
}

#[test]
fn test_url_targets_wa_me_with_number() {
    let url = click_to_chat_url(&number(), "Estojo", Brl::new(Decimal::new(1250, 2)));
    assert!(url.starts_with("https://wa.me/5511987654321?text="));
}

#[test]
fn test_url_is_fully_percent_encoded() {
    let url = click_to_chat_url(&number(), "Estojo com 12 ovos", Brl::new(Decimal::new(125, 1)));

    let (_, query) = url.split_once("?text=").expect("query present");
    assert!(!query.contains(' '));
    assert!(!query.contains('+'), "spaces must be %20, not form-encoded");
    assert!(query.contains("%20"));
    // "R$ 12,50" inside the message
    assert!(query.contains("R%24%2012%2C50"));
}

#[test]
fn test_number_validation_gates_link_building() {
    // The storefront only builds links from parsed numbers; formatted input
    // never reaches the URL.
    assert!(WhatsAppNumber::parse("(11) 98765-4321").is_err());
    assert!(WhatsAppNumber::parse("").is_err());
}
