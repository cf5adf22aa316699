//! Outbound integrations.

pub mod whatsapp;
