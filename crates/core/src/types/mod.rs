//! Core types for Granja.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;
pub mod whatsapp;

pub use id::*;
pub use price::Brl;
pub use product::{Classification, ParseClassificationError, ParseProductTypeError, ProductType};
pub use whatsapp::{WhatsAppNumber, WhatsAppNumberError};
