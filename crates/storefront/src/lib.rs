//! Granja Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused.
//!
//! # Security
//!
//! The `/admin` routes perform **no authentication**: admin mode is a plain
//! view toggle, exactly as in the product requirements. Deploy the binary
//! behind a trusted network boundary (VPN, reverse-proxy auth) if the admin
//! surface must not be public.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
