//! ShopLite Client
//!
//! Session lifecycle, authenticated API gateway and typed services for the
//! ShopLite storefront and admin consoles.

pub mod auth;
pub mod config;
pub mod context;
pub mod domain;
pub mod gateway;
pub mod session;
pub mod token;

#[cfg(test)]
mod test;
