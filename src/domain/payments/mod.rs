//! Payments

pub mod models;
mod service;

pub use models::*;
pub use service::*;
