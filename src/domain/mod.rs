//! Domain services
//!
//! Thin typed wrappers over the [`Gateway`](crate::gateway::Gateway), one per
//! backend resource.

mod errors;

pub mod cart;
pub mod categories;
pub mod orders;
pub mod payments;
pub mod products;
pub mod reviews;
pub mod wishlist;

pub use errors::*;
