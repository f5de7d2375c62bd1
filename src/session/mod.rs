//! Sessions

mod errors;
pub mod models;
mod storage;
mod store;

pub use errors::*;
pub use models::*;
pub use storage::*;
pub use store::*;
