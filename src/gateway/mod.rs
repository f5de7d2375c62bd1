//! API gateway: credential attachment, authorization failure handling and
//! the HTTP transport underneath.

mod client;
mod errors;
mod navigator;
mod request;
mod transport;

pub use client::*;
pub use errors::*;
pub use navigator::*;
pub use request::*;
pub use transport::*;
