//! Wishlist Models

use jiff::civil::DateTime;
use serde::Deserialize;

use crate::{domain::products::Product, session::UserId};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    pub id: i64,
    pub user_id: Option<UserId>,
    pub product: Option<Product>,
    pub created_at: Option<DateTime>,
}

/// Outcome of a wishlist toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WishlistAck {
    #[serde(default = "succeeded")]
    pub success: bool,
    pub message: Option<String>,
    pub added: Option<bool>,
    pub wishlist: Option<WishlistEntry>,
}

const fn succeeded() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WishlistStatus {
    pub is_in_wishlist: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WishlistCount {
    pub count: u64,
}
