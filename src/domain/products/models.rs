//! Product Models

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use crate::{
    domain::categories::{Category, CategoryId},
    gateway::ApiRequest,
};

pub type ProductId = i64;

/// Product Model
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub stock_quantity: Option<i64>,
    pub is_active: Option<bool>,
    pub category: Option<Category>,
    pub category_id: Option<CategoryId>,
    pub category_name: Option<String>,
    pub average_rating: Option<f64>,
    pub review_count: Option<i64>,
    pub created_at: Option<DateTime>,
    pub updated_at: Option<DateTime>,
}

/// Reference to an existing category inside a product payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryRef {
    pub id: CategoryId,
}

/// Fields an administrator may set on a product.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub price: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Catalogue search filters. Unset filters are left to the backend's
/// defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductSearch {
    pub keyword: Option<String>,
    pub name: Option<String>,
    pub category_id: Option<CategoryId>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

impl ProductSearch {
    /// Search by product name only.
    #[must_use]
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Search within a price range.
    #[must_use]
    pub fn by_price(min_price: f64, max_price: f64) -> Self {
        Self {
            min_price: Some(min_price),
            max_price: Some(max_price),
            ..Self::default()
        }
    }

    pub(crate) fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .query_opt("keyword", non_blank(self.keyword.as_deref()))
            .query_opt("name", non_blank(self.name.as_deref()))
            .query_opt("categoryId", self.category_id)
            .query_opt("minPrice", self.min_price)
            .query_opt("maxPrice", self.max_price)
            .query_opt("sortBy", non_blank(self.sort_by.as_deref()))
            .query_opt("sortDirection", self.sort_direction.map(SortDirection::as_str))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}
