//! Review Models

use std::collections::BTreeMap;

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{ServiceError, products::ProductId},
    gateway::ApiRequest,
    session::UserId,
};

pub type ReviewId = i64;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub rating: u8,
    pub comment: Option<String>,
    pub product_id: Option<ProductId>,
    pub product_name: Option<String>,
    pub user_id: Option<UserId>,
    pub username: Option<String>,
    pub like_count: Option<u64>,
    pub created_at: Option<DateTime>,
    pub updated_at: Option<DateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRequest {
    /// One to five stars.
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub total_reviews: u64,
    #[serde(default)]
    pub rating_counts: BTreeMap<u8, u64>,
}

/// One page of reviews.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewPage {
    pub reviews: Vec<Review>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub current_page: u32,
    pub size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: 10 }
    }
}

/// Optional narrowing of a product's review list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewFilter {
    pub rating: Option<u8>,
    pub verified_only: Option<bool>,
    pub with_images: Option<bool>,
    pub sort_by: Option<String>,
}

impl ReviewFilter {
    pub(crate) fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .query_opt("rating", self.rating)
            .query_opt("verifiedOnly", self.verified_only)
            .query_opt("withImages", self.with_images)
            .query_opt("sortBy", self.sort_by.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ReportRequest<'a> {
    pub reason: &'a str,
}

/// `{ success, message, data }` wrapper used by the review endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Envelope<T> {
    #[serde(default = "succeeded")]
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
    pub total_elements: Option<u64>,
    pub total_pages: Option<u32>,
    pub current_page: Option<u32>,
    pub size: Option<u32>,
}

const fn succeeded() -> bool {
    true
}

impl<T> Envelope<T> {
    /// The payload, which may legitimately be absent.
    pub(crate) fn into_optional(self) -> Result<Option<T>, ServiceError> {
        if !self.success {
            return Err(ServiceError::Rejected {
                message: self.message,
            });
        }

        Ok(self.data)
    }

    pub(crate) fn into_data(self) -> Result<T, ServiceError> {
        self.into_optional()?.ok_or(ServiceError::MissingData("data"))
    }
}

impl Envelope<Vec<Review>> {
    pub(crate) fn into_page(self, requested: PageRequest) -> Result<ReviewPage, ServiceError> {
        let total_pages = self.total_pages;
        let current_page = self.current_page;
        let size = self.size;
        let total_elements = self.total_elements;

        let reviews = self.into_optional()?.unwrap_or_default();

        Ok(ReviewPage {
            total_elements: total_elements
                .unwrap_or_else(|| u64::try_from(reviews.len()).unwrap_or(u64::MAX)),
            total_pages: total_pages.unwrap_or(1),
            current_page: current_page.unwrap_or(requested.page),
            size: size.unwrap_or(requested.size),
            reviews,
        })
    }
}
