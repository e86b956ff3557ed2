//! Flat review record shape shared by the collector and the scorer.

use serde::{Deserialize, Serialize};

/// Aggregate stats about a reviewer's past activity.
///
/// Only `total_reviews` currently feeds the scoring heuristic; the other
/// fields mirror what a real platform would expose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewerHistory {
    /// Total reviews this reviewer has ever posted.
    pub total_reviews: u32,
    /// Mean star rating across those reviews.
    pub avg_rating: f64,
    /// How many of those reviews were on verified purchases.
    pub verified_purchases: u32,
}

/// One product review as produced by the collector.
///
/// Records are independent and immutable once produced; no uniqueness or
/// ordering invariant is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Review body text.
    pub text: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
    /// Review date as an opaque `YYYY-MM-DD` string.
    pub date: String,
    /// Whether the source platform confirmed the reviewer bought the product.
    pub verified_purchase: bool,
    /// Helpful-vote count from other shoppers.
    pub helpful_votes: u32,
    /// Opaque reviewer identifier.
    pub reviewer: String,
    /// Aggregate stats about the reviewer's past activity.
    pub reviewer_history: ReviewerHistory,
}
