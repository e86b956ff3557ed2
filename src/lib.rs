//! Review Authenticity Analyzer — heuristic real-vs-fake review scoring.
//!
//! The pipeline is two leaf components called in sequence: a [`collector`]
//! that produces synthetic review records for a product URL, and a
//! [`scorer`] that assigns each record a heuristic fake probability and
//! aggregates real/fake percentages with a CSV export. Randomness is always
//! injected so callers can seed runs for reproducible output.

pub mod collector;
pub mod core;
pub mod scorer;

#[cfg(feature = "cli")]
pub mod cli_app;

use rand::Rng;

pub use crate::collector::{ReviewCollector, ReviewSource};
pub use crate::core::config::AnalyzerConfig;
pub use crate::core::errors::{RaaError, Result};
pub use crate::core::review::{ReviewRecord, ReviewerHistory};
pub use crate::scorer::{AnalysisResult, AnalyzedReview, ReviewScorer};

/// Run the full collect-then-score pipeline for one product URL.
///
/// # Errors
/// `RaaError::EmptyUrl` when `url` is blank, `RaaError::NoReviews` when
/// collection yields nothing; scorer construction errors propagate.
pub fn analyze(
    url: &str,
    min_reviews: usize,
    threshold: f64,
    rng: &mut impl Rng,
) -> Result<AnalysisResult> {
    if url.trim().is_empty() {
        return Err(RaaError::EmptyUrl);
    }
    let reviews = ReviewCollector::new().collect(url, min_reviews, rng);
    if reviews.is_empty() {
        return Err(RaaError::NoReviews {
            url: url.to_string(),
        });
    }
    let scorer = ReviewScorer::new()?;
    Ok(scorer.score(&reviews, threshold, rng))
}

#[cfg(test)]
mod tests {
    use super::{analyze, RaaError};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn blank_url_is_rejected_before_collection() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = analyze("   ", 30, 0.7, &mut rng).expect_err("blank URL must fail");
        assert!(matches!(err, RaaError::EmptyUrl));
        assert_eq!(err.code(), "RAA-3001");
    }

    #[test]
    fn zero_collected_reviews_is_an_error() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = analyze("https://www.amazon.com/dp/X", 0, 0.7, &mut rng)
            .expect_err("empty collection must fail");
        assert!(matches!(err, RaaError::NoReviews { .. }));
    }

    #[test]
    fn pipeline_produces_a_complete_result() {
        let mut rng = StdRng::seed_from_u64(21);
        let result = analyze("https://www.bestbuy.com/site/p/1.p", 30, 0.7, &mut rng)
            .expect("pipeline must succeed");
        assert_eq!(result.reviews.len(), 30);
        assert_eq!(result.real_percentage + result.fake_percentage, 100);
        assert_eq!(result.export_csv.lines().count(), 31);
    }
}
