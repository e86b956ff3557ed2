//! Review collection: source detection plus synthetic record generation.
//!
//! The collector never fetches anything. Source detection exists so the seam
//! where a real scraper would plug in already has a shape, but every source —
//! recognized or not — yields the same synthetic records. Callers that need
//! reproducible output pass a seeded rng.

mod templates;

use chrono::{Days, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;
use url::Url;

use crate::core::review::{ReviewRecord, ReviewerHistory};

use templates::{NEGATIVE_TEMPLATES, POSITIVE_TEMPLATES, SUSPICIOUS_TEMPLATES};

/// Which retail platform a product URL points at.
///
/// Used only for labeling and logs; collection behavior is identical for
/// every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewSource {
    /// amazon.* product page.
    Amazon,
    /// bestbuy.* product page.
    BestBuy,
    /// walmart.* product page.
    Walmart,
    /// Anything else, including unparseable URLs.
    Unknown,
}

impl ReviewSource {
    /// Classify a product URL by its host. Unparseable input maps to
    /// `Unknown` rather than failing; the collector succeeds regardless.
    #[must_use]
    pub fn detect(url: &str) -> Self {
        let Some(host) = Url::parse(url).ok().and_then(|u| u.host_str().map(str::to_owned))
        else {
            return Self::Unknown;
        };
        if host.contains("amazon") {
            Self::Amazon
        } else if host.contains("bestbuy") {
            Self::BestBuy
        } else if host.contains("walmart") {
            Self::Walmart
        } else {
            Self::Unknown
        }
    }

    /// Human-readable platform name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Amazon => "Amazon",
            Self::BestBuy => "Best Buy",
            Self::Walmart => "Walmart",
            Self::Unknown => "unknown source",
        }
    }
}

/// Generation bucket for one synthetic record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Positive,
    Negative,
    Suspicious,
}

impl Bucket {
    /// Weighted draw: 0.4 positive, 0.4 negative, 0.2 suspicious.
    fn draw(rng: &mut impl Rng) -> Self {
        let roll: f64 = rng.random_range(0.0..1.0);
        if roll < 0.4 {
            Self::Positive
        } else if roll < 0.8 {
            Self::Negative
        } else {
            Self::Suspicious
        }
    }
}

/// Synthetic review collector.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewCollector;

impl ReviewCollector {
    /// Create a collector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Collect exactly `minimum_count` reviews for `url`.
    ///
    /// The URL determines nothing but the source label in the logs; output
    /// depends only on `minimum_count` and the rng state. Never fails.
    pub fn collect(
        &self,
        url: &str,
        minimum_count: usize,
        rng: &mut impl Rng,
    ) -> Vec<ReviewRecord> {
        let source = ReviewSource::detect(url);
        debug!(
            source = source.label(),
            count = minimum_count,
            "generating synthetic reviews"
        );
        (0..minimum_count).map(|_| generate_record(rng)).collect()
    }
}

fn generate_record(rng: &mut impl Rng) -> ReviewRecord {
    let bucket = Bucket::draw(rng);
    let (template, rating) = match bucket {
        Bucket::Positive => (pick(&POSITIVE_TEMPLATES, rng), rng.random_range(4..=5)),
        Bucket::Negative => (pick(&NEGATIVE_TEMPLATES, rng), rng.random_range(1..=2)),
        Bucket::Suspicious => (pick(&SUSPICIOUS_TEMPLATES, rng), 5),
    };
    // Random 4-digit suffix keeps otherwise-identical template texts unique.
    let text = format!("{template} [{}]", rng.random_range(1000..=9999_u32));

    let date = Utc::now()
        .date_naive()
        .checked_sub_days(Days::new(rng.random_range(0..365)))
        .unwrap_or_else(|| Utc::now().date_naive())
        .format("%Y-%m-%d")
        .to_string();

    ReviewRecord {
        text,
        rating,
        date,
        verified_purchase: rng.random_bool(0.7),
        helpful_votes: if rng.random_bool(0.3) {
            rng.random_range(0..=100)
        } else {
            0
        },
        reviewer: format!("User{}", rng.random_range(1000..=9999_u32)),
        reviewer_history: ReviewerHistory {
            total_reviews: rng.random_range(1..=50),
            avg_rating: (rng.random_range(3.0..=5.0_f64) * 10.0).round() / 10.0,
            verified_purchases: rng.random_range(0..=30),
        },
    }
}

fn pick<'a>(templates: &'a [&'a str], rng: &mut impl Rng) -> &'a str {
    templates.choose(rng).copied().unwrap_or(templates[0])
}

#[cfg(test)]
mod tests {
    use super::{ReviewCollector, ReviewSource};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn detect_recognizes_supported_hosts() {
        assert_eq!(
            ReviewSource::detect("https://www.amazon.com/dp/B000000"),
            ReviewSource::Amazon
        );
        assert_eq!(
            ReviewSource::detect("https://www.bestbuy.com/site/product/123.p"),
            ReviewSource::BestBuy
        );
        assert_eq!(
            ReviewSource::detect("https://www.walmart.com/ip/456"),
            ReviewSource::Walmart
        );
        assert_eq!(
            ReviewSource::detect("https://example.org/whatever"),
            ReviewSource::Unknown
        );
        assert_eq!(ReviewSource::detect("not a url"), ReviewSource::Unknown);
    }

    #[test]
    fn collect_returns_exactly_the_requested_count() {
        let collector = ReviewCollector::new();
        let mut rng = StdRng::seed_from_u64(7);
        for count in [0usize, 1, 10, 37, 100] {
            let reviews = collector.collect("https://www.amazon.com/dp/X", count, &mut rng);
            assert_eq!(reviews.len(), count);
        }
    }

    #[test]
    fn collect_ignores_the_url_content() {
        let collector = ReviewCollector::new();
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let from_amazon = collector.collect("https://www.amazon.com/dp/X", 20, &mut a);
        let from_junk = collector.collect("://definitely-not-a-url", 20, &mut b);
        assert_eq!(from_amazon, from_junk);
    }

    #[test]
    fn generated_fields_stay_in_range() {
        let collector = ReviewCollector::new();
        let mut rng = StdRng::seed_from_u64(1234);
        let reviews = collector.collect("https://www.walmart.com/ip/1", 200, &mut rng);
        for review in &reviews {
            assert!((1..=5).contains(&review.rating), "rating {}", review.rating);
            // Rating 3 is never generated by any bucket.
            assert_ne!(review.rating, 3);
            assert!(review.helpful_votes <= 100);
            assert!(review.text.ends_with(']'), "missing suffix: {}", review.text);
            assert!(review.reviewer.starts_with("User"));
            let history = &review.reviewer_history;
            assert!((1..=50).contains(&history.total_reviews));
            assert!((3.0..=5.0).contains(&history.avg_rating));
            assert!(history.verified_purchases <= 30);
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_batch() {
        let collector = ReviewCollector::new();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            collector.collect("https://www.amazon.com/dp/X", 30, &mut a),
            collector.collect("https://www.amazon.com/dp/X", 30, &mut b)
        );
    }
}
