//! Heuristic fake-review scoring and aggregation.
//!
//! Scores are additive heuristics, not model output: a pattern-match base,
//! a handful of metadata adjustments, and an injected random perturbation,
//! clamped to [0.05, 0.95]. Flags re-derive the same rules as labels for
//! explanation; they never feed back into the score.

pub mod export;
pub mod patterns;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::core::errors::Result;
use crate::core::review::ReviewRecord;

use patterns::PatternTable;

/// Per-match contribution to the base score.
const PATTERN_WEIGHT: f64 = 0.15;
/// Cap on the pattern-derived base score.
const PATTERN_CAP: f64 = 0.7;
/// Half-width of the uniform random perturbation.
const NOISE_SPAN: f64 = 0.10;
/// Final scores never leave this interval.
const SCORE_FLOOR: f64 = 0.05;
/// See `SCORE_FLOOR`.
const SCORE_CEIL: f64 = 0.95;
/// Texts shorter than this many characters look suspicious.
const SHORT_TEXT_CHARS: usize = 20;

/// One review with its authenticity verdict attached.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzedReview {
    /// The input record, unchanged.
    #[serde(flatten)]
    pub review: ReviewRecord,
    /// `1 − fake_probability`, in [0.05, 0.95].
    pub authenticity_score: f64,
    /// Whether the fake probability exceeded the threshold (strictly).
    pub is_fake: bool,
    /// Human-readable reasons, in rule evaluation order. Non-unique.
    pub flags: Vec<String>,
}

impl AnalyzedReview {
    /// The fake probability this verdict was derived from.
    #[must_use]
    pub fn fake_probability(&self) -> f64 {
        1.0 - self.authenticity_score
    }
}

/// Aggregated outcome of one scoring run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// Percentage of reviews classified authentic.
    pub real_percentage: u8,
    /// Percentage of reviews classified fake. Always `100 − real_percentage`.
    pub fake_percentage: u8,
    /// Every review with its verdict.
    pub reviews: Vec<AnalyzedReview>,
    /// The same data serialized as CSV with a header row.
    pub export_csv: String,
}

/// Heuristic review scorer.
#[derive(Debug, Clone)]
pub struct ReviewScorer {
    patterns: PatternTable,
}

impl ReviewScorer {
    /// Build a scorer with the built-in pattern table.
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: PatternTable::compile()?,
        })
    }

    /// The ordered pattern table backing this scorer.
    #[must_use]
    pub const fn patterns(&self) -> &PatternTable {
        &self.patterns
    }

    /// Score every review against `threshold` and aggregate percentages.
    ///
    /// Perturbation comes from `rng`; pass a seeded rng for reproducible
    /// scores. An empty input yields 0% fake / 100% real and a header-only
    /// export.
    pub fn score(
        &self,
        reviews: &[ReviewRecord],
        threshold: f64,
        rng: &mut impl Rng,
    ) -> AnalysisResult {
        let mut analyzed = Vec::with_capacity(reviews.len());
        let mut fake_count = 0usize;

        for review in reviews {
            let fake_score = self.fake_probability(review, rng);
            let is_fake = fake_score > threshold;
            if is_fake {
                fake_count += 1;
            }
            debug!(
                reviewer = %review.reviewer,
                score = fake_score,
                is_fake,
                "scored review"
            );
            analyzed.push(AnalyzedReview {
                review: review.clone(),
                authenticity_score: 1.0 - fake_score,
                is_fake,
                flags: self.flags_for(review),
            });
        }

        let fake_percentage = percentage(fake_count, reviews.len());
        let real_percentage = 100 - fake_percentage;
        info!(
            total = reviews.len(),
            fake_count, fake_percentage, "analysis complete"
        );

        let export_csv = export::to_csv(&analyzed);
        AnalysisResult {
            real_percentage,
            fake_percentage,
            reviews: analyzed,
            export_csv,
        }
    }

    /// Heuristic probability in [0.05, 0.95] that `review` is fake.
    pub fn fake_probability(&self, review: &ReviewRecord, rng: &mut impl Rng) -> f64 {
        let text = review.text.to_lowercase();
        let matches = self.patterns.match_count(&text);

        #[allow(clippy::cast_precision_loss)]
        let pattern_score = (matches as f64 * PATTERN_WEIGHT).min(PATTERN_CAP);

        let mut adjustments = 0.0;
        if review.helpful_votes == 0 {
            adjustments += 0.05;
        }
        if !review.verified_purchase {
            adjustments += 0.15;
        }
        if review.reviewer_history.total_reviews <= 2 {
            adjustments += 0.10;
        }
        if review.rating == 5 {
            adjustments += 0.05;
        }
        if text.chars().count() < SHORT_TEXT_CHARS {
            adjustments += 0.10;
        }

        let noise = rng.random_range(-NOISE_SPAN..=NOISE_SPAN);
        (pattern_score + adjustments + noise).clamp(SCORE_FLOOR, SCORE_CEIL)
    }

    /// Explanation flags for `review`, in rule evaluation order.
    ///
    /// Pattern labels first, then the metadata rules. Derived from the same
    /// conditions as the score but computed independently of it.
    #[must_use]
    pub fn flags_for(&self, review: &ReviewRecord) -> Vec<String> {
        let text = review.text.to_lowercase();
        let mut flags: Vec<String> = self
            .patterns
            .matched_labels(&text)
            .into_iter()
            .map(ToString::to_string)
            .collect();

        if !review.verified_purchase {
            flags.push("Unverified purchase".to_string());
        }
        if review.reviewer_history.total_reviews <= 2 {
            flags.push("New reviewer".to_string());
        }
        if review.helpful_votes == 0 {
            flags.push("No helpful votes".to_string());
        }
        if text.chars().count() < SHORT_TEXT_CHARS {
            flags.push("Very short review".to_string());
        }
        flags
    }
}

/// Round `count / total` to a whole percentage; 0 when `total` is 0.
///
/// The fake share is rounded and the real share derived as its complement,
/// so the pair always sums to 100 even when per-review rounding would not.
fn percentage(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let rounded = ((count as f64 / total as f64) * 100.0).round() as u8;
    rounded
}
