//! CSV serialization of analyzed reviews.

use std::fmt::Write as _;

use super::AnalyzedReview;

/// Column headers for the detailed export, in output order.
const HEADERS: [&str; 9] = [
    "Review Text",
    "Rating",
    "Date",
    "Verified Purchase",
    "Helpful Votes",
    "Reviewer",
    "Authenticity Score",
    "Is Fake",
    "Flags",
];

/// Render analyzed reviews as CSV with a header row.
///
/// Booleans are rendered `True`/`False` and the authenticity score is
/// formatted to two decimals, matching the report consumers downstream.
#[must_use]
pub fn to_csv(reviews: &[AnalyzedReview]) -> String {
    let mut out = String::new();
    out.push_str(&HEADERS.join(","));
    out.push('\n');
    for analyzed in reviews {
        let review = &analyzed.review;
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{:.2},{},{}",
            quote(&review.text),
            review.rating,
            quote(&review.date),
            python_bool(review.verified_purchase),
            review.helpful_votes,
            quote(&review.reviewer),
            analyzed.authenticity_score,
            python_bool(analyzed.is_fake),
            quote(&analyzed.flags.join(", ")),
        );
    }
    out
}

const fn python_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// RFC-4180 style quoting: wrap fields containing delimiters, quotes, or
/// newlines and double any embedded quotes.
fn quote(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
