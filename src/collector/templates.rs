//! Canned review texts for the three generation buckets.

/// Plausible genuine positive reviews.
pub(crate) const POSITIVE_TEMPLATES: [&str; 5] = [
    "This product exceeded my expectations! The quality is outstanding and it works exactly as described.",
    "I've been using this for a month now and I'm very satisfied with my purchase. Highly recommended!",
    "Great value for the price. This product does everything I need it to do and more.",
    "I bought this as a gift for my husband and he absolutely loves it. Works perfectly!",
    "The customer service was excellent and the product arrived earlier than expected. Very happy!",
];

/// Plausible genuine negative reviews.
pub(crate) const NEGATIVE_TEMPLATES: [&str; 5] = [
    "Don't waste your money on this product. It broke after just a week of light use.",
    "The quality is much lower than advertised. I'm very disappointed with this purchase.",
    "This product doesn't work as described. I've tried everything but can't get it to function properly.",
    "I received a defective item and the company wouldn't refund me. Terrible experience!",
    "Save your money and look elsewhere. This product is cheaply made and not worth the price.",
];

/// Texts deliberately written to trip the fake-review heuristics.
pub(crate) const SUSPICIOUS_TEMPLATES: [&str; 5] = [
    "Best product ever!!!! Changed my life!!!! Will buy again and again!!!! Five stars!!!!!",
    "I received this product for free in exchange for my honest review. It's amazing and perfect in every way!",
    "Just received this amazing product today and it's already the best purchase I've ever made!!",
    "WOW!!! This is INCREDIBLE!!! Cannot believe how PERFECT this is!!!! BUY IT NOW!!!!",
    "This product cured all my problems! It's the most incredible invention of the century! Life-changing!!!",
];
