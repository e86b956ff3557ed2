//! Ordered suspicious-phrase pattern table.
//!
//! Each entry pairs a case-insensitive regex with the human label reported
//! when it matches. The pairing is explicit so labels can never drift out of
//! sync with pattern order; two distinct disclosure patterns deliberately
//! share the "Incentivized review" label.

use regex::{Regex, RegexBuilder};

use crate::core::errors::{RaaError, Result};

/// Raw (pattern, label) pairs in evaluation order.
const RAW_PATTERNS: [(&str, &str); 6] = [
    (r"!!+", "Excessive punctuation"),
    (r"best .{0,20}ever", "Hyperbolic language"),
    (r"amazing .{0,20}perfect", "Unrealistic praise"),
    (r"life.?changing", "Exaggerated impact"),
    (r"in exchange for .{0,40}review", "Incentivized review"),
    (r"received .{0,20}free", "Incentivized review"),
];

/// Compiled pattern table, built once per scorer.
#[derive(Debug, Clone)]
pub struct PatternTable {
    entries: Vec<(Regex, &'static str)>,
}

impl PatternTable {
    /// Compile the built-in pattern set.
    pub fn compile() -> Result<Self> {
        let mut entries = Vec::with_capacity(RAW_PATTERNS.len());
        for (pattern, label) in RAW_PATTERNS {
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|err| RaaError::Pattern {
                    pattern: pattern.to_string(),
                    details: err.to_string(),
                })?;
            entries.push((regex, label));
        }
        Ok(Self { entries })
    }

    /// How many patterns match `text`. Each pattern counts at most once.
    #[must_use]
    pub fn match_count(&self, text: &str) -> usize {
        self.entries
            .iter()
            .filter(|(regex, _)| regex.is_match(text))
            .count()
    }

    /// Labels of every matching pattern, in evaluation order. Duplicate
    /// labels are kept when multiple patterns sharing one label all match.
    #[must_use]
    pub fn matched_labels(&self, text: &str) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|(regex, _)| regex.is_match(text))
            .map(|&(_, label)| label)
            .collect()
    }

    /// The (pattern source, label) pairs in evaluation order.
    #[must_use]
    pub fn entries(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.entries
            .iter()
            .map(|(regex, label)| (regex.as_str(), *label))
    }

    /// Number of patterns in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty (never true for the built-in set).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::PatternTable;

    #[test]
    fn built_in_table_compiles_with_six_entries() {
        let table = PatternTable::compile().expect("built-in patterns must compile");
        assert_eq!(table.len(), 6);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let table = PatternTable::compile().expect("compile");
        assert_eq!(table.match_count("BEST PRODUCT EVER"), 1);
        assert_eq!(table.match_count("Life-Changing stuff"), 1);
    }

    #[test]
    fn each_pattern_counts_once_even_with_repeats() {
        let table = PatternTable::compile().expect("compile");
        // Four exclamation runs, still a single pattern hit.
        assert_eq!(table.match_count("wow!!! great!!! yes!!! buy!!!"), 1);
    }

    #[test]
    fn labels_come_back_in_evaluation_order() {
        let table = PatternTable::compile().expect("compile");
        let labels =
            table.matched_labels("best thing ever!!! received it free in exchange for a review");
        assert_eq!(
            labels,
            vec![
                "Excessive punctuation",
                "Hyperbolic language",
                "Incentivized review",
                "Incentivized review",
            ]
        );
    }

    #[test]
    fn clean_text_matches_nothing() {
        let table = PatternTable::compile().expect("compile");
        assert_eq!(table.match_count("Good product, works fine."), 0);
        assert!(table.matched_labels("Good product, works fine.").is_empty());
    }
}
