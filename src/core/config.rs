//! TOML configuration with built-in defaults and range validation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::errors::{RaaError, Result};

/// Lowest accepted `min_reviews`.
pub const MIN_REVIEWS_FLOOR: u32 = 10;
/// Highest accepted `min_reviews`.
pub const MIN_REVIEWS_CEIL: u32 = 100;
/// Lowest accepted confidence threshold.
pub const THRESHOLD_FLOOR: f64 = 0.50;
/// Highest accepted confidence threshold.
pub const THRESHOLD_CEIL: f64 = 0.95;

/// Analysis knobs: how many reviews to collect and the fake-score threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of reviews the collector is asked to produce.
    pub min_reviews: u32,
    /// Scores strictly above this are classified fake.
    pub threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_reviews: 30,
            threshold: 0.7,
        }
    }
}

/// Export settings for the CSV report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Output filename for the detailed CSV results.
    pub filename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename: "review_analysis.csv".to_string(),
        }
    }
}

/// Top-level configuration, loaded from TOML or built from defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Analysis knobs.
    pub analysis: AnalysisConfig,
    /// Export settings.
    pub export: ExportConfig,
}

impl AnalyzerConfig {
    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RaaError::MissingConfig {
                path: path.to_path_buf(),
            });
        }
        let raw = std::fs::read_to_string(path).map_err(|source| RaaError::io(path, source))?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Reject out-of-range knobs before any analysis runs.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_REVIEWS_FLOOR..=MIN_REVIEWS_CEIL).contains(&self.analysis.min_reviews) {
            return Err(RaaError::InvalidConfig {
                details: format!(
                    "min_reviews must be in {MIN_REVIEWS_FLOOR}..={MIN_REVIEWS_CEIL}, got {}",
                    self.analysis.min_reviews
                ),
            });
        }
        if !(THRESHOLD_FLOOR..=THRESHOLD_CEIL).contains(&self.analysis.threshold) {
            return Err(RaaError::InvalidConfig {
                details: format!(
                    "threshold must be in {THRESHOLD_FLOOR}..={THRESHOLD_CEIL}, got {}",
                    self.analysis.threshold
                ),
            });
        }
        if self.export.filename.is_empty() {
            return Err(RaaError::InvalidConfig {
                details: "export filename must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|err| RaaError::Serialization {
            context: "toml",
            details: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::AnalyzerConfig;
    use crate::core::errors::RaaError;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = AnalyzerConfig::default();
        config.validate().expect("defaults must validate");
        assert_eq!(config.analysis.min_reviews, 30);
        assert!((config.analysis.threshold - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.export.filename, "review_analysis.csv");
    }

    #[test]
    fn load_rejects_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = AnalyzerConfig::load(&dir.path().join("nope.toml"))
            .expect_err("missing file must error");
        assert_eq!(err.code(), "RAA-1002");
    }

    #[test]
    fn load_accepts_partial_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("raa.toml");
        let mut file = std::fs::File::create(&path).expect("create");
        writeln!(file, "[analysis]\nthreshold = 0.8").expect("write");
        let config = AnalyzerConfig::load(&path).expect("partial config must load");
        assert!((config.analysis.threshold - 0.8).abs() < f64::EPSILON);
        assert_eq!(config.analysis.min_reviews, 30);
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let mut config = AnalyzerConfig::default();
        config.analysis.threshold = 0.2;
        let err = config.validate().expect_err("0.2 is below the floor");
        assert!(matches!(err, RaaError::InvalidConfig { .. }));
    }

    #[test]
    fn out_of_range_min_reviews_is_rejected() {
        let mut config = AnalyzerConfig::default();
        config.analysis.min_reviews = 5;
        assert!(config.validate().is_err());
        config.analysis.min_reviews = 101;
        assert!(config.validate().is_err());
    }
}
