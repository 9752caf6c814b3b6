use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::summary::TiePolicy;

pub const DEFAULT_PASS_THRESHOLD: f64 = 60.0;
pub const DEFAULT_QUESTION_MAX: f64 = 5.0;
pub const DEFAULT_HARD_QUESTION_RATIO: f64 = 0.6;
pub const DEFAULT_CONCEPT_TOP_N: usize = 10;

pub fn default_boundaries() -> Vec<f64> {
    vec![0.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0]
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("config parse error in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunables for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisProfile {
    pub pass_threshold: f64,
    pub boundaries: Vec<f64>,
    pub question_max: f64,
    pub hard_question_ratio: f64,
    pub concept_top_n: usize,
    pub tie_policy: TiePolicy,
}

impl Default for AnalysisProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

impl AnalysisProfile {
    pub fn default_v1() -> Self {
        Self {
            pass_threshold: DEFAULT_PASS_THRESHOLD,
            boundaries: default_boundaries(),
            question_max: DEFAULT_QUESTION_MAX,
            hard_question_ratio: DEFAULT_HARD_QUESTION_RATIO,
            concept_top_n: DEFAULT_CONCEPT_TOP_N,
            tie_policy: TiePolicy::Ordinal,
        }
    }

    /// Fields missing from the file keep their `default_v1` values.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let profile: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.display().to_string(),
            source,
        })?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn with_overrides(
        mut self,
        pass_threshold: Option<f64>,
        tie_policy: Option<TiePolicy>,
    ) -> Result<Self, ConfigError> {
        if let Some(threshold) = pass_threshold {
            self.pass_threshold = threshold;
        }
        if let Some(policy) = tie_policy {
            self.tie_policy = policy;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.pass_threshold) {
            return Err(ConfigError::Invalid(format!(
                "pass_threshold must be within [0, 100], got {}",
                self.pass_threshold
            )));
        }
        if !(self.question_max.is_finite() && self.question_max > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "question_max must be positive, got {}",
                self.question_max
            )));
        }
        if !(self.hard_question_ratio > 0.0 && self.hard_question_ratio <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "hard_question_ratio must be within (0, 1], got {}",
                self.hard_question_ratio
            )));
        }
        check_boundaries(&self.boundaries).map_err(ConfigError::Invalid)
    }
}

pub fn check_boundaries(boundaries: &[f64]) -> Result<(), String> {
    if boundaries.len() < 2 {
        return Err(format!(
            "at least two bin boundaries are required, got {}",
            boundaries.len()
        ));
    }
    if boundaries.iter().any(|b| !b.is_finite()) {
        return Err("bin boundaries must be finite".to_string());
    }
    if boundaries.windows(2).any(|w| w[0] >= w[1]) {
        return Err("bin boundaries must be strictly ascending".to_string());
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/profile.rs"]
mod tests;
