use serde::{Deserialize, Serialize};

use crate::model::record::StudentRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSummary {
    #[serde(flatten)]
    pub record: StudentRecord,
    pub percentage: f64,
    pub rank: u32,
}

impl RankedSummary {
    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn score_fraction(&self) -> f64 {
        self.record.total_score / self.record.max_total
    }
}

/// How equal percentages are ranked. Output order is the same for both; only
/// the rank numbers differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TiePolicy {
    /// 1, 2, 3, 4: first listed wins.
    #[default]
    Ordinal,
    /// 1, 2, 2, 4: competition ranking.
    Shared,
}

impl TiePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            TiePolicy::Ordinal => "ordinal",
            TiePolicy::Shared => "shared",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateMetrics {
    pub count: usize,
    pub average_percentage: f64,
    pub top_score: f64,
    pub top_max_total: f64,
    pub top_score_fraction: f64,
    pub pass_threshold: f64,
    pub pass_count: usize,
    pub pass_rate: f64,
    pub spread: Spread,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spread {
    pub min: f64,
    pub p10: f64,
    pub median: f64,
    pub p90: f64,
    pub max: f64,
}
