use thiserror::Error;
use tracing::{info, warn};

pub mod stage1_rank;
pub mod stage2_metrics;
pub mod stage3_distribution;
pub mod stage4_insights;
pub mod stage5_views;
pub mod stage6_report;

use crate::model::profile::AnalysisProfile;
use crate::model::record::StudentRecord;
use crate::model::summary::{AggregateMetrics, RankedSummary};
use stage1_rank::derive_summary;
use stage2_metrics::compute_metrics;
use stage3_distribution::{Distribution, build_distribution};
use stage4_insights::{
    ConceptCount, QuestionStat, ScoreMatrix, concept_counts, question_stats, score_matrix,
};

#[derive(Debug, Error, PartialEq)]
pub enum DeriveError {
    #[error("invalid record '{student}': {reason}")]
    InvalidRecord { student: String, reason: String },
    #[error("roster is empty")]
    EmptyRoster,
    #[error("invalid bins: {0}")]
    InvalidBins(String),
}

impl DeriveError {
    pub fn invalid(student: &str, reason: impl Into<String>) -> Self {
        DeriveError::InvalidRecord {
            student: student.to_string(),
            reason: reason.into(),
        }
    }
}

/// Everything the views project from, derived once per roster.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub summaries: Vec<RankedSummary>,
    /// Absent for an empty roster.
    pub metrics: Option<AggregateMetrics>,
    pub distribution: Distribution,
    pub questions: Vec<QuestionStat>,
    pub score_matrix: ScoreMatrix,
    pub concepts: Vec<ConceptCount>,
    pub profile: AnalysisProfile,
}

pub fn build_dashboard(
    records: &[StudentRecord],
    profile: &AnalysisProfile,
) -> Result<Dashboard, DeriveError> {
    let summaries = derive_summary(records, profile.tie_policy)?;

    let metrics = match compute_metrics(&summaries, profile.pass_threshold) {
        Ok(m) => Some(m),
        Err(DeriveError::EmptyRoster) => {
            warn!("roster is empty; aggregate metrics unavailable");
            None
        }
        Err(e) => return Err(e),
    };

    let percentages = summaries.iter().map(|s| s.percentage).collect::<Vec<_>>();
    let distribution = build_distribution(&percentages, &profile.boundaries)?;
    let questions = question_stats(records, profile.question_max)?;
    let score_matrix = score_matrix(&summaries);
    let concepts = concept_counts(records, profile.concept_top_n);

    if let Some(m) = &metrics {
        info!(
            "ranked {} students: average {:.1}%, pass rate {:.1}% (threshold {})",
            m.count, m.average_percentage, m.pass_rate, m.pass_threshold
        );
    }

    Ok(Dashboard {
        summaries,
        metrics,
        distribution,
        questions,
        score_matrix,
        concepts,
        profile: profile.clone(),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/dashboard.rs"]
mod tests;
