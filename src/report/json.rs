use serde::Serialize;

use crate::model::summary::{AggregateMetrics, RankedSummary};
use crate::pipeline::Dashboard;
use crate::pipeline::stage3_distribution::Distribution;
use crate::pipeline::stage4_insights::{ConceptCount, QuestionStat, ScoreMatrix, hard_questions};

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputMeta {
    pub source: String,
    pub n_students: usize,
    pub pass_threshold: f64,
    pub tie_policy: String,
    pub question_max: f64,
}

#[derive(Debug, Serialize)]
struct SummaryJson<'a> {
    tool: &'a ToolMeta,
    input: &'a InputMeta,
    /// `null` when the roster is empty.
    metrics: Option<&'a AggregateMetrics>,
    distribution: &'a Distribution,
    questions: &'a [QuestionStat],
    hard_questions: Vec<QuestionStat>,
    score_matrix: &'a ScoreMatrix,
    concepts: &'a [ConceptCount],
    ranking: &'a [RankedSummary],
}

pub fn render_summary_json(
    dashboard: &Dashboard,
    tool: &ToolMeta,
    input: &InputMeta,
) -> Result<String, serde_json::Error> {
    let doc = SummaryJson {
        tool,
        input,
        metrics: dashboard.metrics.as_ref(),
        distribution: &dashboard.distribution,
        questions: &dashboard.questions,
        hard_questions: hard_questions(
            &dashboard.questions,
            dashboard.profile.hard_question_ratio,
        ),
        score_matrix: &dashboard.score_matrix,
        concepts: &dashboard.concepts,
        ranking: &dashboard.summaries,
    };
    serde_json::to_string_pretty(&doc)
}
