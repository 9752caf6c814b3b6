use serde::Serialize;

use crate::model::summary::{AggregateMetrics, RankedSummary};
use crate::model::view::View;
use crate::pipeline::Dashboard;
use crate::pipeline::stage3_distribution::Distribution;
use crate::pipeline::stage4_insights::{ConceptCount, QuestionStat, ScoreMatrix, hard_questions};
use crate::report::{format_percentage, format_score};

/// Podium cards are laid out second, first, third.
const PODIUM_POSITIONS: [usize; 3] = [1, 0, 2];

#[derive(Debug, Clone, Default)]
pub struct ViewRequest {
    pub student: Option<String>,
    pub min_percentage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ViewContent {
    Leaderboard(LeaderboardView),
    Analytics(AnalyticsView),
    Insights(InsightsView),
    Profile(ProfileView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    pub rank: u32,
    pub student: String,
    pub score: String,
    pub percentage: f64,
    pub percentage_display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardView {
    pub podium: Vec<LeaderboardRow>,
    pub rows: Vec<LeaderboardRow>,
    pub showing: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsView {
    pub metrics: Option<AggregateMetrics>,
    pub question_averages: Vec<QuestionStat>,
    pub score_matrix: ScoreMatrix,
    pub distribution: Distribution,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsView {
    pub hard_question_ratio: f64,
    pub hard_questions: Vec<QuestionStat>,
    pub concepts: Vec<ConceptCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionLine {
    pub question: String,
    pub score: f64,
    pub max_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileCard {
    pub student: String,
    pub rank: u32,
    pub score: String,
    pub percentage: f64,
    pub percentage_display: String,
    pub questions: Vec<QuestionLine>,
    pub concepts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    /// Every selectable student, in rank order.
    pub students: Vec<String>,
    pub selected: Option<ProfileCard>,
}

pub fn project_view(view: View, dashboard: &Dashboard, request: &ViewRequest) -> ViewContent {
    match view {
        View::Leaderboard => ViewContent::Leaderboard(leaderboard(dashboard, request)),
        View::Analytics => ViewContent::Analytics(AnalyticsView {
            metrics: dashboard.metrics.clone(),
            question_averages: dashboard.questions.clone(),
            score_matrix: dashboard.score_matrix.clone(),
            distribution: dashboard.distribution.clone(),
        }),
        View::Insights => ViewContent::Insights(InsightsView {
            hard_question_ratio: dashboard.profile.hard_question_ratio,
            hard_questions: hard_questions(
                &dashboard.questions,
                dashboard.profile.hard_question_ratio,
            ),
            concepts: dashboard.concepts.clone(),
        }),
        View::Profile => ViewContent::Profile(profile(dashboard, request)),
    }
}

fn leaderboard(dashboard: &Dashboard, request: &ViewRequest) -> LeaderboardView {
    let summaries = &dashboard.summaries;
    let podium = PODIUM_POSITIONS
        .iter()
        .filter_map(|&pos| summaries.get(pos))
        .map(row_of)
        .collect();

    let min = request.min_percentage.unwrap_or(f64::NEG_INFINITY);
    let rows = summaries
        .iter()
        .filter(|s| s.percentage >= min)
        .map(row_of)
        .collect::<Vec<_>>();

    LeaderboardView {
        podium,
        showing: rows.len(),
        rows,
        total: summaries.len(),
    }
}

fn profile(dashboard: &Dashboard, request: &ViewRequest) -> ProfileView {
    let students = dashboard
        .summaries
        .iter()
        .map(|s| s.name().to_string())
        .collect();
    let selected = request
        .student
        .as_deref()
        .and_then(|name| find_student(&dashboard.summaries, name))
        .map(|s| ProfileCard {
            student: s.name().to_string(),
            rank: s.rank,
            score: format_score(s.record.total_score, s.record.max_total),
            percentage: s.percentage,
            percentage_display: format_percentage(s.percentage),
            questions: s
                .record
                .question_scores
                .iter()
                .map(|q| QuestionLine {
                    question: q.question.clone(),
                    score: q.score,
                    max_score: dashboard.profile.question_max,
                })
                .collect(),
            concepts: s.record.concepts.clone(),
        });
    ProfileView { students, selected }
}

pub fn find_student<'a>(summaries: &'a [RankedSummary], name: &str) -> Option<&'a RankedSummary> {
    let name = name.trim();
    summaries.iter().find(|s| s.name() == name)
}

fn row_of(s: &RankedSummary) -> LeaderboardRow {
    LeaderboardRow {
        rank: s.rank,
        student: s.name().to_string(),
        score: format_score(s.record.total_score, s.record.max_total),
        percentage: s.percentage,
        percentage_display: format_percentage(s.percentage),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_views.rs"]
mod tests;
