use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::model::record::{StudentRecord, question_order};
use crate::model::summary::RankedSummary;
use crate::pipeline::DeriveError;
use crate::report::mean;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionStat {
    pub question: String,
    pub avg_score: f64,
    pub max_score: f64,
    pub answered: usize,
    /// `avg_score / max_score`.
    pub avg_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConceptCount {
    pub concept: String,
    pub count: usize,
}

/// Student by question scores for the heatmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreMatrix {
    pub questions: Vec<String>,
    pub rows: Vec<ScoreMatrixRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreMatrixRow {
    pub student: String,
    /// Aligned with `ScoreMatrix::questions`; 0 where unanswered.
    pub scores: Vec<f64>,
}

pub fn question_stats(
    records: &[StudentRecord],
    question_max: f64,
) -> Result<Vec<QuestionStat>, DeriveError> {
    let mut by_question: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for record in records {
        for q in &record.question_scores {
            if !(q.score.is_finite() && (0.0..=question_max).contains(&q.score)) {
                return Err(DeriveError::invalid(
                    &record.name,
                    format!(
                        "{} score {} outside [0, {}]",
                        q.question, q.score, question_max
                    ),
                ));
            }
            by_question.entry(q.question.as_str()).or_default().push(q.score);
        }
    }

    let mut stats = by_question
        .into_iter()
        .map(|(question, scores)| {
            let avg_score = mean(&scores);
            QuestionStat {
                question: question.to_string(),
                avg_score,
                max_score: question_max,
                answered: scores.len(),
                avg_ratio: avg_score / question_max,
            }
        })
        .collect::<Vec<_>>();
    stats.sort_by(|a, b| question_order(&a.question, &b.question));
    Ok(stats)
}

/// Questions averaging below `ratio` of the maximum, hardest first.
pub fn hard_questions(stats: &[QuestionStat], ratio: f64) -> Vec<QuestionStat> {
    let mut hard = stats
        .iter()
        .filter(|s| s.avg_ratio < ratio)
        .cloned()
        .collect::<Vec<_>>();
    hard.sort_by(|a, b| {
        a.avg_ratio
            .total_cmp(&b.avg_ratio)
            .then_with(|| question_order(&a.question, &b.question))
    });
    hard
}

pub fn concept_counts(records: &[StudentRecord], top_n: usize) -> Vec<ConceptCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        for concept in &record.concepts {
            *counts.entry(concept.as_str()).or_insert(0) += 1;
        }
    }

    let mut out = counts
        .into_iter()
        .map(|(concept, count)| ConceptCount {
            concept: concept.to_string(),
            count,
        })
        .collect::<Vec<_>>();
    // BTreeMap already yields names ascending; stable sort keeps that on ties
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out.truncate(top_n);
    out
}

/// Rows follow the order of `summaries` (rank order from `derive_summary`).
pub fn score_matrix(summaries: &[RankedSummary]) -> ScoreMatrix {
    let mut questions = summaries
        .iter()
        .flat_map(|s| s.record.question_scores.iter().map(|q| q.question.as_str()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect::<Vec<_>>();
    questions.sort_by(|a, b| question_order(a, b));

    let rows = summaries
        .iter()
        .map(|s| ScoreMatrixRow {
            student: s.name().to_string(),
            scores: questions
                .iter()
                .map(|q| s.record.question_score(q).unwrap_or(0.0))
                .collect(),
        })
        .collect();

    ScoreMatrix { questions, rows }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_insights.rs"]
mod tests;
