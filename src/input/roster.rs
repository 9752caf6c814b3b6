use std::collections::BTreeMap;
use std::io::Read;

use serde::Deserialize;
use serde::de::IgnoredAny;
use serde_json::Value;
use tracing::{debug, warn};

use crate::input::InputError;
use crate::model::record::{QuestionScore, StudentRecord, is_question_id, question_order};

// Flat row shape used by exported class summaries:
// {"student": "...", "total_score": 45, "max_total": 50, "percentage": 90.0, "rank": 1, "Q1": 4.5, ...}
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(alias = "name")]
    student: String,
    total_score: f64,
    max_total: f64,
    #[serde(default)]
    concepts: Vec<String>,
    // stale exports carry these in any type; never read
    #[serde(default)]
    percentage: Option<IgnoredAny>,
    #[serde(default)]
    rank: Option<IgnoredAny>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

pub fn parse_roster<R: Read>(reader: R) -> Result<Vec<StudentRecord>, InputError> {
    let rows: Vec<RawRecord> = serde_json::from_reader(reader)?;
    rows.into_iter()
        .enumerate()
        .map(|(idx, raw)| convert_row(idx + 1, raw))
        .collect()
}

fn convert_row(row_no: usize, raw: RawRecord) -> Result<StudentRecord, InputError> {
    if raw.percentage.is_some() || raw.rank.is_some() {
        debug!(
            "row {} ({}): ignoring supplied percentage/rank; both are recomputed",
            row_no, raw.student
        );
    }

    let mut question_scores = Vec::new();
    for (key, value) in raw.extra {
        if !is_question_id(&key) {
            warn!("row {} ({}): ignoring unknown field '{}'", row_no, raw.student, key);
            continue;
        }
        let score = value.as_f64().ok_or_else(|| {
            InputError::InvalidInput(format!(
                "row {} ({}): question {} is not a number",
                row_no, raw.student, key
            ))
        })?;
        question_scores.push(QuestionScore {
            question: key,
            score,
        });
    }
    question_scores.sort_by(|a, b| question_order(&a.question, &b.question));

    Ok(StudentRecord {
        name: raw.student.trim().to_string(),
        total_score: raw.total_score,
        max_total: raw.max_total,
        question_scores,
        concepts: raw
            .concepts
            .into_iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect(),
    })
}
