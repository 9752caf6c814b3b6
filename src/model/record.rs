use std::cmp::Ordering;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionScore {
    pub question: String,
    pub score: f64,
}

/// One student's exam result as supplied by a roster source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    #[serde(rename = "student")]
    pub name: String,
    pub total_score: f64,
    pub max_total: f64,
    pub question_scores: Vec<QuestionScore>,
    pub concepts: Vec<String>,
}

impl StudentRecord {
    pub fn new(name: impl Into<String>, total_score: f64, max_total: f64) -> Self {
        Self {
            name: name.into(),
            total_score,
            max_total,
            question_scores: Vec::new(),
            concepts: Vec::new(),
        }
    }

    pub fn with_questions(mut self, scores: &[(&str, f64)]) -> Self {
        self.question_scores = scores
            .iter()
            .map(|&(question, score)| QuestionScore {
                question: question.to_string(),
                score,
            })
            .collect();
        self.question_scores
            .sort_by(|a, b| question_order(&a.question, &b.question));
        self
    }

    pub fn with_concepts(mut self, concepts: &[&str]) -> Self {
        self.concepts = concepts.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn question_score(&self, question: &str) -> Option<f64> {
        self.question_scores
            .iter()
            .find(|q| q.question == question)
            .map(|q| q.score)
    }
}

/// Question ids compare by their alphabetic prefix, then numerically by the
/// trailing digits, so `Q2` sorts before `Q10`.
pub fn question_order(a: &str, b: &str) -> Ordering {
    let (pa, na) = split_question_id(a);
    let (pb, nb) = split_question_id(b);
    match pa.cmp(pb) {
        Ordering::Equal => {}
        other => return other,
    }
    match (na, nb) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        _ => a.cmp(b),
    }
}

pub fn is_question_id(key: &str) -> bool {
    let (prefix, number) = split_question_id(key);
    number.is_some() && prefix.len() == 1 && prefix.eq_ignore_ascii_case("q")
}

fn split_question_id(id: &str) -> (&str, Option<u64>) {
    let digits_at = id
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i);
    match digits_at {
        Some(i) => (&id[..i], id[i..].parse().ok()),
        None => (id, None),
    }
}
