use std::collections::BTreeSet;

use crate::model::record::StudentRecord;
use crate::model::summary::{RankedSummary, TiePolicy};
use crate::pipeline::DeriveError;

pub fn percentage_of(total_score: f64, max_total: f64) -> f64 {
    100.0 * total_score / max_total
}

pub fn derive_summary(
    records: &[StudentRecord],
    tie_policy: TiePolicy,
) -> Result<Vec<RankedSummary>, DeriveError> {
    validate_records(records)?;

    let mut order = (0..records.len()).collect::<Vec<_>>();
    let percentages = records
        .iter()
        .map(|r| percentage_of(r.total_score, r.max_total))
        .collect::<Vec<_>>();
    // sort_by is stable: equal percentages keep input order
    order.sort_by(|&a, &b| percentages[b].total_cmp(&percentages[a]));

    let mut out: Vec<RankedSummary> = Vec::with_capacity(records.len());
    for (pos, idx) in order.into_iter().enumerate() {
        let percentage = percentages[idx];
        let rank = match (tie_policy, out.last()) {
            (TiePolicy::Shared, Some(prev)) if prev.percentage == percentage => prev.rank,
            _ => pos as u32 + 1,
        };
        out.push(RankedSummary {
            record: records[idx].clone(),
            percentage,
            rank,
        });
    }
    Ok(out)
}

fn validate_records(records: &[StudentRecord]) -> Result<(), DeriveError> {
    let mut seen = BTreeSet::new();
    for record in records {
        if record.name.trim().is_empty() {
            return Err(DeriveError::invalid(&record.name, "student name is empty"));
        }
        if !(record.max_total.is_finite() && record.max_total > 0.0) {
            return Err(DeriveError::invalid(
                &record.name,
                format!("max_total must be positive, got {}", record.max_total),
            ));
        }
        if !(record.total_score.is_finite() && record.total_score >= 0.0) {
            return Err(DeriveError::invalid(
                &record.name,
                format!(
                    "total_score must be non-negative, got {}",
                    record.total_score
                ),
            ));
        }
        if !seen.insert(record.name.as_str()) {
            return Err(DeriveError::invalid(
                &record.name,
                "student name appears more than once",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_rank.rs"]
mod tests;
