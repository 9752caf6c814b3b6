use crate::model::summary::{AggregateMetrics, RankedSummary, Spread};
use crate::pipeline::DeriveError;
use crate::report::{mean, median, p10, p90};

/// Input order does not matter; the top entry is found by percentage.
pub fn compute_metrics(
    summaries: &[RankedSummary],
    pass_threshold: f64,
) -> Result<AggregateMetrics, DeriveError> {
    let top = top_summary(summaries)?;
    let percentages = summaries.iter().map(|s| s.percentage).collect::<Vec<_>>();

    let pass_count = percentages.iter().filter(|&&p| p >= pass_threshold).count();
    let count = summaries.len();

    Ok(AggregateMetrics {
        count,
        average_percentage: mean(&percentages),
        top_score: top.record.total_score,
        top_max_total: top.record.max_total,
        top_score_fraction: top.score_fraction(),
        pass_threshold,
        pass_count,
        pass_rate: 100.0 * pass_count as f64 / count as f64,
        spread: spread_of(&percentages),
    })
}

/// Highest percentage, first listed on ties. Does not depend on slice order.
pub fn top_summary(summaries: &[RankedSummary]) -> Result<&RankedSummary, DeriveError> {
    summaries
        .iter()
        .reduce(|best, s| if s.percentage > best.percentage { s } else { best })
        .ok_or(DeriveError::EmptyRoster)
}

fn spread_of(percentages: &[f64]) -> Spread {
    let min = percentages.iter().copied().fold(f64::INFINITY, f64::min);
    let max = percentages.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Spread {
        min,
        p10: p10(percentages),
        median: median(percentages),
        p90: p90(percentages),
        max,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_metrics.rs"]
mod tests;
