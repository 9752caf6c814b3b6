use serde::Serialize;
use tracing::warn;

use crate::model::profile::check_boundaries;
use crate::pipeline::DeriveError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub labels: Vec<String>,
    pub counts: Vec<usize>,
}

/// Counts per `[b_i, b_{i+1})` bucket. Values below the first boundary land in
/// the first bucket and values at or above the last inner boundary land in the
/// last one.
pub fn bucketize(percentages: &[f64], boundaries: &[f64]) -> Result<Vec<usize>, DeriveError> {
    check_boundaries(boundaries).map_err(DeriveError::InvalidBins)?;

    let n_buckets = boundaries.len() - 1;
    let inner = &boundaries[1..n_buckets];
    let mut counts = vec![0usize; n_buckets];
    let mut skipped = 0usize;

    for &p in percentages {
        if !p.is_finite() {
            skipped += 1;
            continue;
        }
        let idx = inner.partition_point(|&b| b <= p);
        counts[idx] += 1;
    }

    if skipped > 0 {
        warn!("bucketize skipped {} non-finite values", skipped);
    }
    Ok(counts)
}

pub fn bucket_labels(boundaries: &[f64]) -> Vec<String> {
    boundaries
        .windows(2)
        .map(|w| format!("{}-{}%", format_bound(w[0]), format_bound(w[1])))
        .collect()
}

pub fn build_distribution(
    percentages: &[f64],
    boundaries: &[f64],
) -> Result<Distribution, DeriveError> {
    let counts = bucketize(percentages, boundaries)?;
    Ok(Distribution {
        labels: bucket_labels(boundaries),
        counts,
    })
}

fn format_bound(b: f64) -> String {
    if b.fract() == 0.0 {
        format!("{}", b as i64)
    } else {
        format!("{}", b)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_distribution.rs"]
mod tests;
