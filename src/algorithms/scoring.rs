use std::collections::BTreeMap;

use crate::core::domain::{
    ResponseCounts, Rounding, ScorePoint, Stimulus, SurveyRow, STIMULUS_GRID,
};

/// Group rows by the varying stimulus value and sum their counters.
///
/// Values outside the 20..=100 step-10 grid are discarded silently; they
/// are stray entries, not errors. Buckets are created lazily on first
/// contribution, so absent grid values simply have no bucket.
pub fn aggregate_rows(rows: &[SurveyRow], analysis: Stimulus) -> BTreeMap<i64, ResponseCounts> {
    let mut buckets: BTreeMap<i64, ResponseCounts> = BTreeMap::new();

    for row in rows {
        let value = row.stimulus_value(analysis);
        if !STIMULUS_GRID.contains(&value) {
            log::debug!("discarding off-grid {} value {}", analysis, value);
            continue;
        }
        buckets.entry(value).or_default().absorb(row);
    }

    buckets
}

/// Convert summed buckets into score points, ascending by stimulus value.
///
/// Every bucket yields exactly one point. A bucket whose counters are all
/// zero scores 0/0, which is a meaningful observation ("no preference
/// expressed"), not missing data.
pub fn compute_scores(
    buckets: &BTreeMap<i64, ResponseCounts>,
    rounding: Rounding,
) -> Vec<ScorePoint> {
    buckets
        .iter()
        .map(|(&value, counts)| ScorePoint {
            value,
            clarity: rounding.apply(counts.clarity()),
            comfort: rounding.apply(counts.comfort()),
        })
        .collect()
}
