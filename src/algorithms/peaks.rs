use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::domain::{Condition, Metric, ScorePoint};

/// Peak score points for one condition series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionPeaks {
    pub clarity: Option<ScorePoint>,
    pub comfort: Option<ScorePoint>,
}

/// Closed inclusive range of peak stimulus values across conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakRange {
    pub min: i64,
    pub max: i64,
}

/// Peak summary across a set of condition series.
///
/// `clarity_range`/`comfort_range` are `None` when no condition has data;
/// that is the "unavailable" marker, never a fabricated numeric range.
#[derive(Debug, Clone, Default)]
pub struct PeakReport {
    pub details: HashMap<Condition, ConditionPeaks>,
    pub clarity_range: Option<PeakRange>,
    pub comfort_range: Option<PeakRange>,
}

/// The maximum-scoring point of a series for one metric.
///
/// Ties resolve to the first point in ascending-value order, so the result
/// is deterministic for any input.
pub fn peak_point(points: &[ScorePoint], metric: Metric) -> Option<ScorePoint> {
    let mut best: Option<ScorePoint> = None;
    for point in points {
        let replace = match best {
            None => true,
            Some(current) => metric.of(point) > metric.of(&current),
        };
        if replace {
            best = Some(*point);
        }
    }
    best
}

/// Summarize peaks across all condition series.
///
/// Pure and stateless: conditions, hue, and variation type can change on
/// every query, so the report is recomputed from its input each time.
/// Conditions with an empty series contribute nothing to the details or
/// the ranges.
pub fn find_peaks(series: &HashMap<Condition, Vec<ScorePoint>>) -> PeakReport {
    let mut details = HashMap::new();
    let mut clarity_values = Vec::new();
    let mut comfort_values = Vec::new();

    for (condition, points) in series {
        if points.is_empty() {
            continue;
        }

        let peaks = ConditionPeaks {
            clarity: peak_point(points, Metric::Clarity),
            comfort: peak_point(points, Metric::Comfort),
        };
        if let Some(point) = peaks.clarity {
            clarity_values.push(point.value);
        }
        if let Some(point) = peaks.comfort {
            comfort_values.push(point.value);
        }
        details.insert(condition.clone(), peaks);
    }

    PeakReport {
        details,
        clarity_range: range_of(&clarity_values),
        comfort_range: range_of(&comfort_values),
    }
}

fn range_of(values: &[i64]) -> Option<PeakRange> {
    let min = values.iter().copied().min()?;
    let max = values.iter().copied().max()?;
    Some(PeakRange { min, max })
}
