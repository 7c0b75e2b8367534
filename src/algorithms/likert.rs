use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::domain::HUE_ORDER;

/// Column carrying the respondent identifier in the Likert exports.
const RESPONDENT_COLUMN: &str = "user id";

/// Prefix marking the summary rows embedded at the bottom of the exports.
const SUMMARY_PREFIX: &str = "mean";

/// Normalized 1-5 rating distribution plus mean for one hue.
///
/// `dist` sums to 1 when the hue has responses and is all-zero otherwise.
/// `mean` is `None` for a hue without responses; a zero mean is impossible
/// on the 1-5 scale, so `None` unambiguously signals "no data" and must
/// not be collapsed to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikertSummary {
    pub dist: [f64; 5],
    pub mean: Option<f64>,
}

/// Presentation order for per-hue Likert summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikertSort {
    /// The fixed semantic hue order; no computation involved.
    ByHue,
    /// Descending mean, hues without data last.
    ByMeanDescending,
}

/// Build per-hue rating distributions from Likert records.
///
/// Rows whose respondent column is blank or begins with the summary
/// marker are excluded. Within each `"hue {n}"` column, ratings outside
/// 1-5 (or unparsable cells) are excluded from both the counts and the
/// denominator. Ratings are truncated toward zero before the range check,
/// matching the exports' integer coercion.
pub fn process_likert_records(records: &[Value]) -> HashMap<i64, LikertSummary> {
    let respondents: Vec<&Value> = records.iter().filter(|r| is_respondent_row(r)).collect();

    let mut summaries = HashMap::new();
    for column in hue_columns(records) {
        let Some(hue) = parse_hue_column(&column) else {
            continue;
        };

        let mut counts = [0u32; 5];
        for row in &respondents {
            if let Some(rating) = rating_value(row, &column) {
                counts[rating as usize - 1] += 1;
            }
        }

        summaries.insert(hue, summarize(&counts));
    }

    summaries
}

/// Hue display order for a summary set.
pub fn sorted_hues(data: &HashMap<i64, LikertSummary>, sort: LikertSort) -> Vec<i64> {
    let mut hues = HUE_ORDER.to_vec();
    if sort == LikertSort::ByMeanDescending {
        hues.sort_by(|a, b| {
            let mean_a = data.get(a).and_then(|s| s.mean).unwrap_or(f64::NEG_INFINITY);
            let mean_b = data.get(b).and_then(|s| s.mean).unwrap_or(f64::NEG_INFINITY);
            mean_b.partial_cmp(&mean_a).unwrap_or(Ordering::Equal)
        });
    }
    hues
}

fn summarize(counts: &[u32; 5]) -> LikertSummary {
    let total: u32 = counts.iter().sum();
    if total == 0 {
        return LikertSummary {
            dist: [0.0; 5],
            mean: None,
        };
    }

    let mut dist = [0.0; 5];
    for (slot, &count) in dist.iter_mut().zip(counts) {
        *slot = count as f64 / total as f64;
    }
    let weighted: f64 = counts
        .iter()
        .enumerate()
        .map(|(i, &count)| (i as f64 + 1.0) * count as f64)
        .sum();

    LikertSummary {
        dist,
        mean: Some(weighted / total as f64),
    }
}

/// A row counts as a respondent when its identifier is present, non-blank,
/// and not a summary marker.
fn is_respondent_row(record: &Value) -> bool {
    match record.get(RESPONDENT_COLUMN) {
        Some(Value::String(id)) => {
            let id = id.trim();
            !id.is_empty() && !id.to_lowercase().starts_with(SUMMARY_PREFIX)
        }
        Some(Value::Number(_)) => true,
        _ => false,
    }
}

/// Hue column names, read from the first record's header set.
fn hue_columns(records: &[Value]) -> Vec<String> {
    records
        .first()
        .and_then(|record| record.as_object())
        .map(|object| {
            object
                .keys()
                .filter(|key| key.starts_with("hue"))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

fn parse_hue_column(column: &str) -> Option<i64> {
    column.strip_prefix("hue ")?.trim().parse().ok()
}

/// In-range rating for one cell, truncated toward zero.
fn rating_value(record: &Value, column: &str) -> Option<u8> {
    let raw = match record.get(column)? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    let rating = raw.trunc();
    if (1.0..=5.0).contains(&rating) {
        Some(rating as u8)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn likert_rows(ratings: &[i64]) -> Vec<Value> {
        ratings
            .iter()
            .enumerate()
            .map(|(i, &rating)| json!({"user id": format!("P{}", i + 1), "hue 30": rating}))
            .collect()
    }

    #[test]
    fn test_distribution_and_mean() {
        let data = process_likert_records(&likert_rows(&[1, 1, 5, 5, 5]));

        let summary = &data[&30];
        assert_eq!(summary.dist, [0.4, 0.0, 0.0, 0.0, 0.6]);
        assert_eq!(summary.mean, Some(3.4));
    }

    /// A column with every cell excluded keeps a zero distribution and a
    /// null mean; the two zero-data encodings must not be conflated.
    #[test]
    fn test_all_excluded_column_has_null_mean() {
        let rows = vec![
            json!({"user id": "P1", "hue 30": 0}),
            json!({"user id": "P2", "hue 30": 9}),
            json!({"user id": "P3", "hue 30": "n/a"}),
        ];

        let data = process_likert_records(&rows);
        let summary = &data[&30];
        assert_eq!(summary.dist, [0.0; 5]);
        assert_eq!(summary.mean, None);
    }

    #[test]
    fn test_summary_rows_excluded() {
        let rows = vec![
            json!({"user id": "P1", "hue 30": 4}),
            json!({"user id": "Mean", "hue 30": 3}),
            json!({"user id": "mean score", "hue 30": 1}),
            json!({"user id": "  ", "hue 30": 5}),
        ];

        let data = process_likert_records(&rows);
        let summary = &data[&30];
        assert_eq!(summary.mean, Some(4.0));
        assert_eq!(summary.dist[3], 1.0);
    }

    #[test]
    fn test_out_of_range_excluded_from_denominator() {
        let data = process_likert_records(&likert_rows(&[2, 2, 7]));

        let summary = &data[&30];
        assert_eq!(summary.dist, [0.0, 1.0, 0.0, 0.0, 0.0]);
        assert_eq!(summary.mean, Some(2.0));
    }

    #[test]
    fn test_multiple_hue_columns() {
        let rows = vec![
            json!({"user id": "P1", "hue 30": 5, "hue 240": 1, "device": "Xreal"}),
            json!({"user id": "P2", "hue 30": 3, "hue 240": 2, "device": "Xreal"}),
        ];

        let data = process_likert_records(&rows);
        assert_eq!(data.len(), 2);
        assert_eq!(data[&30].mean, Some(4.0));
        assert_eq!(data[&240].mean, Some(1.5));
    }

    #[test]
    fn test_sort_by_hue_is_fixed_order() {
        let data = HashMap::new();
        assert_eq!(sorted_hues(&data, LikertSort::ByHue), HUE_ORDER.to_vec());
    }

    #[test]
    fn test_sort_by_mean_puts_missing_last() {
        let mut data = HashMap::new();
        data.insert(
            60,
            LikertSummary {
                dist: [0.0, 0.0, 0.0, 0.0, 1.0],
                mean: Some(5.0),
            },
        );
        data.insert(
            240,
            LikertSummary {
                dist: [0.0, 0.0, 1.0, 0.0, 0.0],
                mean: Some(3.0),
            },
        );
        data.insert(
            30,
            LikertSummary {
                dist: [0.0; 5],
                mean: None,
            },
        );

        let order = sorted_hues(&data, LikertSort::ByMeanDescending);
        assert_eq!(order[0], 60);
        assert_eq!(order[1], 240);
        // Hues without data (including hue 30's null mean) follow, keeping
        // the semantic order among themselves.
        let tail: Vec<i64> = order[2..].to_vec();
        assert_eq!(tail, vec![30, 45, 75, 135, 180, 195, 270, 285, 315, 345]);
    }
}
