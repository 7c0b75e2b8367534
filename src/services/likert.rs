use std::collections::HashMap;

use anyhow::{Context, Result};

use crate::algorithms::likert::{process_likert_records, LikertSummary};
use crate::core::domain::Metric;
use crate::datasource::DataSource;
use crate::io::loaders::likert_resource_name;

/// Per-hue Likert distributions for one metric.
///
/// A missing or non-CSV export is an error the UI shows as a non-fatal
/// "no data available" state; nothing here aborts the process.
pub async fn get_likert_data(
    source: &dyn DataSource,
    metric: Metric,
) -> Result<HashMap<i64, LikertSummary>> {
    let resource = likert_resource_name(metric);
    let records = source
        .fetch_rows(&resource)
        .await
        .with_context(|| format!("Failed to fetch Likert resource {resource}"))?;

    Ok(process_likert_records(&records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::SampleSource;
    use serde_json::json;

    #[tokio::test]
    async fn test_likert_query_end_to_end() {
        let mut source = SampleSource::new();
        source.insert(
            likert_resource_name(Metric::Clarity),
            vec![
                json!({"user id": "P1", "hue 30": 1, "hue 60": 4}),
                json!({"user id": "P2", "hue 30": 1, "hue 60": 5}),
                json!({"user id": "P3", "hue 30": 5, "hue 60": 5}),
                json!({"user id": "P4", "hue 30": 5, "hue 60": ""}),
                json!({"user id": "P5", "hue 30": 5, "hue 60": ""}),
                json!({"user id": "mean", "hue 30": 3, "hue 60": 3}),
            ],
        );

        let data = get_likert_data(&source, Metric::Clarity).await.unwrap();

        assert_eq!(data[&30].dist, [0.4, 0.0, 0.0, 0.0, 0.6]);
        assert_eq!(data[&30].mean, Some(3.4));
        assert_eq!(data[&60].mean, Some(14.0 / 3.0));
    }

    #[tokio::test]
    async fn test_missing_likert_export_is_an_error_not_a_panic() {
        let source = SampleSource::new();
        assert!(get_likert_data(&source, Metric::Comfort).await.is_err());
    }
}
