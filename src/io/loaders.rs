use anyhow::{Context, Result};

use crate::core::domain::{Metric, SurveyRow};
use crate::datasource::DataSource;

/// Resource name of the per-hue survey export.
pub fn hue_resource_name(hue: i64) -> String {
    format!("Hue{hue}_data_final_cb.csv")
}

/// Resource name of a Likert ranking export.
pub fn likert_resource_name(metric: Metric) -> String {
    let tag = match metric {
        Metric::Clarity => "clear",
        Metric::Comfort => "comfort",
    };
    format!("color_rank_likert_{tag}.csv")
}

/// Result of loading one hue's survey rows.
#[derive(Debug)]
pub struct SurveyLoadResult {
    /// Typed rows, in file order.
    pub rows: Vec<SurveyRow>,
    /// The resource the rows came from.
    pub resource: String,
    /// Raw record count before typed conversion; the difference to
    /// `rows.len()` is the number of dropped stray records.
    pub total_records: usize,
}

/// Loads survey resources through a data source and converts them to
/// typed rows.
pub struct SurveyLoader;

impl SurveyLoader {
    /// Load and type the survey rows for one hue.
    ///
    /// Records without the identifying survey columns are dropped and
    /// logged; a missing or non-CSV resource surfaces as an error for the
    /// caller to degrade into the synthetic-data path.
    pub async fn load_hue(source: &dyn DataSource, hue: i64) -> Result<SurveyLoadResult> {
        let resource = hue_resource_name(hue);
        let records = source
            .fetch_rows(&resource)
            .await
            .with_context(|| format!("Failed to fetch survey resource {resource}"))?;

        let total_records = records.len();
        let rows: Vec<SurveyRow> = records.iter().filter_map(SurveyRow::from_record).collect();
        if rows.len() < total_records {
            log::debug!(
                "{}: dropped {} records without survey columns",
                resource,
                total_records - rows.len()
            );
        }

        Ok(SurveyLoadResult {
            rows,
            resource,
            total_records,
        })
    }
}
