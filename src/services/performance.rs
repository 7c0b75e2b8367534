use std::collections::HashMap;

use rand::Rng;

use crate::algorithms::scoring;
use crate::core::domain::{Condition, Rounding, ScorePoint, Stimulus};
use crate::datasource::{DataSource, FallbackGenerator};
use crate::io::loaders::SurveyLoader;
use crate::transformations::filtering;

/// One performance query: which series to score and how to round it.
#[derive(Debug, Clone)]
pub struct PerformanceQuery {
    pub hue: i64,
    pub device: String,
    pub environment: String,
    /// The varying dimension to analyze. Row selection applies the
    /// fixation inversion internally.
    pub analysis: Stimulus,
    pub rounding: Rounding,
}

impl PerformanceQuery {
    pub fn new(
        hue: i64,
        device: impl Into<String>,
        environment: impl Into<String>,
        analysis: Stimulus,
        rounding: Rounding,
    ) -> Self {
        Self {
            hue,
            device: device.into(),
            environment: environment.into(),
            analysis,
            rounding,
        }
    }

    pub fn condition(&self) -> Condition {
        Condition::new(self.device.clone(), self.environment.clone())
    }
}

/// Score one condition series.
///
/// Loads the hue's survey export, filters it to the queried condition,
/// groups by the varying stimulus value, and scores the buckets. A missing
/// resource, an HTML payload, or an empty post-filter result all degrade
/// to the synthetic generator; no outcome of this query is an error.
pub async fn get_performance_data<R: Rng>(
    source: &dyn DataSource,
    fallback: &mut FallbackGenerator<R>,
    query: &PerformanceQuery,
) -> Vec<ScorePoint> {
    let rows = match SurveyLoader::load_hue(source, query.hue).await {
        Ok(result) => result.rows,
        Err(err) => {
            log::warn!(
                "hue {} unavailable ({err:#}); using synthetic data for {}",
                query.hue,
                query.condition()
            );
            return fallback.generate(&query.device, &query.environment, query.analysis);
        }
    };

    let filtered =
        filtering::filter_for_analysis(&rows, &query.device, &query.environment, query.analysis);
    if filtered.is_empty() {
        log::warn!(
            "no rows match {} for hue {}; using synthetic data",
            query.condition(),
            query.hue
        );
        return fallback.generate(&query.device, &query.environment, query.analysis);
    }

    let buckets = scoring::aggregate_rows(&filtered, query.analysis);
    scoring::compute_scores(&buckets, query.rounding)
}

/// Score every device x environment combination for one hue.
///
/// The result feeds [`crate::algorithms::peaks::find_peaks`].
pub async fn get_condition_series<R: Rng>(
    source: &dyn DataSource,
    fallback: &mut FallbackGenerator<R>,
    hue: i64,
    devices: &[String],
    environments: &[String],
    analysis: Stimulus,
    rounding: Rounding,
) -> HashMap<Condition, Vec<ScorePoint>> {
    let mut series = HashMap::new();

    for device in devices {
        for environment in environments {
            let query =
                PerformanceQuery::new(hue, device.as_str(), environment.as_str(), analysis, rounding);
            let points = get_performance_data(source, fallback, &query).await;
            series.insert(query.condition(), points);
        }
    }

    series
}
