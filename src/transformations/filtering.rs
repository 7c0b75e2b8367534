use crate::core::domain::{Stimulus, SurveyRow};

/// Select the rows recorded for one (device, environment, fixation)
/// condition, preserving input order.
///
/// `fixation` is the dimension that was held constant during the trial,
/// exactly as tagged in the export. No match is not an error; callers fall
/// back to synthetic data on an empty result.
pub fn filter_condition(
    rows: &[SurveyRow],
    device: &str,
    environment: &str,
    fixation: Stimulus,
) -> Vec<SurveyRow> {
    rows.iter()
        .filter(|row| {
            row.device == device && row.room == environment && row.fixation == fixation
        })
        .cloned()
        .collect()
}

/// Select the rows backing an analysis of the given varying dimension.
///
/// The inversion lives here and nowhere else: analyzing how `analysis`
/// varies means selecting trials where its counterpart was fixed. A
/// saturation analysis therefore filters on `fixation == brightness`.
pub fn filter_for_analysis(
    rows: &[SurveyRow],
    device: &str,
    environment: &str,
    analysis: Stimulus,
) -> Vec<SurveyRow> {
    filter_condition(rows, device, environment, analysis.fixed_counterpart())
}
