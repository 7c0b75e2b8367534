//! Domain models for survey rows, conditions, and derived scores.
//!
//! This module provides the core data structures that represent one hue's
//! survey responses, the experimental condition a response belongs to, and
//! the clarity/comfort score points derived from grouped responses.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stimulus values admitted by the aggregation grid, in percent.
///
/// Rows whose varying stimulus value falls outside this grid are discarded
/// during grouping; they are stray entries in the exports, not errors.
pub const STIMULUS_GRID: [i64; 9] = [20, 30, 40, 50, 60, 70, 80, 90, 100];

/// Semantic hue presentation order used across the study's charts.
pub const HUE_ORDER: [i64; 12] = [30, 45, 60, 75, 135, 180, 195, 240, 270, 285, 315, 345];

/// Display names for the study hues.
pub static HUE_NAMES: Lazy<HashMap<i64, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (30, "Orange"),
        (45, "Yellow-Orange"),
        (60, "Yellow"),
        (75, "Lime Green"),
        (135, "Green"),
        (180, "Cyan"),
        (195, "Blue"),
        (240, "Purple"),
        (270, "Dark Purple"),
        (285, "Magenta"),
        (315, "Pink"),
        (345, "Red"),
    ])
});

/// Display name for a study hue, if it is one of the twelve surveyed hues.
pub fn hue_name(hue: i64) -> Option<&'static str> {
    HUE_NAMES.get(&hue).copied()
}

/// A stimulus string that names neither dimension.
///
/// Stimulus selectors come from callers, not from data, so an unknown value
/// is a caller bug and is reported immediately instead of being degraded to
/// the synthetic-data path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stimulus dimension {0:?}, expected \"saturation\" or \"brightness\"")]
pub struct InvalidStimulus(pub String);

/// The two stimulus dimensions varied in the survey.
///
/// Each survey trial held one dimension constant while the other stepped
/// through the grid; rows are tagged with the dimension that was *fixed*.
///
/// # Examples
///
/// ```
/// use archroma::core::domain::Stimulus;
///
/// assert_eq!(Stimulus::Saturation.fixed_counterpart(), Stimulus::Brightness);
/// assert_eq!("brightness".parse::<Stimulus>(), Ok(Stimulus::Brightness));
/// assert!("hue".parse::<Stimulus>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stimulus {
    Saturation,
    Brightness,
}

impl Stimulus {
    /// The dimension held constant while this one is analyzed.
    ///
    /// Analyzing saturation variation means brightness was fixed during
    /// those trials, and vice versa. Rows carry the fixed dimension in
    /// their `fixation` column, so a saturation analysis must select rows
    /// tagged `brightness`. Swapping this silently swaps which axis the
    /// charts show, with no error signal.
    pub fn fixed_counterpart(self) -> Stimulus {
        match self {
            Stimulus::Saturation => Stimulus::Brightness,
            Stimulus::Brightness => Stimulus::Saturation,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stimulus::Saturation => "saturation",
            Stimulus::Brightness => "brightness",
        }
    }
}

impl FromStr for Stimulus {
    type Err = InvalidStimulus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "saturation" => Ok(Stimulus::Saturation),
            "brightness" => Ok(Stimulus::Brightness),
            other => Err(InvalidStimulus(other.to_string())),
        }
    }
}

impl fmt::Display for Stimulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A metric string that names neither derived score.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid metric {0:?}, expected \"clarity\" or \"comfort\"")]
pub struct InvalidMetric(pub String);

/// The two derived preference metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Clarity,
    Comfort,
}

impl Metric {
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Clarity => "clarity",
            Metric::Comfort => "comfort",
        }
    }

    /// Read this metric off a score point.
    pub fn of(self, point: &ScorePoint) -> f64 {
        match self {
            Metric::Clarity => point.clarity,
            Metric::Comfort => point.comfort,
        }
    }
}

impl FromStr for Metric {
    type Err = InvalidMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clarity" => Ok(Metric::Clarity),
            "comfort" => Ok(Metric::Comfort),
            other => Err(InvalidMetric(other.to_string())),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One experimental series: a device observed in an environment.
///
/// Used as a map key for per-condition score series, replacing the
/// `"device-env"` composite strings of the original exports with a
/// structured key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Condition {
    pub device: String,
    pub environment: String,
}

impl Condition {
    pub fn new(device: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            environment: environment.into(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.device, self.environment)
    }
}

/// Summed forced-choice counters for one stimulus value.
///
/// Counters are `f64` because the exports occasionally carry fractional
/// (weighted) counts; blank cells contribute zero.
///
/// # Examples
///
/// ```
/// use archroma::core::domain::ResponseCounts;
///
/// let counts = ResponseCounts {
///     clearest: 8.0,
///     second_clear: 2.0,
///     least_clear: 9.0,
///     ..Default::default()
/// };
/// assert_eq!(counts.clarity(), 0.0);
/// assert_eq!(counts.comfort(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseCounts {
    pub clearest: f64,
    pub second_clear: f64,
    pub least_clear: f64,
    pub most_comfortable: f64,
    pub second_comfortable: f64,
    pub least_comfortable: f64,
}

impl ResponseCounts {
    /// Add one row's counters into this bucket.
    pub fn absorb(&mut self, row: &SurveyRow) {
        self.clearest += row.clearest;
        self.second_clear += row.second_clear;
        self.least_clear += row.least_clear;
        self.most_comfortable += row.most_comfortable;
        self.second_comfortable += row.second_comfortable;
        self.least_comfortable += row.least_comfortable;
    }

    /// Weighted clarity preference: `clearest + 0.5 * second clear - least clear`.
    pub fn clarity(&self) -> f64 {
        self.clearest + 0.5 * self.second_clear - self.least_clear
    }

    /// Weighted comfort preference: `most + 0.5 * second - least comfortable`.
    pub fn comfort(&self) -> f64 {
        self.most_comfortable + 0.5 * self.second_comfortable - self.least_comfortable
    }
}

/// One survey response record.
///
/// `fixation` names the dimension held constant for the trial; the varying
/// dimension is the other one. Rows are immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyRow {
    pub device: String,
    pub room: String,
    pub fixation: Stimulus,
    pub saturation: i64,
    pub brightness: i64,
    pub clearest: f64,
    pub second_clear: f64,
    pub least_clear: f64,
    pub most_comfortable: f64,
    pub second_comfortable: f64,
    pub least_comfortable: f64,
}

impl SurveyRow {
    /// Build a typed row from a parsed CSV record.
    ///
    /// Returns `None` when the record lacks a device, a room, a
    /// recognizable fixation tag, or integer stimulus values. Such records
    /// are stray lines in the exports and are dropped, never surfaced as
    /// errors.
    ///
    /// The response columns are matched by their verbatim export names,
    /// spaces included (`"second clear"`, `"least comfortable"`, ...).
    pub fn from_record(record: &Value) -> Option<SurveyRow> {
        let device = record.get("device")?.as_str()?.to_string();
        let room = record.get("room")?.as_str()?.to_string();
        let fixation = record.get("fixation")?.as_str()?.parse().ok()?;

        Some(SurveyRow {
            device,
            room,
            fixation,
            saturation: int_field(record, "saturation")?,
            brightness: int_field(record, "brightness")?,
            clearest: count_field(record, "clearest"),
            second_clear: count_field(record, "second clear"),
            least_clear: count_field(record, "least clear"),
            most_comfortable: count_field(record, "most comfortable"),
            second_comfortable: count_field(record, "second comfortable"),
            least_comfortable: count_field(record, "least comfortable"),
        })
    }

    /// The value of the dimension that varied for this row under the given
    /// analysis.
    pub fn stimulus_value(&self, analysis: Stimulus) -> i64 {
        match analysis {
            Stimulus::Saturation => self.saturation,
            Stimulus::Brightness => self.brightness,
        }
    }
}

/// Integer stimulus field; fractional values truncate toward zero.
fn int_field(record: &Value, name: &str) -> Option<i64> {
    match record.get(name)? {
        Value::Number(n) => n.as_f64().map(|v| v.trunc() as i64),
        Value::String(s) => s.trim().parse::<f64>().ok().map(|v| v.trunc() as i64),
        _ => None,
    }
}

/// Response counter field; blank or missing cells count as zero.
fn count_field(record: &Value, name: &str) -> f64 {
    match record.get(name) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// A derived score for one stimulus value of one condition series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScorePoint {
    pub value: i64,
    pub clarity: f64,
    pub comfort: f64,
}

/// Rounding policy for derived scores.
///
/// The charts display whole numbers while statistical comparisons need the
/// unrounded values; the policy is an explicit parameter so the two
/// behaviors cannot drift apart again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    /// Round half up (toward positive infinity), the chart behavior.
    Rounded,
    /// Retain full floating precision.
    Exact,
}

impl Rounding {
    /// Apply this policy to a score.
    ///
    /// # Examples
    ///
    /// ```
    /// use archroma::core::domain::Rounding;
    ///
    /// assert_eq!(Rounding::Rounded.apply(2.5), 3.0);
    /// assert_eq!(Rounding::Rounded.apply(-2.5), -2.0);
    /// assert_eq!(Rounding::Exact.apply(2.5), 2.5);
    /// ```
    pub fn apply(self, score: f64) -> f64 {
        match self {
            Rounding::Rounded => (score + 0.5).floor(),
            Rounding::Exact => score,
        }
    }
}
