use rand::rngs::ThreadRng;
use rand::Rng;

use crate::core::domain::{Rounding, ScorePoint, Stimulus, STIMULUS_GRID};

/// Synthetic score generator used when no survey data matches a query.
///
/// The curve is a three-zone heuristic taken from the study's observed
/// pattern: poor scores at the low end of the grid, a good 50-80 band, and
/// a drop-off at 90-100, with per-device and per-environment offsets and a
/// random jitter. The RNG is injected so tests can seed it and assert the
/// shape deterministically; callers on the default RNG must not assume
/// determinism from this path.
#[derive(Debug)]
pub struct FallbackGenerator<R: Rng> {
    rng: R,
}

impl FallbackGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for FallbackGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> FallbackGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// One rounded score point per grid value.
    pub fn generate(
        &mut self,
        device: &str,
        environment: &str,
        analysis: Stimulus,
    ) -> Vec<ScorePoint> {
        STIMULUS_GRID
            .iter()
            .map(|&value| {
                let (mut clarity, mut comfort) = match analysis {
                    Stimulus::Saturation => self.saturation_zone(value),
                    Stimulus::Brightness => self.brightness_zone(value),
                };

                let (device_clarity, device_comfort) = device_offsets(device, analysis);
                let (env_clarity, env_comfort) = environment_offsets(environment, analysis);
                clarity += device_clarity + env_clarity;
                comfort += device_comfort + env_comfort;

                ScorePoint {
                    value,
                    clarity: Rounding::Rounded.apply(clarity),
                    comfort: Rounding::Rounded.apply(comfort),
                }
            })
            .collect()
    }

    fn saturation_zone(&mut self, value: i64) -> (f64, f64) {
        if value <= 40 {
            (
                -30.0 - self.jitter(20.0),
                -20.0 - self.jitter(15.0),
            )
        } else if value <= 80 {
            (20.0 + self.jitter(30.0), 15.0 + self.jitter(25.0))
        } else {
            (
                -20.0 - self.jitter(20.0),
                -30.0 - self.jitter(15.0),
            )
        }
    }

    fn brightness_zone(&mut self, value: i64) -> (f64, f64) {
        if value <= 40 {
            (
                -25.0 - self.jitter(15.0),
                -15.0 - self.jitter(10.0),
            )
        } else if value <= 80 {
            (15.0 + self.jitter(25.0), 20.0 + self.jitter(20.0))
        } else {
            (
                -15.0 - self.jitter(15.0),
                -25.0 - self.jitter(20.0),
            )
        }
    }

    fn jitter(&mut self, scale: f64) -> f64 {
        self.rng.gen::<f64>() * scale
    }
}

fn device_offsets(device: &str, analysis: Stimulus) -> (f64, f64) {
    match (device, analysis) {
        ("Xreal", Stimulus::Saturation) => (5.0, 3.0),
        ("Xreal", Stimulus::Brightness) => (3.0, 2.0),
        _ => (0.0, 0.0),
    }
}

fn environment_offsets(environment: &str, analysis: Stimulus) -> (f64, f64) {
    match (environment, analysis) {
        ("indoor", Stimulus::Saturation) => (3.0, 5.0),
        ("indoor", Stimulus::Brightness) => (2.0, 3.0),
        ("outdoor", Stimulus::Saturation) => (-5.0, -8.0),
        ("outdoor", Stimulus::Brightness) => (-3.0, -5.0),
        _ => (0.0, 0.0),
    }
}
