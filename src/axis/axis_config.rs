use crate::axis::AxisKind;
use crate::errors::{ConfigIssue, TableError};

// Upper bound on breakpoints per axis, guards against a tiny interval
// turning into an enormous allocation.
pub const MAX_BREAKPOINTS: usize = 1_000_000;

// Relative slack when counting whole steps between min and max, so that
// e.g. 0.3 / 0.1 counts as three steps rather than 2.9999999999999996.
const STEP_SLACK: f64 = 1e-9;

//=====================================================================
// Description of a uniformly spaced axis: breakpoints run from `min`
// towards `max` in steps of `interval`.
//
// Example: elevation rows from 0 ft to 16000 ft every 500 ft, and
// temperature columns from -45 to 55 degrees every 5 degrees.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisConfig {
    pub min: f32,
    pub max: f32,
    pub interval: f32,
}

impl AxisConfig {
    pub const fn new(min: f32, max: f32, interval: f32) -> Self {
        Self { min, max, interval }
    }

    pub(crate) fn validate(&self, axis: AxisKind) -> Result<(), TableError> {
        let issue = if !self.min.is_finite() || !self.max.is_finite() {
            Some(ConfigIssue::NonFiniteBound)
        } else if self.min > self.max {
            Some(ConfigIssue::MinAboveMax)
        } else if !self.interval.is_finite() || self.interval <= 0.0 {
            Some(ConfigIssue::InvalidInterval)
        } else if self.steps() >= MAX_BREAKPOINTS as f64 {
            Some(ConfigIssue::TooManyBreakpoints)
        } else {
            None
        };

        match issue {
            Some(reason) => Err(TableError::Config { axis, reason }),
            None => Ok(()),
        }
    }

    // Breakpoints `min + k * interval` for `k = 0..=floor((max - min) / interval)`.
    // Each one is computed directly from `k` rather than by accumulation,
    // so no drift builds up along the axis. Never extends past `max`.
    pub(crate) fn breakpoints(&self) -> Vec<f32> {
        let min = widen(self.min);
        let interval = widen(self.interval);
        let count = self.steps() as usize + 1;

        let mut breakpoints: Vec<f32> = (0..count)
            .map(|k| (min + k as f64 * interval) as f32)
            .collect();

        // Step slack can round the count up by one past max
        while breakpoints.len() > 1 && breakpoints.last().is_some_and(|&last| last > self.max) {
            breakpoints.pop();
        }
        breakpoints
    }

    // Whole number of intervals that fit between min and max
    fn steps(&self) -> f64 {
        let steps = (widen(self.max) - widen(self.min)) / widen(self.interval);
        (steps + STEP_SLACK * steps.max(1.0)).floor()
    }
}

// Widen through the shortest decimal form so 0.1_f32 becomes 0.1_f64
// instead of 0.10000000149011612.
#[inline]
fn widen(value: f32) -> f64 {
    fast_float::parse::<f64, _>(value.to_string()).unwrap_or(f64::from(value))
}

//=====================================================================
// How an axis is laid out. Uniform axes step at a fixed interval,
// explicit axes list their breakpoints directly and may be irregular.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub enum AxisSpec {
    Uniform(AxisConfig),
    Breakpoints(Vec<f32>),
}

impl From<AxisConfig> for AxisSpec {
    fn from(config: AxisConfig) -> Self {
        AxisSpec::Uniform(config)
    }
}

impl From<Vec<f32>> for AxisSpec {
    fn from(breakpoints: Vec<f32>) -> Self {
        AxisSpec::Breakpoints(breakpoints)
    }
}
