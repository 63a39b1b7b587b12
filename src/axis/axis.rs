use tracing::warn;

use crate::axis::{AxisConfig, AxisKind, AxisSpec, MAX_BREAKPOINTS};
use crate::errors::{ConfigIssue, TableError};
use crate::strategies::{BinarySearch, Quicksort, Search, Sort};

//=====================================================================
// An ordered set of breakpoints, breakpoint `k` maps to grid index
// `k` along this axis. `min` and `max` are the bounds used to reject
// exact lookups; interpolation is limited to the span actually
// covered by breakpoints.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    kind: AxisKind,
    breakpoints: Vec<f32>,
    min: f32,
    max: f32,
}

// Enclosing pair of breakpoints for a coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bracket {
    pub low: usize,
    pub high: usize,
    pub ratio: f32,
}

impl Axis {
    pub fn uniform(kind: AxisKind, config: &AxisConfig) -> Result<Self, TableError> {
        config.validate(kind)?;
        let breakpoints: Vec<f32> = config.breakpoints().into_iter().map(|b| b + 0.0).collect();

        // Steps smaller than the spacing of f32 values collapse onto each other
        if breakpoints.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(TableError::Config { axis: kind, reason: ConfigIssue::IntervalBelowResolution });
        }

        // The last step may not land on max, in which case the tail of
        // the range has no grid entry.
        if let Some(&last) = breakpoints.last() {
            if last < config.max {
                warn!(axis = %kind, last, max = config.max, "last breakpoint falls short of axis max");
            }
        }

        Ok(Self { kind, breakpoints, min: config.min, max: config.max })
    }

    // Irregular axis from an explicit list, in any order
    pub fn from_breakpoints(kind: AxisKind, mut breakpoints: Vec<f32>) -> Result<Self, TableError> {
        let invalid = |reason| TableError::Config { axis: kind, reason };

        if breakpoints.is_empty() {
            return Err(invalid(ConfigIssue::EmptyBreakpoints));
        }
        if breakpoints.len() > MAX_BREAKPOINTS {
            return Err(invalid(ConfigIssue::TooManyBreakpoints));
        }
        if breakpoints.iter().any(|b| !b.is_finite()) {
            return Err(invalid(ConfigIssue::NonFiniteBreakpoint));
        }

        breakpoints.iter_mut().for_each(|b| *b += 0.0);
        Quicksort.sort_by(&mut breakpoints, f32::total_cmp);
        if breakpoints.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(invalid(ConfigIssue::DuplicateBreakpoint));
        }

        let min = breakpoints[0];
        let max = breakpoints[breakpoints.len() - 1];
        Ok(Self { kind, breakpoints, min, max })
    }

    pub fn from_spec(kind: AxisKind, spec: AxisSpec) -> Result<Self, TableError> {
        match spec {
            AxisSpec::Uniform(config) => Self::uniform(kind, &config),
            AxisSpec::Breakpoints(breakpoints) => Self::from_breakpoints(kind, breakpoints),
        }
    }

    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    pub fn breakpoints(&self) -> &[f32] {
        &self.breakpoints
    }

    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    // An axis always holds at least one breakpoint
    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    // Span covered by breakpoints, which can end before `max`
    pub fn covered(&self) -> (f32, f32) {
        (self.breakpoints[0], self.breakpoints[self.breakpoints.len() - 1])
    }

    // NaN never passes this check
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    // Grid index of an exact breakpoint
    pub fn index_of(&self, value: f32) -> Result<usize, TableError> {
        if !self.contains(value) {
            return Err(TableError::OutOfRange { axis: self.kind, value, min: self.min, max: self.max });
        }

        // Adding 0.0 folds -0.0 into 0.0, matching how breakpoints are stored
        let key = value + 0.0;
        BinarySearch
            .search_by(&self.breakpoints, |b| b.total_cmp(&key))
            .ok_or(TableError::NoSuchBreakpoint { axis: self.kind, value })
    }

    pub(crate) fn bracket(&self, value: f32) -> Result<Bracket, TableError> {
        let (first, last) = self.covered();
        if !(value >= first && value <= last) {
            return Err(TableError::OutOfRange { axis: self.kind, value, min: first, max: last });
        }

        // First breakpoint >= value, always a valid index after the check above
        let high = self.breakpoints.partition_point(|&b| b < value);
        if self.breakpoints[high] == value {
            return Ok(Bracket { low: high, high, ratio: 1.0 });
        }

        let low = high - 1;
        let (low_value, high_value) = (self.breakpoints[low], self.breakpoints[high]);
        let ratio = (value - low_value) / (high_value - low_value);
        Ok(Bracket { low, high, ratio })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn five_step_axis() -> Axis {
        Axis::uniform(AxisKind::Row, &AxisConfig::new(0.0, 10.0, 5.0)).unwrap()
    }

    #[test]
    fn test_uniform_axis() {
        let axis = five_step_axis();
        assert_eq!(axis.breakpoints(), &[0.0, 5.0, 10.0]);
        assert_eq!(axis.len(), 3);
        assert!(!axis.is_empty());
        assert_eq!(axis.min(), 0.0);
        assert_eq!(axis.max(), 10.0);
        assert_eq!(axis.kind(), AxisKind::Row);
    }

    #[test]
    fn test_index_of_exact_breakpoints() {
        let axis = five_step_axis();
        assert_eq!(axis.index_of(0.0).unwrap(), 0);
        assert_eq!(axis.index_of(5.0).unwrap(), 1);
        assert_eq!(axis.index_of(10.0).unwrap(), 2);
        assert_eq!(axis.index_of(-0.0).unwrap(), 0);
    }

    #[test]
    fn test_index_of_rejects_out_of_range() {
        let axis = five_step_axis();
        for value in [-0.1, 10.5, f32::NAN] {
            assert!(matches!(
                axis.index_of(value),
                Err(TableError::OutOfRange { axis: AxisKind::Row, min, max, .. }) if min == 0.0 && max == 10.0
            ));
        }
    }

    #[test]
    fn test_index_of_rejects_off_grid() {
        let axis = five_step_axis();
        assert!(matches!(
            axis.index_of(3.0),
            Err(TableError::NoSuchBreakpoint { axis: AxisKind::Row, value }) if value == 3.0
        ));
    }

    #[test]
    fn test_uniform_rejects_interval_below_resolution() {
        // f32 values are 2.0 apart at 2^24, a 0.5 step cannot be represented
        let config = AxisConfig::new(16777216.0, 16777218.0, 0.5);
        assert!(matches!(
            Axis::uniform(AxisKind::Row, &config),
            Err(TableError::Config { axis: AxisKind::Row, reason: ConfigIssue::IntervalBelowResolution })
        ));
    }

    #[test]
    fn test_uniform_stays_within_max() {
        let config = AxisConfig::new(-10.389999, 2820.776, 2.834);
        let axis = Axis::uniform(AxisKind::Column, &config).unwrap();
        let (_, last) = axis.covered();
        assert!(last <= axis.max());
        assert_eq!(axis.index_of(last).unwrap(), axis.len() - 1);
    }

    #[test]
    fn test_short_axis_keeps_configured_max() {
        let axis = Axis::uniform(AxisKind::Column, &AxisConfig::new(0.0, 10.0, 4.0)).unwrap();
        assert_eq!(axis.breakpoints(), &[0.0, 4.0, 8.0]);
        assert_eq!(axis.max(), 10.0);
        assert_eq!(axis.covered(), (0.0, 8.0));
        // In range, but no grid entry exists there
        assert!(matches!(axis.index_of(10.0), Err(TableError::NoSuchBreakpoint { .. })));
        assert!(matches!(axis.bracket(9.0), Err(TableError::OutOfRange { max, .. }) if max == 8.0));
    }

    #[test]
    fn test_bracket() {
        let axis = five_step_axis();
        assert_eq!(axis.bracket(5.0).unwrap(), Bracket { low: 1, high: 1, ratio: 1.0 });
        assert_eq!(axis.bracket(0.0).unwrap(), Bracket { low: 0, high: 0, ratio: 1.0 });
        assert_eq!(axis.bracket(10.0).unwrap(), Bracket { low: 2, high: 2, ratio: 1.0 });

        let bracket = axis.bracket(7.5).unwrap();
        assert_eq!((bracket.low, bracket.high), (1, 2));
        assert_relative_eq!(bracket.ratio, 0.5);

        let bracket = axis.bracket(1.0).unwrap();
        assert_eq!((bracket.low, bracket.high), (0, 1));
        assert_relative_eq!(bracket.ratio, 0.2);

        assert!(axis.bracket(-1.0).is_err());
        assert!(axis.bracket(f32::NAN).is_err());
    }

    #[test]
    fn test_explicit_breakpoints_are_sorted() {
        let axis = Axis::from_breakpoints(AxisKind::Row, vec![1000.0, 0.0, 250.0, 500.0]).unwrap();
        assert_eq!(axis.breakpoints(), &[0.0, 250.0, 500.0, 1000.0]);
        assert_eq!((axis.min(), axis.max()), (0.0, 1000.0));

        let bracket = axis.bracket(750.0).unwrap();
        assert_eq!((bracket.low, bracket.high), (2, 3));
        assert_relative_eq!(bracket.ratio, 0.5);
    }

    #[test]
    fn test_explicit_breakpoints_validation() {
        let issue = |values: Vec<f32>| match Axis::from_breakpoints(AxisKind::Column, values) {
            Err(TableError::Config { reason, .. }) => Some(reason),
            _ => None,
        };
        assert_eq!(issue(vec![]), Some(ConfigIssue::EmptyBreakpoints));
        assert_eq!(issue(vec![1.0, f32::NAN]), Some(ConfigIssue::NonFiniteBreakpoint));
        assert_eq!(issue(vec![1.0, f32::NEG_INFINITY]), Some(ConfigIssue::NonFiniteBreakpoint));
        assert_eq!(issue(vec![2.0, 1.0, 2.0]), Some(ConfigIssue::DuplicateBreakpoint));
        assert_eq!(issue(vec![0.0, -0.0]), Some(ConfigIssue::DuplicateBreakpoint));
        assert_eq!(issue(vec![2.0, 1.0]), None);
    }

    #[test]
    fn test_from_spec_dispatch() {
        let uniform = Axis::from_spec(AxisKind::Row, AxisConfig::new(0.0, 2.0, 1.0).into()).unwrap();
        let explicit = Axis::from_spec(AxisKind::Row, vec![2.0_f32, 0.0, 1.0].into()).unwrap();
        assert_eq!(uniform, explicit);
    }
}
