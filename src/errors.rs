use strum_macros::Display;
use thiserror::Error;

use crate::axis::AxisKind;

//=====================================================================
// Errors raised while building or querying an interpolating table.
// A NaN sample is not an error: it is the table's marker for a
// missing measurement and flows through lookups unchanged.
//=====================================================================
#[derive(Debug, Error)]
pub enum TableError {
    #[error("{axis} coordinate {value} is out of range [{min}, {max}]")]
    OutOfRange { axis: AxisKind, value: f32, min: f32, max: f32 },

    #[error("{axis} coordinate {value} is not a breakpoint of the axis")]
    NoSuchBreakpoint { axis: AxisKind, value: f32 },

    #[error("unable to read table data: {0:#}")]
    Data(anyhow::Error),

    #[error("{axis} axis expects {expected} grid entries but the data has {got}")]
    Shape { axis: AxisKind, expected: usize, got: usize },

    #[error("invalid {axis} axis configuration: {reason}")]
    Config { axis: AxisKind, reason: ConfigIssue },
}

// Reasons an axis description is rejected up front
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConfigIssue {
    #[strum(to_string = "min and max must be finite")]
    NonFiniteBound,
    #[strum(to_string = "min must not exceed max")]
    MinAboveMax,
    #[strum(to_string = "interval must be finite and greater than zero")]
    InvalidInterval,
    #[strum(to_string = "too many breakpoints")]
    TooManyBreakpoints,
    #[strum(to_string = "no breakpoints given")]
    EmptyBreakpoints,
    #[strum(to_string = "breakpoints must be finite")]
    NonFiniteBreakpoint,
    #[strum(to_string = "breakpoints must be unique")]
    DuplicateBreakpoint,
    #[strum(to_string = "interval is finer than f32 resolution at this range")]
    IntervalBelowResolution,
}
