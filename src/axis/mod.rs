mod axis;
mod axis_config;
mod axis_kind;

pub use axis::Axis;
pub(crate) use axis::Bracket;
pub use axis_config::{AxisConfig, AxisSpec, MAX_BREAKPOINTS};
pub use axis_kind::AxisKind;
