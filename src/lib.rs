mod axis;
mod errors;
mod grid;
mod table;
mod utils;

pub mod strategies;

pub use axis::{Axis, AxisConfig, AxisKind, AxisSpec, MAX_BREAKPOINTS};
pub use errors::{ConfigIssue, TableError};
pub use grid::{parse_table_text, read_table_file, Grid, MappedText, DEFAULT_DELIMITER};
pub use table::{InterpolatingTable, TableConfig, TableSource};
