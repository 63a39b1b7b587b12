mod formatting;
mod interpolating_table;
mod table_config;

pub use interpolating_table::InterpolatingTable;
pub use table_config::{TableConfig, TableSource};
