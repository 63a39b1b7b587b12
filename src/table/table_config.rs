use std::path::PathBuf;

use strum_macros::IntoStaticStr;

use crate::axis::{Axis, AxisKind, AxisSpec};
use crate::errors::TableError;
use crate::grid::DEFAULT_DELIMITER;

//=====================================================================
// Where the samples of a table come from. The variant is chosen by
// the caller; nothing is inferred from the data.
//=====================================================================
#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum TableSource {
    // Samples supplied directly, one inner vector per row
    Samples(Vec<Vec<f32>>),
    // Delimited text content
    Text(String),
    // Path to a delimited text file, read once while building
    File(PathBuf),
}

//=====================================================================
// Everything needed to build a table. Both axes are validated when
// the config is created, so a `TableConfig` always describes valid
// axes; only the data itself can still fail at build time.
//=====================================================================
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub(crate) source: TableSource,
    pub(crate) rows: Axis,
    pub(crate) columns: Axis,
    pub(crate) delimiter: char,
}

impl TableConfig {
    pub fn new(
        source: TableSource,
        rows: impl Into<AxisSpec>,
        columns: impl Into<AxisSpec>,
    ) -> Result<Self, TableError> {
        let rows = Axis::from_spec(AxisKind::Row, rows.into())?;
        let columns = Axis::from_spec(AxisKind::Column, columns.into())?;
        Ok(Self { source, rows, columns, delimiter: DEFAULT_DELIMITER })
    }

    // Separator between samples in text sources, tab by default
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn source(&self) -> &TableSource {
        &self.source
    }

    pub fn rows(&self) -> &Axis {
        &self.rows
    }

    pub fn columns(&self) -> &Axis {
        &self.columns
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }
}
