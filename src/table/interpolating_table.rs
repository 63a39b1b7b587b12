use rayon::prelude::*;
use strum::IntoEnumIterator;
use tracing::{debug, trace};

use crate::axis::{Axis, AxisKind, Bracket};
use crate::errors::TableError;
use crate::grid::{parse_table_text, read_table_file, Grid};
use crate::table::{TableConfig, TableSource};

//=====================================================================
// Read-only lookup table over a 2-D grid of samples. Rows and columns
// are indexed by their own axes; a query either resolves to an exact
// sample or is blended bilinearly from the four enclosing samples.
//
// The table never changes after `build`, so it can be shared across
// threads without locking.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolatingTable {
    grid: Grid,
    rows: Axis,
    columns: Axis,
}

impl InterpolatingTable {
    pub fn build(config: TableConfig) -> Result<Self, TableError> {
        let TableConfig { source, rows, columns, delimiter } = config;
        let source_kind: &'static str = (&source).into();

        let samples = match source {
            TableSource::Samples(samples) => samples,
            TableSource::Text(text) => parse_table_text(&text, delimiter),
            TableSource::File(path) => read_table_file(&path, delimiter).map_err(TableError::Data)?,
        };
        let grid = Grid::from_rows(samples)?;

        let table = Self { grid, rows, columns };
        table.check_shape()?;

        debug!(
            source = source_kind,
            rows = table.grid.height(),
            columns = table.grid.width(),
            missing = table.grid.count_missing(),
            "built interpolating table"
        );
        Ok(table)
    }

    // Each axis needs exactly one grid entry per breakpoint
    fn check_shape(&self) -> Result<(), TableError> {
        for kind in AxisKind::iter() {
            let expected = self.axis(kind).len();
            let got = self.grid.extent(kind);
            if expected != got {
                return Err(TableError::Shape { axis: kind, expected, got });
            }
        }
        Ok(())
    }

    pub fn rows(&self) -> &Axis {
        &self.rows
    }

    pub fn columns(&self) -> &Axis {
        &self.columns
    }

    pub fn axis(&self, kind: AxisKind) -> &Axis {
        match kind {
            AxisKind::Row => &self.rows,
            AxisKind::Column => &self.columns,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    // (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.grid.height(), self.grid.width())
    }

    // Sample stored at an exact pair of breakpoints. NaN is returned
    // as-is when the point was never measured.
    pub fn get_precise(&self, row: f32, column: f32) -> Result<f32, TableError> {
        // Both coordinates are range checked before either is resolved
        for (axis, value) in [(&self.rows, row), (&self.columns, column)] {
            if !axis.contains(value) {
                return Err(TableError::OutOfRange {
                    axis: axis.kind(),
                    value,
                    min: axis.min(),
                    max: axis.max(),
                });
            }
        }

        let row_idx = self.rows.index_of(row)?;
        let column_idx = self.columns.index_of(column)?;
        Ok(self.grid.at(row_idx, column_idx))
    }

    // Bilinear interpolation between the four samples enclosing
    // (row, column). Exact breakpoints reduce to a direct lookup. The
    // result is NaN whenever any enclosing sample is NaN, a value is
    // never made up from partial data.
    pub fn interpolate(&self, row: f32, column: f32) -> Result<f32, TableError> {
        let row_bracket = self.rows.bracket(row)?;
        let column_bracket = self.columns.bracket(column)?;
        trace!(row, column, ?row_bracket, ?column_bracket, "interpolating");

        let top_left = self.grid.at(row_bracket.high, column_bracket.low);
        let top_right = self.grid.at(row_bracket.high, column_bracket.high);
        let bottom_left = self.grid.at(row_bracket.low, column_bracket.low);
        let bottom_right = self.grid.at(row_bracket.low, column_bracket.high);

        if [top_left, top_right, bottom_left, bottom_right].iter().any(|s| s.is_nan()) {
            return Ok(f32::NAN);
        }

        let top_mean = blend(&column_bracket, top_left, top_right);
        let bottom_mean = blend(&column_bracket, bottom_left, bottom_right);
        Ok(blend(&row_bracket, bottom_mean, top_mean))
    }

    // Interpolate a batch of (row, column) points in parallel. Results
    // keep the order of `points`; any failing point fails the batch.
    pub fn interpolate_many(&self, points: &[(f32, f32)]) -> Result<Vec<f32>, TableError> {
        points
            .par_iter()
            .map(|&(row, column)| self.interpolate(row, column))
            .collect()
    }
}

// An exact breakpoint hit takes the sample as-is, so infinite samples
// survive instead of turning into inf - inf
#[inline]
fn blend(bracket: &Bracket, base: f32, target: f32) -> f32 {
    if bracket.low == bracket.high {
        base
    } else {
        lerp(bracket.ratio, base, target)
    }
}

#[inline]
fn lerp(ratio: f32, base: f32, target: f32) -> f32 {
    base + (target - base) * ratio
}
