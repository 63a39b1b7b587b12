use crate::axis::AxisKind;
use crate::errors::TableError;

//=====================================================================
// Rectangular block of samples stored row-major. NaN marks a point
// that was never measured. The grid is fixed once built.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    samples: Vec<f32>,
    height: usize,
    width: usize,
}

impl Grid {
    // Every row must be as wide as the first one
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self, TableError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some(ragged) = rows.iter().find(|row| row.len() != width) {
            return Err(TableError::Shape { axis: AxisKind::Column, expected: width, got: ragged.len() });
        }

        let samples = rows.into_iter().flatten().collect();
        Ok(Self { samples, height, width })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    // Extent along one axis
    pub fn extent(&self, axis: AxisKind) -> usize {
        match axis {
            AxisKind::Row => self.height,
            AxisKind::Column => self.width,
        }
    }

    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Option<f32> {
        if row < self.height && column < self.width {
            Some(self.samples[row * self.width + column])
        } else {
            None
        }
    }

    // Caller guarantees both indices are in bounds
    #[inline]
    pub(crate) fn at(&self, row: usize, column: usize) -> f32 {
        self.samples[row * self.width + column]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        (0..self.height).map(move |row| &self.samples[row * self.width..(row + 1) * self.width])
    }

    pub fn to_rows(&self) -> Vec<Vec<f32>> {
        self.rows().map(<[f32]>::to_vec).collect()
    }

    pub fn count_missing(&self) -> usize {
        self.samples.iter().filter(|s| s.is_nan()).count()
    }
}
