#![allow(dead_code)]

//=====================================================================
// Shared fixtures for tests across modules
//=====================================================================

use std::sync::Mutex;
use std::time::Instant;

use lazy_static::lazy_static;

use crate::axis::AxisConfig;
use crate::table::{InterpolatingTable, TableConfig, TableSource};

// Paths to bundled data, plus a table parsed once from the bundled chart
// and reused by every test that needs it.
lazy_static! {
    pub static ref TEST_CHART: &'static str = "test_data/performance_chart.txt";
    pub static ref TEST_CHART_TABLE: Mutex<Option<InterpolatingTable>> = Mutex::new(None);
}

// Axes of the bundled chart: elevation rows and temperature columns
pub const CHART_ROWS: AxisConfig = AxisConfig::new(0.0, 4000.0, 1000.0);
pub const CHART_COLUMNS: AxisConfig = AxisConfig::new(-10.0, 30.0, 10.0);

// Row axis {0, 5, 10}, column axis {0, 10}
pub const SMALL_ROWS: AxisConfig = AxisConfig::new(0.0, 10.0, 5.0);
pub const SMALL_COLUMNS: AxisConfig = AxisConfig::new(0.0, 10.0, 10.0);

pub fn small_samples() -> Vec<Vec<f32>> {
    vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]
}

// The 3x2 table used throughout the lookup tests
pub fn small_table() -> InterpolatingTable {
    let config = TableConfig::new(TableSource::Samples(small_samples()), SMALL_ROWS, SMALL_COLUMNS)
        .expect("fixture config is valid");
    InterpolatingTable::build(config).expect("fixture table builds")
}

pub fn get_chart_table() -> InterpolatingTable {
    let mut table = TEST_CHART_TABLE.lock().unwrap();

    // Only parse the chart if it is not already parsed
    if table.is_none() {
        let start = Instant::now();
        let config = TableConfig::new(TableSource::File((*TEST_CHART).into()), CHART_ROWS, CHART_COLUMNS)
            .expect("chart config is valid");
        *table = Some(InterpolatingTable::build(config).expect("bundled chart builds"));
        println!("Time to build bundled chart table: {:?}", start.elapsed());
    }
    table.as_ref().unwrap().clone()
}

// Element-wise equality where NaN matches NaN
pub fn assert_rows_eq(actual: &[Vec<f32>], expected: &[Vec<f32>]) {
    assert_eq!(actual.len(), expected.len(), "row count differs");
    for (r, (a_row, e_row)) in actual.iter().zip(expected).enumerate() {
        assert_eq!(a_row.len(), e_row.len(), "row {} width differs", r);
        for (c, (a, e)) in a_row.iter().zip(e_row).enumerate() {
            assert!(
                (a.is_nan() && e.is_nan()) || a == e,
                "mismatch at ({}, {}): left={}, right={}", r, c, a, e
            );
        }
    }
}
