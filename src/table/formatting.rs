use std::fmt;

use crate::table::InterpolatingTable;

// Width and precision of every cell in the grid dump
const CELL_WIDTH: usize = 8;
const CELL_PRECISION: usize = 2;

//=====================================================================
// Presentation helpers. Neither view is part of the lookup contract,
// they exist for debugging and for exporting a parsed table as source.
//=====================================================================
impl InterpolatingTable {
    // Grid dump: column breakpoints across the top, each row prefixed
    // by its row breakpoint
    pub fn describe(&self) -> String {
        self.to_string()
    }

    // Nested array literal that can be pasted back into Rust source and
    // handed to `TableSource::Samples`
    pub fn to_literal_source(&self) -> String {
        let rows: String = self
            .grid()
            .rows()
            .map(|row| {
                let samples: Vec<String> = row.iter().map(|&s| sample_literal(s)).collect();
                format!("    [{}],\n", samples.join(", "))
            })
            .collect();
        format!("[\n{}]\n", rows)
    }
}

fn sample_literal(sample: f32) -> String {
    if sample.is_nan() {
        String::from("f32::NAN")
    } else if sample == f32::INFINITY {
        String::from("f32::INFINITY")
    } else if sample == f32::NEG_INFINITY {
        String::from("f32::NEG_INFINITY")
    } else {
        // Debug keeps the fractional part, 1.0 rather than 1
        format!("{:?}", sample)
    }
}

impl fmt::Display for InterpolatingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>w$}", "", w = CELL_WIDTH)?;
        for column in self.columns().breakpoints() {
            write!(f, " {:>w$.p$}", column, w = CELL_WIDTH, p = CELL_PRECISION)?;
        }
        writeln!(f)?;

        for (row, samples) in self.rows().breakpoints().iter().zip(self.grid().rows()) {
            write!(f, "{:>w$.p$}", row, w = CELL_WIDTH, p = CELL_PRECISION)?;
            for sample in samples {
                write!(f, " {:>w$.p$}", sample, w = CELL_WIDTH, p = CELL_PRECISION)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
