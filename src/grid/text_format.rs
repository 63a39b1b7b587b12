use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use memmap2::{Mmap, MmapOptions};
use rayon::prelude::*;

use crate::utils;

//=====================================================================
// Support for tables stored as delimited text. The layout is:
//    - One table row per line (`\n` or `\r\n` endings).
//    - Samples separated by a single delimiter character, tab unless
//      configured otherwise.
//    - A token that does not parse as a number is stored as NaN, so
//      blanks or markers such as "-" denote unmeasured points.
//    - Rows shorter than the widest row are padded on the right with
//      NaN.
//=====================================================================

pub const DEFAULT_DELIMITER: char = '\t';

// Parse text content into rectangular rows of samples
pub fn parse_table_text(text: &str, delimiter: char) -> Vec<Vec<f32>> {
    let lines: Vec<&str> = text.lines().collect();

    // Rows are independent, parse them in parallel and keep line order
    let mut rows: Vec<Vec<f32>> = lines
        .par_iter()
        .map(|line| parse_row(line, delimiter))
        .collect();

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in rows.iter_mut() {
        row.resize(width, f32::NAN);
    }
    rows
}

#[inline]
fn parse_row(line: &str, delimiter: char) -> Vec<f32> {
    let mut tokens: Vec<&str> = line.split(delimiter).collect();
    // A trailing delimiter does not open another column
    while tokens.last().is_some_and(|token| token.is_empty()) {
        tokens.pop();
    }
    tokens.into_iter().map(parse_sample).collect()
}

#[inline]
fn parse_sample(token: &str) -> f32 {
    fast_float::parse::<f32, _>(token.trim()).unwrap_or(f32::NAN)
}

//=====================================================================
// Read-only memory map of a table text file. The map lives only as
// long as the load; samples are copied out into the grid.
//=====================================================================
pub struct MappedText(Option<Mmap>);

impl MappedText {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open table file: {:?}", path))?;

        // Mapping a zero-length file is an error on some platforms
        let len = file.metadata()
            .with_context(|| format!("Failed to read metadata of table file: {:?}", path))?
            .len();
        if len == 0 {
            return Ok(Self(None));
        }

        // SAFETY: the file is only read through the map and the map is
        // dropped once the samples are parsed.
        let mmap = unsafe { MmapOptions::new().map(&file) }
            .with_context(|| format!("Failed to memory map table file: {:?}", path))?;
        Ok(Self(Some(mmap)))
    }

    pub fn bytes(&self) -> &[u8] {
        self.0.as_deref().unwrap_or(&[])
    }

    pub fn as_str(&self) -> Result<&str> {
        let bytes = self.bytes();
        if !utils::looks_like_text(bytes) {
            return Err(anyhow::anyhow!("table file contains binary data"));
        }
        std::str::from_utf8(bytes).context("table file is not valid UTF-8")
    }
}

// Load and parse a table text file
pub fn read_table_file<P: AsRef<Path>>(path: P, delimiter: char) -> Result<Vec<Vec<f32>>> {
    let path = path.as_ref();
    let mapped = MappedText::open(path)?;
    let text = mapped.as_str()
        .with_context(|| format!("Failed to decode table file: {:?}", path))?;
    Ok(parse_table_text(text, delimiter))
}
