mod grid;
mod text_format;

pub use grid::Grid;
pub use text_format::{parse_table_text, read_table_file, MappedText, DEFAULT_DELIMITER};
