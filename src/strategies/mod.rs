mod search;
mod sort;

pub use search::{BinarySearch, LinearSearch, Search};
pub use sort::{BubbleSort, Quicksort, SelectionSort, Sort};
