use std::cmp::Ordering;

//=====================================================================
// Comparator-driven search strategies. The probe orders an element
// relative to the value being looked for, the same contract as
// `slice::binary_search_by`, and a hit returns the element's index.
//=====================================================================
pub trait Search<T> {
    fn search_by<F>(&self, items: &[T], probe: F) -> Option<usize>
    where
        F: FnMut(&T) -> Ordering;
}

// Scans front to back and returns the first match. Works on unsorted input.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSearch;

impl<T> Search<T> for LinearSearch {
    fn search_by<F>(&self, items: &[T], mut probe: F) -> Option<usize>
    where
        F: FnMut(&T) -> Ordering,
    {
        items.iter().position(|item| probe(item) == Ordering::Equal)
    }
}

// Halves the search window on every step. Input must be sorted in the
// order the probe expects.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySearch;

impl<T> Search<T> for BinarySearch {
    fn search_by<F>(&self, items: &[T], mut probe: F) -> Option<usize>
    where
        F: FnMut(&T) -> Ordering,
    {
        let mut lo = 0;
        let mut hi = items.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match probe(&items[mid]) {
                Ordering::Equal => return Some(mid),
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
            }
        }
        None
    }
}
