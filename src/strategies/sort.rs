use std::cmp::Ordering;

//=====================================================================
// Comparator-driven in-place sorting strategies. Callers pick a
// strategy at the call site and supply the ordering; every strategy
// leaves the slice ascending with respect to `compare`.
//=====================================================================
pub trait Sort<T> {
    fn sort_by<F>(&self, items: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

// Repeatedly swaps adjacent out-of-order pairs, stopping early once a
// full pass makes no swaps.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl<T> Sort<T> for BubbleSort {
    fn sort_by<F>(&self, items: &mut [T], mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        for end in (1..items.len()).rev() {
            let mut swapped = false;
            for i in 0..end {
                if compare(&items[i], &items[i + 1]) == Ordering::Greater {
                    items.swap(i, i + 1);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }
    }
}

// Selects the largest remaining element and moves it to the end of the
// unsorted prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl<T> Sort<T> for SelectionSort {
    fn sort_by<F>(&self, items: &mut [T], mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        for end in (1..items.len()).rev() {
            let mut max_idx = end;
            for i in 0..end {
                if compare(&items[i], &items[max_idx]) == Ordering::Greater {
                    max_idx = i;
                }
            }
            items.swap(end, max_idx);
        }
    }
}

// Partition-exchange sort using the last element as the pivot.
// Recursion only descends into the smaller partition so stack depth
// stays logarithmic even on already-sorted input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quicksort;

impl<T> Sort<T> for Quicksort {
    fn sort_by<F>(&self, items: &mut [T], mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        quicksort(items, &mut compare);
    }
}

fn quicksort<T, F>(mut items: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while items.len() > 1 {
        let pivot = partition(items, compare);
        let (left, right) = std::mem::take(&mut items).split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quicksort(left, compare);
            items = right;
        } else {
            quicksort(right, compare);
            items = left;
        }
    }
}

// Lomuto partition, returns the final index of the pivot
#[inline]
fn partition<T, F>(items: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let pivot = items.len() - 1;
    let mut store = 0;
    for i in 0..pivot {
        if compare(&items[i], &items[pivot]) == Ordering::Less {
            items.swap(i, store);
            store += 1;
        }
    }
    items.swap(store, pivot);
    store
}
