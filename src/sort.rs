use std::cmp::Ordering;

/// Sorts `slice` in place with a recursive quicksort built on the Lomuto partition scheme.
///
/// The sort is not stable. Recursion depth grows with partition imbalance: already sorted
/// input degrades to `O(n²)` comparisons and `n` nested calls.
pub(crate) fn quick_sort<T, F>(slice: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if slice.len() <= 1 {
        return;
    }

    let pivot = partition(slice, compare);
    let (left, right) = slice.split_at_mut(pivot);

    quick_sort(left, compare);
    quick_sort(&mut right[1..], compare);
}

/// Partitions `slice` around its last element and returns the pivot's final index.
///
/// Afterwards every element before the returned index compares `<=` the pivot and every
/// element after it compares `>` the pivot.
fn partition<T, F>(slice: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(!slice.is_empty());

    let end = slice.len() - 1;
    let mut store = 0;

    for j in 0..end {
        if compare(&slice[j], &slice[end]) != Ordering::Greater {
            slice.swap(store, j);
            store += 1;
        }
    }

    slice.swap(store, end);
    store
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use quickcheck_macros::quickcheck;

    use super::{partition, quick_sort};

    #[test]
    fn test_partition_places_pivot_at_its_final_index() {
        let mut sut = [50, 30, 70, 20, 40];
        let pivot = partition(&mut sut, &mut i32::cmp);

        assert_eq!(pivot, 2);
        assert_eq!(sut[pivot], 40);
        assert!(sut[..pivot].iter().all(|&v| v <= 40));
        assert!(sut[pivot + 1..].iter().all(|&v| v > 40));
    }

    #[test]
    fn test_partition_with_greatest_pivot_keeps_order_of_prefix() {
        let mut sut = [3, 1, 2, 9];
        assert_eq!(partition(&mut sut, &mut i32::cmp), 3);
        assert_eq!(sut, [3, 1, 2, 9]);
    }

    #[test]
    fn test_partition_with_smallest_pivot() {
        let mut sut = [3, 1, 2, 0];
        assert_eq!(partition(&mut sut, &mut i32::cmp), 0);
        assert_eq!(sut[0], 0);
    }

    #[test]
    fn test_quick_sort_handles_trivial_slices() {
        let mut empty: [i32; 0] = [];
        quick_sort(&mut empty, &mut i32::cmp);
        assert_eq!(empty, []);

        let mut single = [42];
        quick_sort(&mut single, &mut i32::cmp);
        assert_eq!(single, [42]);
    }

    #[test]
    fn test_quick_sort_with_reversed_comparator() {
        let mut sut = [5, 1, 4, 2, 3];
        quick_sort(&mut sut, &mut |a: &i32, b: &i32| b.cmp(a));
        assert_eq!(sut, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_quick_sort_handles_duplicates() {
        let mut sut = [2, 2, 1, 2, 1, 1, 2];
        quick_sort(&mut sut, &mut i32::cmp);
        assert_eq!(sut, [1, 1, 1, 2, 2, 2, 2]);
    }

    #[test]
    fn test_quick_sort_already_sorted_input() {
        let mut sut: Vec<_> = (0..1024).collect();
        quick_sort(&mut sut, &mut i32::cmp);
        assert!(sut.iter().copied().eq(0..1024));
    }

    #[test]
    fn test_quick_sort_calls_comparator_on_pivot() {
        let mut calls = 0;
        let mut sut = [3, 2, 1];
        quick_sort(&mut sut, &mut |a: &i32, b: &i32| {
            calls += 1;
            a.cmp(b)
        });

        assert_eq!(sut, [1, 2, 3]);
        assert_eq!(calls, 3);
    }

    #[quickcheck]
    fn test_quick_sort_behaves_like_std_sort(mut seed: Vec<i32>) {
        let mut actual = seed.clone();
        quick_sort(&mut actual, &mut i32::cmp);

        seed.sort();
        assert_eq!(actual, seed);
    }

    #[quickcheck]
    fn test_partition_splits_around_pivot(seed: Vec<i16>) {
        if seed.is_empty() {
            return;
        }

        let mut sut = seed.clone();
        let pivot_value = *sut.last().unwrap();
        let pivot = partition(&mut sut, &mut |a: &i16, b: &i16| a.cmp(b));

        assert_eq!(sut[pivot], pivot_value);
        assert!(sut[..pivot].iter().all(|&v| v.cmp(&pivot_value) != Ordering::Greater));
        assert!(sut[pivot + 1..].iter().all(|&v| v > pivot_value));

        let mut expected = seed;
        expected.sort();
        sut.sort();
        assert_eq!(sut, expected);
    }
}
