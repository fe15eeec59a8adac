//! Quicksort Kernel
//!
//! A Hoare-partition quicksort that recurses into the left part and loops on
//! the right part. The pivot is re-read from the middle of the current range
//! on every outer pass because the range is mutated in between.

use rand::Rng;

/// Length of the list sorted by each timed `quicksort` run
pub const QSORT_LEN: usize = 4999;

/// Sort `a[lo..=hi]` in place and return the whole slice.
///
/// `hi` must be a valid index whenever `lo < hi`. Ranges with `lo >= hi` are
/// left untouched.
pub fn qsort_kernel<T: PartialOrd + Copy>(a: &mut [T], lo: usize, hi: usize) -> &mut [T] {
    sort_range(a, lo as isize, hi as isize);
    a
}

// Signed indices: `j` may step one below `lo` after the last swap.
fn sort_range<T: PartialOrd + Copy>(a: &mut [T], mut lo: isize, hi: isize) {
    let mut i = lo;
    let mut j = hi;
    while i < hi {
        let pivot = a[((lo + hi) / 2) as usize];
        while i <= j {
            while a[i as usize] < pivot {
                i += 1;
            }
            while a[j as usize] > pivot {
                j -= 1;
            }
            if i <= j {
                a.swap(i as usize, j as usize);
                i += 1;
                j -= 1;
            }
        }
        if lo < j {
            sort_range(a, lo, j);
        }
        lo = i;
        j = hi;
    }
}

/// Sort a whole slice with `qsort_kernel`; empty and single-element slices are no-ops.
pub fn quicksort<T: PartialOrd + Copy>(a: &mut [T]) {
    if a.len() < 2 {
        return;
    }
    let hi = a.len() - 1;
    qsort_kernel(a, 0, hi);
}

/// `len` uniform floats in [0, 1)
pub fn random_list<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.gen::<f64>()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn is_sorted<T: PartialOrd>(a: &[T]) -> bool {
        a.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_sorts_random_floats() {
        let mut rng = StdRng::seed_from_u64(42);
        let list = random_list(&mut rng, QSORT_LEN);

        let mut sorted = list.clone();
        quicksort(&mut sorted);

        let mut expected = list;
        expected.sort_by(f64::total_cmp);
        assert!(is_sorted(&sorted));
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_duplicates_and_reverse_order() {
        let mut a = vec![5, 3, 5, 1, 3, 9, 0, 0, 9, 5];
        quicksort(&mut a);
        assert_eq!(a, vec![0, 0, 1, 3, 3, 5, 5, 5, 9, 9]);

        let mut b: Vec<i32> = (0..100).rev().collect();
        quicksort(&mut b);
        assert_eq!(b, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<f64> = Vec::new();
        quicksort(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![1.5];
        quicksort(&mut single);
        assert_eq!(single, vec![1.5]);

        // lo == hi on a longer slice touches nothing
        let mut a = vec![3, 2, 1];
        qsort_kernel(&mut a, 1, 1);
        assert_eq!(a, vec![3, 2, 1]);
    }

    #[test]
    fn test_subrange_only() {
        let mut a = vec![9, 4, 3, 2, 1, 0];
        qsort_kernel(&mut a, 1, 4);
        assert_eq!(a, vec![9, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_returns_whole_slice() {
        let mut a = vec![2.0, 1.0];
        let out = qsort_kernel(&mut a, 0, 1);
        assert_eq!(out, &[1.0, 2.0]);
    }

    #[test]
    fn test_random_list_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let list = random_list(&mut rng, 1000);
        assert_eq!(list.len(), 1000);
        assert!(list.iter().all(|&x| (0.0..1.0).contains(&x)));
    }
}
