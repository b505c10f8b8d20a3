/// Rearranges `indices` so that `indices[nth]` holds the element that would
/// be there if the slice were sorted by `key`, everything before it has a
/// key `<=` and everything after it a key `>=`.
///
/// Hoare's selection: the pivot is the middle element of the active range,
/// and both cursors stop on keys equal to the pivot so runs of duplicates are
/// split evenly. Every pass shrinks the active range by at least one element.
///
/// # Panics
///
/// Panics if `nth` is out of bounds.
pub fn select<F>(indices: &mut [usize], nth: usize, key: F)
where
    F: Fn(usize) -> f64,
{
    assert!(nth < indices.len(), "selection rank out of bounds");

    let mut left = 0;
    let mut right = indices.len() - 1;
    while left < right {
        let pivot = key(indices[left + (right - left) / 2]);

        // [left, i) <= pivot and [hi, right] >= pivot
        let mut i = left;
        let mut hi = right + 1;
        loop {
            while key(indices[i]) < pivot {
                i += 1;
            }
            while pivot < key(indices[hi - 1]) {
                hi -= 1;
            }
            if i < hi {
                indices.swap(i, hi - 1);
                i += 1;
                hi -= 1;
            }
            if i >= hi {
                break;
            }
        }

        // Whatever lies in [hi, i) equals the pivot.
        if nth < hi {
            right = hi - 1;
        } else if nth >= i {
            left = i;
        } else {
            return;
        }
    }
}
