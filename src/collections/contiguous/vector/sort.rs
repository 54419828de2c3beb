use std::cmp::Ordering;

/// An in-place, non-stable quicksort over any slice, ordering ascending under `cmp`.
///
/// The pivot is taken from the middle of each partition, which keeps already-sorted input off the
/// quadratic worst case without the bookkeeping of a full median-of-three.
pub(crate) fn quicksort<T, F>(data: &mut [T], cmp: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    if data.len() <= 1 {
        return;
    }

    let pivot = partition(data, cmp);

    let (left, right) = data.split_at_mut(pivot);
    quicksort(left, cmp);
    // The pivot itself is in its final position.
    quicksort(&mut right[1..], cmp);
}

/// Lomuto partition: moves the pivot to its final sorted position and returns that index, with
/// everything <= pivot to its left and everything greater to its right.
fn partition<T, F>(data: &mut [T], cmp: &F) -> usize
where
    F: Fn(&T, &T) -> Ordering,
{
    let last = data.len() - 1;
    data.swap(data.len() / 2, last);

    let mut boundary = 0;
    for i in 0..last {
        if cmp(&data[i], &data[last]) != Ordering::Greater {
            data.swap(i, boundary);
            boundary += 1;
        }
    }

    data.swap(boundary, last);
    boundary
}
