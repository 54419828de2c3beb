#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_capacity_selection() {
    let vec: Vector<u8> = Vector::new();
    assert_eq!(vec.cap(), 16, "Hint-less construction should pick the default capacity.");
    assert_eq!(vec.len(), 0);

    let vec: Vector<u8> = Vector::with_cap(0);
    assert_eq!(vec.cap(), 16, "A zero hint should pick the default capacity.");

    let vec: Vector<u8> = Vector::with_cap(5);
    assert_eq!(vec.cap(), 5, "A non-zero hint should be used exactly.");
}

#[test]
fn test_push_preserves_order() {
    let mut vec = Vector::new();
    for i in 0_usize..100 {
        vec.push(i);
        assert_eq!(vec.len(), i + 1, "Each push should increase the length by one.");
    }

    for i in 0..100 {
        assert_eq!(vec[i], i, "Appended values should be readable in insertion order.");
    }
}

#[test]
fn test_insert_at_front_reverses() {
    let mut vec = Vector::new();
    for i in 0_usize..50 {
        vec.insert(0, i);
    }

    for i in 0..50 {
        assert_eq!(vec[i], 49 - i, "Repeated front insertion should reverse the order.");
    }
}

#[test]
fn test_insert_mid() {
    let mut vec = Vector::with_cap(4);
    vec.push(10);
    vec.push(20);
    vec.insert(1, 15);

    assert_eq!(&*vec, &[10, 15, 20]);
    assert_eq!(vec.len(), 3);
}

#[test]
fn test_growth_doubles_and_never_shrinks() {
    let mut vec = Vector::with_cap(4);
    vec.extend(0..4);
    assert_eq!(vec.cap(), 4, "No growth should occur until the capacity is exceeded.");

    vec.push(4);
    assert_eq!(vec.cap(), 8, "Growth should double the capacity.");

    vec.extend(5..9);
    assert_eq!(vec.cap(), 16, "A second overflow should double the capacity again.");

    for _ in 0..5 {
        vec.remove(0);
    }
    vec.clear();
    assert_eq!(vec.cap(), 16, "Neither remove nor clear should shrink the capacity.");
}

#[test]
fn test_remove() {
    let mut vec: Vector<_> = (0..6).collect();

    assert_eq!(vec.remove(0), 0);
    assert_eq!(vec.remove(4), 5, "Removal should work at the new last index.");
    assert_eq!(vec.remove(1), 2);
    assert_eq!(&*vec, &[1, 3, 4], "Remaining elements should have shifted down in order.");
    assert_eq!(vec.len(), 3);
}

#[test]
fn test_replace() {
    let mut vec: Vector<_> = (0..3).collect();

    assert_eq!(vec.replace(1, 10), 1, "Replace should return the old value.");
    assert_eq!(&*vec, &[0, 10, 2]);
    assert_eq!(vec.len(), 3, "Replace shouldn't change the length.");
}

#[test]
fn test_pop() {
    let mut vec: Vector<_> = (0..3).collect();

    assert_eq!(vec.pop(), Some(2));
    assert_eq!(vec.pop(), Some(1));
    assert_eq!(vec.pop(), Some(0));
    assert_eq!(vec.pop(), None, "Popping an empty Vector should return None.");
}

#[test]
fn test_search_linear() {
    let vec: Vector<_> = [5_u8, 3, 9, 3, 1].into_iter().collect();

    assert_eq!(vec.search(&9, u8::cmp, false), Some(&9));
    assert_eq!(vec.search(&7, u8::cmp, false), None, "A miss should be reported as None.");

    let hit = vec.search(&3, u8::cmp, false).expect("3 is present");
    assert!(
        std::ptr::eq(hit, &vec[1]),
        "The linear scan should return the first of the duplicate matches."
    );
}

#[test]
fn test_search_binary() {
    let vec: Vector<_> = [2_u8, 3, 5, 7, 11, 13, 17].into_iter().collect();

    for prime in vec.iter() {
        assert_eq!(
            vec.search(prime, u8::cmp, true),
            Some(prime),
            "Every present key should be found by the binary search."
        );
    }
    for absent in [0_u8, 1, 4, 12, 100] {
        assert_eq!(
            vec.search(&absent, u8::cmp, true),
            None,
            "Absent keys should be reported as None by the binary search."
        );
    }

    let empty: Vector<u8> = Vector::new();
    assert_eq!(empty.search(&1, u8::cmp, true), None);
}

#[test]
fn test_sort() {
    let mut vec: Vector<_> = [23_u8, 4, 42, 4, 15, 8, 16, 15, 15].into_iter().collect();
    vec.sort(u8::cmp);
    assert_eq!(
        &*vec,
        &[4, 4, 8, 15, 15, 15, 16, 23, 42],
        "Sorting should produce ascending order with the multiset of values unchanged."
    );

    vec.sort(u8::cmp);
    assert_eq!(&*vec, &[4, 4, 8, 15, 15, 15, 16, 23, 42], "Sorting should be idempotent.");

    let mut vec: Vector<_> = (0..20).rev().collect();
    vec.sort(i32::cmp);
    for pair in vec.windows(2) {
        assert!(pair[0] <= pair[1], "Adjacent pairs should be ordered after sorting.");
    }

    let mut empty: Vector<u8> = Vector::new();
    empty.sort(u8::cmp);
    assert!(empty.is_empty());
}

#[test]
fn test_drop_counts() {
    let counter = CountedDrop::new(0);
    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(vec);
    assert_eq!(counter.take(), 10, "Dropping the Vector should drop each element exactly once.");

    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    vec.clear();
    assert_eq!(counter.take(), 10, "Clearing should drop each element exactly once.");
    assert_eq!(vec.len(), 0);

    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(3).collect();
    drop(vec.remove(1));
    assert_eq!(counter.take(), 1, "A removed element is dropped once its owner discards it.");
    drop(vec.replace(0, counter.clone()));
    assert_eq!(counter.take(), 1, "Replace should hand exactly one old element to the caller.");
}

#[test]
fn test_out_of_bounds_panics() {
    assert_panics!({
        let vec: Vector<u8> = (0..3).collect();
        vec[3]
    }, "Indexing past len should panic.");

    assert_panics!({
        let mut vec: Vector<u8> = (0..3).collect();
        vec.remove(3)
    }, "Removing past len should panic.");

    assert_panics!({
        let mut vec: Vector<u8> = (0..3).collect();
        vec.insert(4, 0)
    }, "Inserting past len + 1 should panic.");

    assert_panics!({
        let mut vec: Vector<u8> = (0..3).collect();
        vec.replace(3, 0)
    }, "Replacing past len should panic.");
}

#[test]
fn test_try_insert_errors() {
    let mut vec: Vector<u8> = (0..3).collect();

    let err = vec.try_insert(5, 0).expect_err("index 5 is out of bounds for len 3");
    assert!(
        err.is_index_out_of_bounds(),
        "An out-of-range index should report the index error variant."
    );

    vec.try_insert(3, 3).expect("index == len appends");
    assert_eq!(&*vec, &[0, 1, 2, 3]);
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..100 {
        vec.push(ZeroSizedType);
    }

    assert_eq!(vec.len(), 100);
    assert_eq!(vec[99], ZeroSizedType, "Indexing a ZST Vector should work.");
    assert_eq!(vec.pop(), Some(ZeroSizedType));
    assert_eq!(vec.len(), 99);
}
