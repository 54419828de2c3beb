#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;

#[test]
fn test_fifo_order() {
    let mut list = DoublyLinkedList::new();
    for i in 0..10 {
        list.push_back(i);
        list.verify_links();
    }
    assert_eq!(list.len(), 10);

    for i in 0..10 {
        assert_eq!(
            list.pop_front(),
            Some(i),
            "push_back then pop_front should yield insertion order."
        );
        list.verify_links();
    }
    assert_eq!(list.len(), 0, "The length should reach zero after exactly n pops.");
    assert_eq!(list.pop_front(), None);
}

#[test]
fn test_lifo_order() {
    let mut list = DoublyLinkedList::new();
    for i in 0..10 {
        list.push_front(i);
        list.verify_links();
    }

    for i in (0..10).rev() {
        assert_eq!(
            list.pop_front(),
            Some(i),
            "push_front then pop_front should yield reverse insertion order."
        );
    }
    assert!(list.is_empty());
}

#[test]
fn test_front_back() {
    let mut list = DoublyLinkedList::new();
    assert_eq!(list.front(), None, "An empty list should have no front.");
    assert_eq!(list.back(), None, "An empty list should have no back.");

    list.push_back('A');
    list.push_back('B');
    list.push_front('C');
    list.verify_links();

    assert_eq!(list.front(), Some(&'C'));
    assert_eq!(list.back(), Some(&'B'));
    assert_eq!(list.len(), 3);

    assert_eq!(list.pop_front(), Some('C'));
    assert_eq!(list.front(), Some(&'A'));
}

#[test]
fn test_front_back_mut() {
    let mut list: DoublyLinkedList<_> = (0..3).collect();

    *list.front_mut().expect("list is non-empty") = 10;
    *list.back_mut().expect("list is non-empty") = 12;
    list.verify_links();

    assert_eq!(list.pop_front(), Some(10));
    assert_eq!(list.pop_back(), Some(12));
    assert_eq!(list.pop_back(), Some(1), "The middle value should be untouched.");
}

#[test]
fn test_pop_back() {
    let mut list: DoublyLinkedList<_> = (0..5).collect();

    for i in (0..5).rev() {
        assert_eq!(list.pop_back(), Some(i));
        list.verify_links();
    }
    assert_eq!(list.pop_back(), None, "Popping an empty list should return None.");
}

#[test]
fn test_mixed_ends() {
    let mut list = DoublyLinkedList::new();
    list.push_back(1);
    list.push_front(0);
    list.push_back(2);
    list.verify_links();

    assert_eq!(list.pop_back(), Some(2));
    assert_eq!(list.pop_front(), Some(0));
    assert_eq!(list.pop_back(), Some(1));
    assert_eq!(list.len(), 0);

    // Refilling after emptying should behave like a fresh list.
    list.push_front(5);
    list.verify_links();
    assert_eq!(list.front(), Some(&5));
    assert_eq!(list.back(), Some(&5));
}

#[test]
fn test_drop_counts() {
    let counter = CountedDrop::new(0);
    let list: DoublyLinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(list);
    assert_eq!(counter.take(), 10, "Dropping the list should drop each value exactly once.");

    let mut list: DoublyLinkedList<_> = iter::repeat_with(|| counter.clone()).take(3).collect();
    drop(list.pop_front());
    drop(list.pop_back());
    assert_eq!(counter.take(), 2, "Popped values are dropped once their owner discards them.");

    drop(list);
    assert_eq!(counter.take(), 1, "Only the remaining value should be dropped with the list.");
}
