#![cfg(test)]

use super::*;
use crate::collections::traits::Container;
use crate::util::error::EmptyContainer;
use crate::util::panic::assert_panics;
use crate::util::tracked::Tracked;

fn collect<T: Clone>(list: &LinkedList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn test_push_pop_both_ends() {
    let mut list = LinkedList::new();
    list.push_front(2);
    list.push_front(1);
    list.push_back(3);
    list.verify_double_links();

    assert_eq!(collect(&list), [1, 2, 3]);
    assert_eq!(list.peek_front(), &1);
    assert_eq!(list.peek_back(), &3);

    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert!(list.is_empty(), "Popping every element should leave the list empty.");
    assert_eq!(list.pop_back(), None);
    assert!(list.front().is_none() && list.back().is_none());
}

#[test]
fn test_empty_preconditions() {
    let mut list = LinkedList::<u8>::new();
    assert_eq!(list.try_peek_front(), Err(EmptyContainer));
    assert_eq!(list.try_pop(), Err(EmptyContainer));

    assert_panics!({
        let list = LinkedList::<u8>::new();
        list.peek_back();
    });
    assert_panics!({
        let mut list = LinkedList::<u8>::new();
        Container::pop(&mut list);
    });
}

#[test]
fn test_filter_relinks() {
    let mut list: LinkedList<i32> = (0..10).collect();
    let removed = list.filter(|i| i % 3 == 0);
    list.verify_double_links();

    assert_eq!(removed, 4, "0, 3, 6 and 9 should be removed.");
    assert_eq!(
        collect(&list),
        [1, 2, 4, 5, 7, 8],
        "Removing the head, tail and interior nodes should keep the survivors in order."
    );

    let mut list: LinkedList<i32> = [2, 2, 2, 1, 2].into_iter().collect();
    list.filter(|i| *i == 2);
    list.verify_double_links();
    assert_eq!(
        collect(&list),
        [1],
        "Adjacent matches shouldn't be skipped after a removal."
    );

    list.filter(|_| true);
    assert!(list.is_empty());
    assert!(!list.contains_where(|_| true));
}

#[test]
fn test_sort() {
    let mut list: LinkedList<i32> = [5, -1, 3, 3, 0, 9, -7].into_iter().collect();
    list.sort();
    list.verify_double_links();
    assert_eq!(collect(&list), [-7, -1, 0, 3, 3, 5, 9]);

    let mut list: LinkedList<i32> = (0..20).rev().collect();
    list.sort();
    assert_eq!(collect(&list), (0..20).collect::<Vec<_>>());

    let mut list: LinkedList<i32> = (0..20).collect();
    list.sort();
    assert_eq!(collect(&list), (0..20).collect::<Vec<_>>());

    let mut list = LinkedList::<i32>::new();
    list.sort();
    assert!(list.is_empty());
}

#[test]
fn test_sort_is_stable() {
    let mut list: LinkedList<(i32, char)> = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e')]
        .into_iter()
        .collect();

    let mut keys = LinkedList::new();
    // Sort by key only by wrapping in a type ordered on the first field.
    #[derive(Debug, Clone, Copy)]
    struct ByKey(i32, char);
    impl PartialEq for ByKey {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }
    impl Eq for ByKey {}
    impl PartialOrd for ByKey {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for ByKey {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    while let Some((key, tag)) = list.pop_front() {
        keys.push_back(ByKey(key, tag));
    }
    keys.sort();

    assert_eq!(
        keys.iter().map(|k| k.1).collect::<String>(),
        "bdace",
        "Equal elements should keep their relative order."
    );
}

#[test]
fn test_equality_and_clone() {
    let list: LinkedList<i32> = (0..5).collect();
    let copy = list.clone();
    assert_eq!(list, copy);

    let mut shorter = copy.clone();
    shorter.pop_back();
    assert_ne!(list, shorter, "Lists of different lengths are never equal.");

    let mut changed = copy;
    changed.pop_front();
    changed.push_front(10);
    assert_ne!(list, changed);
}

#[test]
fn test_iter() {
    let list: LinkedList<i32> = (1..=4).collect();
    let mut iter = list.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(&1));

    let saved = iter.clone();
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.collect::<Vec<_>>(), [&2, &3]);
    assert_eq!(
        saved.collect::<Vec<_>>(),
        [&2, &3, &4],
        "A cloned iterator should resume independently."
    );

    assert_eq!(list.into_iter().rev().collect::<Vec<_>>(), [4, 3, 2, 1]);
}

#[test]
fn test_drops_every_element() {
    let drops = Tracked::counter();
    let mut list: LinkedList<Tracked> = (0..10).map(|i| Tracked::new(i, &drops)).collect();

    list.filter(|t| t.value % 2 == 0);
    assert_eq!(drops.get(), 5, "Filtered elements should be dropped immediately.");

    list.sort();
    assert_eq!(drops.get(), 5, "Sorting should move elements, not drop them.");

    drop(list.pop_front());
    assert_eq!(drops.get(), 6);

    drop(list);
    assert_eq!(drops.get(), 10, "Dropping the list should drop every remaining element.");
}

#[test]
fn test_display() {
    let list: LinkedList<i32> = (1..=3).collect();
    assert_eq!(list.to_string(), "(1) <-> (2) <-> (3)");
    assert_eq!(format!("{list:?}"), "[1, 2, 3]");
}
