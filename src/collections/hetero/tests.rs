#![cfg(test)]

use super::*;
use crate::collections::traits::{Container, Kind};
use crate::util::panic::assert_panics;

fn example_container() -> HeteroContainer<i32> {
    let mut container = HeteroContainer::new();
    container.add_container(Kind::Stack);
    container.add_container(Kind::LinkedList);
    container.add_container(Kind::Queue);
    container.add_container(Kind::BinarySearchTree);

    for value in [10, -1, 3, 4, -4] {
        container.add_element(value);
    }
    container
}

#[test]
fn test_routing_picks_smallest_backend() {
    let container = example_container();

    let lens: Vec<usize> = container.backends().iter().map(Backend::len).collect();
    assert_eq!(
        lens,
        [2, 1, 1, 1],
        "Ties between equally sized backends should go to the earliest one."
    );
    assert!(container.get(0).is_some_and(|backend| backend.contains(&10)));
    assert!(container.get(0).is_some_and(|backend| backend.contains(&-4)));
    assert!(container.get(1).is_some_and(|backend| backend.contains(&-1)));
    assert!(container.get(2).is_some_and(|backend| backend.contains(&3)));
    assert!(container.get(3).is_some_and(|backend| backend.contains(&4)));
    assert!(container.get(4).is_none());
    assert!(
        container
            .kinds()
            .eq([Kind::Stack, Kind::LinkedList, Kind::Queue, Kind::BinarySearchTree])
    );
}

#[test]
fn test_sorted_merge() {
    let mut container = example_container();
    container.sort();

    assert!(container.iter().copied().eq([-4, -1, 3, 4, 10]));
    assert_eq!(container.iter().len(), 5);

    let mut from_loop = Vec::new();
    for value in &container {
        from_loop.push(*value);
    }
    assert_eq!(from_loop, [-4, -1, 3, 4, 10]);
}

#[test]
fn test_filter_sort_and_seek() {
    let mut container = example_container();
    container.sort();

    let added = [14, 34, -24, 11, 4, 10, 3, 4, -4, 14, 34, -24, 11, 4, -666];
    for value in added {
        container.add_element(value);
    }
    assert!(container.contains(&4));
    assert_eq!(container.len(), 20);

    container.filter(|n| *n == 4);
    assert_eq!(container.container_count(), 4);
    assert_eq!(container.len(), 16);
    assert!(!container.contains(&4));
    assert!(!container.contains(&17));

    container.sort();
    assert_eq!(container.container_count(), 4);
    assert_eq!(container.len(), 16);
    assert!(!container.contains(&4));

    let mut expected: Vec<i32> = [10, -1, 3, -4]
        .into_iter()
        .chain(added.into_iter().filter(|n| *n != 4))
        .collect();
    expected.sort();
    assert!(container.iter().copied().eq(expected));

    assert!(
        container.seek(&4) == container.sorted_end(),
        "Seeking a removed value should give the end position."
    );
    let found = container.seek(&-666);
    assert!(found != container.sorted_end());
    assert_eq!(found.current(), Some(&-666));
    assert_eq!(container.seek(&11).current(), Some(&11));
}

#[test]
fn test_seek_stops_at_greater_element() {
    let mut container = HeteroContainer::new();
    container.add_container(Kind::Queue);
    for value in [5, 1, 3] {
        container.add_element(value);
    }

    // Unsorted, so the walk meets 5 before it could find 1.
    assert!(container.seek(&1) == container.sorted_end());

    container.sort();
    assert_eq!(container.seek(&1).current(), Some(&1));
}

#[test]
fn test_sort_iter_equality() {
    let container = example_container();
    let other = example_container();

    let mut iter = container.iter();
    assert!(iter == container.iter());
    assert!(iter != other.iter(), "Iterators over different containers should never be equal.");

    iter.advance();
    assert_eq!(iter.processed(), 2);
    assert!(iter != container.iter());

    assert_eq!(iter.by_ref().count(), 4);
    assert!(iter.is_end());
    assert!(iter == container.sorted_end());
    assert!(container.sorted_end() != other.sorted_end());

    let empty = HeteroContainer::<i32>::new();
    assert!(empty.iter() == empty.sorted_end());
    assert_eq!(empty.iter().next(), None);
}

#[test]
fn test_sort_iter_ties_prefer_earliest_backend() {
    let mut container = HeteroContainer::new();
    container.add_container(Kind::Queue);
    container.add_container(Kind::Queue);
    container.add_element(7);
    container.add_element(7);

    let mut iter = container.iter();
    assert_eq!(iter.current_backend(), Some(0));
    iter.advance();
    assert_eq!(iter.current_backend(), Some(1));
    iter.advance();
    assert_eq!(iter.current_backend(), None);
}

#[test]
fn test_specific_iter() {
    let container: HeteroContainer<i32> = "4\n1 3 1 2 3 \n0 0 \n3 3 20 10 30 \n2 1 100 \n"
        .parse()
        .expect("valid input");

    assert!(
        container
            .specific_iter(Traversal::Depth)
            .copied()
            .eq([1, 2, 3, 20, 10, 30, 100])
    );
    assert!(
        container
            .specific_iter(Traversal::Breadth)
            .copied()
            .eq([1, 20, 100, 2, 10, 3, 30]),
        "Breadth traversal should skip exhausted backends while rotating."
    );
    assert_eq!(container.specific_iter(Traversal::Breadth).len(), 7);
    assert!(Traversal::default().is_depth());

    let empty = HeteroContainer::<i32>::new();
    assert_eq!(empty.specific_iter(Traversal::Breadth).next(), None);
}

#[test]
fn test_add_without_backends() {
    let mut container = HeteroContainer::new();
    assert_eq!(container.try_add_element(1), Err(NoContainers));
    assert!(container.is_empty());

    assert_panics!({
        HeteroContainer::new().add_element(1);
    });
}

#[test]
fn test_write_format() {
    let container = example_container();

    let mut output = Vec::new();
    container.write_to(&mut output).expect("writing to a Vec can't fail");
    let output = String::from_utf8(output).expect("valid utf-8");

    assert_eq!(
        output,
        format!("4\n0 2 -4 10 \n2 1 -1 \n1 1 3 \n3 1 4 \n{LEGEND}")
    );
    assert_eq!(output, container.to_string());
}

#[test]
fn test_read_round_trip() {
    let mut container = HeteroContainer::new();
    container.add_container(Kind::BinarySearchTree);
    container.add_container(Kind::Queue);
    container.add_container(Kind::Stack);
    for value in [5, 9, 3, 8, 1, 7, 4, 6, 2] {
        container.add_element(value);
    }

    let read: HeteroContainer<i32> =
        HeteroContainer::read_from(container.to_string().as_bytes()).expect("valid input");

    assert!(read.kinds().eq(container.kinds()));
    assert_eq!(read.len(), container.len());
    for (read, original) in read.backends().iter().zip(container.backends()) {
        let mut read: Vec<i32> = read.iter().copied().collect();
        let mut original: Vec<i32> = original.iter().copied().collect();
        read.sort();
        original.sort();
        assert_eq!(read, original, "Each backend should keep its elements.");
    }

    let (Some(Backend::BinarySearchTree(read_tree)), Some(Backend::BinarySearchTree(tree))) =
        (read.get(0), container.get(0))
    else {
        panic!("the first backend should be a tree");
    };
    assert!(
        read_tree.pre_order_iter().eq(tree.pre_order_iter()),
        "Writing a tree in pre-order should rebuild the same shape."
    );

    let (Some(Backend::Queue(read_queue)), Some(Backend::Queue(queue))) =
        (read.get(1), container.get(1))
    else {
        panic!("the second backend should be a queue");
    };
    assert!(read_queue.iter().eq(queue.iter()), "A queue should keep its order.");
}

#[test]
fn test_read_ignores_trailing_text() {
    let read: HeteroContainer<i32> = "1\n1 2 4 5 \nanything after the data is ignored"
        .parse()
        .expect("valid input");

    assert!(read.kinds().eq([Kind::Queue]));
    assert!(read.specific_iter(Traversal::Depth).copied().eq([4, 5]));

    let read: HeteroContainer<i32> = "0".parse().expect("valid input");
    assert_eq!(read.container_count(), 0);
}

#[test]
fn test_read_errors() {
    let result = "2\n0 2 1".parse::<HeteroContainer<i32>>();
    assert!(matches!(result, Err(ReadError::UnexpectedEnd(UnexpectedEnd { expected: "an element" }))));

    let result = "".parse::<HeteroContainer<i32>>();
    assert!(result.is_err_and(|err| err.is_unexpected_end()));

    let result = "1\n7 0".parse::<HeteroContainer<i32>>();
    assert!(matches!(result, Err(ReadError::UnknownKind(UnknownKind { tag: 7 }))));

    let result = "1\n0 1 abc".parse::<HeteroContainer<i32>>();
    let Err(ReadError::InvalidToken(invalid)) = result else {
        panic!("expected an invalid token error");
    };
    assert_eq!(invalid.token, "abc");
    assert_eq!(invalid.position, 3);

    let result = "-1".parse::<HeteroContainer<i32>>();
    assert!(result.is_err_and(|err| err.is_invalid_token()));
}

#[test]
fn test_failed_load_leaves_container() {
    let mut container = example_container();
    let before = container.to_string();

    let result = container.load_from("3\n0 1 1 \n9 0 \n".as_bytes());
    assert!(result.is_err_and(|err| err.is_unknown_kind()));
    assert_eq!(container.to_string(), before, "A failed load should leave the container untouched.");

    container
        .load_from("1\n2 3 1 2 3 \n".as_bytes())
        .expect("valid input");
    assert!(container.kinds().eq([Kind::LinkedList]));
    assert_eq!(container.len(), 3);
}

#[test]
fn test_clone_is_deep() {
    let container = example_container();
    let mut clone = container.clone();

    clone.filter(|n| *n < 0);
    clone.add_element(100);

    assert_eq!(container.len(), 5);
    assert_eq!(clone.len(), 4);
    assert!(clone.kinds().eq(container.kinds()));
    assert!(container.contains(&-1));
    assert!(!clone.contains(&-1));
}

#[test]
fn test_contains_where() {
    let container = example_container();

    assert!(container.contains_where(|n| *n > 9));
    assert!(!container.contains_where(|n| *n > 10));

    let mut calls = 0;
    container.contains_where(|_| {
        calls += 1;
        false
    });
    assert_eq!(calls, 5, "A failed search should visit every element once.");
}

#[test]
fn test_deep_tree_backend() {
    let mut container = HeteroContainer::new();
    container.add_container(Kind::BinarySearchTree);
    for value in 0..40_000 {
        container.add_element(value);
    }

    let copy = container.clone();
    assert_eq!(copy.len(), 40_000);
    assert!(copy.contains(&39_999));
    assert!(copy.iter().copied().eq(0..40_000));
    assert_eq!(copy.specific_iter(Traversal::Depth).count(), 40_000);
    drop(copy);

    container.filter(|n| n % 2 == 1);
    container.sort();
    assert_eq!(container.len(), 20_000);
    assert!(container.iter().copied().eq((0..40_000).step_by(2)));
    assert_eq!(container.seek(&39_998).current(), Some(&39_998));
}
