#![cfg(test)]

use super::*;
use crate::collections::traits::{Container, Kind};
use crate::util::error::EmptyContainer;
use crate::util::panic::assert_panics;

#[test]
fn test_stack_lifo() {
    let numbers = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    let mut stack = Stack::new();
    for number in numbers {
        stack.push(number);
    }

    assert!(
        stack.iter().copied().eq(numbers.iter().rev().copied()),
        "A Stack should iterate from the most recently pushed element."
    );
    assert_eq!(stack.top(), &9);
    assert!(stack.contains(&3));
    assert!(stack.contains_where(|n| n % 2 == 0));
    assert!(!stack.contains_where(|n| *n == 11));
    assert_eq!(stack.len(), 9);

    for expected in numbers.iter().rev() {
        assert_eq!(stack.pop(), *expected);
    }
    assert!(stack.is_empty());
    assert_eq!(stack.try_pop(), Err(EmptyContainer));
    assert_eq!(stack.try_top(), Err(EmptyContainer));
}

#[test]
fn test_stack_sort_changes_pop_order() {
    let mut stack: Stack<i32> = [1, 2, 3, 4, 5, 6, 7, 8, 9].into_iter().collect();
    stack.sort();

    assert!(stack.iter().copied().eq(1..=9));
    assert_eq!(
        stack.pop(),
        1,
        "After sorting, the smallest element should be popped first."
    );
}

#[test]
fn test_queue_fifo() {
    let numbers = [9, 8, 7, 6, 5, 4, 3, 2, 1];
    let mut queue = Queue::new();
    for number in numbers {
        queue.push(number);
    }

    assert!(queue.iter().copied().eq(numbers.iter().copied()));
    assert_eq!(queue.peek_front(), &9);

    queue.sort();
    assert!(
        queue.iter().copied().eq(1..=9),
        "Sorting a Queue should reverse the descending input."
    );
    assert!(queue.contains(&3));
    assert!(queue.contains_where(|n| n % 2 == 0));
    assert!(!queue.contains_where(|n| *n == 11));
    assert_eq!(queue.len(), 9);

    for expected in 1..=9 {
        assert_eq!(queue.pop(), expected);
    }
    assert!(queue.is_empty());
}

#[test]
fn test_queue_equality() {
    let a: Queue<i32> = (0..4).collect();
    let mut b = a.clone();
    assert!(a == b, "Queue equality should report the element-wise comparison.");

    b.pop();
    assert!(a != b);
    b.push(0);
    assert!(a != b, "Same elements in a different order aren't equal.");
}

#[test]
fn test_filter_adapters() {
    let mut stack: Stack<i32> = (0..6).collect();
    assert_eq!(stack.filter(|n| n % 2 == 1), 3);
    assert!(stack.iter().copied().eq([4, 2, 0]));

    let mut queue: Queue<i32> = (0..6).collect();
    Container::filter(&mut queue, |n| *n < 3);
    assert!(queue.iter().copied().eq([3, 4, 5]));
}

#[test]
fn test_kinds() {
    assert_eq!(Stack::<u8>::new().kind(), Kind::Stack);
    assert_eq!(Queue::<u8>::new().kind(), Kind::Queue);
    assert_eq!(LinkedList::<u8>::new().kind(), Kind::LinkedList);
    assert_eq!(Kind::Queue.tag(), 1);
    assert_eq!(Kind::try_from(2_u8), Ok(Kind::LinkedList));
    assert!(Kind::try_from(4_u8).is_err());
}

#[test]
fn test_adapter_preconditions() {
    assert_panics!({
        Stack::<u8>::new().top();
    });
    assert_panics!({
        Queue::<u8>::new().pop();
    });
    assert_panics!({
        Queue::<u8>::new().peek_front();
    });
}
