use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

/// An ordered test element which counts how many times values sharing its counter are dropped.
pub struct Tracked {
    pub value: i32,
    pub drops: Rc<Cell<usize>>,
}

impl Tracked {
    pub fn new(value: i32, drops: &Rc<Cell<usize>>) -> Tracked {
        Tracked {
            value,
            drops: Rc::clone(drops),
        }
    }

    pub fn counter() -> Rc<Cell<usize>> {
        Rc::new(Cell::new(0))
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Tracked::new(self.value, &self.drops)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tracked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Debug for Tracked {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
