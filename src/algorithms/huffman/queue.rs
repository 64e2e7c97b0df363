use core::cmp::Ordering;
use std::collections::BinaryHeap;

/// Anything the [`MinQueue`] can order. The weight is the only ordering key.
pub trait Weighted {
    fn weight(&self) -> usize;
}

/// Min-priority queue over [`Weighted`] items.
///
/// Items of equal weight come out in the order they were pushed, so a sequence of
/// pushes and pops is reproducible.
#[derive(Debug)]
pub struct MinQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    pushed: u64,
}

#[derive(Debug)]
struct Entry<T> {
    weight: usize,
    sequence: u64,
    item: T,
}

// Ordering looks at (weight, sequence) only and never at the item itself.
// `BinaryHeap` is a max-heap, so both keys are reversed.
impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T: Weighted> MinQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    pub fn push(&mut self, item: T) {
        let entry = Entry {
            weight: item.weight(),
            sequence: self.pushed,
            item,
        };
        self.pushed += 1;
        self.heap.push(entry);
    }

    /// Removes the lightest item, or the earliest pushed one among equally light items.
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }
}

impl<T: Weighted> FromIterator<T> for MinQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        for item in iter {
            queue.push(item);
        }
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item(usize, &'static str);

    impl Weighted for Item {
        fn weight(&self) -> usize {
            self.0
        }
    }

    #[test]
    fn pops_in_ascending_weight() {
        let mut queue: MinQueue<Item> = [Item(5, "e"), Item(1, "a"), Item(3, "c"), Item(2, "b")].into_iter().collect();
        let order: Vec<_> = core::iter::from_fn(|| queue.pop()).map(|item| item.1).collect();
        assert_eq!(order, ["a", "b", "c", "e"]);
        assert!(queue.pop().is_none());
    }

    #[test]
    fn ties_pop_in_push_order() {
        let mut queue = MinQueue::new();
        queue.push(Item(2, "first"));
        queue.push(Item(1, "light"));
        queue.push(Item(2, "second"));
        queue.push(Item(2, "third"));

        assert_eq!(queue.pop(), Some(Item(1, "light")));
        assert_eq!(queue.pop(), Some(Item(2, "first")));
        assert_eq!(queue.pop(), Some(Item(2, "second")));
        assert_eq!(queue.pop(), Some(Item(2, "third")));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn equal_weights_compare_equal_regardless_of_item() {
        let a = Entry { weight: 4, sequence: 0, item: "x" };
        let b = Entry { weight: 4, sequence: 0, item: "y" };
        assert_eq!(a, b);
    }
}
