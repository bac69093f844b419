use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A queued job: its slot in the job table, its key and its insertion number.
#[derive(Debug, PartialEq, Eq)]
struct Entry {
    key: i64,
    seq: u64,
    slot: usize,
}

// BinaryHeap is a max-heap, so the smallest (key, seq) has to compare greatest
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The queue of jobs waiting for the CPU.
///
/// Jobs are identified by their slot in the scheduler's job table. The
/// queue pops the smallest key first; jobs with equal keys come out in the
/// order they were inserted. Both operations are `O(log n)`.
#[derive(Debug, Default)]
pub struct ReadyQueue {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl ReadyQueue {
    pub fn new() -> Self {
        ReadyQueue::default()
    }

    /// Inserts `slot` at the position given by `key`, after every queued
    /// slot whose key is less than or equal to it.
    pub fn insert(&mut self, slot: usize, key: i64) {
        debug_assert!(!self.contains(slot), "slot {slot} already queued");
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { key, seq, slot });
    }

    /// Removes and returns the slot with the smallest key.
    pub fn extract_min(&mut self) -> Option<usize> {
        self.heap.pop().map(|entry| entry.slot)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn contains(&self, slot: usize) -> bool {
        self.heap.iter().any(|entry| entry.slot == slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn drain(queue: &mut ReadyQueue) -> Vec<usize> {
        std::iter::from_fn(|| queue.extract_min()).collect()
    }

    #[test]
    fn empty_queue() {
        let mut queue = ReadyQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.extract_min(), None);
    }

    #[test]
    fn ascending_keys() {
        let mut queue = ReadyQueue::new();
        queue.insert(0, 30);
        queue.insert(1, -5);
        queue.insert(2, 10);
        assert_eq!(queue.len(), 3);
        assert_eq!(drain(&mut queue), vec![1, 2, 0]);
        assert!(queue.is_empty());
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut queue = ReadyQueue::new();
        queue.insert(4, 1);
        queue.insert(2, 1);
        queue.insert(7, 0);
        queue.insert(3, 1);
        queue.insert(1, 2);
        assert_eq!(drain(&mut queue), vec![7, 4, 2, 3, 1]);
    }

    #[test]
    fn reinsertion_goes_behind_equal_keys() {
        let mut queue = ReadyQueue::new();
        queue.insert(0, 5);
        queue.insert(1, 5);
        let first = queue.extract_min().unwrap();
        queue.insert(first, 5);
        assert_eq!(drain(&mut queue), vec![1, 0]);
    }
}
