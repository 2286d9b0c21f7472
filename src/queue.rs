use crate::errors::ToprankError;

const INITIAL_CAPACITY: usize = 10;

/// A payload together with the numeric priority it is ranked by.
/// Smaller priorities rank first.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<T> {
    pub value: T,
    pub priority: f64,
}

impl<T> Entry<T> {
    pub fn new(value: T, priority: f64) -> Entry<T> {
        Entry { value, priority }
    }
}

/// An array-backed binary min-heap priority queue.
///
/// Entries occupy positions `0..len()` of a single contiguous buffer, with
/// the entry at position `i > 0` no smaller than its parent at `(i - 1) / 2`,
/// so the minimum is always at position 0. The buffer starts with a fixed
/// number of slots and doubles whenever an insertion would overflow it; it
/// never shrinks.
pub struct PriorityQueue<T> {
    items: Vec<Entry<T>>,
}

impl<T> PriorityQueue<T> {
    pub fn new() -> PriorityQueue<T> {
        PriorityQueue {
            items: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Add an entry, keeping the heap ordered.
    pub fn enqueue(&mut self, entry: Entry<T>) {
        if self.items.len() == self.items.capacity() {
            self.grow();
        }
        // a full store has already doubled, so the push never reallocates
        self.items.push(entry);
        self.sift_up(self.items.len() - 1);
    }

    /// The entry with the smallest priority, without removing it.
    pub fn peek(&self) -> Result<&Entry<T>, ToprankError> {
        self.items.first().ok_or(ToprankError::EmptyQueue("peek"))
    }

    /// Remove and return the entry with the smallest priority. Repeated
    /// dequeues come back in non-decreasing priority order; entries with
    /// equal priorities come back in no particular order.
    pub fn dequeue(&mut self) -> Result<Entry<T>, ToprankError> {
        let n = self.items.len();
        if n > 1 {
            self.items.swap(0, n - 1);
        }
        match self.items.pop() {
            Some(front) => {
                if self.items.len() > 1 {
                    self.sift_down(0);
                }
                Ok(front)
            }
            None => Err(ToprankError::EmptyQueue("dequeue")),
        }
    }

    /// Drop all entries. The allocation is retained.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Check the ordering of every occupied position, reporting the first
    /// one whose priority is smaller than its parent's. Read-only; meant
    /// for tests and debugging, the mutating operations do not call it.
    pub fn validate(&self) -> Result<(), ToprankError> {
        for i in 1..self.items.len() {
            let p = (i - 1) / 2;
            if self.items[i].priority < self.items[p].priority {
                return Err(ToprankError::InvariantViolation(
                    i,
                    self.items[i].priority,
                    self.items[p].priority,
                ));
            }
        }
        Ok(())
    }

    // Replace the buffer with one of twice the capacity, moving the
    // entries across in position order.
    fn grow(&mut self) {
        let mut bigger = Vec::with_capacity(2 * self.items.capacity());
        bigger.append(&mut self.items);
        self.items = bigger;
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = (i - 1) / 2;
            if self.items[i].priority < self.items[p].priority {
                self.items.swap(i, p);
                i = p;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.items.len();
        loop {
            let mut c = 2 * i + 1;
            if c >= n {
                break;
            }
            // the right child only wins with a strictly smaller priority
            if c + 1 < n && self.items[c + 1].priority < self.items[c].priority {
                c += 1;
            }
            if self.items[c].priority < self.items[i].priority {
                self.items.swap(i, c);
                i = c;
            } else {
                break;
            }
        }
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        PriorityQueue::new()
    }
}
