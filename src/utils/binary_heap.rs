use std::cmp;

const INVALID_POSITION: usize = usize::MAX;

/// elements stored in the heap provide a unique index so that their position can be tracked
pub trait HeapElement {
    fn unique_index(&self) -> usize;
}

/// min heap with position tracking, supports decreasing the key of contained elements
pub struct MinBinaryHeap<T: HeapElement + Ord> {
    data: Vec<T>,
    positions: Vec<usize>,
}

impl<T: HeapElement + Ord> MinBinaryHeap<T> {
    pub fn new(size: usize) -> Self {
        MinBinaryHeap {
            data: Vec::new(),
            positions: vec![INVALID_POSITION; size],
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains_unique_index(&self, unique_index: usize) -> bool {
        self.positions[unique_index] != INVALID_POSITION
    }

    pub fn insert(&mut self, entry: T) {
        let position = self.data.len();
        self.positions[entry.unique_index()] = position;
        self.data.push(entry);

        self.sift_up(position);
    }

    /// inserts the entry or overwrites the contained element with the same unique index
    pub fn insert_or_decrease(&mut self, entry: T) {
        let position = self.positions[entry.unique_index()];

        if position == INVALID_POSITION {
            self.insert(entry);
        } else {
            self.data[position] = entry;
            self.sift_up(position);
        }
    }

    /// smallest element without removing it
    pub fn get_min(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last = self.data.len() - 1;
        self.swap(0, last);

        let min_element = self.data.pop()?;
        self.positions[min_element.unique_index()] = INVALID_POSITION;

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Some(min_element)
    }

    pub fn clear(&mut self) {
        for element in &self.data {
            self.positions[element.unique_index()] = INVALID_POSITION;
        }

        self.data.clear();
    }

    fn sift_up(&mut self, position: usize) {
        let mut current = position;

        while current > 0 {
            let parent = (current - 1) / 2;

            if self.data[parent] <= self.data[current] {
                break;
            }

            self.swap(parent, current);
            current = parent;
        }
    }

    fn sift_down(&mut self, position: usize) {
        let mut current = position;

        loop {
            let first_child = 2 * current + 1;
            let end = cmp::min(2 * current + 3, self.data.len());

            let mut smallest = current;
            for child in first_child..end {
                if self.data[child] < self.data[smallest] {
                    smallest = child;
                }
            }

            if smallest == current {
                break;
            }

            self.swap(smallest, current);
            current = smallest;
        }
    }

    fn swap(&mut self, first: usize, second: usize) {
        self.positions[self.data[first].unique_index()] = second;
        self.positions[self.data[second].unique_index()] = first;

        self.data.swap(first, second);
    }
}
