use std::fmt;
use std::marker::PhantomData;

use crate::HeapError;
use crate::Result;
use crate::policy::HeapOrder;
use crate::policy::MaxOrder;
use crate::policy::MinOrder;

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
fn left_child(i: usize) -> usize {
    2 * i + 1
}

#[inline]
fn right_child(i: usize) -> usize {
    2 * i + 2
}

/// Array-backed binary heap over the implicit complete tree `parent(i) = (i - 1) / 2`.
///
/// The policy `P` decides which element surfaces at the root. Sift-down descends into the more
/// extreme child and prefers the left child on ties, so results are deterministic for equal keys.
#[derive(Clone, Debug)]
pub struct BinaryHeap<T, P = MinOrder> {
    data: Vec<T>,
    _policy: PhantomData<P>,
}

pub type MinHeap<T> = BinaryHeap<T, MinOrder>;
pub type MaxHeap<T> = BinaryHeap<T, MaxOrder>;

impl<T, P: HeapOrder<T>> BinaryHeap<T, P> {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            _policy: PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            _policy: PhantomData,
        }
    }

    /// Heapifies `values` in place: sift-down from the last internal node back to the root.
    pub fn build_from(values: Vec<T>) -> Self {
        let mut heap = Self {
            data: values,
            _policy: PhantomData,
        };
        let len = heap.data.len();
        for i in (0..len / 2).rev() {
            heap.sift_down(i);
        }
        tracing::trace!(len, order = <P as HeapOrder<T>>::name(), "heap built");
        heap
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Elements in array order (root first, then level by level).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        let last = self.data.len() - 1;
        self.sift_up(last);
    }

    pub fn peek(&self) -> Result<&T> {
        self.data.first().ok_or(HeapError::EmptyHeap)
    }

    pub fn extract_root(&mut self) -> Result<T> {
        self.pop_root().ok_or(HeapError::EmptyHeap)
    }

    /// Drains the heap root by root: ascending for a min-heap, descending for a max-heap.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Some(root) = self.pop_root() {
            out.push(root);
        }
        out
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|i| !P::precedes(&self.data[i], &self.data[parent(i)]))
    }

    fn pop_root(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let root = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(root)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = parent(i);
            if !P::precedes(&self.data[i], &self.data[p]) {
                break;
            }
            self.data.swap(i, p);
            i = p;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.data.len();
        loop {
            let left = left_child(i);
            if left >= len {
                break;
            }

            let mut best = i;
            if P::precedes(&self.data[left], &self.data[best]) {
                best = left;
            }
            let right = right_child(i);
            if right < len && P::precedes(&self.data[right], &self.data[best]) {
                best = right;
            }

            if best == i {
                break;
            }
            self.data.swap(i, best);
            i = best;
        }
    }
}

impl<T: fmt::Display, P: HeapOrder<T>> BinaryHeap<T, P> {
    /// Sideways tree: right subtree above its parent, left subtree below, four spaces per level.
    pub fn write_tree<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        self.write_node(out, 0, 0)
    }

    pub fn render_tree(&self) -> String {
        let mut out = String::new();
        let _ = self.write_tree(&mut out);
        out
    }

    fn write_node<W: fmt::Write>(&self, out: &mut W, i: usize, level: usize) -> fmt::Result {
        if i >= self.data.len() {
            return Ok(());
        }
        self.write_node(out, right_child(i), level + 1)?;
        for _ in 0..level {
            out.write_str("    ")?;
        }
        writeln!(out, "{}", self.data[i])?;
        self.write_node(out, left_child(i), level + 1)
    }
}

impl<T, P: HeapOrder<T>> Default for BinaryHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: HeapOrder<T>> From<Vec<T>> for BinaryHeap<T, P> {
    fn from(values: Vec<T>) -> Self {
        Self::build_from(values)
    }
}

impl<T, P: HeapOrder<T>> FromIterator<T> for BinaryHeap<T, P> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from(iter.into_iter().collect())
    }
}

impl<T, P: HeapOrder<T>> Extend<T> for BinaryHeap<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: fmt::Display, P> fmt::Display for BinaryHeap<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}
