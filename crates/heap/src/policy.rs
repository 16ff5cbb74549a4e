/// Ordering policy of a binary heap.
///
/// `precedes(a, b)` is true when `a` must sit strictly above `b`. Equal keys never precede each
/// other, which keeps sift operations from swapping ties.
pub trait HeapOrder<T> {
    fn precedes(a: &T, b: &T) -> bool;

    fn name() -> &'static str;
}

/// Smallest element at the root.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MinOrder;

impl<T: Ord> HeapOrder<T> for MinOrder {
    #[inline]
    fn precedes(a: &T, b: &T) -> bool {
        a < b
    }

    fn name() -> &'static str {
        "min"
    }
}

/// Largest element at the root.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MaxOrder;

impl<T: Ord> HeapOrder<T> for MaxOrder {
    #[inline]
    fn precedes(a: &T, b: &T) -> bool {
        a > b
    }

    fn name() -> &'static str {
        "max"
    }
}
