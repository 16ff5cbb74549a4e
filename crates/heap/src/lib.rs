mod binary_heap;
pub mod policy;

pub use binary_heap::BinaryHeap;
pub use binary_heap::MaxHeap;
pub use binary_heap::MinHeap;
pub use policy::HeapOrder;
pub use policy::MaxOrder;
pub use policy::MinOrder;

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum HeapError {
    #[error("heap is empty")]
    EmptyHeap,
}

pub type Result<T> = std::result::Result<T, HeapError>;
