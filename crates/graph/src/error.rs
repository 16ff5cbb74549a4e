use heap::HeapError;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("graph needs at least one vertex, got {vertex_count}")]
    InvalidSize { vertex_count: usize },

    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    #[error("negative weight {weight} on edge {from} -- {to}")]
    NegativeWeight { from: usize, to: usize, weight: i64 },

    #[error("weight {weight} on edge {from} -- {to} exceeds the maximum {max}")]
    WeightTooLarge {
        from: usize,
        to: usize,
        weight: i64,
        max: u64,
    },

    #[error("self-loop on vertex {vertex}")]
    SelfLoop { vertex: usize },

    #[error(transparent)]
    Heap(#[from] HeapError),
}

pub type Result<T> = std::result::Result<T, GraphError>;
