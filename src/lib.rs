pub mod algorithm;
pub mod error;
pub mod graph;
pub mod mst;
pub mod report;
pub mod state;

pub use algorithm::{Component, Performance, Searcher, Traversal};
pub use error::{GraphError, Result};
pub use graph::{differs_by_one, Statistics, WordGraph};
pub use mst::{prim, SpanningTree};
