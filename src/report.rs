//! Human-readable report blocks for the CLI.

use std::fmt;

use crate::algorithm::{Performance, Traversal};
use crate::graph::{Statistics, WordGraph};
use crate::mst::SpanningTree;

const RULE: &str = "=============================================";

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Adjacency List Statistics:")?;
        writeln!(f)?;
        writeln!(f, "Number of words without edges: {}", self.without_edges)?;
        writeln!(
            f,
            "Words with most edges: [{}]",
            self.words_with_most_edges.join(", ")
        )?;
        writeln!(f, "Average number of edges: {}", self.average_edges)?;
        write!(f, "{}", RULE)
    }
}

impl fmt::Display for Performance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Performance::BfsFaster(ratio) => {
                write!(f, "BFS performed {} times faster than DFS.", ratio)
            }
            Performance::DfsFaster(ratio) => {
                write!(f, "DFS performed {} times faster than BFS.", ratio)
            }
            Performance::Similar => write!(f, "BFS and DFS performed similarly."),
        }
    }
}

/// A traversal result bound to the words it refers to.
pub struct TraversalReport<'a> {
    pub label: &'a str,
    pub traversal: &'a Traversal,
    pub words: &'a WordGraph,
}

impl fmt::Display for TraversalReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let component = &self.traversal.component;
        let names: Vec<&str> = component
            .order
            .iter()
            .map(|&w| self.words.name(w))
            .collect();

        writeln!(f, "{}", RULE)?;
        writeln!(f, "{} Results:", self.label)?;
        writeln!(f, "The longest chain of vertices is: [{}]", names.join(", "))?;
        writeln!(f, "With a length of: {}", component.len())?;
        writeln!(
            f,
            "{} took {:.3} milliseconds",
            self.label,
            self.traversal.elapsed.as_secs_f64() * 1000.0
        )?;
        write!(f, "{}", RULE)
    }
}

pub fn performance_block(performance: Performance) -> String {
    format!("{}\nPerformance:\n{}\n{}", RULE, performance, RULE)
}

pub fn mst_block(tree: &SpanningTree) -> String {
    format!(
        "{}\nWeight of MST created by Prim's Algorithm:\n{}\n{}",
        RULE, tree.total_weight, RULE
    )
}
