use std::collections::BTreeMap;
use std::io::prelude::*;

use bstr::io::BufReadExt;
use bstr::ByteSlice;
use fxhash::FxHashMap;
use tracing::{debug, warn};

use crate::error::{GraphError, Result};

pub type AdjacencyList = Vec<usize>;
pub type BTreeGraph = BTreeMap<usize, AdjacencyList>;

/// An adjacency list representation of a word-ladder graph, including
/// the maps required to go between words and node indices. Indices are
/// handed out in first-insertion order, so iterating the keys of
/// `graph` is the enumeration order every algorithm starts from.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    pub graph: BTreeGraph,
    pub inv_names: Vec<String>,
    name_map: FxHashMap<String, usize>,
}

/// Degree statistics over every vertex of a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub without_edges: usize,
    pub most_edges: usize,
    pub words_with_most_edges: Vec<String>,
    pub average_edges: f64,
}

/// True iff `a` and `b` differ in exactly one character position.
/// Words of unequal length are never adjacent.
pub fn differs_by_one(a: &str, b: &str) -> bool {
    if a.chars().count() != b.chars().count() {
        return false;
    }

    let mut differences = 0;
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            differences += 1;
            if differences > 1 {
                return false;
            }
        }
    }

    differences == 1
}

impl WordGraph {
    /// Constructs the graph from a word collection, connecting every
    /// pair of words at Hamming distance one. Duplicate words collapse
    /// into the first occurrence. Every word must have the same length
    /// as the first one.
    pub fn from_words<I, S>(words: I) -> Result<WordGraph>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut name_map = FxHashMap::default();
        let mut inv_names: Vec<String> = Vec::new();
        let mut expected: Option<usize> = None;
        let mut duplicates = 0;

        for word in words {
            let word = word.as_ref();
            if name_map.contains_key(word) {
                duplicates += 1;
                continue;
            }

            let found = word.chars().count();
            match expected {
                Some(expected) if found != expected => {
                    return Err(GraphError::LengthMismatch {
                        word: word.to_string(),
                        expected,
                        found,
                    });
                }
                Some(_) => {}
                None => expected = Some(found),
            }

            name_map.insert(word.to_string(), inv_names.len());
            inv_names.push(word.to_string());
        }

        if duplicates > 0 {
            warn!(duplicates, "dropped duplicate words");
        }

        let mut graph: BTreeGraph = BTreeMap::new();
        for (ix, word) in inv_names.iter().enumerate() {
            let adjacent: AdjacencyList = inv_names
                .iter()
                .enumerate()
                .filter(|&(other_ix, other)| {
                    other_ix != ix && differs_by_one(word, other)
                })
                .map(|(other_ix, _)| other_ix)
                .collect();
            graph.insert(ix, adjacent);
        }

        debug!(
            vertices = graph.len(),
            endpoints = graph.values().map(Vec::len).sum::<usize>(),
            "built adjacency list"
        );

        Ok(WordGraph {
            graph,
            inv_names,
            name_map,
        })
    }

    /// Reads one word per line from the given input stream, skipping
    /// blank lines and trimming surrounding whitespace, and builds the
    /// graph from the result.
    pub fn from_reader<T: BufRead>(reader: &mut T) -> Result<WordGraph> {
        let mut lines: Vec<Vec<u8>> = Vec::new();
        reader.for_byte_line(|line| {
            lines.push(line.trim().to_vec());
            Ok(true)
        })?;

        let mut words = Vec::with_capacity(lines.len());
        for (ix, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let word = line
                .to_str()
                .map_err(|_| GraphError::InvalidUtf8 { line: ix + 1 })?;
            words.push(word);
        }

        debug!(words = words.len(), "read word list");

        WordGraph::from_words(words)
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    pub fn name(&self, ix: usize) -> &str {
        &self.inv_names[ix]
    }

    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.name_map.get(word).copied()
    }

    /// The neighbors of `ix`, or an empty slice if `ix` is not a vertex.
    pub fn neighbors(&self, ix: usize) -> &[usize] {
        self.graph.get(&ix).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Neighbor words of `word`, in adjacency order.
    pub fn neighbor_names(&self, word: &str) -> Option<Vec<&str>> {
        let ix = self.index_of(word)?;
        Some(self.neighbors(ix).iter().map(|&n| self.name(n)).collect())
    }

    pub fn statistics(&self) -> Result<Statistics> {
        if self.graph.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let mut without_edges = 0;
        let mut most_edges = 0;
        let mut words_with_most_edges = Vec::new();
        let mut total_edges = 0;

        for (&ix, adjacent) in self.graph.iter() {
            let degree = adjacent.len();

            if degree == 0 {
                without_edges += 1;
            }

            if degree > most_edges {
                words_with_most_edges.clear();
                words_with_most_edges.push(self.name(ix).to_string());
                most_edges = degree;
            } else if degree == most_edges {
                words_with_most_edges.push(self.name(ix).to_string());
            }

            total_edges += degree;
        }

        Ok(Statistics {
            without_edges,
            most_edges,
            words_with_most_edges,
            average_edges: total_edges as f64 / self.graph.len() as f64,
        })
    }
}
