//! Minimum spanning trees over a connected component, using Prim's
//! algorithm with an edge weight derived from the words themselves.
//!
//! The weight of an edge is the smaller digit value of its two
//! endpoints, where a word's digit value is the sum of its characters
//! read as base-36 digits.

use fxhash::FxHashMap;
use tracing::debug;

use crate::algorithm::Component;
use crate::error::{GraphError, Result};
use crate::graph::WordGraph;
use crate::state::MstState;

/// `'0'..='9'` map to 0..9, letters of either case to 10..35.
pub fn char_value(c: char) -> Option<u32> {
    c.to_digit(36)
}

pub fn digit_value(word: &str) -> Result<u64> {
    word.chars().try_fold(0u64, |sum, character| {
        char_value(character)
            .map(|value| sum + u64::from(value))
            .ok_or_else(|| GraphError::InvalidCharacter {
                word: word.to_string(),
                character,
            })
    })
}

pub fn edge_weight(u: &str, v: &str) -> Result<u64> {
    Ok(digit_value(u)?.min(digit_value(v)?))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    pub total_weight: u64,
    /// Vertices in the order they joined the tree.
    pub order: Vec<usize>,
    pub edges: Vec<Edge>,
}

/// Grows a minimum spanning tree over `component`, starting from its
/// first vertex in enumeration order. Each step rescans the neighbors
/// of every vertex already in the tree and takes the lightest edge to
/// a vertex outside it; ties go to the first edge found. Neighbors that
/// are not part of `component` are ignored.
pub fn prim(words: &WordGraph, component: &Component) -> Result<SpanningTree> {
    let graph = &component.graph;
    let start = *graph.keys().next().ok_or(GraphError::EmptyGraph)?;

    let mut values: FxHashMap<usize, u64> = FxHashMap::default();
    for &w in graph.keys() {
        values.insert(w, digit_value(words.name(w))?);
    }
    let weight = |u: usize, v: usize| values[&u].min(values[&v]);

    let mut state = MstState::initialize(graph);
    let mut edges = Vec::with_capacity(graph.len().saturating_sub(1));

    state.complete(start, 0);

    while state.order.len() < graph.len() {
        let mut lightest: Option<Edge> = None;

        for (&w, adjacent) in graph.iter() {
            if !state.is_completed(w) {
                continue;
            }

            for &u in adjacent {
                if !graph.contains_key(&u) || state.is_completed(u) {
                    continue;
                }

                let candidate = weight(w, u);
                if lightest.map_or(true, |edge| candidate < edge.weight) {
                    lightest = Some(Edge {
                        from: w,
                        to: u,
                        weight: candidate,
                    });
                }
            }
        }

        let edge = lightest.ok_or(GraphError::DisconnectedGraph {
            reached: state.order.len(),
            total: graph.len(),
        })?;

        state.complete(edge.to, edge.weight);
        edges.push(edge);
    }

    debug!(
        vertices = state.order.len(),
        weight = state.weight,
        "spanning tree complete"
    );

    Ok(SpanningTree {
        total_weight: state.weight,
        order: state.order,
        edges,
    })
}
