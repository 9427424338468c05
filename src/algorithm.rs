use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::graph::{BTreeGraph, WordGraph};
use crate::state::SearchState;

/// One connected subgraph: every vertex reachable from a traversal
/// start, mapped to its full-graph neighbor list.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub graph: BTreeGraph,
    /// Vertices in the order the traversal discovered them.
    pub order: Vec<usize>,
}

impl Component {
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    pub fn contains(&self, w: usize) -> bool {
        self.graph.contains_key(&w)
    }

    fn add(&mut self, w: usize, graph: &BTreeGraph) {
        self.graph.insert(w, graph[&w].clone());
        self.order.push(w);
    }

    /// Member words in enumeration order.
    pub fn names<'a>(&self, words: &'a WordGraph) -> Vec<&'a str> {
        self.graph.keys().map(|&w| words.name(w)).collect()
    }
}

/// The largest component a search found, and how long the whole
/// multi-start scan took.
#[derive(Debug, Clone)]
pub struct Traversal {
    pub component: Component,
    pub elapsed: Duration,
}

/// Runs depth- and breadth-first searches over a word graph. Holds no
/// state of its own besides the graph, so searches can be repeated.
pub struct Searcher<'a> {
    graph: &'a BTreeGraph,
}

#[derive(Debug, Clone, Copy)]
enum Order {
    Lifo,
    Fifo,
}

impl<'a> Searcher<'a> {
    pub fn new(words: &'a WordGraph) -> Searcher<'a> {
        Searcher {
            graph: &words.graph,
        }
    }

    pub fn dfs(&self) -> Traversal {
        self.largest_component(Order::Lifo)
    }

    pub fn bfs(&self) -> Traversal {
        self.largest_component(Order::Fifo)
    }

    fn largest_component(&self, order: Order) -> Traversal {
        let mut state = SearchState::initialize(self.graph);
        let start = Instant::now();

        let mut largest = Component::default();

        for &n in self.graph.keys() {
            if state.is_visited(n) {
                continue;
            }

            let chain = match order {
                Order::Lifo => dfs_from(self.graph, &mut state, n),
                Order::Fifo => bfs_from(self.graph, &mut state, n),
            };

            debug!(?order, start = n, size = chain.len(), "found component");

            if chain.len() > largest.len() {
                largest = chain;
            }
        }

        let elapsed = start.elapsed();
        debug!(?order, size = largest.len(), ?elapsed, "search finished");

        Traversal {
            component: largest,
            elapsed,
        }
    }
}

fn dfs_from(graph: &BTreeGraph, state: &mut SearchState, src: usize) -> Component {
    let mut stack: VecDeque<usize> = VecDeque::new();
    let mut chain = Component::default();

    stack.push_front(src);
    state.schedule(src);

    while let Some(w) = stack.pop_front() {
        state.unschedule(w);
        if !state.is_visited(w) {
            state.visit(w);
            chain.add(w, graph);
        }

        for &u in graph[&w].iter() {
            if state.is_schedulable(u) {
                state.schedule(u);
                stack.push_front(u);
            }
        }
    }

    chain
}

fn bfs_from(graph: &BTreeGraph, state: &mut SearchState, src: usize) -> Component {
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut chain = Component::default();

    queue.push_back(src);
    state.schedule(src);

    while let Some(w) = queue.pop_front() {
        state.unschedule(w);
        state.visit(w);
        chain.add(w, graph);

        for &u in graph[&w].iter() {
            if state.is_schedulable(u) {
                state.schedule(u);
                queue.push_back(u);
            }
        }
    }

    chain
}

/// Relative running time of the two searches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Performance {
    /// BFS was faster by the given factor.
    BfsFaster(f64),
    /// DFS was faster by the given factor.
    DfsFaster(f64),
    Similar,
}

impl Performance {
    /// One search counts as faster only when it took less than 90% of
    /// the other's time. Ratios are truncated, not rounded, to two
    /// decimals.
    pub fn compare(dfs: Duration, bfs: Duration) -> Performance {
        let dfs = dfs.as_secs_f64();
        let bfs = bfs.as_secs_f64();

        if bfs < 0.9 * dfs {
            Performance::BfsFaster(truncate_ratio(dfs / bfs))
        } else if dfs < 0.9 * bfs {
            Performance::DfsFaster(truncate_ratio(bfs / dfs))
        } else {
            Performance::Similar
        }
    }
}

fn truncate_ratio(ratio: f64) -> f64 {
    (ratio * 100.0).floor() / 100.0
}
