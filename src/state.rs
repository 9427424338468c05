use crate::graph::BTreeGraph;

/// Bookkeeping for a single DFS or BFS run. A fresh one is created at
/// the start of every run and dropped when it returns.
#[derive(Default, Debug, Clone)]
pub struct SearchState {
    pub visited: Vec<bool>,
    /// Whether a vertex is currently waiting on the stack or queue.
    pub pending: Vec<bool>,
}

impl SearchState {
    pub fn initialize(graph: &BTreeGraph) -> SearchState {
        let num_nodes = slots(graph);

        SearchState {
            visited: vec![false; num_nodes],
            pending: vec![false; num_nodes],
        }
    }

    pub fn is_visited(&self, w: usize) -> bool {
        self.visited[w]
    }

    pub fn visit(&mut self, w: usize) {
        self.visited[w] = true;
    }

    /// Whether `w` may still be scheduled: neither visited nor already
    /// waiting.
    pub fn is_schedulable(&self, w: usize) -> bool {
        !self.visited[w] && !self.pending[w]
    }

    pub fn schedule(&mut self, w: usize) {
        self.pending[w] = true;
    }

    pub fn unschedule(&mut self, w: usize) {
        self.pending[w] = false;
    }
}

/// Bookkeeping for one run of Prim's algorithm.
#[derive(Default, Debug, Clone)]
pub struct MstState {
    pub completed: Vec<bool>,
    pub order: Vec<usize>,
    pub weight: u64,
}

impl MstState {
    pub fn initialize(graph: &BTreeGraph) -> MstState {
        MstState {
            completed: vec![false; slots(graph)],
            order: Vec::with_capacity(graph.len()),
            weight: 0,
        }
    }

    pub fn is_completed(&self, w: usize) -> bool {
        self.completed[w]
    }

    pub fn complete(&mut self, w: usize, weight: u64) {
        self.completed[w] = true;
        self.order.push(w);
        self.weight += weight;
    }
}

// Enough slots to index every vertex and every neighbor named by the
// graph; a component's neighbor lists can point past its own keys.
fn slots(graph: &BTreeGraph) -> usize {
    graph
        .iter()
        .flat_map(|(&w, adjacent)| std::iter::once(w).chain(adjacent.iter().copied()))
        .max()
        .map_or(0, |max| max + 1)
}
