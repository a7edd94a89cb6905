use std::collections::HashSet;

use tracing::debug;

use super::transition_graph::ScreenTransitionGraph;

/// Produces the screen paths test cases are generated for.
pub trait ScreenTransitionPathBuilder {
    fn build(&self, histories: &[Vec<String>]) -> Vec<Vec<String>>;
}

// ============================================================================
// One path per recording
// ============================================================================

/// Uses each distinct recorded history as a path.
///
/// Histories without a transition are skipped.
pub struct SimpleScreenTransitionPathBuilder;

impl ScreenTransitionPathBuilder for SimpleScreenTransitionPathBuilder {
    fn build(&self, histories: &[Vec<String>]) -> Vec<Vec<String>> {
        let mut seen = HashSet::new();
        histories
            .iter()
            .filter(|h| h.len() > 1)
            .filter(|h| seen.insert(h.as_slice()))
            .cloned()
            .collect()
    }
}

// ============================================================================
// Edge-covering paths over the transition graph
// ============================================================================

/// Extracts a compact set of paths that together traverse every observed
/// transition at least once.
///
/// Traversal is a depth-first search driven by a LIFO stack of partial
/// paths. Roots are the first screens of the histories in first-seen order,
/// then any node that still has unvisited outgoing edges, in insertion
/// order. Popping a partial path pushes one extension per unvisited
/// outgoing edge of its last screen, in insertion order, and marks those
/// edges visited; so the most recently inserted edge is followed first.
/// A popped path with nothing left to extend is complete and is emitted
/// if it contains at least one edge.
///
/// For the history `[P1, P2, P3, P1, P3]` this yields
/// `[[P1, P3, P1], [P1, P2, P3]]`.
pub struct GraphBasedScreenTransitionPathBuilder;

impl GraphBasedScreenTransitionPathBuilder {
    pub fn extract_paths(
        &self,
        graph: &ScreenTransitionGraph,
        roots: &[usize],
    ) -> Vec<Vec<String>> {
        let mut visited: HashSet<(usize, usize)> = HashSet::new();
        let mut paths = Vec::new();

        let fallback_roots = 0..graph.nodes().len();
        for root in roots.iter().copied().chain(fallback_roots) {
            let mut stack: Vec<Vec<usize>> = vec![vec![root]];

            while let Some(path) = stack.pop() {
                let Some(&tail) = path.last() else {
                    continue;
                };

                let mut extended = false;
                for &next in graph.successor_indices(tail) {
                    if visited.insert((tail, next)) {
                        let mut longer = path.clone();
                        longer.push(next);
                        stack.push(longer);
                        extended = true;
                    }
                }

                if !extended && path.len() > 1 {
                    paths.push(
                        path.iter()
                            .map(|&i| graph.node_name(i).to_string())
                            .collect(),
                    );
                }
            }
        }

        paths
    }
}

impl ScreenTransitionPathBuilder for GraphBasedScreenTransitionPathBuilder {
    fn build(&self, histories: &[Vec<String>]) -> Vec<Vec<String>> {
        let graph = ScreenTransitionGraph::from_histories(histories);

        let mut roots: Vec<usize> = Vec::new();
        for first in histories.iter().filter_map(|h| h.first()) {
            if let Some(i) = graph.node_index(first) {
                if !roots.contains(&i) {
                    roots.push(i);
                }
            }
        }

        let paths = self.extract_paths(&graph, &roots);
        debug!(
            nodes = graph.nodes().len(),
            edges = graph.edge_count(),
            paths = paths.len(),
            "extracted screen transition paths"
        );
        paths
    }
}
