use std::collections::HashMap;

use serde::Serialize;

/// Directed graph of observed screen-to-screen transitions.
///
/// Nodes and each node's successors keep first-seen order, and path
/// extraction relies on that order. Duplicate edges collapse.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScreenTransitionGraph {
    nodes: Vec<String>,
    successors: Vec<Vec<usize>>,

    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl ScreenTransitionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from screen histories, adding an edge for every adjacent pair.
    pub fn from_histories(histories: &[Vec<String>]) -> Self {
        let mut graph = Self::new();
        for history in histories {
            for screen in history {
                graph.add_node(screen);
            }
            for pair in history.windows(2) {
                graph.add_edge(&pair[0], &pair[1]);
            }
        }
        graph
    }

    /// Returns the node's index, inserting it if new.
    pub fn add_node(&mut self, name: &str) -> usize {
        if let Some(&i) = self.index.get(name) {
            return i;
        }
        let i = self.nodes.len();
        self.nodes.push(name.to_string());
        self.successors.push(Vec::new());
        self.index.insert(name.to_string(), i);
        i
    }

    /// Returns false if the edge already existed.
    pub fn add_edge(&mut self, from: &str, to: &str) -> bool {
        let src = self.add_node(from);
        let dst = self.add_node(to);
        if self.successors[src].contains(&dst) {
            return false;
        }
        self.successors[src].push(dst);
        true
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn node_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn node_name(&self, index: usize) -> &str {
        &self.nodes[index]
    }

    pub(crate) fn successor_indices(&self, index: usize) -> &[usize] {
        &self.successors[index]
    }

    pub fn successors(&self, name: &str) -> Vec<&str> {
        match self.index.get(name) {
            Some(&i) => self.successors[i]
                .iter()
                .map(|&j| self.nodes[j].as_str())
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&src), Some(&dst)) => self.successors[src].contains(&dst),
            _ => false,
        }
    }

    /// All edges, grouped by source node in insertion order.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.successors
            .iter()
            .enumerate()
            .flat_map(|(src, dsts)| {
                dsts.iter()
                    .map(move |&dst| (self.nodes[src].as_str(), self.nodes[dst].as_str()))
            })
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }
}
