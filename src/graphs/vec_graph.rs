/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::fmt::Display;

/// A mutable directed graph based on a vector of vectors.
///
/// Successor lists are kept sorted and free of duplicates. Nodes are dense
/// keys, but a node can be [removed](VecGraph::remove_node): its key stays
/// allocated, so [`num_nodes`](VecGraph::num_nodes) (the _span_ of the key
/// space) can be larger than [`order`](VecGraph::order) (the number of
/// active nodes).
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VecGraph {
    /// The number of arcs in the graph.
    number_of_arcs: u64,
    /// The number of active nodes.
    order: usize,
    /// For each node, its sorted list of successors.
    succ: Vec<Vec<usize>>,
    /// For each node, whether it is active.
    exists: Vec<bool>,
}

impl VecGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new graph with `n` active nodes and no arcs.
    pub fn empty(n: usize) -> Self {
        Self {
            number_of_arcs: 0,
            order: n,
            succ: Vec::from_iter((0..n).map(|_| Vec::new())),
            exists: vec![true; n],
        }
    }

    /// Creates a new graph from an [`IntoIterator`] of arcs.
    ///
    /// Nodes are added as needed; duplicate arcs are ignored.
    pub fn from_arcs(arcs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut g = Self::new();
        g.add_arcs(arcs);
        g
    }

    /// Returns the span of the key space (one plus the largest key).
    pub fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    /// Returns the number of active nodes.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the number of arcs.
    pub fn num_arcs(&self) -> u64 {
        self.number_of_arcs
    }

    /// Returns true if `node` is an active node.
    pub fn has_node(&self, node: usize) -> bool {
        self.exists.get(node).copied().unwrap_or(false)
    }

    /// Activates `node`, extending the key space if needed, and returns
    /// true if the node was not active.
    pub fn add_node(&mut self, node: usize) -> bool {
        self.extend_span(node + 1);
        if self.exists[node] {
            return false;
        }
        self.exists[node] = true;
        self.order += 1;
        true
    }

    /// Extends the key space to `span` keys, if it is smaller.
    ///
    /// The new keys are inactive.
    pub fn extend_span(&mut self, span: usize) {
        if span > self.succ.len() {
            self.succ.resize_with(span, Vec::new);
            self.exists.resize(span, false);
        }
    }

    /// Removes `node` and all its incident arcs; returns true if the node
    /// was active.
    ///
    /// The key of the node remains allocated.
    pub fn remove_node(&mut self, node: usize) -> bool {
        if !self.has_node(node) {
            return false;
        }
        self.number_of_arcs -= self.succ[node].len() as u64;
        self.succ[node].clear();
        for succ in self.succ.iter_mut() {
            if let Ok(pos) = succ.binary_search(&node) {
                succ.remove(pos);
                self.number_of_arcs -= 1;
            }
        }
        self.exists[node] = false;
        self.order -= 1;
        true
    }

    /// Adds an arc to the graph and returns true if it was not present.
    ///
    /// Both endpoints are activated if needed.
    pub fn add_arc(&mut self, u: usize, v: usize) -> bool {
        self.add_node(u);
        self.add_node(v);
        let succ = &mut self.succ[u];
        match succ.binary_search(&v) {
            Ok(_) => false,
            Err(pos) => {
                succ.insert(pos, v);
                self.number_of_arcs += 1;
                true
            }
        }
    }

    /// Add arcs from an [`IntoIterator`].
    ///
    /// The items must be pairs of the form `(usize, usize)` specifying
    /// an arc.
    ///
    /// Note that new nodes will be added as needed.
    pub fn add_arcs(&mut self, arcs: impl IntoIterator<Item = (usize, usize)>) {
        let mut arcs = arcs.into_iter().collect::<Vec<_>>();
        arcs.sort_unstable();
        for (u, v) in arcs {
            self.add_arc(u, v);
        }
    }

    /// Returns the sorted successors of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not smaller than [`num_nodes`](VecGraph::num_nodes).
    pub fn successors(&self, node: usize) -> &[usize] {
        &self.succ[node]
    }

    /// Returns the outdegree of `node`.
    pub fn outdegree(&self, node: usize) -> usize {
        self.succ[node].len()
    }

    /// Returns an iterator over the active nodes, in increasing order.
    pub fn iter_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.exists
            .iter()
            .enumerate()
            .filter_map(|(node, &exists)| exists.then_some(node))
    }

    /// Returns an iterator over the arcs, in lexicographical order.
    pub fn iter_arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.succ
            .iter()
            .enumerate()
            .flat_map(|(u, succ)| succ.iter().map(move |&v| (u, v)))
    }
}

impl Display for VecGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{order: {}, size: {}, span: {}}}",
            self.order,
            self.number_of_arcs,
            self.num_nodes()
        )
    }
}

#[cfg(test)]
#[allow(trivial_casts)]
mod tests {
    use super::*;

    #[test]
    fn test_add_arcs() {
        let mut g = VecGraph::empty(2);
        assert!(g.add_arc(0, 1));
        assert!(!g.add_arc(0, 1));
        g.add_arcs([(4, 0), (0, 3), (0, 2)]);
        assert_eq!(g.num_nodes(), 5);
        // key 3 was activated by an arc, 4 too
        assert_eq!(g.order(), 5);
        assert_eq!(g.successors(0), &[1, 2, 3]);
        assert_eq!(g.num_arcs(), 4);
        assert_eq!(g.iter_arcs().count(), 4);
    }

    #[test]
    fn test_sparse_keys() {
        let mut g = VecGraph::new();
        g.add_node(3);
        assert_eq!(g.num_nodes(), 4);
        assert_eq!(g.order(), 1);
        assert!(!g.has_node(0));
        assert!(g.has_node(3));
        assert!(!g.has_node(10));
        assert_eq!(g.iter_nodes().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_remove_node() {
        let mut g = VecGraph::from_arcs([(0, 1), (1, 2), (2, 0), (2, 1)]);
        assert!(g.remove_node(1));
        assert!(!g.remove_node(1));
        assert_eq!(g.order(), 2);
        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.num_arcs(), 1);
        assert_eq!(g.successors(0), &[] as &[usize]);
        assert_eq!(g.successors(2), &[0]);
        assert!(g.add_node(1));
        assert_eq!(g.order(), 3);
    }

    #[test]
    fn test_display() {
        let g = VecGraph::from_arcs([(0, 1), (1, 2)]);
        assert_eq!(g.to_string(), "{order: 3, size: 2, span: 3}");
    }
}
