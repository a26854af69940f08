/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::vec_graph::VecGraph;
use crate::traits::RankGraph;

/// The transpose of a graph whose nodes carry their outdegree in the
/// original graph.
///
/// This is the input of the PageRank solver: iterating over the successors
/// of a node in the transpose enumerates its predecessors in the original
/// graph, and the stored outdegree is the divisor of their contribution.
///
/// Instances are built by
/// [`transpose_with_degree`](crate::transform::transpose_with_degree).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DegreeTranspose {
    transpose: VecGraph,
    outdegrees: Box<[usize]>,
}

impl DegreeTranspose {
    /// Creates a new instance from a transposed graph and the outdegrees of
    /// the original graph.
    ///
    /// # Panics
    ///
    /// Panics if the length of `outdegrees` is not the span of `transpose`.
    pub fn new(transpose: VecGraph, outdegrees: Box<[usize]>) -> Self {
        assert_eq!(
            transpose.num_nodes(),
            outdegrees.len(),
            "The number of outdegrees ({}) does not match the span of the transpose ({})",
            outdegrees.len(),
            transpose.num_nodes()
        );
        Self {
            transpose,
            outdegrees,
        }
    }

    /// Returns the underlying transposed graph.
    pub fn transpose(&self) -> &VecGraph {
        &self.transpose
    }

    /// Returns the outdegrees of the original graph.
    pub fn outdegrees(&self) -> &[usize] {
        &self.outdegrees
    }

    /// Returns the number of dead ends.
    pub fn num_dead_ends(&self) -> usize {
        self.transpose
            .iter_nodes()
            .filter(|&node| self.outdegrees[node] == 0)
            .count()
    }
}

impl RankGraph for DegreeTranspose {
    #[inline(always)]
    fn order(&self) -> usize {
        self.transpose.order()
    }

    #[inline(always)]
    fn span(&self) -> usize {
        self.transpose.num_nodes()
    }

    #[inline(always)]
    fn num_arcs(&self) -> u64 {
        self.transpose.num_arcs()
    }

    #[inline(always)]
    fn has_node(&self, node: usize) -> bool {
        self.transpose.has_node(node)
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.outdegrees[node]
    }

    fn for_each_node(&self, mut f: impl FnMut(usize, usize)) {
        for node in self.transpose.iter_nodes() {
            f(node, self.outdegrees[node]);
        }
    }

    #[inline(always)]
    fn for_each_predecessor(&self, node: usize, mut f: impl FnMut(usize)) {
        for &pred in self.transpose.successors(node) {
            f(pred);
        }
    }
}
