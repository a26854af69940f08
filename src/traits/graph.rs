/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

The graph capability needed by the PageRank solver.

The solver never looks at the successors of a node: it needs to enumerate
the _predecessors_ of each node, together with their outdegree in the
original graph. [`RankGraph`] is thus implemented by transposed graphs
whose nodes carry their original outdegree, such as
[`DegreeTranspose`](crate::graphs::DegreeTranspose).

Node identifiers are dense keys in the range [0 . . [`span`](RankGraph::span)),
but some keys might not be in use: the number of keys in use is given by
[`order`](RankGraph::order).

*/

/// A transposed graph annotated with the outdegrees of the original graph.
///
/// Any storage backend implementing this trait can be passed to the
/// functions in [`rank`](crate::rank).
pub trait RankGraph {
    /// Returns the number of active nodes.
    fn order(&self) -> usize;

    /// Returns the size of the key space, that is, one plus the largest
    /// possible node identifier.
    ///
    /// Rank vectors have this length.
    fn span(&self) -> usize;

    /// Returns the number of arcs.
    fn num_arcs(&self) -> u64;

    /// Returns true if the graph has no active node.
    fn is_empty(&self) -> bool {
        self.order() == 0
    }

    /// Returns true if `node` is an active node.
    ///
    /// Must return false for every `node` not smaller than
    /// [`span`](RankGraph::span).
    fn has_node(&self, node: usize) -> bool;

    /// Returns the outdegree of `node` in the original graph.
    ///
    /// A node with outdegree zero is a _dead end_.
    fn outdegree(&self, node: usize) -> usize;

    /// Applies `f` to each active node and its original outdegree, in
    /// increasing order of key.
    fn for_each_node(&self, mut f: impl FnMut(usize, usize)) {
        for node in 0..self.span() {
            if self.has_node(node) {
                f(node, self.outdegree(node));
            }
        }
    }

    /// Applies `f` to each predecessor of `node` in the original graph
    /// (that is, to each successor of `node` in the transpose).
    fn for_each_predecessor(&self, node: usize, f: impl FnMut(usize));
}

impl<G: RankGraph + ?Sized> RankGraph for &G {
    #[inline(always)]
    fn order(&self) -> usize {
        (**self).order()
    }

    #[inline(always)]
    fn span(&self) -> usize {
        (**self).span()
    }

    #[inline(always)]
    fn num_arcs(&self) -> u64 {
        (**self).num_arcs()
    }

    #[inline(always)]
    fn has_node(&self, node: usize) -> bool {
        (**self).has_node(node)
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        (**self).outdegree(node)
    }

    #[inline(always)]
    fn for_each_node(&self, f: impl FnMut(usize, usize)) {
        (**self).for_each_node(f)
    }

    #[inline(always)]
    fn for_each_predecessor(&self, node: usize, f: impl FnMut(usize)) {
        (**self).for_each_predecessor(node, f)
    }
}
