/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Granularity of parallel tasks, specified transparently by nodes or arcs.
///
/// The parallel PageRank sweeps hand out nodes to threads in chunks; since
/// real-world graphs have a skewed degree distribution, chunks should be
/// small enough to avoid a thread being stuck with many high-degree nodes
/// while the others are idle.
///
/// This enum allows to specify the size of a chunk either directly as a
/// number of nodes, or as a tentative number of arcs: in the latter case,
/// the conversion is done by [`node_granularity`](Self::node_granularity)
/// using the average degree of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Granularity {
    /// Node granularity.
    ///
    /// Each task will be formed by the specified number of nodes.
    Nodes(usize),
    /// Arc granularity.
    ///
    /// Each task will be formed by a number of nodes that has, tentatively,
    /// sum of degrees equal to the specified number of arcs.
    Arcs(u64),
}

impl core::default::Default for Granularity {
    /// Returns a default granularity of 2048 nodes.
    fn default() -> Self {
        Self::Nodes(2048)
    }
}

impl Granularity {
    /// Returns a node granularity for a given number of nodes and arcs.
    ///
    /// For the variant [`Nodes`](Self::Nodes), the specified number of nodes is
    /// returned. For the variant [`Arcs`](Self::Arcs), the number of nodes is
    /// computed as the specified number of arcs divided by the average
    /// degree.
    ///
    /// The result is never zero.
    pub fn node_granularity(&self, num_nodes: usize, num_arcs: u64) -> usize {
        match self {
            Self::Nodes(n) => (*n).max(1),
            Self::Arcs(n) => {
                let average_degree = num_arcs as f64 / num_nodes.max(1) as f64;
                if average_degree == 0.0 {
                    return num_nodes.max(1);
                }
                (*n as f64 / average_degree)
                    .min(usize::MAX as f64)
                    .ceil()
                    .max(1.) as usize
            }
        }
    }
}
