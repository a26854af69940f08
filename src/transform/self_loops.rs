/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::vec_graph::VecGraph;

/// Adds a loop to every active node of `graph` that does not already have
/// one, and returns the number of loops added.
///
/// After this transformation the graph has no dead ends.
pub fn add_self_loops(graph: &mut VecGraph) -> usize {
    let nodes = graph.iter_nodes().collect::<Vec<_>>();
    nodes
        .into_iter()
        .filter(|&node| graph.add_arc(node, node))
        .count()
}
