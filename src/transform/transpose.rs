/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::{vec_graph::VecGraph, DegreeTranspose};
use dsi_progress_logger::prelude::*;

/// Returns the transpose of the provided graph.
///
/// The transpose has the same key space and the same active nodes.
pub fn transpose(graph: &VecGraph) -> VecGraph {
    let mut pl = progress_logger![
        item_name = "node",
        expected_updates = Some(graph.num_nodes())
    ];
    transpose_with_logging(graph, &mut pl)
}

/// Returns the transpose of the provided graph, logging progress on `pl`.
pub fn transpose_with_logging(graph: &VecGraph, pl: &mut impl ProgressLog) -> VecGraph {
    let mut transpose = VecGraph::new();
    transpose.extend_span(graph.num_nodes());
    for node in graph.iter_nodes() {
        transpose.add_node(node);
    }

    let mut arcs = Vec::with_capacity(graph.num_arcs() as usize);
    pl.start("Transposing...");
    for src in 0..graph.num_nodes() {
        for &dst in graph.successors(src) {
            arcs.push((dst, src));
        }
        pl.light_update();
    }
    transpose.add_arcs(arcs);
    pl.done();
    transpose
}

/// Returns the transpose of the provided graph annotated with the
/// outdegrees of `graph`, ready to be passed to the PageRank solver.
pub fn transpose_with_degree(graph: &VecGraph) -> DegreeTranspose {
    let outdegrees = (0..graph.num_nodes())
        .map(|node| graph.outdegree(node))
        .collect::<Box<[usize]>>();
    DegreeTranspose::new(transpose(graph), outdegrees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::RankGraph;

    #[test]
    fn test_transpose() {
        let g = VecGraph::from_arcs([(0, 1), (0, 2), (1, 2), (2, 0)]);
        let t = transpose(&g);
        assert_eq!(t.num_arcs(), 4);
        assert_eq!(t.successors(0), &[2]);
        assert_eq!(t.successors(1), &[0]);
        assert_eq!(t.successors(2), &[0, 1]);
        assert_eq!(transpose(&t), g);
    }

    #[test]
    fn test_transpose_keeps_key_space() {
        let mut g = VecGraph::from_arcs([(0, 1), (1, 3)]);
        g.remove_node(3);
        g.remove_node(2);
        let t = transpose(&g);
        assert_eq!(t.num_nodes(), 4);
        assert_eq!(t.order(), 2);
        assert!(!t.has_node(2));
        assert!(!t.has_node(3));
    }

    #[test]
    fn test_transpose_with_degree() {
        let g = VecGraph::from_arcs([(0, 1), (0, 2), (1, 2)]);
        let t = transpose_with_degree(&g);
        assert_eq!(t.outdegrees(), &[2, 1, 0]);
        assert_eq!(t.num_dead_ends(), 1);
        let mut preds = vec![];
        t.for_each_predecessor(2, |u| preds.push(u));
        assert_eq!(preds, vec![0, 1]);
        let mut nodes = vec![];
        t.for_each_node(|u, d| nodes.push((u, d)));
        assert_eq!(nodes, vec![(0, 2), (1, 1), (2, 0)]);
    }
}
