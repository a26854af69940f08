/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::transpose;
use crate::graphs::vec_graph::VecGraph;

/// Returns the union of `graph` and its transpose, that is, an undirected
/// version of `graph` in which every arc has its reverse.
///
/// Loops are preserved.
pub fn symmetrize(graph: &VecGraph) -> VecGraph {
    let mut result = transpose(graph);
    result.add_arcs(graph.iter_arcs());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetrize() {
        let g = VecGraph::from_arcs([(0, 1), (1, 2), (2, 2), (2, 1)]);
        let s = symmetrize(&g);
        assert_eq!(s.num_arcs(), 5);
        assert_eq!(s.successors(0), &[1]);
        assert_eq!(s.successors(1), &[0, 2]);
        assert_eq!(s.successors(2), &[1, 2]);
        assert_eq!(symmetrize(&s), s);
    }
}
