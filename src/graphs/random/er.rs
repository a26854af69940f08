/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::graphs::vec_graph::VecGraph;

/// Provides a sequential implementation of Erdös-Rényi random graphs.
///
/// The Erdös-Rényi random graph model is a simple model for generating random
/// graphs. It is parameterized by the number of nodes `n` and the probability
/// `p` of an arc between any two nodes. In this implementation, loops are never
/// included.
///
/// Note that the time required to iterate over the arcs is quadratic in `n`,
/// so if you plan to reuse the graph you should store it in a
/// [`VecGraph`] using [`to_vec_graph`](ErdosRenyi::to_vec_graph).
#[derive(Debug, Clone)]
pub struct ErdosRenyi {
    n: usize,
    p: f64,
    seed: u64,
}

impl ErdosRenyi {
    /// Create a new Erdös-Rényi random graph, given the number of
    /// nodes, the probability of an edge between any two nodes, and a
    /// seed for the [pseudorandom number generator](SmallRng).
    pub fn new(n: usize, p: f64, seed: u64) -> Self {
        assert!((0.0..=1.0).contains(&p), "p must be in [0..1]");
        Self { n, p, seed }
    }

    /// Returns the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.n
    }

    /// Returns an iterator over the arcs, in lexicographical order.
    ///
    /// The same seed always yields the same arcs.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize)> {
        let n = self.n;
        let p = self.p;
        let mut rng = SmallRng::seed_from_u64(self.seed);
        (0..n).flat_map(move |x| {
            (0..n)
                .filter(|&y| y != x && rng.random_bool(p))
                .map(|y| (x, y))
                .collect::<Vec<_>>()
        })
    }

    /// Materializes the graph; all `n` nodes are active, even isolated ones.
    pub fn to_vec_graph(&self) -> VecGraph {
        let mut g = VecGraph::empty(self.n);
        g.add_arcs(self.arcs());
        g
    }
}
