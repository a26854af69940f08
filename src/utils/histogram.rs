/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Degree and rank distributions used for reporting.

use crate::graphs::vec_graph::VecGraph;
use std::fmt::Display;

/// Returns the outdegree of each key of `graph` (zero for inactive keys).
pub fn degrees(graph: &VecGraph) -> Vec<usize> {
    (0..graph.num_nodes())
        .map(|node| graph.outdegree(node))
        .collect()
}

/// Returns the outdegree distribution of `graph`: the entry of index *d*
/// is the number of active nodes with outdegree *d*.
///
/// The result has length [`order`](VecGraph::order) + 1.
pub fn degree_distribution(graph: &VecGraph) -> Vec<usize> {
    let mut dist = vec![0; graph.order() + 1];
    for node in graph.iter_nodes() {
        dist[graph.outdegree(node)] += 1;
    }
    dist
}

/// A histogram of a rank vector with equal-width buckets in the range
/// [0 . . max].
///
/// The [`Display`] implementation prints one line per bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct RankHistogram {
    step: f64,
    counts: Vec<usize>,
}

impl RankHistogram {
    /// The number of buckets used for reporting.
    pub const DEFAULT_BUCKETS: usize = 256;

    /// Builds a histogram with `buckets` buckets of the ranks of the given
    /// nodes.
    ///
    /// The largest rank falls in the last bucket. If all ranks are zero, all
    /// nodes fall in the first bucket.
    ///
    /// # Panics
    ///
    /// Panics if `buckets` is zero.
    pub fn new(ranks: &[f64], nodes: impl IntoIterator<Item = usize> + Clone, buckets: usize) -> Self {
        assert!(buckets > 0, "The number of buckets must be positive");
        let max = nodes
            .clone()
            .into_iter()
            .map(|node| ranks[node])
            .fold(0.0, f64::max);
        let step = max / buckets as f64;
        let mut counts = vec![0; buckets];
        for node in nodes {
            let bucket = if step > 0.0 {
                ((ranks[node] / step) as usize).min(buckets - 1)
            } else {
                0
            };
            counts[bucket] += 1;
        }
        Self { step, counts }
    }

    /// Returns the width of a bucket.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the number of ranks in each bucket.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }
}

impl Display for RankHistogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (b, count) in self.counts.iter().enumerate() {
            writeln!(
                f,
                "{{block: {}, ranks: {:.6e} -> {:.6e}, count: {}}}",
                b,
                b as f64 * self.step,
                (b + 1) as f64 * self.step,
                count
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees() {
        let mut g = VecGraph::from_arcs([(0, 1), (0, 2), (1, 2), (3, 0)]);
        g.add_node(5);
        assert_eq!(degrees(&g), vec![2, 1, 0, 1, 0, 0]);
        assert_eq!(degree_distribution(&g), vec![2, 2, 1, 0, 0, 0]);
    }

    #[test]
    fn test_rank_histogram() {
        let ranks = [0.1, 0.4, 0.2, 0.3, 99.0];
        let h = RankHistogram::new(&ranks, 0..4, 4);
        assert!((h.step() - 0.1).abs() < 1E-12);
        assert_eq!(h.counts().iter().sum::<usize>(), 4);
        // The maximum always lands in the last bucket
        assert_eq!(h.counts()[3], 1);
        assert_eq!(h.to_string().lines().count(), 4);
        assert!(h
            .to_string()
            .starts_with("{block: 0, ranks: 0.000000e0 -> 1.000000e-1, count: "));
    }

    #[test]
    fn test_zero_ranks() {
        let h = RankHistogram::new(&[0.0; 3], 0..3, RankHistogram::DEFAULT_BUCKETS);
        assert_eq!(h.counts()[0], 3);
        assert_eq!(h.counts().len(), 256);
    }
}
