/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Rank updates.
//!
//! The new rank of a node *v* is
//!
//! > *a*[*v*] = *C*₀ + *P* ∑_(*u* → *v*) *r*[*u*] / *d*⁺(*u*),
//!
//! where *C*₀ is the [teleport mass](super::teleport), *P* the damping
//! factor and *d*⁺(*u*) the outdegree of *u* in the original graph. Since
//! *u* has at least the arc *u* → *v*, *d*⁺(*u*) is never zero; dead ends
//! are accounted for by the teleport mass.
//!
//! Synchronous sweeps read from a vector and write to another one.
//! Asynchronous sweeps update a single vector in place; in parallel, each
//! thread grabs chunks of nodes from a shared cursor and works on a
//! [`SyncCell`](sync_cell_slice::SyncCell) view of the vector, so a node
//! might read the old or the new rank of a predecessor updated by another
//! thread during the same sweep.

use super::norm::NormAccumulator;
use super::Norm;
use crate::traits::RankGraph;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use sync_cell_slice::SyncSlice;

/// Returns the new rank of `node` computed from the ranks in `rank`.
#[inline(always)]
pub fn node_rank(transpose: &impl RankGraph, rank: &[f64], node: usize, c0: f64, damping: f64) -> f64 {
    let mut new_rank = c0;
    transpose.for_each_predecessor(node, |pred| {
        new_rank += damping * rank[pred] / transpose.outdegree(pred) as f64;
    });
    new_rank
}

/// Writes to `a[node]` the new rank of `node` computed from `r`, and
/// returns the absolute difference with `r[node]`.
#[inline(always)]
pub fn update_rank(
    a: &mut [f64],
    transpose: &impl RankGraph,
    r: &[f64],
    node: usize,
    c0: f64,
    damping: f64,
) -> f64 {
    let new_rank = node_rank(transpose, r, node, c0, damping);
    a[node] = new_rank;
    (new_rank - r[node]).abs()
}

/// Writes to `a` the new rank of every active node, computed from `r`.
pub fn update_ranks(a: &mut [f64], transpose: &impl RankGraph, r: &[f64], c0: f64, damping: f64) {
    for node in 0..transpose.span() {
        if transpose.has_node(node) {
            update_rank(a, transpose, r, node, c0, damping);
        }
    }
}

/// Writes in parallel to `a` the new rank of every active node, computed
/// from `r`, using tasks of `granularity` nodes.
///
/// The computation is performed in the current Rayon thread pool.
pub fn par_update_ranks(
    a: &mut [f64],
    transpose: &(impl RankGraph + Sync),
    r: &[f64],
    c0: f64,
    damping: f64,
    granularity: usize,
) {
    a.par_chunks_mut(granularity)
        .enumerate()
        .for_each(|(chunk, out)| {
            let start = chunk * granularity;
            for (offset, slot) in out.iter_mut().enumerate() {
                let node = start + offset;
                if transpose.has_node(node) {
                    *slot = node_rank(transpose, r, node, c0, damping);
                }
            }
        });
}

/// Updates in place the rank of every active node, in increasing order,
/// and returns the norm of the changes.
pub fn update_ranks_in_place(
    rank: &mut [f64],
    transpose: &impl RankGraph,
    c0: f64,
    damping: f64,
    norm: Norm,
) -> f64 {
    let mut acc = NormAccumulator::new(norm);
    for node in 0..transpose.span() {
        if transpose.has_node(node) {
            let new_rank = node_rank(transpose, rank, node, c0, damping);
            acc.add((new_rank - rank[node]).abs());
            rank[node] = new_rank;
        }
    }
    acc.value()
}

/// Updates in place and in parallel the rank of every active node, and
/// returns the norm of the changes.
///
/// Every thread of the current Rayon thread pool grabs chunks of
/// `granularity` nodes from a shared cursor, so the order of updates is
/// not specified.
pub fn par_update_ranks_in_place(
    rank: &mut [f64],
    transpose: &(impl RankGraph + Sync),
    c0: f64,
    damping: f64,
    norm: Norm,
    granularity: usize,
) -> f64 {
    let span = transpose.span();
    let node_cursor = AtomicUsize::new(0);
    let rank_sync = rank.as_sync_slice();

    rayon::broadcast(|_| {
        let mut local_norm = NormAccumulator::new(norm);
        loop {
            let start = node_cursor.fetch_add(granularity, Ordering::Relaxed);
            if start >= span {
                break;
            }
            let end = span.min(start + granularity);

            for node in start..end {
                if !transpose.has_node(node) {
                    continue;
                }
                let mut new_rank = c0;
                transpose.for_each_predecessor(node, |pred| {
                    // SAFETY: reads from other nodes' ranks are benign data
                    // races (Gauss-Seidel semantics).
                    let pred_rank = unsafe { rank_sync[pred].get() };
                    new_rank += damping * pred_rank / transpose.outdegree(pred) as f64;
                });
                // SAFETY: each node belongs to exactly one chunk, so it is
                // written by exactly one thread.
                unsafe {
                    local_norm.add((new_rank - rank_sync[node].get()).abs());
                    rank_sync[node].set(new_rank);
                }
            }
        }
        local_norm
    })
    .into_iter()
    .fold(NormAccumulator::new(norm), NormAccumulator::merge)
    .value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::vec_graph::VecGraph;
    use crate::transform::transpose_with_degree;

    fn star() -> crate::graphs::DegreeTranspose {
        // 1, 2, 3 → 0 and 0 → 1
        transpose_with_degree(&VecGraph::from_arcs([(1, 0), (2, 0), (3, 0), (0, 1)]))
    }

    #[test]
    fn test_update_rank() {
        let t = star();
        let r = [0.25; 4];
        let mut a = [0.0; 4];
        let delta = update_rank(&mut a, &t, &r, 0, 0.1, 0.5);
        assert!((a[0] - (0.1 + 0.5 * 0.75)).abs() < 1E-15);
        assert!((delta - (a[0] - 0.25)).abs() < 1E-15);
        // No predecessors: just the teleport mass
        update_rank(&mut a, &t, &r, 2, 0.1, 0.5);
        assert_eq!(a[2], 0.1);
    }

    #[test]
    fn test_sweeps() {
        let t = star();
        let r = [0.4, 0.3, 0.2, 0.1];
        let mut seq = [0.0; 4];
        let mut par = [0.0; 4];
        update_ranks(&mut seq, &t, &r, 0.05, 0.85);
        par_update_ranks(&mut par, &t, &r, 0.05, 0.85, 1);
        assert_eq!(seq, par);
        assert!((seq[1] - (0.05 + 0.85 * 0.4)).abs() < 1E-15);
    }

    #[test]
    fn test_in_place() {
        let t = star();
        let mut rank = [0.25; 4];
        let err = update_ranks_in_place(&mut rank, &t, 0.1, 0.5, Norm::L1);
        // Node 0 is updated first; node 1 sees its new rank
        let r0 = 0.1 + 0.5 * 0.75;
        assert!((rank[0] - r0).abs() < 1E-15);
        assert!((rank[1] - (0.1 + 0.5 * r0)).abs() < 1E-15);
        assert!((rank[3] - 0.1).abs() < 1E-15);
        let expected = (r0 - 0.25).abs() + (0.1 + 0.5 * r0 - 0.25).abs() + 2.0 * 0.15;
        assert!((err - expected).abs() < 1E-14);
    }

    #[test]
    fn test_par_in_place_single_thread() {
        let t = star();
        let pool = rayon::ThreadPoolBuilder::new().num_threads(1).build().unwrap();
        let mut seq = [0.25; 4];
        let mut par = [0.25; 4];
        let e_seq = update_ranks_in_place(&mut seq, &t, 0.1, 0.5, Norm::LInf);
        let e_par = pool.install(|| par_update_ranks_in_place(&mut par, &t, 0.1, 0.5, Norm::LInf, 2));
        // A single thread updates nodes in increasing order
        assert_eq!(seq, par);
        assert_eq!(e_seq, e_par);
    }
}
