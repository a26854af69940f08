/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Teleport mass.
//!
//! At each iteration every node receives the same amount of rank
//! (1 − *P*) / *n*, where *P* is the damping factor and *n* the number of
//! active nodes. Optionally, the rank of dead ends, which would be otherwise
//! lost, is redistributed uniformly, adding *P* ∑ *r*[*u*] / *n* over all
//! dead ends *u*.

use crate::traits::RankGraph;
use crate::utils::RAYON_MIN_LEN;
use kahan::KahanSum;
use rayon::prelude::*;

/// Returns the teleport mass without dead-end redistribution.
#[inline(always)]
pub fn base_teleport(order: usize, damping: f64) -> f64 {
    (1.0 - damping) / order as f64
}

/// Returns the teleport mass including the redistributed rank of dead
/// ends.
pub fn teleport(transpose: &impl RankGraph, rank: &[f64], damping: f64) -> f64 {
    let n = transpose.order() as f64;
    let mut dead_rank = KahanSum::new();
    transpose.for_each_node(|node, outdegree| {
        if outdegree == 0 {
            dead_rank += rank[node];
        }
    });
    base_teleport(transpose.order(), damping) + damping * dead_rank.sum() / n
}

/// Returns in parallel the teleport mass including the redistributed rank
/// of dead ends.
///
/// The computation is performed in the current Rayon thread pool.
pub fn par_teleport(transpose: &(impl RankGraph + Sync), rank: &[f64], damping: f64) -> f64 {
    let n = transpose.order() as f64;
    let dead_rank = (0..transpose.span())
        .into_par_iter()
        .with_min_len(RAYON_MIN_LEN)
        .filter(|&node| transpose.has_node(node) && transpose.outdegree(node) == 0)
        .fold(KahanSum::new, |sum, node| sum + rank[node])
        .reduce(KahanSum::new, |a, b| a + b);
    base_teleport(transpose.order(), damping) + damping * dead_rank.sum() / n
}
