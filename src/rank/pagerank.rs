/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::buffers::RankBuffers;
use super::iteration::{IterationLoop, LoopOutcome};
use super::{Norm, PagerankError, PagerankOptions, PagerankResult, UpdateMode};
use crate::traits::RankGraph;
use crate::utils::{
    copy_values, fill_value, measure_duration, par_copy_values, par_fill_value, RAYON_MIN_LEN,
};
use dsi_progress_logger::{no_logging, ProgressLog};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Where a PageRank computation runs.
#[derive(Debug, Clone, Copy)]
pub enum Execution<'a> {
    /// On the current thread.
    Sequential,
    /// On the given thread pool.
    Parallel(&'a ThreadPool),
}

/// Builds a thread pool with the given number of threads.
///
/// Zero threads means one thread per available CPU.
pub fn thread_pool(num_threads: usize) -> Result<ThreadPool, PagerankError> {
    let num_threads = if num_threads == 0 {
        num_cpus::get()
    } else {
        num_threads
    };
    log::info!("Using {} threads", num_threads);
    Ok(ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()?)
}

/// Computes PageRank on the current thread.
///
/// `transpose` is the transpose of the graph, annotated with the original
/// outdegrees. If `init` is given, it is used as initial approximation and
/// its length must be equal to the [span](RankGraph::span) of the graph;
/// otherwise, every node starts with rank 1/_n_, where _n_ is the
/// [order](RankGraph::order) of the graph.
pub fn pagerank_seq<G: RankGraph>(
    transpose: &G,
    init: Option<&[f64]>,
    options: &PagerankOptions,
) -> Result<PagerankResult, PagerankError> {
    pagerank_seq_with_logging(transpose, init, options, no_logging![])
}

/// Computes PageRank on the current thread, logging iterations on `pl`.
///
/// See [`pagerank_seq`].
pub fn pagerank_seq_with_logging<G: RankGraph, P: ProgressLog>(
    transpose: &G,
    init: Option<&[f64]>,
    options: &PagerankOptions,
    pl: &mut P,
) -> Result<PagerankResult, PagerankError> {
    solve(transpose, init, options, pl, |lp, buffers, pl| {
        seed(buffers, transpose, init, options.update);
        lp.run_seq(buffers, pl)
    })
}

/// Computes PageRank on the given thread pool.
///
/// See [`pagerank_seq`] for the meaning of the arguments. Asynchronous
/// parallel updates are not deterministic.
pub fn pagerank_par<G: RankGraph + Sync>(
    transpose: &G,
    init: Option<&[f64]>,
    options: &PagerankOptions,
    thread_pool: &ThreadPool,
) -> Result<PagerankResult, PagerankError> {
    pagerank_par_with_logging(transpose, init, options, thread_pool, no_logging![])
}

/// Computes PageRank on the given thread pool, logging iterations on `pl`.
///
/// See [`pagerank_par`].
pub fn pagerank_par_with_logging<G: RankGraph + Sync, P: ProgressLog>(
    transpose: &G,
    init: Option<&[f64]>,
    options: &PagerankOptions,
    thread_pool: &ThreadPool,
    pl: &mut P,
) -> Result<PagerankResult, PagerankError> {
    solve(transpose, init, options, pl, |lp, buffers, pl| {
        thread_pool.install(|| par_seed(buffers, transpose, init, options.update));
        lp.run_par(buffers, thread_pool, pl)
    })
}

/// Computes PageRank using the given execution strategy.
pub fn pagerank<G: RankGraph + Sync>(
    transpose: &G,
    init: Option<&[f64]>,
    options: &PagerankOptions,
    execution: Execution<'_>,
) -> Result<PagerankResult, PagerankError> {
    pagerank_with_logging(transpose, init, options, execution, no_logging![])
}

/// Computes PageRank using the given execution strategy, logging
/// iterations on `pl`.
pub fn pagerank_with_logging<G: RankGraph + Sync, P: ProgressLog>(
    transpose: &G,
    init: Option<&[f64]>,
    options: &PagerankOptions,
    execution: Execution<'_>,
    pl: &mut P,
) -> Result<PagerankResult, PagerankError> {
    match execution {
        Execution::Sequential => pagerank_seq_with_logging(transpose, init, options, pl),
        Execution::Parallel(thread_pool) => {
            pagerank_par_with_logging(transpose, init, options, thread_pool, pl)
        }
    }
}

fn solve<G: RankGraph, P: ProgressLog>(
    transpose: &G,
    init: Option<&[f64]>,
    options: &PagerankOptions,
    pl: &mut P,
    mut run: impl FnMut(&IterationLoop<'_, G>, &mut RankBuffers, &mut P) -> LoopOutcome,
) -> Result<PagerankResult, PagerankError> {
    options.validate()?;
    if let Some(init) = init {
        if init.len() != transpose.span() {
            return Err(PagerankError::InitialRanksLength {
                expected: transpose.span(),
                found: init.len(),
            });
        }
    }

    if transpose.is_empty() {
        log::info!("Empty graph: nothing to compute");
        return Ok(PagerankResult::default());
    }

    if options.norm == Norm::L0 {
        log::warn!("The L0 norm is not supported: using the L∞ norm instead");
    }

    log::info!("Damping factor: {}", options.damping);
    log::info!(
        "Stopping criterion: {} error < {} or {} iterations",
        options.norm,
        options.tolerance,
        options.max_iterations
    );
    log::info!("Updates: {}", options.update);
    log::info!("Dead ends: {}", options.dead_ends);
    if options.repeat > 1 {
        log::info!("Repeating computation {} times", options.repeat);
    }

    let lp = IterationLoop::new(transpose, options);
    let mut buffers = RankBuffers::new(transpose.span());
    let mut outcome = LoopOutcome::default();
    let time = measure_duration(
        || outcome = run(&lp, &mut buffers, &mut *pl),
        options.repeat,
    );

    log::info!(
        "Completed after {} iterations ({} error {})",
        outcome.iterations,
        options.norm,
        outcome.error
    );

    Ok(PagerankResult {
        ranks: buffers.into_previous(),
        iterations: outcome.iterations,
        error: outcome.error,
        time,
    })
}

/// Seeds the buffers with the initial approximation.
///
/// Without an initial vector, active nodes get 1/_n_ and inactive slots 0.
fn seed(buffers: &mut RankBuffers, transpose: &impl RankGraph, init: Option<&[f64]>, update: UpdateMode) {
    let r = buffers.previous_mut();
    match init {
        Some(init) => copy_values(r, init),
        None => {
            let value = 1.0 / transpose.order() as f64;
            if transpose.order() == transpose.span() {
                fill_value(r, value);
            } else {
                for (node, x) in r.iter_mut().enumerate() {
                    *x = if transpose.has_node(node) { value } else { 0.0 };
                }
            }
        }
    }
    if update == UpdateMode::Synchronous {
        let (r, a) = buffers.split_mut();
        copy_values(a, r);
    }
}

/// Parallel version of [`seed`].
fn par_seed(
    buffers: &mut RankBuffers,
    transpose: &(impl RankGraph + Sync),
    init: Option<&[f64]>,
    update: UpdateMode,
) {
    let r = buffers.previous_mut();
    match init {
        Some(init) => par_copy_values(r, init),
        None => {
            let value = 1.0 / transpose.order() as f64;
            if transpose.order() == transpose.span() {
                par_fill_value(r, value);
            } else {
                r.par_iter_mut()
                    .with_min_len(RAYON_MIN_LEN)
                    .enumerate()
                    .for_each(|(node, x)| {
                        *x = if transpose.has_node(node) { value } else { 0.0 };
                    });
            }
        }
    }
    if update == UpdateMode::Synchronous {
        let (r, a) = buffers.split_mut();
        par_copy_values(a, r);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::vec_graph::VecGraph;
    use crate::transform::transpose_with_degree;

    #[test]
    fn test_seed_skips_inactive() {
        let mut g = VecGraph::from_arcs([(0, 1), (1, 3), (3, 0)]);
        g.remove_node(2);
        let t = transpose_with_degree(&g);
        let mut buffers = RankBuffers::new(t.span());
        seed(&mut buffers, &t, None, UpdateMode::Synchronous);
        assert_eq!(buffers.previous(), &[1.0 / 3.0, 1.0 / 3.0, 0.0, 1.0 / 3.0]);
        assert_eq!(buffers.previous(), buffers.current());
    }

    #[test]
    fn test_init_length() {
        let t = transpose_with_degree(&VecGraph::from_arcs([(0, 1), (1, 0)]));
        assert!(matches!(
            pagerank_seq(&t, Some(&[0.5]), &PagerankOptions::default()),
            Err(PagerankError::InitialRanksLength {
                expected: 2,
                found: 1
            })
        ));
    }
}
