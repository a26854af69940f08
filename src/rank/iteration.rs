/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::buffers::RankBuffers;
use super::norm;
use super::teleport::{base_teleport, par_teleport, teleport};
use super::update::{par_update_ranks, par_update_ranks_in_place, update_ranks, update_ranks_in_place};
use super::{DeadEnds, Norm, PagerankOptions, UpdateMode};
use crate::traits::RankGraph;
use dsi_progress_logger::ProgressLog;
use rayon::ThreadPool;

/// The state of an iteration loop after termination.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoopOutcome {
    /// The number of iterations performed.
    pub iterations: usize,
    /// The error measured at the last iteration.
    pub error: f64,
}

/// The PageRank iteration loop.
///
/// Each iteration computes the teleport mass from the previous
/// approximation, updates the rank of every node, and measures the error:
/// in [synchronous](UpdateMode::Synchronous) mode, the distance between the
/// new and the previous approximation, after which the roles of the two
/// [buffers](RankBuffers) are exchanged; in
/// [asynchronous](UpdateMode::Asynchronous) mode, the norm of the changes
/// applied in place. The loop stops when the error is below the tolerance
/// or after the maximum number of iterations.
///
/// In both modes the final approximation is in the
/// [previous](RankBuffers::previous) buffer.
#[derive(Debug)]
pub struct IterationLoop<'a, G: RankGraph> {
    transpose: &'a G,
    damping: f64,
    tolerance: f64,
    max_iterations: usize,
    norm: Norm,
    update: UpdateMode,
    dead_ends: DeadEnds,
    granularity: usize,
}

impl<'a, G: RankGraph> IterationLoop<'a, G> {
    /// Creates a loop on the given transpose using the given options.
    ///
    /// The options are assumed to be [valid](PagerankOptions::validate).
    pub fn new(transpose: &'a G, options: &PagerankOptions) -> Self {
        Self {
            transpose,
            damping: options.damping,
            tolerance: options.tolerance,
            max_iterations: options.max_iterations,
            norm: options.norm,
            update: options.update,
            dead_ends: options.dead_ends,
            granularity: options
                .granularity
                .node_granularity(transpose.span(), transpose.num_arcs()),
        }
    }

    /// Returns the number of nodes per parallel task.
    pub fn granularity(&self) -> usize {
        self.granularity
    }

    /// Runs the loop on a single thread.
    ///
    /// `buffers` must contain the initial approximation in the previous
    /// buffer and, in synchronous mode, a copy of it in the current one.
    pub fn run_seq(&self, buffers: &mut RankBuffers, pl: &mut impl ProgressLog) -> LoopOutcome {
        self.run(buffers, pl, |buffers| self.seq_step(buffers))
    }

    fn seq_step(&self, buffers: &mut RankBuffers) -> f64 {
        match self.update {
            UpdateMode::Synchronous => {
                let (r, a) = buffers.split_mut();
                let c0 = match self.dead_ends {
                    DeadEnds::Ignore => base_teleport(self.transpose.order(), self.damping),
                    DeadEnds::Teleport => teleport(self.transpose, r, self.damping),
                };
                update_ranks(a, self.transpose, r, c0, self.damping);
                let error = norm::error(a, r, self.norm);
                buffers.swap();
                error
            }
            UpdateMode::Asynchronous => {
                let r = buffers.previous_mut();
                let c0 = match self.dead_ends {
                    DeadEnds::Ignore => base_teleport(self.transpose.order(), self.damping),
                    DeadEnds::Teleport => teleport(self.transpose, r, self.damping),
                };
                update_ranks_in_place(r, self.transpose, c0, self.damping, self.norm)
            }
        }
    }

    fn run(
        &self,
        buffers: &mut RankBuffers,
        pl: &mut impl ProgressLog,
        mut step: impl FnMut(&mut RankBuffers) -> f64,
    ) -> LoopOutcome {
        debug_assert_eq!(buffers.len(), self.transpose.span());
        pl.item_name("iteration");
        pl.expected_updates(Some(self.max_iterations));
        pl.start(format!(
            "Computing PageRank ({} updates, damping={}, granularity={})...",
            self.update, self.damping, self.granularity
        ));

        let mut outcome = LoopOutcome {
            iterations: 0,
            error: f64::INFINITY,
        };
        while outcome.iterations < self.max_iterations {
            outcome.error = step(buffers);
            outcome.iterations += 1;
            log::debug!(
                "Iteration {}: {} error = {}",
                outcome.iterations,
                self.norm,
                outcome.error
            );
            pl.update();
            if outcome.error < self.tolerance {
                break;
            }
        }

        pl.done();
        outcome
    }
}

impl<G: RankGraph + Sync> IterationLoop<'_, G> {
    /// Runs the loop on the given thread pool.
    ///
    /// `buffers` must contain the initial approximation in the previous
    /// buffer and, in synchronous mode, a copy of it in the current one.
    pub fn run_par(
        &self,
        buffers: &mut RankBuffers,
        thread_pool: &ThreadPool,
        pl: &mut impl ProgressLog,
    ) -> LoopOutcome {
        self.run(buffers, pl, |buffers| {
            thread_pool.install(|| self.par_step(buffers))
        })
    }

    fn par_step(&self, buffers: &mut RankBuffers) -> f64 {
        match self.update {
            UpdateMode::Synchronous => {
                let (r, a) = buffers.split_mut();
                let c0 = match self.dead_ends {
                    DeadEnds::Ignore => base_teleport(self.transpose.order(), self.damping),
                    DeadEnds::Teleport => par_teleport(self.transpose, r, self.damping),
                };
                par_update_ranks(a, self.transpose, r, c0, self.damping, self.granularity);
                let error = norm::par_error(a, r, self.norm);
                buffers.swap();
                error
            }
            UpdateMode::Asynchronous => {
                let r = buffers.previous_mut();
                let c0 = match self.dead_ends {
                    DeadEnds::Ignore => base_teleport(self.transpose.order(), self.damping),
                    DeadEnds::Teleport => par_teleport(self.transpose, r, self.damping),
                };
                par_update_ranks_in_place(
                    r,
                    self.transpose,
                    c0,
                    self.damping,
                    self.norm,
                    self.granularity,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::vec_graph::VecGraph;
    use crate::transform::transpose_with_degree;
    use dsi_progress_logger::no_logging;

    #[test]
    fn test_max_iterations() {
        let t = transpose_with_degree(&VecGraph::from_arcs([(0, 1), (1, 2), (2, 0), (0, 2)]));
        let options = PagerankOptions {
            max_iterations: 3,
            tolerance: 1E-300,
            ..Default::default()
        };
        let lp = IterationLoop::new(&t, &options);
        let mut buffers = RankBuffers::new(3);
        buffers.previous_mut().fill(1.0 / 3.0);
        let (r, a) = buffers.split_mut();
        a.copy_from_slice(r);
        let outcome = lp.run_seq(&mut buffers, no_logging![]);
        assert_eq!(outcome.iterations, 3);
        assert!(outcome.error > 0.0);
    }

    #[test]
    fn test_fixed_point_stops_immediately() {
        // On a cycle the uniform vector is the fixed point
        let t = transpose_with_degree(&VecGraph::from_arcs([(0, 1), (1, 2), (2, 0)]));
        for update in [UpdateMode::Synchronous, UpdateMode::Asynchronous] {
            let options = PagerankOptions {
                update,
                ..Default::default()
            };
            let lp = IterationLoop::new(&t, &options);
            let mut buffers = RankBuffers::new(3);
            buffers.previous_mut().fill(1.0 / 3.0);
            let (r, a) = buffers.split_mut();
            a.copy_from_slice(r);
            let outcome = lp.run_seq(&mut buffers, no_logging![]);
            assert_eq!(outcome.iterations, 1, "{update}");
            assert!(outcome.error < 1E-15, "{update}");
        }
    }
}
