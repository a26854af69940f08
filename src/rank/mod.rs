/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! PageRank by damped power iteration.
//!
//! The entry points are [`pagerank_seq`], [`pagerank_par`] and
//! [`pagerank`], each with a `_with_logging` variant accepting a
//! [`ProgressLog`](dsi_progress_logger::ProgressLog). They all take the
//! transpose of the graph annotated with the original outdegrees (see
//! [`transpose_with_degree`](crate::transform::transpose_with_degree)).
//!
//! The building blocks of an iteration are available separately in
//! [`norm`], [`teleport`] and [`update`].

mod buffers;
pub use buffers::RankBuffers;

mod iteration;
pub use iteration::{IterationLoop, LoopOutcome};

pub mod norm;

mod options;
pub use options::*;

mod pagerank;
pub use pagerank::*;

pub mod teleport;

pub mod update;

use thiserror::Error;

/// Errors reported before a PageRank computation starts.
#[derive(Error, Debug)]
pub enum PagerankError {
    #[error("the number of repetitions must be positive")]
    InvalidRepeat,
    #[error("the tolerance must be positive (found {0})")]
    InvalidTolerance(f64),
    #[error("the damping factor must be in (0 . . 1) (found {0})")]
    InvalidDamping(f64),
    #[error("the maximum number of iterations must be positive")]
    InvalidMaxIterations,
    #[error("the initial ranks have length {found}, but the graph has span {expected}")]
    InitialRanksLength { expected: usize, found: usize },
    #[error("could not build the thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
