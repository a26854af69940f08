/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::PagerankError;
use crate::utils::Granularity;
use std::fmt::Display;
use std::time::Duration;

/// The norm used to measure the distance between successive rank vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Norm {
    /// Accepted for compatibility, but not computed: the distance is
    /// measured with the [ℓ∞ norm](Norm::LInf).
    L0,
    /// Sum of absolute differences.
    L1,
    /// Square root of the sum of squared differences.
    L2,
    /// Maximum absolute difference. This is the default.
    #[default]
    LInf,
}

impl Display for Norm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Norm::L0 => f.write_str("L0"),
            Norm::L1 => f.write_str("L1"),
            Norm::L2 => f.write_str("L2"),
            Norm::LInf => f.write_str("L∞"),
        }
    }
}

/// How ranks are updated during an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpdateMode {
    /// Jacobi-style: new ranks are computed from the ranks of the previous
    /// iteration only, and written to a separate vector. This is the
    /// default.
    #[default]
    Synchronous,
    /// Gauss–Seidel-style: ranks are updated in place, so a node might see
    /// the new rank of some predecessors. In parallel, the order of updates
    /// is not specified.
    Asynchronous,
}

impl Display for UpdateMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateMode::Synchronous => f.write_str("synchronous"),
            UpdateMode::Asynchronous => f.write_str("asynchronous"),
        }
    }
}

/// How the rank of dead ends (nodes without successors) is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeadEnds {
    /// The rank of dead ends is lost at each iteration, so the rank vector
    /// sums to less than one if there are dead ends. This is the default.
    #[default]
    Ignore,
    /// The rank of dead ends is redistributed uniformly to all nodes as
    /// part of the teleport mass, preserving the total rank.
    Teleport,
}

impl Display for DeadEnds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeadEnds::Ignore => f.write_str("ignored"),
            DeadEnds::Teleport => f.write_str("teleported"),
        }
    }
}

/// Options of a PageRank computation.
///
/// Options are checked by [`validate`](PagerankOptions::validate) before
/// any computation starts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagerankOptions {
    /// How many times the whole computation is repeated, for timing
    /// purposes. Must be positive.
    pub repeat: usize,
    /// The norm used for the stopping criterion.
    pub norm: Norm,
    /// The computation stops when the distance between successive
    /// approximations is below this threshold. Must be positive.
    pub tolerance: f64,
    /// The damping factor. Must be in the interval (0 . . 1).
    pub damping: f64,
    /// The computation stops after this number of iterations. Must be
    /// positive.
    pub max_iterations: usize,
    /// Synchronous or asynchronous updates.
    pub update: UpdateMode,
    /// Dead-end handling.
    pub dead_ends: DeadEnds,
    /// The size of the tasks of parallel sweeps.
    pub granularity: Granularity,
}

impl PagerankOptions {
    pub const DEFAULT_TOLERANCE: f64 = 1E-10;
    pub const DEFAULT_DAMPING: f64 = 0.85;
    pub const DEFAULT_MAX_ITERATIONS: usize = 500;

    /// Checks that the options are valid.
    pub fn validate(&self) -> Result<(), PagerankError> {
        if self.repeat == 0 {
            return Err(PagerankError::InvalidRepeat);
        }
        if self.tolerance.is_nan() || self.tolerance <= 0.0 {
            return Err(PagerankError::InvalidTolerance(self.tolerance));
        }
        // Note that NaN is not contained in any range
        if !(0.0..1.0).contains(&self.damping) || self.damping == 0.0 {
            return Err(PagerankError::InvalidDamping(self.damping));
        }
        if self.max_iterations == 0 {
            return Err(PagerankError::InvalidMaxIterations);
        }
        Ok(())
    }
}

impl Default for PagerankOptions {
    fn default() -> Self {
        Self {
            repeat: 1,
            norm: Norm::default(),
            tolerance: Self::DEFAULT_TOLERANCE,
            damping: Self::DEFAULT_DAMPING,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            update: UpdateMode::default(),
            dead_ends: DeadEnds::default(),
            granularity: Granularity::default(),
        }
    }
}

/// The result of a PageRank computation.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagerankResult {
    /// The rank of each key; inactive keys have rank zero, unless an
    /// initial vector was provided.
    pub ranks: Vec<f64>,
    /// The number of iterations performed by the last run.
    pub iterations: usize,
    /// The distance between the last two approximations.
    pub error: f64,
    /// The average duration of a run.
    pub time: Duration,
}

impl PagerankResult {
    /// Returns true if the last measured error is below `tolerance`.
    ///
    /// This is false if the computation was stopped by the iteration limit.
    pub fn converged(&self, tolerance: f64) -> bool {
        self.error < tolerance
    }
}
