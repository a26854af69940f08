/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Distances between rank vectors.
//!
//! All distances are computed by a [`NormAccumulator`], which is fed with
//! absolute differences one at a time. Accumulators can be
//! [merged](NormAccumulator::merge), so parallel computations fold
//! thread-local accumulators and combine them at the end.
//!
//! The [`L0`](Norm::L0) selector is not dispatched to a distinct
//! computation: it yields the same result as [`LInf`](Norm::LInf).

use super::Norm;
use crate::utils::RAYON_MIN_LEN;
use kahan::KahanSum;
use rayon::prelude::*;

/// Accumulates absolute differences and computes their norm.
///
/// Sums use Kahan summation.
pub struct NormAccumulator {
    norm: Norm,
    sum: KahanSum<f64>,
    max: f64,
}

impl std::fmt::Debug for NormAccumulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NormAccumulator")
            .field("norm", &self.norm)
            .field("value", &self.value())
            .finish_non_exhaustive()
    }
}

impl NormAccumulator {
    /// Creates an empty accumulator for the given norm.
    pub fn new(norm: Norm) -> Self {
        Self {
            norm,
            sum: KahanSum::new(),
            max: 0.0,
        }
    }

    /// Adds an absolute difference.
    #[inline(always)]
    pub fn add(&mut self, delta: f64) {
        match self.norm {
            Norm::L1 => self.sum += delta,
            Norm::L2 => self.sum += delta * delta,
            Norm::L0 | Norm::LInf => self.max = self.max.max(delta),
        }
    }

    /// Combines the differences of another accumulator into this one.
    pub fn merge(mut self, other: Self) -> Self {
        debug_assert_eq!(self.norm, other.norm);
        self.sum = self.sum + other.sum;
        self.max = self.max.max(other.max);
        self
    }

    /// Returns the norm of the accumulated differences.
    pub fn value(&self) -> f64 {
        match self.norm {
            Norm::L1 => self.sum.sum(),
            Norm::L2 => self.sum.sum().sqrt(),
            Norm::L0 | Norm::LInf => self.max,
        }
    }
}

/// Returns the distance between `x` and `y` in the given norm.
///
/// # Panics
///
/// Panics if the vectors have different lengths.
pub fn error(x: &[f64], y: &[f64], norm: Norm) -> f64 {
    assert_eq!(x.len(), y.len());
    let mut acc = NormAccumulator::new(norm);
    for (a, b) in x.iter().zip(y) {
        acc.add((a - b).abs());
    }
    acc.value()
}

/// Returns in parallel the distance between `x` and `y` in the given norm.
///
/// The computation is performed in the current Rayon thread pool.
///
/// # Panics
///
/// Panics if the vectors have different lengths.
pub fn par_error(x: &[f64], y: &[f64], norm: Norm) -> f64 {
    assert_eq!(x.len(), y.len());
    x.par_iter()
        .zip(y.par_iter())
        .with_min_len(RAYON_MIN_LEN)
        .fold(
            || NormAccumulator::new(norm),
            |mut acc, (a, b)| {
                acc.add((a - b).abs());
                acc
            },
        )
        .reduce(|| NormAccumulator::new(norm), NormAccumulator::merge)
        .value()
}

/// Returns the ℓ₁ distance between `x` and `y`.
pub fn l1_norm(x: &[f64], y: &[f64]) -> f64 {
    error(x, y, Norm::L1)
}

/// Returns the ℓ₂ distance between `x` and `y`.
pub fn l2_norm(x: &[f64], y: &[f64]) -> f64 {
    error(x, y, Norm::L2)
}

/// Returns the ℓ∞ distance between `x` and `y`.
pub fn linf_norm(x: &[f64], y: &[f64]) -> f64 {
    error(x, y, Norm::LInf)
}
