/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Miscellaneous utilities.

mod duration;
pub use duration::*;

mod granularity;
pub use granularity::*;

pub mod histogram;
pub use histogram::{degree_distribution, degrees, RankHistogram};

pub mod mtx;

mod vector;
pub use vector::*;
