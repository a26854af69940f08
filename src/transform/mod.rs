/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Transformations on graphs.

mod self_loops;
pub use self_loops::*;

mod symmetrize;
pub use symmetrize::*;

mod transpose;
pub use transpose::*;
