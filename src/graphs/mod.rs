/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graph implementations.

mod degree_transpose;
pub use degree_transpose::DegreeTranspose;

pub mod random;

pub mod vec_graph;

pub mod prelude {
    pub use super::degree_transpose::DegreeTranspose;
    pub use super::random::ErdosRenyi;
    pub use super::vec_graph::VecGraph;
}
