/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![cfg(feature = "serde")]

use anyhow::Result;
use pagerank_basic::rank::{DeadEnds, Norm, PagerankOptions, UpdateMode};
use pagerank_basic::utils::Granularity;

#[test]
fn test_options_from_json() -> Result<()> {
    let options = PagerankOptions {
        norm: Norm::L1,
        update: UpdateMode::Asynchronous,
        dead_ends: DeadEnds::Teleport,
        granularity: Granularity::Arcs(10_000),
        ..Default::default()
    };
    let json = serde_json::to_string(&options)?;
    assert!(json.contains("Asynchronous"));
    let parsed: PagerankOptions = serde_json::from_str(&json)?;
    assert_eq!(parsed, options);
    Ok(())
}
