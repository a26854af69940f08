/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use pagerank_basic::prelude::*;
use pagerank_basic::utils::mtx::load_mtx;
use std::io::Write;

const CHAIN: &str = "%%MatrixMarket matrix coordinate pattern general\n\
                     % A -> B -> C\n\
                     3 3 2\n\
                     1 2\n\
                     2 3\n";

#[test]
fn test_load_and_rank() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("chain.mtx");
    std::fs::File::create(&path)?.write_all(CHAIN.as_bytes())?;

    let g = load_mtx(&path)?;
    assert_eq!(g.order(), 3);
    assert_eq!(g.num_arcs(), 2);
    assert_eq!(g.successors(0), &[1]);
    assert_eq!(g.successors(1), &[2]);

    let t = transpose_with_degree(&g);
    let options = PagerankOptions {
        dead_ends: DeadEnds::Teleport,
        ..Default::default()
    };
    let ranks = pagerank_seq(&t, None, &options)?.ranks;
    assert!((ranks.iter().sum::<f64>() - 1.0).abs() < 1E-12);
    Ok(())
}

#[test]
fn test_symmetric_with_self_loops() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("sym.mtx");
    std::fs::write(
        &path,
        "%%MatrixMarket matrix coordinate real symmetric\n\
         4 4 3\n\
         2 1 1.0\n\
         3 2 0.5\n\
         4 4 2.0\n",
    )?;
    let mut g = load_mtx(&path)?;
    assert_eq!(g.num_arcs(), 5);
    assert_eq!(add_self_loops(&mut g), 3);
    assert_eq!(g.num_arcs(), 8);
    assert_eq!(symmetrize(&g), g);
    Ok(())
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_mtx(dir.path().join("missing.mtx")).unwrap_err();
    assert!(err.to_string().contains("missing.mtx"));
}

#[cfg(feature = "cli")]
#[test]
fn test_cli() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("chain.mtx");
    std::fs::write(&path, CHAIN)?;
    let path = path.to_string_lossy().into_owned();

    pagerank_basic::cli::main(["pagerank", path.as_str(), "--sequential", "--dead-ends"])?;
    pagerank_basic::cli::main([
        "pagerank",
        path.as_str(),
        "-j",
        "2",
        "--async",
        "--symmetrize",
        "--self-loops",
        "--norm",
        "l1",
        "--buckets",
        "4",
    ])?;
    assert!(pagerank_basic::cli::main(["pagerank", path.as_str(), "--damping", "1.0"]).is_err());
    assert!(pagerank_basic::cli::main(["pagerank", path.as_str(), "--buckets", "0"]).is_err());
    Ok(())
}
