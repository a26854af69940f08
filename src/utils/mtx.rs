/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Loading graphs in [Matrix Market] coordinate format.
//!
//! The first line must be a header of the form
//!
//! ```text
//! %%MatrixMarket matrix coordinate <field> <symmetry>
//! ```
//!
//! where `<field>` is `pattern`, `real`, `integer` or `double` (values are
//! ignored) and `<symmetry>` is `general` or `symmetric` (in which case
//! each entry yields an arc in both directions). Comment lines start with
//! `%`. Indices are 1-based, and are converted to 0-based node identifiers.
//!
//! [Matrix Market]: https://math.nist.gov/MatrixMarket/formats.html

use crate::graphs::vec_graph::VecGraph;
use anyhow::Context;
use dsi_progress_logger::prelude::*;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Errors raised while parsing a Matrix Market file.
#[derive(Error, Debug)]
pub enum MtxError {
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    #[error("Missing or malformed Matrix Market header")]
    MissingHeader,
    #[error("Unsupported Matrix Market format: {0}")]
    Unsupported(String),
    #[error("Malformed size line {line}")]
    BadSize { line: usize },
    #[error("Malformed entry at line {line}")]
    BadEntry { line: usize },
    #[error("Entry ({row}, {col}) at line {line} is out of range")]
    OutOfRange { line: usize, row: usize, col: usize },
    #[error("Expected {expected} entries, found {found}")]
    EntryCount { expected: usize, found: usize },
}

/// Parses a graph in Matrix Market coordinate format.
///
/// The resulting graph has max(rows, columns) nodes, all active.
pub fn parse_mtx(reader: impl BufRead) -> Result<VecGraph, MtxError> {
    let mut pl = progress_logger![item_name = "entry"];
    parse_mtx_with_logging(reader, &mut pl)
}

/// Parses a graph in Matrix Market coordinate format, logging progress on
/// `pl`.
pub fn parse_mtx_with_logging(
    reader: impl BufRead,
    pl: &mut impl ProgressLog,
) -> Result<VecGraph, MtxError> {
    let mut lines = reader.lines().enumerate();

    let header = match lines.next() {
        Some((_, line)) => line?,
        None => return Err(MtxError::MissingHeader),
    };
    let tokens = header
        .split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>();
    if tokens.len() != 5 || tokens[0] != "%%matrixmarket" || tokens[1] != "matrix" {
        return Err(MtxError::MissingHeader);
    }
    if tokens[2] != "coordinate" {
        return Err(MtxError::Unsupported(tokens[2].clone()));
    }
    if !matches!(tokens[3].as_str(), "pattern" | "real" | "integer" | "double") {
        return Err(MtxError::Unsupported(tokens[3].clone()));
    }
    let symmetric = match tokens[4].as_str() {
        "general" => false,
        "symmetric" => true,
        other => return Err(MtxError::Unsupported(other.to_owned())),
    };

    let mut size = None;
    let mut graph = VecGraph::new();
    let mut arcs = Vec::new();
    let mut found = 0;

    for (index, line) in lines {
        let line = line?;
        let line_num = index + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('%') {
            continue;
        }
        let mut fields = line.split_whitespace();

        let Some((rows, cols, expected)) = size else {
            let mut parse = || fields.next().and_then(|f| f.parse::<usize>().ok());
            let (Some(rows), Some(cols), Some(nnz)) = (parse(), parse(), parse()) else {
                return Err(MtxError::BadSize { line: line_num });
            };
            graph = VecGraph::empty(rows.max(cols));
            arcs.reserve(if symmetric { 2 * nnz } else { nnz });
            size = Some((rows, cols, nnz));
            pl.expected_updates(Some(nnz));
            pl.start("Reading Matrix Market entries...");
            continue;
        };

        let mut parse = || fields.next().and_then(|f| f.parse::<usize>().ok());
        let (Some(row), Some(col)) = (parse(), parse()) else {
            return Err(MtxError::BadEntry { line: line_num });
        };
        if row == 0 || col == 0 || row > rows || col > cols {
            return Err(MtxError::OutOfRange {
                line: line_num,
                row,
                col,
            });
        }
        if found == expected {
            return Err(MtxError::EntryCount {
                expected,
                found: found + 1,
            });
        }
        found += 1;

        arcs.push((row - 1, col - 1));
        if symmetric && row != col {
            arcs.push((col - 1, row - 1));
        }
        pl.light_update();
    }

    let Some((_, _, expected)) = size else {
        return Err(MtxError::MissingHeader);
    };
    if found != expected {
        return Err(MtxError::EntryCount { expected, found });
    }
    pl.done();

    graph.add_arcs(arcs);
    Ok(graph)
}

/// Loads a graph in Matrix Market coordinate format from a file.
pub fn load_mtx(path: impl AsRef<Path>) -> anyhow::Result<VecGraph> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("Could not open {}", path.display()))?;
    parse_mtx(BufReader::new(file))
        .with_context(|| format!("Could not parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_general() -> anyhow::Result<()> {
        let data = "%%MatrixMarket matrix coordinate pattern general\n\
                    % a comment\n\
                    4 4 3\n\
                    1 2\n\
                    2 3\n\
                    3 1\n";
        let g = parse_mtx(Cursor::new(data))?;
        assert_eq!(g.order(), 4);
        assert_eq!(g.num_arcs(), 3);
        assert_eq!(g.successors(0), &[1]);
        assert_eq!(g.successors(2), &[0]);
        assert_eq!(g.outdegree(3), 0);
        Ok(())
    }

    #[test]
    fn test_symmetric_with_values() -> anyhow::Result<()> {
        let data = "%%MatrixMarket matrix coordinate real symmetric\n\
                    3 3 3\n\
                    2 1 0.5\n\
                    3 1 1.5\n\
                    3 3 2.0\n";
        let g = parse_mtx(Cursor::new(data))?;
        assert_eq!(g.num_arcs(), 5);
        assert_eq!(g.successors(0), &[1, 2]);
        assert_eq!(g.successors(2), &[0, 2]);
        Ok(())
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            parse_mtx(Cursor::new("")),
            Err(MtxError::MissingHeader)
        ));
        assert!(matches!(
            parse_mtx(Cursor::new("%%MatrixMarket matrix array real general\n")),
            Err(MtxError::Unsupported(_))
        ));
        assert!(matches!(
            parse_mtx(Cursor::new(
                "%%MatrixMarket matrix coordinate pattern general\n2 x 1\n"
            )),
            Err(MtxError::BadSize { line: 2 })
        ));
        assert!(matches!(
            parse_mtx(Cursor::new(
                "%%MatrixMarket matrix coordinate pattern general\n2 2 1\n3 1\n"
            )),
            Err(MtxError::OutOfRange { line: 3, .. })
        ));
        assert!(matches!(
            parse_mtx(Cursor::new(
                "%%MatrixMarket matrix coordinate pattern general\n2 2 2\n1 2\n"
            )),
            Err(MtxError::EntryCount {
                expected: 2,
                found: 1
            })
        ));
        assert!(matches!(
            parse_mtx(Cursor::new(
                "%%MatrixMarket matrix coordinate pattern general\n"
            )),
            Err(MtxError::MissingHeader)
        ));
    }
}
