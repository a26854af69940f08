/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Command-line interface of the `pagerank` binary.

use crate::graphs::vec_graph::VecGraph;
use crate::rank::{
    pagerank_with_logging, thread_pool, DeadEnds, Execution, Norm, PagerankOptions, UpdateMode,
};
use crate::transform::{add_self_loops, symmetrize, transpose_with_degree};
use crate::utils::histogram::RankHistogram;
use crate::utils::mtx::load_mtx;
use crate::utils::{pretty_print_elapsed, Granularity};
use anyhow::{anyhow, bail, ensure, Result};
use clap::{Args, Parser, ValueEnum};
use dsi_progress_logger::{progress_logger, ProgressLog};
use std::path::PathBuf;
use std::time::Duration;

/// The norm used for the stopping criterion.
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum CliNorm {
    /// Not supported: behaves as the L∞ norm.
    L0,
    /// Sum of absolute differences.
    L1,
    /// Euclidean distance.
    L2,
    /// Maximum absolute difference.
    #[default]
    #[value(name = "linf")]
    LInf,
}

impl From<CliNorm> for Norm {
    fn from(n: CliNorm) -> Self {
        match n {
            CliNorm::L0 => Norm::L0,
            CliNorm::L1 => Norm::L1,
            CliNorm::L2 => Norm::L2,
            CliNorm::LInf => Norm::LInf,
        }
    }
}

/// Shared CLI arguments for commands that specify a granularity.
#[derive(Args, Debug)]
pub struct GranularityArgs {
    #[arg(long, conflicts_with("node_granularity"))]
    /// The tentative number of arcs used define the size of a parallel job
    /// (advanced option).
    pub arc_granularity: Option<u64>,

    #[arg(long, conflicts_with("arc_granularity"))]
    /// The tentative number of nodes used define the size of a parallel job
    /// (advanced option).
    pub node_granularity: Option<usize>,
}

impl GranularityArgs {
    pub fn into_granularity(&self) -> Granularity {
        match (self.arc_granularity, self.node_granularity) {
            (Some(_), Some(_)) => unreachable!(),
            (Some(arc_granularity), None) => Granularity::Arcs(arc_granularity),
            (None, Some(node_granularity)) => Granularity::Nodes(node_granularity),
            (None, None) => Granularity::default(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "pagerank",
    about = "Compute PageRank of a graph in Matrix Market format and print a histogram of the ranks.",
    long_about = None
)]
pub struct CliArgs {
    /// The graph, in Matrix Market coordinate format.
    pub graph: PathBuf,

    #[arg(long)]
    /// Add a self-loop to every node before computing.
    pub self_loops: bool,

    #[arg(long)]
    /// Make the graph symmetric before computing.
    pub symmetrize: bool,

    #[arg(short = 'j', long, default_value_t = num_cpus::get())]
    /// The number of threads to use.
    pub num_threads: usize,

    #[arg(long)]
    /// Compute on the current thread only.
    pub sequential: bool,

    #[arg(short, long, default_value_t = PagerankOptions::DEFAULT_DAMPING)]
    /// The damping factor (must be in the interval (0 . . 1)).
    pub damping: f64,

    #[arg(short, long, default_value_t = PagerankOptions::DEFAULT_TOLERANCE)]
    /// The error threshold to stop.
    pub tolerance: f64,

    #[arg(long, default_value_t = PagerankOptions::DEFAULT_MAX_ITERATIONS)]
    /// Maximum number of iterations.
    pub max_iter: usize,

    #[arg(short, long, value_enum, default_value_t = CliNorm::LInf)]
    /// The norm of the stopping criterion.
    pub norm: CliNorm,

    #[arg(long = "async")]
    /// Update ranks in place (Gauss–Seidel-like iteration).
    pub asynchronous: bool,

    #[arg(long)]
    /// Redistribute the rank of dead ends uniformly.
    pub dead_ends: bool,

    #[arg(short, long, default_value_t = 1)]
    /// How many times to repeat the computation (for timing).
    pub repeat: usize,

    #[arg(long, default_value_t = RankHistogram::DEFAULT_BUCKETS)]
    /// The number of buckets of the rank histogram.
    pub buckets: usize,

    #[arg(short, long, value_parser = parse_duration)]
    /// How often to log progress. Default is 10s. You can use the suffixes
    /// `s` for seconds, `m` for minutes, `h` for hours, and `d` for days. If
    /// no suffix is provided it is assumed to be in milliseconds.
    pub log_interval: Option<Duration>,

    #[clap(flatten)]
    pub granularity: GranularityArgs,
}

impl CliArgs {
    /// Returns the options of the computation described by the arguments.
    pub fn options(&self) -> PagerankOptions {
        PagerankOptions {
            repeat: self.repeat,
            norm: self.norm.into(),
            tolerance: self.tolerance,
            damping: self.damping,
            max_iterations: self.max_iter,
            update: if self.asynchronous {
                UpdateMode::Asynchronous
            } else {
                UpdateMode::Synchronous
            },
            dead_ends: if self.dead_ends {
                DeadEnds::Teleport
            } else {
                DeadEnds::Ignore
            },
            granularity: self.granularity.into_granularity(),
        }
    }
}

/// Parse a duration from a string.
///
/// If no suffix is given, it is assumed to be in milliseconds. The available
/// suffixes are `s` for seconds, `m` for minutes, `h` for hours, and `d` for
/// days.
///
/// Example: `1d2h3m4s567` this is parsed as: 1 day, 2 hours, 3 minutes, 4
/// seconds, and 567 milliseconds.
fn parse_duration(value: &str) -> Result<Duration> {
    if value.is_empty() {
        bail!("Empty duration string, if you want every 0 milliseconds use `0`.");
    }
    let mut duration = Duration::from_secs(0);
    let mut acc = String::new();
    for c in value.chars() {
        if c.is_ascii_digit() {
            acc.push(c);
        } else if c.is_whitespace() {
            continue;
        } else {
            let dur = acc.parse::<u64>()?;
            match c {
                's' => duration += Duration::from_secs(dur),
                'm' => duration += Duration::from_secs(dur * 60),
                'h' => duration += Duration::from_secs(dur * 60 * 60),
                'd' => duration += Duration::from_secs(dur * 60 * 60 * 24),
                _ => return Err(anyhow!("Invalid duration suffix: {}", c)),
            }
            acc.clear();
        }
    }
    if !acc.is_empty() {
        let dur = acc.parse::<u64>()?;
        duration += Duration::from_millis(dur);
    }
    Ok(duration)
}

/// Loads the graph named by the arguments and applies the requested
/// transformations.
pub fn load_graph(args: &CliArgs) -> Result<VecGraph> {
    log::info!("Loading the graph from {}", args.graph.display());
    let mut graph = load_mtx(&args.graph)?;
    log::info!("Loaded graph {}", graph);
    if args.symmetrize {
        graph = symmetrize(&graph);
        log::info!("Symmetrized graph {}", graph);
    }
    if args.self_loops {
        let added = add_self_loops(&mut graph);
        log::info!("Added {} self-loops: {}", added, graph);
    }
    Ok(graph)
}

/// The entry point of the command-line interface.
pub fn main<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let start = std::time::Instant::now();
    let args = CliArgs::try_parse_from(args)?;
    ensure!(args.buckets > 0, "The number of buckets must be positive");
    let options = args.options();
    // Fail before loading the graph
    options.validate()?;

    let mut pl = progress_logger![];
    if let Some(log_interval) = args.log_interval {
        pl.log_interval(log_interval);
    }

    let graph = load_graph(&args)?;
    let transpose = transpose_with_degree(&graph);
    log::info!(
        "Transposed graph has {} dead ends",
        transpose.num_dead_ends()
    );

    let result = if args.sequential {
        pagerank_with_logging(&transpose, None, &options, Execution::Sequential, &mut pl)?
    } else {
        let thread_pool = thread_pool(args.num_threads)?;
        pagerank_with_logging(
            &transpose,
            None,
            &options,
            Execution::Parallel(&thread_pool),
            &mut pl,
        )?
    };

    log::info!(
        "PageRank took {:.3} ms per run, {} iterations, error {} ({})",
        result.time.as_secs_f64() * 1E3,
        result.iterations,
        result.error,
        if result.converged(options.tolerance) {
            "converged"
        } else {
            "not converged"
        }
    );

    let nodes = graph.iter_nodes().collect::<Vec<_>>();
    print!("{}", RankHistogram::new(&result.ranks, nodes, args.buckets));

    log::info!(
        "The command took {}",
        pretty_print_elapsed(start.elapsed().as_secs_f64())
    );

    Ok(())
}
