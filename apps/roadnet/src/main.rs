//! `roadnet` — one-shot cleaning of a road-network export.
//!
//! Loads raw nodes/edges, builds the weighted adjacency, keeps the largest
//! connected component, draws a display sample, and writes:
//!
//! | File            | Contents                                           |
//! |-----------------|----------------------------------------------------|
//! | `edges.csv`     | undirected edge table                              |
//! | `nodes.csv`     | node table                                         |
//! | `network.json`  | full retained network for a map renderer           |
//! | `subgraph.dot`  | display sample for Graphviz                        |
//!
//! Run with:
//!   cargo run -p roadnet --release -- csv --nodes nodes.csv --edges edges.csv -o out/

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use rn_core::{DEFAULT_SAMPLE_QUEUE_CAP, DEFAULT_SAMPLE_TARGET, DEFAULT_SPEED_KMH, PipelineConfig};
use rn_export::{CsvTableWriter, TableWriter, node_rows, write_dot, write_network_json};
use rn_graph::{Pipeline, RawNetwork};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    source: Source,

    #[command(flatten)]
    run: RunArgs,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Source {
    /// Read raw records from `id,x,y` and `origin,destination,length,oneway,name` CSV files.
    Csv {
        #[arg(long)]
        nodes: PathBuf,
        #[arg(long)]
        edges: PathBuf,
    },
    /// Read drivable roads from an OSM PBF extract.
    #[cfg(feature = "osm")]
    Pbf {
        path: PathBuf,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Output directory (created if missing).
    #[arg(short, long, global = true, default_value = "output")]
    out: PathBuf,

    /// Average speed used to convert metres to minutes.
    #[arg(long, global = true, default_value_t = DEFAULT_SPEED_KMH)]
    speed_kmh: f64,

    /// Nodes in the display subgraph.
    #[arg(long, global = true, default_value_t = DEFAULT_SAMPLE_TARGET)]
    sample_size: usize,

    /// Bound on sampled + queued nodes during the sampling walk.
    #[arg(long, global = true, default_value_t = DEFAULT_SAMPLE_QUEUE_CAP)]
    sample_queue_cap: usize,

    /// Seed for the display sample; omit for a different sample every run.
    #[arg(long, global = true)]
    seed: Option<u64>,
}

impl RunArgs {
    fn config(&self) -> PipelineConfig {
        PipelineConfig {
            speed_kmh:        self.speed_kmh,
            sample_target:    self.sample_size,
            sample_queue_cap: self.sample_queue_cap,
            seed:             self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let t0 = Instant::now();
    let pipeline = Pipeline::new(cli.run.config()).context("invalid configuration")?;

    let raw = load(&cli.source)?;
    let out = pipeline.run(&raw).context("building the road graph failed")?;

    let dir = &cli.run.out;
    fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;

    let mut tables = CsvTableWriter::new(dir)?;
    tables.write_edges(&out.edges)?;
    tables.write_nodes(&node_rows(&out.graph))?;
    tables.finish()?;
    info!(edges = out.edges.len(), nodes = out.graph.node_count(), "tables written");

    write_network_json(&out.graph, &out.edges, &dir.join("network.json"))?;
    write_dot(&out.sample, "road_sample", &dir.join("subgraph.dot"))?;
    info!(sampled = out.sample.len(), "render inputs written");

    println!();
    println!("{}", out.stats);
    println!();
    println!("Done in {:.3} s. Files in {}:", t0.elapsed().as_secs_f64(), dir.display());
    for f in ["edges.csv", "nodes.csv", "network.json", "subgraph.dot"] {
        println!("  {f}");
    }
    Ok(())
}

fn load(source: &Source) -> Result<RawNetwork> {
    match source {
        Source::Csv { nodes, edges } => rn_source::load_network_csv(nodes, edges)
            .context("loading the CSV export failed"),
        #[cfg(feature = "osm")]
        Source::Pbf { path } => rn_source::osm::load_from_pbf(path)
            .with_context(|| format!("loading {} failed", path.display())),
    }
}
