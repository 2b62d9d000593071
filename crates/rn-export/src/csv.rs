//! CSV table backend.
//!
//! Creates two files in the configured output directory:
//! - `edges.csv` — [`EDGE_COLUMNS`]
//! - `nodes.csv` — [`NODE_COLUMNS`]
//!
//! Floats are written in shortest round-trip form and always keep a decimal
//! point (`1000.0`, `2.0`).

use std::fs::File;
use std::path::Path;

use csv::Writer;

use rn_graph::EdgeRecord;

use crate::writer::TableWriter;
use crate::{ExportResult, NodeRow};

/// Header of `edges.csv`.
pub const EDGE_COLUMNS: [&str; 5] =
    ["origin", "destination", "distance_meters", "time_minutes", "street_name"];

/// Header of `nodes.csv`.
pub const NODE_COLUMNS: [&str; 3] = ["node_id", "latitude", "longitude"];

/// Writes the edge and node tables as UTF-8 CSV.
pub struct CsvTableWriter {
    edges:    Writer<File>,
    nodes:    Writer<File>,
    finished: bool,
}

impl CsvTableWriter {
    /// Create (or truncate) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> ExportResult<Self> {
        let mut edges = Writer::from_path(dir.join("edges.csv"))?;
        edges.write_record(EDGE_COLUMNS)?;

        let mut nodes = Writer::from_path(dir.join("nodes.csv"))?;
        nodes.write_record(NODE_COLUMNS)?;

        Ok(Self { edges, nodes, finished: false })
    }
}

impl TableWriter for CsvTableWriter {
    fn write_edges(&mut self, rows: &[EdgeRecord]) -> ExportResult<()> {
        for row in rows {
            self.edges.write_record(&[
                row.origin.raw().to_string(),
                row.destination.raw().to_string(),
                format!("{:?}", row.distance_meters),
                format!("{:?}", row.time_minutes),
                row.street_name.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_nodes(&mut self, rows: &[NodeRow]) -> ExportResult<()> {
        for row in rows {
            self.nodes.write_record(&[
                row.node_id.raw().to_string(),
                format!("{:?}", row.latitude),
                format!("{:?}", row.longitude),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> ExportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.edges.flush()?;
        self.nodes.flush()?;
        Ok(())
    }
}
