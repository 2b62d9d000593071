//! Graphviz source for the display subgraph.
//!
//! The sample is drawn undirected: one line per node pair, labelled with
//! the segment length truncated to whole metres.  Rendering (`dot -Tpng`)
//! is left to Graphviz.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;

use rn_core::NodeId;
use rn_graph::Subgraph;

use crate::ExportResult;

/// DOT source of `sample` as an undirected graph named `name`.
///
/// Nodes are emitted in ascending id order; each unordered pair is drawn
/// once, using the first arc met.
pub fn render_dot(sample: &Subgraph, name: &str) -> String {
    let mut ids: Vec<NodeId> = sample.nodes.clone();
    ids.sort_unstable();

    let mut out = String::new();
    let _ = writeln!(out, "graph \"{}\" {{", escape(name));
    out.push_str("  size=\"8,10\";\n  dpi=300;\n  ratio=compress;\n");

    for id in &ids {
        let _ = writeln!(out, "  \"{0}\" [label=\"{0}\"];", id.raw());
    }

    let mut drawn: FxHashSet<(NodeId, NodeId)> = FxHashSet::default();
    for &u in &ids {
        for e in sample.neighbors(u) {
            let v = e.neighbor;
            let pair = if u <= v { (u, v) } else { (v, u) };
            if !drawn.insert(pair) {
                continue;
            }
            let _ = writeln!(
                out,
                "  \"{}\" -- \"{}\" [label=\"{} m\"];",
                pair.0.raw(),
                pair.1.raw(),
                e.length_m as i64
            );
        }
    }
    out.push_str("}\n");
    out
}

/// Write [`render_dot`] output to `path`.
pub fn write_dot(sample: &Subgraph, name: &str, path: &Path) -> ExportResult<()> {
    fs::write(path, render_dot(sample, name))?;
    Ok(())
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
