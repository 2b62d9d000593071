//! OSM PBF loader — enabled with the `osm` Cargo feature.
//!
//! # Usage
//!
//! ```ignore
//! use std::path::Path;
//! use rn_source::osm::load_from_pbf;
//!
//! let raw = load_from_pbf(Path::new("lima.osm.pbf"))?;
//! ```
//!
//! # What is loaded
//!
//! Only drivable `highway=*` ways are kept (see [`is_drivable`]).  Each pair
//! of consecutive way nodes becomes one raw edge carrying the haversine
//! length, the way's `name`, and its one-way flag.  Ways tagged
//! `oneway=-1` are emitted against their node order, so the single arc runs
//! the legal way.  Nodes not referenced by a kept way are dropped, so every
//! emitted edge endpoint is declared.
//!
//! # Memory note
//!
//! All OSM node coordinates are buffered in a `HashMap<i64, GeoPoint>` for
//! the first pass, since ways reference nodes by id.  The map is freed once
//! road nodes have been copied out.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use osmpbf::{Element, ElementReader};
use tracing::info;

use rn_core::{GeoPoint, NodeId};
use rn_graph::{RawEdge, RawNetwork, RawNode};

use crate::SourceError;

// ── Public entry point ────────────────────────────────────────────────────────

/// Load raw records for all drivable roads in an OSM PBF file.
///
/// # Errors
///
/// Returns [`SourceError::Osm`] if the file cannot be opened or decoded.
pub fn load_from_pbf(path: &Path) -> Result<RawNetwork, SourceError> {
    // ── Phase 1: collect all OSM nodes + road ways in one sequential pass ──
    let reader = ElementReader::from_path(path).map_err(|e| SourceError::Osm(e.to_string()))?;

    let mut all_nodes: HashMap<i64, GeoPoint> = HashMap::new();
    let mut road_ways: Vec<OsmWay> = Vec::new();

    reader
        .for_each(|elem| match elem {
            Element::Node(n) => {
                all_nodes.insert(n.id(), GeoPoint::new(n.lon(), n.lat()));
            }
            Element::DenseNode(n) => {
                all_nodes.insert(n.id(), GeoPoint::new(n.lon(), n.lat()));
            }
            Element::Way(w) => {
                // Collect tags eagerly so &str lifetimes don't escape the closure.
                let tags: Vec<(&str, &str)> = w.tags().collect();
                let tag = |key: &str| tags.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);

                let Some(highway) = tag("highway").filter(|h| is_drivable(h)) else {
                    return;
                };
                road_ways.push(OsmWay {
                    refs:      w.refs().collect(),
                    direction: way_direction(highway, tag("oneway")),
                    name:      tag("name").map(str::to_owned),
                });
            }
            _ => {}
        })
        .map_err(|e| SourceError::Osm(e.to_string()))?;

    // ── Phase 2: keep only road-referenced nodes ──────────────────────────
    let road_node_ids: HashSet<i64> = road_ways
        .iter()
        .flat_map(|w| w.refs.iter().copied())
        .collect();

    let mut sorted_ids: Vec<i64> = road_node_ids.into_iter().collect();
    sorted_ids.sort_unstable();

    let nodes: Vec<RawNode> = sorted_ids
        .iter()
        .filter_map(|id| {
            all_nodes
                .get(id)
                .map(|p| RawNode { id: NodeId(*id), x: p.lon, y: p.lat })
        })
        .collect();
    let positions: HashMap<i64, GeoPoint> = nodes
        .iter()
        .map(|n| (n.id.raw(), GeoPoint::new(n.x, n.y)))
        .collect();

    // Full node map no longer needed.
    drop(all_nodes);

    // ── Phase 3: one raw edge per consecutive way-node pair ───────────────
    let mut edges: Vec<RawEdge> = Vec::with_capacity(nodes.len() * 2);
    for way in &road_ways {
        push_way_edges(way, &positions, &mut edges);
    }

    info!(
        ways = road_ways.len(),
        nodes = nodes.len(),
        edges = edges.len(),
        "raw network loaded from PBF"
    );
    Ok(RawNetwork::new(nodes, edges))
}

// ── Internal types ────────────────────────────────────────────────────────────

pub(crate) struct OsmWay {
    pub(crate) refs:      Vec<i64>,
    pub(crate) direction: WayDirection,
    pub(crate) name:      Option<String>,
}

/// One raw edge per consecutive node pair of `way`, oriented by its
/// direction.  Pairs with an unknown endpoint are skipped.
pub(crate) fn push_way_edges(way: &OsmWay, positions: &HashMap<i64, GeoPoint>, edges: &mut Vec<RawEdge>) {
    for window in way.refs.windows(2) {
        let (a, b) = match way.direction {
            WayDirection::Backward => (window[1], window[0]),
            _ => (window[0], window[1]),
        };
        if let (Some(&pa), Some(&pb)) = (positions.get(&a), positions.get(&b)) {
            edges.push(RawEdge {
                origin:      NodeId(a),
                destination: NodeId(b),
                length_m:    Some(pa.distance_m(pb)),
                oneway:      way.direction.oneway(),
                name:        way.name.clone(),
            });
        }
    }
}

// ── Tag helpers ───────────────────────────────────────────────────────────────

/// Whether a `highway` value is open to cars.
pub fn is_drivable(highway: &str) -> bool {
    !matches!(
        highway,
        "footway" | "path" | "cycleway" | "pedestrian" | "steps" | "track"
            | "bridleway" | "corridor" | "proposed" | "construction"
    )
}

/// Permitted travel along a way, relative to its node order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WayDirection {
    /// No `oneway` tag and no implicit rule.
    Unspecified,
    /// Explicitly two-way, including time-dependent `reversible` ways.
    Both,
    /// One-way along the node order.
    Forward,
    /// One-way against the node order (`oneway=-1`).
    Backward,
}

impl WayDirection {
    /// Tri-state flag for the raw edge, once the endpoints are oriented.
    pub fn oneway(self) -> Option<bool> {
        match self {
            WayDirection::Unspecified => None,
            WayDirection::Both => Some(false),
            WayDirection::Forward | WayDirection::Backward => Some(true),
        }
    }
}

/// Resolve a way's `oneway` tag.
///
/// Motorways and motorway links are implicitly one-way when untagged.
/// `reversible` and `alternating` ways change direction over the day and
/// are kept two-way.  Other values follow [`parse_oneway`](crate::parse_oneway).
pub fn way_direction(highway: &str, oneway: Option<&str>) -> WayDirection {
    match oneway.map(str::trim).filter(|v| !v.is_empty()) {
        Some("-1") => WayDirection::Backward,
        Some("reversible" | "alternating") => WayDirection::Both,
        Some(v) => match crate::csv::parse_oneway(Some(v)) {
            Some(true) => WayDirection::Forward,
            _ => WayDirection::Both,
        },
        None if matches!(highway, "motorway" | "motorway_link") => WayDirection::Forward,
        None => WayDirection::Unspecified,
    }
}
