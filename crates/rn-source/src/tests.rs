//! Unit tests for rn-source.

#[cfg(test)]
mod oneway {
    use crate::parse_oneway;

    #[test]
    fn absent_stays_absent() {
        assert_eq!(parse_oneway(None), None);
        assert_eq!(parse_oneway(Some("")), None);
        assert_eq!(parse_oneway(Some("  ")), None);
    }

    #[test]
    fn falsy_spellings() {
        for v in ["false", "False", "FALSE", "0", "no"] {
            assert_eq!(parse_oneway(Some(v)), Some(false), "{v}");
        }
    }

    #[test]
    fn everything_else_is_oneway() {
        for v in ["true", "True", "yes", "1"] {
            assert_eq!(parse_oneway(Some(v)), Some(true), "{v}");
        }
    }
}

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use rn_core::NodeId;

    use crate::{SourceError, load_network_csv, load_network_readers};

    const NODES: &str = "id,x,y\n1,-77.0,-12.0\n2,-77.1,-12.0\n3,-77.2,-12.1\n";

    #[test]
    fn reads_nodes_and_edges() {
        let edges = "origin,destination,length,oneway,name\n\
                     1,2,1000,false,Av. Uno\n\
                     2,3,2000,True,\n";
        let raw = load_network_readers(Cursor::new(NODES), Cursor::new(edges)).unwrap();
        assert_eq!(raw.nodes.len(), 3);
        assert_eq!(raw.nodes[2].id, NodeId(3));
        assert_eq!(raw.nodes[2].x, -77.2);
        assert_eq!(raw.nodes[2].y, -12.1);

        assert_eq!(raw.edges.len(), 2);
        assert_eq!(raw.edges[0].length_m, Some(1000.0));
        assert_eq!(raw.edges[0].oneway, Some(false));
        assert_eq!(raw.edges[0].name.as_deref(), Some("Av. Uno"));
        assert_eq!(raw.edges[1].oneway, Some(true));
        assert_eq!(raw.edges[1].name, None);
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let edges = "origin,destination,length,oneway,name\n1,2,,,\n";
        let raw = load_network_readers(Cursor::new(NODES), Cursor::new(edges)).unwrap();
        let e = &raw.edges[0];
        assert_eq!(e.length_m, None);
        assert_eq!(e.oneway, None);
        assert_eq!(e.name, None);
        assert!(e.is_two_way());
    }

    #[test]
    fn missing_destination_is_fatal() {
        let edges = "origin,destination,length,oneway,name\n1,2,5,,\n1,,5,,\n";
        let err = load_network_readers(Cursor::new(NODES), Cursor::new(edges)).unwrap_err();
        assert!(matches!(err, SourceError::Parse { file: "edges", row: 2, .. }), "{err}");
    }

    #[test]
    fn bad_node_row_is_fatal() {
        let nodes = "id,x,y\n1,-77.0,-12.0\nabc,1,2\n";
        let edges = "origin,destination,length,oneway,name\n";
        let err = load_network_readers(Cursor::new(nodes), Cursor::new(edges)).unwrap_err();
        assert!(matches!(err, SourceError::Parse { file: "nodes", row: 2, .. }));
    }

    #[test]
    fn loads_from_files() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let np = dir.path().join("nodes.csv");
        let ep = dir.path().join("edges.csv");
        std::fs::File::create(&np).unwrap().write_all(NODES.as_bytes()).unwrap();
        std::fs::File::create(&ep)
            .unwrap()
            .write_all(b"origin,destination,length,oneway,name\n1,3,12.5,yes,\"Jr. Dos, Sur\"\n")
            .unwrap();

        let raw = load_network_csv(&np, &ep).unwrap();
        assert_eq!(raw.nodes.len(), 3);
        assert_eq!(raw.edges[0].name.as_deref(), Some("Jr. Dos, Sur"));
        assert_eq!(raw.edges[0].oneway, Some(true));
    }

    #[test]
    fn missing_file_is_open_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load_network_csv(&dir.path().join("nope.csv"), &dir.path().join("nope2.csv"))
            .unwrap_err();
        assert!(matches!(err, SourceError::Open { .. }));
    }
}

#[cfg(all(test, feature = "osm"))]
mod osm_tags {
    use std::collections::HashMap;

    use rn_core::{GeoPoint, NodeId, TravelSpeed};
    use rn_graph::{RawNetwork, RawNode, RoadGraph};

    use crate::osm::{OsmWay, WayDirection, is_drivable, push_way_edges, way_direction};

    #[test]
    fn drivable_classes() {
        assert!(is_drivable("residential"));
        assert!(is_drivable("primary"));
        assert!(!is_drivable("footway"));
        assert!(!is_drivable("steps"));
    }

    #[test]
    fn motorway_implicitly_oneway() {
        assert_eq!(way_direction("motorway", None), WayDirection::Forward);
        assert_eq!(way_direction("motorway", Some("no")), WayDirection::Both);
        assert_eq!(way_direction("residential", None), WayDirection::Unspecified);
        assert_eq!(way_direction("residential", Some("yes")), WayDirection::Forward);
    }

    #[test]
    fn minus_one_runs_against_node_order() {
        let d = way_direction("residential", Some("-1"));
        assert_eq!(d, WayDirection::Backward);
        assert_eq!(d.oneway(), Some(true));
        assert_eq!(way_direction("motorway_link", Some("-1")), WayDirection::Backward);
    }

    #[test]
    fn reversible_is_two_way() {
        for v in ["reversible", "alternating"] {
            let d = way_direction("primary", Some(v));
            assert_eq!(d, WayDirection::Both, "{v}");
            assert_eq!(d.oneway(), Some(false), "{v}");
        }
    }

    fn way(refs: &[i64], direction: WayDirection) -> OsmWay {
        OsmWay { refs: refs.to_vec(), direction, name: Some("Jr. Ica".into()) }
    }

    fn positions() -> HashMap<i64, GeoPoint> {
        (1..=3)
            .map(|i| (i, GeoPoint::new(-77.0 + i as f64 * 0.001, -12.0)))
            .collect()
    }

    #[test]
    fn backward_way_emits_reversed_arcs() {
        let mut edges = Vec::new();
        push_way_edges(&way(&[1, 2, 3], WayDirection::Backward), &positions(), &mut edges);
        let pairs: Vec<(i64, i64)> = edges
            .iter()
            .map(|e| (e.origin.raw(), e.destination.raw()))
            .collect();
        assert_eq!(pairs, vec![(2, 1), (3, 2)]);
        assert!(edges.iter().all(|e| e.oneway == Some(true)));

        let g = RoadGraph::from_raw(
            &RawNetwork::new(
                (1..=3).map(|i| RawNode { id: NodeId(i), x: 0.0, y: 0.0 }).collect(),
                edges,
            ),
            TravelSpeed::default(),
        )
        .unwrap();
        assert!(g.neighbors(NodeId(1)).is_empty());
        assert_eq!(g.neighbors(NodeId(2))[0].neighbor, NodeId(1));
    }

    #[test]
    fn forward_way_keeps_node_order() {
        let mut edges = Vec::new();
        push_way_edges(&way(&[1, 2, 3], WayDirection::Forward), &positions(), &mut edges);
        assert_eq!(edges[0].origin, NodeId(1));
        assert_eq!(edges[0].destination, NodeId(2));
        assert!(edges[0].length_m.unwrap() > 0.0);
    }

    #[test]
    fn unknown_endpoint_is_skipped() {
        let mut edges = Vec::new();
        push_way_edges(&way(&[1, 9, 2], WayDirection::Both), &positions(), &mut edges);
        assert!(edges.is_empty());
    }

    #[test]
    fn unspecified_stays_absent() {
        assert_eq!(WayDirection::Unspecified.oneway(), None);
    }
}
