//! File-writing contract of the exporters.

use peer_atlas_topology::{AdjacencyMap, GephiExporter, GraphExporter, PeerAddress};

fn addr(s: &str) -> PeerAddress {
    s.parse().expect("valid test address")
}

fn sample_map() -> AdjacencyMap {
    [
        (addr("a:1"), vec![addr("b:1")]),
        (addr("b:1"), vec![addr("a:1")]),
    ]
    .into_iter()
    .collect()
}

#[test]
fn graph_export_writes_timestamped_dot_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let exporter = GraphExporter::new(dir.path());
    let map = sample_map();

    let path = exporter.export(&map).expect("export succeeds");

    assert_eq!(path.parent(), Some(dir.path()));
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("dot"));
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .expect("utf-8 file name");
    // topology-YYYY-MM-DDThh:mm:ss.dot
    assert!(name.starts_with("topology-"));
    assert_eq!(name.len(), "topology-".len() + 19 + ".dot".len());

    let written = std::fs::read_to_string(&path).expect("read artifact");
    assert_eq!(written, exporter.render(&map));
}

#[test]
fn gephi_export_writes_timestamped_csv_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let exporter = GephiExporter::new(dir.path());
    let map = sample_map();

    let path = exporter.export(&map).expect("export succeeds");

    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("csv"));
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .expect("utf-8 file name");
    assert!(name.starts_with("edges-"));

    let written = std::fs::read_to_string(&path).expect("read artifact");
    assert!(written.starts_with("Source,Target,Weight\n"));
    assert_eq!(written, exporter.render(&map));
}

#[test]
fn empty_map_exports_cleanly() {
    let dir = tempfile::tempdir().expect("temp dir");
    let map = AdjacencyMap::new();

    GraphExporter::new(dir.path())
        .export(&map)
        .expect("empty graph export succeeds");
    GephiExporter::new(dir.path())
        .export(&map)
        .expect("empty edge table export succeeds");
}
