use af_catalog::{Catalog, PropertyValue};
use af_core::Position;
use af_document::*;
use af_graph::DesignGraph;

fn sample_graph(catalog: &Catalog) -> DesignGraph {
    let mut graph = DesignGraph::new();
    let lb = graph
        .add_component(catalog, "load_balancer", Position::new(0.0, 100.0).unwrap())
        .unwrap();
    let web = graph
        .add_component(catalog, "web_server", Position::new(200.0, 100.0).unwrap())
        .unwrap();
    let cache = graph
        .add_component(catalog, "cache", Position::new(400.0, 40.0).unwrap())
        .unwrap();
    let db = graph
        .add_component(catalog, "database", Position::new(400.0, 160.0).unwrap())
        .unwrap();
    graph.add_connection(&lb, &web).unwrap();
    graph.add_connection(&web, &cache).unwrap();
    graph.add_connection(&web, &db).unwrap();
    graph
        .set_property(&db, "sharding", PropertyValue::Bool(true))
        .unwrap();
    graph
}

fn assert_same_graph(a: &DesignGraph, b: &DesignGraph) {
    assert_eq!(a.components(), b.components());
    assert_eq!(a.connections(), b.connections());
    for comp in a.components() {
        assert_eq!(
            a.incoming_edges(&comp.id).unwrap(),
            b.incoming_edges(&comp.id).unwrap()
        );
        assert_eq!(
            a.outgoing_edges(&comp.id).unwrap(),
            b.outgoing_edges(&comp.id).unwrap()
        );
    }
}

#[test]
fn export_import_reproduces_graph() {
    let catalog = Catalog::builtin();
    let graph = sample_graph(&catalog);

    let doc = export_design(&graph, &catalog).unwrap();
    let restored = import_design(&doc, &catalog).unwrap();

    assert_same_graph(&graph, &restored);
    assert!(restored.check_integrity().is_ok());
}

#[test]
fn json_text_roundtrip() {
    let catalog = Catalog::builtin();
    let graph = sample_graph(&catalog);
    let doc = export_design(&graph, &catalog).unwrap();

    let text = to_json_string(&doc).unwrap();
    let parsed = from_json_str(&text).unwrap();
    assert_eq!(parsed, doc);

    let restored = import_design(&parsed, &catalog).unwrap();
    assert_same_graph(&graph, &restored);
}

#[test]
fn yaml_file_roundtrip() {
    let catalog = Catalog::builtin();
    let graph = sample_graph(&catalog);
    let doc = export_design(&graph, &catalog).unwrap();

    let path = std::env::temp_dir().join("af_document_roundtrip.yaml");
    save_yaml(&path, &doc).unwrap();
    let loaded = load_yaml(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let restored = import_design(&loaded, &catalog).unwrap();
    assert_same_graph(&graph, &restored);
}

#[test]
fn json_file_roundtrip() {
    let catalog = Catalog::builtin();
    let graph = sample_graph(&catalog);
    let doc = export_design(&graph, &catalog).unwrap();

    let path = std::env::temp_dir().join("af_document_roundtrip.json");
    save_json(&path, &doc).unwrap();
    let loaded = load_json(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, doc);
}

#[test]
fn wire_field_names() {
    let catalog = Catalog::builtin();
    let graph = sample_graph(&catalog);
    let doc = export_design(&graph, &catalog).unwrap();
    let json: serde_json::Value = serde_json::from_str(&to_json_string(&doc).unwrap()).unwrap();

    let first = &json["components"][0];
    assert_eq!(first["id"], "load_balancer_1");
    assert_eq!(first["type"], "load_balancer");
    assert_eq!(first["position"]["x"], 0.0);
    assert_eq!(first["position"]["y"], 100.0);
    assert_eq!(first["properties"]["algorithm"], "Round Robin");

    let conn = &json["connections"][0];
    assert_eq!(conn["id"], "conn_1");
    assert_eq!(conn["source"], "load_balancer_1");
    assert_eq!(conn["target"], "web_server_2");

    let validation = &json["validation"];
    assert_eq!(validation["isValid"], true);
    assert_eq!(validation["metrics"]["monthlyCost"], 425.0);
    assert!(validation["score"].is_u64());
}

#[test]
fn legacy_export_imports() {
    // Shape written by the previous canvas: millisecond ids and a free-form
    // validation block with string metrics.
    let legacy = r#"{
      "components": [
        {"id": "web_server_1700000000000", "type": "web_server",
         "position": {"x": 120, "y": 80},
         "properties": {"server_type": "NGINX", "caching": true, "compression": true}},
        {"id": "database_1700000000500", "type": "database",
         "position": {"x": 320, "y": 80},
         "properties": {"type": "PostgreSQL", "replication": "Master-Slave", "sharding": false}}
      ],
      "connections": [
        {"id": "connection_1700000001000",
         "source": "web_server_1700000000000", "target": "database_1700000000500"}
      ],
      "validation": {"isValid": true, "issues": [], "warnings": [],
        "suggestions": ["Consider adding a caching layer to reduce database load"],
        "metrics": {"estimatedMonthlyCost": 300, "estimatedLatency": "0ms",
                    "throughputBottleneck": "N/A", "scalabilityScore": 100,
                    "reliabilityScore": 60},
        "score": 95}
    }"#;

    let catalog = Catalog::builtin();
    let doc = from_json_str(legacy).unwrap();
    assert!(doc.validation_report().is_none());

    let graph = import_design(&doc, &catalog).unwrap();
    assert_eq!(graph.component_count(), 2);
    assert_eq!(graph.connection_count(), 1);
    let web = graph
        .component(&"web_server_1700000000000".into())
        .unwrap();
    assert_eq!(web.position, Position::new(120.0, 80.0).unwrap());
}

#[test]
fn import_rejects_dangling_connection() {
    let catalog = Catalog::builtin();
    let doc = from_json_str(
        r#"{"components": [{"id": "a", "type": "cache", "position": {"x": 0, "y": 0}}],
            "connections": [{"id": "c", "source": "a", "target": "missing"}]}"#,
    )
    .unwrap();
    let err = import_design(&doc, &catalog).unwrap_err();
    assert!(matches!(
        err,
        DocumentError::Malformed(MalformedDocument::MissingReference { .. })
    ));
    assert!(err.to_string().contains("missing"));
}

#[test]
fn import_then_generate_avoids_collisions() {
    let catalog = Catalog::builtin();
    let graph = sample_graph(&catalog);
    let doc = export_design(&graph, &catalog).unwrap();
    let mut restored = import_design(&doc, &catalog).unwrap();

    let fresh = restored
        .add_component(&catalog, "cdn", Position::default())
        .unwrap();
    assert!(graph.component(&fresh).is_none());
    let conn = restored
        .add_connection(&fresh, &"load_balancer_1".into())
        .unwrap();
    assert!(doc.connections.iter().all(|c| c.id != conn.as_str()));
}
