use std::sync::Arc;

use af_app::*;
use af_catalog::{Catalog, PropertyValue};
use af_core::ComponentId;

fn new_session() -> DesignSession {
    DesignSession::new(Arc::new(Catalog::builtin()), SessionOptions::default()).unwrap()
}

fn add(session: &mut DesignSession, ty: &str, x: f64, y: f64) -> ComponentId {
    match session.add_component(ty, x, y).unwrap().created {
        Created::Component(id) => id,
        other => panic!("expected a component, got {other:?}"),
    }
}

#[test]
fn edit_save_load_roundtrip() {
    let mut session = new_session();
    let lb = add(&mut session, "load_balancer", 0.0, 0.0);
    let web = add(&mut session, "web_server", 200.0, 0.0);
    let db = add(&mut session, "database", 400.0, 0.0);
    session.add_connection(&lb, &web).unwrap();
    let out = session.add_connection(&web, &db).unwrap();
    assert!(matches!(out.created, Created::Connection(_)));
    session
        .set_property(&db, "sharding", PropertyValue::Bool(true))
        .unwrap();

    let report = out.report.unwrap();
    assert!(report.is_valid);

    for name in ["af_app_session.json", "af_app_session.yaml"] {
        let path = std::env::temp_dir().join(name);
        save_design(&path, &session.export().unwrap()).unwrap();
        let doc = load_design(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let mut reloaded = new_session();
        reloaded.import(&doc).unwrap();
        assert_eq!(reloaded.graph().components(), session.graph().components());
        assert_eq!(reloaded.graph().connections(), session.graph().connections());
        assert_eq!(reloaded.validate(), session.validate());
    }
}

#[test]
fn move_snaps_and_remove_cascades() {
    let mut session = new_session();
    let a = add(&mut session, "web_server", 0.0, 0.0);
    let b = add(&mut session, "cache", 0.0, 0.0);
    session.add_connection(&a, &b).unwrap();

    session.move_component(&a, 109.0, 11.0).unwrap();
    let pos = session.graph().component(&a).unwrap().position;
    assert_eq!((pos.x, pos.y), (100.0, 20.0));

    let out = session.remove_component(&b).unwrap();
    assert_eq!(session.graph().connection_count(), 0);
    // The web server is now isolated.
    assert_eq!(out.report.unwrap().warnings.len(), 1);
}

#[test]
fn exported_document_carries_report() {
    let mut session = new_session();
    add(&mut session, "database", 0.0, 0.0);
    let doc = session.export().unwrap();
    let embedded = doc.validation_report().unwrap();
    assert_eq!(embedded, session.validate());

    let json: serde_json::Value = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["validation"]["score"], 85);
}

#[test]
fn invalid_options_rejected() {
    let options = SessionOptions {
        grid_size: f64::NAN,
        ..SessionOptions::default()
    };
    let err = DesignSession::new(Arc::new(Catalog::builtin()), options).unwrap_err();
    assert!(matches!(err, AppError::Options(_)));
}

#[test]
fn non_finite_coordinates_rejected() {
    let mut session = new_session();
    let err = session.add_component("cache", f64::INFINITY, 0.0).unwrap_err();
    assert!(matches!(err, AppError::Graph(_)));
    assert!(session.graph().is_empty());
}

#[test]
fn non_finite_property_keeps_export_loadable() {
    let mut session = new_session();
    let cache = add(&mut session, "cache", 0.0, 0.0);

    let err = session
        .set_property(&cache, "ratio", PropertyValue::Number(f64::NAN))
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Graph(af_graph::GraphError::InvalidProperty { .. })
    ));

    session
        .set_property(&cache, "ratio", PropertyValue::Number(0.75))
        .unwrap();
    let text = af_document::to_json_string(&session.export().unwrap()).unwrap();
    let doc = af_document::from_json_str(&text).unwrap();

    let mut reloaded = new_session();
    reloaded.import(&doc).unwrap();
    assert_eq!(reloaded.graph().components(), session.graph().components());
}
