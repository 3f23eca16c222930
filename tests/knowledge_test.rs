//! Knowledge base loading tests
//!
//! Round-trips the built-in data set through JSON files and checks that
//! malformed or inconsistent files are rejected with the right error.

use std::io::Write;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use spark_engine::error::KnowledgeError;
use spark_engine::knowledge::KnowledgeBase;
use spark_engine::SparkEngine;
use tempfile::NamedTempFile;

fn builtin_json() -> Value {
    serde_json::to_value(KnowledgeBase::builtin()).unwrap()
}

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_builtin_from_file() {
    let file = write_temp(&builtin_json().to_string());

    let kb = KnowledgeBase::from_path(file.path()).unwrap();
    let builtin = KnowledgeBase::builtin();
    assert_eq!(kb.categories(), builtin.categories());
    assert_eq!(kb.pain_points("gardening tools"), builtin.pain_points("gardening tools"));
    assert_eq!(kb.features("kitchen gadgets"), builtin.features("kitchen gadgets"));
}

#[test]
fn test_loaded_knowledge_drives_engine() {
    let mut value = builtin_json();
    value["categories"] = json!(["desk lamps"]);
    let file = write_temp(&value.to_string());

    let kb = KnowledgeBase::from_path(file.path()).unwrap();
    let engine = SparkEngine::new(Arc::new(kb)).with_seed(3);
    for _ in 0..10 {
        assert_eq!(engine.generate(None).category, "desk lamps");
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    match KnowledgeBase::from_path(&path) {
        Err(KnowledgeError::Io { path: reported, .. }) => {
            assert!(reported.ends_with("absent.json"));
        }
        other => panic!("expected Io error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_malformed_json_is_parse_error() {
    let file = write_temp("{\"categories\": [");
    assert!(matches!(
        KnowledgeBase::from_path(file.path()),
        Err(KnowledgeError::Parse(_))
    ));
}

#[test]
fn test_table_without_default_is_rejected() {
    let mut value = builtin_json();
    value["features"]
        .as_object_mut()
        .unwrap()
        .remove("default");

    let err = KnowledgeBase::from_json_str(&value.to_string()).unwrap_err();
    assert!(err.to_string().contains("default"), "{}", err);
}

#[test]
fn test_empty_categories_rejected() {
    let mut value = builtin_json();
    value["categories"] = json!([]);
    assert!(matches!(
        KnowledgeBase::from_json_str(&value.to_string()),
        Err(KnowledgeError::NoCategories)
    ));
}

#[test]
fn test_empty_vibes_rejected() {
    let mut value = builtin_json();
    value["vibes"] = json!([]);
    match KnowledgeBase::from_json_str(&value.to_string()) {
        Err(KnowledgeError::EmptyVocabulary { table, .. }) => assert_eq!(table, "vibes"),
        other => panic!("expected EmptyVocabulary, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_inverted_bracket_rejected() {
    let mut value = builtin_json();
    value["price_brackets"]["water bottles"] = json!({"min": 80, "max": 10});
    assert!(matches!(
        KnowledgeBase::from_json_str(&value.to_string()),
        Err(KnowledgeError::InvalidBracket { min: 80, max: 10, .. })
    ));
}

#[test]
fn test_optional_tables_may_be_omitted() {
    let mut value = builtin_json();
    let object = value.as_object_mut().unwrap();
    object.remove("seeds");
    object.remove("pain_points");

    let kb = KnowledgeBase::from_json_str(&value.to_string()).unwrap();
    assert!(kb.seeds("pet products").is_empty());
    assert!(kb.pain_points("pet products").is_none());

    let engine = SparkEngine::new(Arc::new(kb)).with_seed(4).with_reuse_probability(1.0);
    let result = engine.generate(Some("pet products"));
    assert!(result.is_synthesized);
    assert!(result.concept.image.is_none());
}
