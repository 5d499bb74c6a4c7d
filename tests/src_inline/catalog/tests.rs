use super::defs::builtin_catalog;
use super::loader::load_catalog_str;
use super::mapping::{LabelMatch, match_label, normalize_label};
use super::*;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_imagecat_catalog_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn animals_and_vehicles() -> CategoryMapping {
    load_catalog_str(r#"{"animal": ["dog", "cat"], "vehicle": ["car", "truck"]}"#).unwrap()
}

#[test]
fn test_load_preserves_definition_order() {
    let mapping =
        load_catalog_str(r#"{"zebra": ["stripe"], "alpha": ["a1"], "Mid": ["m"]}"#).unwrap();
    let names: Vec<&str> = mapping.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["zebra", "alpha", "Mid"]);
}

#[test]
fn test_load_rejects_non_object() {
    let err = load_catalog_str(r#"["dog", "cat"]"#).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidFormat(_)));
}

#[test]
fn test_load_rejects_non_list_value() {
    let err = load_catalog_str(r#"{"animal": "dog"}"#).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidFormat(_)));
}

#[test]
fn test_load_rejects_non_string_label() {
    let err = load_catalog_str(r#"{"animal": ["dog", 3]}"#).unwrap_err();
    match err {
        CatalogError::InvalidFormat(msg) => assert!(msg.contains("animal")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_rejects_empty_name() {
    let err = load_catalog_str(r#"{"  ": ["dog"]}"#).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidFormat(_)));
}

#[test]
fn test_load_reports_bad_json() {
    let err = load_catalog_str("{not json").unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
}

#[test]
fn test_load_from_plain_and_gz_files() {
    let dir = make_temp_dir();
    let body = r#"{"technology": ["Computer", "phone"], "outdoor": ["tree"]}"#;

    let plain = dir.join("categories.json");
    fs::write(&plain, body).unwrap();
    let a = load_catalog(&plain).unwrap();

    let gz = dir.join("categories.json.gz");
    let mut enc = GzEncoder::new(File::create(&gz).unwrap(), Compression::default());
    enc.write_all(body.as_bytes()).unwrap();
    enc.finish().unwrap();
    let b = load_catalog(&gz).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.categories[0].labels, vec!["Computer", "phone"]);
    assert_eq!(a.categories[0].labels_norm, vec!["computer", "phone"]);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = make_temp_dir();
    let err = load_catalog(&dir.join("nope.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn test_flatten_deduplicates() {
    let mapping = load_catalog_str(
        r#"{"pets": ["dog", "cat"], "animal": ["dog", "horse"], "empty": []}"#,
    )
    .unwrap();
    let set = flatten(&mapping);
    assert_eq!(set.labels.len(), 3);
    assert!(set.labels.contains("dog"));
    assert!(set.labels.contains("horse"));
}

#[test]
fn test_normalize_label() {
    assert_eq!(normalize_label("  Golden Retriever \n"), "golden retriever");
}

#[test]
fn test_exact_match_beats_partial() {
    let mapping = load_catalog_str(r#"{"first": ["doghouse"], "second": ["dog"]}"#).unwrap();
    assert_eq!(match_label("dog", &mapping, 3), Some(LabelMatch::Exact(1)));
}

#[test]
fn test_first_category_wins_on_overlap() {
    let mapping = load_catalog_str(r#"{"pets": ["dog"], "animal": ["dog"]}"#).unwrap();
    assert_eq!(match_label("dog", &mapping, 3), Some(LabelMatch::Exact(0)));
}

#[test]
fn test_partial_match_both_directions() {
    let mapping = animals_and_vehicles();
    assert_eq!(
        match_label("doghouse", &mapping, 3),
        Some(LabelMatch::Partial(0))
    );
    assert_eq!(match_label("tru", &mapping, 3), Some(LabelMatch::Partial(1)));
}

#[test]
fn test_short_category_labels_skip_partial() {
    let mapping = load_catalog_str(r#"{"farm": ["ox"]}"#).unwrap();
    assert_eq!(match_label("fox", &mapping, 3), None);
    assert_eq!(match_label("ox", &mapping, 3), Some(LabelMatch::Exact(0)));
}

#[test]
fn test_empty_label_never_matches() {
    let mapping = animals_and_vehicles();
    assert_eq!(match_label("", &mapping, 3), None);
}

#[test]
fn test_builtin_catalog_is_valid() {
    let mapping = builtin_catalog();
    assert!(!mapping.categories.is_empty());
    assert_eq!(mapping.categories[0].name, "technology");
    for category in &mapping.categories {
        assert!(!category.name.is_empty());
        assert!(!category.labels.is_empty());
    }
}
