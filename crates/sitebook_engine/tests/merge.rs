use std::fs;

use pretty_assertions::assert_eq;
use sitebook_engine::{merge, FRAGMENT_SEPARATOR};
use tempfile::TempDir;

#[test]
fn fragments_are_written_in_order_with_separators() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("manual.md");

    merge(&["A".to_string(), "B".to_string()], &out).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(written, "A\n\n---\n\nB\n\n---\n\n");
}

#[test]
fn zero_fragments_produce_an_empty_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("empty.md");

    merge(&[], &out).unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), "");
}

#[test]
fn existing_output_is_overwritten() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("manual.md");
    fs::write(&out, "stale content from an earlier run").unwrap();

    merge(&["fresh".to_string()], &out).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(written, format!("fresh{FRAGMENT_SEPARATOR}"));
}

#[test]
fn unwritable_destination_surfaces_an_error() {
    let err = merge(
        &["A".to_string()],
        std::path::Path::new("/no/such/dir/manual.md"),
    )
    .unwrap_err();
    assert!(err.to_string().contains("io error"));
}
