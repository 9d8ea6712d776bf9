use std::io::Write;

use al_explorer::package::{PackageError, ParseOptions, parse_package, parse_package_with};
use al_explorer::read_package_file;

use crate::helpers::manifest_fixtures::{sales_manifest, sectioned_manifest};

#[test]
fn test_plain_json_manifest() {
    let text = sales_manifest().to_string();
    let package = parse_package(&text).unwrap();
    assert_eq!(package.objects.len(), 6);
    assert!(package.archive.is_none());
    assert_eq!(package.info.publisher.as_deref(), Some("Contoso"));
    // Extension merged into its base table
    assert_eq!(package.objects[0].fields.len(), 5);
}

#[test]
fn test_bom_prefixed_json_parses_identically() {
    let text = sales_manifest().to_string();
    let with_bom = format!("\u{feff}{text}\r\n");
    let plain = parse_package(&text).unwrap();
    let bom = parse_package(with_bom.as_bytes()).unwrap();
    assert_eq!(plain.raw, bom.raw);
    assert_eq!(plain.objects, bom.objects);
}

#[test]
fn test_invalid_json_is_an_error() {
    let err = parse_package("{\"Symbols\": [").unwrap_err();
    assert!(matches!(err, PackageError::InvalidJson(_)));
    assert!(err.is_unreadable_package());
}

#[test]
fn test_empty_manifest_is_valid_and_empty() {
    let package = parse_package("{}").unwrap();
    assert!(package.objects.is_empty());
    assert!(package.info.is_empty());
}

#[test]
fn test_merge_can_be_disabled() {
    let text = sales_manifest().to_string();
    let options = ParseOptions::default().with_merge_extensions(false);
    let package = parse_package_with(&text, &options).unwrap();
    assert_eq!(package.objects[0].fields.len(), 3);
}

#[test]
fn test_depth_cap_limits_namespace_walk() {
    let text = sectioned_manifest().to_string();
    let shallow = parse_package_with(&text, &ParseOptions::default().with_max_depth(0)).unwrap();
    let deep = parse_package(&text).unwrap();
    assert_eq!(shallow.objects.len(), 2);
    assert_eq!(deep.objects.len(), 4);
}

#[test]
fn test_read_package_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(sales_manifest().to_string().as_bytes()).unwrap();
    let package = read_package_file(file.path()).unwrap();
    assert_eq!(package.objects.len(), 6);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_package_file(dir.path().join("missing.app")).unwrap_err();
    assert!(matches!(err, PackageError::Io(_)));
}
