use std::fs;
use std::io::Write;

use symb_regr_gp::dataset::{load, DatasetError};

fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("symb-regr-gp-dataset-test-{}-{}.csv", std::process::id(), name));
    let mut f = fs::File::create(&path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    return path;
}

#[test]
fn test_loads_rows_and_synthesizes_variable_names() {
    let path = write_temp("rows", "1.0,2.0,3.0\n4.0,5.0,9.0\n");
    let dataset = load(path.to_str().unwrap()).expect("dataset should load");

    assert_eq!(dataset.variables(), &["x0".to_string(), "x1".to_string()]);
    assert_eq!(dataset.rows(), 2);
    assert_eq!(dataset.row(0), (&[1.0, 2.0][..], 3.0));
    assert_eq!(dataset.row(1), (&[4.0, 5.0][..], 9.0));
    fs::remove_file(path).ok();
}

#[test]
fn test_rejects_empty_file() {
    let path = write_temp("empty", "");
    let result = load(path.to_str().unwrap());
    assert!(matches!(result, Err(DatasetError::EmptyDataset)));
    fs::remove_file(path).ok();
}

#[test]
fn test_rejects_arity_mismatch() {
    let path = write_temp("mismatch", "1.0,2.0,3.0\n4.0,5.0\n");
    let result = load(path.to_str().unwrap());
    assert!(matches!(result, Err(DatasetError::ArityMismatch { .. })));
    fs::remove_file(path).ok();
}

#[test]
fn test_rejects_non_numeric_field() {
    let path = write_temp("bad-field", "1.0,abc,3.0\n");
    let result = load(path.to_str().unwrap());
    assert!(matches!(result, Err(DatasetError::ParseError { .. })));
    fs::remove_file(path).ok();
}

#[test]
fn test_missing_file_surfaces_io_error() {
    let result = load("/nonexistent/path/does-not-exist.csv");
    assert!(matches!(result, Err(DatasetError::Io(_))));
}
