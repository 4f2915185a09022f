//! Integration tests for the input-to-sort pipeline

use std::fs;
use std::path::Path;

use riffle::{merge_sort, read_integers};

/// Helper to run the full pipeline on an input file
fn sort_file(path: &Path) -> Result<Vec<i64>, String> {
    let seq = read_integers(path).map_err(|e| e.to_string())?;
    Ok(merge_sort(seq))
}

/// Test that all valid fixtures load and sort into non-decreasing order
#[test]
fn test_valid_fixtures() {
    let fixtures_dir = Path::new("tests/fixtures/valid");
    if !fixtures_dir.exists() {
        return; // Skip if fixtures not present
    }

    for entry in fs::read_dir(fixtures_dir).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();
        if path.extension().map(|e| e == "txt").unwrap_or(false) {
            let result = sort_file(&path);
            let sorted = result.unwrap_or_else(|e| {
                panic!("Expected {} to sort successfully, got: {}", path.display(), e)
            });
            assert!(
                sorted.windows(2).all(|w| w[0] <= w[1]),
                "Expected {} to produce a sorted sequence, got {:?}",
                path.display(),
                sorted
            );
        }
    }
}

/// Test that invalid fixtures fail the parse step
#[test]
fn test_invalid_fixtures() {
    let fixtures_dir = Path::new("tests/fixtures/invalid");
    if !fixtures_dir.exists() {
        return; // Skip if fixtures not present
    }

    for entry in fs::read_dir(fixtures_dir).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();
        if path.extension().map(|e| e == "txt").unwrap_or(false) {
            let result = sort_file(&path);
            assert!(
                result.is_err(),
                "Expected {} to fail parsing, but it succeeded",
                path.display()
            );
        }
    }
}

/// The known small fixture sorts to the expected sequence
#[test]
fn test_small_fixture_exact_output() {
    let sorted = sort_file(Path::new("tests/fixtures/valid/small.txt")).unwrap();
    assert_eq!(sorted, vec![1, 2, 3, 5, 8, 9]);
}

/// An empty file is a valid, empty sequence
#[test]
fn test_empty_fixture() {
    let sorted = sort_file(Path::new("tests/fixtures/valid/empty.txt")).unwrap();
    assert_eq!(sorted, Vec::<i64>::new());
}

/// Malformed input reports the offending line
#[test]
fn test_malformed_fixture_names_line() {
    let err = sort_file(Path::new("tests/fixtures/invalid/word.txt")).unwrap_err();
    assert!(err.contains("line 2"), "unexpected error message: {err}");
}
