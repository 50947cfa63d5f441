//! Integration tests for the document split job.

use std::fs;
use std::path::Path;

use docprep::{Error, SectionMap, SplitParams, split_document};
use tempfile::tempdir;

const CANONICAL: [(&str, &str); 8] = [
    ("# Introduction", "introduction.md"),
    ("# Governing Equations", "governing_equations.md"),
    ("# Discretization", "discretization.md"),
    ("# Grid Types", "grid_types.md"),
    ("# Algorithm", "algorithm.md"),
    ("# Poisson solver", "poisson_solver.md"),
    ("# Results", "results.md"),
    ("# Conclusion", "conclusion.md"),
];

fn split(dir: &Path, source: &str) -> docprep::Result<docprep::SplitReport> {
    let input = dir.join("INSolver.md");
    fs::write(&input, source).unwrap();
    split_document(&SplitParams {
        input,
        output_dir: dir.join("sections"),
        sections: SectionMap::insolver(),
    })
}

fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_two_sections_scenario() {
    let dir = tempdir().unwrap();
    let report = split(dir.path(), "# Introduction\nText A\n# Results\nText B\n").unwrap();

    let out = dir.path().join("sections");
    assert_eq!(listing(&out), vec!["introduction.md", "results.md"]);
    assert_eq!(
        fs::read_to_string(out.join("introduction.md")).unwrap(),
        "# Introduction\nText A\n"
    );
    assert_eq!(
        fs::read_to_string(out.join("results.md")).unwrap(),
        "# Results\nText B\n"
    );
    assert_eq!(report.written.len(), 2);
    assert_eq!(report.missing.len(), 6);
}

#[test]
fn test_all_canonical_headings_in_any_order() {
    let dir = tempdir().unwrap();
    let mut source = String::new();
    for (heading, _) in CANONICAL.iter().rev() {
        source.push_str(heading);
        source.push('\n');
        source.push_str("content for ");
        source.push_str(heading);
        source.push('\n');
    }
    let report = split(dir.path(), &source).unwrap();

    let out = dir.path().join("sections");
    let mut expected: Vec<String> = CANONICAL.iter().map(|(_, f)| f.to_string()).collect();
    expected.sort();
    assert_eq!(listing(&out), expected);
    for (heading, file) in CANONICAL {
        let body = fs::read_to_string(out.join(file)).unwrap();
        assert!(body.starts_with(&format!("{heading}\n")));
        assert_eq!(body.lines().count(), 2);
    }
    assert!(report.missing.is_empty());
    assert!(report.overwritten.is_empty());
}

#[test]
fn test_preamble_is_never_written() {
    let dir = tempdir().unwrap();
    let report = split(
        dir.path(),
        "Front matter\nsecret preamble\n# Algorithm\nstep\n",
    )
    .unwrap();

    let out = dir.path().join("sections");
    assert_eq!(listing(&out), vec!["algorithm.md"]);
    let body = fs::read_to_string(out.join("algorithm.md")).unwrap();
    assert_eq!(body, "# Algorithm\nstep\n");
    assert!(!body.contains("preamble"));
    assert_eq!(report.discarded_lines, 2);
}

#[test]
fn test_repeated_heading_keeps_last_occurrence() {
    let dir = tempdir().unwrap();
    let report = split(
        dir.path(),
        "# Results\nfirst run\n# Conclusion\nbye\n# Results\nsecond run\n",
    )
    .unwrap();

    let out = dir.path().join("sections");
    assert_eq!(
        fs::read_to_string(out.join("results.md")).unwrap(),
        "# Results\nsecond run\n"
    );
    assert_eq!(report.overwritten, vec!["# Results".to_string()]);
    assert_eq!(report.files().len(), 2);
}

#[test]
fn test_empty_source_writes_nothing() {
    let dir = tempdir().unwrap();
    let report = split(dir.path(), "").unwrap();

    let out = dir.path().join("sections");
    assert!(out.is_dir());
    assert!(listing(&out).is_empty());
    assert!(report.written.is_empty());
    assert_eq!(report.missing.len(), 8);
}

#[test]
fn test_existing_output_dir_and_files_are_reused() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("sections");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("introduction.md"), "stale content that is much longer\n").unwrap();

    split(dir.path(), "# Introduction\nfresh\n").unwrap();
    assert_eq!(
        fs::read_to_string(out.join("introduction.md")).unwrap(),
        "# Introduction\nfresh\n"
    );
}

#[test]
fn test_line_terminators_are_preserved() {
    let dir = tempdir().unwrap();
    split(dir.path(), "# Grid Types\r\nstaggered\r\ncollocated").unwrap();
    assert_eq!(
        fs::read_to_string(dir.path().join("sections").join("grid_types.md")).unwrap(),
        "# Grid Types\r\nstaggered\r\ncollocated"
    );
}

#[test]
fn test_custom_map_and_paths() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("notes.txt");
    fs::write(&input, "== Alpha ==\na\n== Beta ==\nb\n").unwrap();

    let report = split_document(&SplitParams {
        input,
        output_dir: dir.path().join("nested").join("out"),
        sections: SectionMap::new([("== Alpha ==", "alpha.txt"), ("== Beta ==", "beta.txt")]),
    })
    .unwrap();

    assert_eq!(report.written.len(), 2);
    assert_eq!(
        fs::read_to_string(dir.path().join("nested/out/beta.txt")).unwrap(),
        "== Beta ==\nb\n"
    );
}

#[test]
fn test_missing_source_is_not_found() {
    let dir = tempdir().unwrap();
    let result = split_document(&SplitParams {
        input: dir.path().join("absent.md"),
        output_dir: dir.path().join("sections"),
        sections: SectionMap::insolver(),
    });
    assert!(matches!(result, Err(Error::NotFound { .. })));
}

#[test]
fn test_uncreatable_output_dir_is_write_error() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "a file, not a directory").unwrap();
    let input = dir.path().join("doc.md");
    fs::write(&input, "# Results\nx\n").unwrap();

    let result = split_document(&SplitParams {
        input,
        output_dir: blocker.join("sections"),
        sections: SectionMap::insolver(),
    });
    assert!(matches!(result, Err(Error::Write { .. })));
}
