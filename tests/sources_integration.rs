//! Integration tests for dataset and reference-set loading.

use shot_guard::prelude::*;
use shot_guard::{read_evidence, read_submission};
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;

#[test]
fn submission_rows_preserve_input_order_and_lines() {
    let input = "C1 V1 S1 alice 0.9\n\nC1 V1 S2 bob 0.3\n";
    let submission = read_submission(input.as_bytes()).unwrap();

    // The blank line is skipped but still counted.
    let lines: Vec<usize> = submission.rows().iter().map(|r| r.line).collect();
    assert_eq!(lines, vec![1, 3]);

    let names: Vec<&str> = submission
        .rows()
        .iter()
        .map(|r| r.person_name.as_str())
        .collect();
    assert_eq!(names, vec!["alice", "bob"]);
}

#[test]
fn submission_accepts_all_float_spellings() {
    let input = "C1 V1 S1 alice 1\nC1 V1 S2 alice -0.5\nC1 V1 S3 alice 1e-3\nC1 V1 S4 alice inf\n";
    let submission = read_submission(input.as_bytes()).unwrap();
    assert_eq!(submission.len(), 4);
    assert!(submission.rows()[3].confidence.is_infinite());
}

#[test]
fn submission_with_too_many_columns_fails_at_the_right_line() {
    let input = "C1 V1 S1 alice 0.9\nC1 V1 S2 alice 0.9 oops\n";
    let err = read_submission(input.as_bytes()).unwrap_err();
    match err {
        ValidationError::Parse { kind, line, message } => {
            assert_eq!(kind, FileKind::Submission);
            assert_eq!(line, 2);
            assert!(message.contains("expected 5 columns"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn evidence_rows_keep_raw_modality() {
    let input = "alice C1 V1 written 2.0\nbob C1 V1 whatever 3.0\n";
    let evidence = read_evidence(input.as_bytes()).unwrap();
    assert_eq!(evidence.rows()[1].modality, "whatever");
}

#[test]
fn evidence_with_unparseable_timestamp_fails() {
    let input = "alice C1 V1 written noon\n";
    let err = read_evidence(input.as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::Parse {
            kind: FileKind::Evidence,
            line: 1,
            ..
        }
    ));
}

#[test]
fn reference_shots_load_from_disk_and_collapse_duplicates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shots.txt");
    let mut file = File::create(&path).unwrap();
    writeln!(file, "C1 V1 S1 0.0 4.2").unwrap();
    writeln!(file, "C1 V1 S1 0.0 4.2").unwrap();
    writeln!(file, "C1 V1 S2 4.2 9.0").unwrap();
    drop(file);

    let shots = ReferenceShots::from_path(&path).unwrap();
    assert_eq!(shots.len(), 2);
    assert!(shots.contains(&ShotKey::new("C1", "V1", "S2")));
}

#[test]
fn reference_videos_load_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("videos.txt");
    std::fs::write(&path, "C1 V1\nC1 V2\n").unwrap();

    let videos = ReferenceVideos::from_path(&path).unwrap();
    assert_eq!(videos.len(), 2);
    assert!(videos.contains(&VideoKey::new("C1", "V1")));
    assert!(!videos.contains(&VideoKey::new("C2", "V1")));
}

#[test]
fn missing_reference_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = ReferenceShots::from_path(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, ValidationError::Io(_)));
}

#[test]
fn empty_files_yield_empty_datasets() {
    assert!(read_submission("".as_bytes()).unwrap().is_empty());
    assert!(read_evidence("\n\n".as_bytes()).unwrap().is_empty());
    assert!(ReferenceShots::from_reader("".as_bytes()).unwrap().is_empty());
}
