//! Core data model: shot and video keys, dataset rows, and datasets.
//!
//! All identifiers are opaque strings. Keys derive structural equality and
//! hashing so set-based membership checks work directly on them. Rows carry
//! the 1-indexed physical line they were read from, so checks tied to file
//! order can report exact positions.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Identifies a shot: a bounded time segment of a video.
///
/// Shots are unique within a corpus, so the triple as a whole is the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShotKey {
    pub corpus_id: String,
    pub video_id: String,
    pub shot_id: String,
}

impl ShotKey {
    /// Creates a new shot key.
    pub fn new(
        corpus_id: impl Into<String>,
        video_id: impl Into<String>,
        shot_id: impl Into<String>,
    ) -> Self {
        Self {
            corpus_id: corpus_id.into(),
            video_id: video_id.into(),
            shot_id: shot_id.into(),
        }
    }
}

impl std::fmt::Display for ShotKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.corpus_id, self.video_id, self.shot_id)
    }
}

/// Identifies a video within a corpus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoKey {
    pub corpus_id: String,
    pub video_id: String,
}

impl VideoKey {
    /// Creates a new video key.
    pub fn new(corpus_id: impl Into<String>, video_id: impl Into<String>) -> Self {
        Self {
            corpus_id: corpus_id.into(),
            video_id: video_id.into(),
        }
    }
}

impl std::fmt::Display for VideoKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.corpus_id, self.video_id)
    }
}

/// One predicted identity for one shot, with a confidence score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRow {
    /// 1-indexed physical line this row was read from.
    pub line: usize,
    pub corpus_id: String,
    pub video_id: String,
    pub shot_id: String,
    pub person_name: String,
    pub confidence: f32,
}

impl SubmissionRow {
    /// Returns the shot referenced by this row.
    pub fn shot_key(&self) -> ShotKey {
        ShotKey::new(&self.corpus_id, &self.video_id, &self.shot_id)
    }
}

/// One supporting cue tying a person name to a video and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceRow {
    /// 1-indexed physical line this row was read from.
    pub line: usize,
    pub person_name: String,
    pub corpus_id: String,
    pub video_id: String,
    /// Kept as a raw string at parse time: an invalid literal must surface
    /// from the modality check, which runs after the timestamp check.
    pub modality: String,
    pub timestamp: f32,
}

impl EvidenceRow {
    /// Returns the video referenced by this row.
    pub fn video_key(&self) -> VideoKey {
        VideoKey::new(&self.corpus_id, &self.video_id)
    }
}

/// An ordered submission dataset, preserving input line order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    rows: Vec<SubmissionRow>,
}

impl Submission {
    /// Creates a submission from already-parsed rows.
    pub fn new(rows: Vec<SubmissionRow>) -> Self {
        Self { rows }
    }

    /// Returns the rows in input order.
    pub fn rows(&self) -> &[SubmissionRow] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the submission has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the set of distinct person names in this submission.
    pub fn person_names(&self) -> HashSet<&str> {
        self.rows.iter().map(|r| r.person_name.as_str()).collect()
    }

    /// Returns the set of distinct shots referenced by this submission.
    pub fn shot_keys(&self) -> HashSet<ShotKey> {
        self.rows.iter().map(SubmissionRow::shot_key).collect()
    }
}

/// An ordered evidence dataset, preserving input line order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    rows: Vec<EvidenceRow>,
}

impl Evidence {
    /// Creates an evidence dataset from already-parsed rows.
    pub fn new(rows: Vec<EvidenceRow>) -> Self {
        Self { rows }
    }

    /// Returns the rows in input order.
    pub fn rows(&self) -> &[EvidenceRow] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the evidence has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the set of distinct person names in this evidence.
    ///
    /// Duplicates collapse here; the uniqueness rule is enforced by the
    /// person-name agreement check, which scans rows directly.
    pub fn person_names(&self) -> HashSet<&str> {
        self.rows.iter().map(|r| r.person_name.as_str()).collect()
    }

    /// Returns the set of distinct videos referenced by this evidence.
    pub fn video_keys(&self) -> HashSet<VideoKey> {
        self.rows.iter().map(EvidenceRow::video_key).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission_row(line: usize, name: &str) -> SubmissionRow {
        SubmissionRow {
            line,
            corpus_id: "C1".to_string(),
            video_id: "V1".to_string(),
            shot_id: format!("S{line}"),
            person_name: name.to_string(),
            confidence: 0.5,
        }
    }

    #[test]
    fn test_shot_key_structural_equality() {
        let a = ShotKey::new("C1", "V1", "S1");
        let b = ShotKey::new("C1", "V1", "S1");
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_submission_person_names_are_distinct() {
        let submission = Submission::new(vec![
            submission_row(1, "alice"),
            submission_row(2, "bob"),
            submission_row(3, "alice"),
        ]);
        let names = submission.person_names();
        assert_eq!(names.len(), 2);
        assert!(names.contains("alice"));
        assert!(names.contains("bob"));
    }

    #[test]
    fn test_submission_shot_keys() {
        let submission = Submission::new(vec![
            submission_row(1, "alice"),
            submission_row(2, "bob"),
        ]);
        let keys = submission.shot_keys();
        assert!(keys.contains(&ShotKey::new("C1", "V1", "S1")));
        assert!(keys.contains(&ShotKey::new("C1", "V1", "S2")));
    }

    #[test]
    fn test_key_display() {
        assert_eq!(ShotKey::new("C1", "V1", "S1").to_string(), "C1 V1 S1");
        assert_eq!(VideoKey::new("C1", "V1").to_string(), "C1 V1");
    }
}
