//! Error types for the shot-guard validation library.
//!
//! This module provides the error handling strategy using `thiserror` for
//! automatic error trait implementations. All failures, whether a malformed
//! input file or a violated validation rule, are represented by the
//! [`ValidationError`] enum: one category, one variant per cause.

use thiserror::Error;

/// Identifies which campaign file an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Reference list of test shots (5 columns).
    ShotList,
    /// Reference list of videos (2 columns).
    VideoList,
    /// Participant submission (5 columns).
    Submission,
    /// Participant evidence (5 columns).
    Evidence,
}

impl FileKind {
    /// Returns a human-readable name for this file kind.
    pub fn name(&self) -> &'static str {
        match self {
            FileKind::ShotList => "shot list",
            FileKind::VideoList => "video list",
            FileKind::Submission => "submission",
            FileKind::Evidence => "evidence",
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The main error type for the shot-guard library.
///
/// This enum represents every way a validation run can fail: parse errors
/// surfaced unchanged from dataset loading, and one variant per validation
/// rule. Validation is strictly fail-fast, so a run reports at most one of
/// these.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A submission person name uses characters outside `[a-z_]`.
    #[error("Invalid person name ({person_name})")]
    InvalidPersonName {
        /// The offending person name.
        person_name: String,
    },

    /// A submission references a shot absent from the reference shot set.
    #[error("Invalid shot ({corpus_id} {video_id} {shot_id})")]
    UnknownShot {
        corpus_id: String,
        video_id: String,
        shot_id: String,
    },

    /// A submission confidence value is NaN or infinite.
    #[error("Incorrect confidence in submission at line {line}")]
    NonFiniteConfidence {
        /// 1-indexed line of the offending row.
        line: usize,
    },

    /// Evidence references a video absent from the reference video set.
    #[error("Invalid video ({corpus_id} {video_id}) in evidence")]
    UnknownVideo {
        corpus_id: String,
        video_id: String,
    },

    /// An evidence timestamp is NaN or infinite.
    #[error("Incorrect timestamp in evidence at line {line}")]
    NonFiniteTimestamp {
        /// 1-indexed line of the offending row.
        line: usize,
    },

    /// An evidence timestamp is finite but negative.
    #[error("Negative timestamp in evidence at line {line}")]
    NegativeTimestamp {
        /// 1-indexed line of the offending row.
        line: usize,
    },

    /// A person name appears in more than one evidence row.
    #[error("Duplicate person name in evidence ({person_name})")]
    DuplicatePersonName { person_name: String },

    /// Evidence names a person the submission never mentions.
    #[error("Extra person name in evidence ({person_name})")]
    ExtraPersonName { person_name: String },

    /// A submitted person name has no evidence row backing it.
    #[error("Missing person name in evidence ({person_name})")]
    MissingPersonName { person_name: String },

    /// An evidence modality is neither `written` nor `pronounced`.
    #[error("Incorrect modality in evidence ({modality})")]
    InvalidModality { modality: String },

    /// An input file could not be parsed against its fixed schema.
    ///
    /// Parse failures are fatal: no recovery is attempted and no partial
    /// dataset is produced.
    #[error("Malformed {kind} file at line {line}: {message}")]
    Parse {
        /// Which file failed to parse.
        kind: FileKind,
        /// 1-indexed line of the malformed record.
        line: usize,
        /// What was wrong with the record.
        message: String,
    },

    /// Error from I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from serialization operations.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// A type alias for `Result<T, ValidationError>`.
///
/// This is the standard `Result` type used throughout the shot-guard
/// library.
pub type Result<T> = std::result::Result<T, ValidationError>;

impl ValidationError {
    /// Creates a new parse error for the given file kind and line.
    pub fn parse(kind: FileKind, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            kind,
            line,
            message: message.into(),
        }
    }

    /// Returns the 1-indexed line number carried by this error, if any.
    ///
    /// Only errors tied to file order (parse failures, non-finite
    /// confidence, bad timestamps) carry a line; set-membership failures
    /// do not.
    pub fn line(&self) -> Option<usize> {
        match self {
            ValidationError::NonFiniteConfidence { line }
            | ValidationError::NonFiniteTimestamp { line }
            | ValidationError::NegativeTimestamp { line }
            | ValidationError::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }
}
