//! # Shot Guard - Submission Validation for Person-Identification Campaigns
//!
//! Shot Guard validates the two tabular artifacts participants of a
//! person-identification evaluation campaign hand in: a *submission* file
//! (predicted identities per video shot, with a confidence score) and an
//! optional *evidence* file (one supporting cue per claimed identity).
//! Validation certifies that inputs are well-formed enough to be scored;
//! it computes no metrics itself.
//!
//! ## Overview
//!
//! A [`Validator`] is constructed once, optionally with reference sets of
//! known shots and videos, and then run against any number of submission
//! and evidence sources. Checks run in a fixed order and abort on the
//! first violation: person-name alphabet, shot membership, confidence
//! finiteness for submissions; video membership, timestamp validity,
//! person-name agreement, and modality literals for evidence.
//!
//! ## Quick Start
//!
//! ```rust
//! use shot_guard::prelude::*;
//!
//! # fn example() -> shot_guard::Result<()> {
//! // Restrict submissions to a known shot list.
//! let shot_list = "C1 V1 S1 0.0 4.2\nC1 V1 S2 4.2 9.0\n";
//! let validator = Validator::builder()
//!     .shots_from_reader(shot_list.as_bytes())?
//!     .build();
//!
//! // A clean submission passes.
//! let submission = "C1 V1 S1 alice 0.9\nC1 V1 S2 bob 0.3\n";
//! validator.validate(submission.as_bytes())?;
//!
//! // An unknown shot is rejected with the offending triple.
//! let bad = "C1 V1 S7 alice 0.9\n";
//! let err = validator.validate(bad.as_bytes()).unwrap_err();
//! assert_eq!(err.to_string(), "Invalid shot (C1 V1 S7)");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Error Handling
//!
//! Every failure, from a malformed input file to a violated rule, is a
//! [`ValidationError`] variant with the campaign's established wording.
//! Validation is strictly fail-fast: no aggregation, no partial results,
//! no retry. The crate never prints; callers render errors, optionally
//! through the [`formatters`] module.
//!
//! ## Concurrency
//!
//! The engine is synchronous and stateless beyond its read-only reference
//! sets, so a single [`Validator`] may be shared across threads without
//! coordination.

pub mod checks;
pub mod error;
pub mod formatters;
pub mod logging;
pub mod model;
pub mod prelude;
pub mod reference;
pub mod sources;
pub mod validator;

pub use error::{FileKind, Result, ValidationError};
pub use model::{Evidence, EvidenceRow, ShotKey, Submission, SubmissionRow, VideoKey};
pub use reference::{ReferenceShots, ReferenceVideos};
pub use sources::{read_evidence, read_submission};
pub use validator::{Validator, ValidatorBuilder};
