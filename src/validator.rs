//! The validation engine: ordered, fail-fast checks over submission and
//! evidence datasets.
//!
//! A [`Validator`] holds the optional reference sets fixed at
//! construction and runs the check battery in a fixed order, aborting on
//! the first violation. Reference sets are immutable after construction,
//! so a validator can be shared freely across threads and repeated calls;
//! each call owns its own parsed datasets and leaves no state behind.

use crate::checks;
use crate::error::Result;
use crate::model::{Evidence, Submission};
use crate::reference::{ReferenceShots, ReferenceVideos};
use crate::sources;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, instrument};

/// Validates submission and evidence files against optional reference
/// sets of known shots and videos.
///
/// An absent reference set is a deliberate configuration, not a defect:
/// without a shot set any shot is allowed, and without a video set any
/// video is allowed. The associated membership check is skipped entirely.
///
/// # Examples
///
/// ```rust
/// use shot_guard::prelude::*;
///
/// # fn example() -> shot_guard::Result<()> {
/// let validator = Validator::new();
///
/// let submission = "C1 V1 S1 alice 0.9\nC1 V1 S2 bob 0.3\n";
/// validator.validate(submission.as_bytes())?;
///
/// let evidence = "alice C1 V1 written 12.5\nbob C1 V2 pronounced 3.0\n";
/// validator.validate_with_evidence(submission.as_bytes(), evidence.as_bytes())?;
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    shots: Option<ReferenceShots>,
    videos: Option<ReferenceVideos>,
}

impl Validator {
    /// Creates an unrestricted validator: any shot and any video is
    /// accepted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a builder for configuring reference sets.
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::default()
    }

    /// Returns the reference shot set, if one was configured.
    pub fn reference_shots(&self) -> Option<&ReferenceShots> {
        self.shots.as_ref()
    }

    /// Returns the reference video set, if one was configured.
    pub fn reference_videos(&self) -> Option<&ReferenceVideos> {
        self.videos.as_ref()
    }

    /// Validates a submission with no accompanying evidence.
    ///
    /// Parses the submission, then runs the submission checks in order:
    /// person-name alphabet, shot membership (when a reference shot set
    /// exists), confidence finiteness. Returns `Ok(())` only if every
    /// applicable check passes; otherwise the first violation's error
    /// propagates.
    #[instrument(skip_all)]
    pub fn validate<R: BufRead>(&self, submission: R) -> Result<()> {
        let submission = sources::read_submission(submission)?;
        self.check_submission(&submission)
    }

    /// Validates a submission together with its evidence file.
    ///
    /// Submission checks run first; evidence is only parsed and checked
    /// once the submission is clean.
    #[instrument(skip_all)]
    pub fn validate_with_evidence<R, E>(&self, submission: R, evidence: E) -> Result<()>
    where
        R: BufRead,
        E: BufRead,
    {
        let submission = sources::read_submission(submission)?;
        self.check_submission(&submission)?;
        let evidence = sources::read_evidence(evidence)?;
        self.check_evidence(&submission, &evidence)
    }

    /// Validates a submission file on disk.
    pub fn validate_path(&self, submission: impl AsRef<Path>) -> Result<()> {
        self.validate(BufReader::new(File::open(submission)?))
    }

    /// Validates submission and evidence files on disk.
    pub fn validate_path_with_evidence(
        &self,
        submission: impl AsRef<Path>,
        evidence: impl AsRef<Path>,
    ) -> Result<()> {
        self.validate_with_evidence(
            BufReader::new(File::open(submission)?),
            BufReader::new(File::open(evidence)?),
        )
    }

    /// Runs the submission checks, in order, on an already-parsed
    /// dataset.
    #[instrument(skip_all, fields(rows = submission.len()))]
    pub fn check_submission(&self, submission: &Submission) -> Result<()> {
        checks::person_names(submission)?;
        if let Some(reference) = &self.shots {
            checks::shots(submission, reference)?;
        }
        checks::confidence(submission)?;
        debug!("submission checks passed");
        Ok(())
    }

    /// Runs the evidence checks, in order, on already-parsed datasets.
    ///
    /// The submission is needed for the person-name cross-check: the two
    /// name sets must agree exactly.
    #[instrument(skip_all, fields(rows = evidence.len()))]
    pub fn check_evidence(&self, submission: &Submission, evidence: &Evidence) -> Result<()> {
        if let Some(reference) = &self.videos {
            checks::videos(evidence, reference)?;
        }
        checks::timestamps(evidence)?;
        checks::person_name_agreement(submission, evidence)?;
        checks::modality(evidence)?;
        debug!("evidence checks passed");
        Ok(())
    }
}

/// Builder for [`Validator`].
///
/// Reference sets can be supplied pre-built, or loaded from readers or
/// paths. A malformed reference file fails the builder call: no partial
/// engine is ever produced.
///
/// # Examples
///
/// ```rust,no_run
/// use shot_guard::prelude::*;
///
/// # fn example() -> shot_guard::Result<()> {
/// let validator = Validator::builder()
///     .shots_from_path("dev.shots.txt")?
///     .videos_from_path("dev.videos.txt")?
///     .build();
/// # let _ = validator;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ValidatorBuilder {
    shots: Option<ReferenceShots>,
    videos: Option<ReferenceVideos>,
}

impl ValidatorBuilder {
    /// Restricts submissions to the given reference shot set.
    pub fn with_shots(mut self, shots: ReferenceShots) -> Self {
        self.shots = Some(shots);
        self
    }

    /// Restricts evidence to the given reference video set.
    pub fn with_videos(mut self, videos: ReferenceVideos) -> Self {
        self.videos = Some(videos);
        self
    }

    /// Loads the reference shot set from a shot-list reader.
    pub fn shots_from_reader<R: BufRead>(self, reader: R) -> Result<Self> {
        Ok(self.with_shots(ReferenceShots::from_reader(reader)?))
    }

    /// Loads the reference shot set from a shot-list file on disk.
    pub fn shots_from_path(self, path: impl AsRef<Path>) -> Result<Self> {
        Ok(self.with_shots(ReferenceShots::from_path(path)?))
    }

    /// Loads the reference video set from a video-list reader.
    pub fn videos_from_reader<R: BufRead>(self, reader: R) -> Result<Self> {
        Ok(self.with_videos(ReferenceVideos::from_reader(reader)?))
    }

    /// Loads the reference video set from a video-list file on disk.
    pub fn videos_from_path(self, path: impl AsRef<Path>) -> Result<Self> {
        Ok(self.with_videos(ReferenceVideos::from_path(path)?))
    }

    /// Builds the validator.
    pub fn build(self) -> Validator {
        Validator {
            shots: self.shots,
            videos: self.videos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::model::{ShotKey, VideoKey};

    const SUBMISSION: &str = "C1 V1 S1 alice 0.9\nC1 V2 S2 bob 0.3\n";
    const EVIDENCE: &str = "alice C1 V1 written 12.5\nbob C1 V2 pronounced 3.0\n";

    #[test]
    fn test_unrestricted_validator_accepts_any_shot_and_video() {
        let validator = Validator::new();
        assert!(validator.validate(SUBMISSION.as_bytes()).is_ok());
        assert!(validator
            .validate_with_evidence(SUBMISSION.as_bytes(), EVIDENCE.as_bytes())
            .is_ok());
    }

    #[test]
    fn test_shot_restriction_is_enforced() {
        let shots: ReferenceShots = [ShotKey::new("C1", "V1", "S1")].into_iter().collect();
        let validator = Validator::builder().with_shots(shots).build();
        let err = validator.validate(SUBMISSION.as_bytes()).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownShot { .. }));
    }

    #[test]
    fn test_video_restriction_only_applies_to_evidence() {
        let videos: ReferenceVideos = [VideoKey::new("C1", "V1")].into_iter().collect();
        let validator = Validator::builder().with_videos(videos).build();

        // Submission-only validation never looks at the video set.
        assert!(validator.validate(SUBMISSION.as_bytes()).is_ok());

        let err = validator
            .validate_with_evidence(SUBMISSION.as_bytes(), EVIDENCE.as_bytes())
            .unwrap_err();
        assert!(matches!(err, ValidationError::UnknownVideo { .. }));
    }

    #[test]
    fn test_submission_checks_run_before_evidence_is_parsed() {
        let validator = Validator::new();
        let bad_submission = "C1 V1 S1 Jean-Paul 0.9\n";
        // The evidence file is malformed, but the submission's name check
        // must fail first.
        let malformed_evidence = "only two\n";
        let err = validator
            .validate_with_evidence(bad_submission.as_bytes(), malformed_evidence.as_bytes())
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPersonName { .. }));
    }

    #[test]
    fn test_check_order_names_before_shots_before_confidence() {
        let shots: ReferenceShots = [ShotKey::new("C1", "V1", "S1")].into_iter().collect();
        let validator = Validator::builder().with_shots(shots).build();

        // Bad name, unknown shot, and NaN confidence in one row: the
        // name check wins.
        let submission = "C1 V1 S9 Bad-Name NaN\n";
        let err = validator.validate(submission.as_bytes()).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPersonName { .. }));

        // Fix the name: the shot check wins over confidence.
        let submission = "C1 V1 S9 alice NaN\n";
        let err = validator.validate(submission.as_bytes()).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownShot { .. }));
    }
}
