//! Shot membership check for submissions.

use crate::error::{Result, ValidationError};
use crate::model::Submission;
use crate::reference::ReferenceShots;
use tracing::instrument;

/// Verifies that every shot referenced by the submission belongs to the
/// reference shot set.
///
/// Reports one absent `(corpus, video, shot)` triple; which one is
/// unspecified since the referenced shots form an unordered set.
#[instrument(skip_all, fields(reference_shots = reference.len()))]
pub fn shots(submission: &Submission, reference: &ReferenceShots) -> Result<()> {
    for key in submission.shot_keys() {
        if !reference.contains(&key) {
            return Err(ValidationError::UnknownShot {
                corpus_id: key.corpus_id,
                video_id: key.video_id,
                shot_id: key.shot_id,
            });
        }
    }
    Ok(())
}
