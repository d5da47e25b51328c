//! Confidence finiteness check for submissions.

use crate::error::{Result, ValidationError};
use crate::model::Submission;
use tracing::instrument;

/// Verifies that every confidence value in the submission is finite.
///
/// Rows are scanned in input order; the first NaN or infinite confidence
/// fails with that row's 1-indexed line number.
#[instrument(skip_all)]
pub fn confidence(submission: &Submission) -> Result<()> {
    for row in submission.rows() {
        if !row.confidence.is_finite() {
            return Err(ValidationError::NonFiniteConfidence { line: row.line });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SubmissionRow;

    fn submission_with_confidences(values: &[f32]) -> Submission {
        let rows = values
            .iter()
            .enumerate()
            .map(|(i, &confidence)| SubmissionRow {
                line: i + 1,
                corpus_id: "C1".to_string(),
                video_id: "V1".to_string(),
                shot_id: format!("S{i}"),
                person_name: "alice".to_string(),
                confidence,
            })
            .collect();
        Submission::new(rows)
    }

    #[test]
    fn test_finite_confidences_pass() {
        let submission = submission_with_confidences(&[0.0, -3.5, 1.0e30]);
        assert!(confidence(&submission).is_ok());
    }

    #[test]
    fn test_nan_reports_its_line() {
        let submission = submission_with_confidences(&[0.1, 0.2, f32::NAN, f32::NAN]);
        let err = confidence(&submission).unwrap_err();
        assert!(matches!(err, ValidationError::NonFiniteConfidence { line: 3 }));
    }

    #[test]
    fn test_infinity_reports_its_line() {
        let submission = submission_with_confidences(&[f32::INFINITY]);
        let err = confidence(&submission).unwrap_err();
        assert!(matches!(err, ValidationError::NonFiniteConfidence { line: 1 }));
    }
}
