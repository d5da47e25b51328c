//! Video membership check for evidence.

use crate::error::{Result, ValidationError};
use crate::model::Evidence;
use crate::reference::ReferenceVideos;
use tracing::instrument;

/// Verifies that every video cited by the evidence belongs to the
/// reference video set.
///
/// Reports one absent `(corpus, video)` pair; which one is unspecified
/// since the cited videos form an unordered set.
#[instrument(skip_all, fields(reference_videos = reference.len()))]
pub fn videos(evidence: &Evidence, reference: &ReferenceVideos) -> Result<()> {
    for key in evidence.video_keys() {
        if !reference.contains(&key) {
            return Err(ValidationError::UnknownVideo {
                corpus_id: key.corpus_id,
                video_id: key.video_id,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EvidenceRow, VideoKey};

    fn evidence_for(video_id: &str) -> Evidence {
        Evidence::new(vec![EvidenceRow {
            line: 1,
            person_name: "alice".to_string(),
            corpus_id: "C1".to_string(),
            video_id: video_id.to_string(),
            modality: "written".to_string(),
            timestamp: 1.0,
        }])
    }

    fn reference() -> ReferenceVideos {
        [VideoKey::new("C1", "V1")].into_iter().collect()
    }

    #[test]
    fn test_known_video_passes() {
        assert!(videos(&evidence_for("V1"), &reference()).is_ok());
    }

    #[test]
    fn test_unknown_video_fails_with_pair() {
        let err = videos(&evidence_for("V9"), &reference()).unwrap_err();
        match err {
            ValidationError::UnknownVideo {
                corpus_id,
                video_id,
            } => {
                assert_eq!((corpus_id.as_str(), video_id.as_str()), ("C1", "V9"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
