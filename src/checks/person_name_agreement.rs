//! Person-name cross-check between submission and evidence.

use crate::error::{Result, ValidationError};
use crate::model::{Evidence, Submission};
use std::collections::HashSet;
use tracing::instrument;

/// Verifies that evidence person names are unique and agree exactly with
/// the submission's person-name set.
///
/// Three sub-checks run in order:
///
/// 1. no person name appears in more than one evidence row,
/// 2. no evidence name is absent from the submission ("extra"),
/// 3. no submission name is absent from the evidence ("missing").
///
/// Every identity claimed in the submission must be backed by exactly one
/// evidence row, and evidence must not introduce unknown identities.
#[instrument(skip_all)]
pub fn person_name_agreement(submission: &Submission, evidence: &Evidence) -> Result<()> {
    let mut evidenced = HashSet::new();
    for row in evidence.rows() {
        if !evidenced.insert(row.person_name.as_str()) {
            return Err(ValidationError::DuplicatePersonName {
                person_name: row.person_name.clone(),
            });
        }
    }

    let submitted = submission.person_names();
    for name in &evidenced {
        if !submitted.contains(name) {
            return Err(ValidationError::ExtraPersonName {
                person_name: (*name).to_string(),
            });
        }
    }
    for name in &submitted {
        if !evidenced.contains(name) {
            return Err(ValidationError::MissingPersonName {
                person_name: (*name).to_string(),
            });
        }
    }
    Ok(())
}
