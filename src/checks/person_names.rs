//! Person-name alphabet check for submissions.

use crate::error::{Result, ValidationError};
use crate::model::Submission;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::instrument;

/// Person names are normalized identifiers: lowercase ASCII letters and
/// underscore only (e.g. `barack_obama`).
static PERSON_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z_]*$").expect("person name pattern is a valid literal"));

/// Verifies that every distinct person name in the submission uses only
/// characters from `[a-z_]`.
///
/// Rows are scanned in input order and deduplicated on the fly, so the
/// reported name is the first offender by first appearance. Callers
/// should rely only on the existence of a violation, not on which name
/// is chosen.
#[instrument(skip_all)]
pub fn person_names(submission: &Submission) -> Result<()> {
    let mut seen = HashSet::new();
    for row in submission.rows() {
        let name = row.person_name.as_str();
        if !seen.insert(name) {
            continue;
        }
        if !PERSON_NAME.is_match(name) {
            return Err(ValidationError::InvalidPersonName {
                person_name: name.to_string(),
            });
        }
    }
    Ok(())
}
