//! Modality literal check for evidence.

use crate::error::{Result, ValidationError};
use crate::model::Evidence;
use tracing::instrument;

/// The two channels through which an identity can be evidenced.
pub const ALLOWED_MODALITIES: [&str; 2] = ["written", "pronounced"];

/// Verifies that every evidence modality is one of the allowed literals.
///
/// Rows are scanned in input order; the reported literal is the first
/// offending one by appearance, though only the existence of a violation
/// is part of the contract.
#[instrument(skip_all)]
pub fn modality(evidence: &Evidence) -> Result<()> {
    for row in evidence.rows() {
        if !ALLOWED_MODALITIES.contains(&row.modality.as_str()) {
            return Err(ValidationError::InvalidModality {
                modality: row.modality.clone(),
            });
        }
    }
    Ok(())
}
