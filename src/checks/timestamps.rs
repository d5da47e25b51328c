//! Timestamp validity check for evidence.

use crate::error::{Result, ValidationError};
use crate::model::Evidence;
use tracing::instrument;

/// Verifies that every evidence timestamp is finite and non-negative.
///
/// Finiteness is checked over the whole dataset before negativity: a run
/// containing both a NaN timestamp and a negative one always reports the
/// first non-finite row, even when the negative row comes earlier in the
/// file. Each failure carries the row's 1-indexed line number.
#[instrument(skip_all)]
pub fn timestamps(evidence: &Evidence) -> Result<()> {
    for row in evidence.rows() {
        if !row.timestamp.is_finite() {
            return Err(ValidationError::NonFiniteTimestamp { line: row.line });
        }
    }
    for row in evidence.rows() {
        if row.timestamp < 0.0 {
            return Err(ValidationError::NegativeTimestamp { line: row.line });
        }
    }
    Ok(())
}
