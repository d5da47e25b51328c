//! Submission file loading.

use crate::error::{FileKind, Result};
use crate::model::{Submission, SubmissionRow};
use std::io::BufRead;
use tracing::debug;

/// Reads a submission dataset from whitespace-delimited text.
///
/// Schema: `corpus_id video_id shot_id person_name confidence`, no
/// header. Row order is preserved; each row records its physical line.
pub fn read_submission<R: BufRead>(reader: R) -> Result<Submission> {
    let mut rows = Vec::new();
    super::for_each_record(reader, FileKind::Submission, 5, |line, fields| {
        let confidence = super::parse_float(FileKind::Submission, line, "confidence", fields[4])?;
        rows.push(SubmissionRow {
            line,
            corpus_id: fields[0].to_string(),
            video_id: fields[1].to_string(),
            shot_id: fields[2].to_string(),
            person_name: fields[3].to_string(),
            confidence,
        });
        Ok(())
    })?;
    debug!(rows = rows.len(), "loaded submission dataset");
    Ok(Submission::new(rows))
}
