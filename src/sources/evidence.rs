//! Evidence file loading.

use crate::error::{FileKind, Result};
use crate::model::{Evidence, EvidenceRow};
use std::io::BufRead;
use tracing::debug;

/// Reads an evidence dataset from whitespace-delimited text.
///
/// Schema: `person_name corpus_id video_id modality timestamp`, no
/// header. The modality column is kept as a raw string: validating it
/// against the allowed literals is the modality check's job, which the
/// engine runs after the timestamp check.
pub fn read_evidence<R: BufRead>(reader: R) -> Result<Evidence> {
    let mut rows = Vec::new();
    super::for_each_record(reader, FileKind::Evidence, 5, |line, fields| {
        let timestamp = super::parse_float(FileKind::Evidence, line, "timestamp", fields[4])?;
        rows.push(EvidenceRow {
            line,
            person_name: fields[0].to_string(),
            corpus_id: fields[1].to_string(),
            video_id: fields[2].to_string(),
            modality: fields[3].to_string(),
            timestamp,
        });
        Ok(())
    })?;
    debug!(rows = rows.len(), "loaded evidence dataset");
    Ok(Evidence::new(rows))
}
