//! Loading of whitespace-delimited campaign files into typed datasets.
//!
//! Every campaign input shares the same wire shape: whitespace-delimited
//! columns, no header, one record per line. Blank and whitespace-only
//! lines are skipped, but the physical line counter still advances so
//! reported line numbers match the file on disk.
//!
//! Schemas are fixed per file kind (see [`crate::error::FileKind`]). A
//! record with the wrong column count, or a float column that fails to
//! parse, is a fatal [`ValidationError::Parse`]: no recovery is attempted
//! and no partial dataset is produced. The float literals `NaN`, `inf`
//! and `-inf` parse successfully on purpose; rejecting non-finite values
//! is the job of the validation checks, which can then report the exact
//! offending line.

mod evidence;
mod submission;

pub use evidence::read_evidence;
pub use submission::read_submission;

use crate::error::{FileKind, Result, ValidationError};
use std::io::BufRead;

/// Reads `reader` record by record, calling `f` with the 1-indexed
/// physical line number and the whitespace-split fields of each non-blank
/// line.
///
/// Fails on the first line whose field count differs from `columns`.
pub(crate) fn for_each_record<R, F>(
    reader: R,
    kind: FileKind,
    columns: usize,
    mut f: F,
) -> Result<()>
where
    R: BufRead,
    F: FnMut(usize, &[&str]) -> Result<()>,
{
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != columns {
            return Err(ValidationError::parse(
                kind,
                number,
                format!("expected {columns} columns, found {}", fields.len()),
            ));
        }
        f(number, &fields)?;
    }
    Ok(())
}

/// Parses a float column, mapping failure to a schema-aware parse error.
pub(crate) fn parse_float(kind: FileKind, line: usize, column: &str, raw: &str) -> Result<f32> {
    raw.parse::<f32>().map_err(|_| {
        ValidationError::parse(kind, line, format!("{column} value {raw:?} is not a number"))
    })
}
