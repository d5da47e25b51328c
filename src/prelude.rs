//! Prelude for commonly used types in shot-guard.

pub use crate::error::{FileKind, Result, ValidationError};
pub use crate::formatters::{JsonFormatter, ReportFormatter, TextFormatter, ValidationReport};
pub use crate::logging::LoggingConfig;
pub use crate::model::{Evidence, ShotKey, Submission, VideoKey};
pub use crate::reference::{ReferenceShots, ReferenceVideos};
pub use crate::validator::{Validator, ValidatorBuilder};
