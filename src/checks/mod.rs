//! The battery of submission and evidence checks.
//!
//! Each check is a standalone function over parsed datasets (and a
//! reference set where one applies) returning `Result<(), ValidationError>`.
//! Checks do not decide when they run: the fixed execution order, and the
//! gating of reference-based checks on the presence of their reference
//! set, both live in [`Validator`](crate::validator::Validator).
//!
//! Submission checks, in engine order:
//!
//! 1. [`person_names`] — names restricted to lowercase ASCII + underscore
//! 2. [`shots`] — referenced shots belong to the reference shot set
//! 3. [`confidence`] — confidence values are finite
//!
//! Evidence checks, in engine order:
//!
//! 1. [`videos`] — referenced videos belong to the reference video set
//! 2. [`timestamps`] — timestamps are finite, then non-negative
//! 3. [`person_name_agreement`] — evidence names are unique and match the
//!    submission name set exactly
//! 4. [`modality`] — modality literals are `written` or `pronounced`
//!
//! Checks tied to file order (confidence, timestamps) report the exact
//! 1-indexed line of the first offending row. Set-based checks report one
//! offending element; only the existence of a violation is part of the
//! contract, not which element is chosen.

mod confidence;
mod modality;
mod person_name_agreement;
mod person_names;
mod shots;
mod timestamps;
mod videos;

pub use confidence::confidence;
pub use modality::{modality, ALLOWED_MODALITIES};
pub use person_name_agreement::person_name_agreement;
pub use person_names::person_names;
pub use shots::shots;
pub use timestamps::timestamps;
pub use videos::videos;
