//! Three-phase submission pipeline
//!
//! Handles the workflow of turning intake form fields into a persisted
//! submission:
//! 1. Intake - validate and normalize the form fields
//! 2. Planning - compute stage applicability and routing policy
//! 3. Execution - drive the long-running processing call with progress
//!    reporting, cancellation, and completion verification

mod execute;
mod intake;
mod plan;
mod progress;

pub use execute::{execute_submission, SubmissionOutcome};
pub use intake::normalize_intake;
pub use plan::{
    plan_submission, SubmissionPlan, DEFAULT_TIMEOUT, EXTENDED_TIMEOUT, VIDEO_TIMEOUT,
};
pub use progress::{format_elapsed, NoopProgress, ProgressCallback, Stage};
