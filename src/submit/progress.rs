//! Progress callback trait for interface-agnostic updates
//!
//! The executor reports stage transitions, elapsed-time ticks, and failures
//! through this trait; it knows nothing about how they are rendered.

use crate::error::Error;
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

/// Pipeline stage, in fixed total order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Validating and packaging the submission
    Preparing,
    /// Extracting facts from research URLs
    Research,
    /// Drafting the post text
    Draft,
    /// Generating the graphic or video
    Graphic,
    /// Persisting the submission
    Saving,
    /// Submission accepted
    Complete,
}

impl Stage {
    /// Display label for this stage
    pub const fn label(self) -> &'static str {
        match self {
            Self::Preparing => "Preparing submission",
            Self::Research => "Extracting research",
            Self::Draft => "Drafting post",
            Self::Graphic => "Generating graphic",
            Self::Saving => "Saving",
            Self::Complete => "Complete",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Progress callback trait
///
/// Implement this to receive updates while a submission is in flight.
/// - CLI implementations can print to terminal
/// - Web servers can send SSE or WebSocket messages
///
/// Stage display is locally simulated while the processing call runs; only
/// `Saving`/`Complete` reflect a verified server response.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when the displayed stage advances
    async fn on_stage(&self, stage: Stage);

    /// Called once per second with the elapsed time since submission start
    async fn on_tick(&self, elapsed: Duration);

    /// Called when the attempt fails
    async fn on_error(&self, error: &Error);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_stage(&self, _stage: Stage) {}
    async fn on_tick(&self, _elapsed: Duration) {}
    async fn on_error(&self, _error: &Error) {}
    async fn on_message(&self, _message: &str) {}
}

/// Format an elapsed duration as m:ss for display
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{}:{:02}", total / 60, total % 60)
}
