//! Phase 3: Submission execution
//!
//! Drives the single long-running processing call: races it against the
//! plan's deadline, interleaves the one-second elapsed ticker and the
//! simulated stage display, and applies strict completion verification to
//! whatever comes back.
//!
//! Everything runs cooperatively inside one `select!` loop, so the ticker
//! and the stage timer stop on every exit path by construction, and exactly
//! one tick source exists per in-flight submission.

use crate::api::{IntakeReply, IntakeTransport, TransportReply};
use crate::error::{Error, Result};
use crate::submit::plan::SubmissionPlan;
use crate::submit::progress::{ProgressCallback, Stage};
use std::time::Duration;
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};

/// Elapsed ticker period
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// How long the simulated display holds each stage while the call runs
const STAGE_DISPLAY_HOLD: Duration = Duration::from_secs(3);

/// Fallback message when the server confirms success without one
const GENERIC_SUCCESS: &str = "Your idea has been submitted and is queued for review.";

/// Fallback message when the server answers without confirming success
const GENERIC_FAILURE: &str = "The server did not accept the submission. \
     Your input is unchanged; try again.";

/// Result of a completed submission attempt
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    /// Server-supplied (or generic) confirmation message
    pub message: String,
    /// Wall-clock time the attempt took
    pub elapsed: Duration,
}

/// Tracks one submission attempt so it reports exactly one outcome.
///
/// Once cancelled, any result the call still produces is stale and must be
/// ignored; once settled, nothing further may be reported.
#[derive(Debug, Default)]
struct Attempt {
    cancelled: bool,
    settled: bool,
}

impl Attempt {
    const fn new() -> Self {
        Self {
            cancelled: false,
            settled: false,
        }
    }

    const fn cancel(&mut self) {
        self.cancelled = true;
    }

    const fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Claim the right to report; returns `None` if already settled
    fn settle<T>(&mut self, outcome: T) -> Option<T> {
        if self.settled {
            return None;
        }
        self.settled = true;
        Some(outcome)
    }
}

/// Execute a submission plan against the processing endpoint.
///
/// Issues the one cancellable call the plan's route policy describes. On
/// timeout the call future is dropped (cooperative abort) and the outcome is
/// the recoverable [`Error::TransportTimeout`]; the server may still finish,
/// so the caller is directed to the review queue instead of a retry.
pub async fn execute_submission(
    plan: &SubmissionPlan,
    transport: &dyn IntakeTransport,
    progress: &dyn ProgressCallback,
) -> Result<SubmissionOutcome> {
    let started = Instant::now();
    info!(
        author = %plan.request.author,
        route = %plan.route.route,
        timeout_secs = plan.route.timeout.as_secs(),
        stages = plan.stages.len(),
        "starting submission"
    );

    progress.on_stage(Stage::Preparing).await;

    let mut attempt = Attempt::new();
    let mut upcoming = plan.stages.iter().copied();

    let call = transport.submit(&plan.request, &plan.route);
    tokio::pin!(call);

    let deadline = time::sleep(plan.route.timeout);
    tokio::pin!(deadline);

    let mut ticker = time::interval_at(started + TICK_INTERVAL, TICK_INTERVAL);
    let mut stage_timer = time::interval_at(started + STAGE_DISPLAY_HOLD, STAGE_DISPLAY_HOLD);

    let reply = loop {
        tokio::select! {
            reply = &mut call, if !attempt.is_cancelled() => break Some(reply),
            () = &mut deadline => {
                attempt.cancel();
                break None;
            }
            _ = ticker.tick() => {
                progress.on_tick(started.elapsed()).await;
            }
            _ = stage_timer.tick() => {
                // Simulated display only; holds before Saving until the
                // response is verified
                if let Some(stage) = upcoming.next() {
                    progress.on_stage(stage).await;
                }
            }
        }
    };

    let outcome = match reply {
        None => {
            warn!(
                timeout_secs = plan.route.timeout.as_secs(),
                "submission call cancelled on timeout"
            );
            Err(Error::TransportTimeout(plan.route.timeout.as_secs()))
        }
        // Still-relevant check: a result that races the cancellation is
        // stale and must not become this attempt's outcome
        Some(_) if attempt.is_cancelled() => {
            debug!("discarding stale reply from cancelled attempt");
            Err(Error::TransportTimeout(plan.route.timeout.as_secs()))
        }
        Some(Err(e)) => Err(e),
        Some(Ok(raw)) => verify_completion(&raw),
    };

    let Some(outcome) = attempt.settle(outcome) else {
        return Err(Error::Internal("submission attempt settled twice".into()));
    };

    match outcome {
        Ok(message) => {
            // Fast responses can outrun the simulated display; flush the
            // remaining stages so the sequence the user sees is complete
            for stage in upcoming {
                progress.on_stage(stage).await;
            }
            progress.on_stage(Stage::Saving).await;
            progress.on_stage(Stage::Complete).await;
            let elapsed = started.elapsed();
            info!(elapsed_secs = elapsed.as_secs(), "submission complete");
            Ok(SubmissionOutcome { message, elapsed })
        }
        Err(error) => {
            progress.on_error(&error).await;
            Err(error)
        }
    }
}

/// Strict completion check over a raw reply.
///
/// Complete only when the body parses as JSON and carries an explicit true
/// success flag alongside a success status code. Transport-level success is
/// never enough; the error message prefers what the server said.
fn verify_completion(reply: &TransportReply) -> Result<String> {
    let status_ok = (200..300).contains(&reply.status);
    let parsed: Option<IntakeReply> = serde_json::from_str(&reply.body).ok();

    match parsed {
        None if status_ok => Err(Error::Protocol(format!(
            "server reply was not well-formed. {GENERIC_FAILURE}"
        ))),
        None => Err(Error::Protocol(format!(
            "server returned status {}. {GENERIC_FAILURE}",
            reply.status
        ))),
        Some(body) => {
            if status_ok && body.success {
                Ok(body.message.unwrap_or_else(|| GENERIC_SUCCESS.to_string()))
            } else {
                Err(Error::Protocol(
                    body.message.unwrap_or_else(|| GENERIC_FAILURE.to_string()),
                ))
            }
        }
    }
}
