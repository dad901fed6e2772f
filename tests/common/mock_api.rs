//! Mock collaborator API for testing
//!
//! Manually implements both collaborator traits rather than using a mocking
//! crate, mirroring how the rest of the codebase treats the seams.
//!
//! Features:
//! - Call tracking for verification
//! - Configurable responses and per-call delays (tokio virtual time aware)
//! - Error injection for failure path testing

#![allow(dead_code)]

use async_trait::async_trait;
use claris::api::{IntakeRequest, IntakeTransport, ReviewApi, TransportReply};
use claris::error::{Error, Result};
use claris::submit::{ProgressCallback, Stage};
use claris::types::{Route, RoutePolicy, Submission};
use std::sync::Mutex;
use std::time::Duration;

/// Call record for `submit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitCall {
    pub author: String,
    pub route: Route,
    pub timeout: Duration,
}

/// Call record for `approve`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproveCall {
    pub id: String,
    pub edited_post: String,
}

/// Call record for `regenerate_image`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegenerateCall {
    pub id: String,
    pub feedback: String,
}

/// Call record for `select_variation`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectCall {
    pub id: String,
    pub payload: String,
}

/// Mock implementation of both collaborator traits
pub struct MockApi {
    // Intake side
    intake_reply: Mutex<TransportReply>,
    submit_delay: Mutex<Option<Duration>>,
    error_on_submit: Mutex<Option<String>>,
    submit_calls: Mutex<Vec<SubmitCall>>,
    // Review side
    pending: Mutex<Vec<Submission>>,
    regenerate_response: Mutex<String>,
    variations_response: Mutex<Vec<String>>,
    review_delay: Mutex<Option<Duration>>,
    error_on_approve: Mutex<Option<String>>,
    error_on_reject: Mutex<Option<String>>,
    error_on_regenerate: Mutex<Option<String>>,
    error_on_variations: Mutex<Option<String>>,
    error_on_select: Mutex<Option<String>>,
    approve_calls: Mutex<Vec<ApproveCall>>,
    reject_calls: Mutex<Vec<String>>,
    regenerate_calls: Mutex<Vec<RegenerateCall>>,
    variations_calls: Mutex<Vec<String>>,
    select_calls: Mutex<Vec<SelectCall>>,
}

impl MockApi {
    /// Create a mock that answers intake with a plain success reply
    pub fn new() -> Self {
        Self {
            intake_reply: Mutex::new(TransportReply {
                status: 200,
                body: r#"{"success": true, "message": "Queued for review."}"#.to_string(),
            }),
            submit_delay: Mutex::new(None),
            error_on_submit: Mutex::new(None),
            submit_calls: Mutex::new(Vec::new()),
            pending: Mutex::new(Vec::new()),
            regenerate_response: Mutex::new(
                "data:image/png;base64,cmVnZW5lcmF0ZWQ=".to_string(),
            ),
            variations_response: Mutex::new(vec![
                "data:image/png;base64,dmFyLTE=".to_string(),
                "data:image/png;base64,dmFyLTI=".to_string(),
                "data:image/png;base64,dmFyLTM=".to_string(),
            ]),
            review_delay: Mutex::new(None),
            error_on_approve: Mutex::new(None),
            error_on_reject: Mutex::new(None),
            error_on_regenerate: Mutex::new(None),
            error_on_variations: Mutex::new(None),
            error_on_select: Mutex::new(None),
            approve_calls: Mutex::new(Vec::new()),
            reject_calls: Mutex::new(Vec::new()),
            regenerate_calls: Mutex::new(Vec::new()),
            variations_calls: Mutex::new(Vec::new()),
            select_calls: Mutex::new(Vec::new()),
        }
    }

    // === Configuration ===

    /// Set the raw reply the intake call returns
    pub fn set_intake_reply(&self, status: u16, body: &str) {
        *self.intake_reply.lock().unwrap() = TransportReply {
            status,
            body: body.to_string(),
        };
    }

    /// Delay the intake call by the given (virtual) duration
    pub fn set_submit_delay(&self, delay: Duration) {
        *self.submit_delay.lock().unwrap() = Some(delay);
    }

    /// Make `submit` fail with a transport error
    pub fn fail_submit(&self, msg: &str) {
        *self.error_on_submit.lock().unwrap() = Some(msg.to_string());
    }

    /// Set the pending submissions the review API returns
    pub fn set_pending(&self, submissions: Vec<Submission>) {
        *self.pending.lock().unwrap() = submissions;
    }

    /// Set the payload `regenerate_image` returns
    pub fn set_regenerate_response(&self, payload: &str) {
        *self.regenerate_response.lock().unwrap() = payload.to_string();
    }

    /// Set the candidate list `generate_variations` returns
    pub fn set_variations_response(&self, payloads: Vec<String>) {
        *self.variations_response.lock().unwrap() = payloads;
    }

    /// Delay every review mutation by the given (virtual) duration
    pub fn set_review_delay(&self, delay: Duration) {
        *self.review_delay.lock().unwrap() = Some(delay);
    }

    /// Make `approve` fail
    pub fn fail_approve(&self, msg: &str) {
        *self.error_on_approve.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `reject` fail
    pub fn fail_reject(&self, msg: &str) {
        *self.error_on_reject.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `regenerate_image` fail
    pub fn fail_regenerate(&self, msg: &str) {
        *self.error_on_regenerate.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `generate_variations` fail
    pub fn fail_variations(&self, msg: &str) {
        *self.error_on_variations.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `select_variation` fail
    pub fn fail_select(&self, msg: &str) {
        *self.error_on_select.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification ===

    /// All recorded `submit` calls
    pub fn get_submit_calls(&self) -> Vec<SubmitCall> {
        self.submit_calls.lock().unwrap().clone()
    }

    /// All recorded `approve` calls
    pub fn get_approve_calls(&self) -> Vec<ApproveCall> {
        self.approve_calls.lock().unwrap().clone()
    }

    /// All recorded `reject` calls (submission ids)
    pub fn get_reject_calls(&self) -> Vec<String> {
        self.reject_calls.lock().unwrap().clone()
    }

    /// All recorded `regenerate_image` calls
    pub fn get_regenerate_calls(&self) -> Vec<RegenerateCall> {
        self.regenerate_calls.lock().unwrap().clone()
    }

    /// All recorded `generate_variations` calls (submission ids)
    pub fn get_variations_calls(&self) -> Vec<String> {
        self.variations_calls.lock().unwrap().clone()
    }

    /// All recorded `select_variation` calls
    pub fn get_select_calls(&self) -> Vec<SelectCall> {
        self.select_calls.lock().unwrap().clone()
    }

    async fn apply_review_delay(&self) {
        let delay = *self.review_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn injected(slot: &Mutex<Option<String>>) -> Option<Error> {
        slot.lock().unwrap().as_ref().map(|m| Error::Review(m.clone()))
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IntakeTransport for MockApi {
    async fn submit(&self, request: &IntakeRequest, route: &RoutePolicy) -> Result<TransportReply> {
        self.submit_calls.lock().unwrap().push(SubmitCall {
            author: request.author.clone(),
            route: route.route,
            timeout: route.timeout,
        });

        let delay = *self.submit_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(msg) = self.error_on_submit.lock().unwrap().as_ref() {
            return Err(Error::Transport(msg.clone()));
        }

        Ok(self.intake_reply.lock().unwrap().clone())
    }
}

#[async_trait]
impl ReviewApi for MockApi {
    async fn pending_submissions(&self) -> Result<Vec<Submission>> {
        Ok(self.pending.lock().unwrap().clone())
    }

    async fn approve(&self, id: &str, edited_post: &str) -> Result<()> {
        self.approve_calls.lock().unwrap().push(ApproveCall {
            id: id.to_string(),
            edited_post: edited_post.to_string(),
        });
        self.apply_review_delay().await;
        if let Some(err) = Self::injected(&self.error_on_approve) {
            return Err(err);
        }
        Ok(())
    }

    async fn reject(&self, id: &str, _reason: Option<&str>) -> Result<()> {
        self.reject_calls.lock().unwrap().push(id.to_string());
        self.apply_review_delay().await;
        if let Some(err) = Self::injected(&self.error_on_reject) {
            return Err(err);
        }
        Ok(())
    }

    async fn regenerate_image(&self, id: &str, feedback: &str) -> Result<String> {
        self.regenerate_calls.lock().unwrap().push(RegenerateCall {
            id: id.to_string(),
            feedback: feedback.to_string(),
        });
        self.apply_review_delay().await;
        if let Some(err) = Self::injected(&self.error_on_regenerate) {
            return Err(err);
        }
        Ok(self.regenerate_response.lock().unwrap().clone())
    }

    async fn generate_variations(&self, id: &str) -> Result<Vec<String>> {
        self.variations_calls.lock().unwrap().push(id.to_string());
        self.apply_review_delay().await;
        if let Some(err) = Self::injected(&self.error_on_variations) {
            return Err(err);
        }
        Ok(self.variations_response.lock().unwrap().clone())
    }

    async fn select_variation(&self, id: &str, payload: &str) -> Result<()> {
        self.select_calls.lock().unwrap().push(SelectCall {
            id: id.to_string(),
            payload: payload.to_string(),
        });
        self.apply_review_delay().await;
        if let Some(err) = Self::injected(&self.error_on_select) {
            return Err(err);
        }
        Ok(())
    }
}

/// Progress event recorded by [`RecordingProgress`]
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Stage transition
    Stage(Stage),
    /// Elapsed-time tick
    Tick(Duration),
    /// Failure report
    Error(String),
    /// Free-form message
    Message(String),
}

/// Progress callback that records every event for assertions
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<ProgressEvent>>,
}

impl RecordingProgress {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Every event, in order
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Just the stage transitions, in order
    pub fn stages(&self) -> Vec<Stage> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ProgressEvent::Stage(stage) => Some(stage),
                _ => None,
            })
            .collect()
    }

    /// Just the tick durations, in order
    pub fn ticks(&self) -> Vec<Duration> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ProgressEvent::Tick(elapsed) => Some(elapsed),
                _ => None,
            })
            .collect()
    }

    /// Recorded error messages
    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ProgressEvent::Error(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_stage(&self, stage: Stage) {
        self.events.lock().unwrap().push(ProgressEvent::Stage(stage));
    }

    async fn on_tick(&self, elapsed: Duration) {
        self.events.lock().unwrap().push(ProgressEvent::Tick(elapsed));
    }

    async fn on_error(&self, error: &Error) {
        self.events
            .lock()
            .unwrap()
            .push(ProgressEvent::Error(error.to_string()));
    }

    async fn on_message(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(ProgressEvent::Message(message.to_string()));
    }
}
