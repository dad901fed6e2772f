//! Collaborator interfaces for the processing endpoint
//!
//! Two seams: [`IntakeTransport`] carries the single long-running submission
//! call, [`ReviewApi`] the review-side operations. Both are object-safe so
//! the pipeline and the review state machine can be driven against mocks.

mod http;

pub use http::HttpApi;

use crate::error::Result;
use crate::types::{ChartData, DataSource, GraphicType, RoutePolicy, Submission, UploadedImage};
use async_trait::async_trait;
use serde::Deserialize;

/// Normalized intake request, ready to be sent as a multipart form
#[derive(Debug, Clone)]
pub struct IntakeRequest {
    /// Submission author
    pub author: String,
    /// Raw idea text, when drafting was requested
    pub idea: Option<String>,
    /// Graphic description, when a graphic was requested
    pub graphic_description: Option<String>,
    /// Resolved graphic type accompanying the description
    pub graphic_type: Option<GraphicType>,
    /// Manually entered chart values
    pub chart_data: Option<ChartData>,
    /// Sourced data points (including any auto-inserted placeholder)
    pub data_sources: Vec<DataSource>,
    /// Research URLs, already validated and de-blanked
    pub research_urls: Vec<String>,
    /// User-supplied image, bypassing generation
    pub uploaded_image: Option<UploadedImage>,
}

/// Raw reply from the intake endpoint, before verification
#[derive(Debug, Clone)]
pub struct TransportReply {
    /// HTTP status code
    pub status: u16,
    /// Response body, unparsed
    pub body: String,
}

/// Parsed intake response body.
///
/// A missing success field deserializes as `false`: the server must say
/// success explicitly, transport-level success is never enough.
#[derive(Debug, Clone, Deserialize)]
pub struct IntakeReply {
    /// Explicit success indicator
    #[serde(default)]
    pub success: bool,
    /// Server-supplied status message
    #[serde(default)]
    pub message: Option<String>,
}

/// Transport for the long-running intake call
///
/// Implementations send the request over the route the policy selects and
/// return the raw reply; completion verification happens in the executor.
/// Cancellation is cooperative: dropping the returned future aborts the call.
#[async_trait]
pub trait IntakeTransport: Send + Sync {
    /// Send one submission to the processing endpoint
    async fn submit(&self, request: &IntakeRequest, route: &RoutePolicy) -> Result<TransportReply>;
}

/// Review-side collaborator surface
///
/// Mirrors the processing endpoint's review operations. Implementations
/// report failures as errors; callers commit local state only on `Ok`.
#[async_trait]
pub trait ReviewApi: Send + Sync {
    /// List all submissions awaiting review, newest first
    async fn pending_submissions(&self) -> Result<Vec<Submission>>;

    /// Approve a submission with the reviewer's edited text
    async fn approve(&self, id: &str, edited_post: &str) -> Result<()>;

    /// Reject a submission, with an optional reason
    async fn reject(&self, id: &str, reason: Option<&str>) -> Result<()>;

    /// Regenerate the graphic from feedback; returns the new payload
    async fn regenerate_image(&self, id: &str, feedback: &str) -> Result<String>;

    /// Generate candidate graphic payloads to choose from
    async fn generate_variations(&self, id: &str) -> Result<Vec<String>>;

    /// Commit one candidate payload as the canonical graphic
    async fn select_variation(&self, id: &str, payload: &str) -> Result<()>;
}
