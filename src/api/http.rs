//! HTTP implementation of the collaborator interfaces

use crate::api::{IntakeRequest, IntakeTransport, ReviewApi, TransportReply};
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::types::{Route, RoutePolicy, Submission};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Client timeout for review operations that trigger generation
const GENERATION_TIMEOUT: Duration = Duration::from_secs(300);

/// Client timeout for plain review operations
const REVIEW_TIMEOUT: Duration = Duration::from_secs(30);

/// Error body shape used by the processing endpoint
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    detail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RegenerateReply {
    new_image_data: String,
}

#[derive(Debug, Deserialize)]
struct VariationsReply {
    variations: Vec<String>,
}

/// reqwest-backed implementation of [`IntakeTransport`] and [`ReviewApi`]
pub struct HttpApi {
    http: reqwest::Client,
    config: ApiConfig,
}

impl HttpApi {
    /// Create a client for the configured endpoints.
    ///
    /// No default request timeout is set: the intake deadline belongs to the
    /// executor, and review calls set their own per-request timeouts.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Internal(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    fn endpoint(&self, base: &Url, path: &str) -> Result<Url> {
        base.join(path)
            .map_err(|e| Error::Internal(format!("bad endpoint path {path}: {e}")))
    }

    fn review_endpoint(&self, operation: &str, id: &str) -> Result<Url> {
        // Review operations always hit the processing endpoint directly;
        // regeneration through a relay would hit the same short timeout the
        // intake routing avoids.
        let path = format!("api/{operation}/{}", urlencoding::encode(id));
        self.endpoint(&self.config.direct_base, &path)
    }

    /// Interpret a review response: non-2xx and explicit non-success both
    /// fail, preferring the server's own message.
    async fn read_review_reply(response: reqwest::Response, operation: &str) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|e| e.detail)
                .unwrap_or_else(|| format!("{operation} failed with status {status}"));
            return Err(Error::Review(detail));
        }
        Ok(body)
    }
}

#[async_trait]
impl IntakeTransport for HttpApi {
    async fn submit(&self, request: &IntakeRequest, route: &RoutePolicy) -> Result<TransportReply> {
        let base = match route.route {
            Route::Direct => &self.config.direct_base,
            Route::Relay => &self.config.relay_base,
        };
        let url = self.endpoint(base, "api/submit-idea")?;
        debug!(%url, route = %route.route, "sending intake request");

        let mut form = Form::new().text("author", request.author.clone());
        if let Some(idea) = &request.idea {
            form = form.text("idea", idea.clone());
        }
        if let Some(description) = &request.graphic_description {
            form = form.text("graphic_description", description.clone());
        }
        if let Some(graphic_type) = request.graphic_type {
            form = form.text("graphic_type", graphic_type.as_str());
        }
        if let Some(chart_data) = &request.chart_data {
            form = form.text("chart_data", encode_json(chart_data)?);
        }
        if !request.data_sources.is_empty() {
            form = form.text("data_sources", encode_json(&request.data_sources)?);
        }
        if !request.research_urls.is_empty() {
            form = form.text("research_urls", encode_json(&request.research_urls)?);
        }
        if let Some(image) = &request.uploaded_image {
            let part = Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str("application/octet-stream")
                .map_err(|e| Error::Internal(format!("bad upload mime type: {e}")))?;
            form = form.part("image_file", part);
        }

        let response = self.http.post(url).multipart(form).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportReply { status, body })
    }
}

#[async_trait]
impl ReviewApi for HttpApi {
    async fn pending_submissions(&self) -> Result<Vec<Submission>> {
        let url = self.endpoint(&self.config.direct_base, "api/pending-submissions")?;
        let response = self.http.get(url).timeout(REVIEW_TIMEOUT).send().await?;
        let body = Self::read_review_reply(response, "pending-submissions").await?;
        serde_json::from_str(&body)
            .map_err(|e| Error::Review(format!("malformed submission list: {e}")))
    }

    async fn approve(&self, id: &str, edited_post: &str) -> Result<()> {
        let url = self.review_endpoint("approve-submission", id)?;
        let response = self
            .http
            .post(url)
            .timeout(REVIEW_TIMEOUT)
            .json(&json!({ "edited_post": edited_post }))
            .send()
            .await?;
        Self::read_review_reply(response, "approve").await?;
        Ok(())
    }

    async fn reject(&self, id: &str, reason: Option<&str>) -> Result<()> {
        let url = self.review_endpoint("reject-submission", id)?;
        let response = self
            .http
            .post(url)
            .timeout(REVIEW_TIMEOUT)
            .json(&json!({ "reason": reason }))
            .send()
            .await?;
        Self::read_review_reply(response, "reject").await?;
        Ok(())
    }

    async fn regenerate_image(&self, id: &str, feedback: &str) -> Result<String> {
        let url = self.review_endpoint("regenerate-image", id)?;
        let response = self
            .http
            .post(url)
            .timeout(GENERATION_TIMEOUT)
            .json(&json!({ "feedback": feedback }))
            .send()
            .await?;
        let body = Self::read_review_reply(response, "regenerate").await?;
        let reply: RegenerateReply = serde_json::from_str(&body)
            .map_err(|e| Error::Review(format!("malformed regenerate response: {e}")))?;
        Ok(reply.new_image_data)
    }

    async fn generate_variations(&self, id: &str) -> Result<Vec<String>> {
        let url = self.review_endpoint("generate-variations", id)?;
        let response = self
            .http
            .post(url)
            .timeout(GENERATION_TIMEOUT)
            .send()
            .await?;
        let body = Self::read_review_reply(response, "generate-variations").await?;
        let reply: VariationsReply = serde_json::from_str(&body)
            .map_err(|e| Error::Review(format!("malformed variations response: {e}")))?;
        Ok(reply.variations)
    }

    async fn select_variation(&self, id: &str, payload: &str) -> Result<()> {
        let url = self.review_endpoint("select-variation", id)?;
        let response = self
            .http
            .post(url)
            .timeout(REVIEW_TIMEOUT)
            .json(&json!({ "image_data": payload }))
            .send()
            .await?;
        Self::read_review_reply(response, "select-variation").await?;
        Ok(())
    }
}

fn encode_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value)
        .map_err(|e| Error::Internal(format!("failed to encode form field: {e}")))
}
