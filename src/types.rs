//! Core types for claris

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Category of graphic attached to a submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphicType {
    /// Data chart (bar, line, pie, ...)
    Chart,
    /// Structural diagram (flowchart, architecture, ...)
    Diagram,
    /// Conceptual rendered image
    Concept,
    /// Text-heavy infographic
    Infographic,
    /// Short generated video
    Video,
    /// No graphic requested
    #[default]
    None,
}

impl GraphicType {
    /// Whether this type selects the video generation path
    pub const fn is_video(self) -> bool {
        matches!(self, Self::Video)
    }

    /// The literal token persisted for this type
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chart => "chart",
            Self::Diagram => "diagram",
            Self::Concept => "concept",
            Self::Infographic => "infographic",
            Self::Video => "video",
            Self::None => "none",
        }
    }
}

impl fmt::Display for GraphicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphicType {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chart" => Ok(Self::Chart),
            "diagram" => Ok(Self::Diagram),
            "concept" | "conceptual" => Ok(Self::Concept),
            "infographic" => Ok(Self::Infographic),
            "video" => Ok(Self::Video),
            "none" => Ok(Self::None),
            other => Err(crate::error::Error::Validation(format!(
                "unknown graphic type: {other}"
            ))),
        }
    }
}

/// Review status of a submission
///
/// `PendingReview` is the only state in which mutations are allowed;
/// the other two are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// Awaiting review
    PendingReview,
    /// Approved for publication (terminal)
    Approved,
    /// Rejected (terminal)
    Rejected,
}

impl SubmissionStatus {
    /// The literal token persisted for this status
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PendingReview => "pending_review",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provenance of a quoted data point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Personal knowledge or experience
    Personal,
    /// Client data (confidential)
    Client,
    /// Published industry report
    IndustryReport,
    /// Web source
    WebSource,
    /// Illustrative/example data, not real
    Illustrative,
}

/// A sourced data point supplied with a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    /// What the value measures
    pub data_point: String,
    /// The value itself, as entered
    pub value: String,
    /// Where the value came from
    pub source_type: SourceType,
    /// Free-text elaboration on the source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_description: Option<String>,
}

/// A single fact extracted from a research URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFact {
    /// The fact text
    pub fact: String,
    /// Fact kind: statistic, quote, finding, trend
    #[serde(rename = "type")]
    pub kind: String,
    /// Ready-to-use citation line
    pub citation_text: String,
}

/// Extraction result for one research URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchResult {
    /// The fetched URL
    pub url: String,
    /// Human-readable source name (usually the host)
    pub source_name: String,
    /// Facts extracted from the page, in document order
    #[serde(default)]
    pub extracted_facts: Vec<ExtractedFact>,
    /// Short summary of the relevant content
    #[serde(default)]
    pub summary: String,
    /// Relevance to the submission topic, 0-10
    #[serde(default)]
    pub relevance_score: u8,
    /// Set when fetch or extraction failed for this URL
    #[serde(default)]
    pub error: bool,
}

/// Manually entered chart values
///
/// All fields are free text; the generation side interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    /// Value at the start of the period
    #[serde(default)]
    pub start_value: String,
    /// Value at the end of the period
    #[serde(default)]
    pub end_value: String,
    /// Time period the values span
    #[serde(default)]
    pub time_period: String,
    /// Explicit data points, e.g. "Q1: 100, Q2: 120"
    #[serde(default)]
    pub data_points: String,
}

impl ChartData {
    /// Whether any numeric field is populated
    pub fn has_values(&self) -> bool {
        !self.data_points.trim().is_empty()
            || (!self.start_value.trim().is_empty() && !self.end_value.trim().is_empty())
    }
}

/// A persisted content submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Store-assigned identifier
    pub id: String,
    /// Who submitted the idea
    pub author: String,
    /// The raw idea text as entered
    #[serde(default)]
    pub raw_input: String,
    /// Generated draft, later replaced by the reviewer's edited text
    #[serde(default)]
    pub ai_draft: Option<String>,
    /// Free-text description of the requested graphic
    #[serde(default)]
    pub graphic_description: Option<String>,
    /// Category of the requested graphic
    #[serde(default)]
    pub graphic_type: GraphicType,
    /// Canonical graphic payload (self-describing encoded media)
    #[serde(default)]
    pub graphic_data: Option<String>,
    /// Review status
    pub status: SubmissionStatus,
    /// When the submission was created
    pub created_at: DateTime<Utc>,
    /// When the submission was approved or rejected
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
    /// Sourced data points, in entry order
    #[serde(default)]
    pub data_sources: Vec<DataSource>,
    /// Research extraction results, in URL order
    ///
    /// The store column kept its historical name, hence the alias.
    #[serde(default, alias = "research_urls")]
    pub research_results: Vec<ResearchResult>,
}

impl Submission {
    /// Whether graphic regeneration/variations are available.
    ///
    /// Requires both a type and a description; uploads without a
    /// description cannot be regenerated.
    pub fn generation_enabled(&self) -> bool {
        self.graphic_type != GraphicType::None
            && self
                .graphic_description
                .as_deref()
                .is_some_and(|d| !d.trim().is_empty())
    }
}

/// An image file uploaded alongside a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    /// Original file name, used for the multipart part
    pub file_name: String,
    /// Raw file bytes
    pub bytes: Vec<u8>,
}

/// Raw intake form fields, prior to validation and normalization
#[derive(Debug, Clone, Default)]
pub struct IntakeFields {
    /// Submission author (required)
    pub author: String,
    /// Raw idea text
    pub idea: Option<String>,
    /// Graphic description
    pub graphic_description: Option<String>,
    /// Whether a graphic was requested
    pub add_graphic: bool,
    /// Explicit graphic type; `None` means auto-detect from the description
    pub graphic_type: Option<GraphicType>,
    /// Manually entered chart values
    pub chart_data: Option<ChartData>,
    /// Sourced data points
    pub data_sources: Vec<DataSource>,
    /// Research URLs to extract facts from
    pub research_urls: Vec<String>,
    /// User-supplied image, bypassing graphic generation
    pub uploaded_image: Option<UploadedImage>,
}

/// Which path a request takes to the processing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Default path through the request relay
    Relay,
    /// Straight to the processing endpoint, bypassing the relay.
    ///
    /// Relays enforce a short hard timeout unsuitable for multi-minute
    /// generation, so long-running work must not pass through them.
    Direct,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relay => f.write_str("relay"),
            Self::Direct => f.write_str("direct"),
        }
    }
}

/// Routing and timeout policy for one submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutePolicy {
    /// Which path the request takes
    pub route: Route,
    /// How long the executor waits before cancelling the call
    pub timeout: Duration,
}
