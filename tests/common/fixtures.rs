//! Test data factories for claris types
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{Duration, Utc};
use claris::types::{
    ChartData, DataSource, GraphicType, IntakeFields, ResearchResult, SourceType, Submission,
    SubmissionStatus,
};
use uuid::Uuid;

/// Generate a unique submission id
pub fn unique_id() -> String {
    format!("sub-{}", &Uuid::new_v4().to_string()[..8])
}

/// Create a pending submission with default values
pub fn make_submission(id: &str) -> Submission {
    Submission {
        id: id.to_string(),
        author: "Dana".to_string(),
        raw_input: "supply chain trend".to_string(),
        ai_draft: Some("Draft about the supply chain trend.".to_string()),
        graphic_description: None,
        graphic_type: GraphicType::None,
        graphic_data: None,
        status: SubmissionStatus::PendingReview,
        created_at: Utc::now(),
        reviewed_at: None,
        data_sources: vec![],
        research_results: vec![],
    }
}

/// Create a pending submission created some minutes ago
pub fn make_submission_at(id: &str, minutes_ago: i64) -> Submission {
    Submission {
        created_at: Utc::now() - Duration::minutes(minutes_ago),
        ..make_submission(id)
    }
}

/// Create a pending submission with a generated image graphic
pub fn make_graphic_submission(id: &str, graphic_type: GraphicType) -> Submission {
    Submission {
        graphic_description: Some("freight cost bar chart".to_string()),
        graphic_type,
        graphic_data: Some(make_image_payload("original")),
        ..make_submission(id)
    }
}

/// Create a pending submission with a generated video graphic
pub fn make_video_submission(id: &str) -> Submission {
    Submission {
        graphic_description: Some("animated logistics flow".to_string()),
        graphic_type: GraphicType::Video,
        graphic_data: Some(make_video_payload("original")),
        ..make_submission(id)
    }
}

/// Build an image payload with a data-URI header
pub fn make_image_payload(seed: &str) -> String {
    format!(
        "data:image/png;base64,{}",
        BASE64.encode(format!("png:{seed}"))
    )
}

/// Build a video payload with a data-URI header
pub fn make_video_payload(seed: &str) -> String {
    format!(
        "data:video/mp4;base64,{}",
        BASE64.encode(format!("mp4:{seed}"))
    )
}

/// Intake fields with only an idea
pub fn idea_fields() -> IntakeFields {
    IntakeFields {
        author: "Dana".to_string(),
        idea: Some("supply chain trend".to_string()),
        ..IntakeFields::default()
    }
}

/// Intake fields requesting a video graphic
pub fn video_fields() -> IntakeFields {
    IntakeFields {
        author: "Dana".to_string(),
        graphic_description: Some("animated logistics flow".to_string()),
        add_graphic: true,
        ..IntakeFields::default()
    }
}

/// Intake fields with an idea plus research URLs
pub fn research_fields() -> IntakeFields {
    IntakeFields {
        research_urls: vec!["https://example.com/report".to_string()],
        ..idea_fields()
    }
}

/// Intake fields with chart values but no explicit sources
pub fn chart_fields() -> IntakeFields {
    IntakeFields {
        graphic_description: Some("line chart of revenue".to_string()),
        add_graphic: true,
        graphic_type: Some(GraphicType::Chart),
        chart_data: Some(ChartData {
            start_value: "$100K".to_string(),
            end_value: "$150K".to_string(),
            time_period: "6 months".to_string(),
            data_points: String::new(),
        }),
        ..idea_fields()
    }
}

/// A data source entry with default values
pub fn make_data_source(data_point: &str) -> DataSource {
    DataSource {
        data_point: data_point.to_string(),
        value: "94%".to_string(),
        source_type: SourceType::Client,
        source_description: None,
    }
}

/// A successful research result for a URL
pub fn make_research_result(url: &str) -> ResearchResult {
    ResearchResult {
        url: url.to_string(),
        source_name: "example.com".to_string(),
        extracted_facts: vec![],
        summary: "Freight costs rose through the year.".to_string(),
        relevance_score: 7,
        error: false,
    }
}
