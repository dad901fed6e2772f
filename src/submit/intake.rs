//! Phase 1: Intake validation and normalization
//!
//! Turns raw form fields into a request the transport can send. Everything
//! here runs before any network call, so a rejection leaves no state behind.

use crate::api::IntakeRequest;
use crate::classify::classify;
use crate::error::{Error, Result};
use crate::types::{DataSource, GraphicType, IntakeFields, SourceType};
use url::Url;

/// Validate and normalize intake fields.
///
/// Rules:
/// - author is required
/// - there must be usable content: a non-empty idea, or a non-empty graphic
///   description with a graphic requested
/// - research URLs are trimmed, blanks dropped, and the rest must parse
/// - chart values without any explicit data source get a provisional
///   "Chart data" placeholder entry
/// - a requested graphic with no explicit type is classified from the
///   description
pub fn normalize_intake(fields: IntakeFields) -> Result<IntakeRequest> {
    let author = fields.author.trim().to_string();
    if author.is_empty() {
        return Err(Error::Validation("author is required".into()));
    }

    let idea = fields
        .idea
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string);

    // A description only counts when a graphic was actually requested
    let requested_graphic = if fields.add_graphic {
        fields
            .graphic_description
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
    } else {
        None
    };

    if idea.is_none() && requested_graphic.is_none() {
        return Err(Error::Validation(
            "provide an idea, or a graphic description with a graphic requested".into(),
        ));
    }

    let research_urls = normalize_research_urls(&fields.research_urls)?;

    let mut data_sources = fields.data_sources;
    let chart_has_values = fields.chart_data.as_ref().is_some_and(|c| c.has_values());
    if chart_has_values && data_sources.is_empty() {
        // Placeholder, not an assertion of provenance
        data_sources.push(DataSource {
            data_point: "Chart data".into(),
            value: String::new(),
            source_type: SourceType::Personal,
            source_description: None,
        });
    }

    let (graphic_description, graphic_type) = match requested_graphic {
        Some(description) => {
            let graphic_type = match fields.graphic_type {
                Some(t) if t != GraphicType::None => t,
                // No explicit pick (or "none"/auto): classify from the text
                _ => classify(&description),
            };
            (Some(description), Some(graphic_type))
        }
        None => (None, None),
    };

    Ok(IntakeRequest {
        author,
        idea,
        graphic_description,
        graphic_type,
        chart_data: fields.chart_data,
        data_sources,
        research_urls,
        uploaded_image: fields.uploaded_image,
    })
}

fn normalize_research_urls(raw: &[String]) -> Result<Vec<String>> {
    let mut urls = Vec::new();
    for entry in raw {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            continue;
        }
        Url::parse(trimmed)
            .map_err(|e| Error::Validation(format!("invalid research URL '{trimmed}': {e}")))?;
        urls.push(trimmed.to_string());
    }
    Ok(urls)
}
