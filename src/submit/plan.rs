//! Phase 2: Submission planning
//!
//! Pure policy: which pipeline stages apply to a submission, and which route
//! and timeout its processing call gets. Both are computed once at plan time
//! and never re-evaluated mid-flight.

use crate::api::IntakeRequest;
use crate::error::Result;
use crate::submit::intake::normalize_intake;
use crate::submit::progress::Stage;
use crate::types::{GraphicType, IntakeFields, Route, RoutePolicy};
use std::time::Duration;

/// Timeout for video generation requests
pub const VIDEO_TIMEOUT: Duration = Duration::from_secs(600);

/// Timeout for other long-running requests (research extraction)
pub const EXTENDED_TIMEOUT: Duration = Duration::from_secs(300);

/// Timeout for requests on the default relay path
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// A planned submission: the normalized request plus the policy decisions
#[derive(Debug, Clone)]
pub struct SubmissionPlan {
    /// Normalized request, ready for the transport
    pub request: IntakeRequest,
    /// Applicable pipeline stages, in execution order
    /// (subset of research, draft, graphic)
    pub stages: Vec<Stage>,
    /// Route and timeout for the processing call
    pub route: RoutePolicy,
}

impl SubmissionPlan {
    /// The full stage sequence shown to the user: preparing, the applicable
    /// pipeline stages, then saving and complete.
    pub fn display_stages(&self) -> Vec<Stage> {
        let mut stages = Vec::with_capacity(self.stages.len() + 3);
        stages.push(Stage::Preparing);
        stages.extend(&self.stages);
        stages.push(Stage::Saving);
        stages.push(Stage::Complete);
        stages
    }
}

/// Plan a submission from raw intake fields.
///
/// Validation failures surface here, before any network activity.
pub fn plan_submission(fields: IntakeFields) -> Result<SubmissionPlan> {
    let request = normalize_intake(fields)?;
    let stages = applicable_stages(&request);
    let route = route_policy(&request);
    Ok(SubmissionPlan {
        request,
        stages,
        route,
    })
}

/// Which pipeline stages run for this request.
///
/// - research: at least one research URL
/// - draft: idea text present
/// - graphic: graphic requested with a description
///
/// Fixed relative order; skipped stages do not gate later ones.
pub fn applicable_stages(request: &IntakeRequest) -> Vec<Stage> {
    let mut stages = Vec::new();
    if !request.research_urls.is_empty() {
        stages.push(Stage::Research);
    }
    if request.idea.is_some() {
        stages.push(Stage::Draft);
    }
    if request.graphic_description.is_some() {
        stages.push(Stage::Graphic);
    }
    stages
}

/// Route and timeout for this request.
///
/// Long-running work (video generation, or any research extraction) bypasses
/// the relay and gets an extended timeout; everything else takes the relay
/// with the default timeout.
pub fn route_policy(request: &IntakeRequest) -> RoutePolicy {
    let video = request.graphic_type == Some(GraphicType::Video);
    let research = !request.research_urls.is_empty();

    if video {
        RoutePolicy {
            route: Route::Direct,
            timeout: VIDEO_TIMEOUT,
        }
    } else if research {
        RoutePolicy {
            route: Route::Direct,
            timeout: EXTENDED_TIMEOUT,
        }
    } else {
        RoutePolicy {
            route: Route::Relay,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
