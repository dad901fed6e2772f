//! Review workflow state machine
//!
//! Submissions arrive as `pending_review` and end as `approved` or
//! `rejected` (terminal, no field changes after). While pending, the graphic
//! payload can be regenerated or swapped for a variation. Every mutation:
//! - holds the submission's lock for its whole duration (one operation in
//!   flight per submission; a second one fails fast)
//! - validates before any collaborator call
//! - commits to the local cache only after the collaborator confirms

mod locks;
mod store;

pub use locks::{LockGuard, SubmissionLocks};
pub use store::SubmissionCache;

use crate::api::ReviewApi;
use crate::error::{Error, Result};
use crate::media;
use crate::types::{GraphicType, Submission, SubmissionStatus};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::info;

/// Review-side limits
#[derive(Debug, Clone)]
pub struct ReviewConfig {
    /// Maximum character count for an approved post
    pub post_length_budget: usize,
    /// Maximum character count for regeneration feedback
    pub feedback_length_budget: usize,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            post_length_budget: 3000,
            feedback_length_budget: 1000,
        }
    }
}

/// Drives review operations against the collaborator API
pub struct ReviewService {
    api: Arc<dyn ReviewApi>,
    cache: SubmissionCache,
    locks: SubmissionLocks,
    /// Ephemeral variation candidates per submission; never persisted
    variations: Mutex<HashMap<String, Vec<String>>>,
    config: ReviewConfig,
}

impl ReviewService {
    /// Create a service with default limits
    pub fn new(api: Arc<dyn ReviewApi>) -> Self {
        Self::with_config(api, ReviewConfig::default())
    }

    /// Create a service with explicit limits
    pub fn with_config(api: Arc<dyn ReviewApi>, config: ReviewConfig) -> Self {
        Self {
            api,
            cache: SubmissionCache::new(),
            locks: SubmissionLocks::new(),
            variations: Mutex::new(HashMap::new()),
            config,
        }
    }

    /// Fetch the pending queue from the collaborator and refresh the cache.
    ///
    /// Returns the pending projection, newest first.
    pub async fn refresh(&self) -> Result<Vec<Submission>> {
        let submissions = self.api.pending_submissions().await?;
        info!(count = submissions.len(), "fetched pending submissions");
        self.cache.replace_all(submissions);
        Ok(self.cache.pending())
    }

    /// Pending submissions, newest first (cached projection)
    pub fn pending(&self) -> Vec<Submission> {
        self.cache.pending()
    }

    /// One submission by id (cached projection)
    pub fn submission(&self, id: &str) -> Option<Submission> {
        self.cache.get(id)
    }

    /// The most recent variation candidates for a submission, if any
    pub fn variations_for(&self, id: &str) -> Option<Vec<String>> {
        self.variations
            .lock()
            .expect("variation map poisoned")
            .get(id)
            .cloned()
    }

    /// Approve a submission with the reviewer's edited text.
    ///
    /// Rejected without a transition when the text is empty or over the post
    /// length budget.
    pub async fn approve(&self, id: &str, edited_text: &str) -> Result<Submission> {
        let _guard = self.locks.try_acquire(id)?;
        self.require_pending(id)?;

        if edited_text.trim().is_empty() {
            return Err(Error::Validation("edited post must not be empty".into()));
        }
        let length = edited_text.chars().count();
        if length > self.config.post_length_budget {
            return Err(Error::Validation(format!(
                "edited post is {length} characters; the budget is {}",
                self.config.post_length_budget
            )));
        }

        self.api.approve(id, edited_text).await?;

        info!(id, "submission approved");
        self.cache.apply(id, |s| {
            s.status = SubmissionStatus::Approved;
            s.ai_draft = Some(edited_text.to_string());
            s.reviewed_at = Some(Utc::now());
        })
    }

    /// Reject a submission, optionally recording a reason.
    ///
    /// Always succeeds from `pending_review`.
    pub async fn reject(&self, id: &str, reason: Option<&str>) -> Result<Submission> {
        let _guard = self.locks.try_acquire(id)?;
        self.require_pending(id)?;

        self.api.reject(id, reason).await?;

        info!(id, "submission rejected");
        self.cache.apply(id, |s| {
            s.status = SubmissionStatus::Rejected;
            s.reviewed_at = Some(Utc::now());
        })
    }

    /// Regenerate the graphic from reviewer feedback and replace the
    /// canonical payload. Status is unchanged.
    pub async fn regenerate(&self, id: &str, feedback: &str) -> Result<String> {
        let _guard = self.locks.try_acquire(id)?;
        let submission = self.require_pending(id)?;
        Self::require_generation_enabled(&submission)?;

        if feedback.trim().is_empty() {
            return Err(Error::Validation("feedback must not be empty".into()));
        }
        let length = feedback.chars().count();
        if length > self.config.feedback_length_budget {
            return Err(Error::Validation(format!(
                "feedback is {length} characters; the budget is {}",
                self.config.feedback_length_budget
            )));
        }

        let payload = self.api.regenerate_image(id, feedback).await?;
        let kind = Self::check_payload(&payload)?;
        info!(id, ?kind, "graphic regenerated");

        self.cache.apply(id, |s| {
            s.graphic_data = Some(payload.clone());
        })?;
        Ok(payload)
    }

    /// Generate candidate graphic payloads for the reviewer to choose from.
    ///
    /// The result replaces any previous candidate list for this submission
    /// and is never persisted as canonical. Not available for video.
    pub async fn generate_variations(&self, id: &str) -> Result<Vec<String>> {
        let _guard = self.locks.try_acquire(id)?;
        let submission = self.require_pending(id)?;
        Self::require_generation_enabled(&submission)?;
        if submission.graphic_type == GraphicType::Video {
            return Err(Error::Validation(
                "variations are not available for video content".into(),
            ));
        }

        let candidates = self.api.generate_variations(id).await?;
        if candidates.is_empty() {
            return Err(Error::Review("collaborator returned no variations".into()));
        }
        for candidate in &candidates {
            Self::check_payload(candidate)?;
        }
        info!(id, count = candidates.len(), "variations generated");

        self.variations
            .lock()
            .expect("variation map poisoned")
            .insert(id.to_string(), candidates.clone());
        Ok(candidates)
    }

    /// Commit one candidate from the most recent variation list as the
    /// canonical payload, discarding the list.
    pub async fn select_variation(&self, id: &str, payload: &str) -> Result<Submission> {
        let _guard = self.locks.try_acquire(id)?;
        self.require_pending(id)?;

        let is_candidate = self
            .variations
            .lock()
            .expect("variation map poisoned")
            .get(id)
            .is_some_and(|candidates| candidates.iter().any(|c| c == payload));
        if !is_candidate {
            return Err(Error::Validation(
                "payload is not one of the generated variations".into(),
            ));
        }

        let kind = Self::check_payload(payload)?;
        self.api.select_variation(id, payload).await?;
        info!(id, ?kind, "variation selected");

        let updated = self.cache.apply(id, |s| {
            s.graphic_data = Some(payload.to_string());
        })?;
        self.variations
            .lock()
            .expect("variation map poisoned")
            .remove(id);
        Ok(updated)
    }

    /// Look up a cached submission and require it to still be pending
    fn require_pending(&self, id: &str) -> Result<Submission> {
        let submission = self
            .cache
            .get(id)
            .ok_or_else(|| Error::SubmissionNotFound(id.to_string()))?;
        if submission.status != SubmissionStatus::PendingReview {
            return Err(Error::Validation(format!(
                "submission {id} is not pending review (status: {})",
                submission.status
            )));
        }
        Ok(submission)
    }

    fn require_generation_enabled(submission: &Submission) -> Result<()> {
        if submission.generation_enabled() {
            Ok(())
        } else {
            Err(Error::Validation(
                "this submission does not have graphic generation enabled".into(),
            ))
        }
    }

    /// Classify a collaborator-returned payload, rejecting empty ones
    fn check_payload(payload: &str) -> Result<media::MediaKind> {
        if payload.trim().is_empty() {
            return Err(Error::Review("collaborator returned an empty payload".into()));
        }
        Ok(media::classify_payload(payload))
    }
}
