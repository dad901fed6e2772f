//! Normalized submission cache
//!
//! One copy of each submission, keyed by id. The pending list and the per-id
//! detail view are both read projections over this map, so a mutation can
//! never leave the two out of sync.

use crate::error::{Error, Result};
use crate::types::{Submission, SubmissionStatus};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory normalized store of reviewed submissions
#[derive(Debug, Default)]
pub struct SubmissionCache {
    inner: Mutex<HashMap<String, Submission>>,
}

impl SubmissionCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached set with a freshly fetched one
    pub fn replace_all(&self, submissions: Vec<Submission>) {
        let mut inner = self.inner.lock().expect("submission cache poisoned");
        inner.clear();
        for submission in submissions {
            inner.insert(submission.id.clone(), submission);
        }
    }

    /// Detail projection: one submission by id
    pub fn get(&self, id: &str) -> Option<Submission> {
        self.inner
            .lock()
            .expect("submission cache poisoned")
            .get(id)
            .cloned()
    }

    /// List projection: submissions pending review, newest first
    pub fn pending(&self) -> Vec<Submission> {
        let inner = self.inner.lock().expect("submission cache poisoned");
        let mut pending: Vec<Submission> = inner
            .values()
            .filter(|s| s.status == SubmissionStatus::PendingReview)
            .cloned()
            .collect();
        pending.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        pending
    }

    /// Apply a mutation to one cached submission.
    ///
    /// Call only after the collaborator confirmed the operation; this is the
    /// single write path, so the projections stay consistent.
    pub fn apply<F>(&self, id: &str, mutate: F) -> Result<Submission>
    where
        F: FnOnce(&mut Submission),
    {
        let mut inner = self.inner.lock().expect("submission cache poisoned");
        let submission = inner
            .get_mut(id)
            .ok_or_else(|| Error::SubmissionNotFound(id.to_string()))?;
        mutate(submission);
        Ok(submission.clone())
    }
}
