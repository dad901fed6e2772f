//! Per-submission mutual exclusion
//!
//! Every mutating review operation holds a submission's lock for its whole
//! duration, so interleavings like approve-during-regenerate cannot happen.
//! Operations on distinct submissions are independent. The lock is a
//! try-lock: a second operation on a busy submission fails fast instead of
//! queueing.

use crate::error::{Error, Result};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Registry of submissions with a mutation in flight
#[derive(Debug, Default)]
pub struct SubmissionLocks {
    held: Arc<Mutex<HashSet<String>>>,
}

impl SubmissionLocks {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock for a submission, or fail with
    /// [`Error::OperationInFlight`] if another operation holds it.
    ///
    /// The lock is released when the returned guard drops, on success and
    /// failure paths alike.
    pub fn try_acquire(&self, id: &str) -> Result<LockGuard> {
        let mut held = self.held.lock().expect("lock registry poisoned");
        if !held.insert(id.to_string()) {
            return Err(Error::OperationInFlight(id.to_string()));
        }
        Ok(LockGuard {
            held: Arc::clone(&self.held),
            id: id.to_string(),
        })
    }

    /// Whether a submission currently has an operation in flight
    pub fn is_held(&self, id: &str) -> bool {
        self.held.lock().expect("lock registry poisoned").contains(id)
    }
}

/// Releases the submission's lock on drop
#[derive(Debug)]
pub struct LockGuard {
    held: Arc<Mutex<HashSet<String>>>,
    id: String,
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        self.held
            .lock()
            .expect("lock registry poisoned")
            .remove(&self.id);
    }
}
