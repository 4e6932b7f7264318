//! In-memory session store
//!
//! Holds one mood entry per subject per day. The store is a cheap handle:
//! clones share the same data, so it can be handed to every request handler
//! or shell without any process-wide global.

#[cfg(test)]
mod proptests;

use crate::mood::normalize_category;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Subject id must not be empty")]
    EmptySubject,
}

pub type SessionResult<T> = Result<T, SessionError>;

/// A single recorded mood
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionEntry {
    pub subject_id: String,
    pub date: NaiveDate,
    pub category: String,
    pub note: String,
}

type SubjectEntries = BTreeMap<NaiveDate, SessionEntry>;

/// Thread-safe in-memory store of session entries
#[derive(Clone, Default)]
pub struct SessionStore {
    subjects: Arc<Mutex<HashMap<String, SubjectEntries>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, SubjectEntries>> {
        // Every write is a single insert, so a poisoned map is still consistent
        self.subjects.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record today's mood for a subject, replacing any entry already
    /// recorded for them today
    pub fn record(&self, subject_id: &str, category: &str, note: &str) -> SessionResult<SessionEntry> {
        self.record_on(Local::now().date_naive(), subject_id, category, note)
    }

    /// Record a mood for a subject on an explicit date
    pub fn record_on(
        &self,
        date: NaiveDate,
        subject_id: &str,
        category: &str,
        note: &str,
    ) -> SessionResult<SessionEntry> {
        let subject_id = subject_id.trim();
        if subject_id.is_empty() {
            return Err(SessionError::EmptySubject);
        }

        let entry = SessionEntry {
            subject_id: subject_id.to_string(),
            date,
            category: normalize_category(category),
            note: note.trim().to_string(),
        };

        let replaced = self
            .lock()
            .entry(entry.subject_id.clone())
            .or_default()
            .insert(date, entry.clone())
            .is_some();

        tracing::debug!(
            subject = %entry.subject_id,
            date = %date,
            category = %entry.category,
            replaced,
            "Recorded mood entry"
        );

        Ok(entry)
    }

    /// All subjects with at least one entry
    pub fn list_subjects(&self) -> HashSet<String> {
        self.lock().keys().cloned().collect()
    }

    /// Entries for a subject, newest first. Unknown subjects have none.
    pub fn entries_for(&self, subject_id: &str) -> Vec<SessionEntry> {
        self.lock()
            .get(subject_id.trim())
            .map(|entries| entries.values().rev().cloned().collect())
            .unwrap_or_default()
    }

    /// Copy of every subject's entries, each newest first
    pub fn snapshot(&self) -> HashMap<String, Vec<SessionEntry>> {
        self.lock()
            .iter()
            .map(|(subject, entries)| (subject.clone(), entries.values().rev().cloned().collect()))
            .collect()
    }
}
