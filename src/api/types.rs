//! API request and response types

use crate::analytics::TrendPoint;
use crate::insight::InsightSource;
use crate::mood::{emoji_for, score_for};
use crate::session::SessionEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Request to record a mood
#[derive(Debug, Deserialize)]
pub struct SubmitEntryRequest {
    #[serde(default)]
    pub subject_id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub note: String,
}

/// Response for an accepted entry
#[derive(Debug, Serialize)]
pub struct SubmitEntryResponse {
    pub accepted: bool,
    pub advice: String,
    pub entry: EntryView,
}

/// Response for a rejected entry
#[derive(Debug, Serialize)]
pub struct RejectedResponse {
    pub accepted: bool,
    pub error: String,
}

/// Response with advice for a category
#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub category: String,
    pub advice: String,
    /// Whether the category has its own advice rather than the default
    pub known: bool,
}

/// Request to analyze a mood with the LLM
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub category: String,
    #[serde(default, alias = "journal_text")]
    pub note: String,
    #[serde(default)]
    pub mood_score: Option<u8>,
}

/// Response with a generated (or fallback) summary
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub summary: String,
    pub source: InsightSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response with all subjects
#[derive(Debug, Serialize)]
pub struct SubjectsResponse {
    pub subjects: Vec<String>,
}

/// A recorded entry with display metadata
#[derive(Debug, Serialize)]
pub struct EntryView {
    pub subject_id: String,
    pub date: NaiveDate,
    pub category: String,
    pub note: String,
    pub emoji: &'static str,
    pub score: Option<u8>,
}

impl From<SessionEntry> for EntryView {
    fn from(entry: SessionEntry) -> Self {
        Self {
            emoji: emoji_for(&entry.category),
            score: score_for(&entry.category),
            subject_id: entry.subject_id,
            date: entry.date,
            category: entry.category,
            note: entry.note,
        }
    }
}

/// Response with a subject's entries, newest first
#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    pub subject_id: String,
    pub entries: Vec<EntryView>,
}

/// Response with per-category counts
#[derive(Debug, Serialize)]
pub struct DistributionResponse {
    pub subject_id: String,
    pub counts: BTreeMap<String, usize>,
}

/// Response with a subject's mood trend
#[derive(Debug, Serialize)]
pub struct TrendResponse {
    pub subject_id: String,
    pub points: Vec<TrendPoint>,
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}
