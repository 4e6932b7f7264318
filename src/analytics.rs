//! Aggregate views over recorded moods

use crate::mood::score_for;
use crate::session::SessionEntry;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Store-wide totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_subjects: usize,
    pub total_entries: usize,
    pub avg_entries_per_subject: f64,
}

/// One point on a subject's mood trend line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub category: String,
    pub score: u8,
}

pub fn summarize(snapshot: &HashMap<String, Vec<SessionEntry>>) -> Summary {
    let total_subjects = snapshot.len();
    let total_entries: usize = snapshot.values().map(Vec::len).sum();
    #[allow(clippy::cast_precision_loss)] // counts stay far below 2^52
    let avg_entries_per_subject = if total_subjects == 0 {
        0.0
    } else {
        total_entries as f64 / total_subjects as f64
    };

    Summary {
        total_subjects,
        total_entries,
        avg_entries_per_subject,
    }
}

/// How often each category was recorded
pub fn distribution(entries: &[SessionEntry]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for entry in entries {
        *counts.entry(entry.category.clone()).or_insert(0) += 1;
    }
    counts
}

/// Scored entries in ascending date order. Categories without a score are
/// left out.
pub fn trend(entries: &[SessionEntry]) -> Vec<TrendPoint> {
    let mut points: Vec<TrendPoint> = entries
        .iter()
        .filter_map(|entry| {
            score_for(&entry.category).map(|score| TrendPoint {
                date: entry.date,
                category: entry.category.clone(),
                score,
            })
        })
        .collect();
    points.sort_by_key(|point| point.date);
    points
}
