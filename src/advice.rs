//! Category to advice lookup
//!
//! Built once and shared read-only. Lookups never fail: categories that are
//! not in the table get the default advice.

use crate::mood::{normalize_category, Mood};
use std::collections::HashMap;

pub const DEFAULT_ADVICE: &str = "🙂 Stay balanced and plan your day wisely.";

fn builtin_advice(mood: Mood) -> &'static str {
    match mood {
        Mood::Stressed => "📚 Take a short break, revise with flashcards.",
        Mood::Tired => "💤 Rest for 20-30 minutes, hydrate well.",
        Mood::Happy => "🎉 Use your positive energy to tackle tough tasks!",
        Mood::Anxious => "🧘 Try deep breathing and make a small to-do list.",
        Mood::Excited => "⚡ Channel excitement into sports or study.",
        Mood::Calm => "😌 Stay consistent, maybe meditate.",
        Mood::Overwhelmed => "📝 Break tasks into smaller chunks.",
        Mood::Motivated => "💪 Push forward on key goals!",
    }
}

/// Immutable category → advice table with a fallback
#[derive(Debug, Clone)]
pub struct AdviceTable {
    entries: HashMap<String, String>,
    default: String,
}

impl AdviceTable {
    /// Table with an entry for every known mood
    pub fn builtin() -> Self {
        Self::new(
            Mood::ALL
                .into_iter()
                .map(|mood| (mood.as_str(), builtin_advice(mood))),
            DEFAULT_ADVICE,
        )
    }

    /// Build a table from explicit entries. Keys are normalized the same way
    /// lookups are.
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>, default: impl Into<String>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(category, advice)| (normalize_category(category.as_ref()), advice.into()))
            .collect();
        Self {
            entries,
            default: default.into(),
        }
    }

    pub fn advice_for(&self, category: &str) -> &str {
        self.lookup(category).unwrap_or(self.default.as_str())
    }

    /// Advice for a category only if the table has an entry for it
    pub fn lookup(&self, category: &str) -> Option<&str> {
        self.entries
            .get(&normalize_category(category))
            .map(String::as_str)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.lookup(category).is_some()
    }

    pub fn default_advice(&self) -> &str {
        &self.default
    }
}

impl Default for AdviceTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_mood() {
        let table = AdviceTable::builtin();
        for mood in Mood::ALL {
            assert!(table.contains(mood.as_str()), "missing advice for {}", mood.as_str());
            assert_ne!(table.advice_for(mood.as_str()), DEFAULT_ADVICE);
        }
    }

    #[test]
    fn test_known_category() {
        let table = AdviceTable::builtin();
        assert_eq!(
            table.advice_for("happy"),
            "🎉 Use your positive energy to tackle tough tasks!"
        );
    }

    #[test]
    fn test_lookup_is_case_normalized() {
        let table = AdviceTable::builtin();
        assert_eq!(table.advice_for(" Stressed "), table.advice_for("stressed"));
        assert_eq!(table.advice_for("TIRED"), "💤 Rest for 20-30 minutes, hydrate well.");
    }

    #[test]
    fn test_unknown_category_gets_default() {
        let table = AdviceTable::builtin();
        assert_eq!(table.advice_for("unknown-category"), DEFAULT_ADVICE);
        assert_eq!(table.advice_for(""), DEFAULT_ADVICE);
        assert!(table.lookup("unknown-category").is_none());
    }

    #[test]
    fn test_advice_is_deterministic() {
        let table = AdviceTable::builtin();
        let first = table.advice_for("happy").to_string();
        for _ in 0..10 {
            assert_eq!(table.advice_for("happy"), first);
        }
    }

    #[test]
    fn test_custom_table() {
        let table = AdviceTable::new([("Bored", "Go for a walk.")], "Carry on.");
        assert_eq!(table.advice_for("bored"), "Go for a walk.");
        assert_eq!(table.advice_for("happy"), "Carry on.");
        assert_eq!(table.default_advice(), "Carry on.");
    }
}
