//! Known mood categories
//!
//! Categories are free-form strings on the wire; this is the fixed set the
//! tracker knows how to label, score and advise on.

/// Emoji used for categories outside the known set
pub const NEUTRAL_EMOJI: &str = "😐";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Stressed,
    Tired,
    Excited,
    Anxious,
    Calm,
    Overwhelmed,
    Motivated,
}

impl Mood {
    pub const ALL: [Mood; 8] = [
        Mood::Happy,
        Mood::Stressed,
        Mood::Tired,
        Mood::Excited,
        Mood::Anxious,
        Mood::Calm,
        Mood::Overwhelmed,
        Mood::Motivated,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Stressed => "stressed",
            Mood::Tired => "tired",
            Mood::Excited => "excited",
            Mood::Anxious => "anxious",
            Mood::Calm => "calm",
            Mood::Overwhelmed => "overwhelmed",
            Mood::Motivated => "motivated",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Stressed => "😰",
            Mood::Tired => "😴",
            Mood::Excited => "🤩",
            Mood::Anxious => "😟",
            Mood::Calm => "😌",
            Mood::Overwhelmed => "😵",
            Mood::Motivated => "💪",
        }
    }

    /// Human-readable label, e.g. "😊 Happy"
    pub fn label(self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        let title: String = chars
            .next()
            .map(|c| c.to_uppercase().chain(chars).collect())
            .unwrap_or_default();
        format!("{} {title}", self.emoji())
    }

    /// Trend score on a 1-5 scale (higher is better)
    pub fn score(self) -> u8 {
        match self {
            Mood::Happy | Mood::Excited => 5,
            Mood::Motivated | Mood::Calm => 4,
            Mood::Tired => 2,
            Mood::Stressed | Mood::Anxious | Mood::Overwhelmed => 1,
        }
    }

    /// Parse a category, ignoring surrounding whitespace and case
    pub fn parse(category: &str) -> Option<Mood> {
        let normalized = normalize_category(category);
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == normalized)
    }
}

/// Canonical form of a category string: trimmed and lower-cased
pub fn normalize_category(category: &str) -> String {
    category.trim().to_lowercase()
}

/// Emoji for any category string, neutral for unknown ones
pub fn emoji_for(category: &str) -> &'static str {
    Mood::parse(category).map_or(NEUTRAL_EMOJI, Mood::emoji)
}

/// Display label for any category string
pub fn label_for(category: &str) -> String {
    Mood::parse(category).map_or_else(|| format!("{NEUTRAL_EMOJI} {category}"), Mood::label)
}

/// Trend score for any category string, `None` for unknown ones
pub fn score_for(category: &str) -> Option<u8> {
    Mood::parse(category).map(Mood::score)
}
