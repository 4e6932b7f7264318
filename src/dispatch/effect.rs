//! Effects produced by shell transitions

/// Work for the shell to carry out after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Print a line of text
    Reply(String),

    /// Record today's mood and reply with advice
    RecordEntry {
        subject: String,
        category: String,
        note: String,
    },

    /// Look up and print advice for a category
    ShowAdvice { category: String },

    /// Print a subject's most recent entries
    ShowHistory { subject: String, limit: usize },

    /// Print every known subject
    ListSubjects,

    /// Print store-wide totals
    ShowStats,
}

impl Effect {
    pub fn reply(text: impl Into<String>) -> Self {
        Effect::Reply(text.into())
    }
}
