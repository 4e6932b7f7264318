//! Mood insight generation using an LLM
//!
//! Asks the configured model to summarize how someone feels and suggest a
//! tip. Any failure degrades to the static advice for the category, so
//! callers always get something to show.

use crate::advice::AdviceTable;
use crate::llm::{LlmRequest, LlmService};
use crate::mood::normalize_category;
use serde::Serialize;
use std::sync::Arc;

const SYSTEM_PROMPT: &str = "You are a supportive mental health assistant.";
const MAX_NOTE_CHARS: usize = 1000;
const MAX_INSIGHT_TOKENS: u32 = 300;

/// What the user told us
#[derive(Debug, Clone, Default)]
pub struct InsightRequest {
    pub category: String,
    pub note: String,
    /// Self-reported mood on a 1-10 scale
    pub mood_score: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightSource {
    Generated,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub text: String,
    pub source: InsightSource,
    /// Why generation fell back, if it did
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Insight {
    fn fallback(advice: &AdviceTable, category: &str, error: impl Into<String>) -> Self {
        Self {
            text: advice.advice_for(category).to_string(),
            source: InsightSource::Fallback,
            error: Some(error.into()),
        }
    }
}

pub fn build_prompt(request: &InsightRequest) -> String {
    let category = normalize_category(&request.category);
    let feeling = if category.is_empty() {
        "A user checked in today".to_string()
    } else {
        format!("A user reported feeling {category} today")
    };
    let rating = request
        .mood_score
        .map(|score| format!(" and rated their mood as {score}/10"))
        .unwrap_or_default();

    // Keep very long journal entries out of the prompt
    let note: String = request.note.trim().chars().take(MAX_NOTE_CHARS).collect();

    format!(
        "{feeling}{rating}. They wrote: '{note}'.\n\
         Summarize their emotional state in 2 sentences and suggest 1 helpful tip."
    )
}

/// Generate an insight, falling back to table advice on any failure
pub async fn generate_insight(
    request: &InsightRequest,
    llm_service: Option<Arc<dyn LlmService>>,
    advice: &AdviceTable,
) -> Insight {
    let Some(llm_service) = llm_service else {
        return Insight::fallback(advice, &request.category, "No LLM configured");
    };

    let llm_request = LlmRequest::prompt(Some(SYSTEM_PROMPT), build_prompt(request))
        .with_max_tokens(MAX_INSIGHT_TOKENS);

    match llm_service.complete(&llm_request).await {
        Ok(response) if !response.text.trim().is_empty() => Insight {
            text: response.text.trim().to_string(),
            source: InsightSource::Generated,
            error: None,
        },
        Ok(_) => {
            tracing::warn!(model = %llm_service.model_id(), "Insight generation returned no text");
            Insight::fallback(advice, &request.category, "Empty response from model")
        }
        Err(e) => {
            tracing::warn!(model = %llm_service.model_id(), error = %e.message, "Insight generation failed");
            Insight::fallback(
                advice,
                &request.category,
                format!("Error generating AI response: {}", e.message),
            )
        }
    }
}
