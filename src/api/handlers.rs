//! HTTP request handlers

use super::types::{
    AdviceResponse, AnalyzeRequest, AnalyzeResponse, DistributionResponse, EntriesResponse,
    EntryView, RejectedResponse, SubjectsResponse, SubmitEntryRequest,
    SubmitEntryResponse, TrendResponse, VersionResponse,
};
use super::AppState;
use crate::analytics::{distribution, summarize, trend, Summary};
use crate::insight::{generate_insight, InsightRequest};
use crate::mood::normalize_category;
use crate::session::SessionError;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Recording and advice
        .route("/api/entries", post(submit_entry))
        .route("/api/advice/:category", get(get_advice))
        .route("/api/analyze", post(analyze))
        // History and analytics
        .route("/api/subjects", get(list_subjects))
        .route("/api/subjects/:id/entries", get(get_entries))
        .route("/api/subjects/:id/distribution", get(get_distribution))
        .route("/api/subjects/:id/trend", get(get_trend))
        .route("/api/stats", get(get_stats))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Recording and advice
// ============================================================

async fn submit_entry(
    State(state): State<AppState>,
    Json(req): Json<SubmitEntryRequest>,
) -> Result<Json<SubmitEntryResponse>, AppError> {
    let entry = state
        .store
        .record(&req.subject_id, &req.category, &req.note)?;

    tracing::info!(subject = %entry.subject_id, category = %entry.category, "Mood entry accepted");

    Ok(Json(SubmitEntryResponse {
        accepted: true,
        advice: state.advice.advice_for(&entry.category).to_string(),
        entry: entry.into(),
    }))
}

async fn get_advice(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<AdviceResponse> {
    Json(AdviceResponse {
        known: state.advice.contains(&category),
        advice: state.advice.advice_for(&category).to_string(),
        category: normalize_category(&category),
    })
}

async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    let request = InsightRequest {
        category: req.category,
        note: req.note,
        mood_score: req.mood_score,
    };
    let insight = generate_insight(
        &request,
        state.llm_registry.default_service(),
        &state.advice,
    )
    .await;

    Json(AnalyzeResponse {
        summary: insight.text,
        source: insight.source,
        error: insight.error,
    })
}

// ============================================================
// History and analytics
// ============================================================

async fn list_subjects(State(state): State<AppState>) -> Json<SubjectsResponse> {
    let mut subjects: Vec<String> = state.store.list_subjects().into_iter().collect();
    subjects.sort();
    Json(SubjectsResponse { subjects })
}

#[derive(Debug, Deserialize)]
struct EntriesQuery {
    limit: Option<usize>,
}

async fn get_entries(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<EntriesQuery>,
) -> Json<EntriesResponse> {
    let entries = state.store.entries_for(&id);
    let limit = query.limit.unwrap_or(entries.len());

    Json(EntriesResponse {
        subject_id: id,
        entries: entries.into_iter().take(limit).map(EntryView::from).collect(),
    })
}

async fn get_distribution(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<DistributionResponse> {
    let counts = distribution(&state.store.entries_for(&id));
    Json(DistributionResponse {
        subject_id: id,
        counts,
    })
}

async fn get_trend(State(state): State<AppState>, Path(id): Path<String>) -> Json<TrendResponse> {
    let points = trend(&state.store.entries_for(&id));
    Json(TrendResponse {
        subject_id: id,
        points,
    })
}

async fn get_stats(State(state): State<AppState>) -> Json<Summary> {
    Json(summarize(&state.store.snapshot()))
}

async fn get_version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION"),
    })
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    /// The entry was rejected; reported in the submit response shape
    Rejected(String),
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        AppError::Rejected(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Rejected(error) = self;
        tracing::debug!(%error, "Mood entry rejected");
        (
            StatusCode::BAD_REQUEST,
            Json(RejectedResponse {
                accepted: false,
                error,
            }),
        )
            .into_response()
    }
}
