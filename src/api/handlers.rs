use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::request_id::RequestId;
use crate::models::{
    ContentItem, Genre, Intensity, Language, MatchPass, Mood, PreferenceVector, Recommendation,
};
use crate::services::preferences::normalize_mood;
use crate::services::{browse_by_mood, Recommender, MAX_RECOMMENDATIONS};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct BrowseQuery {
    pub mood: Option<String>,
    /// Kept as text so a non-numeric value gets the JSON error body
    pub limit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub preferences: Option<PreferenceVector>,
    /// Current mood, e.g. from a mood log entry or the emotion detector
    #[serde(default)]
    pub mood: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TaxonomyResponse {
    pub moods: Vec<Mood>,
    pub genres: Vec<Genre>,
    pub languages: Vec<Language>,
    pub intensities: Vec<Intensity>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Lists the values preferences can be built from
pub async fn get_taxonomy() -> Json<TaxonomyResponse> {
    Json(TaxonomyResponse {
        moods: Mood::ALL.to_vec(),
        genres: Genre::ALL.to_vec(),
        languages: Language::ALL.to_vec(),
        intensities: Intensity::ALL.to_vec(),
    })
}

/// Mood-only catalog lookup
pub async fn browse_catalog(
    State(state): State<AppState>,
    Query(params): Query<BrowseQuery>,
) -> AppResult<Json<Vec<ContentItem>>> {
    let invalid_limit = || {
        AppError::InvalidInput(format!(
            "limit must be between 1 and {}",
            MAX_RECOMMENDATIONS
        ))
    };
    let limit = match params.limit.as_deref() {
        Some(raw) => raw.trim().parse::<usize>().map_err(|_| invalid_limit())?,
        None => MAX_RECOMMENDATIONS,
    };
    if limit == 0 || limit > MAX_RECOMMENDATIONS {
        return Err(invalid_limit());
    }

    let mood = params.mood.as_deref().and_then(normalize_mood);
    Ok(Json(browse_by_mood(state.catalog.items(), mood, limit)))
}

/// Get a single catalog item
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ContentItem>> {
    state
        .catalog
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Content item {}", id)))
}

/// Recommend songs for the given preferences and current mood
///
/// Without usable preferences the engine is skipped and the mood bucket is
/// returned instead.
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<Recommendation>> {
    let target_mood = request.mood.as_deref().and_then(normalize_mood);

    tracing::info!(
        request_id = %request_id,
        has_preferences = request.preferences.as_ref().is_some_and(|p| !p.is_empty()),
        target_mood = ?target_mood,
        "Processing recommendation request"
    );

    let items = state.catalog.items();
    let mut recommendation =
        Recommender::new(items, request.preferences.as_ref()).recommend(target_mood);

    if !recommendation.has_preferences {
        recommendation.items = browse_by_mood(items, target_mood, MAX_RECOMMENDATIONS);
        recommendation.pass = match target_mood {
            Some(mood) if state.catalog.by_mood(mood).next().is_some() => MatchPass::Mood,
            _ => MatchPass::Catalog,
        };
    }

    tracing::info!(
        request_id = %request_id,
        returned = recommendation.items.len(),
        pass = ?recommendation.pass,
        "Recommendation completed"
    );

    Ok(Json(recommendation))
}
