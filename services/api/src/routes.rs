use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use serene::workflows::assessment::{assessment_router, AssessmentService, SessionRepository};
use serene::workflows::wellness::{
    lighting_presets, screen_message, suggest_lighting, CrisisScreening, GardenSnapshot, Habit,
    JournalEntry, LightingPreset, MoodEntry, WellnessAnalytics,
};
use tracing::debug;

use crate::infra::{deserialize_optional_date, AppState};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GardenRequest {
    #[serde(default)]
    pub(crate) moods: Vec<MoodEntry>,
    #[serde(default)]
    pub(crate) habits: Vec<Habit>,
    #[serde(default)]
    pub(crate) journal_entries: Vec<JournalEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SanctuaryRequest {
    #[serde(default)]
    pub(crate) moods: Vec<MoodEntry>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SanctuaryResponse {
    pub(crate) suggested: &'static LightingPreset,
    pub(crate) presets: &'static [LightingPreset],
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AnalyticsRequest {
    #[serde(default)]
    pub(crate) moods: Vec<MoodEntry>,
    #[serde(default)]
    pub(crate) habits: Vec<Habit>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CrisisCheckRequest {
    pub(crate) text: String,
}

/// Full application router: assessment sessions, wellness views, and health checks.
pub(crate) fn with_service_routes<R>(service: Arc<AssessmentService<R>>) -> axum::Router
where
    R: SessionRepository + 'static,
{
    assessment_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/wellness/garden", post(garden_endpoint))
        .route("/api/v1/wellness/sanctuary", post(sanctuary_endpoint))
        .route("/api/v1/wellness/analytics", post(analytics_endpoint))
        .route("/api/v1/wellness/crisis-check", post(crisis_check_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    if state.readiness.load(Ordering::Relaxed) {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "initializing" })),
        )
    }
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn garden_endpoint(Json(payload): Json<GardenRequest>) -> Json<GardenSnapshot> {
    let snapshot = GardenSnapshot::build(&payload.moods, &payload.habits, &payload.journal_entries);
    debug!(score = snapshot.score, level = snapshot.level, "garden snapshot built");
    Json(snapshot)
}

pub(crate) async fn sanctuary_endpoint(
    Json(payload): Json<SanctuaryRequest>,
) -> Json<SanctuaryResponse> {
    Json(SanctuaryResponse {
        suggested: suggest_lighting(&payload.moods),
        presets: lighting_presets(),
    })
}

pub(crate) async fn analytics_endpoint(
    Json(payload): Json<AnalyticsRequest>,
) -> Json<WellnessAnalytics> {
    let today = payload.today.unwrap_or_else(|| Utc::now().date_naive());
    Json(WellnessAnalytics::build(
        &payload.moods,
        &payload.habits,
        today,
    ))
}

pub(crate) async fn crisis_check_endpoint(
    Json(payload): Json<CrisisCheckRequest>,
) -> Json<CrisisScreening> {
    Json(screen_message(&payload.text))
}
