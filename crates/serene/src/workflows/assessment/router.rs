use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::AssessmentError;
use super::repository::{RepositoryError, SessionId, SessionRepository};
use super::service::{AssessmentService, AssessmentServiceError};

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub option_index: usize,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub answers: Vec<usize>,
}

/// Router builder exposing the survey, hosted sessions, and stateless scoring.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: SessionRepository + 'static,
{
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler::<R>))
        .route("/api/v1/assessment/sessions", post(start_handler::<R>))
        .route(
            "/api/v1/assessment/sessions/:session_id",
            get(status_handler::<R>).delete(discard_handler::<R>),
        )
        .route(
            "/api/v1/assessment/sessions/:session_id/answers",
            post(answer_handler::<R>),
        )
        .route(
            "/api/v1/assessment/sessions/:session_id/reset",
            post(reset_handler::<R>),
        )
        .route("/api/v1/assessment/score", post(score_handler::<R>))
        .route(
            "/api/v1/assessment/profiles/:code",
            get(profile_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn questions_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let payload = json!({
        "total": service.survey().len(),
        "questions": service.questions(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn start_handler<R>(State(service): State<Arc<AssessmentService<R>>>) -> Response
where
    R: SessionRepository + 'static,
{
    match service.start() {
        Ok(record) => {
            let view = record.view(service.survey());
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.get(&SessionId(session_id)) {
        Ok(record) => {
            let view = record.view(service.survey());
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn discard_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.discard(&SessionId(session_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn answer_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<AnswerRequest>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.answer(&SessionId(session_id), request.option_index) {
        Ok(record) => {
            let view = record.view(service.survey());
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn reset_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.reset(&SessionId(session_id)) {
        Ok(record) => {
            let view = record.view(service.survey());
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn score_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.evaluate_answers(&request.answers) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(err) => assessment_error_response(&err),
    }
}

pub(crate) async fn profile_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(code): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.profile(&code) {
        Ok(profile) => (StatusCode::OK, axum::Json(profile)).into_response(),
        Err(err) => assessment_error_response(&err),
    }
}

/// HTTP status for an assessment failure.
pub fn assessment_status(err: &AssessmentError) -> StatusCode {
    match err {
        AssessmentError::UnknownType(_) => StatusCode::NOT_FOUND,
        AssessmentError::AlreadyComplete => StatusCode::CONFLICT,
        AssessmentError::OutOfRange { .. }
        | AssessmentError::InvalidOption { .. }
        | AssessmentError::InvalidResponse { .. }
        | AssessmentError::Incomplete { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

fn assessment_error_response(err: &AssessmentError) -> Response {
    let payload = json!({ "error": err.to_string() });
    (assessment_status(err), axum::Json(payload)).into_response()
}

fn service_error_response(err: AssessmentServiceError) -> Response {
    match err {
        AssessmentServiceError::Assessment(err) => assessment_error_response(&err),
        AssessmentServiceError::Repository(RepositoryError::NotFound) => {
            let payload = json!({ "error": "assessment session not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        AssessmentServiceError::Repository(RepositoryError::Conflict) => {
            let payload = json!({ "error": "assessment session already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        other => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
