use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::Question;
use super::session::{AssessmentResult, AssessmentSession, SurveyState};
use super::survey::Survey;

/// Identifier wrapper for hosted assessment sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// Repository record holding a session and its lifecycle timestamps.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub id: SessionId,
    pub session: AssessmentSession,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl SessionRecord {
    pub fn view(&self, survey: &Survey) -> SessionView {
        let state = self.session.state();
        let progress_pct = match state {
            SurveyState::InProgress { index } => survey.progress_percent(*index),
            SurveyState::Complete { .. } => 100.0,
        };

        SessionView {
            session_id: self.id.clone(),
            status: state.label(),
            answered: self.session.answered(),
            total: survey.len(),
            progress_pct,
            current_question: self.session.current_question(survey).cloned(),
            result: self.session.result().cloned(),
            started_at: self.started_at,
            completed_at: self.completed_at,
        }
    }
}

/// Storage abstraction so the service can be exercised without a server.
pub trait SessionRepository: Send + Sync {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError>;
    /// Apply `apply` to the stored record while holding exclusive access to it.
    ///
    /// The change is written back only when `apply` succeeds; an error leaves
    /// the stored record untouched.
    fn modify<T, E, F>(&self, id: &SessionId, apply: F) -> Result<T, E>
    where
        F: FnOnce(&mut SessionRecord) -> Result<T, E>,
        E: From<RepositoryError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError>;
    fn remove(&self, id: &SessionId) -> Result<(), RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

/// Client-facing representation of a session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub status: &'static str,
    pub answered: usize,
    pub total: usize,
    pub progress_pct: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question: Option<Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<AssessmentResult>,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}
