use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::domain::{AssessmentError, Question, TypeCode, TypeProfile};
use super::profiles::resolve_profile;
use super::repository::{RepositoryError, SessionId, SessionRecord, SessionRepository};
use super::session::{evaluate_answers, AssessmentResult, AssessmentSession};
use super::survey::Survey;

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("session-{id:06}"))
}

/// Hosts assessment sessions on top of a repository.
pub struct AssessmentService<R> {
    survey: Arc<Survey>,
    repository: Arc<R>,
}

impl<R> AssessmentService<R>
where
    R: SessionRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_survey(Arc::new(Survey::standard()), repository)
    }

    pub fn with_survey(survey: Arc<Survey>, repository: Arc<R>) -> Self {
        Self { survey, repository }
    }

    pub fn survey(&self) -> &Survey {
        &self.survey
    }

    pub fn questions(&self) -> &[Question] {
        self.survey.questions()
    }

    /// Open a fresh session positioned on the first question.
    pub fn start(&self) -> Result<SessionRecord, AssessmentServiceError> {
        let record = SessionRecord {
            id: next_session_id(),
            session: AssessmentSession::new(),
            started_at: Utc::now(),
            completed_at: None,
        };

        let stored = self.repository.insert(record)?;
        info!(session_id = %stored.id.0, "assessment session started");
        Ok(stored)
    }

    /// Answer the active question of a session.
    pub fn answer(
        &self,
        id: &SessionId,
        option_index: usize,
    ) -> Result<SessionRecord, AssessmentServiceError> {
        let record = self.repository.modify(
            id,
            |record| -> Result<SessionRecord, AssessmentServiceError> {
                record.session.answer(&self.survey, option_index)?;
                if record.session.is_complete() {
                    record.completed_at = Some(Utc::now());
                }
                Ok(record.clone())
            },
        )?;

        debug!(
            session_id = %id.0,
            answered = record.session.answered(),
            "assessment answer recorded"
        );
        if let Some(result) = record.session.result() {
            info!(
                session_id = %id.0,
                type_code = %result.type_code,
                "assessment session complete"
            );
        }

        Ok(record)
    }

    /// Clear all responses and return the session to the first question.
    pub fn reset(&self, id: &SessionId) -> Result<SessionRecord, AssessmentServiceError> {
        let record = self.repository.modify(
            id,
            |record| -> Result<SessionRecord, AssessmentServiceError> {
                record.session.reset();
                record.completed_at = None;
                Ok(record.clone())
            },
        )?;
        info!(session_id = %id.0, "assessment session reset");
        Ok(record)
    }

    /// Drop a hosted session.
    pub fn discard(&self, id: &SessionId) -> Result<(), AssessmentServiceError> {
        self.repository.remove(id)?;
        info!(session_id = %id.0, "assessment session discarded");
        Ok(())
    }

    pub fn get(&self, id: &SessionId) -> Result<SessionRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Score a full answer sheet without creating a session.
    pub fn evaluate_answers(
        &self,
        option_indices: &[usize],
    ) -> Result<AssessmentResult, AssessmentError> {
        let result = evaluate_answers(&self.survey, option_indices)?;
        debug!(type_code = %result.type_code, "answer sheet scored");
        Ok(result)
    }

    pub fn profile(&self, code: &str) -> Result<&'static TypeProfile, AssessmentError> {
        let code: TypeCode = code.parse()?;
        resolve_profile(code)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
