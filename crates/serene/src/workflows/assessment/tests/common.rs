use std::collections::HashMap;
use std::sync::{Arc, Barrier, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::assessment::domain::{Dichotomy, Response as SurveyResponse};
use crate::workflows::assessment::repository::{
    RepositoryError, SessionId, SessionRecord, SessionRepository,
};
use crate::workflows::assessment::{assessment_router, AssessmentService, Survey};

/// Option index for the most positive-letter aligned answer.
pub(super) const MOST_POSITIVE: usize = 0;
pub(super) const NEUTRAL: usize = 2;
/// Option index for the most negative-letter aligned answer.
pub(super) const MOST_NEGATIVE: usize = 4;

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl SessionRepository for MemoryRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn modify<T, E, F>(&self, id: &SessionId, apply: F) -> Result<T, E>
    where
        F: FnOnce(&mut SessionRecord) -> Result<T, E>,
        E: From<RepositoryError>,
    {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let stored = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        let mut draft = stored.clone();
        let outcome = apply(&mut draft)?;
        *stored = draft;
        Ok(outcome)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn remove(&self, id: &SessionId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

/// Holds each modification at a barrier until `parties` callers arrive.
pub(super) struct GatedRepository {
    inner: MemoryRepository,
    gate: Barrier,
}

impl GatedRepository {
    pub(super) fn new(inner: MemoryRepository, parties: usize) -> Self {
        Self {
            inner,
            gate: Barrier::new(parties),
        }
    }
}

impl SessionRepository for GatedRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        self.inner.insert(record)
    }

    fn modify<T, E, F>(&self, id: &SessionId, apply: F) -> Result<T, E>
    where
        F: FnOnce(&mut SessionRecord) -> Result<T, E>,
        E: From<RepositoryError>,
    {
        self.gate.wait();
        self.inner.modify(id, apply)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        self.inner.fetch(id)
    }

    fn remove(&self, id: &SessionId) -> Result<(), RepositoryError> {
        self.inner.remove(id)
    }
}

pub(super) struct UnavailableRepository;

impl SessionRepository for UnavailableRepository {
    fn insert(&self, _record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn modify<T, E, F>(&self, _id: &SessionId, _apply: F) -> Result<T, E>
    where
        F: FnOnce(&mut SessionRecord) -> Result<T, E>,
        E: From<RepositoryError>,
    {
        Err(RepositoryError::Unavailable("store offline".to_string()).into())
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn remove(&self, _id: &SessionId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) fn build_service() -> (AssessmentService<MemoryRepository>, MemoryRepository) {
    let repository = MemoryRepository::default();
    let service = AssessmentService::new(Arc::new(repository.clone()));
    (service, repository)
}

pub(super) fn router_with_service(service: AssessmentService<MemoryRepository>) -> axum::Router {
    assessment_router(Arc::new(service))
}

/// One option index per question, chosen per axis.
pub(super) fn answers_by_axis(ei: usize, sn: usize, tf: usize, jp: usize) -> Vec<usize> {
    let survey = Survey::standard();
    survey
        .questions()
        .iter()
        .map(|question| match question.dichotomy {
            Dichotomy::EI => ei,
            Dichotomy::SN => sn,
            Dichotomy::TF => tf,
            Dichotomy::JP => jp,
        })
        .collect()
}

/// Responses carrying the given score for every question of each axis.
pub(super) fn responses_by_axis(ei: i8, sn: i8, tf: i8, jp: i8) -> Vec<SurveyResponse> {
    let survey = Survey::standard();
    survey
        .questions()
        .iter()
        .map(|question| SurveyResponse {
            question_id: question.id,
            dichotomy: question.dichotomy,
            score: match question.dichotomy {
                Dichotomy::EI => ei,
                Dichotomy::SN => sn,
                Dichotomy::TF => tf,
                Dichotomy::JP => jp,
            },
        })
        .collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
