use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use serene::workflows::assessment::{
    RepositoryError, SessionId, SessionRecord, SessionRepository,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local session store for the HTTP host.
#[derive(Default, Clone)]
pub(crate) struct InMemorySessionRepository {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl InMemorySessionRepository {
    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SessionId, SessionRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("session store lock poisoned".to_string()))
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.lock()?;
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
        let mut guard = self.lock()?;
        let stored = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        let mut draft = stored.clone();
        let outcome = apply(&mut draft)?;
        *stored = draft;
        Ok(outcome)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        Ok(self.lock()?.get(id).cloned())
    }

    fn remove(&self, id: &SessionId) -> Result<(), RepositoryError> {
        self.lock()?
            .remove(id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serene::workflows::assessment::{AssessmentService, AssessmentSession};

    #[test]
    fn parse_date_requires_iso_format() {
        assert_eq!(
            parse_date("2024-05-01"),
            Ok(NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date"))
        );
        assert!(parse_date("05/01/2024").is_err());
    }

    #[test]
    fn repository_rejects_duplicate_ids_and_missing_updates() {
        let repository = InMemorySessionRepository::default();
        let record = SessionRecord {
            id: SessionId("session-test".to_string()),
            session: AssessmentSession::new(),
            started_at: chrono::Utc::now(),
            completed_at: None,
        };

        repository.insert(record.clone()).expect("first insert");
        assert!(matches!(
            repository.insert(record.clone()),
            Err(RepositoryError::Conflict)
        ));

        repository.remove(&record.id).expect("removed");
        let missing: Result<(), RepositoryError> = repository.modify(&record.id, |_| Ok(()));
        assert!(matches!(missing, Err(RepositoryError::NotFound)));
    }

    #[test]
    fn failed_modification_keeps_the_stored_record() {
        let repository = InMemorySessionRepository::default();
        let id = SessionId("session-rollback".to_string());
        repository
            .insert(SessionRecord {
                id: id.clone(),
                session: AssessmentSession::new(),
                started_at: chrono::Utc::now(),
                completed_at: None,
            })
            .expect("insert");

        let outcome: Result<(), RepositoryError> = repository.modify(&id, |record| {
            record.completed_at = Some(chrono::Utc::now());
            Err(RepositoryError::Unavailable("rejected".to_string()))
        });
        assert!(outcome.is_err());

        let stored = repository.fetch(&id).expect("fetch").expect("stored");
        assert!(stored.completed_at.is_none());
    }

    #[test]
    fn concurrent_answers_on_one_session_are_all_recorded() {
        let repository = Arc::new(InMemorySessionRepository::default());
        let service = AssessmentService::new(repository.clone());
        let record = service.start().expect("session starts");

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| service.answer(&record.id, 2).expect("answer accepted"));
            }
        });

        let stored = repository
            .fetch(&record.id)
            .expect("fetch")
            .expect("stored");
        assert_eq!(stored.session.answered(), 8);
        let ids: Vec<u8> = stored
            .session
            .responses()
            .iter()
            .map(|response| response.question_id)
            .collect();
        assert_eq!(ids, (1..=8).collect::<Vec<u8>>());
    }
}
