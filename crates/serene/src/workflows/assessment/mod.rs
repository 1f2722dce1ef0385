//! Personality assessment: a fixed 28-question survey over four dichotomies,
//! scored into per-axis sums and classified into one of sixteen type profiles.
//!
//! The scorer, classifier, and session state machine are pure and synchronous.
//! The repository, service, and router host sessions for HTTP clients.

mod classifier;
pub mod domain;
mod profiles;
pub mod repository;
pub mod router;
mod scoring;
pub mod service;
mod session;
mod survey;

#[cfg(test)]
mod tests;

pub use classifier::classify;
pub use domain::{
    AnswerOption, AssessmentError, AxisScores, Dichotomy, Polarity, Question, Response, TypeCode,
    TypeProfile,
};
pub use profiles::{profiles, resolve_profile};
pub use repository::{
    RepositoryError, SessionId, SessionRecord, SessionRepository, SessionView,
};
pub use router::{assessment_router, assessment_status};
pub use scoring::score;
pub use service::{AssessmentService, AssessmentServiceError};
pub use session::{evaluate, evaluate_answers, AssessmentResult, AssessmentSession, SurveyState};
pub use survey::{Survey, OPTION_SCORES};
