use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::assessment::{assessment_status, AssessmentError};
use crate::workflows::wellness::WellnessError;

/// Top-level failure for the binary and HTTP surfaces.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Assessment(AssessmentError),
    Wellness(WellnessError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Assessment(err) => assessment_status(err),
            Self::Wellness(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Config(_) | Self::Telemetry(_) | Self::Io(_) | Self::Server(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration error: {err}"),
            Self::Telemetry(err) => write!(f, "telemetry error: {err}"),
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Server(err) => write!(f, "server error: {err}"),
            Self::Assessment(err) => write!(f, "assessment error: {err}"),
            Self::Wellness(err) => write!(f, "wellness error: {err}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Telemetry(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Server(err) => Some(err),
            Self::Assessment(err) => Some(err),
            Self::Wellness(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<AssessmentError> for AppError {
    fn from(value: AssessmentError) -> Self {
        Self::Assessment(value)
    }
}

impl From<WellnessError> for AppError {
    fn from(value: WellnessError) -> Self {
        Self::Wellness(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assessment_errors_keep_their_http_status() {
        let err = AppError::from(AssessmentError::AlreadyComplete);
        assert_eq!(err.status(), StatusCode::CONFLICT);

        let err = AppError::from(AssessmentError::UnknownType("ZZZZ".to_string()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            err.to_string(),
            "assessment error: unknown personality type 'ZZZZ'"
        );
    }

    #[test]
    fn infrastructure_errors_are_internal() {
        let err = AppError::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn wellness_errors_are_unprocessable() {
        let err = AppError::from(WellnessError::UnknownMood("grumpy".to_string()));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
