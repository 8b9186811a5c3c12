use axum::BoxError;
use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::any::Any;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("Malformed user entry: {0}")]
    InvalidUserEntry(String),
    #[error("Unknown role: {0}")]
    UnknownRole(String),
    #[error("Duplicate user: {0}")]
    DuplicateUser(String),
    #[error("Token lifetime of {0}s exceeds the maximum of {1}s")]
    InvalidTokenTtl(u64, u64),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Not authenticated")]
    Unauthenticated,
    #[error("Invalid request: {detail}")]
    InvalidRequest { status: StatusCode, detail: String },
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("CPF already registered")]
    PatientAlreadyExists,
    #[error("Patient not found")]
    PatientNotFound,
    #[error("Patient CPF not registered")]
    UnknownPatient,
    #[error("Appointment not found")]
    AppointmentNotFound,
    #[error("Registration already exists")]
    ProfessionalAlreadyExists,
    #[error("Professional not found")]
    ProfessionalNotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Error::Unauthenticated => (StatusCode::UNAUTHORIZED, "Not authenticated"),
            Error::InvalidRequest { status, .. } => (status, "Invalid request"),
            Error::Jwt(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
            Error::Bcrypt(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
            Error::PatientAlreadyExists => (StatusCode::BAD_REQUEST, "CPF already registered"),
            Error::PatientNotFound => (StatusCode::NOT_FOUND, "Patient not found"),
            Error::UnknownPatient => (StatusCode::BAD_REQUEST, "Patient CPF not registered"),
            Error::AppointmentNotFound => (StatusCode::NOT_FOUND, "Appointment not found"),
            Error::ProfessionalAlreadyExists => {
                (StatusCode::BAD_REQUEST, "Registration already exists")
            }
            Error::ProfessionalNotFound => (StatusCode::NOT_FOUND, "Professional not found"),
        };

        if status.is_server_error() {
            tracing::error!("{:?}", self);
        } else if let Error::Unauthenticated = self {
            tracing::warn!("Rejected bearer credentials");
        } else {
            tracing::debug!("{:?}", self);
        }

        let body = Json(json!({ "status": "error", "message": message }));

        if status == StatusCode::UNAUTHORIZED {
            (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "status": "error", "message": "Internal server error" })),
    )
        .into_response()
}

pub(crate) async fn handle_middleware_errors(err: BoxError) -> Response {
    tracing::error!("Unhandled error: {:?}", err);
    internal_error()
}

pub(crate) fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!("Handler panicked: {}", detail);
    internal_error()
}
