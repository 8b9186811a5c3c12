use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::clinical::Patient;
use crate::utils::extract;

#[instrument(skip_all, fields(cpf = %patient.cpf))]
pub(crate) async fn post(
    State(state): State<AppState>,
    extract::Json(patient): extract::Json<Patient>,
) -> Result<(StatusCode, Json<Patient>), Error> {
    let patient = state.patients.create(patient).await?;

    Ok((StatusCode::CREATED, Json(patient)))
}

#[instrument(skip(state))]
pub(crate) async fn get_all(State(state): State<AppState>) -> Json<Vec<Patient>> {
    Json(state.patients.list().await)
}

#[instrument(skip(state, patient))]
pub(crate) async fn put(
    State(state): State<AppState>,
    extract::Path(cpf): extract::Path<String>,
    extract::Json(patient): extract::Json<Patient>,
) -> Result<Json<Patient>, Error> {
    let patient = state.patients.update(&cpf, patient).await?;

    Ok(Json(patient))
}

#[instrument(skip(state))]
pub(crate) async fn delete(
    State(state): State<AppState>,
    extract::Path(cpf): extract::Path<String>,
) -> Result<StatusCode, Error> {
    state.patients.delete(&cpf).await?;

    Ok(StatusCode::NO_CONTENT)
}
