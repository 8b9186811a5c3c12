use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::clinical::Professional;
use crate::utils::extract;

#[instrument(skip_all, fields(registration = %professional.registration))]
pub(crate) async fn post(
    State(state): State<AppState>,
    extract::Json(professional): extract::Json<Professional>,
) -> Result<(StatusCode, Json<Professional>), Error> {
    let professional = state.professionals.create(professional).await?;

    Ok((StatusCode::CREATED, Json(professional)))
}

#[instrument(skip(state))]
pub(crate) async fn get_all(State(state): State<AppState>) -> Json<Vec<Professional>> {
    Json(state.professionals.list().await)
}

#[instrument(skip(state, professional))]
pub(crate) async fn put(
    State(state): State<AppState>,
    extract::Path(registration): extract::Path<String>,
    extract::Json(professional): extract::Json<Professional>,
) -> Result<Json<Professional>, Error> {
    let professional = state
        .professionals
        .update(&registration, professional)
        .await?;

    Ok(Json(professional))
}

#[instrument(skip(state))]
pub(crate) async fn delete(
    State(state): State<AppState>,
    extract::Path(registration): extract::Path<String>,
) -> Result<StatusCode, Error> {
    state.professionals.delete(&registration).await?;

    Ok(StatusCode::NO_CONTENT)
}
