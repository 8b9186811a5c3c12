use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::clinical::Appointment;
use crate::utils::extract;

/// Negative or non-numeric positions are reported like any other position
/// outside the list.
fn parse_index(index: &str) -> Result<usize, Error> {
    index.parse().map_err(|_| Error::AppointmentNotFound)
}

#[instrument(skip_all, fields(patient_cpf = %appointment.patient_cpf))]
pub(crate) async fn post(
    State(state): State<AppState>,
    extract::Json(appointment): extract::Json<Appointment>,
) -> Result<(StatusCode, Json<Appointment>), Error> {
    let appointment = state.schedule_appointment(appointment).await?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

#[instrument(skip(state))]
pub(crate) async fn get_all(State(state): State<AppState>) -> Json<Vec<Appointment>> {
    Json(state.appointments.list().await)
}

#[instrument(skip(state, appointment))]
pub(crate) async fn put(
    State(state): State<AppState>,
    extract::Path(index): extract::Path<String>,
    extract::Json(appointment): extract::Json<Appointment>,
) -> Result<Json<Appointment>, Error> {
    let appointment = state.appointments.update(parse_index(&index)?, appointment).await?;

    Ok(Json(appointment))
}

#[instrument(skip(state))]
pub(crate) async fn delete(
    State(state): State<AppState>,
    extract::Path(index): extract::Path<String>,
) -> Result<StatusCode, Error> {
    state.appointments.delete(parse_index(&index)?).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("0").unwrap(), 0);
        assert_eq!(parse_index("12").unwrap(), 12);

        for index in ["-1", "abc", "", "1.5"] {
            assert!(matches!(parse_index(index), Err(Error::AppointmentNotFound)));
        }
    }
}
