use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request::LoginData;
use crate::types::response::AccessToken;
use crate::utils::extract::Form;

#[instrument(skip_all, fields(username = %form.username))]
pub(crate) async fn token(
    State(state): State<AppState>,
    Form(form): Form<LoginData>,
) -> Result<Json<AccessToken>, Error> {
    let user = match state.auth.authenticate(&form.username, &form.password) {
        Ok(user) => user,
        Err(Error::InvalidCredentials) => {
            tracing::warn!("Failed login attempt");
            return Err(Error::InvalidCredentials);
        }
        Err(e) => return Err(e),
    };

    let token = state.auth.issue_token(&user)?;

    tracing::info!("Issued token with role {}", user.role);

    Ok(Json(token))
}
