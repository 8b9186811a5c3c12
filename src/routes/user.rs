use axum::Json;
use axum::extract::Extension;

use crate::types::Credential;
use crate::types::response::Principal;

pub(crate) async fn me(Extension(user): Extension<Credential>) -> Json<Principal> {
    Json(Principal::from(&user))
}
