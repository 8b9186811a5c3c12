use crate::core::error;
use crate::core::state::AppState;
use crate::routes::{appointments, auth, patients, professionals, user};
use crate::types::response::Status;
use crate::utils;
use axum::error_handling::HandleErrorLayer;
use axum::{
    Json, Router,
    extract::{MatchedPath, Request},
    http::Method,
    middleware,
    routing::{get, post, put},
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    trace::TraceLayer,
};
use tracing::info_span;

pub(crate) fn routes(state: AppState, requests_per_second: u64) -> Router {
    with_layers(api(state), requests_per_second)
}

fn api(state: AppState) -> Router {
    // /patients/...
    let patient_router = Router::new()
        .route("/", get(patients::get_all).post(patients::post))
        .route("/{cpf}", put(patients::put).delete(patients::delete));

    // /appointments/...
    let appointment_router = Router::new()
        .route("/", get(appointments::get_all).post(appointments::post))
        .route("/{index}", put(appointments::put).delete(appointments::delete));

    // /professionals/...
    let professional_router = Router::new()
        .route("/", get(professionals::get_all).post(professionals::post))
        .route(
            "/{registration}",
            put(professionals::put).delete(professionals::delete),
        );

    let authorized_routes = Router::new()
        .route("/users/me", get(user::me))
        .nest("/patients", patient_router)
        .nest("/appointments", appointment_router)
        .nest("/professionals", professional_router)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            utils::auth::authenticate,
        ));

    Router::new()
        .route(
            "/",
            get(|| async {
                Json(Status {
                    message: "SGHSS API is up",
                })
            }),
        )
        .route("/token", post(auth::token))
        .merge(authorized_routes)
        .with_state(state)
}

fn with_layers(router: Router, requests_per_second: u64) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str);

                    info_span!(
                        "request",
                        method = ?request.method(),
                        matched_path,
                    )
                }),
            )
            .layer(CatchPanicLayer::custom(error::handle_panic))
            .layer(HandleErrorLayer::new(error::handle_middleware_errors))
            .buffer(128)
            .rate_limit(requests_per_second, Duration::from_secs(1))
            .layer(
                CorsLayer::new()
                    .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                    .allow_origin(cors::Any),
            ),
    )
}
