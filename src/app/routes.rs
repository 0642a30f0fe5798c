use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

pub const PERSON_SEARCH_PATH: &str = "/api/v1/directory/persons/search";
pub const ORGANIZATION_SEARCH_PATH: &str = "/api/v1/directory/organizations/search";
pub const MOTOR_VEHICLE_SEARCH_PATH: &str = "/api/v1/motor-vehicles/search";
pub const LEGACY_PERSON_SEARCH_PATH: &str = "/api/v1/persons/search";
pub const HEALTH_PATH: &str = "/health";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            PERSON_SEARCH_PATH,
            get(handlers::search_person).post(handlers::search_person),
        )
        .route(
            ORGANIZATION_SEARCH_PATH,
            get(handlers::search_organization).post(handlers::search_organization),
        )
        .route(
            MOTOR_VEHICLE_SEARCH_PATH,
            get(handlers::search_motor_vehicle).post(handlers::search_motor_vehicle),
        )
        .route(LEGACY_PERSON_SEARCH_PATH, post(handlers::search_legacy_person))
        .route(HEALTH_PATH, get(handlers::health))
        .with_state(state)
}

/// The router with request tracing. Slow upstreams are bounded by the client timeout.
pub fn app(state: AppState) -> Router {
    router(state).layer(TraceLayer::new_for_http())
}
