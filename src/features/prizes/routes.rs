use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};

use crate::core::middleware::{admin_middleware, auth_middleware};
use crate::features::auth::model::AdminRole;
use crate::features::auth::JwtValidator;
use crate::features::prizes::handlers;
use crate::features::prizes::services::PrizeService;

/// Create routes for the prizes feature
///
/// Writes go through authenticate, then the admin check, before reaching a handler.
/// Reads are public. The collection path is served with and without a trailing slash.
pub fn routes(
    service: Arc<PrizeService>,
    validator: Arc<JwtValidator>,
    admin_role: AdminRole,
) -> Router {
    // route_layer wraps outward, so the last layer added runs first
    let admin_routes = Router::new()
        .route("/prizes", post(handlers::add_prize))
        .route("/prizes/", post(handlers::add_prize))
        .route(
            "/prizes/{id}",
            put(handlers::update_prize).delete(handlers::delete_prize),
        )
        .route_layer(from_fn_with_state(admin_role, admin_middleware))
        .route_layer(from_fn_with_state(validator, auth_middleware))
        .with_state(Arc::clone(&service));

    let public_routes = Router::new()
        .route("/prizes", get(handlers::list_prizes))
        .route("/prizes/", get(handlers::list_prizes))
        .route("/prizes/{id}", get(handlers::get_prize))
        .with_state(service);

    admin_routes.merge(public_routes)
}
