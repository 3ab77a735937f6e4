use std::sync::Arc;

use axum::{http::StatusCode, middleware::from_fn_with_state, routing::get, Router};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{AppConfig, SwaggerConfig};
use crate::core::middleware::{self, BasicCredentials};
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::auth::model::AdminRole;
use crate::features::auth::JwtValidator;
use crate::features::prizes::{routes as prizes_routes, PrizeService};

/// Everything the HTTP layer needs, built once at startup
pub struct AppServices {
    pub prize_service: Arc<PrizeService>,
    pub jwt_validator: Arc<JwtValidator>,
    pub admin_role: AdminRole,
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

fn swagger_routes(config: &SwaggerConfig) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: config.title.clone(),
        version: config.version.clone(),
        description: config.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    if let Some(credentials) = config.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        swagger.layer(from_fn_with_state(
            BasicCredentials(Arc::new(credentials)),
            middleware::basic_auth_middleware,
        ))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        swagger
    }
}

/// Assemble the full application router with the shared HTTP layers
pub fn build_router(app: &AppConfig, swagger: &SwaggerConfig, services: AppServices) -> Router {
    let prizes = prizes_routes::routes(
        services.prize_service,
        services.jwt_validator,
        services.admin_role,
    );

    Router::new()
        .merge(swagger_routes(swagger))
        .merge(prizes)
        .route("/health", get(health_check))
        .layer(middleware::cors_layer(app.cors_allowed_origins.clone()))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
