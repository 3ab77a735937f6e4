use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::prizes::{dtos as prizes_dtos, handlers as prizes_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Prizes (writes are admin only)
        prizes_handlers::add_prize,
        prizes_handlers::delete_prize,
        prizes_handlers::update_prize,
        prizes_handlers::list_prizes,
        prizes_handlers::get_prize,
    ),
    components(
        schemas(
            Meta,
            prizes_dtos::CreatePrizeDto,
            prizes_dtos::UpdatePrizeDto,
            prizes_dtos::PrizeResponseDto,
            ApiResponse<prizes_dtos::PrizeResponseDto>,
            ApiResponse<Vec<prizes_dtos::PrizeResponseDto>>,
        )
    ),
    tags(
        (name = "Prizes", description = "Prize management"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Prizes API",
        version = "0.1.0",
        description = "API documentation for the prizes service",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
