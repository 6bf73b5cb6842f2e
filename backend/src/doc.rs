//! OpenAPI document for the REST API.
//!
//! Registers every handler under `inbound::http`, the error wrappers from
//! [`crate::inbound::http::schemas`] and the request and response DTOs. The
//! document backs Swagger UI in debug builds and `openapi-dump`.

use crate::inbound::http::authors::{AuthorResponse, LoginRequest, RegisterRequest};
use crate::inbound::http::recipes_dto::{
    CategoryListingResponse, CategoryResponse, NavigationResponse, RecipePageResponse,
    RecipeRequest, RecipeResponse, SearchListingResponse,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, FieldErrorSchema};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Adds the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/authors/login.",
            ))),
        );
    }
}

/// OpenAPI document for the cookbook API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Cookbook API",
        description = "Author accounts, draft recipes and the public recipe catalogue."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::authors::register,
        crate::inbound::http::authors::login,
        crate::inbound::http::authors::logout,
        crate::inbound::http::authors::dashboard,
        crate::inbound::http::authors::create_draft,
        crate::inbound::http::authors::get_draft,
        crate::inbound::http::authors::update_draft,
        crate::inbound::http::authors::delete_draft,
        crate::inbound::http::recipes::home,
        crate::inbound::http::recipes::search,
        crate::inbound::http::recipes::category,
        crate::inbound::http::recipes::detail,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        FieldErrorSchema,
        RegisterRequest,
        LoginRequest,
        AuthorResponse,
        RecipeRequest,
        RecipeResponse,
        CategoryResponse,
        NavigationResponse,
        RecipePageResponse,
        CategoryListingResponse,
        SearchListingResponse,
    )),
    tags(
        (name = "authors", description = "Author accounts and the draft dashboard"),
        (name = "recipes", description = "Public catalogue of published recipes"),
        (name = "health", description = "Liveness and readiness checks")
    )
)]
pub struct ApiDoc;
