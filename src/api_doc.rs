use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::ProverbPayload;
use crate::store::Proverb;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "proverbs-api",
        version = "1.0.0",
        description = "A small proverbs CRUD API backed by a JSON file snapshot"
    ),
    paths(
        handlers::health::health_handler,
        handlers::create::create_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Proverb,
            ProverbPayload,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "proverbs", description = "Proverb CRUD operations")
    )
)]
pub struct ApiDoc;
