//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at
//! `/api/docs`.

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// # Registered Endpoints
/// - `GET /api/v1/owners` - List owners with their ship ids
/// - `POST /api/v1/owners` - Create an owner
/// - `DELETE /api/v1/owners/{ownerId}` - Delete an owner and unlink its ships
/// - `GET /api/v1/ships` - List ships with details and owner ids
/// - `GET /api/v1/ships/{shipId}` - Get one ship with details and owners
/// - `POST /api/v1/ships` - Create a ship linked to existing owners
/// - `PUT /api/v1/ships/{shipId}` - Update a ship
/// - `DELETE /api/v1/ships/{shipId}` - Delete a ship and unlink its owners
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`; `/` and
/// `/docs` redirect to the Swagger UI.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Logbook", description = "Vessel and owner registry API"), tags(
        (name = controller::owner::OWNER_TAG, description = "Owner management API routes"),
        (name = controller::ship::SHIP_TAG, description = "Ship management API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::owner::get_owners,
            controller::owner::create_owner
        ))
        .routes(routes!(controller::owner::delete_owner))
        .routes(routes!(
            controller::ship::get_ships,
            controller::ship::create_ship
        ))
        .routes(routes!(
            controller::ship::get_ship,
            controller::ship::update_ship,
            controller::ship::delete_ship
        ))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .route("/", get(controller::home::home))
        .route("/docs", get(controller::home::home))
}
