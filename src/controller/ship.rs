//! Ship management routes.

use axum::{
    extract::{OriginalUri, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::{ApiError, Error},
    model::{
        api::{ErrorDetailsDto, ValidationErrorsDto},
        app::AppState,
        ship::{CreateShipRequest, ShipDto, UpdateShipRequest},
    },
    service::ship::ShipService,
};

/// OpenAPI tag for ship management routes.
pub static SHIP_TAG: &str = "ship";

/// List all ships with their details and owner ids
#[utoipa::path(
    get,
    path = "/api/v1/ships",
    tag = SHIP_TAG,
    responses(
        (status = 200, description = "Success when listing ships", body = Vec<ShipDto>),
        (status = 500, description = "Internal server error", body = ErrorDetailsDto)
    ),
)]
pub async fn get_ships(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<impl IntoResponse, ApiError> {
    let ship_service = ShipService::new(&state.db);

    let ships = ship_service
        .list_ships()
        .await
        .map_err(|e| e.at(uri.path()))?;

    Ok((StatusCode::OK, Json(ships)))
}

/// Get one ship with its category details and owners resolved
#[utoipa::path(
    get,
    path = "/api/v1/ships/{shipId}",
    tag = SHIP_TAG,
    params(
        ("shipId" = i64, Path, description = "Unique identifier of the ship")
    ),
    responses(
        (status = 200, description = "Success when retrieving the ship", body = ShipDto),
        (status = 404, description = "Ship not found", body = ErrorDetailsDto),
        (status = 500, description = "Internal server error", body = ErrorDetailsDto)
    ),
)]
pub async fn get_ship(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(ship_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let ship_service = ShipService::new(&state.db);

    let ship = ship_service
        .get_ship(ship_id)
        .await
        .map_err(|e| e.at(uri.path()))?;

    Ok((StatusCode::OK, Json(ship)))
}

/// Create a new ship associated with existing owners
#[utoipa::path(
    post,
    path = "/api/v1/ships",
    tag = SHIP_TAG,
    request_body = CreateShipRequest,
    responses(
        (status = 201, description = "Ship successfully created", body = ShipDto),
        (status = 400, description = "Duplicate IMO number or invalid input", body = ValidationErrorsDto),
        (status = 404, description = "One or more owner ids not found", body = ErrorDetailsDto),
        (status = 500, description = "Internal server error", body = ErrorDetailsDto)
    ),
)]
pub async fn create_ship(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Json(request): Json<CreateShipRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request
        .validate()
        .map_err(|e| Error::from(e).at(uri.path()))?;

    let ship_service = ShipService::new(&state.db);

    let ship = ship_service
        .create_ship(request)
        .await
        .map_err(|e| e.at(uri.path()))?;

    Ok((StatusCode::CREATED, Json(ship)))
}

/// Update a ship's name, details, and owner associations
#[utoipa::path(
    put,
    path = "/api/v1/ships/{shipId}",
    tag = SHIP_TAG,
    params(
        ("shipId" = i64, Path, description = "Unique identifier of the ship")
    ),
    request_body = UpdateShipRequest,
    responses(
        (status = 200, description = "Ship successfully updated", body = ShipDto),
        (status = 400, description = "Invalid input", body = ValidationErrorsDto),
        (status = 404, description = "Ship or one or more owner ids not found", body = ErrorDetailsDto),
        (status = 500, description = "Internal server error", body = ErrorDetailsDto)
    ),
)]
pub async fn update_ship(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(ship_id): Path<i64>,
    Json(request): Json<UpdateShipRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request
        .validate()
        .map_err(|e| Error::from(e).at(uri.path()))?;

    let ship_service = ShipService::new(&state.db);

    let ship = ship_service
        .update_ship(ship_id, request)
        .await
        .map_err(|e| e.at(uri.path()))?;

    Ok((StatusCode::OK, Json(ship)))
}

/// Delete a ship along with its details and ownership links
#[utoipa::path(
    delete,
    path = "/api/v1/ships/{shipId}",
    tag = SHIP_TAG,
    params(
        ("shipId" = i64, Path, description = "Unique identifier of the ship")
    ),
    responses(
        (status = 204, description = "Ship successfully deleted"),
        (status = 404, description = "Ship not found", body = ErrorDetailsDto),
        (status = 500, description = "Internal server error", body = ErrorDetailsDto)
    ),
)]
pub async fn delete_ship(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(ship_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let ship_service = ShipService::new(&state.db);

    ship_service
        .delete_ship(ship_id)
        .await
        .map_err(|e| e.at(uri.path()))?;

    Ok(StatusCode::NO_CONTENT)
}
