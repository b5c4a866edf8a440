//! Owner management routes.

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
        owner::{CreateOwnerRequest, OwnerDto},
    },
    service::owner::OwnerService,
};

/// OpenAPI tag for owner management routes.
pub static OWNER_TAG: &str = "owner";

/// List all owners with their associated ship ids
#[utoipa::path(
    get,
    path = "/api/v1/owners",
    tag = OWNER_TAG,
    responses(
        (status = 200, description = "Success when listing owners", body = Vec<OwnerDto>),
        (status = 500, description = "Internal server error", body = ErrorDetailsDto)
    ),
)]
pub async fn get_owners(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<impl IntoResponse, ApiError> {
    let owner_service = OwnerService::new(&state.db);

    let owners = owner_service
        .list_owners()
        .await
        .map_err(|e| e.at(uri.path()))?;

    Ok((StatusCode::OK, Json(owners)))
}

/// Create a new owner
#[utoipa::path(
    post,
    path = "/api/v1/owners",
    tag = OWNER_TAG,
    request_body = CreateOwnerRequest,
    responses(
        (status = 201, description = "Owner successfully created", body = OwnerDto),
        (status = 400, description = "Duplicate owner name or invalid input", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDetailsDto)
    ),
)]
pub async fn create_owner(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Json(request): Json<CreateOwnerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request
        .validate()
        .map_err(|e| Error::from(e).at(uri.path()))?;

    let owner_service = OwnerService::new(&state.db);

    let owner = owner_service
        .create_owner(request)
        .await
        .map_err(|e| e.at(uri.path()))?;

    Ok((StatusCode::CREATED, Json(owner)))
}

/// Delete an owner, unlinking all of its ships
#[utoipa::path(
    delete,
    path = "/api/v1/owners/{ownerId}",
    tag = OWNER_TAG,
    params(
        ("ownerId" = i64, Path, description = "Unique identifier of the owner")
    ),
    responses(
        (status = 204, description = "Owner successfully deleted"),
        (status = 404, description = "Owner not found", body = ErrorDetailsDto),
        (status = 500, description = "Internal server error", body = ErrorDetailsDto)
    ),
)]
pub async fn delete_owner(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(owner_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let owner_service = OwnerService::new(&state.db);

    owner_service
        .delete_owner(owner_id)
        .await
        .map_err(|e| e.at(uri.path()))?;

    Ok(StatusCode::NO_CONTENT)
}
