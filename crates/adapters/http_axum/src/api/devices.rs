//! JSON REST handlers for devices.
//!
//! Bodies are taken as raw [`Body`] rather than through `Json` so that the
//! request content type is never checked and decode failures surface as the
//! service's own 400 message.

use std::collections::BTreeMap;

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use devhub_app::ports::DeviceRepository;
use devhub_domain::device::Device;
use devhub_domain::error::{DecodeError, DeviceHubError};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<BTreeMap<String, Device>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Device>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created,
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created => StatusCode::CREATED.into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok,
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => StatusCode::OK.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

async fn read_body(body: Body, limit: usize) -> Result<Bytes, ApiError> {
    axum::body::to_bytes(body, limit)
        .await
        .map_err(|err| DeviceHubError::from(DecodeError::Body(Box::new(err))).into())
}

/// `GET /devices`
pub async fn list<DR>(State(state): State<AppState<DR>>) -> Result<ListResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let devices = state.device_service.list_devices().await?;
    Ok(ListResponse::Ok(Json(devices)))
}

/// `GET /devices/{id}`
pub async fn get<DR>(
    State(state): State<AppState<DR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let device = state.device_service.get_device(&id).await?;
    Ok(GetResponse::Ok(Json(device)))
}

/// `POST /devices`
pub async fn create<DR>(
    State(state): State<AppState<DR>>,
    body: Body,
) -> Result<CreateResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let bytes = read_body(body, state.body_limit).await?;
    state.device_service.create_device(&bytes).await?;
    Ok(CreateResponse::Created)
}

/// `PATCH /devices/{id}`
pub async fn update<DR>(
    State(state): State<AppState<DR>>,
    Path(id): Path<String>,
    body: Body,
) -> Result<UpdateResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    // Unknown ids are answered before the body is read.
    state.device_service.ensure_device_exists(&id).await?;

    let bytes = read_body(body, state.body_limit).await?;
    state.device_service.update_device(&id, &bytes).await?;
    Ok(UpdateResponse::Ok)
}

/// `DELETE /devices/{id}`
pub async fn delete<DR>(
    State(state): State<AppState<DR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    state.device_service.delete_device(&id).await?;
    Ok(DeleteResponse::NoContent)
}
