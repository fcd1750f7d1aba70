use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::common::AppState;
use crate::config::ContainerInfo;

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    /// Always `"OK"`
    #[schema(example = "OK")]
    pub status: String,
    pub version: String,
    pub container: ContainerInfo,
}

/// Get Azure IPAM Status
///
/// Reports service health, the running version and container build provenance.
#[utoipa::path(
    get,
    path = "/status",
    responses(
        (status = 200, description = "Service status", body = StatusResponse),
    ),
    tag = "status"
)]
pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    tracing::debug!("status_requested");

    Json(StatusResponse {
        status: "OK".to_string(),
        version: state.config.ipam_version.clone(),
        container: state.config.container.clone(),
    })
}
