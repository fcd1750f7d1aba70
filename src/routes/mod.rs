pub mod status;

use axum::{http::Uri, routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::common::AppState;
use crate::config::ContainerInfo;
use crate::error::AppError;

#[derive(OpenApi)]
#[openapi(
    paths(status::get_status),
    components(schemas(status::StatusResponse, ContainerInfo)),
    tags(
        (name = "status", description = "Service status"),
    ),
    info(
        title = "IPAM API",
        description = "Status endpoint for the IPAM engine"
    )
)]
struct ApiDoc;

pub fn build_router(state: AppState) -> Router {
    let mut openapi = ApiDoc::openapi();
    openapi.info.version.clone_from(&state.config.ipam_version);

    let status_routes = Router::new().route("/status", get(status::get_status));

    // OpenAPI documentation
    let docs_routes = Router::new().merge(Scalar::with_url("/docs", openapi));

    Router::new()
        .merge(status_routes)
        .merge(docs_routes)
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
