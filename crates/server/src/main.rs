use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use server_api::{load_pricing, save_pricing, ApiContext, SavePricingError};
use shared::{domain::Matrix, error::ApiError, protocol};
use storage::PricingStore;
use tower_http::{limit::RequestBodyLimitLayer, services::ServeFile};
use tracing::{error, info};

mod config;

use config::load_settings;

#[derive(Clone)]
struct AppState {
    api: ApiContext,
}

// The matrix is 12 numbers; anything near this cap is garbage input.
const MAX_BODY_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let store = PricingStore::new(&settings.pricing_path, &settings.public_pricing_path)
        .map_err(|err| {
            error!(
                pricing_path = %settings.pricing_path,
                %err,
                "failed to prepare pricing paths; verify directory permissions"
            );
            err
        })?;

    let state = AppState {
        api: ApiContext { store },
    };
    let app = build_router(Arc::new(state), &settings.public_pricing_path);

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "pricing server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>, public_pricing_path: impl AsRef<Path>) -> Router {
    Router::new()
        .route(protocol::HEALTHZ_ROUTE, get(healthz))
        .route(protocol::GET_PRICING_ROUTE, get(http_get_pricing))
        .route(protocol::SAVE_PRICING_ROUTE, post(http_save_pricing))
        .route_service(
            protocol::PRICING_ASSET_ROUTE,
            ServeFile::new(public_pricing_path.as_ref()),
        )
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn http_get_pricing(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Matrix>, (StatusCode, Json<ApiError>)> {
    let matrix = load_pricing(&state.api).await.map_err(map_save_error)?;
    Ok(Json(matrix))
}

async fn http_save_pricing(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Matrix>, JsonRejection>,
) -> Result<Json<Matrix>, (StatusCode, Json<ApiError>)> {
    // A body that does not parse into the full 12-cell shape is a validation
    // failure, same as an out-of-bounds price.
    let Json(matrix) = payload.map_err(|rejection| {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiError::new(rejection.body_text())),
        )
    })?;

    let stored = save_pricing(&state.api, matrix)
        .await
        .map_err(map_save_error)?;
    Ok(Json(stored))
}

fn map_save_error(err: SavePricingError) -> (StatusCode, Json<ApiError>) {
    match &err {
        SavePricingError::Validation(_) => {
            let body = err
                .first_violation_message()
                .map(ApiError::new)
                .unwrap_or_else(ApiError::generic);
            (StatusCode::UNPROCESSABLE_ENTITY, Json(body))
        }
        SavePricingError::Storage(source) => {
            error!(%source, "failed to persist pricing matrix");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ApiError::unknown()))
        }
    }
}
