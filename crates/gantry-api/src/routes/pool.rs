//! Pool state route (hidden when the pool feature flag is set)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use evm_client::LiquidityPoolReader;

use crate::dto::{bridge_error_response, ApiError, PoolStateResponse};
use crate::routes::fees;
use crate::AppState;

/// Create pool routes
pub fn router() -> Router<AppState> {
    Router::new().route("/{symbol}", get(get_pool_state))
}

/// GET /pool/:symbol - Current utilization and reserves for a token's pool
async fn get_pool_state(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<PoolStateResponse>, (StatusCode, Json<ApiError>)> {
    let client = fees::require_client(&state).await?;
    let pool = fees::pool_reader(&state, &client, &symbol)?;

    let (utilization, liquid_reserves, pending_reserves) = tokio::try_join!(
        pool.utilization_current(),
        pool.liquid_reserves(),
        pool.pending_reserves(),
    )
    .map_err(bridge_error_response)?;

    Ok(Json(PoolStateResponse {
        symbol,
        pool_address: pool.address(),
        utilization,
        liquid_reserves,
        pending_reserves,
    }))
}
