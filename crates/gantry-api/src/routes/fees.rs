//! Fee quote routes

use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};

use bridge::{BridgeFees, LpFeeQuote, PiecewiseCurveEvaluator, RelayFeeQuote};
use evm_client::{EvmClient, PoolContractReader, PriceFeed, ProviderGasEstimator};

use crate::dto::{bridge_error_response, ApiError, FeeQuoteRequest};
use crate::AppState;

/// Create fee routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/relay", post(quote_relay_fees))
        .route("/lp", post(quote_lp_fee))
        .route("/bridge", post(quote_bridge_fees))
}

pub(crate) async fn require_client(
    state: &AppState,
) -> Result<EvmClient, (StatusCode, Json<ApiError>)> {
    state.mainnet_client().await.ok_or_else(|| {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiError::new(
                "rpc_unavailable",
                "Settlement-chain RPC not reachable",
            )),
        )
    })
}

pub(crate) fn pool_reader(
    state: &AppState,
    client: &EvmClient,
    symbol: &str,
) -> Result<PoolContractReader, (StatusCode, Json<ApiError>)> {
    let token = state
        .bridge_config()
        .token(symbol)
        .map_err(bridge_error_response)?;

    let pool_address = token.pool_address.ok_or_else(|| {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiError::new(
                "no_pool",
                format!("No liquidity pool configured for {symbol}"),
            )),
        )
    })?;

    Ok(PoolContractReader::new(client.provider(), pool_address))
}

/// POST /fees/relay - Instant and slow relay fee quote
async fn quote_relay_fees(
    State(state): State<AppState>,
    Json(request): Json<FeeQuoteRequest>,
) -> Result<Json<RelayFeeQuote>, (StatusCode, Json<ApiError>)> {
    let client = require_client(&state).await?;
    let gas = ProviderGasEstimator::new(client.provider(), PriceFeed::new());

    let quote = bridge::get_relay_fees(state.bridge_config(), &gas, &request.symbol, request.amount)
        .await
        .map_err(bridge_error_response)?;

    Ok(Json(quote))
}

/// POST /fees/lp - Liquidity-provider fee quote
async fn quote_lp_fee(
    State(state): State<AppState>,
    Json(request): Json<FeeQuoteRequest>,
) -> Result<Json<LpFeeQuote>, (StatusCode, Json<ApiError>)> {
    let client = require_client(&state).await?;
    let pool = pool_reader(&state, &client, &request.symbol)?;

    let quote = bridge::get_lp_fee(
        state.bridge_config(),
        &pool,
        &PiecewiseCurveEvaluator,
        &request.symbol,
        request.amount,
    )
    .await
    .map_err(bridge_error_response)?;

    Ok(Json(quote))
}

/// POST /fees/bridge - Combined relay + LP quote snapshot
async fn quote_bridge_fees(
    State(state): State<AppState>,
    Json(request): Json<FeeQuoteRequest>,
) -> Result<Json<BridgeFees>, (StatusCode, Json<ApiError>)> {
    let client = require_client(&state).await?;
    let gas = ProviderGasEstimator::new(client.provider(), PriceFeed::new());
    let pool = pool_reader(&state, &client, &request.symbol)?;

    let fees = bridge::get_bridge_fees(
        state.bridge_config(),
        &gas,
        &pool,
        &PiecewiseCurveEvaluator,
        &request.symbol,
        request.amount,
    )
    .await
    .map_err(bridge_error_response)?;

    Ok(Json(fees))
}
