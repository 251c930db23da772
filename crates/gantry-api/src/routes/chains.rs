//! Chain registry routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use gantry_core::ChainId;

use crate::dto::{bridge_error_response, ApiError, ChainDto, ChainsResponse, DepositBoxResponse};
use crate::AppState;

/// Create chain routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_chains))
        .route("/{chain_id}", get(get_chain))
        .route("/{chain_id}/deposit-box", get(get_deposit_box))
}

/// GET /chains - List the supported chain registry
async fn get_chains(State(state): State<AppState>) -> Json<ChainsResponse> {
    let chains: Vec<ChainDto> = state
        .bridge_config()
        .supported_chains()
        .map(ChainDto::from)
        .collect();
    let count = chains.len();

    Json(ChainsResponse { chains, count })
}

/// GET /chains/:chain_id - Registry entry with both duration strings
async fn get_chain(
    State(state): State<AppState>,
    Path(chain_id): Path<ChainId>,
) -> Result<Json<ChainDto>, (StatusCode, Json<ApiError>)> {
    let chain = state.bridge_config().chain(chain_id).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ApiError::not_found(format!("Unknown chain: {chain_id}"))),
        )
    })?;

    Ok(Json(ChainDto::from(chain)))
}

/// GET /chains/:chain_id/deposit-box - Resolve the chain's deposit box
/// (read-only: no signer is attached server-side)
async fn get_deposit_box(
    State(state): State<AppState>,
    Path(chain_id): Path<ChainId>,
) -> Result<Json<DepositBoxResponse>, (StatusCode, Json<ApiError>)> {
    let client = bridge::deposit_box_for_chain(state.bridge_config(), chain_id, None)
        .await
        .map_err(bridge_error_response)?;

    Ok(Json(DepositBoxResponse {
        chain_id: client.chain_id(),
        address: client.address(),
        can_send: client.can_send(),
    }))
}
