//! Wallet network-guard route

use axum::{extract::State, routing::post, Json, Router};

use crate::dto::{NetworkCheckRequest, NetworkCheckResponse};
use crate::AppState;

/// Create wallet routes
pub fn router() -> Router<AppState> {
    Router::new().route("/network-check", post(network_check))
}

/// POST /wallet/network-check - Should the wrong-network banner show?
async fn network_check(
    State(_state): State<AppState>,
    Json(request): Json<NetworkCheckRequest>,
) -> Json<NetworkCheckResponse> {
    let wrong_network = bridge::is_wrong_network(&request.wallet, request.required_chain_id);
    Json(NetworkCheckResponse { wrong_network })
}
