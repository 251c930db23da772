//! Data Transfer Objects for API requests and responses

use alloy::primitives::{Address, U256};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use bridge::WalletStatus;
use gantry_core::{BridgeError, ChainId, ChainInfo};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Chain registry entry as served to the front-end
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainDto {
    pub chain_id: ChainId,
    pub name: String,
    pub native_symbol: String,
    pub explorer_url: String,
    pub has_deposit_box: bool,
    pub estimated_time: String,
    pub confirmation_time: String,
}

impl From<&ChainInfo> for ChainDto {
    fn from(chain: &ChainInfo) -> Self {
        Self {
            chain_id: chain.chain_id,
            name: chain.name.clone(),
            native_symbol: chain.native_symbol.clone(),
            explorer_url: chain.explorer_url.clone(),
            has_deposit_box: chain.deposit_box.is_some(),
            estimated_time: chain.estimated_time.clone(),
            confirmation_time: chain.confirmation_time.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainsResponse {
    pub chains: Vec<ChainDto>,
    pub count: usize,
}

/// Resolved deposit-box info
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositBoxResponse {
    pub chain_id: ChainId,
    pub address: Address,
    pub can_send: bool,
}

/// Fee quote request shared by the relay/lp/bridge endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeQuoteRequest {
    pub symbol: String,
    /// Amount in the token's smallest unit
    pub amount: U256,
}

/// Network guard request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkCheckRequest {
    pub wallet: WalletStatus,
    pub required_chain_id: ChainId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkCheckResponse {
    pub wrong_network: bool,
}

/// Pool state snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolStateResponse {
    pub symbol: String,
    pub pool_address: Address,
    pub utilization: U256,
    pub liquid_reserves: U256,
    pub pending_reserves: U256,
}

/// Generic API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("internal_error", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("not_found", message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("bad_request", message)
    }
}

/// Map a bridge error onto its HTTP rendering
pub fn bridge_error_response(err: BridgeError) -> (StatusCode, Json<ApiError>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ApiError::new(err.error_code(), err.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_error_mapping() {
        let (status, Json(body)) = bridge_error_response(BridgeError::UnknownToken {
            symbol: "FAKE".into(),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.code, "unknown_token");
        assert!(body.message.contains("FAKE"));
    }

    #[test]
    fn test_fee_quote_request_parses_decimal_amount() {
        let req: FeeQuoteRequest =
            serde_json::from_str(r#"{"symbol":"ETH","amount":"1000000000000000000"}"#).unwrap();
        assert_eq!(req.amount, U256::from(10u64).pow(U256::from(18u64)));
    }
}
