//! Token price lookups for gas-cost conversion
//!
//! Prices come from the CoinGecko token-price endpoint, quoted against ETH.
//! No caching here: the fee quoter issues one lookup per quote and a stale
//! price is worse than a slow one.

use alloy::primitives::Address;
use serde_json::Value;

use gantry_core::BridgeError;

const COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// On-demand CoinGecko price client
#[derive(Debug, Clone)]
pub struct PriceFeed {
    client: reqwest::Client,
    base_url: String,
}

impl PriceFeed {
    pub fn new() -> Self {
        Self::with_base_url(COINGECKO_BASE_URL)
    }

    /// Point at a different endpoint (test servers)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Price of one whole token in ETH wei
    pub async fn token_price_in_wei(&self, token: Address) -> Result<u128, BridgeError> {
        // CoinGecko keys responses by lowercase address
        let address = token.to_string().to_lowercase();
        let url = format!(
            "{}/simple/token_price/ethereum?contract_addresses={}&vs_currencies=eth",
            self.base_url, address
        );

        let resp: Value = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(BridgeError::remote)?
            .json()
            .await
            .map_err(BridgeError::remote)?;

        let price_eth = resp
            .get(&address)
            .and_then(|v| v.get("eth"))
            .and_then(|v| v.as_f64())
            .ok_or_else(|| BridgeError::RemoteCallFailed {
                message: format!("no price returned for token {address}"),
            })?;

        price_to_wei(price_eth, &address)
    }
}

/// Convert an ETH-denominated price into wei.
///
/// A price that truncates to zero wei is rejected along with non-positive
/// ones: the gas estimator divides by this value, so zero must never escape.
fn price_to_wei(price_eth: f64, address: &str) -> Result<u128, BridgeError> {
    if price_eth <= 0.0 {
        return Err(BridgeError::RemoteCallFailed {
            message: format!("non-positive price for token {address}"),
        });
    }

    let price_wei = (price_eth * 1e18) as u128;
    if price_wei == 0 {
        return Err(BridgeError::RemoteCallFailed {
            message: format!("price for token {address} rounds to zero wei"),
        });
    }

    Ok(price_wei)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_conversion_to_wei() {
        assert_eq!(price_to_wei(1.0, "0xabc").unwrap(), 1_000_000_000_000_000_000);
        assert_eq!(price_to_wei(0.5, "0xabc").unwrap(), 500_000_000_000_000_000);
    }

    #[test]
    fn test_non_positive_price_is_rejected() {
        assert!(price_to_wei(0.0, "0xabc").is_err());
        assert!(price_to_wei(-1.0, "0xabc").is_err());
    }

    #[test]
    fn test_sub_wei_price_is_rejected() {
        // below 1e-18 ETH the wei conversion truncates to zero, which would
        // become a zero divisor in the gas estimator
        let err = price_to_wei(1e-19, "0xabc").unwrap_err();
        assert!(err.to_string().contains("zero wei"));
    }
}

impl Default for PriceFeed {
    fn default() -> Self {
        Self::new()
    }
}
