//! Live gas-fee estimator backed by a provider and a price feed

use alloy::primitives::U256;
use alloy::providers::{DynProvider, Provider};
use async_trait::async_trait;

use gantry_core::constants::ONE_HUNDRED_PCT;
use gantry_core::{BridgeError, TokenInfo};

use crate::capabilities::{GasEstimator, GasFees};
use crate::price::PriceFeed;

/// Converts gas amounts into fee quotes using the chain's current gas price.
///
/// Native-token fees are the raw wei cost. For other tokens the wei cost is
/// converted through the token's ETH price and decimals.
#[derive(Debug, Clone)]
pub struct ProviderGasEstimator {
    provider: DynProvider,
    prices: PriceFeed,
}

impl ProviderGasEstimator {
    pub fn new(provider: DynProvider, prices: PriceFeed) -> Self {
        Self { provider, prices }
    }
}

#[async_trait]
impl GasEstimator for ProviderGasEstimator {
    async fn calculate(
        &self,
        amount: U256,
        gas_units: U256,
        token: Option<&TokenInfo>,
    ) -> Result<GasFees, BridgeError> {
        let gas_price = self
            .provider
            .get_gas_price()
            .await
            .map_err(BridgeError::remote)?;

        let cost_wei = U256::from(gas_price) * gas_units;

        let gas_fees = match token {
            None => cost_wei,
            Some(token) => {
                // price is ETH wei per whole token, so:
                // fee_in_units = cost_wei * 10^decimals / price_wei
                let price_wei = self.prices.token_price_in_wei(token.address).await?;
                cost_wei * U256::from(10u64).pow(U256::from(token.decimals))
                    / U256::from(price_wei)
            }
        };

        let fees_as_percent = if amount.is_zero() {
            U256::ZERO
        } else {
            gas_fees * ONE_HUNDRED_PCT / amount
        };

        Ok(GasFees {
            gas_fees,
            fees_as_percent,
        })
    }
}
