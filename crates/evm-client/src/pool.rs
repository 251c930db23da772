//! Liquidity-pool contract reader

use alloy::primitives::{Address, U256};
use alloy::providers::DynProvider;
use async_trait::async_trait;

use gantry_core::BridgeError;

use crate::capabilities::LiquidityPoolReader;
use crate::contracts::IBridgePool;

/// [`LiquidityPoolReader`] bound to one token's pool contract
#[derive(Debug, Clone)]
pub struct PoolContractReader {
    contract: IBridgePool::IBridgePoolInstance<DynProvider>,
}

impl PoolContractReader {
    pub fn new(provider: DynProvider, pool_address: Address) -> Self {
        Self {
            contract: IBridgePool::new(pool_address, provider),
        }
    }

    pub fn address(&self) -> Address {
        *self.contract.address()
    }
}

#[async_trait]
impl LiquidityPoolReader for PoolContractReader {
    async fn utilization_current(&self) -> Result<U256, BridgeError> {
        self.contract
            .liquidityUtilizationCurrent()
            .call()
            .await
            .map_err(BridgeError::remote)
    }

    async fn utilization_post_relay(&self, amount: U256) -> Result<U256, BridgeError> {
        self.contract
            .liquidityUtilizationPostRelay(amount)
            .call()
            .await
            .map_err(BridgeError::remote)
    }

    async fn liquid_reserves(&self) -> Result<U256, BridgeError> {
        self.contract
            .liquidReserves()
            .call()
            .await
            .map_err(BridgeError::remote)
    }

    async fn pending_reserves(&self) -> Result<U256, BridgeError> {
        self.contract
            .pendingReserves()
            .call()
            .await
            .map_err(BridgeError::remote)
    }
}
