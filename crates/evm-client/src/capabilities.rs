//! Capability traits sitting between the quoting layer and the network
//!
//! Every remote collaborator the fee quoter touches is reached through one of
//! these traits. Production wires in the alloy-backed implementations from
//! this crate; tests supply deterministic stubs.

use alloy::primitives::U256;
use async_trait::async_trait;

use gantry_core::{BridgeError, ChainId, RateModel, TokenInfo};

/// Output of a gas-fee calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasFees {
    /// Absolute fee in the quoted token's smallest unit
    pub gas_fees: U256,
    /// Fee as a fraction of the quoted amount, 1e18 = 100%
    pub fees_as_percent: U256,
}

/// Converts a gas amount into a fee quote at the current network gas price.
///
/// For non-native tokens the implementation converts the wei cost into token
/// units using the token's market price and decimals.
#[async_trait]
pub trait GasEstimator: Send + Sync {
    async fn calculate(
        &self,
        amount: U256,
        gas_units: U256,
        token: Option<&TokenInfo>,
    ) -> Result<GasFees, BridgeError>;
}

/// Read-only view of a token's liquidity-pool contract
#[async_trait]
pub trait LiquidityPoolReader: Send + Sync {
    /// Current utilization ratio, 1e18 fixed point
    async fn utilization_current(&self) -> Result<U256, BridgeError>;

    /// Utilization ratio after relaying `amount`, 1e18 fixed point
    async fn utilization_post_relay(&self, amount: U256) -> Result<U256, BridgeError>;

    /// Total liquid reserves in token units
    async fn liquid_reserves(&self) -> Result<U256, BridgeError>;

    /// Reserves already committed to pending relays
    async fn pending_reserves(&self) -> Result<U256, BridgeError>;
}

/// Evaluates the realized LP fee percentage for a utilization move along a
/// configured interest-rate curve. Pure computation, no I/O.
pub trait FeeCurveEvaluator: Send + Sync {
    fn realized_lp_fee_pct(
        &self,
        model: &RateModel,
        util_before: U256,
        util_after: U256,
    ) -> Result<U256, BridgeError>;
}

/// External chain-switch capability. Callers fire and forget; the result is
/// never awaited by the quoting layer.
#[async_trait]
pub trait ChainSwitcher: Send + Sync {
    async fn switch_chain(&self, chain_id: ChainId) -> Result<(), BridgeError>;
}
