//! Serializable quote snapshots for frontend communication

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

use gantry_core::Fee;

/// Relay fee quote for a token/amount pair
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayFeeQuote {
    /// Incremental cost of upgrading a slow relay to instant
    pub instant_relay_fee: Fee,
    /// Baseline slow-path cost
    pub slow_relay_fee: Fee,
    /// Set when the combined fees would eat 25% or more of the amount
    pub is_amount_too_low: bool,
}

/// Liquidity-provider fee quote
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LpFeeQuote {
    /// Realized LP fee percentage, 1e18 = 100%
    pub pct: U256,
    /// Absolute fee in token units
    pub total: U256,
    /// Set when the pool's uncommitted reserves cannot cover the amount
    pub is_liquidity_insufficient: bool,
}

impl LpFeeQuote {
    pub fn fee(&self) -> Fee {
        Fee::new(self.total, self.pct)
    }
}

/// Combined quote snapshot: relay fees plus LP fee, one moment in time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeFees {
    pub instant_relay_fee: Fee,
    pub slow_relay_fee: Fee,
    pub lp_fee: Fee,
    pub is_amount_too_low: bool,
    pub is_liquidity_insufficient: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_serialization_camel_case() {
        let quote = RelayFeeQuote {
            instant_relay_fee: Fee::ZERO,
            slow_relay_fee: Fee::ZERO,
            is_amount_too_low: false,
        };
        let json = serde_json::to_value(&quote).unwrap();
        assert!(json.get("instantRelayFee").is_some());
        assert!(json.get("slowRelayFee").is_some());
        assert!(json.get("isAmountTooLow").is_some());
    }

    #[test]
    fn test_lp_quote_fee_view() {
        let quote = LpFeeQuote {
            pct: U256::from(5u64),
            total: U256::from(10u64),
            is_liquidity_insufficient: true,
        };
        let fee = quote.fee();
        assert_eq!(fee.total, U256::from(10u64));
        assert_eq!(fee.pct, U256::from(5u64));
    }
}
