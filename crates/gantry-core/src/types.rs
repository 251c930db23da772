//! Core type definitions for Gantry

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

/// EVM chain identifier (EIP-155)
pub type ChainId = u64;

/// Well-known chain ids for the supported networks
pub mod chains {
    use super::ChainId;

    pub const MAINNET: ChainId = 1;
    pub const OPTIMISM: ChainId = 10;
    pub const BOBA: ChainId = 288;
    pub const ARBITRUM: ChainId = 42161;
}

/// A fee snapshot: absolute amount plus percentage of the quoted amount.
///
/// `total` is denominated in the token's smallest unit. `pct` is fixed-point
/// with [`constants::ONE_HUNDRED_PCT`] (1e18) meaning 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    pub total: U256,
    pub pct: U256,
}

impl Fee {
    pub const ZERO: Self = Self {
        total: U256::ZERO,
        pct: U256::ZERO,
    };

    pub fn new(total: U256, pct: U256) -> Self {
        Self { total, pct }
    }

    pub fn is_zero(&self) -> bool {
        self.total.is_zero() && self.pct.is_zero()
    }
}

/// Fixed-point constants
pub mod constants {
    use alloy::primitives::U256;

    /// 1e18 fixed-point unit: one whole token, and also 100% for `pct` values
    pub const ONE_HUNDRED_PCT: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

    /// Percentage threshold above which a quoted amount is flagged too low
    /// (fees eating >= 25% of the amount)
    pub const AMOUNT_TOO_LOW_PCT: u64 = 25;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_zero() {
        assert!(Fee::ZERO.is_zero());
        let fee = Fee::new(U256::from(1u64), U256::ZERO);
        assert!(!fee.is_zero());
    }

    #[test]
    fn test_one_hundred_pct_value() {
        assert_eq!(
            constants::ONE_HUNDRED_PCT,
            U256::from(1_000_000_000_000_000_000u64)
        );
    }

    #[test]
    fn test_fee_serialization_camel_case() {
        let fee = Fee::new(U256::from(42u64), U256::from(7u64));
        let json = serde_json::to_value(&fee).unwrap();
        assert!(json.get("total").is_some());
        assert!(json.get("pct").is_some());
        let parsed: Fee = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, fee);
    }
}
