//! Bridge protocol constants

/// Gas used by a slow relay of ETH
pub const SLOW_ETH_GAS: u64 = 243_177;

/// Gas used by an instant relay of ETH
pub const FAST_ETH_GAS: u64 = 273_519;

/// Gas used by a slow relay of a generic ERC-20
pub const SLOW_ERC_GAS: u64 = 250_939;

/// Gas used by an instant relay of a generic ERC-20
pub const FAST_ERC_GAS: u64 = 281_242;

/// Gas used by a slow relay of UMA (extra transfer hooks)
pub const SLOW_UMA_GAS: u64 = 273_955;

/// Gas used by an instant relay of UMA
pub const FAST_UMA_GAS: u64 = 305_572;

/// Flat discount applied to relay gas estimates, in percent
pub const GAS_DISCOUNT_PCT: u64 = 25;

/// Gas-unit constants for a token's relay paths, `(fast, slow)`.
///
/// ETH and UMA have measured constants; everything else uses the generic
/// ERC-20 figures.
pub fn relay_gas_units(symbol: &str) -> (u64, u64) {
    match symbol {
        "ETH" => (FAST_ETH_GAS, SLOW_ETH_GAS),
        "UMA" => (FAST_UMA_GAS, SLOW_UMA_GAS),
        _ => (FAST_ERC_GAS, SLOW_ERC_GAS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_exceeds_slow_for_every_class() {
        for symbol in ["ETH", "UMA", "USDC"] {
            let (fast, slow) = relay_gas_units(symbol);
            assert!(fast > slow, "fast gas must exceed slow gas for {symbol}");
        }
    }

    #[test]
    fn test_generic_erc20_fallback() {
        assert_eq!(relay_gas_units("DAI"), (FAST_ERC_GAS, SLOW_ERC_GAS));
        assert_eq!(relay_gas_units("WBTC"), (FAST_ERC_GAS, SLOW_ERC_GAS));
    }
}
