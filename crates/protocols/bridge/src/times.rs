//! Human-readable deposit duration lookups
//!
//! Pure mappings over the chain registry. Unknown chains yield `None`;
//! callers treat that as a display error, never a crash.

use gantry_core::{BridgeConfig, ChainId};

/// Expected wait before a deposit from this chain is relayed
pub fn estimated_deposit_time(config: &BridgeConfig, chain_id: ChainId) -> Option<&str> {
    config.chain(chain_id).map(|c| c.estimated_time.as_str())
}

/// Expected wait after relay until the deposit is confirmed
pub fn confirmation_deposit_time(config: &BridgeConfig, chain_id: ChainId) -> Option<&str> {
    config.chain(chain_id).map(|c| c.confirmation_time.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_core::types::chains;

    #[test]
    fn test_known_chains_have_both_durations() {
        let config = BridgeConfig::mainnet();
        for chain_id in [chains::MAINNET, chains::OPTIMISM, chains::BOBA, chains::ARBITRUM] {
            assert!(estimated_deposit_time(&config, chain_id).is_some());
            assert!(confirmation_deposit_time(&config, chain_id).is_some());
        }
    }

    #[test]
    fn test_unknown_chain_has_no_duration() {
        let config = BridgeConfig::mainnet();
        for chain_id in [0, 56, 137, 1337] {
            assert_eq!(estimated_deposit_time(&config, chain_id), None);
            assert_eq!(confirmation_deposit_time(&config, chain_id), None);
        }
    }

    #[test]
    fn test_arbitrum_durations() {
        let config = BridgeConfig::mainnet();
        assert_eq!(
            estimated_deposit_time(&config, chains::ARBITRUM),
            Some("~10 minutes")
        );
        assert_eq!(
            confirmation_deposit_time(&config, chains::ARBITRUM),
            Some("~10 minutes")
        );
    }
}
