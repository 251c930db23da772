//! Chain-switch requests against a wallet RPC endpoint

use alloy::providers::{DynProvider, Provider};
use async_trait::async_trait;
use serde::Serialize;

use gantry_core::{BridgeError, ChainId};

use crate::capabilities::ChainSwitcher;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct SwitchChainParams {
    chain_id: String,
}

/// Issues `wallet_switchEthereumChain` through the connected provider.
///
/// Only meaningful when the provider is a wallet-backed endpoint; public RPC
/// nodes reject the method, which the fire-and-forget caller only logs.
#[derive(Debug, Clone)]
pub struct WalletRpcSwitcher {
    provider: DynProvider,
}

impl WalletRpcSwitcher {
    pub fn new(provider: DynProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl ChainSwitcher for WalletRpcSwitcher {
    async fn switch_chain(&self, chain_id: ChainId) -> Result<(), BridgeError> {
        let params = [SwitchChainParams {
            // EIP-695 quantity encoding
            chain_id: format!("{chain_id:#x}"),
        }];

        self.provider
            .raw_request::<_, serde_json::Value>("wallet_switchEthereumChain".into(), params)
            .await
            .map_err(BridgeError::remote)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_id_quantity_encoding() {
        let params = SwitchChainParams {
            chain_id: format!("{:#x}", 42161u64),
        };
        assert_eq!(params.chain_id, "0xa4b1");

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["chainId"], "0xa4b1");
    }

    #[test]
    fn test_switch_params_satisfy_rpc_param_bounds() {
        // raw_request params must be Clone + Serialize + Send + Sync
        fn assert_rpc_params<T: Clone + serde::Serialize + Send + Sync>(_: &T) {}

        let params = [SwitchChainParams {
            chain_id: "0x1".to_string(),
        }];
        assert_rpc_params(&params);
    }
}
