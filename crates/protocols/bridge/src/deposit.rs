//! Deposit-box contract resolution

use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::DynProvider;
use alloy::signers::local::PrivateKeySigner;

use evm_client::contracts::IBridgeDepositBox;
use evm_client::EvmClient;
use gantry_core::{BridgeConfig, BridgeError, ChainId};

/// A deposit-box contract bound to one chain's provider
#[derive(Debug, Clone)]
pub struct DepositBoxClient {
    contract: IBridgeDepositBox::IBridgeDepositBoxInstance<DynProvider>,
    chain_id: ChainId,
    has_signer: bool,
}

impl DepositBoxClient {
    pub fn address(&self) -> Address {
        *self.contract.address()
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Whether deposits can be sent, or only read calls issued
    pub fn can_send(&self) -> bool {
        self.has_signer
    }

    /// Whether the box accepts this chain-local token
    pub async fn is_whitelisted(&self, token: Address) -> Result<bool, BridgeError> {
        self.contract
            .isWhitelistToken(token)
            .call()
            .await
            .map_err(BridgeError::remote)
    }

    /// Lock funds for relay. Requires a signer-backed client; a read-only one
    /// fails at send time, mirroring the wallet-less fallback behavior.
    #[allow(clippy::too_many_arguments)]
    pub async fn deposit(
        &self,
        l1_recipient: Address,
        l2_token: Address,
        amount: U256,
        slow_relay_fee_pct: U256,
        instant_relay_fee_pct: U256,
        quote_timestamp: u64,
        native_value: U256,
    ) -> Result<TxHash, BridgeError> {
        let pending = self
            .contract
            .deposit(
                l1_recipient,
                l2_token,
                amount,
                slow_relay_fee_pct,
                instant_relay_fee_pct,
                quote_timestamp,
            )
            .value(native_value)
            .send()
            .await
            .map_err(BridgeError::remote)?;

        Ok(*pending.tx_hash())
    }
}

/// Resolve the deposit-box client for a chain.
///
/// With a signer the client can send deposits; without one it falls back to
/// the chain's read-only provider. Chains without a configured deposit box
/// are unsupported.
pub async fn deposit_box_for_chain(
    config: &BridgeConfig,
    chain_id: ChainId,
    signer: Option<PrivateKeySigner>,
) -> Result<DepositBoxClient, BridgeError> {
    let chain = config
        .chain(chain_id)
        .ok_or(BridgeError::UnsupportedChain { chain_id })?;
    let box_address = chain
        .deposit_box
        .ok_or(BridgeError::UnsupportedChain { chain_id })?;

    let client = match signer {
        Some(signer) => EvmClient::connect_with_signer(chain, signer).await?,
        None => EvmClient::connect(chain).await?,
    };

    Ok(DepositBoxClient {
        contract: IBridgeDepositBox::new(box_address, client.provider()),
        chain_id,
        has_signer: client.has_signer(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_chain_is_unsupported() {
        let config = BridgeConfig::mainnet();
        let err = deposit_box_for_chain(&config, 999, None).await.unwrap_err();
        assert!(matches!(err, BridgeError::UnsupportedChain { chain_id: 999 }));
    }

    #[tokio::test]
    async fn test_chain_without_deposit_box_is_unsupported() {
        // mainnet is the settlement chain; no deposit box is deployed there
        let config = BridgeConfig::mainnet();
        let err = deposit_box_for_chain(&config, 1, None).await.unwrap_err();
        assert!(matches!(err, BridgeError::UnsupportedChain { chain_id: 1 }));
    }
}
