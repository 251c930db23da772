//! Wrong-network detection for a connected wallet

use std::sync::Arc;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use evm_client::ChainSwitcher;
use gantry_core::ChainId;

/// Wallet connection errors as reported by the connector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "message")]
pub enum WalletError {
    /// The wallet is on a chain the bridge does not support at all
    UnsupportedChain,
    Other(String),
}

/// Snapshot of the wallet connector's state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletStatus {
    /// Connected account, if any
    pub account: Option<Address>,
    /// Chain id the wallet reports
    pub chain_id: ChainId,
    /// Connection error, if the connector surfaced one
    pub error: Option<WalletError>,
}

impl WalletStatus {
    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }
}

/// Whether the wrong-network banner should show for a view requiring
/// `required` chain.
///
/// True only while a wallet is connected and either the connector reports an
/// unsupported chain or the reported chain id differs from the required one.
/// With no wallet there is nothing to warn about.
pub fn is_wrong_network(wallet: &WalletStatus, required: ChainId) -> bool {
    if !wallet.is_connected() {
        return false;
    }

    matches!(wallet.error, Some(WalletError::UnsupportedChain)) || wallet.chain_id != required
}

/// Ask the wallet to switch chains, fire-and-forget.
///
/// The banner's switch button does not await or retry; a failure is logged
/// and the banner simply stays up.
pub fn spawn_chain_switch(switcher: Arc<dyn ChainSwitcher>, chain_id: ChainId) {
    tokio::spawn(async move {
        if let Err(err) = switcher.switch_chain(chain_id).await {
            tracing::warn!(chain_id, %err, "chain switch request failed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gantry_core::BridgeError;
    use std::sync::Mutex;
    use tokio::sync::oneshot;

    fn connected(chain_id: ChainId) -> WalletStatus {
        WalletStatus {
            account: Some(Address::repeat_byte(0x11)),
            chain_id,
            error: None,
        }
    }

    #[test]
    fn test_mismatch_when_connected_to_wrong_chain() {
        assert!(is_wrong_network(&connected(10), 1));
        assert!(is_wrong_network(&connected(288), 42161));
    }

    #[test]
    fn test_no_mismatch_on_required_chain() {
        assert!(!is_wrong_network(&connected(1), 1));
    }

    #[test]
    fn test_disconnected_never_mismatches() {
        let wallet = WalletStatus {
            account: None,
            chain_id: 10,
            error: Some(WalletError::UnsupportedChain),
        };
        assert!(!is_wrong_network(&wallet, 1));
    }

    #[test]
    fn test_unsupported_chain_error_forces_mismatch() {
        let mut wallet = connected(1);
        wallet.error = Some(WalletError::UnsupportedChain);
        // even though the reported id matches
        assert!(is_wrong_network(&wallet, 1));
    }

    #[test]
    fn test_other_error_does_not_force_mismatch() {
        let mut wallet = connected(1);
        wallet.error = Some(WalletError::Other("rpc hiccup".into()));
        assert!(!is_wrong_network(&wallet, 1));
    }

    struct RecordingSwitcher {
        tx: Mutex<Option<oneshot::Sender<ChainId>>>,
    }

    #[async_trait]
    impl ChainSwitcher for RecordingSwitcher {
        async fn switch_chain(&self, chain_id: ChainId) -> Result<(), BridgeError> {
            if let Some(tx) = self.tx.lock().unwrap().take() {
                let _ = tx.send(chain_id);
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_spawn_chain_switch_invokes_capability() {
        let (tx, rx) = oneshot::channel();
        let switcher = Arc::new(RecordingSwitcher {
            tx: Mutex::new(Some(tx)),
        });

        spawn_chain_switch(switcher, 42161);

        let requested = rx.await.unwrap();
        assert_eq!(requested, 42161);
    }
}
