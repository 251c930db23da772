//! evm-client: EVM provider handling for Gantry
//!
//! Wraps alloy providers with per-chain connection helpers and exposes the
//! narrow capability traits ([`GasEstimator`], [`LiquidityPoolReader`],
//! [`FeeCurveEvaluator`], [`ChainSwitcher`]) the quoting layer depends on, so
//! tests can substitute deterministic stubs for live network calls.

pub mod capabilities;
pub mod contracts;
pub mod gas;
pub mod pool;
pub mod price;
pub mod switcher;

use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;

use gantry_core::{BridgeError, ChainId, ChainInfo};

pub use capabilities::{ChainSwitcher, FeeCurveEvaluator, GasEstimator, GasFees, LiquidityPoolReader};
pub use gas::ProviderGasEstimator;
pub use pool::PoolContractReader;
pub use price::PriceFeed;
pub use switcher::WalletRpcSwitcher;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, BridgeError>;

/// A connected EVM chain handle.
///
/// Read-only unless built with a signer. The configured chain id is probed at
/// connect time; a mismatch is logged but not fatal, since a misconfigured
/// RPC endpoint should surface in diagnostics rather than take the whole
/// service down.
#[derive(Clone)]
pub struct EvmClient {
    provider: DynProvider,
    chain_id: ChainId,
    has_signer: bool,
}

impl EvmClient {
    /// Connect a read-only provider for the given chain
    pub async fn connect(chain: &ChainInfo) -> Result<Self> {
        let provider = ProviderBuilder::new()
            .connect(&chain.rpc_url)
            .await
            .map_err(BridgeError::remote)?
            .erased();

        Self::probe(provider, chain, false).await
    }

    /// Connect with a signing credential attached, enabling sends
    pub async fn connect_with_signer(chain: &ChainInfo, signer: PrivateKeySigner) -> Result<Self> {
        let provider = ProviderBuilder::new()
            .wallet(signer)
            .connect(&chain.rpc_url)
            .await
            .map_err(BridgeError::remote)?
            .erased();

        Self::probe(provider, chain, true).await
    }

    async fn probe(provider: DynProvider, chain: &ChainInfo, has_signer: bool) -> Result<Self> {
        let reported = provider.get_chain_id().await.map_err(BridgeError::remote)?;
        if reported != chain.chain_id {
            tracing::warn!(
                configured = chain.chain_id,
                reported,
                rpc_url = %chain.rpc_url,
                "RPC endpoint reports a different chain id than configured"
            );
        }

        Ok(Self {
            provider,
            chain_id: chain.chain_id,
            has_signer,
        })
    }

    /// Build a client around an existing provider (used by tests and by the
    /// deposit-box resolver after provider construction)
    pub fn from_provider(provider: DynProvider, chain_id: ChainId, has_signer: bool) -> Self {
        Self {
            provider,
            chain_id,
            has_signer,
        }
    }

    pub fn provider(&self) -> DynProvider {
        self.provider.clone()
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    pub fn has_signer(&self) -> bool {
        self.has_signer
    }
}

impl std::fmt::Debug for EvmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvmClient")
            .field("chain_id", &self.chain_id)
            .field("has_signer", &self.has_signer)
            .finish_non_exhaustive()
    }
}
