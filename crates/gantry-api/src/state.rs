//! Application state shared across API handlers

use std::sync::Arc;

use tokio::sync::RwLock;

use evm_client::EvmClient;
use gantry_core::{types::chains, AppConfig, BridgeConfig};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    app_config: AppConfig,
    bridge_config: BridgeConfig,
    mainnet_client: RwLock<Option<EvmClient>>,
}

impl AppState {
    pub fn new(app_config: AppConfig, bridge_config: BridgeConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                app_config,
                bridge_config,
                mainnet_client: RwLock::new(None),
            }),
        }
    }

    pub fn app_config(&self) -> &AppConfig {
        &self.inner.app_config
    }

    pub fn bridge_config(&self) -> &BridgeConfig {
        &self.inner.bridge_config
    }

    pub fn hide_pool_route(&self) -> bool {
        self.inner.app_config.hide_pool_route
    }

    /// Get or create the settlement-chain client.
    ///
    /// The connection is cached; a failed connect is retried on the next
    /// request rather than poisoning the cache.
    pub async fn mainnet_client(&self) -> Option<EvmClient> {
        {
            let client = self.inner.mainnet_client.read().await;
            if client.is_some() {
                return client.clone();
            }
        }

        let mut chain = self.inner.bridge_config.chain(chains::MAINNET)?.clone();
        chain.rpc_url = self.inner.app_config.mainnet_rpc_url.clone();

        tracing::info!(rpc_url = %chain.rpc_url, "Connecting settlement-chain client");
        match EvmClient::connect(&chain).await {
            Ok(client) => {
                let mut cached = self.inner.mainnet_client.write().await;
                *cached = Some(client.clone());
                Some(client)
            }
            Err(err) => {
                tracing::warn!(rpc_url = %chain.rpc_url, %err, "Failed to connect settlement-chain client");
                None
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default(), BridgeConfig::mainnet())
    }
}
