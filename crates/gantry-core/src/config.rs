//! Static configuration tables and runtime settings
//!
//! The chain registry, token list, and rate models are immutable process-wide
//! configuration, built once at startup and injected into the quoting
//! functions. Nothing reads them as ambient globals, so tests can substitute
//! their own tables.

use std::collections::BTreeMap;

use alloy::primitives::{address, Address, U256};
use serde::{Deserialize, Serialize};

use crate::errors::BridgeError;
use crate::types::{chains, ChainId};

/// A supported chain in the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    pub chain_id: ChainId,
    pub name: String,
    /// Symbol of the chain's gas token
    pub native_symbol: String,
    pub explorer_url: String,
    pub rpc_url: String,
    /// Deposit-box contract for bridging out of this chain, if deployed
    pub deposit_box: Option<Address>,
    /// Human-readable pre-confirmation duration ("how long until relayed")
    pub estimated_time: String,
    /// Human-readable post-relay duration ("how long until confirmed")
    pub confirmation_time: String,
}

/// A bridgeable token on the canonical settlement chain (Ethereum mainnet)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub symbol: String,
    pub address: Address,
    pub decimals: u8,
    /// Native gas token (ETH); priced directly in wei, no conversion needed
    pub is_native: bool,
    /// Liquidity-pool contract backing relays for this token
    pub pool_address: Option<Address>,
}

/// Interest-rate curve parameters, 1e18 fixed point.
///
/// The instantaneous rate is `r0 + min(u, u_bar) * r1 / u_bar` below the kink
/// and additionally `(u - u_bar) * r2 / (1 - u_bar)` above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateModel {
    pub u_bar: U256,
    pub r0: U256,
    pub r1: U256,
    pub r2: U256,
}

/// Process-wide immutable bridge configuration
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    chains: BTreeMap<ChainId, ChainInfo>,
    tokens: BTreeMap<String, TokenInfo>,
    rate_models: BTreeMap<String, RateModel>,
}

impl BridgeConfig {
    pub fn new(
        chains: Vec<ChainInfo>,
        tokens: Vec<TokenInfo>,
        rate_models: BTreeMap<String, RateModel>,
    ) -> Self {
        Self {
            chains: chains.into_iter().map(|c| (c.chain_id, c)).collect(),
            tokens: tokens.into_iter().map(|t| (t.symbol.clone(), t)).collect(),
            rate_models,
        }
    }

    /// The production mainnet tables
    pub fn mainnet() -> Self {
        // Default curve: kink at 65% utilization, 8% slope below, 100% above
        let default_model = RateModel {
            u_bar: wad_pct(65),
            r0: U256::ZERO,
            r1: wad_pct(8),
            r2: wad_pct(100),
        };
        // UMA pools run a steeper curve with an earlier kink
        let uma_model = RateModel {
            u_bar: wad_pct(50),
            r0: U256::ZERO,
            r1: wad_pct(5),
            r2: wad_pct(200),
        };

        let mut rate_models = BTreeMap::new();
        for symbol in ["ETH", "USDC", "DAI", "WBTC"] {
            rate_models.insert(symbol.to_string(), default_model);
        }
        rate_models.insert("UMA".to_string(), uma_model);

        Self::new(mainnet_chains(), mainnet_tokens(), rate_models)
    }

    /// Look up a chain by id
    pub fn chain(&self, chain_id: ChainId) -> Option<&ChainInfo> {
        self.chains.get(&chain_id)
    }

    /// Chains in ascending id order
    pub fn supported_chains(&self) -> impl Iterator<Item = &ChainInfo> {
        self.chains.values()
    }

    /// Look up a token by symbol on the settlement chain
    pub fn token(&self, symbol: &str) -> Result<&TokenInfo, BridgeError> {
        self.tokens.get(symbol).ok_or_else(|| BridgeError::UnknownToken {
            symbol: symbol.to_string(),
        })
    }

    /// Tokens in symbol order
    pub fn tokens(&self) -> impl Iterator<Item = &TokenInfo> {
        self.tokens.values()
    }

    /// Look up the rate model configured for a token
    pub fn rate_model(&self, symbol: &str) -> Result<&RateModel, BridgeError> {
        self.rate_models
            .get(symbol)
            .ok_or_else(|| BridgeError::MissingRateModel {
                symbol: symbol.to_string(),
            })
    }
}

/// Whole-percent value as 1e18 fixed point (65 -> 0.65e18)
fn wad_pct(pct: u64) -> U256 {
    U256::from(pct) * U256::from(10_000_000_000_000_000u64)
}

fn mainnet_chains() -> Vec<ChainInfo> {
    vec![
        ChainInfo {
            chain_id: chains::MAINNET,
            name: "Ethereum".to_string(),
            native_symbol: "ETH".to_string(),
            explorer_url: "https://etherscan.io".to_string(),
            rpc_url: "https://cloudflare-eth.com".to_string(),
            deposit_box: None,
            estimated_time: "~1-3 minutes".to_string(),
            confirmation_time: "~2 minutes".to_string(),
        },
        ChainInfo {
            chain_id: chains::OPTIMISM,
            name: "Optimism".to_string(),
            native_symbol: "ETH".to_string(),
            explorer_url: "https://optimistic.etherscan.io".to_string(),
            rpc_url: "https://mainnet.optimism.io".to_string(),
            deposit_box: Some(address!("59485d57eecc4058f7831f46ee83a7078276b4ae")),
            estimated_time: "~20 minutes".to_string(),
            confirmation_time: "~20 minutes".to_string(),
        },
        ChainInfo {
            chain_id: chains::BOBA,
            name: "Boba".to_string(),
            native_symbol: "ETH".to_string(),
            explorer_url: "https://bobascan.com".to_string(),
            rpc_url: "https://mainnet.boba.network".to_string(),
            deposit_box: Some(address!("bbfa6ae5e1d9cb4aeb8e85d0e04beac59e95a1e4")),
            estimated_time: "~20 minutes".to_string(),
            confirmation_time: "~20 minutes".to_string(),
        },
        ChainInfo {
            chain_id: chains::ARBITRUM,
            name: "Arbitrum".to_string(),
            native_symbol: "ETH".to_string(),
            explorer_url: "https://arbiscan.io".to_string(),
            rpc_url: "https://arb1.arbitrum.io/rpc".to_string(),
            deposit_box: Some(address!("d8c6dd978a3768f7ddfe3a9aad59c3dba7df2b20")),
            estimated_time: "~10 minutes".to_string(),
            confirmation_time: "~10 minutes".to_string(),
        },
    ]
}

fn mainnet_tokens() -> Vec<TokenInfo> {
    vec![
        TokenInfo {
            symbol: "ETH".to_string(),
            // WETH; relays settle through the wrapped pool
            address: address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"),
            decimals: 18,
            is_native: true,
            pool_address: Some(address!("7355efc63ae731f584380a9838292c7046c1e433")),
        },
        TokenInfo {
            symbol: "USDC".to_string(),
            address: address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"),
            decimals: 6,
            is_native: false,
            pool_address: Some(address!("256c8919ce1ab0e33974cf6aa9c71561ef3017b6")),
        },
        TokenInfo {
            symbol: "UMA".to_string(),
            address: address!("04fa0d235c4abf4bcf4787af4cf447de572ef828"),
            decimals: 18,
            is_native: false,
            pool_address: Some(address!("dfe0ec39291e3b60aca122908f86809c9ee7e90e")),
        },
        TokenInfo {
            symbol: "DAI".to_string(),
            address: address!("6b175474e89094c44da98b954eedeac495271d0f"),
            decimals: 18,
            is_native: false,
            pool_address: Some(address!("43f133fe6fdfa17c417695c476447dc2a449ba5b")),
        },
        TokenInfo {
            symbol: "WBTC".to_string(),
            address: address!("2260fac5e5542a773aa44fbcfedf7c193bc2c599"),
            decimals: 8,
            is_native: false,
            pool_address: Some(address!("02fbb64517e1c6ed69a6faa3abf37db0482f1152")),
        },
    ]
}

/// Runtime settings from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// API server port
    #[serde(default = "default_api_port")]
    pub api_port: u16,

    /// Override for the settlement-chain RPC endpoint
    pub mainnet_rpc_url: String,

    /// When set, the pool route is not registered at all
    #[serde(default)]
    pub hide_pool_route: bool,
}

fn default_api_port() -> u16 {
    8780
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_port: default_api_port(),
            mainnet_rpc_url: "https://cloudflare-eth.com".to_string(),
            hide_pool_route: false,
        }
    }
}

impl AppConfig {
    /// Read settings from `GANTRY_*` environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(port) = std::env::var("GANTRY_API_PORT") {
            if let Ok(port) = port.parse() {
                config.api_port = port;
            }
        }
        if let Ok(url) = std::env::var("GANTRY_RPC_URL") {
            config.mainnet_rpc_url = url;
        }
        if let Ok(flag) = std::env::var("GANTRY_HIDE_POOL") {
            config.hide_pool_route = matches!(flag.as_str(), "1" | "true" | "yes");
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_registry() {
        let config = BridgeConfig::mainnet();

        let mainnet = config.chain(chains::MAINNET).unwrap();
        assert_eq!(mainnet.name, "Ethereum");
        assert!(mainnet.deposit_box.is_none());

        let arbitrum = config.chain(chains::ARBITRUM).unwrap();
        assert!(arbitrum.deposit_box.is_some());

        assert!(config.chain(56).is_none());
        assert_eq!(config.supported_chains().count(), 4);
    }

    #[test]
    fn test_token_lookup() {
        let config = BridgeConfig::mainnet();

        let eth = config.token("ETH").unwrap();
        assert!(eth.is_native);
        assert_eq!(eth.decimals, 18);
        assert!(eth.pool_address.is_some());

        let usdc = config.token("USDC").unwrap();
        assert_eq!(usdc.decimals, 6);

        let err = config.token("FAKE").unwrap_err();
        assert_eq!(err.error_code(), "unknown_token");
    }

    #[test]
    fn test_rate_model_lookup() {
        let config = BridgeConfig::mainnet();

        let eth_model = config.rate_model("ETH").unwrap();
        assert_eq!(eth_model.u_bar, wad_pct(65));

        let uma_model = config.rate_model("UMA").unwrap();
        assert_eq!(uma_model.u_bar, wad_pct(50));
        assert_ne!(eth_model, uma_model);

        let err = config.rate_model("FAKE").unwrap_err();
        assert_eq!(err.error_code(), "missing_rate_model");
    }

    #[test]
    fn test_wad_pct() {
        assert_eq!(wad_pct(100), U256::from(1_000_000_000_000_000_000u64));
        assert_eq!(wad_pct(65), U256::from(650_000_000_000_000_000u64));
    }

    #[test]
    fn test_default_app_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_port, 8780);
        assert!(!config.hide_pool_route);
    }
}
