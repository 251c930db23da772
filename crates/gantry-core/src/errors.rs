//! Error types for Gantry

use thiserror::Error;

use crate::ChainId;

/// Core errors that can occur in Gantry
#[derive(Debug, Error)]
pub enum Error {
    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Bridge quoting and validation errors.
///
/// Input-validation kinds are produced before any remote call is issued;
/// `RemoteCallFailed` carries failures from providers and contracts unchanged.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Unknown token: {symbol}")]
    UnknownToken { symbol: String },

    #[error("Invalid amount: {message}")]
    InvalidAmount { message: String },

    #[error("No rate model configured for token {symbol}")]
    MissingRateModel { symbol: String },

    #[error("Unsupported chain: {chain_id}")]
    UnsupportedChain { chain_id: ChainId },

    #[error("Remote call failed: {message}")]
    RemoteCallFailed { message: String },
}

impl BridgeError {
    /// Get an HTTP-friendly error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownToken { .. } => "unknown_token",
            Self::InvalidAmount { .. } => "invalid_amount",
            Self::MissingRateModel { .. } => "missing_rate_model",
            Self::UnsupportedChain { .. } => "unsupported_chain",
            Self::RemoteCallFailed { .. } => "remote_call_failed",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidAmount { .. } => 400,
            Self::UnknownToken { .. } => 404,
            Self::MissingRateModel { .. } | Self::UnsupportedChain { .. } => 422,
            Self::RemoteCallFailed { .. } => 502,
        }
    }

    /// Wrap a provider or contract failure
    pub fn remote(err: impl std::fmt::Display) -> Self {
        Self::RemoteCallFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias for Gantry operations
pub type Result<T> = std::result::Result<T, Error>;
