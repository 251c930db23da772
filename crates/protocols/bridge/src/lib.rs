//! Cross-Chain Bridge Protocol
//!
//! Quotes the cost of bridging a token amount to the settlement chain: the
//! instant- and slow-relay fees (gas-denominated, priced per token class) and
//! the liquidity-provider fee (utilization-dependent interest curve). Also
//! derives the wrong-network signal for a connected wallet and resolves
//! per-chain deposit-box contract clients.
//!
//! Every remote collaborator is reached through the capability traits in
//! `evm-client`; quote functions take them as arguments so callers and tests
//! choose the wiring. Each quote is an independent snapshot: no caching, no
//! retries, failures propagate to the caller.

pub mod calculator;
pub mod constants;
pub mod deposit;
pub mod fetch;
pub mod guard;
pub mod state;
pub mod times;

pub use calculator::PiecewiseCurveEvaluator;
pub use deposit::{deposit_box_for_chain, DepositBoxClient};
pub use fetch::{get_bridge_fees, get_lp_fee, get_relay_fees};
pub use guard::{is_wrong_network, spawn_chain_switch, WalletError, WalletStatus};
pub use state::{BridgeFees, LpFeeQuote, RelayFeeQuote};
pub use times::{confirmation_deposit_time, estimated_deposit_time};
