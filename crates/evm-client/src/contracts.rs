//! Contract bindings for the bridge's on-chain collaborators

use alloy::sol;

sol! {
    /// Per-token liquidity pool on the settlement chain. All four calls are
    /// issued read-only via `eth_call`.
    #[sol(rpc)]
    #[derive(Debug)]
    interface IBridgePool {
        function liquidityUtilizationCurrent() external returns (uint256);
        function liquidityUtilizationPostRelay(uint256 relayedAmount) external returns (uint256);
        function liquidReserves() external view returns (uint256);
        function pendingReserves() external view returns (uint256);
    }

    /// Deposit box deployed on each source chain. `deposit` locks funds for
    /// relay to the settlement chain.
    #[sol(rpc)]
    #[derive(Debug)]
    interface IBridgeDepositBox {
        function deposit(
            address l1Recipient,
            address l2Token,
            uint256 amount,
            uint256 slowRelayFeePct,
            uint256 instantRelayFeePct,
            uint64 quoteTimestamp
        ) external payable;

        function isWhitelistToken(address l2Token) external view returns (bool);
    }
}
