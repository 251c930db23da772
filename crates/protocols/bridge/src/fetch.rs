//! Quote operations
//!
//! Each function validates its inputs synchronously, then issues the remote
//! reads it needs through the capability traits. Paired reads run
//! concurrently; a failed remote call propagates to the caller untouched.

use alloy::primitives::U256;

use evm_client::{FeeCurveEvaluator, GasEstimator, LiquidityPoolReader};
use gantry_core::constants::ONE_HUNDRED_PCT;
use gantry_core::{BridgeConfig, BridgeError, Fee};

use crate::calculator::{discounted_gas, is_amount_too_low};
use crate::constants::{relay_gas_units, GAS_DISCOUNT_PCT};
use crate::state::{BridgeFees, LpFeeQuote, RelayFeeQuote};

fn require_positive(amount: U256) -> Result<(), BridgeError> {
    if amount.is_zero() {
        return Err(BridgeError::InvalidAmount {
            message: "amount must be greater than zero".to_string(),
        });
    }
    Ok(())
}

/// Quote the instant- and slow-relay fees for bridging `amount` of `symbol`.
///
/// The instant fee is priced as the incremental gas of upgrading a slow relay
/// (`fast - slow`); both gas amounts get the flat 25% discount before being
/// converted at the current gas price.
pub async fn get_relay_fees(
    config: &BridgeConfig,
    gas: &dyn GasEstimator,
    symbol: &str,
    amount: U256,
) -> Result<RelayFeeQuote, BridgeError> {
    let token = config.token(symbol)?;
    require_positive(amount)?;

    let (fast_gas, slow_gas) = relay_gas_units(symbol);
    let gas_amount_fast = discounted_gas(fast_gas - slow_gas, GAS_DISCOUNT_PCT);
    let gas_amount_slow = discounted_gas(slow_gas, GAS_DISCOUNT_PCT);

    // Native ETH is priced directly in wei; everything else needs the token
    // address for price conversion
    let pricing_token = (!token.is_native).then_some(token);

    let (instant, slow) = tokio::try_join!(
        gas.calculate(amount, gas_amount_fast, pricing_token),
        gas.calculate(amount, gas_amount_slow, pricing_token),
    )?;

    let total_fees = instant.gas_fees + slow.gas_fees;

    Ok(RelayFeeQuote {
        instant_relay_fee: Fee::new(instant.gas_fees, instant.fees_as_percent),
        slow_relay_fee: Fee::new(slow.gas_fees, slow.fees_as_percent),
        is_amount_too_low: is_amount_too_low(amount, total_fees),
    })
}

/// Quote the liquidity-provider fee for bridging `amount` of `symbol`.
///
/// Issues up to four read-only pool calls: the utilization pair decides the
/// fee, the reserve pair decides the insufficiency flag.
pub async fn get_lp_fee(
    config: &BridgeConfig,
    pool: &dyn LiquidityPoolReader,
    curve: &dyn FeeCurveEvaluator,
    symbol: &str,
    amount: U256,
) -> Result<LpFeeQuote, BridgeError> {
    config.token(symbol)?;
    require_positive(amount)?;
    let model = *config.rate_model(symbol)?;

    let (util_before, util_after) = tokio::try_join!(
        pool.utilization_current(),
        pool.utilization_post_relay(amount),
    )?;

    // Unchanged utilization means the pool sees no activity from this relay
    // at contract precision; the fee is zero
    let (pct, total) = if util_before == util_after {
        (U256::ZERO, U256::ZERO)
    } else {
        let pct = curve.realized_lp_fee_pct(&model, util_before, util_after)?;
        (pct, amount * pct / ONE_HUNDRED_PCT)
    };

    let (liquid, pending) = tokio::try_join!(pool.liquid_reserves(), pool.pending_reserves())?;
    let uncommitted = liquid.saturating_sub(pending);

    Ok(LpFeeQuote {
        pct,
        total,
        is_liquidity_insufficient: uncommitted <= amount,
    })
}

/// Combined quote: relay fees and LP fee for the same token/amount snapshot
pub async fn get_bridge_fees(
    config: &BridgeConfig,
    gas: &dyn GasEstimator,
    pool: &dyn LiquidityPoolReader,
    curve: &dyn FeeCurveEvaluator,
    symbol: &str,
    amount: U256,
) -> Result<BridgeFees, BridgeError> {
    let relay = get_relay_fees(config, gas, symbol, amount).await?;
    let lp = get_lp_fee(config, pool, curve, symbol, amount).await?;

    Ok(BridgeFees {
        instant_relay_fee: relay.instant_relay_fee,
        slow_relay_fee: relay.slow_relay_fee,
        lp_fee: lp.fee(),
        is_amount_too_low: relay.is_amount_too_low,
        is_liquidity_insufficient: lp.is_liquidity_insufficient,
    })
}
