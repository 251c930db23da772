//! Bridge fee math
//!
//! Pure calculations: gas-amount discounting, the amount-too-low check, and
//! the default realized-LP-fee curve. No I/O.

use alloy::primitives::U256;

use evm_client::FeeCurveEvaluator;
use gantry_core::constants::{AMOUNT_TOO_LOW_PCT, ONE_HUNDRED_PCT};
use gantry_core::{BridgeError, RateModel};

/// Apply a percentage discount to a gas amount, rounding down to whole units
pub fn discounted_gas(gas_units: u64, discount_pct: u64) -> U256 {
    U256::from(gas_units) * U256::from(100 - discount_pct) / U256::from(100)
}

/// Fees at or above 25% of the quoted amount flag the quote as too low.
///
/// `amount * 25 <= total_fees * 100` keeps the comparison in integers; a
/// percentage division here would round away the boundary case.
pub fn is_amount_too_low(amount: U256, total_fees: U256) -> bool {
    amount * U256::from(AMOUNT_TOO_LOW_PCT) <= total_fees * U256::from(100)
}

/// Default [`FeeCurveEvaluator`]: piecewise-linear utilization curve averaged
/// over the utilization move, then compounded down from an annualized rate to
/// the roughly one-week relay capital lockup.
#[derive(Debug, Clone, Copy, Default)]
pub struct PiecewiseCurveEvaluator;

impl FeeCurveEvaluator for PiecewiseCurveEvaluator {
    fn realized_lp_fee_pct(
        &self,
        model: &RateModel,
        util_before: U256,
        util_after: U256,
    ) -> Result<U256, BridgeError> {
        if util_before == util_after {
            return Ok(U256::ZERO);
        }

        let (lo, hi) = if util_before < util_after {
            (util_before, util_after)
        } else {
            (util_after, util_before)
        };

        let annual = average_rate(model, lo, hi);
        Ok(annualized_to_weekly(annual))
    }
}

/// Instantaneous interest rate at a utilization point, 1e18 fixed point
fn instantaneous_rate(model: &RateModel, util: U256) -> U256 {
    let mut rate = model.r0;

    if model.u_bar > U256::ZERO {
        rate += util.min(model.u_bar) * model.r1 / model.u_bar;
    }
    if util > model.u_bar && model.u_bar < ONE_HUNDRED_PCT {
        rate += (util - model.u_bar) * model.r2 / (ONE_HUNDRED_PCT - model.u_bar);
    }

    rate
}

/// Area under the rate curve on `[a, b]`, both ends within one linear segment
fn trapezoid_area(model: &RateModel, a: U256, b: U256) -> U256 {
    (instantaneous_rate(model, a) + instantaneous_rate(model, b)) * (b - a)
        / (U256::from(2u64) * ONE_HUNDRED_PCT)
}

/// Average rate over `[lo, hi]`, splitting at the curve's kink when the
/// interval crosses it
fn average_rate(model: &RateModel, lo: U256, hi: U256) -> U256 {
    let area = if hi <= model.u_bar || lo >= model.u_bar {
        trapezoid_area(model, lo, hi)
    } else {
        trapezoid_area(model, lo, model.u_bar) + trapezoid_area(model, model.u_bar, hi)
    };

    area * ONE_HUNDRED_PCT / (hi - lo)
}

/// Compound an annualized rate down to one week: `(1 + apy)^(1/52) - 1`.
///
/// Computed in f64; rates are bounded by the curve parameters, so the
/// precision loss is far below the fee amounts being quoted.
fn annualized_to_weekly(annual: U256) -> U256 {
    let annual_f = annual.to::<u128>() as f64 / 1e18;
    let weekly = (1.0 + annual_f).powf(1.0 / 52.0) - 1.0;
    U256::from((weekly * 1e18) as u128)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_core::BridgeConfig;

    fn eth_model() -> RateModel {
        *BridgeConfig::mainnet().rate_model("ETH").unwrap()
    }

    fn wad(n: u64, d: u64) -> U256 {
        U256::from(n) * ONE_HUNDRED_PCT / U256::from(d)
    }

    #[test]
    fn test_discounted_gas_rounds_down() {
        // 243177 * 75 / 100 = 182382.75
        assert_eq!(discounted_gas(243_177, 25), U256::from(182_382u64));
        assert_eq!(discounted_gas(100, 25), U256::from(75u64));
        assert_eq!(discounted_gas(0, 25), U256::ZERO);
    }

    #[test]
    fn test_amount_too_low_boundary() {
        // fees exactly 25% of amount: flagged
        assert!(is_amount_too_low(U256::from(400u64), U256::from(100u64)));
        // just below 25%: not flagged
        assert!(!is_amount_too_low(U256::from(400u64), U256::from(99u64)));
        // well above: flagged
        assert!(is_amount_too_low(U256::from(100u64), U256::from(80u64)));
    }

    #[test]
    fn test_rate_curve_shape() {
        let model = eth_model();

        // r0 = 0 at zero utilization
        assert_eq!(instantaneous_rate(&model, U256::ZERO), U256::ZERO);
        // r0 + r1 at the kink
        assert_eq!(
            instantaneous_rate(&model, model.u_bar),
            model.r0 + model.r1
        );
        // full curve at 100% utilization
        assert_eq!(
            instantaneous_rate(&model, ONE_HUNDRED_PCT),
            model.r0 + model.r1 + model.r2
        );
    }

    #[test]
    fn test_rate_monotonic_across_kink() {
        let model = eth_model();
        let below = instantaneous_rate(&model, wad(60, 100));
        let at = instantaneous_rate(&model, wad(65, 100));
        let above = instantaneous_rate(&model, wad(70, 100));
        assert!(below < at);
        assert!(at < above);
    }

    #[test]
    fn test_average_rate_below_kink() {
        let model = eth_model();
        // linear from 0 to r1 over [0, u_bar]: average is r1 / 2
        let avg = average_rate(&model, U256::ZERO, model.u_bar);
        assert_eq!(avg, model.r1 / U256::from(2u64));
    }

    #[test]
    fn test_equal_utilization_is_free() {
        let model = eth_model();
        let evaluator = PiecewiseCurveEvaluator;
        let pct = evaluator
            .realized_lp_fee_pct(&model, wad(1, 2), wad(1, 2))
            .unwrap();
        assert_eq!(pct, U256::ZERO);
    }

    #[test]
    fn test_realized_pct_magnitude() {
        let model = eth_model();
        let evaluator = PiecewiseCurveEvaluator;
        // average rate over [0, u_bar] is 4% annual; one week of that is
        // (1.04)^(1/52) - 1, roughly 7.5e-4
        let pct = evaluator
            .realized_lp_fee_pct(&model, U256::ZERO, model.u_bar)
            .unwrap();
        assert!(pct > U256::from(700_000_000_000_000u64));
        assert!(pct < U256::from(800_000_000_000_000u64));
    }

    #[test]
    fn test_realized_pct_symmetric_in_direction() {
        let model = eth_model();
        let evaluator = PiecewiseCurveEvaluator;
        let up = evaluator
            .realized_lp_fee_pct(&model, wad(10, 100), wad(40, 100))
            .unwrap();
        let down = evaluator
            .realized_lp_fee_pct(&model, wad(40, 100), wad(10, 100))
            .unwrap();
        assert_eq!(up, down);
    }

    #[test]
    fn test_zero_annual_rate_is_zero_weekly() {
        assert_eq!(annualized_to_weekly(U256::ZERO), U256::ZERO);
    }
}
