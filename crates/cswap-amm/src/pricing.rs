//! Constant product pricing with a 0.3% input fee
//!
//! Shared by the swap execution path and the read-only preview path:
//!
//! ```text
//! in_with_fee = amount_in * 997
//! amount_out  = floor(in_with_fee * reserve_out / (reserve_in * 1000 + in_with_fee))
//! ```
//!
//! All intermediates are arbitrary precision, so no input can overflow and
//! there is no float/precision drift anywhere in the pricing path.

use num_bigint::BigUint;

/// Fee-adjusted input multiplier (0.3% fee on input)
pub const FEE_NUMERATOR: u64 = 997;
/// Fee scale
pub const FEE_DENOMINATOR: u64 = 1000;

/// Quote the output of swapping `amount_in` against the given reserves
///
/// Returns 0 when the input or the output reserve is 0. The quote equals
/// what execution against the same reserves would pay; it goes stale the
/// moment reserves change, which is why execution takes a slippage floor.
pub fn swap_output(amount_in: u64, reserve_in: u64, reserve_out: u64) -> u64 {
    if amount_in == 0 || reserve_out == 0 {
        return 0;
    }

    let in_with_fee = BigUint::from(amount_in) * FEE_NUMERATOR;
    let numerator = &in_with_fee * reserve_out;
    let denominator = BigUint::from(reserve_in) * FEE_DENOMINATOR + &in_with_fee;

    // quotient is bounded by reserve_out
    u64::try_from(numerator / denominator).unwrap_or(reserve_out)
}

/// floor(a * b / d) with arbitrary-precision intermediates
///
/// `None` on division by zero or a result wider than u128
pub fn mul_div(a: u128, b: u128, d: u128) -> Option<u128> {
    if d == 0 {
        return None;
    }
    u128::try_from(BigUint::from(a) * b / d).ok()
}
