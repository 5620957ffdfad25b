//! Rounding for amounts shown as whole-currency KPIs.

/// Round to the nearest integer, ties to the even neighbour (banker's
/// rounding). Dashboard grand totals and the cash-flow percent use this so
/// that a long run of `.5` totals does not drift upward.
pub fn round_half_even(value: f64) -> i64 {
    let floor = value.floor();
    let diff = value - floor;
    if (diff - 0.5).abs() < f64::EPSILON {
        let low = floor as i64;
        if low % 2 == 0 { low } else { low + 1 }
    } else {
        value.round() as i64
    }
}
