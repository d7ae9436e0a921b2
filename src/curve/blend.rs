//! Transmitter "expo" blends.
//!
//! A blend mixes a straight line with an odd power of the stick input:
//!
//! - `y = r·x³ + (1 - r)·x` (cubic, the usual expo)
//! - `y = r·x⁵ + (1 - r)·x` (quintic)
//!
//! with `x` and `r` normalized from percent to `[0, 1]`. The blend is applied
//! to `|x|` and the sign is restored afterwards, so every curve is odd and
//! passes through the origin. Full deflection always maps to full output.

/// Rate picked for the side of center `x` falls on.
///
/// Center (`x == 0`) returns `0`; the blend is zero there whatever the rate.
pub fn unit_rate_for_sign(x: f64, down: f64, up: f64) -> f64 {
    if x > 0.0 {
        up
    } else if x < 0.0 {
        down
    } else {
        0.0
    }
}

/// Cubic expo blend of stick input `x` (%) at `rate` (%).
pub fn cubic_blend(x: f64, rate: f64) -> f64 {
    blend(x, rate, 3)
}

/// Quintic expo blend of stick input `x` (%) at `rate` (%).
pub fn quintic_blend(x: f64, rate: f64) -> f64 {
    blend(x, rate, 5)
}

/// Cubic blend with separate rates below (`down`) and above (`up`) center.
pub fn split_blend(x: f64, down: f64, up: f64) -> f64 {
    cubic_blend(x, unit_rate_for_sign(x, down, up))
}

fn blend(x: f64, rate: f64, power: i32) -> f64 {
    let x_abs = x.abs() / 100.0;
    let rate_unit = rate / 100.0;
    let y_abs = rate_unit * x_abs.powi(power) + (1.0 - rate_unit) * x_abs;
    sign(x) * y_abs * 100.0
}

/// Sign with `sign(±0) == 0`; NaN stays NaN.
///
/// `f64::signum` maps `+0.0` to `1.0`, which is not what we want at center.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else if x == 0.0 {
        0.0
    } else {
        f64::NAN
    }
}
