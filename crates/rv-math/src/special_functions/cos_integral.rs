//! Entire cosine integral `Cin(x) = ∫₀ˣ (cos(t) - 1)/t dt` by power series,
//! and the cosine integral `Ci(x) = γ + ln|x| + Cin(x)` built on it.

use rv_core::Real;

/// Euler–Mascheroni constant γ.
pub const EULER_GAMMA: Real = 0.577_215_664_901_532_9;

/// Below this magnitude the series is replaced by `-exp(-x²/24)·x²/4`.
pub const CIN_SHORTCUT: Real = 0.00025;

/// Number of series terms for argument `x`; see
/// [`si_series_order`](super::sin_integral::si_series_order).
/// The fit turns negative past `|x| ≈ 62`, where the order saturates to 0 and
/// [`power_series_cin`] returns `-∞` (its first term is `1/0`).
#[inline]
pub fn cin_series_order(x: Real) -> u32 {
    (-0.035 * x * x + 2.05 * x.abs() + 7.0).round() as u32
}

/// `Cin(x) = Σ_{j≥1} (-1)ʲ x²ʲ / (2j·(2j)!)`.
///
/// Summed backward from the order-`n` term with
/// `s ← s·(-x²)/(k(k-1)) + 1/(k-2)`, `k = 2n, 2n-2, …, 4`, then scaled by
/// `-x²/2`. Same accuracy range as the sine-integral series.
pub fn power_series_cin(x: Real) -> Real {
    let xx = x * x;
    if x.abs() < CIN_SHORTCUT {
        return -(-xx / 24.0).exp() * xx / 4.0;
    }

    let xx = -xx;
    let mut k = (2 * cin_series_order(x)) as Real;
    let mut sum = 1.0 / k;
    while k >= 4.0 {
        sum = sum * (xx / (k * (k - 1.0))) + 1.0 / (k - 2.0);
        k -= 2.0;
    }
    sum * xx / 2.0
}

/// Cosine integral `Ci(x)` for `x != 0`, on the range where the `Cin`
/// series is accurate. `Ci(0)` is `-∞`.
pub fn cos_integral(x: Real) -> Real {
    EULER_GAMMA + x.abs().ln() + power_series_cin(x)
}
