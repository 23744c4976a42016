//! Scalar helpers shared by every integrator.
//!
//! `fast_negexp` and `fast_atan` are rational/polynomial approximations used
//! in place of `exp` and `atan` on the per-frame path. `fast_negexp` stays
//! within 0.02 of `e^-x` and `fast_atan` within 0.002 rad of `atan`.

use crate::float::Float;

/// Linear interpolation `(1 - a) * x + a * y`. `a` is not clamped.
#[inline]
pub fn lerp<F: Float>(x: F, y: F, a: F) -> F {
    (F::one() - a) * x + a * y
}

/// Approximates `e^-x` for `x >= 0`.
///
/// Monotonically decreasing, exactly `1` at `x = 0`, tends to `0` as `x` grows.
#[inline]
pub fn fast_negexp<F: Float>(x: F) -> F {
    let c2 = F::from_f32(0.48);
    let c3 = F::from_f32(0.235);
    F::one() / (F::one() + x + c2 * x * x + c3 * x * x * x)
}

/// Approximates `atan(x)` over all reals.
///
/// Inputs with `|x| > 1` are reflected through `1/x` so the polynomial only
/// ever sees `[0, 1]`. The result is odd and continuous at `x = ±1`.
#[inline]
pub fn fast_atan<F: Float>(x: F) -> F {
    let z = x.abs();
    let reflected = z > F::one();
    let w = if reflected { F::one() / z } else { z };
    let quarter_pi = F::pi() / F::from_f32(4.0);
    let y = quarter_pi * w
        - w * (w - F::one()) * (F::from_f32(0.2447) + F::from_f32(0.0663) * w);
    let y = if reflected { F::pi() * F::half() - y } else { y };
    y.copysign(x)
}

/// `x * x`.
#[inline]
pub fn square<F: Float>(x: F) -> F {
    x * x
}

/// Cubic Hermite ease `3x² - 2x³` with `x` clamped to `[0, 1]`.
#[inline]
pub fn smoothstep<F: Float>(x: F) -> F {
    let x = x.clamp(F::zero(), F::one());
    x * x * (F::from_f32(3.0) - F::two() * x)
}
