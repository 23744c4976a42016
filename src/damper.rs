//! First-order exponential damper.

use crate::float::Float;
use crate::math::{fast_negexp, lerp};

/// Move `x` toward `g` so that the gap halves every `halflife` seconds.
///
/// Exact for any `dt`: two steps of `dt1` and `dt2` land where one step of
/// `dt1 + dt2` does. A halflife of zero snaps to `g`.
///
/// Evaluates `exp` exactly; [`damper_fast`] trades that for a rational
/// approximation.
#[inline]
pub fn damper_exact<F: Float>(x: F, g: F, halflife: F, dt: F, eps: F) -> F {
    lerp(x, g, F::one() - (-(F::ln_2() * dt) / (halflife + eps)).exp())
}

/// [`damper_exact`] with the goal fixed at zero.
#[inline]
pub fn damper_decay_exact<F: Float>(x: F, halflife: F, dt: F, eps: F) -> F {
    x * (-(F::ln_2() * dt) / (halflife + eps)).exp()
}

/// [`damper_exact`] using [`fast_negexp`] in place of `exp`.
///
/// Cheaper, but splitting a step in two no longer lands exactly where the
/// single step does.
#[inline]
pub fn damper_fast<F: Float>(x: F, g: F, halflife: F, dt: F, eps: F) -> F {
    lerp(x, g, F::one() - fast_negexp((F::ln_2() * dt) / (halflife + eps)))
}
