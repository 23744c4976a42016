//! Tolerances and tuning shared by the integrators.

use crate::error::SpringError;
use crate::float::Float;
use crate::math::fast_negexp;

/// How the integrators evaluate their exponential and oscillatory terms.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Precision {
    /// `exp`, `sin` and `cos` from `libm`. Steps compose exactly and the
    /// spring-damper is continuous across the critically damped boundary.
    #[default]
    Exact,
    /// `fast_negexp`, and `fast_atan` for the under-damped phase. Cheaper,
    /// at the cost of up to a few percent of error per step.
    Fast,
}

/// Numeric guards and look-ahead tuning passed to every stateful update.
///
/// # Builder Pattern
/// ```
/// use damped::config::{Precision, SpringConfig};
///
/// let config: SpringConfig<f32> = SpringConfig::new()
///     .with_eps(1e-5)
///     .with_blend_eps(1e-8)
///     .with_apprehension(2.0)
///     .with_precision(Precision::Fast);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringConfig<F: Float> {
    /// Added to denominators (halflife, stiffness, decay rate) so that zero
    /// or unbounded parameters give large but finite results. Default: 1e-5.
    pub eps: F,
    /// Lower bound on the dead-blend blend time. Default: 1e-8.
    pub blend_eps: F,
    /// How many halflives ahead timed and velocity springs aim along their
    /// proxy trajectory. Default: 2.0.
    pub apprehension: F,
    /// Exponential evaluation strategy. Default: [`Precision::Exact`].
    pub precision: Precision,
}

impl<F: Float> SpringConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SpringConfig {
            eps: F::from_f32(1e-5),
            blend_eps: F::from_f32(1e-8),
            apprehension: F::two(),
            precision: Precision::Exact,
        }
    }

    /// Set the denominator guard.
    pub fn with_eps(mut self, eps: F) -> Self {
        self.eps = eps;
        self
    }

    /// Set the minimum blend time used by dead blending.
    pub fn with_blend_eps(mut self, blend_eps: F) -> Self {
        self.blend_eps = blend_eps;
        self
    }

    /// Set the look-ahead, in halflives, of timed and velocity springs.
    pub fn with_apprehension(mut self, apprehension: F) -> Self {
        self.apprehension = apprehension;
        self
    }

    /// Set the exponential evaluation strategy.
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// `e^-x` evaluated according to [`precision`](Self::precision).
    #[inline]
    pub fn negexp(&self, x: F) -> F {
        match self.precision {
            Precision::Exact => (-x).exp(),
            Precision::Fast => fast_negexp(x),
        }
    }

    /// Check that every field is usable.
    ///
    /// The updates themselves never check, so this is the place to catch a
    /// bad value coming from a settings file or a slider.
    pub fn validate(&self) -> Result<(), SpringError> {
        for eps in [self.eps, self.blend_eps] {
            if !eps.is_finite() || eps <= F::zero() {
                crate::debug!("rejecting epsilon {:?}", eps);
                return Err(SpringError::InvalidEpsilon);
            }
        }
        if !self.apprehension.is_finite() || self.apprehension < F::zero() {
            crate::debug!("rejecting apprehension {:?}", self.apprehension);
            return Err(SpringError::InvalidApprehension);
        }
        Ok(())
    }
}

impl<F: Float> Default for SpringConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
