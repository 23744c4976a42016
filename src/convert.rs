//! Conversions between the ways a spring can be tuned.
//!
//! Users think in halflives, frequencies and damping ratios; the closed-form
//! solutions want raw stiffness and damping. Everything that divides takes an
//! `eps` guard so that a halflife or damping of zero stays finite.

use crate::error::SpringError;
use crate::float::Float;
use crate::math::square;

/// `4 * ln(2)`: the damping whose critically damped envelope halves every unit of time.
fn four_ln_2<F: Float>() -> F {
    F::from_f32(4.0) * F::ln_2()
}

fn two_pi<F: Float>() -> F {
    F::two() * F::pi()
}

/// Damping coefficient for a given halflife.
#[inline]
pub fn halflife_to_damping<F: Float>(halflife: F, eps: F) -> F {
    four_ln_2::<F>() / (halflife + eps)
}

/// Halflife for a given damping coefficient.
#[inline]
pub fn damping_to_halflife<F: Float>(damping: F, eps: F) -> F {
    four_ln_2::<F>() / (damping + eps)
}

/// Stiffness for an oscillation frequency in Hz: `(2πf)²`.
#[inline]
pub fn frequency_to_stiffness<F: Float>(frequency: F) -> F {
    square(two_pi::<F>() * frequency)
}

/// Oscillation frequency in Hz for a stiffness: `√s / 2π`.
#[inline]
pub fn stiffness_to_frequency<F: Float>(stiffness: F) -> F {
    stiffness.sqrt() / two_pi::<F>()
}

/// Stiffness that gives `ratio` for the given damping.
#[inline]
pub fn damping_ratio_to_stiffness<F: Float>(ratio: F, damping: F) -> F {
    square(damping / (ratio * F::two()))
}

/// Damping that gives `ratio` for the given stiffness.
#[inline]
pub fn damping_ratio_to_damping<F: Float>(ratio: F, stiffness: F) -> F {
    ratio * F::two() * stiffness.sqrt()
}

/// Halflife at which a spring of `frequency` is exactly critically damped.
pub fn critical_halflife<F: Float>(frequency: F, eps: F) -> F {
    damping_to_halflife((frequency_to_stiffness(frequency) * F::from_f32(4.0)).sqrt(), eps)
}

/// Frequency at which a spring with `halflife` is exactly critically damped.
pub fn critical_frequency<F: Float>(halflife: F, eps: F) -> F {
    stiffness_to_frequency(square(halflife_to_damping(halflife, eps)) / F::from_f32(4.0))
}

/// Frequency to give a spring of `halflife` so that its damped oscillation
/// matches a goal oscillating at `goal_frequency`.
///
/// Returns NaN when the halflife is so short that no such frequency exists.
pub fn resonant_frequency<F: Float>(goal_frequency: F, halflife: F, eps: F) -> F {
    let d = halflife_to_damping(halflife, eps);
    let goal_stiffness = frequency_to_stiffness(goal_frequency);
    let resonant_stiffness = goal_stiffness - (d * d) / F::from_f32(4.0);
    stiffness_to_frequency(resonant_stiffness)
}

/// Kinetic plus potential energy of a unit-mass spring about a rest state.
///
/// `scale` converts from the caller's units (pixels, say) before squaring.
pub fn spring_energy<F: Float>(x: F, v: F, frequency: F, x_rest: F, v_rest: F, scale: F) -> F {
    let s = frequency_to_stiffness(frequency);
    (square(scale * (v - v_rest)) + s * square(scale * (x - x_rest))) / F::two()
}

/// The three equivalent ways to tune a spring-damper.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SpringParams<F: Float> {
    /// Oscillation frequency in Hz and decay halflife in seconds.
    FrequencyHalflife { frequency: F, halflife: F },
    /// Dimensionless damping ratio (1 = critical) and decay halflife.
    RatioHalflife { damping_ratio: F, halflife: F },
    /// Raw ODE coefficients.
    StiffnessDamping { stiffness: F, damping: F },
}

impl<F: Float> SpringParams<F> {
    /// Frequency/halflife parameters, rejecting negative or non-finite values.
    pub fn try_frequency_halflife(frequency: F, halflife: F) -> Result<Self, SpringError> {
        check_non_negative(frequency, SpringError::InvalidFrequency)?;
        check_non_negative(halflife, SpringError::InvalidHalflife)?;
        Ok(SpringParams::FrequencyHalflife { frequency, halflife })
    }

    /// Ratio/halflife parameters. The ratio must be strictly positive.
    pub fn try_ratio_halflife(damping_ratio: F, halflife: F) -> Result<Self, SpringError> {
        if !damping_ratio.is_finite() || damping_ratio <= F::zero() {
            crate::debug!("rejecting damping ratio {:?}", damping_ratio);
            return Err(SpringError::InvalidDampingRatio);
        }
        check_non_negative(halflife, SpringError::InvalidHalflife)?;
        Ok(SpringParams::RatioHalflife { damping_ratio, halflife })
    }

    /// Stiffness/damping parameters, rejecting negative or non-finite values.
    pub fn try_stiffness_damping(stiffness: F, damping: F) -> Result<Self, SpringError> {
        check_non_negative(stiffness, SpringError::InvalidStiffness)?;
        check_non_negative(damping, SpringError::InvalidDamping)?;
        Ok(SpringParams::StiffnessDamping { stiffness, damping })
    }

    /// Resolve to `(stiffness, damping)`.
    pub fn stiffness_damping(&self, eps: F) -> (F, F) {
        match *self {
            SpringParams::FrequencyHalflife { frequency, halflife } => (
                frequency_to_stiffness(frequency),
                halflife_to_damping(halflife, eps),
            ),
            SpringParams::RatioHalflife { damping_ratio, halflife } => {
                let d = halflife_to_damping(halflife, eps);
                (damping_ratio_to_stiffness(damping_ratio, d), d)
            }
            SpringParams::StiffnessDamping { stiffness, damping } => (stiffness, damping),
        }
    }

    /// Express these parameters as a damping ratio and halflife.
    pub fn to_ratio_halflife(&self, eps: F) -> Self {
        let (stiffness, damping) = self.stiffness_damping(eps);
        SpringParams::RatioHalflife {
            damping_ratio: damping / (F::two() * stiffness.sqrt() + eps),
            halflife: damping_to_halflife(damping, eps),
        }
    }

    /// Express these parameters as a frequency and halflife.
    pub fn to_frequency_halflife(&self, eps: F) -> Self {
        let (stiffness, damping) = self.stiffness_damping(eps);
        SpringParams::FrequencyHalflife {
            frequency: stiffness_to_frequency(stiffness),
            halflife: damping_to_halflife(damping, eps),
        }
    }
}

fn check_non_negative<F: Float>(value: F, err: SpringError) -> Result<(), SpringError> {
    if value.is_finite() && value >= F::zero() {
        Ok(())
    } else {
        crate::debug!("rejecting {:?}: {}", value, err);
        Err(err)
    }
}
