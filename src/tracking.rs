//! Springs that follow a moving target sample by sample.
//!
//! The target is described each frame by a [`Goal`], usually with velocity and
//! acceleration estimated by [`target_velocity`] and [`target_acceleration`]
//! from consecutive samples. Goal terms that are not supplied drop their
//! stage from the cascade.

use crate::config::SpringConfig;
use crate::convert::SpringParams;
use crate::damper::damper_exact;
use crate::float::Float;
use crate::math::{lerp, square};
use crate::spring::{Goal, SpringState};

/// How a tracking spring blends toward its target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TrackingSpring<F: Float> {
    /// Fixed per-step blend factors in `[0, 1]`. The result depends on `dt`.
    Gain { x_gain: F, v_gain: F, a_gain: F },
    /// Each stage is a [`damper_exact`] with its own halflife.
    Halflife { x_halflife: F, v_halflife: F, a_halflife: F },
    /// The spring-damper that reproduces the [`Gain`](Self::Gain) cascade
    /// run at a fixed `gain_dt`, solved exactly for whatever `dt` is used.
    Exact { x_gain: F, v_gain: F, a_gain: F, gain_dt: F },
}

impl<F: Float> TrackingSpring<F> {
    /// Advance `state` by `dt` toward `goal`. A zero `dt` leaves it unchanged.
    pub fn update(&self, state: &mut SpringState<F>, goal: Goal<F>, dt: F, config: &SpringConfig<F>) {
        match *self {
            TrackingSpring::Gain { .. } | TrackingSpring::Halflife { .. } if dt <= F::zero() => {}
            TrackingSpring::Gain { x_gain, v_gain, a_gain } => {
                if goal.has_acceleration() {
                    state.v = lerp(state.v, state.v + goal.acceleration() * dt, a_gain);
                }
                if goal.has_velocity() {
                    state.v = lerp(state.v, goal.velocity(), v_gain);
                }
                state.v = lerp(state.v, (goal.position() - state.x) / dt, x_gain);
                state.x += dt * state.v;
            }
            TrackingSpring::Halflife { x_halflife, v_halflife, a_halflife } => {
                let eps = config.eps;
                if goal.has_acceleration() {
                    let target = state.v + goal.acceleration() * dt;
                    state.v = damper_exact(state.v, target, a_halflife, dt, eps);
                }
                if goal.has_velocity() {
                    state.v = damper_exact(state.v, goal.velocity(), v_halflife, dt, eps);
                }
                let target = (goal.position() - state.x) / dt;
                state.v = damper_exact(state.v, target, x_halflife, dt, eps);
                state.x += dt * state.v;
            }
            TrackingSpring::Exact { x_gain, v_gain, a_gain, gain_dt } => {
                let (params, spring_goal) =
                    Self::equivalent_spring(goal, x_gain, v_gain, a_gain, gain_dt, config.eps);
                state.spring_damper(spring_goal, params, dt, config);
            }
        }
    }

    /// Stiffness, damping and goal of the spring equivalent to the gain cascade.
    ///
    /// One step of the cascade at `gain_dt` is a linear update of `(x, v)`;
    /// matching its coefficients against a spring-damper gives
    /// `s = x_gain / gain_dt²` and `d = (1 - (1 - v_gain)(1 - x_gain)) / gain_dt`.
    pub fn equivalent_spring(
        goal: Goal<F>,
        x_gain: F,
        v_gain: F,
        a_gain: F,
        gain_dt: F,
        eps: F,
    ) -> (SpringParams<F>, Goal<F>) {
        let one = F::one();
        let v_gain = if goal.has_velocity() { v_gain } else { F::zero() };
        let a_gain = if goal.has_acceleration() { a_gain } else { F::zero() };

        let t0 = (one - v_gain) * (one - x_gain);
        let t1 = a_gain * (one - v_gain) * (one - x_gain);
        let t2 = (v_gain * (one - x_gain)) / gain_dt;
        let t3 = x_gain / square(gain_dt);

        let stiffness = t3;
        let damping = (one - t0) / gain_dt;
        let spring_v_goal = (t2 * goal.velocity() + t1 * goal.acceleration()) / (damping + eps);

        (
            SpringParams::StiffnessDamping { stiffness, damping },
            Goal::PositionVelocity(goal.position(), spring_v_goal),
        )
    }
}

/// Finite-difference velocity of a target from two consecutive samples.
#[inline]
pub fn target_velocity<F: Float>(x_next: F, x_curr: F, dt: F) -> F {
    (x_next - x_curr) / dt
}

/// Finite-difference acceleration of a target from three consecutive samples.
#[inline]
pub fn target_acceleration<F: Float>(x_next: F, x_curr: F, x_prev: F, dt: F) -> F {
    (((x_next - x_curr) / dt) - ((x_curr - x_prev) / dt)) / dt
}
