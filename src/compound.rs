//! Springs that chase an intermediate goal instead of the real one.
//!
//! Each type keeps a proxy position `xi` that moves toward the true goal in a
//! controlled way, and the visible state is a simple spring chasing that
//! proxy. All of them are plain data owned by the caller.

use crate::config::SpringConfig;
use crate::float::Float;
use crate::spring::SpringState;

/// Two simple springs in series, each with half the halflife.
///
/// Starts more gently than a single spring of the same halflife, giving an
/// S-shaped approach.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DoubleSpring<F: Float> {
    pub x: F,
    pub v: F,
    pub xi: F,
    pub vi: F,
}

impl<F: Float> DoubleSpring<F> {
    /// Both stages at rest at `x`.
    pub fn at_rest(x: F) -> Self {
        DoubleSpring { x, v: F::zero(), xi: x, vi: F::zero() }
    }

    pub fn update(&mut self, x_goal: F, halflife: F, dt: F, config: &SpringConfig<F>) {
        let stage_halflife = halflife * F::half();

        let mut intermediate = SpringState::new(self.xi, self.vi);
        intermediate.simple(x_goal, stage_halflife, dt, config);
        self.xi = intermediate.x;
        self.vi = intermediate.v;

        let mut output = SpringState::new(self.x, self.v);
        output.simple(self.xi, stage_halflife, dt, config);
        self.x = output.x;
        self.v = output.v;
    }

    pub fn state(&self) -> SpringState<F> {
        SpringState::new(self.x, self.v)
    }
}

/// A spring that arrives at its goal at a requested time.
///
/// The proxy `xi` moves linearly so that it reaches the goal exactly when
/// `t_goal` runs out. The spring aims `apprehension` halflives ahead along
/// that line to make up for its own lag.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TimedSpring<F: Float> {
    pub x: F,
    pub v: F,
    pub xi: F,
}

impl<F: Float> TimedSpring<F> {
    pub fn at_rest(x: F) -> Self {
        TimedSpring { x, v: F::zero(), xi: x }
    }

    /// `t_goal` is the time remaining until the goal should be reached.
    pub fn update(&mut self, x_goal: F, t_goal: F, halflife: F, dt: F, config: &SpringConfig<F>) {
        let min_time = t_goal.max(dt).max(config.eps);
        let v_goal = (x_goal - self.xi) / min_time;

        let t_goal_future = dt + config.apprehension * halflife;
        let x_goal_future = if t_goal_future < t_goal {
            self.xi + v_goal * t_goal_future
        } else {
            x_goal
        };

        let mut state = SpringState::new(self.x, self.v);
        state.simple(x_goal_future, halflife, dt, config);
        self.x = state.x;
        self.v = state.v;

        self.xi += v_goal * dt;
    }

    pub fn state(&self) -> SpringState<F> {
        SpringState::new(self.x, self.v)
    }
}

/// A spring whose proxy goal approaches the real goal at a fixed speed.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct VelocitySpring<F: Float> {
    pub x: F,
    pub v: F,
    pub xi: F,
}

impl<F: Float> VelocitySpring<F> {
    pub fn at_rest(x: F) -> Self {
        VelocitySpring { x, v: F::zero(), xi: x }
    }

    /// `v_goal` is the approach speed; it should be non-negative.
    pub fn update(&mut self, x_goal: F, v_goal: F, halflife: F, dt: F, config: &SpringConfig<F>) {
        let remaining = x_goal - self.xi;
        let x_diff = if remaining > F::zero() { v_goal } else { -v_goal };

        let t_goal_future = dt + config.apprehension * halflife;
        let x_goal_future = if remaining.abs() > t_goal_future * v_goal {
            self.xi + x_diff * t_goal_future
        } else {
            x_goal
        };

        let mut state = SpringState::new(self.x, self.v);
        state.simple(x_goal_future, halflife, dt, config);
        self.x = state.x;
        self.v = state.v;

        // Never step past the goal.
        self.xi = if remaining.abs() > dt * v_goal {
            self.xi + x_diff * dt
        } else {
            x_goal
        };
    }

    pub fn state(&self) -> SpringState<F> {
        SpringState::new(self.x, self.v)
    }
}
