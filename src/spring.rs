//! Analytical spring-damper systems with closed-form solutions.

use crate::config::{Precision, SpringConfig};
use crate::convert::{halflife_to_damping, SpringParams};
use crate::float::Float;
use crate::math::{fast_atan, square};

/// What the spring is pulled toward this step.
///
/// Terms that are not supplied read as zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Goal<F: Float> {
    /// A static target position.
    Position(F),
    /// A target position moving at a known velocity.
    PositionVelocity(F, F),
    /// A target position with known velocity and acceleration.
    PositionVelocityAcceleration(F, F, F),
}

impl<F: Float> Goal<F> {
    pub fn position(&self) -> F {
        match *self {
            Goal::Position(x)
            | Goal::PositionVelocity(x, _)
            | Goal::PositionVelocityAcceleration(x, _, _) => x,
        }
    }

    pub fn velocity(&self) -> F {
        match *self {
            Goal::Position(_) => F::zero(),
            Goal::PositionVelocity(_, v) | Goal::PositionVelocityAcceleration(_, v, _) => v,
        }
    }

    pub fn acceleration(&self) -> F {
        match *self {
            Goal::PositionVelocityAcceleration(_, _, a) => a,
            _ => F::zero(),
        }
    }

    pub fn has_velocity(&self) -> bool {
        !matches!(self, Goal::Position(_))
    }

    pub fn has_acceleration(&self) -> bool {
        matches!(self, Goal::PositionVelocityAcceleration(..))
    }
}

/// Qualitative behaviour of a spring, from `stiffness - damping² / 4`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DampingRegime<F: Float> {
    /// Fastest approach without overshoot.
    CriticallyDamped,
    /// Oscillates at angular frequency `w` inside a decaying envelope.
    UnderDamped { w: F },
    /// Sum of two real exponentials with decay rates `y0 > y1`.
    OverDamped { y0: F, y1: F },
}

impl<F: Float> DampingRegime<F> {
    /// Classify a spring. Discriminants within `eps` of zero count as critical.
    pub fn classify(stiffness: F, damping: F, eps: F) -> Self {
        let discriminant = stiffness - square(damping) / F::from_f32(4.0);
        if discriminant.abs() < eps {
            DampingRegime::CriticallyDamped
        } else if discriminant > F::zero() {
            DampingRegime::UnderDamped { w: discriminant.sqrt() }
        } else {
            let root = (square(damping) - F::from_f32(4.0) * stiffness).sqrt();
            DampingRegime::OverDamped {
                y0: (damping + root) * F::half(),
                y1: (damping - root) * F::half(),
            }
        }
    }

    /// Classify any parameterisation.
    pub fn of(params: &SpringParams<F>, eps: F) -> Self {
        let (stiffness, damping) = params.stiffness_damping(eps);
        Self::classify(stiffness, damping, eps)
    }
}

/// Position and velocity of one animated scalar.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SpringState<F: Float> {
    pub x: F,
    pub v: F,
}

impl<F: Float> SpringState<F> {
    pub fn new(x: F, v: F) -> Self {
        SpringState { x, v }
    }

    /// A state sitting still at `x`.
    pub fn at_rest(x: F) -> Self {
        SpringState { x, v: F::zero() }
    }

    /// Advance by `dt` under a general spring-damper pulling toward `goal`.
    ///
    /// The goal velocity shifts the equilibrium to `x_goal + d·v_goal / s`,
    /// so a spring following a moving goal does not lag behind it.
    pub fn spring_damper(&mut self, goal: Goal<F>, params: SpringParams<F>, dt: F, config: &SpringConfig<F>) {
        let eps = config.eps;
        let (s, d) = params.stiffness_damping(eps);
        let c = goal.position() + (d * goal.velocity()) / (s + eps);
        let y = d * F::half();

        match DampingRegime::classify(s, d, eps) {
            DampingRegime::CriticallyDamped => {
                let j0 = self.x - c;
                let j1 = self.v + j0 * y;
                let eydt = config.negexp(y * dt);

                self.x = eydt * (j0 + j1 * dt) + c;
                self.v = eydt * (self.v - j1 * y * dt);
            }
            DampingRegime::UnderDamped { w } => match config.precision {
                Precision::Exact => self.under_damped_exact(c, y, w, dt, config),
                Precision::Fast => self.under_damped_fast(c, y, w, dt, config),
            },
            DampingRegime::OverDamped { y0, y1 } => {
                let j1 = (c * y0 - self.x * y0 - self.v) / (y1 - y0);
                let j0 = self.x - j1 - c;
                let ey0dt = config.negexp(y0 * dt);
                let ey1dt = config.negexp(y1 * dt);

                self.x = j0 * ey0dt + j1 * ey1dt + c;
                self.v = -y0 * j0 * ey0dt - y1 * j1 * ey1dt;
            }
        }
    }

    fn under_damped_exact(&mut self, c: F, y: F, w: F, dt: F, config: &SpringConfig<F>) {
        let a = self.x - c;
        let b = (self.v + a * y) / w;
        let eydt = config.negexp(y * dt);
        let cos_term = (w * dt).cos();
        let sin_term = (w * dt).sin();

        self.x = eydt * (a * cos_term + b * sin_term) + c;
        self.v = eydt * ((b * w - a * y) * cos_term - (a * w + b * y) * sin_term);
    }

    // Amplitude/phase form: one cos and one sin of the same angle.
    fn under_damped_fast(&mut self, c: F, y: F, w: F, dt: F, config: &SpringConfig<F>) {
        let eps = config.eps;
        let offset = self.x - c;
        let j = (square(self.v + y * offset) / (w * w + eps) + square(offset)).sqrt();
        let j = if offset > F::zero() { j } else { -j };
        let p = fast_atan((self.v + offset * y) / (-offset * w + eps));
        let eydt = config.negexp(y * dt);
        let angle = w * dt + p;

        self.x = j * eydt * angle.cos() + c;
        self.v = -y * j * eydt * angle.cos() - w * j * eydt * angle.sin();
    }

    /// Critically damped spring toward `goal`, tuned by halflife alone.
    pub fn critical(&mut self, goal: Goal<F>, halflife: F, dt: F, config: &SpringConfig<F>) {
        let d = halflife_to_damping(halflife, config.eps);
        let c = goal.position() + (d * goal.velocity()) / (square(d) / F::from_f32(4.0));
        let y = d * F::half();
        let j0 = self.x - c;
        let j1 = self.v + j0 * y;
        let eydt = config.negexp(y * dt);

        self.x = eydt * (j0 + j1 * dt) + c;
        self.v = eydt * (self.v - j1 * y * dt);
    }

    /// Critically damped spring toward a static position.
    pub fn simple(&mut self, x_goal: F, halflife: F, dt: F, config: &SpringConfig<F>) {
        let y = halflife_to_damping(halflife, config.eps) * F::half();
        let j0 = self.x - x_goal;
        let j1 = self.v + j0 * y;
        let eydt = config.negexp(y * dt);

        self.x = eydt * (j0 + j1 * dt) + x_goal;
        self.v = eydt * (self.v - j1 * y * dt);
    }

    /// Critically damped decay of both position and velocity to zero.
    pub fn decay(&mut self, halflife: F, dt: F, config: &SpringConfig<F>) {
        let y = halflife_to_damping(halflife, config.eps) * F::half();
        let j1 = self.v + self.x * y;
        let eydt = config.negexp(y * dt);

        self.x = eydt * (self.x + j1 * dt);
        self.v = eydt * (self.v - j1 * y * dt);
    }

    /// Coast forward with no goal while velocity decays with `halflife`.
    pub fn extrapolate(&mut self, dt: F, halflife: F, config: &SpringConfig<F>) {
        let eps = config.eps;
        let y = F::ln_2() / (halflife + eps);
        let eydt = config.negexp(y * dt);

        self.x += (self.v / (y + eps)) * (F::one() - eydt);
        self.v *= eydt;
    }

    /// Whether the state is within `eps_pos` of `goal` and moving slower than `eps_vel`.
    pub fn is_settled(&self, goal: F, eps_pos: F, eps_vel: F) -> bool {
        (self.x - goal).is_near_zero(eps_pos) && self.v.is_near_zero(eps_vel)
    }
}
