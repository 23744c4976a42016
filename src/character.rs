//! Character-controller spring: velocity tracking with exact position.
//!
//! The velocity is a critically damped spring toward the desired velocity,
//! and the position is its closed-form integral, so a character driven by
//! stick input moves smoothly at any frame rate. [`CharacterSpring::predict`]
//! runs the same solution forward to preview the upcoming trajectory.

use core::iter::FusedIterator;

use crate::config::SpringConfig;
use crate::convert::halflife_to_damping;
use crate::float::Float;

/// Position, velocity and acceleration of one axis of a character.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CharacterSpring<F: Float> {
    pub x: F,
    pub v: F,
    pub a: F,
}

impl<F: Float> CharacterSpring<F> {
    pub fn new(x: F, v: F, a: F) -> Self {
        CharacterSpring { x, v, a }
    }

    pub fn at_rest(x: F) -> Self {
        CharacterSpring { x, v: F::zero(), a: F::zero() }
    }

    /// Advance by `dt` while the velocity chases `v_goal`.
    pub fn update(&mut self, v_goal: F, halflife: F, dt: F, config: &SpringConfig<F>) {
        let y = halflife_to_damping(halflife, config.eps) * F::half();
        let j0 = self.v - v_goal;
        let j1 = self.a + j0 * y;
        let eydt = config.negexp(y * dt);
        let y2 = y * y;

        self.x = eydt * ((-j1 / y2) + ((-j0 - j1 * dt) / y))
            + (j1 / y2)
            + j0 / y
            + v_goal * dt
            + self.x;
        self.v = eydt * (j0 + j1 * dt) + v_goal;
        self.a = eydt * (self.a - j1 * y * dt);
    }

    /// The state `i * dt` seconds from now, for `i` in `0..count`.
    ///
    /// Works on copies; `self` is left untouched. The iterator is `Clone`, so
    /// cloning it before consuming restarts the preview.
    pub fn predict(
        &self,
        v_goal: F,
        halflife: F,
        dt: F,
        count: usize,
        config: &SpringConfig<F>,
    ) -> Prediction<F> {
        Prediction {
            origin: *self,
            v_goal,
            halflife,
            dt,
            config: *config,
            index: 0,
            count,
        }
    }

    /// Fill `out` with the same samples [`predict`](Self::predict) yields.
    pub fn predict_into(
        &self,
        out: &mut [CharacterSpring<F>],
        v_goal: F,
        halflife: F,
        dt: F,
        config: &SpringConfig<F>,
    ) {
        let samples = self.predict(v_goal, halflife, dt, out.len(), config);
        for (slot, sample) in out.iter_mut().zip(samples) {
            *slot = sample;
        }
    }
}

/// Lazily computed trajectory preview. See [`CharacterSpring::predict`].
#[derive(Clone, Debug)]
pub struct Prediction<F: Float> {
    origin: CharacterSpring<F>,
    v_goal: F,
    halflife: F,
    dt: F,
    config: SpringConfig<F>,
    index: usize,
    count: usize,
}

impl<F: Float> Iterator for Prediction<F> {
    type Item = CharacterSpring<F>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }
        let mut sample = self.origin;
        let t = F::from_usize(self.index) * self.dt;
        sample.update(self.v_goal, self.halflife, t, &self.config);
        self.index += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl<F: Float> ExactSizeIterator for Prediction<F> {}

impl<F: Float> FusedIterator for Prediction<F> {}
