//! Hiding discontinuities when the input signal jumps.
//!
//! Both techniques sit between a signal source and whatever displays it.
//! When the source switches, the caller calls `transition` once, then
//! `update` every frame with the new live input:
//!
//! * [`Inertializer`] carries the jump as an offset and decays it away.
//! * [`DeadBlend`] keeps coasting the old motion and cross-fades into the
//!   new input over a fixed blend time.

use crate::config::SpringConfig;
use crate::damper::damper_decay_exact;
use crate::float::Float;
use crate::math::{lerp, smoothstep};
use crate::spring::SpringState;

/// Offset-based inertialization state.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Inertializer<F: Float> {
    pub offset_x: F,
    pub offset_v: F,
}

impl<F: Float> Inertializer<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a switch from `src` to `dst`.
    ///
    /// The offset absorbs the gap so that `dst + offset` starts exactly where
    /// the previous output was. Any offset still decaying from an earlier
    /// transition is kept.
    pub fn transition(&mut self, src: SpringState<F>, dst: SpringState<F>) {
        self.offset_x = (src.x + self.offset_x) - dst.x;
        self.offset_v = (src.v + self.offset_v) - dst.v;
        crate::trace!(
            "inertialization transition: offset ({:?}, {:?})",
            self.offset_x,
            self.offset_v
        );
    }

    /// Decay the offset by `dt` and apply it to the live `input`.
    pub fn update(
        &mut self,
        input: SpringState<F>,
        halflife: F,
        dt: F,
        config: &SpringConfig<F>,
    ) -> SpringState<F> {
        let mut offset = SpringState::new(self.offset_x, self.offset_v);
        offset.decay(halflife, dt, config);
        self.offset_x = offset.x;
        self.offset_v = offset.v;

        SpringState::new(input.x + self.offset_x, input.v + self.offset_v)
    }
}

/// Extrapolate-and-blend ("dead blending") state.
///
/// `ext_t` is the time since the last transition. Once the blend completes it
/// is parked at `F::max_value()` and updates pass the input straight through.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DeadBlend<F: Float> {
    pub ext_x: F,
    pub ext_v: F,
    pub ext_t: F,
}

impl<F: Float> Default for DeadBlend<F> {
    fn default() -> Self {
        DeadBlend {
            ext_x: F::zero(),
            ext_v: F::zero(),
            ext_t: F::max_value(),
        }
    }
}

impl<F: Float> DeadBlend<F> {
    /// A blend with no transition in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a blend from the current output `src`.
    pub fn transition(&mut self, src: SpringState<F>) {
        self.ext_x = src.x;
        self.ext_v = src.v;
        self.ext_t = F::zero();
        crate::trace!("dead blend transition from ({:?}, {:?})", src.x, src.v);
    }

    /// Whether a blend is still in progress.
    pub fn is_blending(&self) -> bool {
        self.ext_t != F::max_value()
    }

    /// Coast the old motion at constant velocity and blend toward `input`.
    pub fn update(
        &mut self,
        input: SpringState<F>,
        blendtime: F,
        dt: F,
        config: &SpringConfig<F>,
    ) -> SpringState<F> {
        self.blend(input, blendtime, dt, config, |ext_v| ext_v)
    }

    /// As [`update`](Self::update), but the coasting velocity decays with
    /// `decay_halflife` so the old motion slows down while it fades out.
    pub fn update_decay(
        &mut self,
        input: SpringState<F>,
        blendtime: F,
        decay_halflife: F,
        dt: F,
        config: &SpringConfig<F>,
    ) -> SpringState<F> {
        let eps = config.eps;
        self.blend(input, blendtime, dt, config, |ext_v| {
            damper_decay_exact(ext_v, decay_halflife, dt, eps)
        })
    }

    fn blend(
        &mut self,
        input: SpringState<F>,
        blendtime: F,
        dt: F,
        config: &SpringConfig<F>,
        decay: impl FnOnce(F) -> F,
    ) -> SpringState<F> {
        if self.ext_t < blendtime {
            self.ext_v = decay(self.ext_v);
            self.ext_x += self.ext_v * dt;
            self.ext_t += dt;

            let alpha = smoothstep(self.ext_t / blendtime.max(config.blend_eps));
            SpringState::new(
                lerp(self.ext_x, input.x, alpha),
                lerp(self.ext_v, input.v, alpha),
            )
        } else {
            if self.is_blending() {
                crate::trace!("dead blend complete");
            }
            self.ext_t = F::max_value();
            input
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_blend_starts_idle() {
        let config = SpringConfig::<f32>::new();
        let mut blend = DeadBlend::new();
        assert!(!blend.is_blending());
        let input = SpringState::new(4.0f32, -1.0);
        assert_eq!(blend.update(input, 0.2, 1.0 / 60.0, &config), input);
    }

    #[test]
    fn inertializer_keeps_pending_offset() {
        let mut inertializer = Inertializer::<f64>::new();
        inertializer.transition(SpringState::new(1.0, 0.0), SpringState::new(0.0, 0.0));
        inertializer.transition(SpringState::new(5.0, 2.0), SpringState::new(3.0, 1.0));
        assert_eq!(inertializer.offset_x, 3.0);
        assert_eq!(inertializer.offset_v, 1.0);
    }

    #[test]
    fn zero_blendtime_passes_through() {
        let config = SpringConfig::<f64>::new();
        let mut blend = DeadBlend::new();
        blend.transition(SpringState::new(0.0, 10.0));
        let input = SpringState::new(1.0, 2.0);
        assert_eq!(blend.update(input, 0.0, 1.0 / 60.0, &config), input);
        assert!(!blend.is_blending());
    }
}
