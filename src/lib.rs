//! Analytic springs, dampers and blending for games.
//!
//! `damped` moves a scalar toward a goal using the exact solution of a
//! first- or second-order linear ODE, so results do not depend on frame rate
//! and stay stable for large or irregular `dt`. Designed for game use: camera
//! follow, character movement, UI juice, and hiding pops when an animation
//! source switches.
//!
//! # Features
//!
//! - **Dampers**: exponential decay parameterised by halflife
//! - **Spring-dampers**: closed-form under/critically/over-damped solutions,
//!   tuned by frequency, damping ratio or raw stiffness/damping
//! - **Compound springs**: double, timed and velocity-limited springs
//! - **Tracking**: follow a moving target from its sampled position,
//!   velocity and acceleration
//! - **Character controller**: velocity spring with exact position and
//!   trajectory prediction
//! - **Blending**: inertialization and dead blending
//! - **`no_std` compatible**: no allocation, `libm` for transcendentals
//!
//! Every routine is scalar; apply it once per axis.
//!
//! ```
//! use damped::{SpringConfig, SpringState};
//!
//! let config = SpringConfig::new();
//! let mut state = SpringState::at_rest(180.0f32);
//! for _ in 0..60 {
//!     state.simple(100.0, 0.1, 1.0 / 60.0, &config);
//! }
//! assert!((state.x - 100.0).abs() < 1.0);
//! ```

#![no_std]

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

pub(crate) use debug;
pub(crate) use trace;

pub mod float;
pub mod math;
pub mod convert;
pub mod damper;
pub mod spring;
pub mod compound;
pub mod tracking;
pub mod character;
pub mod blend;
pub mod interpolation;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use math::{fast_atan, fast_negexp, lerp, smoothstep, square};
pub use convert::{
    critical_frequency, critical_halflife, damping_ratio_to_damping, damping_ratio_to_stiffness,
    damping_to_halflife, frequency_to_stiffness, halflife_to_damping, resonant_frequency,
    spring_energy, stiffness_to_frequency, SpringParams,
};
pub use damper::{damper_decay_exact, damper_exact, damper_fast};
pub use spring::{DampingRegime, Goal, SpringState};
pub use compound::{DoubleSpring, TimedSpring, VelocitySpring};
pub use tracking::{target_acceleration, target_velocity, TrackingSpring};
pub use character::{CharacterSpring, Prediction};
pub use blend::{DeadBlend, Inertializer};
pub use interpolation::piecewise_interpolation;
pub use config::{Precision, SpringConfig};
pub use error::SpringError;
