//! Error types for parameter validation.
//!
//! The per-frame updates never fail. These errors only come out of the
//! checked constructors and [`SpringConfig::validate`](crate::config::SpringConfig::validate),
//! where user-facing settings are turned into integrator parameters.

use core::fmt;

/// Errors produced when validating spring parameters or configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpringError {
    /// Halflife must be finite and non-negative.
    InvalidHalflife,
    /// Frequency must be finite and non-negative.
    InvalidFrequency,
    /// Damping ratio must be finite and positive.
    InvalidDampingRatio,
    /// Stiffness must be finite and non-negative.
    InvalidStiffness,
    /// Damping must be finite and non-negative.
    InvalidDamping,
    /// Epsilon guards must be finite and positive.
    InvalidEpsilon,
    /// Apprehension must be finite and non-negative.
    InvalidApprehension,
}

impl fmt::Display for SpringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpringError::InvalidHalflife => write!(f, "halflife must be finite and non-negative"),
            SpringError::InvalidFrequency => write!(f, "frequency must be finite and non-negative"),
            SpringError::InvalidDampingRatio => write!(f, "damping ratio must be finite and positive"),
            SpringError::InvalidStiffness => write!(f, "stiffness must be finite and non-negative"),
            SpringError::InvalidDamping => write!(f, "damping must be finite and non-negative"),
            SpringError::InvalidEpsilon => write!(f, "epsilon must be finite and positive"),
            SpringError::InvalidApprehension => write!(f, "apprehension must be finite and non-negative"),
        }
    }
}

impl core::error::Error for SpringError {}
