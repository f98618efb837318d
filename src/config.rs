//! Configuration for the interpolation engine

use num_traits::Float;

use crate::{cast, Result};

/// Absolute tolerance used to match a sample's frequency and incident direction
/// to a bracketed breakpoint.
pub const MATCH_TOLERANCE: f64 = 0.1;

/// RCS in dB returned for a corner that has no samples at all.
/// This is a "no data" marker, not a measurement.
pub const MISSING_VALUE_DB: f64 = -50.0;

/// What to do when the two nearest catalog directions are both at zero distance
/// (or the distance sum is otherwise unusable) from the incident vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegenerateDirection {
    /// Fail with [`crate::RcsError::InvalidDirectionParameter`].
    #[default]
    Reject,
    /// Weight both directions equally (`t = 0.5`).
    Midpoint,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig<T: Float> {
    pub match_tolerance: T,
    pub missing_value: T,
    pub degenerate_direction: DegenerateDirection,
}

impl<T: Float> EngineConfig<T> {
    /// Default configuration, failing only if the default constants
    /// can't be represented in `T`.
    pub fn new() -> Result<Self> {
        Ok(Self {
            match_tolerance: cast(MATCH_TOLERANCE)?,
            missing_value: cast(MISSING_VALUE_DB)?,
            degenerate_direction: DegenerateDirection::default(),
        })
    }

    pub fn match_tolerance(mut self, tolerance: T) -> Self {
        self.match_tolerance = tolerance;
        self
    }

    pub fn missing_value(mut self, value: T) -> Self {
        self.missing_value = value;
        self
    }

    pub fn degenerate_direction(mut self, policy: DegenerateDirection) -> Self {
        self.degenerate_direction = policy;
        self
    }
}

impl Default for EngineConfig<f64> {
    fn default() -> Self {
        Self {
            match_tolerance: MATCH_TOLERANCE,
            missing_value: MISSING_VALUE_DB,
            degenerate_direction: DegenerateDirection::Reject,
        }
    }
}

impl Default for EngineConfig<f32> {
    fn default() -> Self {
        Self {
            match_tolerance: MATCH_TOLERANCE as f32,
            missing_value: MISSING_VALUE_DB as f32,
            degenerate_direction: DegenerateDirection::Reject,
        }
    }
}
