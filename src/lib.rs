//! Radar cross section (RCS) estimation from a sparse table of measured or
//! simulated samples.
//!
//! Each sample records the RCS of a target at one illumination frequency,
//! one incident direction (a small integer id from a fixed catalog), and one
//! observation direction `(theta, phi)` in degrees. An estimate at an arbitrary
//! point is built by
//!
//! 1. bracketing the frequency between the two nearest distinct sampled frequencies,
//! 2. bracketing the incident direction, either numerically by id or, for an arbitrary
//!    spherical incidence, by picking the two closest catalog directions,
//! 3. taking the angularly-nearest sample at each of the four (frequency, direction)
//!    corners, with phi treated as periodic, and
//! 4. blending the corners linearly across direction, then across frequency.
//!
//! Observations outside the sampled frequency or direction range clamp to the
//! nearest end. A corner with no samples at all contributes a fixed "no data"
//! value (-50 dB by default, see [`EngineConfig`]) rather than failing.
//!
//! # Example
//! ```rust
//! use rcs_interp::{RcsEngine, Sample};
//!
//! // Two frequencies, two incident directions, one observation angle
//! let samples = [
//!     Sample::new(5.0_f64, 1.0, 0.0, 0.0, -10.0),
//!     Sample::new(5.0, 2.0, 0.0, 0.0, -20.0),
//!     Sample::new(15.0, 1.0, 0.0, 0.0, -30.0),
//!     Sample::new(15.0, 2.0, 0.0, 0.0, -40.0),
//! ];
//!
//! let engine = RcsEngine::new(&samples).unwrap();
//!
//! // Halfway between both frequencies and both directions
//! let rcs = engine.rcs_at_direction(10.0, 1.5, 0.0, 0.0).unwrap();
//! assert_eq!(rcs, -25.0);
//!
//! // Incidence straight down +z lands exactly on catalog direction 2
//! let rcs = engine.rcs_at_incidence(5.0, 0.0, 0.0, 0.0, 0.0).unwrap();
//! assert_eq!(rcs, -20.0);
//! ```
//!
//! # Cost
//! Every query re-derives its breakpoints from the table and scans the table once
//! per corner, so a single evaluation is O(n log n) in the number of samples.
//! The engine never mutates its table and can be shared freely across threads.

// These "needless" range loops read more clearly over parallel columns
#![allow(clippy::needless_range_loop)]

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod one_dim;
pub mod report;
pub mod sample;
pub mod utils;

pub use catalog::{Direction, DirectionCatalog};
pub use config::{DegenerateDirection, EngineConfig};
pub use engine::RcsEngine;
pub use error::{RcsError, Result};
pub use one_dim::{Bracket, Extrap};
pub use report::{Incidence, Report};
pub use sample::Sample;

#[cfg(test)]
pub(crate) mod testing;

use num_traits::{Float, NumCast, ToPrimitive};

/// Convert a constant or id into the working float type.
#[inline]
pub(crate) fn cast<T: Float, N: ToPrimitive>(x: N) -> Result<T> {
    <T as NumCast>::from(x).ok_or(RcsError::Unrepresentable)
}
