//! Measured samples and the nearest-angle lookup over them.

use num_traits::Float;

use crate::{cast, Result};

/// Period of the azimuth (phi) axis, in degrees.
const PHI_PERIOD: f64 = 360.0;

/// One row of the RCS table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<T> {
    /// Illumination frequency
    pub frequency: T,
    /// Discrete incident direction id, stored as a real value
    pub incident_direction: T,
    /// Observation polar angle in degrees
    pub theta: T,
    /// Observation azimuth in degrees
    pub phi: T,
    /// RCS in dB
    pub rcs: T,
}

impl<T> Sample<T> {
    pub fn new(frequency: T, incident_direction: T, theta: T, phi: T, rcs: T) -> Self {
        Self {
            frequency,
            incident_direction,
            theta,
            phi,
            rcs,
        }
    }
}

/// Smallest absolute azimuth separation, folding any multiple of 360 degrees.
/// The result is in `[0, 180]`.
#[inline]
pub fn phi_delta<T: Float>(a: T, b: T) -> Result<T> {
    let period: T = cast(PHI_PERIOD)?;
    let mut d = (a - b) % period;
    if d < T::zero() {
        d = d + period;
    }
    Ok(d.min(period - d))
}

/// Distance in the (theta, phi) plane, with theta treated as linear
/// and phi wrapped.
#[inline]
pub fn angular_distance<T: Float>(sample: &Sample<T>, theta: T, phi: T) -> Result<T> {
    let dtheta = sample.theta - theta;
    let dphi = phi_delta(sample.phi, phi)?;
    Ok(dtheta.hypot(dphi))
}

/// RCS of the sample at `(frequency, incident_direction)` closest in angle to
/// `(theta, phi)`.
///
/// Samples are matched on frequency and direction within `tolerance`.
/// Ties go to the first sample in table order. Returns `None` when no sample
/// matches.
pub fn nearest_rcs<T: Float>(
    samples: &[Sample<T>],
    frequency: T,
    incident_direction: T,
    theta: T,
    phi: T,
    tolerance: T,
) -> Result<Option<T>> {
    let mut min_dist = T::max_value();
    let mut best = None;

    for s in samples.iter().filter(|s| {
        (s.frequency - frequency).abs() < tolerance
            && (s.incident_direction - incident_direction).abs() < tolerance
    }) {
        let dist = angular_distance(s, theta, phi)?;
        if dist < min_dist {
            min_dist = dist;
            best = Some(s.rcs);
        }
    }

    Ok(best)
}
