//! Nested linear interpolation over the (frequency, incident direction) corners
//! of an RCS table, with a nearest-angle lookup at each corner.
//!
//! ```rust
//! use rcs_interp::{RcsEngine, Sample};
//!
//! let samples = [
//!     Sample::new(5.0_f64, 1.0, 45.0, 90.0, -12.0),
//!     Sample::new(5.0, 1.0, 45.0, 270.0, -18.0),
//! ];
//! let engine = RcsEngine::new(&samples).unwrap();
//!
//! // phi = -90 is the same azimuth as phi = 270
//! assert_eq!(engine.rcs_at_direction(5.0, 1.0, 45.0, -90.0).unwrap(), -18.0);
//!
//! // Batch evaluation into caller storage
//! let freqs = [5.0, 5.0];
//! let dirs = [1.0, 1.0];
//! let thetas = [45.0, 45.0];
//! let phis = [100.0, 260.0];
//! let mut out = [0.0; 2];
//! engine.interp(&[&freqs[..], &dirs[..], &thetas[..], &phis[..]], &mut out).unwrap();
//! assert_eq!(out, [-12.0, -18.0]);
//! ```
use std::cmp::Ordering;
use std::fmt::Debug;

use log::{debug, trace, warn};
use num_traits::Float;

use crate::catalog::DirectionCatalog;
use crate::config::{DegenerateDirection, EngineConfig};
use crate::geometry::{cosine_distance, spherical_to_cartesian};
use crate::one_dim::linear::{interpolate, interpolate_bracket};
use crate::one_dim::{bracket, breakpoints, Bracket};
use crate::sample::{nearest_rcs, Sample};
use crate::{cast, RcsError, Result};

/// RCS estimator over a borrowed, read-only sample table.
///
/// Holds no per-query state; every evaluation derives its breakpoints
/// from the table afresh.
#[derive(Debug, Clone)]
pub struct RcsEngine<'a, T: Float> {
    samples: &'a [Sample<T>],
    catalog: DirectionCatalog<T>,
    config: EngineConfig<T>,
}

impl<'a, T: Float + Debug> RcsEngine<'a, T> {
    /// Engine with the canonical direction catalog and default configuration.
    ///
    /// # Errors
    /// * If the catalog or default constants can't be represented in `T`
    pub fn new(samples: &'a [Sample<T>]) -> Result<Self> {
        Ok(Self::with_config(
            samples,
            DirectionCatalog::canonical()?,
            EngineConfig::new()?,
        ))
    }

    pub fn with_config(
        samples: &'a [Sample<T>],
        catalog: DirectionCatalog<T>,
        config: EngineConfig<T>,
    ) -> Self {
        Self {
            samples,
            catalog,
            config,
        }
    }

    pub fn samples(&self) -> &'a [Sample<T>] {
        self.samples
    }

    pub fn catalog(&self) -> &DirectionCatalog<T> {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig<T> {
        &self.config
    }

    /// Sampled frequencies on either side of `frequency`.
    ///
    /// # Errors
    /// * If the table has no samples
    pub fn frequency_bracket(&self, frequency: T) -> Result<Bracket<T>> {
        let grid = breakpoints(self.samples.iter().map(|s| s.frequency));
        bracket(&grid, frequency)
    }

    /// Sampled incident direction ids on either side of `direction`.
    ///
    /// # Errors
    /// * If the table has no samples
    pub fn direction_bracket(&self, direction: T) -> Result<Bracket<T>> {
        let grid = breakpoints(self.samples.iter().map(|s| s.incident_direction));
        bracket(&grid, direction)
    }

    /// The two catalog directions closest to `incident` by cosine distance,
    /// closest first, as `(id, distance)`.
    ///
    /// Equal distances keep catalog (id) order. A NaN distance ranks last.
    ///
    /// # Errors
    /// * If the catalog has fewer than two directions
    pub fn nearest_directions(&self, incident: [T; 3]) -> Result<[(u8, T); 2]> {
        if self.catalog.len() < 2 {
            return Err(RcsError::CatalogTooSmall);
        }

        let rank = |d: T| if d.is_nan() { T::infinity() } else { d };
        let mut ranked: Vec<(u8, T)> = self
            .catalog
            .iter()
            .map(|d| (d.id, rank(cosine_distance(incident, d.propagation))))
            .collect();
        ranked.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

        Ok([ranked[0], ranked[1]])
    }

    /// Estimate RCS for a catalog incident direction given by id.
    ///
    /// `direction` is bracketed numerically among the sampled ids, so a
    /// fractional id blends the two neighbouring directions.
    ///
    /// # Errors
    /// * If the table has no samples
    pub fn rcs_at_direction(&self, frequency: T, direction: T, theta: T, phi: T) -> Result<T> {
        let fb = self.frequency_bracket(frequency)?;
        let db = self.direction_bracket(direction)?;
        debug!(
            "frequency {frequency:?} -> [{:?}, {:?}], direction {direction:?} -> [{:?}, {:?}]",
            fb.lo, fb.hi, db.lo, db.hi
        );

        let [[rcs11, rcs12], [rcs21, rcs22]] = self.corners(&fb, db.lo, db.hi, theta, phi)?;

        let at_f1 = interpolate_bracket(&db, rcs11, rcs12, direction);
        let at_f2 = interpolate_bracket(&db, rcs21, rcs22, direction);
        Ok(interpolate_bracket(&fb, at_f1, at_f2, frequency))
    }

    /// Estimate RCS for an arbitrary incident direction in spherical
    /// coordinates (degrees).
    ///
    /// The incidence is projected onto the two closest catalog directions `d1`, `d2`
    /// and blended with weight `t = dist(d1) / (dist(d1) + dist(d2))` toward `d2`.
    ///
    /// # Errors
    /// * If the table has no samples
    /// * If the catalog has fewer than two directions
    /// * If the distance sum is degenerate and the configuration rejects that case
    pub fn rcs_at_incidence(
        &self,
        frequency: T,
        incident_theta: T,
        incident_phi: T,
        theta: T,
        phi: T,
    ) -> Result<T> {
        let incident = spherical_to_cartesian(T::one(), incident_theta, incident_phi);

        let fb = self.frequency_bracket(frequency)?;
        let [(id1, dist1), (id2, dist2)] = self.nearest_directions(incident)?;
        let t = self.direction_parameter(dist1, dist2)?;
        debug!(
            "frequency {frequency:?} -> [{:?}, {:?}], incidence ({incident_theta:?}, {incident_phi:?}) -> directions {id1} ({dist1:?}), {id2} ({dist2:?}), t = {t:?}",
            fb.lo, fb.hi
        );

        let (d1, d2) = (cast(id1)?, cast(id2)?);
        let [[rcs11, rcs12], [rcs21, rcs22]] = self.corners(&fb, d1, d2, theta, phi)?;

        let (zero, one) = (T::zero(), T::one());
        let at_f1 = interpolate(rcs11, rcs12, zero, one, t);
        let at_f2 = interpolate(rcs21, rcs22, zero, one, t);
        Ok(interpolate_bracket(&fb, at_f1, at_f2, frequency))
    }

    /// Evaluate [`Self::rcs_at_direction`] over columns of
    /// (frequency, direction, theta, phi).
    ///
    /// # Errors
    ///   * If any input column length does not match the output
    ///   * If any single evaluation fails
    pub fn interp(&self, obs: &[&[T]; 4], out: &mut [T]) -> Result<()> {
        let n = out.len();
        if obs.iter().any(|x| x.len() != n) {
            return Err(RcsError::DimensionMismatch);
        }

        for i in 0..n {
            out[i] = self.rcs_at_direction(obs[0][i], obs[1][i], obs[2][i], obs[3][i])?;
        }

        Ok(())
    }

    /// Evaluate [`Self::rcs_at_incidence`] over columns of
    /// (frequency, incident theta, incident phi, theta, phi).
    ///
    /// # Errors
    ///   * If any input column length does not match the output
    ///   * If any single evaluation fails
    pub fn interp_incidence(&self, obs: &[&[T]; 5], out: &mut [T]) -> Result<()> {
        let n = out.len();
        if obs.iter().any(|x| x.len() != n) {
            return Err(RcsError::DimensionMismatch);
        }

        for i in 0..n {
            out[i] =
                self.rcs_at_incidence(obs[0][i], obs[1][i], obs[2][i], obs[3][i], obs[4][i])?;
        }

        Ok(())
    }

    /// Evaluate, allocating a new Vec for the output.
    pub fn interp_alloc(&self, obs: &[&[T]; 4]) -> Result<Vec<T>> {
        let mut out = vec![T::zero(); obs[0].len()];
        self.interp(obs, &mut out)?;
        Ok(out)
    }

    /// Evaluate, allocating a new Vec for the output.
    pub fn interp_incidence_alloc(&self, obs: &[&[T]; 5]) -> Result<Vec<T>> {
        let mut out = vec![T::zero(); obs[0].len()];
        self.interp_incidence(obs, &mut out)?;
        Ok(out)
    }

    /// Blend weight toward the second-closest direction.
    fn direction_parameter(&self, dist1: T, dist2: T) -> Result<T> {
        let sum = dist1 + dist2;
        if sum > T::zero() && sum.is_finite() {
            return Ok(dist1 / sum);
        }

        match self.config.degenerate_direction {
            DegenerateDirection::Reject => Err(RcsError::InvalidDirectionParameter),
            DegenerateDirection::Midpoint => {
                warn!("degenerate direction distances ({dist1:?}, {dist2:?}), using t = 0.5");
                cast(0.5)
            }
        }
    }

    /// Nearest-angle values at the four (frequency, direction) corners,
    /// indexed `[frequency][direction]`.
    #[inline]
    fn corners(&self, fb: &Bracket<T>, d1: T, d2: T, theta: T, phi: T) -> Result<[[T; 2]; 2]> {
        Ok([
            [
                self.corner(fb.lo, d1, theta, phi)?,
                self.corner(fb.lo, d2, theta, phi)?,
            ],
            [
                self.corner(fb.hi, d1, theta, phi)?,
                self.corner(fb.hi, d2, theta, phi)?,
            ],
        ])
    }

    /// Value at one corner, or the no-data value if nothing was sampled there.
    fn corner(&self, frequency: T, direction: T, theta: T, phi: T) -> Result<T> {
        let found = nearest_rcs(
            self.samples,
            frequency,
            direction,
            theta,
            phi,
            self.config.match_tolerance,
        )?;

        match found {
            Some(rcs) => {
                trace!("corner ({frequency:?}, {direction:?}) at ({theta:?}, {phi:?}) = {rcs:?}");
                Ok(rcs)
            }
            None => {
                warn!(
                    "no samples at frequency {frequency:?}, direction {direction:?}; using {:?}",
                    self.config.missing_value
                );
                Ok(self.config.missing_value)
            }
        }
    }
}
