//! One-line text summaries of evaluated queries.

use std::fmt::{self, Debug, Display};

use num_traits::Float;

use crate::{RcsEngine, Result};

/// How the incident direction of a query was given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Incidence<T> {
    /// Catalog id, possibly fractional
    Direction(T),
    /// Spherical angles in degrees
    Spherical { theta: T, phi: T },
}

/// A query together with its estimated RCS.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report<T> {
    pub frequency: T,
    pub incidence: Incidence<T>,
    pub theta: T,
    pub phi: T,
    pub rcs: T,
}

impl<T: Float + Debug> Report<T> {
    /// Evaluate [`RcsEngine::rcs_at_direction`] and keep the inputs alongside.
    pub fn at_direction(
        engine: &RcsEngine<'_, T>,
        frequency: T,
        direction: T,
        theta: T,
        phi: T,
    ) -> Result<Self> {
        Ok(Self {
            frequency,
            incidence: Incidence::Direction(direction),
            theta,
            phi,
            rcs: engine.rcs_at_direction(frequency, direction, theta, phi)?,
        })
    }

    /// Evaluate [`RcsEngine::rcs_at_incidence`] and keep the inputs alongside.
    pub fn at_incidence(
        engine: &RcsEngine<'_, T>,
        frequency: T,
        incident_theta: T,
        incident_phi: T,
        theta: T,
        phi: T,
    ) -> Result<Self> {
        Ok(Self {
            frequency,
            incidence: Incidence::Spherical {
                theta: incident_theta,
                phi: incident_phi,
            },
            theta,
            phi,
            rcs: engine.rcs_at_incidence(frequency, incident_theta, incident_phi, theta, phi)?,
        })
    }
}

impl<T: Display> Display for Report<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frequency={:.1} MHz, ", self.frequency)?;
        match &self.incidence {
            Incidence::Direction(d) => write!(f, "direction={d:.1}, ")?,
            Incidence::Spherical { theta, phi } => {
                write!(f, "incidence=({theta:.1}°, {phi:.1}°), ")?
            }
        }
        write!(
            f,
            "theta={:.1}°, phi={:.1}°, RCS={:.2} dB(m²)",
            self.theta, self.phi, self.rcs
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Sample;

    #[test]
    fn test_display() {
        let samples = [
            Sample::new(5.0_f64, 1.0, 45.0, 90.0, -12.5),
            Sample::new(5.0, 2.0, 45.0, 90.0, -20.0),
        ];
        let engine = RcsEngine::new(&samples).unwrap();

        let r = Report::at_direction(&engine, 10.0, 1.0, 45.0, 90.0).unwrap();
        assert_eq!(r.rcs, -12.5);
        assert_eq!(
            r.to_string(),
            "frequency=10.0 MHz, direction=1.0, theta=45.0°, phi=90.0°, RCS=-12.50 dB(m²)"
        );

        let r = Report::at_incidence(&engine, 5.0, 0.0, 0.0, 45.0, -270.0).unwrap();
        assert_eq!(r.rcs, -20.0);
        assert_eq!(
            r.to_string(),
            "frequency=5.0 MHz, incidence=(0.0°, 0.0°), theta=45.0°, phi=-270.0°, RCS=-20.00 dB(m²)"
        );
    }
}
