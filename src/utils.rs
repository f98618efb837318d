//! Convenience methods for constructing sample tables in a way that echoes,
//! but does not exactly match, methods common in scripting languages.
use itertools::Itertools;
use num_traits::Float;

use crate::sample::Sample;
use crate::{cast, Result};

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Result<Vec<T>>
where
    T: Float,
{
    match n {
        0 => Ok(Vec::new()),
        1 => Ok(vec![start]),
        _ => {
            let dx: T = (stop - start) / cast::<T, _>(n - 1)?;
            (0..n)
                .map(|i| -> Result<T> { Ok(start + cast::<T, _>(i)? * dx) })
                .collect()
        }
    }
}

/// Generates a full table over every combination of the given axes,
/// in C ordering (frequency varies slowest, phi fastest).
///
/// `rcs` is called as `rcs(frequency, incident_direction, theta, phi)`.
pub fn sample_grid<T, F>(
    frequencies: &[T],
    directions: &[T],
    thetas: &[T],
    phis: &[T],
    mut rcs: F,
) -> Vec<Sample<T>>
where
    T: Float,
    F: FnMut(T, T, T, T) -> T,
{
    [frequencies, directions, thetas, phis]
        .into_iter()
        .map(|axis| axis.iter().copied())
        .multi_cartesian_product()
        .map(|p| Sample::new(p[0], p[1], p[2], p[3], rcs(p[0], p[1], p[2], p[3])))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0_f64, 1.0, 5).unwrap(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(2.0_f64, 9.0, 1).unwrap(), vec![2.0]);
        assert!(linspace(2.0_f64, 9.0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_sample_grid_ordering() {
        let grid = sample_grid(&[5.0_f64, 15.0], &[1.0, 2.0], &[0.0], &[0.0, 90.0], |f, d, _, p| {
            -(f + d + p / 90.0)
        });
        assert_eq!(grid.len(), 8);
        assert_eq!(grid[0], Sample::new(5.0, 1.0, 0.0, 0.0, -6.0));
        assert_eq!(grid[1], Sample::new(5.0, 1.0, 0.0, 90.0, -7.0));
        assert_eq!(grid[2], Sample::new(5.0, 2.0, 0.0, 0.0, -7.0));
        assert_eq!(grid[7], Sample::new(15.0, 2.0, 0.0, 90.0, -18.0));
    }
}
