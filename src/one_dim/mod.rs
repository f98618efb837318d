//! One-dimensional bracketing along an independent axis (frequency or
//! discrete incident direction).
//!
//! Breakpoints are the distinct, sorted values of one sample field. Locating an
//! observation among them yields the two breakpoints to blend, clamped to the
//! ends of the axis when the observation falls outside it.

pub mod linear;

use std::cmp::Ordering;

use num_traits::Float;

use crate::{RcsError, Result};

/// Extrapolation flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extrap {
    Inside,
    OutsideLow,
    OutsideHigh,
}

/// The pair of breakpoints surrounding an observation point.
///
/// `lo <= hi` always holds. Outside the axis, or exactly on a breakpoint,
/// both ends are the same breakpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket<T> {
    pub lo: T,
    pub hi: T,
    pub extrap: Extrap,
}

impl<T: Float> Bracket<T> {
    /// Whether both ends collapsed onto a single breakpoint.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.lo == self.hi
    }
}

/// Distinct values of an axis in increasing order. NaN entries are dropped.
pub fn breakpoints<T: Float>(values: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut grid: Vec<T> = values.into_iter().filter(|v| !v.is_nan()).collect();
    grid.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    grid.dedup();
    grid
}

/// Find the breakpoints on either side of `loc` in a sorted, deduplicated grid.
///
/// # Errors
/// * If the grid is empty
#[inline]
pub fn bracket<T: Float>(grid: &[T], loc: T) -> Result<Bracket<T>> {
    let (&first, &last) = match (grid.first(), grid.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(RcsError::EmptyDataset),
    };

    // Index of the first breakpoint at or above the observation
    let i = grid.partition_point(|v| *v < loc);

    let b = match i {
        _ if i == grid.len() => Bracket {
            lo: last,
            hi: last,
            extrap: Extrap::OutsideHigh,
        },
        _ if grid[i] == loc => Bracket {
            lo: loc,
            hi: loc,
            extrap: Extrap::Inside,
        },
        0 => Bracket {
            lo: first,
            hi: first,
            extrap: Extrap::OutsideLow,
        },
        _ => Bracket {
            lo: grid[i - 1],
            hi: grid[i],
            extrap: Extrap::Inside,
        },
    };

    Ok(b)
}
